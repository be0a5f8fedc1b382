//! Core environment context trait for the DashSim engine.

use async_trait::async_trait;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// The central interface for Environment Interaction.
///
/// This trait abstracts time and randomness so that the simulation engine
/// can run against a real page runtime (tokio) or inside the fixture
/// harness (virtual clock).
///
/// # Implementations
///
/// - **Production**: `TokioContext` - wraps `tokio::time`, thread-local RNG
/// - **Fixtures**: `VirtualContext` - virtual clock, `ChaCha8Rng(seed)`
///
/// # Determinism
///
/// Every method that would normally introduce non-determinism (time, the
/// live-tick step) is controlled by the implementation.
#[async_trait]
pub trait DashContext: Send + Sync + 'static {
    /// Returns the monotonic time since context creation.
    ///
    /// In the fixture harness this is the virtual clock time.
    fn now(&self) -> Duration;

    /// Suspends execution for the given duration.
    ///
    /// In production: wraps `tokio::time::sleep`
    /// In fixtures: advances the virtual clock
    async fn sleep(&self, duration: Duration);

    /// Spawns a background task.
    ///
    /// The live-mode scheduler runs in a task spawned here so its
    /// lifetime is bound to the hosting runtime, not a caller's stack.
    fn spawn<F>(&self, name: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static;

    /// Draws one random-walk step, uniform over `[0, bound]` inclusive.
    ///
    /// This is the only entropy the engine consumes. The production
    /// implementation uses the thread-local RNG; the fixture harness
    /// draws from a seeded stream so live runs replay bit-for-bit.
    fn walk_step(&self, bound: u32) -> u32;

    /// Returns the context's seed (for logging/debugging).
    ///
    /// In production, returns 0 (not seeded).
    /// In fixtures, returns the master seed.
    fn seed(&self) -> u64;
}

/// Teardown token standing in for the hosting page's lifetime.
///
/// The original page binds its repeating timer to page unload; here that
/// implicit lifecycle is an explicit cloneable token. The scheduler checks
/// it between firings and stops once `teardown()` has been called from
/// anywhere. There is no way to "un-tear-down" a page.
#[derive(Debug, Clone, Default)]
pub struct PageLifetime {
    torn_down: Arc<AtomicBool>,
}

impl PageLifetime {
    /// Creates a live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the page has not been torn down.
    pub fn is_live(&self) -> bool {
        !self.torn_down.load(Ordering::Acquire)
    }

    /// Marks the page as unloaded. Idempotent.
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_starts_live() {
        let lifetime = PageLifetime::new();
        assert!(lifetime.is_live());
    }

    #[test]
    fn test_teardown_visible_through_clones() {
        let lifetime = PageLifetime::new();
        let observer = lifetime.clone();

        lifetime.teardown();
        assert!(!observer.is_live());

        // Idempotent
        observer.teardown();
        assert!(!lifetime.is_live());
    }
}
