//! Virtual-clock context implementing DashContext for deterministic replay.

use async_trait::async_trait;
use dashsim_env::DashContext;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fixture context backed by deterministic time and RNG.
///
/// This implements `DashContext` using:
/// - A virtual clock that can be advanced manually
/// - A seeded ChaCha8 RNG for the live-mode walk steps
/// - Simulated sleep that advances virtual time
pub struct VirtualContext {
    /// Master seed for this replay
    seed: u64,

    /// Current virtual time (nanoseconds since replay start)
    virtual_time_ns: Arc<Mutex<u64>>,

    /// Deterministic RNG for walk steps
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl VirtualContext {
    /// Creates a new VirtualContext with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            virtual_time_ns: Arc::new(Mutex::new(0)),
            rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }

    /// Creates an Arc-wrapped context for sharing.
    pub fn shared(seed: u64) -> Arc<Self> {
        Arc::new(Self::new(seed))
    }

    /// Advances virtual time by the given duration.
    pub fn advance_time(&self, duration: Duration) {
        let mut time = self.virtual_time_ns.lock().unwrap();
        *time += duration.as_nanos() as u64;
    }

    /// Returns the current virtual time in nanoseconds.
    pub fn time_ns(&self) -> u64 {
        *self.virtual_time_ns.lock().unwrap()
    }
}

impl Clone for VirtualContext {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            virtual_time_ns: Arc::clone(&self.virtual_time_ns),
            rng: Arc::clone(&self.rng),
        }
    }
}

#[async_trait]
impl DashContext for VirtualContext {
    fn now(&self) -> Duration {
        Duration::from_nanos(*self.virtual_time_ns.lock().unwrap())
    }

    async fn sleep(&self, duration: Duration) {
        // In replay, sleep advances virtual time without suspending
        self.advance_time(duration);
    }

    fn spawn<F>(&self, name: &str, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let _name = name.to_string();
        tokio::spawn(async move {
            future.await;
        });
    }

    fn walk_step(&self, bound: u32) -> u32 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(0..=bound)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
