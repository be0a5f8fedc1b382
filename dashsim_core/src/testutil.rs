//! In-memory sink and fixed-step context used by the engine's unit tests.

use async_trait::async_trait;
use dashsim_env::{DashContext, MetricSink};
use std::sync::Mutex;
use std::time::Duration;

struct TestCard {
    value: String,
    controls: Vec<bool>,
}

/// Minimal card store mirroring the reference page.
pub struct TestSink {
    cards: Mutex<Vec<(String, TestCard)>>,
}

impl TestSink {
    /// Three cards with the reference page's authored values and two
    /// enabled controls each.
    pub fn reference() -> Self {
        let card = |id: &str, value: &str| {
            (
                id.to_string(),
                TestCard {
                    value: value.to_string(),
                    controls: vec![false, false],
                },
            )
        };
        Self {
            cards: Mutex::new(vec![
                card("metric-orders", "1250"),
                card("metric-tickets", "87"),
                card("metric-incidents", "3"),
            ]),
        }
    }

    pub fn value(&self, sink_id: &str) -> String {
        self.read_value(sink_id).expect("card should exist")
    }

    pub fn set_value(&self, sink_id: &str, raw: &str) {
        let mut cards = self.cards.lock().unwrap();
        let card = cards
            .iter_mut()
            .find(|(id, _)| id == sink_id)
            .expect("card should exist");
        card.1.value = raw.to_string();
    }
}

impl MetricSink for TestSink {
    fn read_value(&self, sink_id: &str) -> Option<String> {
        let cards = self.cards.lock().unwrap();
        cards
            .iter()
            .find(|(id, _)| id == sink_id)
            .map(|(_, card)| card.value.clone())
    }

    fn write_value(&self, sink_id: &str, value: i64) -> bool {
        let mut cards = self.cards.lock().unwrap();
        match cards.iter_mut().find(|(id, _)| id == sink_id) {
            Some((_, card)) => {
                card.value = value.to_string();
                true
            }
            None => false,
        }
    }

    fn set_control_disabled(&self, sink_id: &str, control_index: usize, disabled: bool) -> bool {
        let mut cards = self.cards.lock().unwrap();
        match cards
            .iter_mut()
            .find(|(id, _)| id == sink_id)
            .and_then(|(_, card)| card.controls.get_mut(control_index))
        {
            Some(flag) => {
                *flag = disabled;
                true
            }
            None => false,
        }
    }

    fn control_disabled(&self, sink_id: &str, control_index: usize) -> Option<bool> {
        let cards = self.cards.lock().unwrap();
        cards
            .iter()
            .find(|(id, _)| id == sink_id)
            .and_then(|(_, card)| card.controls.get(control_index))
            .copied()
    }
}

/// Context whose walk step is a fixed constant and whose sleep returns
/// immediately. Enough for everything except the scheduler loop.
pub struct FixedStepContext {
    step: u32,
}

impl FixedStepContext {
    pub fn new(step: u32) -> Self {
        Self { step }
    }
}

#[async_trait]
impl DashContext for FixedStepContext {
    fn now(&self) -> Duration {
        Duration::ZERO
    }

    async fn sleep(&self, _duration: Duration) {}

    fn spawn<F>(&self, _name: &str, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(future);
    }

    fn walk_step(&self, bound: u32) -> u32 {
        self.step.min(bound)
    }

    fn seed(&self) -> u64 {
        0
    }
}
