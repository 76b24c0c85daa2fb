use serde::{Deserialize, Serialize};

/// Monotonic tick counter driving age-dependent effects.
///
/// There is deliberately no reset: only a fresh [`SimulationState`](crate::SimulationState)
/// starts over at zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationClock {
    tick: u64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick, i.e. the value the next physics step reads ages against.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Increments the counter by exactly one and returns the new value.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_increments_by_one() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.advance(), 1);
        assert_eq!(clock.advance(), 2);
        assert_eq!(clock.tick(), 2);
    }
}
