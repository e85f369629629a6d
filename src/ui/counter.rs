//! Click counter.

use crate::config::Config;
use rand::{Rng, RngCore};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub value: i64,
    #[serde(skip)]
    step: i64,
    #[serde(skip)]
    shift_step: i64,
    #[serde(skip)]
    random_max: i64,
}

impl Counter {
    pub fn new(step: i64, shift_step: i64, random_max: i64) -> Self {
        Self {
            value: 0,
            step,
            shift_step,
            random_max,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.counter_step,
            config.counter_shift_step,
            config.counter_random_max,
        )
    }

    fn amount(&self, shift: bool) -> i64 {
        if shift { self.shift_step } else { self.step }
    }

    pub fn increase(&mut self, shift: bool) -> i64 {
        self.value = self.value.saturating_add(self.amount(shift));
        self.value
    }

    pub fn decrease(&mut self, shift: bool) -> i64 {
        self.value = self.value.saturating_sub(self.amount(shift));
        self.value
    }

    pub fn reset(&mut self) -> i64 {
        self.value = 0;
        self.value
    }

    /// Jump to a uniformly random value in `0..=random_max`.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) -> i64 {
        self.value = rng.gen_range(0..=self.random_max);
        self.value
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
