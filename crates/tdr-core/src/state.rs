//! Survivor resource state
//!
//! Water and food are counted in thirds (0..=3). Every change goes through
//! [`ResourceState::adjust_water`] or [`ResourceState::adjust_food`], which
//! clamp, so the range holds after any operation.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_THIRDS, MIN_THIRDS};
use crate::death::{DeathCause, Ending};

fn clamp_thirds(value: i32) -> i32 {
    value.clamp(MIN_THIRDS, MAX_THIRDS)
}

/// Mutable state of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    /// Current day, 1-based
    pub day: u32,
    water: i32,
    food: i32,
    /// Carrying a working weapon
    pub weapon: bool,
    alive: bool,
    ending: Option<Ending>,
    log: Vec<String>,
}

impl Default for ResourceState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceState {
    /// Starting supplies: one full bottle, one full can, no weapon.
    pub fn new() -> Self {
        Self {
            day: 1,
            water: MAX_THIRDS,
            food: MAX_THIRDS,
            weapon: false,
            alive: true,
            ending: None,
            log: Vec::new(),
        }
    }

    /// State with the given supplies, clamped. Used to set up scenarios.
    pub fn with_supplies(water: i32, food: i32, weapon: bool) -> Self {
        Self {
            water: clamp_thirds(water),
            food: clamp_thirds(food),
            weapon,
            ..Self::new()
        }
    }

    pub fn water(&self) -> i32 {
        self.water
    }

    pub fn food(&self) -> i32 {
        self.food
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn adjust_water(&mut self, delta: i32) {
        self.water = clamp_thirds(self.water.saturating_add(delta));
    }

    pub fn adjust_food(&mut self, delta: i32) {
        self.food = clamp_thirds(self.food.saturating_add(delta));
    }

    /// Append a line to the audit log
    pub fn append_log(&mut self, text: impl Into<String>) {
        self.log.push(text.into());
    }

    /// Mark the run as rescued. Has no effect once an ending is set.
    pub(crate) fn finish_rescued(&mut self) {
        if self.ending.is_none() {
            self.ending = Some(Ending::Rescued);
        }
    }

    /// Mark the run as dead. Has no effect once an ending is set.
    pub(crate) fn finish_dead(&mut self, cause: DeathCause) {
        if self.ending.is_none() {
            self.alive = false;
            self.ending = Some(Ending::Died(cause));
        }
    }

    /// One-line status shown before every decision
    pub fn status_line(&self) -> String {
        format!(
            "[Status] Water {}/{MAX_THIRDS} | Food {}/{MAX_THIRDS} | Weapon {}",
            self.water,
            self.food,
            if self.weapon { "Yes" } else { "No" }
        )
    }

    /// Copy of every reported field
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            day: self.day,
            water_thirds: self.water,
            food_thirds: self.food,
            weapon: self.weapon,
            alive: self.alive,
            ending: self.ending,
        }
    }
}

/// Frozen view of a [`ResourceState`], as written to the run log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub day: u32,
    pub water_thirds: i32,
    pub food_thirds: i32,
    pub weapon: bool,
    pub alive: bool,
    pub ending: Option<Ending>,
}
