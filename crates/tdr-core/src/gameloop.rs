//! Main turn loop
//!
//! A run is a fixed schedule of distinct events, one per day. Each day the
//! event resolves, then the day's rations are eaten. A fatal outcome at any
//! point ends the run; surviving the last ration ends it in rescue.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{DAILY_RATION, DEFAULT_DAYS};
use crate::death::{DeathCause, Ending, Halt, Hangup, Outcome};
use crate::event::EventKind;
use crate::interface::Interface;
use crate::record::{RunRecord, RunRecorder, RunReport};
use crate::rng::GameRng;
use crate::state::ResourceState;

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Day survived, more to come
    Continue,
    /// Player died with this cause
    PlayerDied(DeathCause),
    /// Last day survived
    Rescued,
}

/// Invalid engine setup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("a run needs between 1 and {max} days, got {days}")]
    InvalidDays { days: u32, max: usize },
}

/// Turn engine for a single run
#[derive(Debug)]
pub struct GameLoop {
    state: ResourceState,
    rng: GameRng,
    schedule: Vec<EventKind>,
    next_day: usize,
}

impl GameLoop {
    /// Create the canonical three-day run
    pub fn new(rng: GameRng) -> Self {
        Self::draw(rng, &EventKind::ALL, DEFAULT_DAYS as usize)
    }

    /// Create a run lasting `days` days, drawn from the full catalog
    pub fn with_days(rng: GameRng, days: u32) -> Result<Self, EngineError> {
        Self::with_catalog(rng, &EventKind::ALL, days)
    }

    /// Create a run drawing `days` distinct events from `catalog`.
    ///
    /// The schedule is sampled here, before any event, so it is always the
    /// first thing taken from the random stream.
    pub fn with_catalog(
        rng: GameRng,
        catalog: &[EventKind],
        days: u32,
    ) -> Result<Self, EngineError> {
        if days == 0 || days as usize > catalog.len() {
            return Err(EngineError::InvalidDays {
                days,
                max: catalog.len(),
            });
        }

        Ok(Self::draw(rng, catalog, days as usize))
    }

    fn draw(mut rng: GameRng, catalog: &[EventKind], days: usize) -> Self {
        let schedule = rng.sample(catalog, days);
        debug!(seed = rng.seed(), ?schedule, "schedule drawn");

        Self {
            state: ResourceState::new(),
            rng,
            schedule,
            next_day: 0,
        }
    }

    /// Get reference to run state
    pub fn state(&self) -> &ResourceState {
        &self.state
    }

    /// Events in the order they will be played
    pub fn schedule(&self) -> &[EventKind] {
        &self.schedule
    }

    /// Play one day.
    ///
    /// A fatal outcome is caught here and becomes the run's ending. A hangup
    /// rolls the day back so the next tick replays it; only the day counter
    /// keeps pointing at the interrupted day. Ticking a finished run does
    /// nothing.
    pub fn tick(&mut self, ui: &mut dyn Interface) -> Result<GameLoopResult, Hangup> {
        if let Some(ending) = self.state.ending() {
            return Ok(match ending.death_cause() {
                Some(cause) => GameLoopResult::PlayerDied(cause),
                None => GameLoopResult::Rescued,
            });
        }
        // An unfinished run always has its current day left in the schedule.
        let event = self.schedule[self.next_day];
        let before = self.state.clone();

        let day = self.next_day as u32 + 1;
        self.state.day = day;
        ui.message(&format!("\n=== Day {day} ==="));
        debug!(day, %event, "day started");

        let outcome = event
            .run(&mut self.state, &mut self.rng, ui)
            .and_then(|()| consume_daily(&mut self.state, ui));

        match outcome {
            Ok(()) => {
                self.next_day += 1;
                if self.next_day < self.schedule.len() {
                    return Ok(GameLoopResult::Continue);
                }
                self.state.finish_rescued();
                ui.message(&format!(
                    "\nYou held on through the end of Day {day}. The rescue team arrives. You are saved!"
                ));
                info!(day, "rescued");
                Ok(GameLoopResult::Rescued)
            }
            Err(Halt::Fatal(cause)) => {
                self.next_day += 1;
                self.state.finish_dead(cause);
                ui.message(&format!("\n[DEATH] {cause}"));
                info!(day, ?cause, "died");
                Ok(GameLoopResult::PlayerDied(cause))
            }
            Err(Halt::Hangup(hangup)) => {
                info!(day, "input closed mid-run");
                self.state = before;
                self.state.day = day;
                Err(hangup)
            }
        }
    }

    /// Play days until the run ends.
    ///
    /// After a hangup, calling this again picks up at the interrupted day.
    pub fn run(&mut self, ui: &mut dyn Interface) -> Result<Ending, Hangup> {
        loop {
            match self.tick(ui)? {
                GameLoopResult::Continue => {}
                GameLoopResult::Rescued => return Ok(Ending::Rescued),
                GameLoopResult::PlayerDied(cause) => return Ok(Ending::Died(cause)),
            }
        }
    }
}

/// Eat the day's rations.
///
/// Dies if either supply is already empty; otherwise both drop by one ration.
pub fn consume_daily(state: &mut ResourceState, ui: &mut dyn Interface) -> Outcome {
    state.append_log("Consume daily rations");
    if state.water() <= 0 || state.food() <= 0 {
        return Err(Halt::Fatal(DeathCause::Starvation));
    }
    state.adjust_water(-DAILY_RATION);
    state.adjust_food(-DAILY_RATION);
    ui.message(&format!(
        "Daily consumption: water -1/3, food -1/3. Remaining \u{2014} Water {}/3, Food {}/3.",
        state.water(),
        state.food()
    ));
    Ok(())
}

/// Play a whole run and record it.
///
/// The record is appended exactly once, whether the run ends in rescue, in
/// death, or because input closed. `seed` is the seed the player asked for,
/// if any; it is what the record stores.
pub fn play<R: RunRecorder + ?Sized>(
    mut game: GameLoop,
    seed: Option<i64>,
    ui: &mut dyn Interface,
    recorder: &mut R,
) -> Result<RunReport, R::Error> {
    let started_at = Utc::now();
    let result = game.run(ui);
    let record = RunRecord::new(started_at, seed, game.state());
    recorder.append(&record)?;
    Ok(RunReport {
        record,
        hangup: result.is_err(),
    })
}
