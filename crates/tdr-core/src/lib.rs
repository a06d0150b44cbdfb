//! tdr-core: turn engine for Three Days to Rescue
//!
//! This crate holds the resource model, the event catalog and the turn loop.
//! Apart from reading an options file it does no I/O: decisions and narrative
//! go through the [`Interface`] trait, and finished runs go to a
//! [`RunRecorder`].

pub mod death;
pub mod event;
pub mod interface;
pub mod options;
pub mod record;
pub mod state;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use death::{DeathCause, Ending, Halt, Hangup, Outcome};
pub use event::{Decision, EventKind};
pub use gameloop::{EngineError, GameLoop, GameLoopResult, consume_daily, play};
pub use interface::{Interface, ScriptedInterface};
pub use options::{OptionsError, RunOptions};
pub use record::{MemoryRecorder, RunRecord, RunRecorder, RunReport};
pub use rng::GameRng;
pub use state::{ResourceState, StateSnapshot};
