//! Game constants

/// Resource levels are counted in thirds of a bottle or can
pub const MAX_THIRDS: i32 = 3;
pub const MIN_THIRDS: i32 = 0;

/// Days to survive before the rescue team arrives
pub const DEFAULT_DAYS: u32 = 3;

/// Thirds of water and food eaten at the end of every day
pub const DAILY_RATION: i32 = 1;

/// Roll thresholds, in percent
pub const REPAY_CHANCE: u32 = 50;
pub const WEAPON_DELIVERY_CHANCE: u32 = 45;
pub const STRANGER_HUMAN_CHANCE: u32 = 50;

/// Default run log, relative to the working directory
pub const DEFAULT_LOGFILE: &str = "runs.jsonl";
