//! Run termination: death causes, endings and the halt signal
//!
//! A fatal outcome travels up from an event or from rationing as
//! `Err(Halt::Fatal(..))`. The turn loop is the only place that turns it into
//! a finished run.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

// ============================================================================
// Death causes
// ============================================================================

/// Why the player died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DeathCause {
    /// Water or food was empty when the day's ration was due
    Starvation,
    /// Refused to pay the armed trader
    Extortion,
    /// Sheltered a disguised alien with no weapon at hand
    Alien,
}

impl DeathCause {
    /// Message shown to the player and stored in the ending
    pub const fn message(self) -> &'static str {
        match self {
            DeathCause::Starvation => "You lacked the minimum daily intake (food or water).",
            DeathCause::Extortion => {
                "You refused the extortion. At night they break in and shoot you."
            }
            DeathCause::Alien => "You were killed by an alien disguised as a human.",
        }
    }

    /// Look up a cause by its message text
    pub fn from_message(text: &str) -> Option<Self> {
        DeathCause::iter().find(|cause| cause.message() == text)
    }
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// Halt signal
// ============================================================================

/// Input to the decision-provider closed before the run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input closed before the run finished")]
pub struct Hangup;

/// Anything that stops a day from resolving normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Halt {
    /// The player died
    #[error("{0}")]
    Fatal(DeathCause),

    /// No more decisions can be read
    #[error(transparent)]
    Hangup(#[from] Hangup),
}

/// Result of one resolution step: `Ok(())` means the run continues.
pub type Outcome = Result<(), Halt>;

// ============================================================================
// Endings
// ============================================================================

const RESCUED: &str = "Rescued";
const DEATH_PREFIX: &str = "Death: ";

/// Final classification of a finished run.
///
/// Serialized as `"Rescued"` or `"Death: <cause message>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Ending {
    /// Held on until the rescue team arrived
    Rescued,
    /// Died before the rescue
    Died(DeathCause),
}

impl Ending {
    pub const fn death_cause(self) -> Option<DeathCause> {
        match self {
            Ending::Rescued => None,
            Ending::Died(cause) => Some(cause),
        }
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::Rescued => f.write_str(RESCUED),
            Ending::Died(cause) => write!(f, "{DEATH_PREFIX}{cause}"),
        }
    }
}

/// An ending string that matches no known classification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ending: {0:?}")]
pub struct UnknownEnding(pub String);

impl FromStr for Ending {
    type Err = UnknownEnding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == RESCUED {
            return Ok(Ending::Rescued);
        }
        s.strip_prefix(DEATH_PREFIX)
            .and_then(DeathCause::from_message)
            .map(Ending::Died)
            .ok_or_else(|| UnknownEnding(s.to_string()))
    }
}

impl From<Ending> for String {
    fn from(ending: Ending) -> Self {
        ending.to_string()
    }
}

impl TryFrom<String> for Ending {
    type Error = UnknownEnding;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ending_text() {
        assert_eq!(Ending::Rescued.to_string(), "Rescued");
        assert_eq!(
            Ending::Died(DeathCause::Alien).to_string(),
            "Death: You were killed by an alien disguised as a human."
        );
    }

    #[test]
    fn test_ending_parse_every_cause() {
        for cause in DeathCause::iter() {
            let text = Ending::Died(cause).to_string();
            assert_eq!(text.parse::<Ending>(), Ok(Ending::Died(cause)));
        }
        assert_eq!("Rescued".parse::<Ending>(), Ok(Ending::Rescued));
    }

    #[test]
    fn test_ending_parse_unknown() {
        assert!("Death: eaten by a grue".parse::<Ending>().is_err());
        assert!("rescued".parse::<Ending>().is_err());
    }

    #[test]
    fn test_ending_json() {
        let json = serde_json::to_string(&Ending::Died(DeathCause::Starvation)).unwrap();
        assert_eq!(
            json,
            "\"Death: You lacked the minimum daily intake (food or water).\""
        );
        let back: Ending = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Ending::Died(DeathCause::Starvation));
    }

    #[test]
    fn test_halt_from_hangup() {
        fn read() -> Result<u8, Hangup> {
            Err(Hangup)
        }
        fn step() -> Outcome {
            read()?;
            Ok(())
        }
        assert_eq!(step(), Err(Halt::Hangup(Hangup)));
    }

    #[test]
    fn test_ending_queries() {
        assert_eq!(Ending::Rescued.death_cause(), None);
        assert_eq!(
            Ending::Died(DeathCause::Extortion).death_cause(),
            Some(DeathCause::Extortion)
        );
    }
}
