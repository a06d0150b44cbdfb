//! Decision-provider and narrative output
//!
//! The engine never reads or prints by itself. Front ends implement
//! [`Interface`]; tests use [`ScriptedInterface`].

use std::collections::VecDeque;

use crate::death::Hangup;
use crate::state::ResourceState;

/// Channel between the engine and the player
pub trait Interface {
    /// Show a line of narrative
    fn message(&mut self, text: &str);

    /// Ask the player to pick one of `options`.
    ///
    /// Returns the 1-based index of a valid option. Implementations re-prompt
    /// on bad input; `Err(Hangup)` means no more input will ever arrive.
    fn choose(&mut self, prompt: &str, options: &[&str]) -> Result<usize, Hangup>;

    /// Show the current supplies
    fn status(&mut self, state: &ResourceState) {
        self.message(&state.status_line());
    }
}

/// Plays back a fixed list of choices and keeps every message.
///
/// Once the script runs out it keeps answering `fallback` (option 1 by
/// default), or hangs up if built with [`ScriptedInterface::strict`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInterface {
    script: VecDeque<usize>,
    fallback: Option<usize>,
    pub messages: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedInterface {
    /// Always pick the first option
    pub fn first_option() -> Self {
        Self {
            fallback: Some(1),
            ..Self::default()
        }
    }

    /// Play `choices` in order, then keep picking the first option
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: choices.into_iter().collect(),
            fallback: Some(1),
            ..Self::default()
        }
    }

    /// Play `choices` in order, then hang up
    pub fn strict(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: choices.into_iter().collect(),
            fallback: None,
            ..Self::default()
        }
    }

}

impl Interface for ScriptedInterface {
    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> Result<usize, Hangup> {
        self.prompts.push(prompt.to_string());
        // Out-of-range script entries are skipped, like a player typo.
        while let Some(choice) = self.script.pop_front() {
            if (1..=options.len()).contains(&choice) {
                return Ok(choice);
            }
        }
        match self.fallback {
            Some(choice) if (1..=options.len()).contains(&choice) => Ok(choice),
            _ => Err(Hangup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_then_fallback() {
        let mut ui = ScriptedInterface::new([2]);
        assert_eq!(ui.choose("?", &["a", "b"]), Ok(2));
        assert_eq!(ui.choose("?", &["a", "b"]), Ok(1));
        assert_eq!(ui.prompts.len(), 2);
    }

    #[test]
    fn test_strict_hangs_up() {
        let mut ui = ScriptedInterface::strict([1]);
        assert_eq!(ui.choose("?", &["a", "b"]), Ok(1));
        assert_eq!(ui.choose("?", &["a", "b"]), Err(Hangup));
    }

    #[test]
    fn test_invalid_entries_skipped() {
        let mut ui = ScriptedInterface::strict([0, 7, 2]);
        assert_eq!(ui.choose("?", &["a", "b"]), Ok(2));
        assert_eq!(ui.choose("?", &["a", "b"]), Err(Hangup));
    }

    #[test]
    fn test_status_goes_to_messages() {
        let mut ui = ScriptedInterface::first_option();
        ui.status(&ResourceState::new());
        assert_eq!(ui.messages, vec!["[Status] Water 3/3 | Food 3/3 | Weapon No"]);
    }
}
