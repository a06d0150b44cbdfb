//! Daily event catalog
//!
//! Each day presents exactly one of these encounters. An event shows its
//! scene, asks for a decision, applies that branch and may roll for a
//! delayed consequence. Refusals never roll; accepting always rolls, even
//! when there was nothing left to give.

use strum::{Display, EnumCount, EnumIter};
use tracing::debug;

use crate::consts::{REPAY_CHANCE, STRANGER_HUMAN_CHANCE, WEAPON_DELIVERY_CHANCE};
use crate::death::{DeathCause, Halt, Outcome};
use crate::interface::Interface;
use crate::rng::GameRng;
use crate::state::ResourceState;

const DECISION_PROMPT: &str = "Your decision?";

/// The player's answer to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Option 1: give, trade or shelter
    Accept,
    /// Option 2: refuse or ignore
    Refuse,
}

impl Decision {
    /// Map a 1-based option index. Anything but 1 is a refusal.
    pub fn from_option(index: usize) -> Self {
        if index == 1 {
            Decision::Accept
        } else {
            Decision::Refuse
        }
    }
}

/// Event variants, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum EventKind {
    /// Neighbor asks for water, promises food
    ShareWater,
    /// Neighbor asks for food, promises water
    ShareFood,
    /// Armed stranger demands rations for a weapon
    TradeWeapon,
    /// Stranger asks for shelter; may be an alien
    ShelterStranger,
}

impl EventKind {
    /// Full catalog. Day schedules are sampled from this list.
    pub const ALL: [EventKind; EventKind::COUNT] = [
        EventKind::ShareWater,
        EventKind::ShareFood,
        EventKind::TradeWeapon,
        EventKind::ShelterStranger,
    ];

    /// Audit log line written when the event starts
    pub const fn log_label(self) -> &'static str {
        match self {
            EventKind::ShareWater => "Event: neighbor asks for water",
            EventKind::ShareFood => "Event: neighbor asks for food",
            EventKind::TradeWeapon => "Event: trade food+water for weapon",
            EventKind::ShelterStranger => "Event: shelter a stranger",
        }
    }

    pub const fn scene(self) -> &'static str {
        match self {
            EventKind::ShareWater => {
                "DAWN \u{2014} A weak voice through the wall: \"Can you spare 1/3 bottle of water? I'll repay with food tonight.\""
            }
            EventKind::ShareFood => {
                "DAY \u{2014} Someone knocks softly: \"Could you spare 1/3 of a can? I'll bring water later.\""
            }
            EventKind::TradeWeapon => {
                "DUSK \u{2014} A hard voice at the door: \"Give me 1/3 water and 1/3 food. I'll give you a weapon. Fair trade.\""
            }
            EventKind::ShelterStranger => {
                "DAWN \u{2014} A man pleads: \"Please shelter me. I carry two bottles of water and two cans. I just need a safe place.\""
            }
        }
    }

    /// Option labels, accept first
    pub const fn options(self) -> [&'static str; 2] {
        match self {
            EventKind::ShareWater => ["Give 1/3 bottle of water", "Refuse / ignore"],
            EventKind::ShareFood => ["Give 1/3 of a can", "Refuse / ignore"],
            EventKind::TradeWeapon => ["Give (1/3 water + 1/3 food)", "Refuse"],
            EventKind::ShelterStranger => ["Shelter him", "Refuse to shelter"],
        }
    }

    /// Present the event, read a decision and resolve it.
    pub fn run(self, state: &mut ResourceState, rng: &mut GameRng, ui: &mut dyn Interface) -> Outcome {
        state.append_log(self.log_label());
        ui.message(self.scene());
        ui.status(state);

        let index = ui.choose(DECISION_PROMPT, &self.options())?;
        let decision = Decision::from_option(index);
        debug!(day = state.day, event = %self, ?decision, "decision made");

        self.resolve(decision, state, ui, |percent| {
            let hit = rng.percent(percent);
            debug!(percent, hit, "roll");
            hit
        })
    }

    /// Apply `decision`. `roll(p)` answers a p-percent chance.
    pub fn resolve(
        self,
        decision: Decision,
        state: &mut ResourceState,
        ui: &mut dyn Interface,
        mut roll: impl FnMut(u32) -> bool,
    ) -> Outcome {
        match (self, decision) {
            (EventKind::ShareWater, Decision::Accept) => {
                if state.water() <= 0 {
                    ui.message("You feel the empty bottle. There is no water to share.");
                } else {
                    state.adjust_water(-1);
                    ui.message("You pass roughly a third of your water through the crack.");
                }
                if roll(REPAY_CHANCE) {
                    state.adjust_food(2);
                    ui.message("Night falls. The neighbor keeps the promise: +2/3 can of food.");
                } else {
                    ui.message("You wait into the night. No one returns. The promise was empty.");
                }
                Ok(())
            }
            (EventKind::ShareWater, Decision::Refuse) => {
                ui.message("You stay silent. Nothing else happens.");
                Ok(())
            }

            (EventKind::ShareFood, Decision::Accept) => {
                if state.food() <= 0 {
                    ui.message("There's no food left to share.");
                } else {
                    state.adjust_food(-1);
                    ui.message("You hand out about a third of your can.");
                }
                if roll(REPAY_CHANCE) {
                    state.adjust_water(2);
                    ui.message("That night they keep the promise: +2/3 bottle of water.");
                } else {
                    ui.message("No repayment arrives. Only the wind moves through the cracks.");
                }
                Ok(())
            }
            (EventKind::ShareFood, Decision::Refuse) => {
                ui.message("You refuse. Footsteps fade away.");
                Ok(())
            }

            (EventKind::TradeWeapon, Decision::Accept) => {
                state.adjust_water(-1);
                state.adjust_food(-1);
                ui.message("You hand over the rations.");
                if roll(WEAPON_DELIVERY_CHANCE) {
                    state.weapon = true;
                    ui.message(
                        "Late at night, a cold object slides under the door: a handgun. You have a weapon.",
                    );
                } else {
                    ui.message("They vanish with your supplies. No weapon arrives.");
                }
                Ok(())
            }
            (EventKind::TradeWeapon, Decision::Refuse) => Err(Halt::Fatal(DeathCause::Extortion)),

            (EventKind::ShelterStranger, Decision::Accept) => {
                if roll(STRANGER_HUMAN_CHANCE) {
                    ui.message(
                        "He is a real survivor. Grateful, he shares supplies: +1/3 water, +1/3 food.",
                    );
                    state.adjust_water(1);
                    state.adjust_food(1);
                    return Ok(());
                }
                ui.message("His skin ripples; an alien form bursts forth and attacks!");
                if !state.weapon {
                    return Err(Halt::Fatal(DeathCause::Alien));
                }
                ui.message(
                    "You fire the handgun and drop the creature, but the weapon is ruined in the struggle.",
                );
                state.weapon = false;
                Ok(())
            }
            (EventKind::ShelterStranger, Decision::Refuse) => {
                ui.message("You keep the door barred. The stranger leaves into the ruins.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::ScriptedInterface;

    fn resolve(
        kind: EventKind,
        decision: Decision,
        state: &mut ResourceState,
        hit: bool,
    ) -> (Outcome, Vec<u32>) {
        let mut ui = ScriptedInterface::first_option();
        let mut rolls = Vec::new();
        let outcome = kind.resolve(decision, state, &mut ui, |p| {
            rolls.push(p);
            hit
        });
        (outcome, rolls)
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(EventKind::ALL.len(), 4);
        assert_eq!(EventKind::ALL[0], EventKind::ShareWater);
        assert_eq!(EventKind::ALL[3], EventKind::ShelterStranger);
    }

    #[test]
    fn test_decision_from_option() {
        assert_eq!(Decision::from_option(1), Decision::Accept);
        assert_eq!(Decision::from_option(2), Decision::Refuse);
    }

    #[test]
    fn test_share_water_repaid() {
        let mut state = ResourceState::with_supplies(3, 2, false);
        let (outcome, rolls) = resolve(EventKind::ShareWater, Decision::Accept, &mut state, true);
        assert_eq!(outcome, Ok(()));
        assert_eq!(rolls, vec![50]);
        assert_eq!((state.water(), state.food()), (2, 3));
    }

    #[test]
    fn test_share_water_empty_still_rolls() {
        let mut state = ResourceState::with_supplies(0, 1, false);
        let (outcome, rolls) = resolve(EventKind::ShareWater, Decision::Accept, &mut state, true);
        assert_eq!(outcome, Ok(()));
        assert_eq!(rolls, vec![50]);
        assert_eq!((state.water(), state.food()), (0, 3));
    }

    #[test]
    fn test_share_food_broken_promise() {
        let mut state = ResourceState::with_supplies(1, 3, false);
        let (_, rolls) = resolve(EventKind::ShareFood, Decision::Accept, &mut state, false);
        assert_eq!(rolls, vec![50]);
        assert_eq!((state.water(), state.food()), (1, 2));
    }

    #[test]
    fn test_refusals_never_roll() {
        for kind in [EventKind::ShareWater, EventKind::ShareFood, EventKind::ShelterStranger] {
            let mut state = ResourceState::with_supplies(2, 2, false);
            let (outcome, rolls) = resolve(kind, Decision::Refuse, &mut state, true);
            assert_eq!(outcome, Ok(()), "{kind}");
            assert!(rolls.is_empty(), "{kind} rolled on refusal");
            assert_eq!((state.water(), state.food()), (2, 2));
        }
    }

    #[test]
    fn test_trade_refusal_is_fatal_without_roll() {
        let mut state = ResourceState::new();
        let (outcome, rolls) = resolve(EventKind::TradeWeapon, Decision::Refuse, &mut state, true);
        assert_eq!(outcome, Err(Halt::Fatal(DeathCause::Extortion)));
        assert!(rolls.is_empty());
    }

    #[test]
    fn test_trade_delivers_weapon() {
        let mut state = ResourceState::with_supplies(1, 0, false);
        let (outcome, rolls) = resolve(EventKind::TradeWeapon, Decision::Accept, &mut state, true);
        assert_eq!(outcome, Ok(()));
        assert_eq!(rolls, vec![45]);
        assert!(state.weapon);
        assert_eq!((state.water(), state.food()), (0, 0));
    }

    #[test]
    fn test_trade_swindled() {
        let mut state = ResourceState::new();
        resolve(EventKind::TradeWeapon, Decision::Accept, &mut state, false);
        assert!(!state.weapon);
        assert_eq!((state.water(), state.food()), (2, 2));
    }

    #[test]
    fn test_shelter_human_shares() {
        let mut state = ResourceState::with_supplies(3, 1, false);
        let (outcome, _) = resolve(EventKind::ShelterStranger, Decision::Accept, &mut state, true);
        assert_eq!(outcome, Ok(()));
        assert_eq!((state.water(), state.food()), (3, 2));
    }

    #[test]
    fn test_shelter_alien_armed_consumes_weapon() {
        let mut state = ResourceState::with_supplies(2, 2, true);
        let (outcome, _) = resolve(EventKind::ShelterStranger, Decision::Accept, &mut state, false);
        assert_eq!(outcome, Ok(()));
        assert!(!state.weapon);
        assert_eq!((state.water(), state.food()), (2, 2));
    }

    #[test]
    fn test_shelter_alien_unarmed_is_fatal() {
        let mut state = ResourceState::with_supplies(3, 3, false);
        let (outcome, _) = resolve(EventKind::ShelterStranger, Decision::Accept, &mut state, false);
        assert_eq!(outcome, Err(Halt::Fatal(DeathCause::Alien)));
    }

    #[test]
    fn test_run_logs_and_prompts() {
        let mut state = ResourceState::new();
        let mut rng = GameRng::new(5);
        let mut ui = ScriptedInterface::new([2]);
        let outcome = EventKind::ShareFood.run(&mut state, &mut rng, &mut ui);
        assert_eq!(outcome, Ok(()));
        assert_eq!(state.log(), ["Event: neighbor asks for food"]);
        assert_eq!(ui.prompts, vec!["Your decision?"]);
        assert_eq!(ui.messages[1], "[Status] Water 3/3 | Food 3/3 | Weapon No");
    }

    #[test]
    fn test_run_hangup_leaves_state() {
        let mut state = ResourceState::new();
        let mut rng = GameRng::new(5);
        let mut ui = ScriptedInterface::strict([]);
        let outcome = EventKind::TradeWeapon.run(&mut state, &mut rng, &mut ui);
        assert!(matches!(outcome, Err(Halt::Hangup(_))));
        assert_eq!((state.water(), state.food()), (3, 3));
        assert!(state.alive());
    }
}
