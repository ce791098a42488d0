//! Turn-by-turn trip simulation.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::destination::{Destination, EventVariant};
use crate::event::{TripEvent, TripRng};
use crate::habitat::ModuleStates;
use crate::narrative;

/// One line of the ship's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnLogEntry {
    /// 1-based turn number.
    pub turn: u32,
    pub event: TripEvent,
    /// Module damaged by this turn's event, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damaged_module: Option<String>,
}

/// Everything a finished trip hands to the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub log: Vec<TurnLogEntry>,
    pub modules: ModuleStates,
}

impl Trip {
    pub fn damaging_turns(&self) -> usize {
        self.log.iter().filter(|e| e.damaged_module.is_some()).count()
    }
}

/// Fly the habitat to `destination`, one turn at a time.
///
/// Module states go in by value and come back updated; damage only ever
/// comes from `damage_risk` events. Any module, damaged or not, can be hit.
pub fn simulate(
    catalog: &Catalog,
    destination: Destination,
    mut modules: ModuleStates,
    variant: EventVariant,
    rng: &mut dyn TripRng,
) -> Trip {
    let total_turns = destination.total_turns();
    let probability = destination.event_probability(variant);
    let mut log = Vec::with_capacity(total_turns as usize);

    for turn in 1..=total_turns {
        let event = if rng.roll() < probability {
            narrative::draw_archetype_event(catalog, variant, &modules, rng)
        } else {
            narrative::quiet_turn_event(catalog, variant, &modules, turn)
        };

        let damaged_module = if event.is_damaging() && !modules.is_empty() {
            let index = rng.pick(modules.len());
            modules.damage_at(index)
        } else {
            None
        };

        if let Some(id) = &damaged_module {
            debug!("turn {}: {} damaged module {}", turn, event.name, id);
        }

        log.push(TurnLogEntry {
            turn,
            event,
            damaged_module,
        });
    }

    Trip { log, modules }
}
