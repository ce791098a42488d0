//! Trip events and the randomness they are drawn with.

use serde::{Deserialize, Serialize};

/// What an event does to the mission.
///
/// Only `DamageRisk` changes module state; the other effects are narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventEffect {
    None,
    DamageRisk,
    DelayAndExtraConsumption,
    CargoLossRisk,
    ExtraConsumption,
    EconomyBonus,
}

/// A catalog entry describing a kind of random event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventArchetype {
    pub name: String,
    pub description: String,
    pub effect: EventEffect,
}

/// A concrete event as it appears in a turn log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripEvent {
    pub name: String,
    pub description: String,
    pub effect: EventEffect,
    /// Icon tag for display, set by the personalized narrative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TripEvent {
    pub fn from_archetype(archetype: &EventArchetype) -> Self {
        Self {
            name: archetype.name.clone(),
            description: archetype.description.clone(),
            effect: archetype.effect,
            icon: None,
        }
    }

    pub fn is_damaging(&self) -> bool {
        self.effect == EventEffect::DamageRisk
    }
}

/// Source of randomness for a trip.
///
/// Any [`rand::Rng`] works; tests script the draws to hit specific branches.
pub trait TripRng {
    /// Uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> TripRng for R {
    fn roll(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
