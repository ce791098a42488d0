//! Mission destinations and the difficulty table attached to each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MissionError;

/// How events are drawn during a trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventVariant {
    /// Any archetype may fire; quiet turns are logged as "All Clear".
    Simple,
    /// Rarer archetype events with module-aware flavor; quiet turns narrate
    /// one of the selected modules at work.
    #[default]
    Personalized,
}

/// Where the habitat is being flown to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Moon,
    Mars,
    Exoplanet,
}

/// How cargo mass against rocket capacity is scored and gated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassRule {
    /// Hard limit as a multiple of capacity; above it the mission cannot arrive.
    pub limit_factor: f64,
    /// Penalty applied above the hard limit.
    pub over_limit_penalty: i32,
    /// Optional softer band between capacity and the hard limit: (factor, penalty).
    pub soft_limit: Option<(f64, i32)>,
    /// Inclusive ratio band rewarded with a bonus.
    pub sweet_spot: (f64, f64),
    pub sweet_spot_bonus: i32,
}

impl Destination {
    pub const ALL: [Destination; 3] = [Destination::Moon, Destination::Mars, Destination::Exoplanet];

    pub fn name(&self) -> &'static str {
        match self {
            Destination::Moon => "Moon",
            Destination::Mars => "Mars",
            Destination::Exoplanet => "Exoplanet",
        }
    }

    /// Number of simulated turns for the trip.
    pub fn total_turns(&self) -> u32 {
        match self {
            Destination::Moon => 15,
            Destination::Mars => 60,
            Destination::Exoplanet => 250,
        }
    }

    /// Modules the crew needs to be credited for surviving the trip.
    pub fn essential_modules(&self) -> &'static [&'static str] {
        match self {
            Destination::Moon => &["suporte_vida", "habitacional"],
            Destination::Mars => &["suporte_vida", "habitacional", "medico"],
            Destination::Exoplanet => &[
                "suporte_vida",
                "habitacional",
                "blindagem",
                "controle",
                "hidroponia",
            ],
        }
    }

    /// Per-turn chance that an archetype event fires.
    pub fn event_probability(&self, variant: EventVariant) -> f64 {
        match (variant, self) {
            (EventVariant::Simple, Destination::Exoplanet) => 0.8,
            (EventVariant::Simple, _) => 0.6,
            (EventVariant::Personalized, Destination::Exoplanet) => 0.4,
            (EventVariant::Personalized, _) => 0.3,
        }
    }

    /// Starting score, scaled by difficulty.
    pub fn base_score(&self) -> i32 {
        match self {
            Destination::Moon => 50,
            Destination::Mars => 120,
            Destination::Exoplanet => 300,
        }
    }

    pub fn damage_penalty(&self) -> i32 {
        match self {
            Destination::Moon => 8,
            Destination::Mars => 10,
            Destination::Exoplanet => 14,
        }
    }

    /// Essentials that may be missing while still arriving.
    pub fn allowed_missing(&self) -> usize {
        match self {
            Destination::Moon => 2,
            Destination::Mars => 1,
            Destination::Exoplanet => 0,
        }
    }

    /// Damaged modules that may be carried while still arriving.
    pub fn damage_tolerance(&self) -> usize {
        match self {
            Destination::Moon => 3,
            Destination::Mars => 2,
            Destination::Exoplanet => 1,
        }
    }

    pub fn mass_rule(&self) -> MassRule {
        match self {
            Destination::Moon => MassRule {
                limit_factor: 1.2,
                over_limit_penalty: 60,
                soft_limit: Some((1.0, 30)),
                sweet_spot: (0.5, 1.0),
                sweet_spot_bonus: 20,
            },
            Destination::Mars => MassRule {
                limit_factor: 1.0,
                over_limit_penalty: 50,
                soft_limit: None,
                sweet_spot: (0.6, 0.95),
                sweet_spot_bonus: 30,
            },
            Destination::Exoplanet => MassRule {
                limit_factor: 0.95,
                over_limit_penalty: 60,
                soft_limit: None,
                sweet_spot: (0.6, 0.9),
                sweet_spot_bonus: 25,
            },
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Destination {
    type Err = MissionError;

    /// Accepts the English names and the Portuguese classroom names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moon" | "lua" => Ok(Destination::Moon),
            "mars" | "marte" => Ok(Destination::Mars),
            "exoplanet" | "exoplaneta" => Ok(Destination::Exoplanet),
            _ => Err(MissionError::InvalidDestination(s.to_string())),
        }
    }
}

impl FromStr for EventVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(EventVariant::Simple),
            "personalized" => Ok(EventVariant::Personalized),
            other => Err(format!("unknown event variant '{}'", other)),
        }
    }
}
