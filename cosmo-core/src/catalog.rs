//! Static catalog of rockets, habitat modules and event archetypes.
//!
//! The catalog is built once and handed by reference to the simulator and
//! the evaluator. It never changes after loading.

use serde::{Deserialize, Serialize};

use crate::error::MissionError;
use crate::event::{EventArchetype, EventEffect};

/// Propulsion figures used only by the performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropulsionSpec {
    pub thrust_kn: f64,
    pub specific_impulse_s: f64,
    pub dry_mass_tons: f64,
    pub propellant_mass_tons: f64,
    pub delta_v_total_m_s: f64,
    pub thrust_to_weight: f64,
}

/// A launch vehicle students can pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mission_profile: String,
    pub cargo_capacity_tons: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propulsion: Option<PropulsionSpec>,
}

impl RocketSpec {
    pub fn capacity_kg(&self) -> f64 {
        self.cargo_capacity_tons * 1000.0
    }
}

/// A habitat module as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitatModule {
    pub id: String,
    pub name: String,
    pub mass_kg: f64,
    pub energy_draw: f64,
    pub water_draw: f64,
    #[serde(default)]
    pub description: String,
}

/// Alternate rocket ids that older room configurations still send.
const ROCKET_ALIASES: &[(&str, &str)] = &[("foguete-longa-marcha", "longmarch8a")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub rockets: Vec<RocketSpec>,
    pub modules: Vec<HabitatModule>,
    pub events: Vec<EventArchetype>,
}

impl Catalog {
    /// The catalog shipped with the game.
    pub fn builtin() -> Self {
        Self {
            rockets: builtin_rockets(),
            modules: builtin_modules(),
            events: builtin_events(),
        }
    }

    /// Load a catalog from a JSON document with the same shape as [`Catalog`].
    ///
    /// Rockets may have zero capacity but never a negative one.
    pub fn from_json(json: &str) -> Result<Self, MissionError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if let Some(rocket) = catalog
            .rockets
            .iter()
            .find(|r| r.cargo_capacity_tons < 0.0)
        {
            return Err(MissionError::NegativeCapacity(rocket.id.clone()));
        }
        Ok(catalog)
    }

    /// Find a rocket by id or alias, ignoring case.
    pub fn rocket(&self, id: &str) -> Result<&RocketSpec, MissionError> {
        let wanted = id.trim().to_ascii_lowercase();
        let key = ROCKET_ALIASES
            .iter()
            .find(|(alias, _)| *alias == wanted)
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or(wanted);
        self.rockets
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(&key))
            .ok_or_else(|| MissionError::RocketNotFound(id.to_string()))
    }

    pub fn module(&self, id: &str) -> Result<&HabitatModule, MissionError> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| MissionError::ModuleNotFound(id.to_string()))
    }

    pub fn module_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.name.as_str())
            .unwrap_or(id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn rocket(
    id: &str,
    name: &str,
    operator: &str,
    profile: &str,
    capacity_tons: f64,
    thrust_kn: f64,
    isp: f64,
    dry_tons: f64,
    propellant_tons: f64,
    delta_v: f64,
    twr: f64,
    description: &str,
) -> RocketSpec {
    RocketSpec {
        id: id.to_string(),
        name: name.to_string(),
        operator: operator.to_string(),
        description: description.to_string(),
        mission_profile: profile.to_string(),
        cargo_capacity_tons: capacity_tons,
        propulsion: Some(PropulsionSpec {
            thrust_kn,
            specific_impulse_s: isp,
            dry_mass_tons: dry_tons,
            propellant_mass_tons: propellant_tons,
            delta_v_total_m_s: delta_v,
            thrust_to_weight: twr,
        }),
    }
}

fn builtin_rockets() -> Vec<RocketSpec> {
    vec![
        rocket(
            "falcon9", "Falcon 9", "USA / SpaceX", "Two stages",
            22.8, 7607.0, 282.0, 28.2, 433.1, 9300.0, 1.8,
            "Reusable two-stage rocket with an excellent thrust-to-weight ratio. \
             Ideal for heavy loads to low orbit.",
        ),
        rocket(
            "pslv", "PSLV", "India / ISRO", "Multiple burns",
            3.8, 4800.0, 262.0, 18.5, 230.0, 8200.0, 1.4,
            "Reliable multi-stage rocket able to reach polar and sun-synchronous orbits.",
        ),
        rocket(
            "longmarch8a", "Long March 8A", "China", "Extended coasting",
            9.8, 5800.0, 275.0, 22.1, 320.5, 8800.0, 1.6,
            "Medium-lift rocket with multi-orbit capability and long coasting phases.",
        ),
        rocket(
            "gslv", "GSLV", "India / ISRO", "Cryogenic stage",
            2.5, 4200.0, 295.0, 16.8, 198.7, 9500.0, 1.3,
            "Cryogenic upper stage for precise insertion into geosynchronous transfer orbits.",
        ),
    ]
}

fn module(id: &str, name: &str, mass_kg: f64, energy: f64, water: f64, description: &str) -> HabitatModule {
    HabitatModule {
        id: id.to_string(),
        name: name.to_string(),
        mass_kg,
        energy_draw: energy,
        water_draw: water,
        description: description.to_string(),
    }
}

fn builtin_modules() -> Vec<HabitatModule> {
    vec![
        module("suporte_vida", "Life Support", 800.0, 15.0, 50.0,
            "Essential. Connects to the living quarters, hygiene and food production."),
        module("habitacional", "Private Quarters", 200.0, 1.0, 5.0,
            "Crew accommodation. Can be integrated with leisure areas."),
        module("alimentacao", "Galley and Meals", 300.0, 3.0, 20.0,
            "Food preparation and dining area."),
        module("medico", "Medical Bay", 250.0, 2.0, 5.0,
            "Medical emergencies and crew health monitoring."),
        module("exercicios", "Exercise", 400.0, 5.0, 2.0,
            "Equipment that mitigates muscle and bone loss."),
        module("pesquisa", "Work and Research", 350.0, 4.0, 2.0,
            "Laboratory for scientific experiments."),
        module("armazenamento", "Storage", 150.0, 0.5, 0.0,
            "Supplies, tools and samples."),
        module("sanitario", "Hygiene", 250.0, 2.0, 30.0,
            "Toilet, shower and water recycling systems."),
        module("inflavel", "Expandable Inflatable", 500.0, 2.0, 5.0,
            "Large volume once inflated, highly versatile."),
        module("airlock", "Airlock", 300.0, 2.0, 2.0,
            "Decompression chamber for extravehicular activity."),
        module("hidroponia", "Food Production (Hydroponics)", 500.0, 8.0, 40.0,
            "Plants grown in a controlled environment to supplement the diet."),
        module("impressao3d", "3D Printing / Manufacturing", 300.0, 5.0, 2.0,
            "Spare parts and tools fabricated on demand."),
        module("blindagem", "Radiation Shielding", 600.0, 1.0, 0.0,
            "Shielded shelter that protects the crew during deep-space radiation events."),
        module("controle", "Command and Control", 350.0, 6.0, 2.0,
            "Flight control, navigation and power management for long voyages."),
    ]
}

fn archetype(name: &str, description: &str, effect: EventEffect) -> EventArchetype {
    EventArchetype {
        name: name.to_string(),
        description: description.to_string(),
        effect,
    }
}

fn builtin_events() -> Vec<EventArchetype> {
    vec![
        archetype(
            "Solar Storm",
            "A wave of radiation hits the ship. Poorly shielded modules may be damaged.",
            EventEffect::DamageRisk,
        ),
        archetype(
            "Minor Mechanical Failure",
            "A subsystem shows a small fault, consuming extra resources for repair and \
             causing a short delay.",
            EventEffect::DelayAndExtraConsumption,
        ),
        archetype(
            "Micrometeoroid Impact",
            "Small debris collides with the hull. The ship's shielding is put to the test.",
            EventEffect::CargoLossRisk,
        ),
        archetype(
            "Power Surge",
            "A fluctuation in the power systems forces resources to be diverted for \
             stabilization.",
            EventEffect::ExtraConsumption,
        ),
        archetype(
            "All Clear",
            "The trip continues without incident. The crew uses the calm to check the systems.",
            EventEffect::None,
        ),
        archetype(
            "Optimized Navigation",
            "The flight team finds a more efficient trajectory, saving propellant and \
             slightly advancing the arrival.",
            EventEffect::EconomyBonus,
        ),
    ]
}
