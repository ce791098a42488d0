//! Arrival gate and mission scoring.
//!
//! Evaluation is a pure function of the destination, the rocket and the
//! finished trip: no randomness, no I/O.

use serde::{Deserialize, Serialize};

use crate::catalog::RocketSpec;
use crate::destination::Destination;
use crate::habitat::ModuleStates;
use crate::scoring::{ScoreAdjustment, ScoreTracker};
use crate::simulator::{Trip, TurnLogEntry};

/// The result of one simulated mission, handed to display and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionResult {
    pub destination: Destination,
    pub rocket_id: String,
    pub arrived: bool,
    pub score: u32,
    pub total_mass_kg: f64,
    pub capacity_kg: f64,
    pub missing_essentials: Vec<String>,
    pub breakdown: Vec<ScoreAdjustment>,
    pub turn_log: Vec<TurnLogEntry>,
    pub modules: ModuleStates,
}

impl MissionResult {
    /// Cargo mass as a fraction of capacity, `None` for capacity-free rockets.
    pub fn load_ratio(&self) -> Option<f64> {
        (self.capacity_kg > 0.0).then(|| self.total_mass_kg / self.capacity_kg)
    }

    pub fn damaged_count(&self) -> usize {
        self.modules.damaged_count()
    }
}

/// Essentials for `destination` that are not on board, in table order.
pub fn missing_essentials(destination: Destination, modules: &ModuleStates) -> Vec<String> {
    destination
        .essential_modules()
        .iter()
        .filter(|id| !modules.contains(id))
        .map(|id| id.to_string())
        .collect()
}

/// Whether the cargo fits the destination's mass limit.
///
/// A rocket without capacity never blocks arrival.
pub fn mass_within_limit(destination: Destination, total_mass_kg: f64, capacity_kg: f64) -> bool {
    capacity_kg == 0.0 || total_mass_kg <= capacity_kg * destination.mass_rule().limit_factor
}

fn score_mass(tracker: &mut ScoreTracker, destination: Destination, mass: f64, capacity: f64) {
    if capacity == 0.0 {
        return;
    }
    let rule = destination.mass_rule();
    let ratio = mass / capacity;
    let (low, high) = rule.sweet_spot;

    if mass > capacity * rule.limit_factor {
        tracker.add(
            -rule.over_limit_penalty,
            format!("Cargo over {:.0}% of capacity", rule.limit_factor * 100.0),
        );
    } else if let Some((factor, penalty)) = rule
        .soft_limit
        .filter(|(factor, _)| mass > capacity * factor)
    {
        tracker.add(
            -penalty,
            format!("Cargo over {:.0}% of capacity", factor * 100.0),
        );
    } else if (low..=high).contains(&ratio) {
        tracker.add(rule.sweet_spot_bonus, "Well-balanced cargo load");
    }
}

/// Decide whether the habitat arrived and how many points it earned.
pub fn evaluate(destination: Destination, rocket: &RocketSpec, trip: Trip) -> MissionResult {
    let Trip { log, modules } = trip;
    let essentials = destination.essential_modules();
    let missing = missing_essentials(destination, &modules);
    let present = essentials.len() - missing.len();

    let mut tracker = ScoreTracker::new();
    tracker.add(destination.base_score(), format!("{} mission", destination));
    tracker.add(20 * present as i32, format!("{} essential modules on board", present));
    tracker.add(
        -25 * missing.len() as i32,
        format!("{} essential modules missing", missing.len()),
    );

    let capacity_kg = rocket.capacity_kg();
    let total_mass_kg = modules.total_mass_kg();
    score_mass(&mut tracker, destination, total_mass_kg, capacity_kg);

    let damaged = modules.damaged_count();
    tracker.add(
        -(damaged as i32) * destination.damage_penalty(),
        format!("{} damaged modules", damaged),
    );

    let arrived = missing.len() <= destination.allowed_missing()
        && mass_within_limit(destination, total_mass_kg, capacity_kg)
        && damaged <= destination.damage_tolerance();

    MissionResult {
        destination,
        rocket_id: rocket.id.clone(),
        arrived,
        score: tracker.clamped(),
        total_mass_kg,
        capacity_kg,
        missing_essentials: missing,
        breakdown: tracker.history,
        turn_log: log,
        modules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, HabitatModule};
    use crate::habitat::ModuleStates;

    fn rocket(capacity_tons: f64) -> RocketSpec {
        RocketSpec {
            id: "test-rocket".to_string(),
            name: "Test Rocket".to_string(),
            operator: String::new(),
            description: String::new(),
            mission_profile: String::new(),
            cargo_capacity_tons: capacity_tons,
            propulsion: None,
        }
    }

    fn block(id: &str, mass_kg: f64) -> HabitatModule {
        HabitatModule {
            id: id.to_string(),
            name: id.to_string(),
            mass_kg,
            energy_draw: 0.0,
            water_draw: 0.0,
            description: String::new(),
        }
    }

    fn trip(modules: ModuleStates) -> Trip {
        Trip {
            log: Vec::new(),
            modules,
        }
    }

    fn catalog_trip(ids: &[&str]) -> Trip {
        trip(ModuleStates::from_selection(&Catalog::builtin(), ids).unwrap())
    }

    #[test]
    fn moon_with_light_essentials_scores_ninety() {
        let result = evaluate(
            Destination::Moon,
            &rocket(22.8),
            catalog_trip(&["suporte_vida", "habitacional"]),
        );
        assert!(result.arrived);
        assert_eq!(result.score, 90);
        assert_eq!(result.total_mass_kg, 1000.0);
        assert_eq!(result.capacity_kg, 22_800.0);
        assert!(result.missing_essentials.is_empty());
    }

    #[test]
    fn exoplanet_without_modules_never_arrives() {
        let result = evaluate(Destination::Exoplanet, &rocket(22.8), trip(ModuleStates::new()));
        assert!(!result.arrived);
        assert_eq!(result.missing_essentials.len(), 5);
        // 300 - 5 * 25
        assert_eq!(result.score, 175);
    }

    #[test]
    fn mars_overload_blocks_arrival() {
        let modules: ModuleStates = vec![
            block("suporte_vida", 4000.0),
            block("habitacional", 4000.0),
            block("medico", 4000.0),
        ]
        .into_iter()
        .collect();

        let result = evaluate(Destination::Mars, &rocket(10.0), trip(modules));
        assert!(!result.arrived);
        // 120 + 60 - 50
        assert_eq!(result.score, 130);
    }

    #[test]
    fn moon_soft_overload_still_arrives() {
        let modules: ModuleStates = vec![block("suporte_vida", 600.0), block("habitacional", 500.0)]
            .into_iter()
            .collect();

        let result = evaluate(Destination::Moon, &rocket(1.0), trip(modules));
        assert!(result.arrived);
        // 50 + 40 - 30
        assert_eq!(result.score, 60);
    }

    #[test]
    fn moon_hard_overload_fails() {
        let modules: ModuleStates = vec![block("suporte_vida", 1300.0)].into_iter().collect();

        let result = evaluate(Destination::Moon, &rocket(1.0), trip(modules));
        assert!(!result.arrived);
        // 50 + 20 - 25 - 60
        assert_eq!(result.score, 0);
    }

    #[test]
    fn sweet_spot_earns_bonus() {
        let modules: ModuleStates = vec![
            block("suporte_vida", 3000.0),
            block("habitacional", 2000.0),
            block("medico", 3000.0),
        ]
        .into_iter()
        .collect();

        // ratio 0.8 on Mars
        let result = evaluate(Destination::Mars, &rocket(10.0), trip(modules));
        assert!(result.arrived);
        assert_eq!(result.score, 120 + 60 + 30);
        assert!(result
            .breakdown
            .iter()
            .any(|a| a.reason == "Well-balanced cargo load"));
    }

    #[test]
    fn moon_full_load_earns_bonus() {
        let modules: ModuleStates = vec![block("suporte_vida", 600.0), block("habitacional", 400.0)]
            .into_iter()
            .collect();

        // exactly at capacity: inside the sweet spot, not over the soft limit
        let result = evaluate(Destination::Moon, &rocket(1.0), trip(modules));
        assert!(result.arrived);
        assert_eq!(result.score, 50 + 40 + 20);
    }

    #[test]
    fn moon_half_load_earns_bonus() {
        let modules: ModuleStates = vec![block("suporte_vida", 300.0), block("habitacional", 200.0)]
            .into_iter()
            .collect();

        let result = evaluate(Destination::Moon, &rocket(1.0), trip(modules));
        assert!(result.arrived);
        assert_eq!(result.score, 110);
    }

    #[test]
    fn sweet_spot_edges_are_inclusive() {
        let mars = |masses: [f64; 3]| -> ModuleStates {
            ["suporte_vida", "habitacional", "medico"]
                .iter()
                .zip(masses)
                .map(|(id, mass)| block(id, mass))
                .collect()
        };
        for masses in [[2000.0, 2000.0, 2000.0], [3500.0, 3000.0, 3000.0]] {
            let result = evaluate(Destination::Mars, &rocket(10.0), trip(mars(masses)));
            assert_eq!(result.score, 120 + 60 + 30);
        }

        let just_below = evaluate(
            Destination::Mars,
            &rocket(10.0),
            trip(mars([2000.0, 2000.0, 1999.0])),
        );
        assert_eq!(just_below.score, 120 + 60);

        let exoplanet: ModuleStates = [
            ("suporte_vida", 3000.0),
            ("habitacional", 2000.0),
            ("blindagem", 2000.0),
            ("controle", 1000.0),
            ("hidroponia", 1000.0),
        ]
        .iter()
        .map(|(id, mass)| block(id, *mass))
        .collect();
        // ratio 0.9
        let result = evaluate(Destination::Exoplanet, &rocket(10.0), trip(exoplanet));
        assert!(result.arrived);
        assert_eq!(result.score, 300 + 100 + 25);
    }

    #[test]
    fn negative_capacity_is_binding() {
        assert!(!mass_within_limit(Destination::Mars, 10.0, -1000.0));
    }

    #[test]
    fn exoplanet_requires_safety_margin() {
        assert!(mass_within_limit(Destination::Exoplanet, 950.0, 1000.0));
        assert!(!mass_within_limit(Destination::Exoplanet, 951.0, 1000.0));
        assert!(mass_within_limit(Destination::Exoplanet, 1e9, 0.0));
    }

    #[test]
    fn zero_capacity_skips_mass_rules() {
        let result = evaluate(
            Destination::Mars,
            &rocket(0.0),
            catalog_trip(&["suporte_vida", "habitacional", "medico"]),
        );
        assert!(result.arrived);
        assert_eq!(result.score, 180);
        assert!(result.load_ratio().is_none());
    }

    #[test]
    fn damage_costs_points_and_can_block_arrival() {
        let mut modules =
            ModuleStates::from_selection(&Catalog::builtin(), &["suporte_vida", "habitacional"])
                .unwrap();
        modules.damage_at(0);

        let result = evaluate(Destination::Exoplanet, &rocket(22.8), trip(modules.clone()));
        // 300 + 40 - 75 - 14
        assert_eq!(result.score, 251);
        assert_eq!(result.damaged_count(), 1);

        modules.damage_at(1);
        let moon = evaluate(Destination::Moon, &rocket(22.8), trip(modules.clone()));
        assert!(moon.arrived);
        assert_eq!(moon.score, 90 - 16);

        let mars = evaluate(Destination::Mars, &rocket(22.8), trip(modules));
        // two damaged is within tolerance, one missing essential allowed
        assert!(mars.arrived);
    }

    #[test]
    fn exoplanet_tolerates_only_one_damaged_module() {
        let ids = [
            "suporte_vida",
            "habitacional",
            "blindagem",
            "controle",
            "hidroponia",
        ];
        let mut modules = ModuleStates::from_selection(&Catalog::builtin(), &ids).unwrap();
        modules.damage_at(0);
        let one = evaluate(Destination::Exoplanet, &rocket(22.8), trip(modules.clone()));
        assert!(one.arrived);

        modules.damage_at(1);
        let two = evaluate(Destination::Exoplanet, &rocket(22.8), trip(modules));
        assert!(!two.arrived);
    }

    #[test]
    fn evaluation_is_pure() {
        let input = catalog_trip(&["suporte_vida", "medico"]);
        let first = evaluate(Destination::Mars, &rocket(3.8), input.clone());
        let second = evaluate(Destination::Mars, &rocket(3.8), input);
        assert_eq!(first, second);
    }

    #[test]
    fn score_is_never_negative() {
        let mut modules: ModuleStates = (0..10)
            .map(|i| block(&format!("crate{}", i), 5000.0))
            .collect();
        for i in 0..10 {
            modules.damage_at(i);
        }
        let result = evaluate(Destination::Moon, &rocket(1.0), trip(modules));
        assert_eq!(result.score, 0);
        assert!(!result.arrived);
    }
}
