//! Post-flight feedback for students.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::destination::Destination;
use crate::outcome::{mass_within_limit, MissionResult};

/// Why a mission did not arrive, ready to show on the game-over screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureAnalysis {
    pub summary: String,
    pub causes: Vec<String>,
}

impl fmt::Display for FailureAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game over analysis:")?;
        write!(f, "{}", self.summary)?;
        for cause in &self.causes {
            write!(f, "\n{}", cause)?;
        }
        Ok(())
    }
}

fn mass_cause(destination: Destination) -> &'static str {
    match destination {
        Destination::Moon => "Total mass exceeded 120% of the rocket's capacity.",
        Destination::Mars => "Total mass exceeded the rocket's capacity.",
        Destination::Exoplanet => {
            "For an exoplanet the 95% mass safety margin was not respected."
        }
    }
}

/// Explain a failed arrival. Returns `None` when the mission arrived.
pub fn failure_analysis(result: &MissionResult, rocket_name: &str) -> Option<FailureAnalysis> {
    if result.arrived {
        return None;
    }

    let usage = result.load_ratio().unwrap_or(0.0);
    let summary = format!(
        "Destination: {} | Rocket: {} | Mass: {}kg / Capacity: {}kg (usage {}%).",
        result.destination,
        rocket_name,
        result.total_mass_kg as i64,
        result.capacity_kg as i64,
        (usage * 100.0) as i64
    );

    let mut causes = Vec::new();
    if !result.missing_essentials.is_empty() {
        causes.push(format!(
            "Missing essential modules: {}.",
            result.missing_essentials.join(", ")
        ));
    }
    if !mass_within_limit(result.destination, result.total_mass_kg, result.capacity_kg) {
        causes.push(mass_cause(result.destination).to_string());
    }
    let damaged = result.modules.damaged_ids();
    if !damaged.is_empty() {
        causes.push(format!("Damage to critical modules: {}.", damaged.join(", ")));
    }
    if causes.is_empty() {
        causes.push("Conditions were insufficient for the mission.".to_string());
    }

    Some(FailureAnalysis { summary, causes })
}

/// Whether the habitat built on arrival can sustain the crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivalAssessment {
    pub ok: bool,
    pub missing: Vec<String>,
}

/// Check the assembled habitat against every essential for the destination.
///
/// Stricter than the arrival gate: nothing may be missing.
pub fn survival_assessment<S: AsRef<str>>(destination: Destination, module_ids: &[S]) -> SurvivalAssessment {
    let missing: Vec<String> = destination
        .essential_modules()
        .iter()
        .filter(|essential| !module_ids.iter().any(|id| id.as_ref() == **essential))
        .map(|essential| essential.to_string())
        .collect();

    SurvivalAssessment {
        ok: missing.is_empty(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::habitat::ModuleStates;
    use crate::outcome::evaluate;
    use crate::simulator::Trip;

    fn result_for(destination: Destination, rocket: &str, ids: &[&str], damage: &[usize]) -> MissionResult {
        let catalog = Catalog::builtin();
        let mut modules = ModuleStates::from_selection(&catalog, ids).unwrap();
        for index in damage {
            modules.damage_at(*index);
        }
        evaluate(
            destination,
            catalog.rocket(rocket).unwrap(),
            Trip {
                log: Vec::new(),
                modules,
            },
        )
    }

    #[test]
    fn arrived_missions_need_no_analysis() {
        let result = result_for(Destination::Moon, "falcon9", &["suporte_vida", "habitacional"], &[]);
        assert!(failure_analysis(&result, "Falcon 9").is_none());
    }

    #[test]
    fn lists_missing_essentials() {
        let result = result_for(Destination::Exoplanet, "falcon9", &["suporte_vida"], &[]);
        let analysis = failure_analysis(&result, "Falcon 9").unwrap();
        assert_eq!(analysis.causes.len(), 1);
        assert_eq!(
            analysis.causes[0],
            "Missing essential modules: habitacional, blindagem, controle, hidroponia."
        );
        assert!(analysis.summary.contains("Mass: 800kg / Capacity: 22800kg (usage 3%)"));
    }

    #[test]
    fn lists_mass_and_damage_causes() {
        // PSLV carries 3800 kg; this cargo is 4300 kg.
        let ids = [
            "suporte_vida",
            "habitacional",
            "medico",
            "hidroponia",
            "inflavel",
            "exercicios",
            "pesquisa",
            "airlock",
            "alimentacao",
            "sanitario",
            "armazenamento",
            "impressao3d",
        ];
        let result = result_for(Destination::Mars, "pslv", &ids, &[0, 1, 2]);
        let analysis = failure_analysis(&result, "PSLV").unwrap();

        assert!(analysis
            .causes
            .contains(&"Total mass exceeded the rocket's capacity.".to_string()));
        assert!(analysis
            .causes
            .iter()
            .any(|c| c == "Damage to critical modules: suporte_vida, habitacional, medico."));

        let text = analysis.to_string();
        assert!(text.starts_with("Game over analysis:\nDestination: Mars | Rocket: PSLV"));
    }

    #[test]
    fn survival_requires_every_essential() {
        let full = survival_assessment(Destination::Mars, &["medico", "habitacional", "suporte_vida"]);
        assert!(full.ok);
        assert!(full.missing.is_empty());

        let partial = survival_assessment(Destination::Moon, &["suporte_vida"]);
        assert!(!partial.ok);
        assert_eq!(partial.missing, vec!["habitacional".to_string()]);
    }
}
