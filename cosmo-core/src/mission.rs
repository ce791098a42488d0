//! Validated mission setup and the simulate-then-evaluate pipeline.

use log::{info, warn};

use crate::catalog::{Catalog, RocketSpec};
use crate::destination::{Destination, EventVariant};
use crate::error::MissionError;
use crate::event::TripRng;
use crate::habitat::ModuleStates;
use crate::outcome::{evaluate, MissionResult};
use crate::simulator::simulate;

/// A mission whose destination, rocket and modules have all been checked
/// against the catalog.
#[derive(Debug, Clone)]
pub struct MissionPlan<'c> {
    catalog: &'c Catalog,
    destination: Destination,
    rocket: &'c RocketSpec,
    modules: ModuleStates,
    variant: EventVariant,
}

impl<'c> MissionPlan<'c> {
    /// Resolve caller input. At least one module must be selected.
    pub fn new<S: AsRef<str>>(
        catalog: &'c Catalog,
        destination: &str,
        rocket_id: &str,
        module_ids: &[S],
    ) -> Result<Self, MissionError> {
        let plan = Self::resolve(catalog, destination, rocket_id, module_ids);
        if let Err(err) = &plan {
            warn!("mission rejected: {}", err);
        }
        plan
    }

    fn resolve<S: AsRef<str>>(
        catalog: &'c Catalog,
        destination: &str,
        rocket_id: &str,
        module_ids: &[S],
    ) -> Result<Self, MissionError> {
        let destination: Destination = destination.parse()?;
        let rocket = catalog.rocket(rocket_id)?;
        if module_ids.is_empty() {
            return Err(MissionError::EmptySelection);
        }
        let modules = ModuleStates::from_selection(catalog, module_ids)?;

        Ok(Self {
            catalog,
            destination,
            rocket,
            modules,
            variant: EventVariant::default(),
        })
    }

    pub fn with_variant(mut self, variant: EventVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    pub fn rocket(&self) -> &'c RocketSpec {
        self.rocket
    }

    pub fn modules(&self) -> &ModuleStates {
        &self.modules
    }

    /// Fly the trip and score it. The plan can be flown again for a new run.
    pub fn fly(&self, rng: &mut dyn TripRng) -> MissionResult {
        let trip = simulate(
            self.catalog,
            self.destination,
            self.modules.clone(),
            self.variant,
            rng,
        );
        let result = evaluate(self.destination, self.rocket, trip);

        info!(
            "{} mission on {} with {} modules: arrived={} score={}",
            self.destination,
            self.rocket.id,
            self.modules.len(),
            result.arrived,
            result.score
        );
        result
    }
}
