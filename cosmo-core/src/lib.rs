//! Mission engine for the Cosmo-Casa classroom game.
//!
//! Students pick a destination, a rocket and a set of habitat modules. The
//! [`simulator`] flies the trip turn by turn, drawing random events that may
//! damage modules, and the [`outcome`] evaluator decides whether the habitat
//! arrived and how many points it earned.
//!
//! ```
//! use cosmo_core::{Catalog, MissionPlan};
//! use rand::SeedableRng;
//!
//! let catalog = Catalog::builtin();
//! let plan = MissionPlan::new(&catalog, "moon", "falcon9", &["suporte_vida", "habitacional"])?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let result = plan.fly(&mut rng);
//! assert_eq!(result.turn_log.len(), 15);
//! # Ok::<(), cosmo_core::MissionError>(())
//! ```

pub mod catalog;
pub mod debrief;
pub mod destination;
pub mod error;
pub mod event;
pub mod habitat;
pub mod mission;
pub mod narrative;
pub mod outcome;
pub mod performance;
pub mod record;
pub mod scoring;
pub mod simulator;

pub use catalog::{Catalog, HabitatModule, PropulsionSpec, RocketSpec};
pub use destination::{Destination, EventVariant};
pub use error::MissionError;
pub use event::{EventArchetype, EventEffect, TripEvent, TripRng};
pub use habitat::{ModuleInstance, ModuleStates, ModuleStatus};
pub use mission::MissionPlan;
pub use outcome::{evaluate, MissionResult};
pub use record::{AttemptRecord, Leaderboard};
pub use simulator::{simulate, Trip, TurnLogEntry};
