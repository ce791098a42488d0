//! Habitat modules carried on a specific mission and their condition.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, HabitatModule};
use crate::error::MissionError;

/// Condition of a module during a trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    #[default]
    Nominal,
    Damaged,
}

/// A catalog module chosen for one mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInstance {
    #[serde(flatten)]
    pub module: HabitatModule,
    #[serde(default)]
    pub status: ModuleStatus,
}

impl ModuleInstance {
    pub fn new(module: HabitatModule) -> Self {
        Self {
            module,
            status: ModuleStatus::Nominal,
        }
    }

    pub fn id(&self) -> &str {
        &self.module.id
    }

    pub fn is_damaged(&self) -> bool {
        self.status == ModuleStatus::Damaged
    }
}

/// The modules on board, keyed by id and kept in selection order.
///
/// Selection order matters: quiet turns narrate modules in this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleStates {
    modules: Vec<ModuleInstance>,
}

impl ModuleStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve selected ids against the catalog. Repeated ids are kept once.
    pub fn from_selection<S: AsRef<str>>(
        catalog: &Catalog,
        selected: &[S],
    ) -> Result<Self, MissionError> {
        let mut states = Self::new();
        for id in selected {
            let module = catalog.module(id.as_ref())?;
            states.insert(module.clone());
        }
        Ok(states)
    }

    /// Add a module in nominal condition unless one with the same id is on board.
    pub fn insert(&mut self, module: HabitatModule) {
        if !self.contains(&module.id) {
            self.modules.push(ModuleInstance::new(module));
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modules.iter().any(|m| m.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&ModuleInstance> {
        self.modules.iter().find(|m| m.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleInstance> {
        self.modules.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.id())
    }

    /// The module at `index`, in selection order.
    pub fn at(&self, index: usize) -> Option<&ModuleInstance> {
        self.modules.get(index)
    }

    /// Mark the module at `index` as damaged and return its id.
    ///
    /// A module that is already damaged stays damaged.
    pub fn damage_at(&mut self, index: usize) -> Option<String> {
        let instance = self.modules.get_mut(index)?;
        instance.status = ModuleStatus::Damaged;
        Some(instance.module.id.clone())
    }

    pub fn total_mass_kg(&self) -> f64 {
        self.modules.iter().map(|m| m.module.mass_kg).sum()
    }

    pub fn total_energy_draw(&self) -> f64 {
        self.modules.iter().map(|m| m.module.energy_draw).sum()
    }

    pub fn total_water_draw(&self) -> f64 {
        self.modules.iter().map(|m| m.module.water_draw).sum()
    }

    pub fn damaged_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_damaged()).count()
    }

    pub fn damaged_ids(&self) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|m| m.is_damaged())
            .map(|m| m.id())
            .collect()
    }
}

impl FromIterator<HabitatModule> for ModuleStates {
    fn from_iter<I: IntoIterator<Item = HabitatModule>>(iter: I) -> Self {
        let mut states = Self::new();
        for module in iter {
            states.insert(module);
        }
        states
    }
}
