//! Plain-text rendering for terminal output.

use std::fmt;

use cosmo_core::performance::PerformanceReport;
use cosmo_core::record::Leaderboard;
use cosmo_core::{Catalog, MissionResult, ModuleStatus};

pub fn mission(catalog: &Catalog, result: &MissionResult) -> String {
    MissionReport { catalog, result }.to_string()
}

pub fn performance(report: &PerformanceReport) -> String {
    PerformanceTable(report).to_string()
}

pub fn catalog(catalog: &Catalog) -> String {
    CatalogListing(catalog).to_string()
}

pub fn leaderboard(board: &Leaderboard) -> String {
    Standings(board).to_string()
}

struct MissionReport<'a> {
    catalog: &'a Catalog,
    result: &'a MissionResult,
}

impl fmt::Display for MissionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "Mission to {} aboard {}", result.destination, result.rocket_id)?;
        writeln!(f)?;

        for entry in &result.turn_log {
            write!(f, "[{:>3}] {}: {}", entry.turn, entry.event.name, entry.event.description)?;
            if let Some(id) = &entry.damaged_module {
                write!(f, " ({} damaged)", self.catalog.module_name(id))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\nModules:")?;
        for instance in result.modules.iter() {
            let status = match instance.status {
                ModuleStatus::Nominal => "nominal",
                ModuleStatus::Damaged => "DAMAGED",
            };
            writeln!(
                f,
                "  {:<32} {:>6.0} kg  {}",
                instance.module.name, instance.module.mass_kg, status
            )?;
        }

        writeln!(
            f,
            "\nCargo: {:.0} kg / {:.0} kg capacity",
            result.total_mass_kg, result.capacity_kg
        )?;
        writeln!(
            f,
            "Draw: energy {}, water {}",
            result.modules.total_energy_draw(),
            result.modules.total_water_draw()
        )?;
        for adjustment in &result.breakdown {
            writeln!(f, "  {:+5}  {}", adjustment.delta, adjustment.reason)?;
        }
        writeln!(
            f,
            "Arrived: {}  Score: {}",
            if result.arrived { "yes" } else { "no" },
            result.score
        )
    }
}

struct PerformanceTable<'a>(&'a PerformanceReport);

impl fmt::Display for PerformanceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        match report.delta_v_m_s {
            Some(dv) => writeln!(f, "{} (delta-v {:.0} m/s)", report.rocket_name, dv)?,
            None => writeln!(f, "{} (no propulsion data)", report.rocket_name)?,
        }
        for target in &report.targets {
            writeln!(
                f,
                "  {:<5} range {:>14.0} km  payload {:>8.0} kg",
                target.target.name(),
                target.max_range_km,
                target.payload_at_nominal_kg
            )?;
        }
        Ok(())
    }
}

struct CatalogListing<'a>(&'a Catalog);

impl fmt::Display for CatalogListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rockets:")?;
        for rocket in &self.0.rockets {
            writeln!(
                f,
                "  {:<12} {:<16} {:>5.1} t  {}",
                rocket.id, rocket.name, rocket.cargo_capacity_tons, rocket.operator
            )?;
        }
        writeln!(f, "\nModules:")?;
        for module in &self.0.modules {
            writeln!(
                f,
                "  {:<14} {:<32} {:>5.0} kg  energy {:>4}  water {:>3}",
                module.id, module.name, module.mass_kg, module.energy_draw, module.water_draw
            )?;
        }
        Ok(())
    }
}

struct Standings<'a>(&'a Leaderboard);

impl fmt::Display for Standings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No attempts recorded.");
        }
        for standing in &self.0.standings {
            writeln!(
                f,
                "{:>3}. {:<20} {:<8} {:>5}  {}  ({} attempts)",
                standing.position,
                standing.student,
                standing.room,
                standing.best_score,
                if standing.arrived { "arrived" } else { "lost" },
                standing.attempts
            )?;
        }
        Ok(())
    }
}
