//! Rocket performance figures shown alongside the rocket catalog.
//!
//! These are teaching aids built on illustrative constants. They never feed
//! into mission scoring or the arrival gate.

use serde::{Deserialize, Serialize};

use crate::catalog::{PropulsionSpec, RocketSpec};

/// Standard gravity, m/s².
pub const G0: f64 = 9.81;

/// Orbits and bodies the performance report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitTarget {
    Leo,
    Gto,
    Moon,
    Mars,
}

impl OrbitTarget {
    pub const ALL: [OrbitTarget; 4] = [
        OrbitTarget::Leo,
        OrbitTarget::Gto,
        OrbitTarget::Moon,
        OrbitTarget::Mars,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OrbitTarget::Leo => "LEO",
            OrbitTarget::Gto => "GTO",
            OrbitTarget::Moon => "Moon",
            OrbitTarget::Mars => "Mars",
        }
    }

    /// Delta-v needed to reach the target, m/s.
    pub fn required_delta_v(&self) -> f64 {
        match self {
            OrbitTarget::Leo => 7800.0,
            OrbitTarget::Gto => 10_700.0,
            OrbitTarget::Moon => 10_800.0,
            OrbitTarget::Mars => 13_600.0,
        }
    }

    /// Nominal distance of the target, km.
    pub fn nominal_distance_km(&self) -> f64 {
        match self {
            OrbitTarget::Leo => 400.0,
            OrbitTarget::Gto => 35_786.0,
            OrbitTarget::Moon => 384_400.0,
            OrbitTarget::Mars => 225e6,
        }
    }
}

/// Tsiolkovsky rocket equation: `Isp · g0 · ln(m0 / mf)`.
pub fn delta_v(propulsion: &PropulsionSpec) -> f64 {
    let final_mass = propulsion.dry_mass_tons;
    if final_mass <= 0.0 {
        return 0.0;
    }
    let initial_mass = final_mass + propulsion.propellant_mass_tons;
    propulsion.specific_impulse_s * G0 * (initial_mass / final_mass).ln()
}

/// How far the rocket reaches toward `target` with no payload, km.
///
/// Surplus delta-v extends the nominal distance by 10 000 km per km/s;
/// a shortfall scales it down linearly.
pub fn max_range_without_payload(rocket: &RocketSpec, target: OrbitTarget) -> f64 {
    let Some(propulsion) = &rocket.propulsion else {
        return 0.0;
    };
    let available = propulsion.delta_v_total_m_s;
    let required = target.required_delta_v();

    if available >= required {
        let surplus = available - required;
        target.nominal_distance_km() + (surplus / 1000.0) * 10_000.0
    } else {
        target.nominal_distance_km() * (available / required)
    }
}

/// Payload the rocket can still deliver `distance_km` away, kg.
pub fn max_payload_for_destination(rocket: &RocketSpec, target: OrbitTarget, distance_km: f64) -> f64 {
    let max_range = max_range_without_payload(rocket, target);
    if max_range <= 0.0 {
        return 0.0;
    }
    let fraction = (1.0 - distance_km / max_range).clamp(0.0, 1.0);
    rocket.capacity_kg() * fraction
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPerformance {
    pub target: OrbitTarget,
    pub max_range_km: f64,
    pub payload_at_nominal_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub rocket_id: String,
    pub rocket_name: String,
    /// `None` when the catalog has no propulsion data for the rocket.
    pub delta_v_m_s: Option<f64>,
    pub targets: Vec<TargetPerformance>,
}

pub fn performance_report(rocket: &RocketSpec) -> PerformanceReport {
    let targets = OrbitTarget::ALL
        .iter()
        .map(|&target| TargetPerformance {
            target,
            max_range_km: max_range_without_payload(rocket, target),
            payload_at_nominal_kg: max_payload_for_destination(
                rocket,
                target,
                target.nominal_distance_km(),
            ),
        })
        .collect();

    PerformanceReport {
        rocket_id: rocket.id.clone(),
        rocket_name: rocket.name.clone(),
        delta_v_m_s: rocket.propulsion.as_ref().map(delta_v),
        targets,
    }
}
