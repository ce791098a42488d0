//! Score tracking for mission evaluation.

use serde::{Deserialize, Serialize};

/// Accumulates score adjustments while a mission is evaluated.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    /// Running total, may dip below zero before clamping.
    pub total: i32,
    /// Every adjustment, in the order it was applied.
    pub history: Vec<ScoreAdjustment>,
}

/// A single score change and why it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAdjustment {
    pub delta: i32,
    pub reason: String,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score change. Zero deltas are not recorded.
    pub fn add(&mut self, delta: i32, reason: impl Into<String>) {
        if delta == 0 {
            return;
        }
        self.total += delta;
        self.history.push(ScoreAdjustment {
            delta,
            reason: reason.into(),
        });
    }

    /// Final score, never negative.
    pub fn clamped(&self) -> u32 {
        self.total.max(0) as u32
    }
}
