//! Attempt records for the classroom ranking and an in-memory leaderboard.

use serde::{Deserialize, Serialize};

use crate::destination::Destination;
use crate::outcome::MissionResult;

/// One completed mission attempt, as stored by the ranking sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub student: String,
    pub room: String,
    pub destination: Destination,
    pub rocket_id: String,
    pub total_mass_kg: f64,
    pub capacity_kg: f64,
    pub arrived: bool,
    pub score: u32,
}

impl AttemptRecord {
    pub fn from_result(
        result: &MissionResult,
        student: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            student: student.into(),
            room: room.into(),
            destination: result.destination,
            rocket_id: result.rocket_id.clone(),
            total_mass_kg: result.total_mass_kg,
            capacity_kg: result.capacity_kg,
            arrived: result.arrived,
            score: result.score,
        }
    }
}

/// A student's place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub position: usize,
    pub student: String,
    pub room: String,
    pub best_score: u32,
    pub arrived: bool,
    pub attempts: usize,
}

/// Best attempt per student, highest score first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub standings: Vec<Standing>,
}

impl Leaderboard {
    /// Rank records, optionally keeping only one room.
    ///
    /// A student's earlier attempt wins a tie with a later one. Students
    /// with equal best scores are ordered by name.
    pub fn from_records(records: &[AttemptRecord], room: Option<&str>) -> Self {
        let mut standings: Vec<Standing> = Vec::new();

        for record in records
            .iter()
            .filter(|r| room.map_or(true, |wanted| r.room == wanted))
        {
            match standings
                .iter_mut()
                .find(|s| s.student == record.student && s.room == record.room)
            {
                Some(standing) => {
                    standing.attempts += 1;
                    if record.score > standing.best_score {
                        standing.best_score = record.score;
                        standing.arrived = record.arrived;
                    }
                }
                None => standings.push(Standing {
                    position: 0,
                    student: record.student.clone(),
                    room: record.room.clone(),
                    best_score: record.score,
                    arrived: record.arrived,
                    attempts: 1,
                }),
            }
        }

        standings.sort_by(|a, b| {
            b.best_score
                .cmp(&a.best_score)
                .then_with(|| a.student.cmp(&b.student))
        });
        for (index, standing) in standings.iter_mut().enumerate() {
            standing.position = index + 1;
        }

        Self { standings }
    }

    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}
