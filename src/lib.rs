//! Deterministic quality scores, badges and insights for a repository,
//! computed from an already-fetched metadata snapshot.

pub mod analyze;
pub mod badges;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod insight;
pub mod report;
pub mod scan;
pub mod types;

pub use compare::{compare, compare_snapshots, Comparison, SnapshotComparison, Winner};
pub use engine::{evaluate, evaluate_facts};
pub use error::{EngineError, Result};
pub use scan::{discover, Facts};
pub use types::config::ScoringConfig;
pub use types::report::{Badge, BadgeLevel, EngineReport, InsightBundle, Priority};
pub use types::scoring::{Dimension, DimensionScores};
pub use types::snapshot::RepositorySnapshot;
