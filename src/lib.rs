//! Roster Tune - a character roster maintenance tool
//!
//! Core modules:
//! - `roster`: In-memory HP adjustment over open character records
//! - `persistence`: JSON roster load/save

pub mod persistence;
pub mod roster;

pub use persistence::{load_roster, save_roster};
pub use roster::boost_low_hp;

use std::path::{Path, PathBuf};

/// Tuning constants
pub mod consts {
    /// Characters at or below this HP qualify for the boost
    pub const HP_THRESHOLD: i64 = 100;
    /// Flat HP increase applied to qualifying characters
    pub const HP_BOOST: i64 = 50;

    /// Default roster file read when no input path is given
    pub const DEFAULT_INPUT: &str = "characters.json";
    /// Default file the adjusted roster is written to
    pub const DEFAULT_OUTPUT: &str = "characters_updated.json";
}

/// Everything that can go wrong while adjusting a roster file
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("expected a top-level JSON array in {}", path.display())]
    NotAnArray { path: PathBuf },
    #[error("character at index {index} has a non-numeric HP value")]
    BadHp { index: usize },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of one adjustment pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustReport {
    /// Records in the roster
    pub total: usize,
    /// Records whose HP was boosted
    pub boosted: usize,
}

/// Load the roster at `input_path`, boost every character at or below the HP
/// threshold, and write the result to `output_path`.
///
/// All-or-nothing: any failure aborts before `output_path` is produced.
pub fn adjust_hp(input_path: &Path, output_path: &Path) -> Result<AdjustReport, RosterError> {
    let mut characters = persistence::load_roster(input_path)?;
    let boosted = roster::boost_low_hp(&mut characters)?;
    persistence::save_roster(output_path, &characters)?;

    Ok(AdjustReport {
        total: characters.len(),
        boosted,
    })
}
