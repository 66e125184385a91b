//! # Seeded Single-Elimination Brackets
//!
//! This library builds, plays out and persists single-elimination
//! tournament brackets for a power-of-two field of seeded competitors.
//!
//! ## Core Pieces
//!
//! 1. **Tree**: a complete binary tree of matchups; N competitors give
//!    N - 1 matchups and N/2 first-round leaves
//! 2. **Seeding**: the canonical pairing order that keeps the top 2^k seeds
//!    apart until the round of 2^k
//! 3. **Advancement**: a tree walk that copies a decided matchup's chosen
//!    occupant into the parent matchup
//! 4. **Persistence**: raw seed lists in, snapshots of a bracket in
//!    progress in and out
//!
//! ## Usage Example
//!
//! ```no_run
//! use knockout::AdvanceOutcome;
//!
//! let mut bracket = knockout::load_new("field.txt")?;
//! assert_eq!(bracket.advance(1), AdvanceOutcome::Advanced);
//! println!("{}", knockout::render(&bracket));
//! knockout::save(&bracket, "saved.txt")?;
//! # Ok::<(), knockout::BracketError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod competitor; // Competitor records and matchup slots
pub mod tree;       // Bracket tree structure and traversal
pub mod seeding;    // Canonical pairing order
pub mod advance;    // Winner advancement
pub mod codec;      // Seed-list and snapshot formats
pub mod roster;     // Seed-list editing
pub mod render;     // Terminal grid
pub mod util;       // Helper functions

// Re-exports for convenience
pub use advance::{advance, AdvanceOutcome};
pub use codec::{load_new, load_saved, save, save_seed_list};
pub use competitor::{Competitor, MatchSlot};
pub use render::{render, render_with, RenderConfig};
pub use roster::Roster;
pub use tree::{Bracket, BracketNode, Side};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, loading or saving a bracket
#[derive(Error, Debug)]
pub enum BracketError {
    /// Competitor count is not a power of two of at least 2
    #[error("number of competitors ({0}) isn't a power of two of at least 2")]
    NotPowerOfTwo(usize),

    /// A record ended early or held a non-numeric field
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number (0 when not tied to a line)
        line: usize,
        /// What was wrong
        reason: String,
    },

    /// A seed is duplicated or outside `[1, N]`
    #[error("invalid seed {seed} for a field of {count}")]
    InvalidSeed {
        /// The offending seed as read
        seed: i64,
        /// Field size N
        count: usize,
    },

    /// The input file does not exist
    #[error("file {} not found", .path.display())]
    FileNotFound {
        /// Requested path
        path: PathBuf,
    },

    /// The input file exists but could not be read
    #[error("cannot read {}: {source}", .path.display())]
    FileUnreadable {
        /// Requested path
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// The output file could not be written
    #[error("cannot write {}: {source}", .path.display())]
    FileUnwritable {
        /// Requested path
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BracketError::NotPowerOfTwo(3).to_string(),
            "number of competitors (3) isn't a power of two of at least 2"
        );
        assert_eq!(
            BracketError::InvalidSeed { seed: 2, count: 4 }.to_string(),
            "invalid seed 2 for a field of 4"
        );
        let err = BracketError::MalformedRecord {
            line: 7,
            reason: "missing seed".to_string(),
        };
        assert_eq!(err.to_string(), "malformed record on line 7: missing seed");
    }

    #[test]
    fn test_end_to_end_in_memory() {
        let text = "A;3;0;0;1\nB;2;1;0;2\nC;1;2;0;3\nD;0;3;0;4";
        let mut bracket = Bracket::seeded(codec::parse_seed_list(text).unwrap()).unwrap();
        assert_eq!(advance(&mut bracket, 1), AdvanceOutcome::Advanced);
        assert_eq!(advance(&mut bracket, 2), AdvanceOutcome::Advanced);

        let restored = codec::parse_snapshot(&codec::render_snapshot(&bracket)).unwrap();
        assert_eq!(restored, bracket);
        assert_eq!(advance(&mut bracket, 2), AdvanceOutcome::Champion(2));
    }
}
