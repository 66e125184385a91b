//! Competitor records and matchup slots
//!
//! A competitor is read once from a seed list (or a roster) and is never
//! mutated while it sits in a bracket. Its seed doubles as its identity
//! during advancement, so a bracket's seeds must be exactly `1..=N`.

mod slot;

pub use slot::MatchSlot;

use std::fmt;

use bitvec::prelude::*;

use crate::codec::SEPARATOR;
use crate::util::is_power_of_two;
use crate::BracketError;

/// Width of the name column inside a bracket label
pub const LABEL_NAME_WIDTH: usize = 10;

/// Narrowest seed column inside a bracket label
pub const LABEL_SEED_WIDTH: usize = 2;

/// Characters a name may not contain: the record separator and line breaks
pub const RESERVED_NAME_CHARS: [char; 3] = [SEPARATOR, '\n', '\r'];

/// One seeded entrant with its season record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    name: String,
    wins: u32,
    losses: u32,
    ties: u32,
    seed: u32,
}

impl Competitor {
    /// Create a competitor record
    pub fn new(name: impl Into<String>, wins: u32, losses: u32, ties: u32, seed: u32) -> Self {
        Self {
            name: name.into(),
            wins,
            losses,
            ties,
            seed,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Season wins
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Season losses
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Season ties
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Seed rank (1 = top)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Exact name comparison
    pub fn same_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Replace the season record (roster editing only)
    pub fn set_record(&mut self, wins: u32, losses: u32, ties: u32) {
        self.wins = wins;
        self.losses = losses;
        self.ties = ties;
    }

    /// Replace the seed (roster editing only)
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
    }

    /// Rename (roster editing only); reserved characters are refused
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), BracketError> {
        let name = name.into();
        check_name(&name, 0)?;
        self.name = name;
        Ok(())
    }

    /// Season record as `W-L`, or `W-L-T` when ties were played
    pub fn record(&self) -> String {
        if self.ties > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }

    /// Fixed-width label used inside bracket boxes: `" SS NAME       "`.
    ///
    /// The seed is left-aligned in `seed_width` columns (see
    /// [`label_seed_width`]). Names longer than `name_width` are truncated on
    /// a char boundary.
    pub fn bracket_label(&self, seed_width: usize, name_width: usize) -> String {
        let name: String = self.name.chars().take(name_width).collect();
        format!(" {:<seed_width$} {:<name_width$} ", self.seed, name)
    }
}

/// Record card: name, season record, seed
impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "{}", self.record())?;
        write!(f, "Seed: {}", self.seed)
    }
}

/// Seed column wide enough for every seed of a field of `count`
pub fn label_seed_width(count: usize) -> usize {
    let digits = count.checked_ilog10().map_or(1, |d| d as usize + 1);
    digits.max(LABEL_SEED_WIDTH)
}

/// Validate a field of competitors for bracket construction.
///
/// Checks, in order: every name can be written to a seed list or snapshot,
/// the count is a power of two of at least two, then every seed lies in
/// `[1, N]` and appears once.
pub fn check_field(competitors: &[Competitor]) -> Result<(), BracketError> {
    for (idx, competitor) in competitors.iter().enumerate() {
        check_name(&competitor.name, idx + 1)?;
    }
    check_count(competitors.len())?;
    check_seeds(competitors.iter().map(|c| i64::from(c.seed)), competitors.len())
}

/// Reject names holding a reserved character; `line` is the record's position
pub fn check_name(name: &str, line: usize) -> Result<(), BracketError> {
    if name.contains(&RESERVED_NAME_CHARS[..]) {
        return Err(BracketError::MalformedRecord {
            line,
            reason: format!("name '{}' contains a reserved character", name.escape_debug()),
        });
    }
    Ok(())
}

/// Reject counts that cannot form a bracket (`N < 2` or not a power of two)
pub fn check_count(count: usize) -> Result<(), BracketError> {
    if count < 2 || !is_power_of_two(count) {
        return Err(BracketError::NotPowerOfTwo(count));
    }
    Ok(())
}

/// Verify `seeds` is a permutation of `1..=count`.
pub fn check_seeds<I>(seeds: I, count: usize) -> Result<(), BracketError>
where
    I: IntoIterator<Item = i64>,
{
    let mut seen = bitvec![0; count + 1];
    for seed in seeds {
        let in_range = seed >= 1 && (seed as u64) <= count as u64;
        if !in_range || seen[seed as usize] {
            return Err(BracketError::InvalidSeed { seed, count });
        }
        seen.set(seed as usize, true);
    }
    Ok(())
}
