//! Editable list of competitors for building a seed list
//!
//! A roster may be incomplete (wrong count, gaps in seeds) while it is
//! being edited; [`Roster::validate`] applies the bracket rules only when
//! the caller asks.

use std::path::Path;

use tracing::debug;

use crate::codec;
use crate::competitor::{self, Competitor};
use crate::tree::Bracket;
use crate::BracketError;

/// Ordered collection of competitors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    competitors: Vec<Competitor>,
}

impl Roster {
    /// Empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a seed-list file without enforcing bracket rules
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BracketError> {
        let text = codec::read_text(path.as_ref())?;
        let competitors = codec::parse_roster(&text)?;
        debug!(records = competitors.len(), "loaded roster");
        Ok(Self { competitors })
    }

    /// Write the roster as a seed list
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BracketError> {
        codec::save_seed_list(&self.competitors, path)
    }

    /// Append a competitor.
    ///
    /// Names may not contain the record separator or line breaks, since
    /// they could not be read back.
    pub fn add(&mut self, competitor: Competitor) -> Result<(), BracketError> {
        competitor::check_name(competitor.name(), self.competitors.len() + 1)?;
        self.competitors.push(competitor);
        Ok(())
    }

    /// Remove the first competitor named exactly `name`
    pub fn remove(&mut self, name: &str) -> bool {
        match self.competitors.iter().position(|c| c.same_name(name)) {
            Some(idx) => {
                self.competitors.remove(idx);
                true
            }
            None => false,
        }
    }

    /// First competitor named exactly `name`
    pub fn find(&self, name: &str) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.same_name(name))
    }

    /// Mutable access to the first competitor named exactly `name`
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Competitor> {
        self.competitors.iter_mut().find(|c| c.same_name(name))
    }

    /// Drop every competitor
    pub fn clear(&mut self) {
        self.competitors.clear();
    }

    /// Number of competitors
    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    /// `true` when no competitors are listed
    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Competitors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Competitor> {
        self.competitors.iter()
    }

    /// Writable names, power-of-two count, seeds `1..=N` each used once
    pub fn validate(&self) -> Result<(), BracketError> {
        competitor::check_field(&self.competitors)
    }

    /// Validate and seed a fresh bracket
    pub fn into_bracket(self) -> Result<Bracket, BracketError> {
        Bracket::seeded(self.competitors)
    }
}

impl FromIterator<Competitor> for Roster {
    fn from_iter<I: IntoIterator<Item = Competitor>>(iter: I) -> Self {
        Self {
            competitors: iter.into_iter().collect(),
        }
    }
}
