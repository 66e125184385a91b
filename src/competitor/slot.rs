//! One round's matchup: two optional occupants
//!
//! Sides only ever fill; nothing in the public API empties a side again.

use std::fmt;

use super::Competitor;

/// Ordered pair of optional competitors contesting one matchup
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSlot {
    side_a: Option<Competitor>,
    side_b: Option<Competitor>,
}

impl MatchSlot {
    /// Slot with neither side filled
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slot with both sides given up front
    pub fn new(side_a: Option<Competitor>, side_b: Option<Competitor>) -> Self {
        Self { side_a, side_b }
    }

    /// Upper occupant
    pub fn side_a(&self) -> Option<&Competitor> {
        self.side_a.as_ref()
    }

    /// Lower occupant
    pub fn side_b(&self) -> Option<&Competitor> {
        self.side_b.as_ref()
    }

    /// Fill the upper side, returning whoever was there before
    pub fn set_side_a(&mut self, competitor: Competitor) -> Option<Competitor> {
        self.side_a.replace(competitor)
    }

    /// Fill the lower side, returning whoever was there before
    pub fn set_side_b(&mut self, competitor: Competitor) -> Option<Competitor> {
        self.side_b.replace(competitor)
    }

    /// Neither side filled
    pub fn is_empty(&self) -> bool {
        self.side_a.is_none() && self.side_b.is_none()
    }

    /// Both sides filled: the matchup can be decided
    pub fn is_decided(&self) -> bool {
        self.side_a.is_some() && self.side_b.is_some()
    }

    /// Occupant holding `seed`, if any
    pub fn find(&self, seed: u32) -> Option<&Competitor> {
        self.occupants().find(|c| c.seed() == seed)
    }

    /// Filled sides, upper first
    pub fn occupants(&self) -> impl Iterator<Item = &Competitor> {
        self.side_a.iter().chain(self.side_b.iter())
    }
}

impl fmt::Display for MatchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |c: Option<&Competitor>| match c {
            Some(c) => format!("({}) {}", c.seed(), c.name()),
            None => "TBD".to_string(),
        };
        write!(f, "{} vs {}", side(self.side_a()), side(self.side_b()))
    }
}
