//! Winner advancement
//!
//! Given a seed, find the matchup currently contesting it and, if that
//! matchup is decided, copy the occupant into the parent's slot on the side
//! the search arrived from. The search state is `(node, parent slot, side)`
//! threaded through recursion; nothing is stored on the nodes.
//!
//! Transitions at each node:
//!
//! | slot            | action                                                  |
//! |-----------------|---------------------------------------------------------|
//! | both empty      | search left, then right                                 |
//! | one filled      | seed matches: no opponent yet; else search the open side|
//! | both filled     | seed absent: not here; else promote (or champion at root)|
//!
//! At most one slot is written per call. Promotion replaces whatever sits on
//! the arrival side (last decision wins), although a filled side also closes
//! its subtree to later searches.

use tracing::trace;

use crate::competitor::{Competitor, MatchSlot};
use crate::tree::{Bracket, BracketNode, Side};

/// Result of an advancement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The seed was written into the next round
    Advanced,

    /// The seed's current matchup still waits on an opponent; nothing changed
    NoOpponentYet,

    /// The seed is in the decided final; there is no later round
    Champion(u32),

    /// The seed is not contesting any matchup.
    ///
    /// This includes a seed that already advanced: once the next round holds
    /// an occupant on that side, the earlier matchup is closed, so a pick
    /// cannot be corrected by advancing its opponent afterwards.
    NotFound,
}

impl AdvanceOutcome {
    /// `true` when a slot was written
    pub fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced)
    }
}

impl Bracket {
    /// Promote `seed` out of its current matchup.
    pub fn advance(&mut self, seed: u32) -> AdvanceOutcome {
        let outcome = search(self.root_mut(), None, Side::Root, seed);
        trace!(seed, ?outcome, "advance");
        outcome
    }
}

/// Free-function form of [`Bracket::advance`]
pub fn advance(bracket: &mut Bracket, seed: u32) -> AdvanceOutcome {
    bracket.advance(seed)
}

fn search(node: &mut BracketNode, parent: Option<&mut MatchSlot>, arrival: Side, seed: u32) -> AdvanceOutcome {
    let (slot, children) = node.parts_mut();

    match (slot.side_a(), slot.side_b()) {
        (None, None) => match children {
            Some((left, right)) => {
                match search(left, Some(&mut *slot), Side::Left, seed) {
                    AdvanceOutcome::NotFound => search(right, Some(slot), Side::Right, seed),
                    found => found,
                }
            }
            None => AdvanceOutcome::NotFound,
        },
        (Some(only), None) | (None, Some(only)) => {
            if only.seed() == seed {
                return AdvanceOutcome::NoOpponentYet;
            }
            // The filled side's subtree is settled; the open side may still hold the seed.
            let open = if slot.side_a().is_some() { Side::Right } else { Side::Left };
            match (children, open) {
                (Some((_, right)), Side::Right) => search(right, Some(slot), Side::Right, seed),
                (Some((left, _)), _) => search(left, Some(slot), Side::Left, seed),
                (None, _) => AdvanceOutcome::NotFound,
            }
        }
        (Some(_), Some(_)) => {
            let Some(winner) = slot.find(seed).cloned() else {
                return AdvanceOutcome::NotFound;
            };
            match parent {
                None => AdvanceOutcome::Champion(seed),
                Some(parent) => {
                    promote(parent, arrival, winner);
                    AdvanceOutcome::Advanced
                }
            }
        }
    }
}

fn promote(parent: &mut MatchSlot, arrival: Side, winner: Competitor) {
    let replaced = match arrival {
        Side::Left => parent.set_side_a(winner),
        Side::Right => parent.set_side_b(winner),
        Side::Root => None,
    };
    if let Some(previous) = replaced {
        trace!(seed = previous.seed(), "overwrote earlier promotion");
    }
}
