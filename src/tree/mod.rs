//! Complete binary bracket tree
//!
//! For N competitors (N a power of two, N ≥ 2) the tree has N - 1 nodes,
//! N/2 leaves and depth log2(N) - 1, with the final at depth 0. The shape is
//! fixed at construction; later rounds only ever write into existing slots.

mod node;
mod traversal;

pub use node::BracketNode;
pub use traversal::{PreOrder, Side, Visit};

use tracing::debug;

use crate::competitor::{self, Competitor, MatchSlot};
use crate::seeding;
use crate::util::exact_log2;
use crate::BracketError;

/// A single-elimination bracket session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    /// The final
    root: BracketNode,

    /// N, the number of first-round entrants
    competitor_count: usize,
}

impl Bracket {
    /// Build an unseeded bracket for `competitor_count` entrants.
    pub fn empty(competitor_count: usize) -> Result<Self, BracketError> {
        competitor::check_count(competitor_count)?;
        let depth = exact_log2(competitor_count).ok_or(BracketError::NotPowerOfTwo(competitor_count))? - 1;

        Ok(Self {
            root: BracketNode::build(0, depth),
            competitor_count,
        })
    }

    /// Validate a field, order it canonically and seed the first round.
    pub fn seeded(mut competitors: Vec<Competitor>) -> Result<Self, BracketError> {
        competitor::check_field(&competitors)?;
        competitors.sort_by_key(Competitor::seed);

        let mut bracket = Self::empty(competitors.len())?;
        bracket.populate_leaves(seeding::bracket_order(competitors));
        debug!(
            competitors = bracket.competitor_count,
            depth = bracket.depth(),
            "seeded new bracket"
        );
        Ok(bracket)
    }

    /// Adopt an already-shaped tree (snapshot restore).
    ///
    /// The tree must be complete and its leaves must hold exactly the seeds
    /// `1..=N` where N is twice the leaf count.
    pub fn from_root(root: BracketNode) -> Result<Self, BracketError> {
        if root.complete_height().is_none() {
            return Err(BracketError::MalformedRecord {
                line: 0,
                reason: "bracket tree is not complete".to_string(),
            });
        }

        let competitor_count = root.leaf_count() * 2;
        let leaf_seeds = PreOrder::new(&root)
            .filter(|visit| visit.node.is_leaf())
            .flat_map(|visit| {
                let slot = visit.node.slot();
                [slot.side_a(), slot.side_b()]
            })
            .map(|side| side.map_or(0, |c| i64::from(c.seed())));
        competitor::check_seeds(leaf_seeds, competitor_count)?;

        Ok(Self {
            root,
            competitor_count,
        })
    }

    /// Walk the leaves in pre-order, handing each the next two competitors.
    fn populate_leaves(&mut self, ordered: Vec<Competitor>) {
        fn fill(node: &mut BracketNode, entrants: &mut impl Iterator<Item = Competitor>) {
            match node.parts_mut() {
                (_, Some((left, right))) => {
                    fill(left, entrants);
                    fill(right, entrants);
                }
                (slot, None) => {
                    if let (Some(a), Some(b)) = (entrants.next(), entrants.next()) {
                        *slot = MatchSlot::new(Some(a), Some(b));
                    }
                }
            }
        }

        fill(&mut self.root, &mut ordered.into_iter());
    }

    /// The final
    pub fn root(&self) -> &BracketNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut BracketNode {
        &mut self.root
    }

    /// N, the number of first-round entrants
    pub fn competitor_count(&self) -> usize {
        self.competitor_count
    }

    /// Total matchups (N - 1)
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// First-round matchups (N / 2)
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Depth of the leaves, log2(N) - 1
    pub fn depth(&self) -> u32 {
        self.root.height()
    }

    /// Pre-order walk over every matchup
    pub fn preorder(&self) -> PreOrder<'_> {
        PreOrder::new(&self.root)
    }

    /// First-round matchups, left to right
    pub fn leaves(&self) -> impl Iterator<Item = &BracketNode> {
        self.preorder().map(|visit| visit.node).filter(|node| node.is_leaf())
    }

    /// First-round pairings as `(seed, seed)`; unfilled sides read as 0
    pub fn first_round(&self) -> Vec<(u32, u32)> {
        self.leaves()
            .map(|leaf| {
                let slot = leaf.slot();
                (
                    slot.side_a().map_or(0, Competitor::seed),
                    slot.side_b().map_or(0, Competitor::seed),
                )
            })
            .collect()
    }

    /// Look up the competitor holding `seed` among the first-round entrants
    pub fn competitor(&self, seed: u32) -> Option<&Competitor> {
        self.leaves().find_map(|leaf| leaf.slot().find(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(n: u32) -> Vec<Competitor> {
        (1..=n)
            .map(|s| Competitor::new(format!("Team {s}"), 0, 0, 0, s))
            .collect()
    }

    #[test]
    fn test_shape_for_power_of_two() {
        for n in [2usize, 4, 8, 16, 32, 64] {
            let bracket = Bracket::empty(n).unwrap();
            assert_eq!(bracket.node_count(), n - 1);
            assert_eq!(bracket.leaf_count(), n / 2);
            assert_eq!(bracket.depth(), n.trailing_zeros() - 1);
        }
    }

    #[test]
    fn test_rejects_bad_counts() {
        for n in [0usize, 1, 3, 6, 12, 100] {
            assert!(matches!(Bracket::empty(n), Err(BracketError::NotPowerOfTwo(m)) if m == n));
        }
    }

    #[test]
    fn test_seeded_first_round_order() {
        let bracket = Bracket::seeded(field(8)).unwrap();
        assert_eq!(bracket.first_round(), vec![(1, 8), (4, 5), (2, 7), (3, 6)]);
    }

    #[test]
    fn test_seeded_accepts_unsorted_input() {
        let mut competitors = field(4);
        competitors.reverse();
        let bracket = Bracket::seeded(competitors).unwrap();
        assert_eq!(bracket.first_round(), vec![(1, 4), (2, 3)]);
        assert_eq!(bracket.competitor(3).map(Competitor::name), Some("Team 3"));
    }

    #[test]
    fn test_internal_slots_start_empty() {
        let bracket = Bracket::seeded(field(16)).unwrap();
        for visit in bracket.preorder() {
            assert_eq!(visit.node.is_leaf(), visit.node.slot().is_decided());
            assert_eq!(!visit.node.is_leaf(), visit.node.slot().is_empty());
        }
    }

    #[test]
    fn test_seeded_rejects_unwritable_names() {
        for name in ["A;B", "A\nB"] {
            let competitors = vec![
                Competitor::new("Team 1", 0, 0, 0, 1),
                Competitor::new(name, 0, 0, 0, 2),
            ];
            assert!(
                matches!(Bracket::seeded(competitors), Err(BracketError::MalformedRecord { line: 2, .. })),
                "{name:?}"
            );
        }
    }

    #[test]
    fn test_two_competitor_bracket_is_a_lone_final() {
        let bracket = Bracket::seeded(field(2)).unwrap();
        assert_eq!(bracket.node_count(), 1);
        assert_eq!(bracket.depth(), 0);
        assert_eq!(bracket.first_round(), vec![(1, 2)]);
    }

    #[test]
    fn test_from_root_rejects_duplicate_leaf_seed() {
        let mut root = BracketNode::build(0, 1);
        {
            let (_, children) = root.parts_mut();
            let (left, right) = children.unwrap();
            *left.parts_mut().0 = MatchSlot::new(
                Some(Competitor::new("A", 0, 0, 0, 1)),
                Some(Competitor::new("B", 0, 0, 0, 4)),
            );
            *right.parts_mut().0 = MatchSlot::new(
                Some(Competitor::new("C", 0, 0, 0, 4)),
                Some(Competitor::new("D", 0, 0, 0, 3)),
            );
        }
        assert!(matches!(
            Bracket::from_root(root),
            Err(BracketError::InvalidSeed { seed: 4, count: 4 })
        ));
    }
}
