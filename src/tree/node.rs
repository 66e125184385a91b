//! Bracket tree node
//!
//! Every node owns one matchup. Internal nodes own exactly two children
//! through a single box, so a subtree is always dropped as a unit and no
//! node ever outlives its owner.

use crate::competitor::MatchSlot;

/// One matchup in the bracket plus the two feeder matchups beneath it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketNode {
    slot: MatchSlot,
    children: Option<Box<(BracketNode, BracketNode)>>,
}

impl BracketNode {
    /// First-round matchup (no feeders)
    pub fn leaf(slot: MatchSlot) -> Self {
        Self {
            slot,
            children: None,
        }
    }

    /// Later-round matchup fed by `left` and `right`
    pub fn internal(slot: MatchSlot, left: BracketNode, right: BracketNode) -> Self {
        Self {
            slot,
            children: Some(Box::new((left, right))),
        }
    }

    /// Build an empty complete subtree whose leaves sit at `max_depth`.
    pub(crate) fn build(depth: u32, max_depth: u32) -> Self {
        if depth < max_depth {
            Self::internal(
                MatchSlot::empty(),
                Self::build(depth + 1, max_depth),
                Self::build(depth + 1, max_depth),
            )
        } else {
            Self::leaf(MatchSlot::empty())
        }
    }

    /// The matchup hosted here
    pub fn slot(&self) -> &MatchSlot {
        &self.slot
    }

    /// `true` for first-round matchups
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Feeder matchups, `None` for leaves
    pub fn children(&self) -> Option<(&BracketNode, &BracketNode)> {
        self.children.as_deref().map(|(left, right)| (left, right))
    }

    /// Left feeder
    pub fn left(&self) -> Option<&BracketNode> {
        self.children().map(|(left, _)| left)
    }

    /// Right feeder
    pub fn right(&self) -> Option<&BracketNode> {
        self.children().map(|(_, right)| right)
    }

    /// Split borrow: this node's slot alongside mutable access to its children.
    ///
    /// Advancement writes into the slot while searching the children.
    pub(crate) fn parts_mut(&mut self) -> (&mut MatchSlot, Option<(&mut BracketNode, &mut BracketNode)>) {
        let children = self
            .children
            .as_deref_mut()
            .map(|(left, right)| (left, right));
        (&mut self.slot, children)
    }

    /// Nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.node_count() + right.node_count(),
            None => 1,
        }
    }

    /// Leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self.children() {
            Some((left, right)) => left.leaf_count() + right.leaf_count(),
            None => 1,
        }
    }

    /// Levels below this node along the left spine (leaf = 0)
    pub fn height(&self) -> u32 {
        let mut node = self;
        let mut height = 0;
        while let Some(left) = node.left() {
            node = left;
            height += 1;
        }
        height
    }

    /// Uniform height if every leaf sits at the same depth, else `None`
    pub fn complete_height(&self) -> Option<u32> {
        match self.children() {
            None => Some(0),
            Some((left, right)) => {
                let l = left.complete_height()?;
                let r = right.complete_height()?;
                (l == r).then_some(l + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competitor::Competitor;

    #[test]
    fn test_build_counts() {
        let root = BracketNode::build(0, 3);
        assert_eq!(root.node_count(), 15);
        assert_eq!(root.leaf_count(), 8);
        assert_eq!(root.height(), 3);
        assert_eq!(root.complete_height(), Some(3));
    }

    #[test]
    fn test_lone_final_is_leaf() {
        let root = BracketNode::build(0, 0);
        assert!(root.is_leaf());
        assert!(root.children().is_none());
        assert_eq!(root.node_count(), 1);
    }

    #[test]
    fn test_incomplete_shape_detected() {
        let lopsided = BracketNode::internal(
            MatchSlot::empty(),
            BracketNode::build(0, 1),
            BracketNode::leaf(MatchSlot::empty()),
        );
        assert_eq!(lopsided.complete_height(), None);
    }

    #[test]
    fn test_parts_mut_split_borrow() {
        let mut root = BracketNode::build(0, 1);
        let (slot, children) = root.parts_mut();
        let (left, _) = children.expect("internal node");
        left.parts_mut().0.set_side_a(Competitor::new("A", 0, 0, 0, 1));
        slot.set_side_a(Competitor::new("A", 0, 0, 0, 1));

        assert_eq!(root.slot().side_a().map(Competitor::seed), Some(1));
        assert_eq!(
            root.left().and_then(|n| n.slot().side_a()).map(Competitor::seed),
            Some(1)
        );
    }
}
