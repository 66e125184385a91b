//! Pre-order traversal over a bracket tree
//!
//! The order is load-bearing: leaves are seeded, saved and restored in the
//! order this iterator yields them (node, then left subtree, then right
//! subtree). Stack depth is O(log N).

use super::BracketNode;

/// Which edge the walk took to reach a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Arrived from the parent's left child edge
    Left,

    /// Arrived from the parent's right child edge
    Right,

    /// The final; no parent
    Root,
}

/// One node visited during a pre-order walk
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// The visited node
    pub node: &'a BracketNode,

    /// Edge used to reach it
    pub side: Side,

    /// Distance from the root (root = 0)
    pub depth: u32,
}

/// Pre-order iterator (node, left subtree, right subtree)
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> PreOrder<'a> {
    /// Start a walk at `root`
    pub fn new(root: &'a BracketNode) -> Self {
        Self {
            stack: vec![Visit {
                node: root,
                side: Side::Root,
                depth: 0,
            }],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        if let Some((left, right)) = visit.node.children() {
            // Right first so left pops first.
            self.stack.push(Visit {
                node: right,
                side: Side::Right,
                depth: visit.depth + 1,
            });
            self.stack.push(Visit {
                node: left,
                side: Side::Left,
                depth: visit.depth + 1,
            });
        }
        Some(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preorder_sides_and_depths() {
        let root = BracketNode::build(0, 2);
        let visits: Vec<(Side, u32)> = PreOrder::new(&root).map(|v| (v.side, v.depth)).collect();

        assert_eq!(
            visits,
            vec![
                (Side::Root, 0),
                (Side::Left, 1),
                (Side::Left, 2),
                (Side::Right, 2),
                (Side::Right, 1),
                (Side::Left, 2),
                (Side::Right, 2),
            ]
        );
    }

    #[test]
    fn test_single_node_walk() {
        let root = BracketNode::build(0, 0);
        let visits: Vec<_> = PreOrder::new(&root).collect();
        assert_eq!(visits.len(), 1);
        assert!(visits[0].node.is_leaf());
    }
}
