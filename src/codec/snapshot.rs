//! Saved bracket snapshots
//!
//! One line per matchup in pre-order, `sideA;sideB;has_children`, where each
//! side is five fields and an empty side is `;0;0;0;0`. A `1` flag is
//! followed by the whole left subtree, then the whole right subtree; `0`
//! marks a first-round matchup. Lines are joined with `\n`; the first line
//! has nothing before it and there is no trailing newline.

use std::io::{self, Write};
use std::str::Lines;

use tracing::debug;

use super::record::{encode_side, Fields, RawCompetitor, SEPARATOR};
use crate::competitor::{Competitor, MatchSlot};
use crate::tree::{Bracket, BracketNode};
use crate::BracketError;

/// Deepest tree a snapshot may describe (2^32 competitors)
pub const MAX_SNAPSHOT_DEPTH: u32 = 31;

/// Encode a bracket's full state.
pub fn render_snapshot(bracket: &Bracket) -> String {
    bracket
        .preorder()
        .map(|visit| {
            let slot = visit.node.slot();
            format!(
                "{}{sep}{}{sep}{}",
                encode_side(slot.side_a()),
                encode_side(slot.side_b()),
                u8::from(!visit.node.is_leaf()),
                sep = SEPARATOR
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a bracket's full state.
pub fn write_snapshot<W: Write>(writer: &mut W, bracket: &Bracket) -> io::Result<()> {
    writer.write_all(render_snapshot(bracket).as_bytes())?;
    writer.flush()
}

/// Rebuild a bracket from its snapshot text.
pub fn parse_snapshot(text: &str) -> Result<Bracket, BracketError> {
    let mut reader = SnapshotReader {
        lines: text.lines(),
        line: 0,
    };
    let root = reader.read_node(0)?;

    let trailing = std::iter::from_fn(|| reader.next_line()).find(|(_, text)| !text.trim().is_empty());
    if let Some((line, _)) = trailing {
        return Err(BracketError::MalformedRecord {
            line,
            reason: "record after the bracket was complete".to_string(),
        });
    }

    let bracket = Bracket::from_root(root)?;
    check_occupants(&bracket)?;
    debug!(
        competitors = bracket.competitor_count(),
        lines = reader.line,
        "restored bracket snapshot"
    );
    Ok(bracket)
}

/// Later-round occupants must carry seeds from the same field, and each
/// must have come out of the child matchup on its side.
fn check_occupants(bracket: &Bracket) -> Result<(), BracketError> {
    let count = bracket.competitor_count();
    // pre-order position is the snapshot line
    for (line, visit) in (1..).zip(bracket.preorder()) {
        let slot = visit.node.slot();
        for occupant in slot.occupants() {
            let seed = occupant.seed();
            if seed == 0 || seed as usize > count {
                return Err(BracketError::InvalidSeed {
                    seed: i64::from(seed),
                    count,
                });
            }
        }

        let Some((left, right)) = visit.node.children() else {
            continue;
        };
        for (occupant, child) in [(slot.side_a(), left), (slot.side_b(), right)] {
            let Some(occupant) = occupant else { continue };
            if child.slot().find(occupant.seed()).is_none() {
                return Err(BracketError::MalformedRecord {
                    line,
                    reason: format!(
                        "seed {} did not play in the matchup that feeds this side",
                        occupant.seed()
                    ),
                });
            }
        }
    }
    Ok(())
}

struct SnapshotReader<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> SnapshotReader<'a> {
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let text = self.lines.next()?;
        self.line += 1;
        Some((self.line, text))
    }

    fn read_node(&mut self, depth: u32) -> Result<BracketNode, BracketError> {
        if depth > MAX_SNAPSHOT_DEPTH {
            return Err(BracketError::MalformedRecord {
                line: self.line,
                reason: format!("bracket deeper than {MAX_SNAPSHOT_DEPTH} rounds"),
            });
        }

        let (line, text) = self.next_line().ok_or_else(|| BracketError::MalformedRecord {
            line: self.line + 1,
            reason: if self.line == 0 {
                "snapshot is empty".to_string()
            } else {
                "snapshot ended before the bracket was complete".to_string()
            },
        })?;

        let mut fields = Fields::new(text, line);
        let side_a = read_side(&mut fields)?;
        let side_b = read_side(&mut fields)?;
        let has_children: u8 = fields.number("child flag")?;
        fields.finish()?;

        let slot = MatchSlot::new(side_a, side_b);
        match has_children {
            0 => Ok(BracketNode::leaf(slot)),
            1 => {
                let left = self.read_node(depth + 1)?;
                let right = self.read_node(depth + 1)?;
                Ok(BracketNode::internal(slot, left, right))
            }
            other => Err(BracketError::MalformedRecord {
                line,
                reason: format!("child flag must be 0 or 1, found {other}"),
            }),
        }
    }
}

fn read_side(fields: &mut Fields<'_>) -> Result<Option<Competitor>, BracketError> {
    let raw = RawCompetitor::read(fields)?;
    if raw.seed == 0 {
        if raw.name.is_empty() {
            return Ok(None);
        }
        return Err(fields.malformed(format!("'{}' has seed 0", raw.name)));
    }
    if raw.seed < 0 || raw.seed > i64::from(u32::MAX) {
        return Err(fields.malformed(format!("seed {} out of range", raw.seed)));
    }
    Ok(Some(raw.into_competitor()))
}

impl Bracket {
    /// blake3 digest of the snapshot encoding; equal state, equal fingerprint
    pub fn fingerprint(&self) -> String {
        blake3::hash(render_snapshot(self).as_bytes()).to_hex().to_string()
    }
}
