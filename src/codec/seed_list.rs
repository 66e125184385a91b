//! Raw seed lists: one `name;wins;losses;ties;seed` record per line
//!
//! This is the source of truth for a fresh bracket. Blank lines after the
//! last record are ignored; anything else that does not parse is a
//! `MalformedRecord`.

use std::io::{self, Write};

use tracing::{debug, warn};

use super::record::{Fields, RawCompetitor};
use crate::competitor::{self, Competitor};
use crate::BracketError;

/// Parse every record, with no field-level validation.
fn read_records(text: &str) -> Result<Vec<RawCompetitor>, BracketError> {
    let lines: Vec<&str> = text.lines().collect();
    let used = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);
    if used < lines.len() {
        warn!(ignored = lines.len() - used, "ignoring trailing blank lines");
    }

    lines[..used]
        .iter()
        .enumerate()
        .map(|(idx, line)| -> Result<RawCompetitor, BracketError> {
            let mut fields = Fields::new(line, idx + 1);
            let record = RawCompetitor::read(&mut fields)?;
            fields.finish()?;
            Ok(record)
        })
        .collect()
}

/// Parse and validate a seed list for a new bracket.
///
/// Errors surface in the order the checks run: malformed records, then a
/// count that is not a power of two, then out-of-range or duplicate seeds.
/// Competitors come back in file order.
pub fn parse_seed_list(text: &str) -> Result<Vec<Competitor>, BracketError> {
    let records = read_records(text)?;
    competitor::check_count(records.len())?;
    competitor::check_seeds(records.iter().map(|r| r.seed), records.len())?;

    debug!(records = records.len(), "parsed seed list");
    Ok(records.into_iter().map(RawCompetitor::into_competitor).collect())
}

/// Parse a seed list that may still be under construction.
///
/// Only the record syntax is checked; seeds must merely be non-negative.
pub fn parse_roster(text: &str) -> Result<Vec<Competitor>, BracketError> {
    let records = read_records(text)?;
    let count = records.len();

    records
        .into_iter()
        .map(|record| {
            if record.seed < 0 || record.seed > i64::from(u32::MAX) {
                return Err(BracketError::InvalidSeed {
                    seed: record.seed,
                    count,
                });
            }
            Ok(record.into_competitor())
        })
        .collect()
}

/// Render competitors as a seed list: records joined by `\n`, no trailing newline.
pub fn render_seed_list(competitors: &[Competitor]) -> String {
    competitors
        .iter()
        .map(|c| super::record::encode_side(Some(c)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write competitors in seed-list form.
pub fn write_seed_list<W: Write>(writer: &mut W, competitors: &[Competitor]) -> io::Result<()> {
    writer.write_all(render_seed_list(competitors).as_bytes())?;
    writer.flush()
}
