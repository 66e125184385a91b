//! Text persistence for brackets
//!
//! Two formats share the `name;wins;losses;ties;seed` record syntax:
//! raw seed lists (a fresh field) and saved snapshots (a bracket in
//! progress). The parsers work on `&str`; the `load_*`/`save*` functions
//! add file access and map I/O failures onto [`BracketError`]. Loading is
//! all-or-nothing: on error nothing partially built escapes.

mod record;
mod seed_list;
mod snapshot;

pub use record::SEPARATOR;
pub use seed_list::{parse_roster, parse_seed_list, render_seed_list, write_seed_list};
pub use snapshot::{parse_snapshot, render_snapshot, write_snapshot, MAX_SNAPSHOT_DEPTH};

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use tracing::info;

use crate::competitor::Competitor;
use crate::tree::Bracket;
use crate::BracketError;

/// Build a fresh, seeded bracket from a raw seed-list file.
pub fn load_new<P: AsRef<Path>>(path: P) -> Result<Bracket, BracketError> {
    let text = read_text(path.as_ref())?;
    Bracket::seeded(parse_seed_list(&text)?)
}

/// Restore a bracket from a snapshot file.
pub fn load_saved<P: AsRef<Path>>(path: P) -> Result<Bracket, BracketError> {
    let text = read_text(path.as_ref())?;
    parse_snapshot(&text)
}

/// Write a bracket snapshot, replacing any existing file.
pub fn save<P: AsRef<Path>>(bracket: &Bracket, path: P) -> Result<(), BracketError> {
    let path = path.as_ref();
    write_file(path, |writer| write_snapshot(writer, bracket))?;
    info!(path = %path.display(), competitors = bracket.competitor_count(), "saved bracket");
    Ok(())
}

/// Write competitors as a raw seed list, replacing any existing file.
pub fn save_seed_list<P: AsRef<Path>>(competitors: &[Competitor], path: P) -> Result<(), BracketError> {
    let path = path.as_ref();
    write_file(path, |writer| write_seed_list(writer, competitors))?;
    info!(path = %path.display(), records = competitors.len(), "saved seed list");
    Ok(())
}

/// Read a whole file as UTF-8 text.
pub(crate) fn read_text(path: &Path) -> Result<String, BracketError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BracketError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => BracketError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_file<F>(path: &Path, write: F) -> Result<(), BracketError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let unwritable = |source| BracketError::FileUnwritable {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(unwritable)?);
    write(&mut writer).map_err(unwritable)
}
