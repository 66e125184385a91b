#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use knockout::{Bracket, Competitor};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("KNOCKOUT_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set KNOCKOUT_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Fresh path under the system temp dir, unique per test name and process.
pub fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("knockout-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch directory");
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

/// Write `contents` to a scratch file and return its path.
pub fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = scratch_path(name);
    fs::write(&path, contents).expect("write scratch file");
    path
}

/// `Team 1` .. `Team n`, seeds matching.
pub fn field(n: u32) -> Vec<Competitor> {
    (1..=n)
        .map(|seed| Competitor::new(format!("Team {seed}"), seed, n - seed, 0, seed))
        .collect()
}

pub fn seeded(n: u32) -> Bracket {
    Bracket::seeded(field(n)).expect("valid field")
}

pub const OREGON_6A: &str = "Jesuit;14;1;0;1\n\
Sheldon;13;2;0;2\n\
West Linn;12;2;1;3\n\
Tigard;11;4;0;4\n";
