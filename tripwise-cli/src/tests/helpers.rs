//! Temporary workspaces holding request and catalog files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory with UTF-8 paths for request fixtures.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// A catalog document with one destination and three sample activities.
pub(super) const SMALL_CATALOG: &str = r#"{
    "destinations": [
        {"id": "x", "name": "Xanadu", "location": "Nowhere", "rating": 4.2},
        {"id": "y", "name": "Yonder", "location": "Far away", "rating": 4.9}
    ],
    "weights": {"x": {"1": 0.8}},
    "activities": {
        "x": [
            {"time": "09:00", "title": "Pleasure dome", "description": "", "location": "Xanadu", "duration": "2h"},
            {"time": "13:00", "title": "Sacred river", "description": "", "location": "Alph", "duration": "1h"},
            {"time": "16:00", "title": "Caverns", "description": "", "location": "Xanadu", "duration": "3h"}
        ]
    }
}"#;
