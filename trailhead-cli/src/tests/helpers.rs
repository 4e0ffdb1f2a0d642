//! Test helpers for writing trail artefacts into a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const TRAILS_JSON: &str = r#"[
  {"id": 1, "name": "Routeburn Track", "description": "Alpine crossing past mountain lakes",
   "difficulty": "intermediate", "completionType": "One way", "timeUnit": "days",
   "minMinutes": 1200, "maxMinutes": 1800, "multiDay": true, "region": "Fiordland"},
  {"id": 2, "name": "abbey caves", "description": "Limestone caves in native bush",
   "difficulty": "unknown", "completionType": "Return", "timeUnit": "hours",
   "minMinutes": 60, "maxMinutes": 120},
  {"id": 3, "name": "Hooker Valley", "description": "Easy walk to a glacier lake below the mountain",
   "difficulty": "easy", "completionType": "Return", "timeUnit": "hours",
   "minMinutes": 180, "maxMinutes": 180, "region": "Canterbury"}
]"#;

pub(super) const CATEGORIES_JSON: &str = r#"{
  "Forest": ["forest", "bush"],
  "Alpine": ["mountain", "alpine"],
  "Wet": ["lake", "river"]
}"#;

pub(super) const PREFERENCES_JSON: &str = r#"{"mountain": 5, "lakeRiver": 3, "bush": 1}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write artefact");
}

/// A temporary artefacts directory holding the three default files.
pub(super) struct Artefacts {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Artefacts {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_utf8(&root.join("trails.json"), TRAILS_JSON.as_bytes());
        write_utf8(&root.join("categories.json"), CATEGORIES_JSON.as_bytes());
        write_utf8(&root.join("preferences.json"), PREFERENCES_JSON.as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}
