#![allow(dead_code)]

use std::{fs, path::Path};

use tempfile::TempDir;
use vigil_core::{DevotionComposer, DevotionComposerBuilder};

pub const LECTIONARY_JSON: &str = r#"{
    "2025-11-30": {
        "firstReading": "Isaiah 2:1-5",
        "psalm": "Psalm 122",
        "secondReading": "Romans 13:11-14",
        "gospel": "Matthew 24:36-44"
    },
    "2025-12-25": {
        "firstReading": "Isaiah 9:2-7",
        "psalm": "Psalm 96",
        "secondReading": "Titus 2:11-14",
        "gospel": "Luke 2:1-14"
    },
    "2025-03-05": {
        "firstReading": "Joel 2:1-2, 12-17",
        "psalm": "Psalm 51:1-17",
        "gospel": "Matthew 6:1-6, 16-21"
    }
}"#;

pub const TAGALOG_PRAYERS_JSON: &str = r#"{
    "ama-namin": "Ama namin, sumasalangit ka, sambahin ang ngalan mo.",
    "luwalhati": "Luwalhati sa Ama, at sa Anak, at sa Espiritu Santo."
}"#;

pub const TAGALOG_LOCALE_JSON: &str = r#"{
    "devotion.title.evening": "Panalangin sa Gabi",
    "devotion.section.lords-prayer": "Ama Namin"
}"#;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("path has a parent")).expect("Failed to create dir");
    fs::write(path, contents).expect("Failed to write data file");
}

/// Writes a data directory with a small lectionary plus Tagalog prayers and
/// strings.
pub fn create_test_data_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(&root.join("lectionary.json"), LECTIONARY_JSON);
    write(&root.join("prayers/tl.json"), TAGALOG_PRAYERS_JSON);
    write(&root.join("locales/tl.json"), TAGALOG_LOCALE_JSON);
    temp_dir
}

/// Helper function to create a test composer backed by a data directory
pub fn create_test_composer() -> (TempDir, DevotionComposer) {
    let temp_dir = create_test_data_dir();
    let composer = DevotionComposerBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .expect("Failed to create composer");
    (temp_dir, composer)
}
