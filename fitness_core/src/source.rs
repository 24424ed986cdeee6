//! Package sources: the built-in sample set and file-based readers.
//!
//! The calculations take packages from wherever they come; this module
//! holds the collaborators that produce them. Sources yield raw packages
//! only - decoding and its errors stay with the caller.

use crate::{Error, Result, SensorPackage};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;

/// Cached sample set - built once and reused across all operations
static SAMPLE_PACKAGES: Lazy<Vec<SensorPackage>> = Lazy::new(build_sample_packages);

/// The built-in sample packages, in their fixed order (swimming, running,
/// walking).
pub fn builtin_packages() -> &'static [SensorPackage] {
    &SAMPLE_PACKAGES
}

fn build_sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load packages from a file, picking the reader by extension.
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jsonl") => read_jsonl_packages(path),
        Some("csv") => read_csv_packages(path),
        _ => Err(Error::Config(format!(
            "Unsupported packages file {:?} (expected .jsonl or .csv)",
            path
        ))),
    }
}

/// Read packages from a JSONL file, one JSON object per line.
///
/// Blank lines are skipped; a malformed line fails the whole load with its
/// line number.
pub fn read_jsonl_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let contents = std::fs::read_to_string(path)?;

    let mut packages = Vec::new();
    for (line_num, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let package = serde_json::from_str::<SensorPackage>(line)
            .map_err(|e| Error::Package(format!("line {}: {}", line_num + 1, e)))?;
        packages.push(package);
    }

    tracing::debug!("Read {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// CSV row format for sensor exports
#[derive(Debug, Deserialize)]
struct CsvRow {
    workout_type: String,
    action: f64,
    duration: f64,
    weight: f64,
    height: Option<f64>,
    length_pool: Option<f64>,
    count_pool: Option<f64>,
}

impl From<CsvRow> for SensorPackage {
    fn from(row: CsvRow) -> Self {
        let mut values = vec![row.action, row.duration, row.weight];
        values.extend(row.height);
        values.extend(row.length_pool);
        values.extend(row.count_pool);

        SensorPackage {
            workout_type: row.workout_type,
            values,
        }
    }
}

/// Read packages from a CSV sensor export.
///
/// The header is `workout_type,action,duration,weight,height,length_pool,
/// count_pool`; kind-specific columns are left empty where they do not
/// apply.
pub fn read_csv_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut packages = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        packages.push(SensorPackage::from(row?));
    }

    tracing::debug!("Read {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_packages_order() {
        let packages = builtin_packages();

        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0].workout_type, "SWM");
        assert_eq!(packages[1].workout_type, "RUN");
        assert_eq!(packages[2].workout_type, "WLK");
    }

    #[test]
    fn test_builtin_packages_all_decode() {
        for package in builtin_packages() {
            package.decode().unwrap();
        }
    }

    #[test]
    fn test_read_jsonl_packages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.jsonl");

        std::fs::write(
            &path,
            concat!(
                "{\"workout_type\":\"RUN\",\"values\":[15000.0,1.0,75.0]}\n",
                "\n",
                "{\"workout_type\":\"SWM\",\"values\":[720.0,1.0,80.0,25.0,40.0]}\n",
            ),
        )
        .unwrap();

        let packages = read_jsonl_packages(&path).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "RUN");
        assert_eq!(packages[1].values.len(), 5);
    }

    #[test]
    fn test_malformed_jsonl_line_names_line_number() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.jsonl");

        std::fs::write(
            &path,
            "{\"workout_type\":\"RUN\",\"values\":[15000.0,1.0,75.0]}\nnot json\n",
        )
        .unwrap();

        match read_jsonl_packages(&path) {
            Err(Error::Package(msg)) => assert!(msg.contains("line 2"), "got: {}", msg),
            other => panic!("Expected Package error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_csv_packages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.csv");

        std::fs::write(
            &path,
            concat!(
                "workout_type,action,duration,weight,height,length_pool,count_pool\n",
                "SWM,720,1,80,,25,40\n",
                "RUN,15000,1,75,,,\n",
                "WLK,9000,1,75,180,,\n",
            ),
        )
        .unwrap();

        let packages = read_csv_packages(&path).unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(
            packages[0].values,
            vec![720.0, 1.0, 80.0, 25.0, 40.0]
        );
        assert_eq!(packages[1].values, vec![15000.0, 1.0, 75.0]);
        assert_eq!(packages[2].values, vec![9000.0, 1.0, 75.0, 180.0]);
    }

    #[test]
    fn test_load_packages_rejects_unknown_extension() {
        let result = load_packages(Path::new("packages.txt"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
