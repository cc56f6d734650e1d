// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Record serialization and file export.
//!
//! Records are stored as compact JSON. Collections can also be exported
//! to YAML or pretty-printed JSON files for sharing outside the app.

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Encode a record for storage.
pub fn encode<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Decode a stored record.
pub fn decode<T: DeserializeOwned>(raw: &str) -> serde_json::Result<T> {
    serde_json::from_str(raw)
}

/// Export data to YAML format.
pub fn export_yaml<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export data to JSON format.
pub fn export_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export data, picking the format from the file extension.
pub fn export_by_extension<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_yaml(data, path),
        Some("json") => export_json(data, path),
        _ => Err(anyhow!("Unsupported file extension: {:?}", extension)),
    }
}

/// Import data from YAML format.
pub fn import_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import data from JSON format.
pub fn import_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

/// Import a file written by [`export_by_extension`].
pub fn import_by_extension<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => Err(anyhow!("Unsupported file extension: {:?}", extension)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::seed;
    use crate::models::notification::Notification;
    use tempfile::tempdir;

    #[test]
    fn test_export_yaml_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alerts.yaml");
        let notifications = seed::demo_notifications();

        export_by_extension(&notifications, &path).unwrap();
        let imported: Vec<Notification> = import_by_extension(&path).unwrap();
        assert_eq!(imported, notifications);
    }

    #[test]
    fn test_import_json_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alerts.json");
        let mut notifications = seed::demo_notifications();
        notifications.truncate(1);

        export_by_extension(&notifications, &path).unwrap();
        let imported: Vec<Notification> = import_by_extension(&path).unwrap();
        assert_eq!(imported, notifications);
    }

    #[test]
    fn test_import_rejects_other_shapes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alerts.yaml");
        std::fs::write(&path, "storage_dir: somewhere\n").unwrap();
        assert!(import_by_extension::<Vec<Notification>>(&path).is_err());
        assert!(import_by_extension::<Vec<Notification>>(&dir.path().join("alerts.txt")).is_err());
    }

    #[test]
    fn test_export_json_is_pretty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("footage.json");

        export_by_extension(&seed::demo_videos(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  {"));
        assert!(text.contains("\"isDangerous\": true"));
    }

    #[test]
    fn test_export_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alerts.csv");
        assert!(export_by_extension(&seed::demo_notifications(), &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(decode::<Vec<Notification>>(r#"{"not": "a list"}"#).is_err());
    }
}
