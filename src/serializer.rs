//! Serialization of the Swagger document and the output file layout.
//!
//! The document is written to `<storage>/appDoc/resource.json`. The `appDoc` directory
//! is removed and recreated on every write, so nothing from an earlier run survives.

use crate::error::Result;
use crate::swagger::SwaggerDocument;
use anyhow::Context;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the storage root that holds the generated document.
pub const OUTPUT_DIR: &str = "appDoc";

/// File name of the generated document.
pub const OUTPUT_FILE: &str = "resource.json";

/// Serializes the document to compact JSON.
pub fn serialize_json(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing Swagger document to JSON");
    Ok(serde_json::to_string(doc)?)
}

/// Serializes the document to indented JSON for human review.
pub fn serialize_json_pretty(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing Swagger document to pretty JSON");
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Path of the output file below `storage_root`.
pub fn output_path(storage_root: &Path) -> PathBuf {
    storage_root.join(OUTPUT_DIR).join(OUTPUT_FILE)
}

/// Replaces `<storage_root>/appDoc` with a fresh directory holding only `content` as
/// `resource.json`. Returns the written file path.
pub fn write_document(content: &str, storage_root: &Path) -> anyhow::Result<PathBuf> {
    let dir = storage_root.join(OUTPUT_DIR);

    if dir.exists() {
        debug!("Removing previous output directory: {}", dir.display());
        fs::remove_dir_all(&dir)
            .with_context(|| format!("Failed to remove directory: {}", dir.display()))?;
    }
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = output_path(storage_root);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::{Info, SwaggerDocument};
    use indexmap::IndexMap;
    use tempfile::TempDir;

    fn create_test_document() -> SwaggerDocument {
        SwaggerDocument {
            swagger: "2.0".to_string(),
            info: Info {
                description: "A test API".to_string(),
                version: "1.0.0".to_string(),
                title: "Test API".to_string(),
            },
            host: "api.example.com".to_string(),
            base_path: "/api/v1".to_string(),
            tags: vec![],
            paths: IndexMap::new(),
        }
    }

    #[test]
    fn test_serialize_json_field_order() {
        let json = serialize_json(&create_test_document()).unwrap();
        assert_eq!(
            json,
            r#"{"swagger":"2.0","info":{"description":"A test API","version":"1.0.0","title":"Test API"},"host":"api.example.com","basePath":"/api/v1","tags":[],"paths":{}}"#
        );
    }

    #[test]
    fn test_serialize_json_pretty_format() {
        let json = serialize_json_pretty(&create_test_document()).unwrap();
        assert!(json.lines().count() > 5);

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["basePath"], "/api/v1");
    }

    #[test]
    fn test_roundtrip_json_serialization() {
        let doc = create_test_document();
        let json = serialize_json(&doc).unwrap();
        let deserialized: SwaggerDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, doc);
    }

    #[test]
    fn test_write_document_creates_layout() {
        let temp_dir = TempDir::new().unwrap();
        let storage = temp_dir.path().join("storage");

        let path = write_document("{}", &storage).unwrap();

        assert_eq!(path, storage.join("appDoc").join("resource.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_document_clears_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let storage = temp_dir.path();
        fs::create_dir_all(storage.join(OUTPUT_DIR)).unwrap();
        fs::write(storage.join(OUTPUT_DIR).join("stale.json"), "old").unwrap();

        write_document("new", storage).unwrap();

        assert!(!storage.join(OUTPUT_DIR).join("stale.json").exists());
        assert_eq!(fs::read_to_string(output_path(storage)).unwrap(), "new");
    }

    #[test]
    fn test_write_document_fails_when_storage_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = temp_dir.path().join("storage");
        fs::write(&storage, "not a directory").unwrap();

        let err = write_document("{}", &storage).unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
    }
}
