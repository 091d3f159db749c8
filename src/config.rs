//! Detector options
//!
//! Options are plain data handed to the detectors by reference. They can be
//! loaded from a JSON or YAML file; missing keys fall back to the defaults.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{DocResult, DocSmellError, IoContext};

/// Options recognized by the basic detector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlDocOptions {
    /// Include enum members in the missing documentation / summary checks
    pub check_enum_members: bool,
    /// Include namespace declarations in the missing documentation / summary checks
    pub require_documentation_for_namespaces: bool,
    /// When false, fields and event fields may omit `<summary>`
    pub require_summary_for_fields: bool,
}

impl Default for XmlDocOptions {
    fn default() -> Self {
        Self {
            check_enum_members: true,
            require_documentation_for_namespaces: false,
            require_summary_for_fields: true,
        }
    }
}

impl XmlDocOptions {
    /// Parse options from JSON text
    pub fn from_json_str(content: &str) -> DocResult<Self> {
        serde_json::from_str(content).map_err(|e| DocSmellError::Json {
            message: "Failed to parse options JSON".to_string(),
            source: e,
        })
    }

    /// Parse options from YAML text
    pub fn from_yaml_str(content: &str) -> DocResult<Self> {
        serde_yaml::from_str(content).map_err(|e| DocSmellError::Yaml {
            message: "Failed to parse options YAML".to_string(),
            source: e,
        })
    }

    /// Load options from a file, picking the format from its extension
    pub async fn load(path: &Path) -> DocResult<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());

        let content = match extension.as_deref() {
            Some("json") | Some("yaml") | Some("yml") => tokio::fs::read_to_string(path)
                .await
                .with_io_context("Failed to read options file")?,
            _ => {
                return Err(DocSmellError::UnsupportedOptionsFile {
                    path: path.to_path_buf(),
                });
            }
        };

        if extension.as_deref() == Some("json") {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let options = XmlDocOptions::default();
        assert!(options.check_enum_members);
        assert!(!options.require_documentation_for_namespaces);
        assert!(options.require_summary_for_fields);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = XmlDocOptions::from_json_str(r#"{ "RequireSummaryForFields": false }"#).unwrap();
        assert!(!options.require_summary_for_fields);
        assert!(options.check_enum_members);
        assert!(!options.require_documentation_for_namespaces);
    }

    #[test]
    fn test_yaml_options() {
        let yaml = "CheckEnumMembers: false\nRequireDocumentationForNamespaces: true\n";
        let options = XmlDocOptions::from_yaml_str(yaml).unwrap();
        assert!(!options.check_enum_members);
        assert!(options.require_documentation_for_namespaces);
        assert!(options.require_summary_for_fields);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = XmlDocOptions::from_json_str("{ not json");
        assert!(matches!(result, Err(DocSmellError::Json { .. })));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("xmldoc.json");
        std::fs::write(&path, r#"{ "CheckEnumMembers": false }"#).unwrap();

        let options = XmlDocOptions::load(&path).await.unwrap();
        assert!(!options.check_enum_members);
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("xmldoc.toml");
        std::fs::write(&path, "").unwrap();

        let result = XmlDocOptions::load(&path).await;
        assert!(matches!(result, Err(DocSmellError::UnsupportedOptionsFile { .. })));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        let result = XmlDocOptions::load(&path).await;
        assert!(matches!(result, Err(DocSmellError::Io { .. })));
    }
}
