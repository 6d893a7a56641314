use std::path::Path;

use anyhow::{anyhow, Context};
use serde_json::Value;

pub const MANIFEST_FILE: &str = "package.json";

/// Sets the `name` field of the `package.json` at `path`, keeping every
/// other field and its order. The file is rewritten with 2-space indentation.
///
/// # Errors
///
/// Returns an [`Err`] if the file can not be read or written, is not valid
/// JSON or is not a JSON object.
pub fn set_name(path: &Path, name: &str) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let patched = with_name(&contents, name)
        .with_context(|| format!("Invalid manifest {}", path.display()))?;

    std::fs::write(path, patched).with_context(|| format!("Failed to write {}", path.display()))
}

/// Returns `contents` re-serialized with `name` replaced.
///
/// # Errors
///
/// Returns an [`Err`] if `contents` is not a JSON object.
pub fn with_name(contents: &str, name: &str) -> anyhow::Result<String> {
    let mut manifest: Value = serde_json::from_str(contents)?;

    manifest
        .as_object_mut()
        .ok_or_else(|| anyhow!("Expected a JSON object at the top level"))?
        .insert("name".to_string(), Value::String(name.to_string()));

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_name_and_keeps_order() {
        let contents = r#"{"name":"template","version":"0.1.0","scripts":{"dev":"next dev"}}"#;

        assert_eq!(
            with_name(contents, "blog").unwrap(),
            "{\n  \"name\": \"blog\",\n  \"version\": \"0.1.0\",\n  \"scripts\": {\n    \"dev\": \"next dev\"\n  }\n}\n"
        );
    }

    #[test]
    fn adds_missing_name() {
        let patched = with_name(r#"{"private": true}"#, "blog").unwrap();
        let value: Value = serde_json::from_str(&patched).unwrap();

        assert_eq!(value["name"], "blog");
        assert_eq!(value["private"], true);
    }

    #[test]
    fn rejects_non_objects() {
        assert!(with_name("[1, 2]", "blog").is_err());
        assert!(with_name("{ \"name\": ", "blog").is_err());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(set_name(&dir.path().join(MANIFEST_FILE), "blog").is_err());
    }
}
