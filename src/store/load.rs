/// Locating and parsing the variables file.
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::StoreError;
use super::record::{VariableRecord, record_from_value};

/// One keyed entry of the store, still in raw JSON form.
///
/// Entries are interpreted one at a time during emission, so a malformed
/// entry only fails once every entry before it has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    /// Variable name (the mapping key).
    pub name: String,
    /// The entry value as it appears in the file.
    pub value: Value,
}

impl StoreEntry {
    /// Interpret the entry. `None` for falsy entries.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidRecord` if the value has an unusable shape.
    pub fn record(&self) -> Result<Option<VariableRecord>, StoreError> {
        record_from_value(&self.name, &self.value)
    }
}

/// The loaded variable mapping, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    entries: Vec<StoreEntry>,
}

impl VariableStore {
    /// Iterate entries in the order they appear in the source file.
    #[must_use = "iterators are lazy"]
    pub fn iter(&self) -> impl Iterator<Item = &StoreEntry> {
        self.entries.iter()
    }

    /// Number of entries, including ones that will be skipped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a user-supplied path against the current working directory.
///
/// Does not touch the filesystem beyond reading the cwd: symlinks are kept and
/// the file need not exist yet.
///
/// # Errors
///
/// Returns `StoreError::Resolve` if the working directory cannot be determined.
pub fn resolve_path(path: &Path) -> Result<PathBuf, StoreError> {
    std::path::absolute(path).map_err(|source| StoreError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the variables file at an already-resolved path.
///
/// # Errors
///
/// Returns `StoreError` if the file is unreadable, is not JSON, or is not a
/// JSON object. Entry shapes are checked later, by [`StoreEntry::record`].
pub fn load_store(path: &Path) -> Result<VariableStore, StoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_store(&text, path)
}

/// Parse store contents. `origin` is only used in error messages.
///
/// # Errors
///
/// See [`load_store`].
pub fn parse_store(text: &str, origin: &Path) -> Result<VariableStore, StoreError> {
    let root: Value = serde_json::from_str(text).map_err(|source| StoreError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let Value::Object(map) = root else {
        return Err(StoreError::NotAMapping {
            path: origin.to_path_buf(),
        });
    };

    let entries = map
        .into_iter()
        .map(|(name, value)| StoreEntry { name, value })
        .collect();

    Ok(VariableStore { entries })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::store::VariableData;

    fn origin() -> &'static Path {
        Path::new("inline.json")
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let store = parse_store(
            r#"{ "zeta": {"data": "z"}, "alpha": {"data": "a"}, "mid": {"data": "m"} }"#,
            origin(),
        )
        .unwrap();
        let names: Vec<&str> = store.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_falsy_entry_interprets_as_none() {
        let store = parse_store(r#"{ "a": null, "b": {"data": "x"} }"#, origin()).unwrap();
        assert_eq!(store.len(), 2);
        let entries: Vec<&StoreEntry> = store.iter().collect();
        assert_eq!(entries[0].record().unwrap(), None);
        assert_eq!(
            entries[1].record().unwrap().and_then(|r| r.data),
            Some(VariableData::Scalar("x".to_owned()))
        );
    }

    #[test]
    fn test_parse_empty_object() {
        let store = parse_store("{}", origin()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_store(r#"["a", "b"]"#, origin()).unwrap_err();
        assert!(matches!(err, StoreError::NotAMapping { .. }));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_store("module.exports = {}", origin()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("inline.json"));
    }

    #[test]
    fn test_invalid_record_deferred_to_entry() {
        let store = parse_store(r#"{ "ok": {"data": "x"}, "bad": {"data": true} }"#, origin())
            .unwrap();
        let entries: Vec<&StoreEntry> = store.iter().collect();
        assert!(entries[0].record().is_ok());
        let err = entries[1].record().unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord { ref name, .. } if name == "bad"));
    }

    #[test]
    fn test_load_store_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cc_template": {{ "data": "****-****-****-$1" }} }}"#).unwrap();

        let store = load_store(file.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_store(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_resolve_path_is_absolute() {
        let resolved = resolve_path(Path::new("testdata/variables.json")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("testdata/variables.json"));

        let cwd = std::env::current_dir().unwrap();
        assert!(resolved.starts_with(cwd));
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vars.json");
        assert_eq!(resolve_path(&path).unwrap(), path);
    }
}
