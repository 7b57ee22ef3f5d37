use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::catalog;
use crate::error::{Error, Result};
use crate::validate;
use formcap_types::{FormDescriptor, FormEntry};

const INDEX_FILE: &str = "index.json";
const DESCRIPTOR_SUFFIX: &str = "-form.json";

/// One imported form in the on-disk index. Insertion order in the index
/// file is listing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    id: String,
    name: String,
}

/// Summary row for the imported-forms listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedFormSummary {
    pub id: String,
    pub title: String,
    pub field_count: usize,
}

/// The index of available form descriptors: a fixed built-in catalog plus
/// imported descriptors persisted under `<data-dir>/forms/`.
///
/// Imports are keyed by form id, last-import-wins. The index file is
/// advisory: when it is missing or corrupt the registry rebuilds the
/// listing from the descriptor files on disk, so a half-written index never
/// loses track of an imported form.
pub struct FormRegistry {
    forms_dir: PathBuf,
}

impl FormRegistry {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let forms_dir = data_dir.join("forms");
        fs::create_dir_all(&forms_dir)?;
        Ok(Self { forms_dir })
    }

    fn index_path(&self) -> PathBuf {
        self.forms_dir.join(INDEX_FILE)
    }

    fn descriptor_path(&self, form_id: &str) -> PathBuf {
        self.forms_dir
            .join(format!("{}{}", form_id, DESCRIPTOR_SUFFIX))
    }

    /// Import a descriptor from serialized JSON. Parse and validation both
    /// happen before anything is written, so a failed import leaves the
    /// registry untouched.
    pub fn import_str(&self, json: &str) -> Result<FormDescriptor> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        validate::validate_shape(&value)?;
        let form: FormDescriptor = serde_json::from_value(value)?;
        validate::validate_descriptor(&form)?;

        fs::write(self.descriptor_path(&form.id), form.to_json_pretty()?)?;

        let mut entries = self.load_index();
        match entries.iter_mut().find(|e| e.id == form.id) {
            // Re-import keeps the original insertion position.
            Some(entry) => entry.name = form.title.clone(),
            None => entries.push(IndexEntry {
                id: form.id.clone(),
                name: form.title.clone(),
            }),
        }
        self.save_index(&entries)?;

        Ok(form)
    }

    /// Import a descriptor from a UTF-8 JSON file.
    pub fn import_file(&self, path: &Path) -> Result<FormDescriptor> {
        let content = fs::read_to_string(path)?;
        self.import_str(&content)
    }

    /// Serialize a form to pretty JSON, imported forms first, then
    /// built-ins.
    pub fn export(&self, form_id: &str) -> Result<String> {
        if let Some(form) = self.imported_form(form_id)? {
            return Ok(form.to_json_pretty()?);
        }
        if let Some(form) = catalog::builtin_form(form_id) {
            return Ok(form.to_json_pretty()?);
        }
        Err(Error::NotFound(form_id.to_string()))
    }

    /// Load an imported descriptor, or None if this id was never imported.
    pub fn imported_form(&self, form_id: &str) -> Result<Option<FormDescriptor>> {
        let path = self.descriptor_path(form_id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(FormDescriptor::from_json(&content)?))
    }

    /// Resolve a descriptor by id: imported forms shadow built-ins.
    pub fn get(&self, form_id: &str) -> Result<Option<FormDescriptor>> {
        if let Some(form) = self.imported_form(form_id)? {
            return Ok(Some(form));
        }
        Ok(catalog::builtin_form(form_id))
    }

    /// All available forms: built-ins in fixed catalog order, then imported
    /// forms in insertion order.
    pub fn list(&self) -> Vec<FormEntry> {
        let mut entries = catalog::builtin_entries();
        entries.extend(self.load_index().into_iter().map(|e| FormEntry {
            id: e.id,
            name: e.name,
            is_imported: true,
        }));
        entries
    }

    /// Imported forms with their field counts. Descriptor files that fail
    /// to parse are skipped rather than failing the whole listing.
    pub fn imported(&self) -> Vec<ImportedFormSummary> {
        self.load_index()
            .into_iter()
            .filter_map(|entry| {
                let form = self.imported_form(&entry.id).ok().flatten()?;
                Some(ImportedFormSummary {
                    id: entry.id,
                    title: form.title,
                    field_count: form.fields.len(),
                })
            })
            .collect()
    }

    /// Delete an imported form from both the descriptor store and the
    /// index. Returns whether anything was removed; absent ids are a no-op.
    pub fn remove(&self, form_id: &str) -> Result<bool> {
        let path = self.descriptor_path(form_id);
        let existed = path.exists();
        if existed {
            fs::remove_file(&path)?;
        }

        let mut entries = self.load_index();
        let before = entries.len();
        entries.retain(|e| e.id != form_id);
        if entries.len() != before || existed {
            self.save_index(&entries)?;
        }

        Ok(existed)
    }

    fn load_index(&self) -> Vec<IndexEntry> {
        match fs::read_to_string(self.index_path()) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(_) => self.scan_descriptors(),
            },
            Err(_) => self.scan_descriptors(),
        }
    }

    fn save_index(&self, entries: &[IndexEntry]) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(self.index_path(), content)?;
        Ok(())
    }

    /// Fallback listing built from the descriptor files themselves, in file
    /// name order. Used when the index file is missing or corrupt.
    fn scan_descriptors(&self) -> Vec<IndexEntry> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.forms_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(form_id) = file_name.strip_suffix(DESCRIPTOR_SUFFIX) else {
                continue;
            };
            let Ok(Some(form)) = self.imported_form(form_id) else {
                continue;
            };
            entries.push(IndexEntry {
                id: form.id,
                name: form.title,
            });
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry() -> (TempDir, FormRegistry) {
        let temp_dir = TempDir::new().unwrap();
        let registry = FormRegistry::open(temp_dir.path()).unwrap();
        (temp_dir, registry)
    }

    const SURVEY: &str = r#"{
        "id": "survey",
        "title": "Survey",
        "fields": [{"type": "text", "id": "name", "label": "Name", "required": true}]
    }"#;

    #[test]
    fn test_import_then_export_round_trip() {
        let (_tmp, registry) = registry();
        let form = registry.import_str(SURVEY).unwrap();
        assert_eq!(form.id, "survey");

        let exported = registry.export("survey").unwrap();
        let reparsed = FormDescriptor::from_json(&exported).unwrap();
        assert_eq!(reparsed, form);
    }

    #[test]
    fn test_import_empty_fields_is_valid() {
        let (_tmp, registry) = registry();
        let form = registry
            .import_str(r#"{"id": "x", "title": "T", "fields": []}"#)
            .unwrap();
        assert!(form.fields.is_empty());
        assert!(registry.export("x").is_ok());
    }

    #[test]
    fn test_invalid_import_does_not_mutate_registry() {
        let (_tmp, registry) = registry();
        let err = registry.import_str(r#"{"id": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let entries = registry.list();
        assert!(entries.iter().all(|e| !e.is_imported));
        assert!(registry.imported_form("x").unwrap().is_none());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let (_tmp, registry) = registry();
        let err = registry.import_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_list_order_builtins_first_then_insertion() {
        let (_tmp, registry) = registry();
        registry
            .import_str(r#"{"id": "bbb", "title": "B", "fields": []}"#)
            .unwrap();
        registry
            .import_str(r#"{"id": "aaa", "title": "A", "fields": []}"#)
            .unwrap();

        let ids: Vec<_> = registry.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["default", "bbb", "aaa"]);
    }

    #[test]
    fn test_reimport_overwrites_and_keeps_position() {
        let (_tmp, registry) = registry();
        registry
            .import_str(r#"{"id": "one", "title": "First", "fields": []}"#)
            .unwrap();
        registry
            .import_str(r#"{"id": "two", "title": "Second", "fields": []}"#)
            .unwrap();
        registry
            .import_str(r#"{"id": "one", "title": "Renamed", "fields": []}"#)
            .unwrap();

        let entries = registry.list();
        assert_eq!(entries[1].id, "one");
        assert_eq!(entries[1].name, "Renamed");
        assert_eq!(entries[2].id, "two");
    }

    #[test]
    fn test_imported_form_shadows_builtin() {
        let (_tmp, registry) = registry();
        registry
            .import_str(r#"{"id": "default", "title": "Custom default", "fields": []}"#)
            .unwrap();

        let form = registry.get("default").unwrap().unwrap();
        assert_eq!(form.title, "Custom default");
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let (_tmp, registry) = registry();
        assert!(!registry.remove("ghost").unwrap());

        registry.import_str(SURVEY).unwrap();
        assert!(registry.remove("survey").unwrap());
        assert!(registry.imported_form("survey").unwrap().is_none());
        assert!(!registry.remove("survey").unwrap());
    }

    #[test]
    fn test_index_rebuilds_from_descriptor_files() {
        let (tmp, registry) = registry();
        registry.import_str(SURVEY).unwrap();

        fs::remove_file(tmp.path().join("forms").join(INDEX_FILE)).unwrap();

        let entries = registry.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id, "survey");
        assert!(entries[1].is_imported);
    }

    #[test]
    fn test_imported_summaries_carry_field_counts() {
        let (_tmp, registry) = registry();
        registry.import_str(SURVEY).unwrap();

        let summaries = registry.imported();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "survey");
        assert_eq!(summaries[0].field_count, 1);
    }

    #[test]
    fn test_export_unknown_form_is_not_found() {
        let (_tmp, registry) = registry();
        let err = registry.export("ghost").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
