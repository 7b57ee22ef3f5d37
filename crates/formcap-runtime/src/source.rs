use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use formcap_types::FormDescriptor;

/// Where named form descriptors come from.
///
/// A source fetches exactly one tier; the fallback chain lives in the
/// loader. Failures are `Fetch` errors regardless of transport.
pub trait FormSource {
    /// Human-readable origin for warnings ("/path/to/forms", a base URL).
    fn describe(&self) -> String;

    /// Fetch the descriptor named `<form_id>-form.json` from this source.
    fn fetch(&self, form_id: &str) -> Result<FormDescriptor>;
}

/// Reads descriptors from a local directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl FormSource for DirSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn fetch(&self, form_id: &str) -> Result<FormDescriptor> {
        let path = self.root.join(format!("{}-form.json", form_id));
        let content = std::fs::read_to_string(&path)
            .map_err(|err| Error::Fetch(format!("{}: {}", path.display(), err)))?;
        FormDescriptor::from_json(&content)
            .map_err(|err| Error::Fetch(format!("{}: {}", path.display(), err)))
    }
}

/// Fetches descriptors over HTTP from `<base>/custom-forms/<id>-form.json`.
/// Success requires a success status and a JSON content type.
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn form_url(&self, form_id: &str) -> String {
        format!("{}/custom-forms/{}-form.json", self.base_url, form_id)
    }
}

impl FormSource for HttpSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    fn fetch(&self, form_id: &str) -> Result<FormDescriptor> {
        let url = self.form_url(form_id);

        let response = ureq::get(&url)
            .call()
            .map_err(|err| Error::Fetch(format!("GET {}: {}", url, err)))?;

        let content_type = response.content_type().to_string();
        if !content_type.contains("application/json") {
            return Err(Error::Fetch(format!(
                "GET {}: response is not JSON (content type '{}')",
                url, content_type
            )));
        }

        let body = response
            .into_string()
            .map_err(|err| Error::Fetch(format!("GET {}: {}", url, err)))?;
        FormDescriptor::from_json(&body)
            .map_err(|err| Error::Fetch(format!("GET {}: {}", url, err)))
    }
}

/// Build the configured source: a base URL wins over a directory override;
/// the default is `<data-dir>/custom-forms`.
pub fn source_from_config(config: &Config, data_dir: &Path) -> Box<dyn FormSource> {
    if let Some(base_url) = &config.source.base_url {
        return Box::new(HttpSource::new(base_url.clone()));
    }
    let root = config
        .source
        .forms_dir
        .clone()
        .unwrap_or_else(|| data_dir.join("custom-forms"));
    Box::new(DirSource::new(root))
}
