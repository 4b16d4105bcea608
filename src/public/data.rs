use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::classifiers::PluginClassifiers;
use crate::model::summary::{PluginName, PluginSummary};

#[derive(Debug, Error)]
pub enum PublicDataError {
    #[error("no {kind} record at {}", path.display())]
    Missing { kind: &'static str, path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view over the pre-built public data directory. Every accessor
/// performs a single file read; nothing is cached or mutated.
#[derive(Debug, Clone)]
pub struct PublicData {
    root: PathBuf,
}

impl PublicData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The `{name, version}` summaries the listing page is built from.
    pub fn index(&self) -> Result<Vec<PluginSummary>, PublicDataError> {
        self.read_json("index", self.root.join("index.json"))
    }

    /// Active, withdrawn, and deleted plugins with their known versions.
    #[allow(dead_code)] // Local data access beyond the listing page.
    pub fn classifiers(&self) -> Result<PluginClassifiers, PublicDataError> {
        self.read_json("classifiers", self.root.join("classifiers.json"))
    }

    /// The npe2 manifest for one plugin, as raw JSON.
    #[allow(dead_code)] // Local data access beyond the listing page.
    pub fn manifest(&self, name: &PluginName) -> Result<serde_json::Value, PublicDataError> {
        self.read_json("manifest", self.record_path("manifest", name))
    }

    /// The PyPI info record for one plugin.
    #[allow(dead_code)] // Local data access beyond the listing page.
    pub fn pypi_info(&self, name: &PluginName) -> Result<serde_json::Value, PublicDataError> {
        self.read_json("pypi", self.record_path("pypi", name))
    }

    /// The conda info record for one plugin.
    #[allow(dead_code)] // Local data access beyond the listing page.
    pub fn conda_info(&self, name: &PluginName) -> Result<serde_json::Value, PublicDataError> {
        self.read_json("conda", self.record_path("conda", name))
    }

    fn record_path(&self, kind: &str, name: &PluginName) -> PathBuf {
        self.root.join(kind).join(format!("{name}.json"))
    }

    fn read_json<T: DeserializeOwned>(
        &self,
        kind: &'static str,
        path: PathBuf,
    ) -> Result<T, PublicDataError> {
        if !path.is_file() {
            return Err(PublicDataError::Missing { kind, path });
        }

        let raw = fs::read_to_string(&path).map_err(|source| PublicDataError::Read {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| PublicDataError::Parse { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_public() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("index.json"),
            r#"[{"name":"napari-demo","version":"1.0.0"},{"name":"napari-svg","version":"0.2.1"}]"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("manifest")).unwrap();
        fs::write(
            dir.path().join("manifest/napari-demo.json"),
            r#"{"name":"napari-demo","contributions":{}}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn index_returns_all_summaries() {
        let dir = seeded_public();
        let public = PublicData::new(dir.path());

        let summaries = public.index().unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name.as_str(), "napari-demo");
    }

    #[test]
    fn manifest_reads_per_plugin_record() {
        let dir = seeded_public();
        let public = PublicData::new(dir.path());

        let manifest = public.manifest(&PluginName::new("napari-demo")).unwrap();

        assert_eq!(manifest["name"], "napari-demo");
    }

    #[test]
    fn missing_record_names_kind_and_path() {
        let dir = seeded_public();
        let public = PublicData::new(dir.path());

        let err = public.pypi_info(&PluginName::new("napari-demo")).unwrap_err();

        assert!(matches!(err, PublicDataError::Missing { kind: "pypi", .. }));
        assert!(err.to_string().contains("napari-demo.json"));
    }

    #[test]
    fn malformed_record_is_a_parse_error() {
        let dir = seeded_public();
        fs::write(dir.path().join("classifiers.json"), "[not json").unwrap();
        let public = PublicData::new(dir.path());

        let err = public.classifiers().unwrap_err();

        assert!(matches!(err, PublicDataError::Parse { .. }));
    }
}
