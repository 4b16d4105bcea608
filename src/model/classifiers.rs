use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::summary::PluginName;

pub type Versions = Vec<String>;

/// Contents of `classifiers.json`: every plugin the index builder has seen,
/// keyed by lifecycle state, with all known versions per plugin.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)] // Read by local data tooling, not by page generation.
pub struct PluginClassifiers {
    pub active: BTreeMap<PluginName, Versions>,
    pub withdrawn: BTreeMap<PluginName, Versions>,
    pub deleted: BTreeMap<PluginName, Versions>,
}

impl PluginClassifiers {
    /// Names of plugins still published and listed.
    #[allow(dead_code)] // Read by local data tooling, not by page generation.
    pub fn active_names(&self) -> impl Iterator<Item = &PluginName> {
        self.active.keys()
    }
}
