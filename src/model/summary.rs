use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

/// A plugin identifier, used as a list key and as a path segment when
/// addressing per-plugin records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct PluginName(pub String);

impl PluginName {
    #[allow(dead_code)] // Constructor for callers addressing per-plugin records.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the pre-built `index.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginSummary {
    pub name: PluginName,
    pub version: String,
}

/// Names appearing more than once in the index. A duplicate is a lint
/// concern for the upstream build step, not a rendering failure.
pub fn duplicate_names(summaries: &[PluginSummary]) -> Vec<&PluginName> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();

    for summary in summaries {
        if !seen.insert(&summary.name) && !dupes.contains(&&summary.name) {
            dupes.push(&summary.name);
        }
    }

    dupes
}
