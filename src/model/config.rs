use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub links: LinksSection,
}

#[derive(Debug, Deserialize)]
pub struct SiteSection {
    pub public_dir: String,
    pub out_dir: String,
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Deserialize)]
pub struct LinksSection {
    pub errors: String,
    pub summary: String,
    pub manifest_base: String,
}

impl SiteConfig {
    /// Load configuration with layering: defaults → repo-local pages.toml.
    pub fn load() -> Result<Self> {
        let defaults = include_str!("../../config/default.toml");
        let mut config: SiteConfig = toml::from_str(defaults)?;

        let override_path = Path::new("pages.toml");
        if override_path.exists() {
            let user_str = fs::read_to_string(override_path)?;
            config = toml::from_str(&user_str)?; // TODO: deep merge instead of full replace
        }

        Ok(config)
    }

    pub fn public_dir(&self) -> PathBuf {
        expand_tilde(&self.site.public_dir)
    }

    pub fn out_dir(&self) -> PathBuf {
        expand_tilde(&self.site.out_dir)
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if !path.starts_with('~') {
        return PathBuf::from(path);
    }

    if let Some(base_dirs) = directories::BaseDirs::new() {
        let home = base_dirs.home_dir().to_string_lossy();
        return PathBuf::from(path.replacen('~', &home, 1));
    }

    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config: SiteConfig = toml::from_str(include_str!("../../config/default.toml")).unwrap();

        assert_eq!(config.site.public_dir, "public");
        assert_eq!(config.site.title, "napari plugins");
        assert_eq!(config.links.errors, "/errors.json");
        assert_eq!(config.links.summary, "/api/plugins");
        assert_eq!(config.links.manifest_base, "/api/manifest");
    }

    #[test]
    fn plain_paths_pass_through_untouched() {
        assert_eq!(expand_tilde("public"), PathBuf::from("public"));
        assert_eq!(expand_tilde("/srv/public"), PathBuf::from("/srv/public"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if directories::BaseDirs::new().is_none() {
            return;
        }

        let expanded = expand_tilde("~/public");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("/public"));
    }
}
