use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::mst::{Algorithm, Connectivity, MstOptions};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MstConfig {
    #[serde(default)]
    pub connectivity: Connectivity,
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default = "default_output")]
    pub output: String,
    /// Prim start node; the first declared node when unset.
    #[serde(default)]
    pub start_node: Option<String>,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::default(),
            algorithms: default_algorithms(),
            parallel: false,
            output: default_output(),
            start_node: None,
        }
    }
}

impl MstConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MstConfig = toml::from_str(content)?;
        if config.algorithms.is_empty() {
            anyhow::bail!("`algorithms` must name at least one algorithm");
        }
        Ok(config)
    }

    pub fn mst_options(&self) -> MstOptions {
        MstOptions {
            connectivity: self.connectivity,
        }
    }
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

fn default_output() -> String {
    "mst_report.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(MstConfig::from_toml_str("").unwrap(), MstConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = MstConfig::from_toml_str(
            r#"
            connectivity = "strict"
            algorithms = ["kruskal"]
            parallel = true
            start_node = "B"
            "#,
        )
        .unwrap();
        assert_eq!(config.connectivity, Connectivity::Strict);
        assert_eq!(config.algorithms, vec![Algorithm::Kruskal]);
        assert!(config.parallel);
        assert_eq!(config.output, "mst_report.json");
        assert_eq!(config.start_node.as_deref(), Some("B"));
        assert_eq!(config.mst_options(), MstOptions::strict());
    }

    #[test]
    fn rejects_unknown_algorithm_and_empty_list() {
        assert!(MstConfig::from_toml_str(r#"algorithms = ["boruvka"]"#).is_err());
        assert!(MstConfig::from_toml_str("algorithms = []").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MstConfig::load_from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, MstConfig::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mst.toml");
        fs::write(&path, "output = \"out.ron\"\n").unwrap();
        let config = MstConfig::load_from_file(&path).unwrap();
        assert_eq!(config.output, "out.ron");
    }
}
