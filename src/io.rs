//! Graph and report files: JSON by default, RON when the extension says so.
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::graph::Graph;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ron,
}

impl Format {
    /// `.ron` selects RON; anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Format::Ron,
            _ => Format::Json,
        }
    }
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn to_ron_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    let mut pretty = PrettyConfig::default();
    pretty.new_line = "\n".into();
    Ok(ron::ser::to_string_pretty(value, pretty)?)
}

pub fn from_ron_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(ron::from_str(s)?)
}

pub fn to_string<T: Serialize>(value: &T, format: Format) -> Result<String, IoError> {
    match format {
        Format::Json => to_json_string(value),
        Format::Ron => to_ron_string(value),
    }
}

pub fn from_str<T: DeserializeOwned>(s: &str, format: Format) -> Result<T, IoError> {
    match format {
        Format::Json => from_json_str(s),
        Format::Ron => from_ron_str(s),
    }
}

/// Writes `value` in the format implied by `path`.
pub fn write<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let path = path.as_ref();
    let content = to_string(value, Format::from_path(path))?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Reads a value in the format implied by `path`.
pub fn read<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_str(&content, Format::from_path(path))
}

/// Loads a `{"nodes": [...], "edges": [{"from", "to", "weight"}]}` graph.
///
/// Unknown fields are ignored. Endpoints are not checked here; see
/// [`Graph::validate`].
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph, IoError> {
    let graph: Graph = read(path)?;
    log::debug!(
        "loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn parses_graph_object_and_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "nodes": ["A", "B", "C"],
            "edges": [
                {"from": "A", "to": "B", "weight": 1},
                {"from": "B", "to": "C", "weight": 2}
            ]
        }"#;
        let graph: Graph = from_json_str(json).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edges()[1], Edge::<String>::new("B", "C", 2));
    }

    #[test]
    fn duplicate_nodes_in_file_collapse() {
        let graph: Graph = from_json_str(r#"{"nodes": ["A", "A", "B"]}"#).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = from_json_str::<Graph>(r#"{"nodes": ["A"], "edges": [{"from": "A"}]}"#);
        assert!(matches!(err, Err(IoError::Json(_))));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("g.RON")), Format::Ron);
        assert_eq!(Format::from_path(Path::new("g.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("graph")), Format::Json);
    }

    #[test]
    fn ron_graph_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.ron");
        let mut graph: Graph = Graph::empty();
        graph.add_node("x".into());
        graph.add_node("y".into());
        graph.add_edge("x".into(), "y".into(), -3);
        write(&path, &graph).unwrap();

        let loaded = read_graph(&path).unwrap();
        assert_eq!(loaded.edges(), graph.edges());
        assert_eq!(loaded.nodes(), graph.nodes());
    }
}
