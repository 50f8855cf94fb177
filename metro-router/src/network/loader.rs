//! Loader for the two-section network text format.
//!
//! ```text
//! A,
//! B,red
//! C,green
//!
//! A,B
//! B,C
//! ```
//!
//! The first section declares one `name,colour` station per line (the colour
//! may be empty). A blank line ends it. The second section lists one
//! `name,name` connection per line and ends at the next blank line or at
//! the end of the input. Anything after that is ignored.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::Network;
use crate::domain::{Colour, DomainError, StationName};

/// Errors from reading a network description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not have the `first,second` shape
    #[error("line {line}: expected two comma-separated fields, got {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A line is well-formed but describes an invalid network
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Stations,
    Connections,
}

/// Read and parse the network file at `path`.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "Loading network");
    parse_network(&contents)
}

/// Parse a network description.
pub fn parse_network(input: &str) -> Result<Network, LoadError> {
    let mut network = Network::new();
    let mut section = Section::Stations;
    let mut connections = 0usize;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            match section {
                Section::Stations => {
                    section = Section::Connections;
                    continue;
                }
                Section::Connections => break,
            }
        }

        let (first, second) = split_fields(line).ok_or_else(|| LoadError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        })?;

        let invalid = |source| LoadError::Invalid {
            line: line_no,
            source,
        };

        match section {
            Section::Stations => {
                let name = StationName::parse(first)
                    .map_err(DomainError::from)
                    .map_err(invalid)?;
                trace!(station = %name, colour = second, "Declared station");
                network
                    .add_station(name, Colour::new(second))
                    .map_err(invalid)?;
            }
            Section::Connections => {
                network.add_connection(first, second).map_err(invalid)?;
                connections += 1;
            }
        }
    }

    debug!(stations = network.len(), connections, "Network loaded");

    Ok(network)
}

/// Split `first,second` into its two trimmed fields.
fn split_fields(line: &str) -> Option<(&str, &str)> {
    let (first, second) = line.split_once(',')?;
    if second.contains(',') {
        return None;
    }
    Some((first.trim(), second.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "A,\nB,red\nC,green\nD,\n\nA,B\nB,C\nC,D\n";

    fn neighbor_names(network: &Network, name: &str) -> Vec<String> {
        network
            .neighbors_of(name)
            .unwrap()
            .into_iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn parse_sample() {
        let network = parse_network(SAMPLE).unwrap();

        assert_eq!(network.len(), 4);
        assert!(network.colour_of("A").unwrap().is_any());
        assert_eq!(network.colour_of("B").unwrap(), &Colour::new("red"));
        assert_eq!(network.colour_of("C").unwrap(), &Colour::new("green"));
        assert_eq!(neighbor_names(&network, "B"), vec!["A", "C"]);
        assert_eq!(neighbor_names(&network, "D"), vec!["C"]);
    }

    #[test]
    fn stations_only() {
        let network = parse_network("A,\nB,red\n").unwrap();
        assert_eq!(network.len(), 2);
        assert!(neighbor_names(&network, "A").is_empty());
    }

    #[test]
    fn empty_input() {
        let network = parse_network("").unwrap();
        assert!(network.is_empty());
    }

    #[test]
    fn fields_and_lines_are_trimmed() {
        let network = parse_network("  A , red \r\nB,\r\n\r\nA , B\r\n").unwrap();
        assert_eq!(network.colour_of("A").unwrap(), &Colour::new("red"));
        assert_eq!(neighbor_names(&network, "A"), vec!["B"]);
    }

    #[test]
    fn content_after_second_blank_line_ignored() {
        let network = parse_network("A,\nB,\n\nA,B\n\nnot a connection line\n").unwrap();
        assert_eq!(neighbor_names(&network, "A"), vec!["B"]);
    }

    #[test]
    fn malformed_station_line() {
        let err = parse_network("A,\nB\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedLine { line: 2, .. }));
        assert_eq!(
            err.to_string(),
            "line 2: expected two comma-separated fields, got \"B\""
        );
    }

    #[test]
    fn too_many_fields() {
        let err = parse_network("A,red,green\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn duplicate_station() {
        let err = parse_network("A,red\nA,green\n").unwrap_err();
        match err {
            LoadError::Invalid { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(source, DomainError::DuplicateStation(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn connection_to_undeclared_station() {
        let err = parse_network("A,\n\nA,Z\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown station: Z");
    }

    #[test]
    fn empty_station_name() {
        let err = parse_network(",red\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                line: 1,
                source: DomainError::InvalidName(_)
            }
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let network = load_network(&path).unwrap();
        assert_eq!(network.len(), 4);
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_network(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }
}
