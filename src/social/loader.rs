use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::social::error::{Error, Result};
use crate::social::graph::SocialGraph;

/// Builds a [`SocialGraph`] from a network description.
///
/// Each line names a user followed by the users they follow, separated by
/// whitespace. Blank lines are ignored.
#[must_use]
pub fn parse_network(description: &str) -> SocialGraph {
    let mut graph = SocialGraph::new();
    for line in description.lines() {
        add_line(&mut graph, line);
    }
    graph
}

pub fn read_network(reader: impl BufRead) -> std::io::Result<SocialGraph> {
    let mut graph = SocialGraph::new();
    for line in reader.lines() {
        add_line(&mut graph, &line?);
    }
    Ok(graph)
}

pub fn create_network_from_file(path: impl AsRef<Path>) -> Result<SocialGraph> {
    let path = path.as_ref();
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let graph = read_network(BufReader::new(file)).map_err(io_error)?;
    info!(
        "loaded {} users and {} follows from {}",
        graph.len(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

fn add_line(graph: &mut SocialGraph, line: &str) {
    let mut names = line.split_whitespace();
    let Some(follower) = names.next() else {
        debug!("skipping blank line");
        return;
    };

    graph.add_user(follower);
    for followee in names {
        graph.add_follow(follower, followee);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::social::error::Error;
    use crate::social::loader::{create_network_from_file, parse_network, read_network};

    const NETWORK: &str = "francis ann bob\nann bob\n\n   \nbob\ncarl francis\n";

    #[test]
    fn test_parse_network() {
        let graph = parse_network(NETWORK);
        assert_eq!(graph.list_users(), vec!["francis", "ann", "bob", "carl"]);
        assert_eq!(graph.get_followees("francis").unwrap(), vec!["ann", "bob"]);
        assert_eq!(graph.get_followees("ann").unwrap(), vec!["bob"]);
        assert!(graph.get_followees("bob").unwrap().is_empty());
        assert_eq!(graph.get_followees("carl").unwrap(), vec!["francis"]);
    }

    #[test]
    fn test_repeated_line_appends() {
        let graph = parse_network("a b\na c\n");
        assert_eq!(graph.get_followees("a").unwrap(), vec!["b", "c"]);
    }

    #[test]
    fn test_tabs_and_extra_spaces() {
        let graph = parse_network("  a\tb   c  \n");
        assert_eq!(graph.get_followees("a").unwrap(), vec!["b", "c"]);
    }

    #[test]
    fn test_read_network_matches_parse() {
        let graph = read_network(NETWORK.as_bytes()).unwrap();
        assert_eq!(graph, parse_network(NETWORK));
    }

    #[test]
    fn test_create_network_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(NETWORK.as_bytes()).unwrap();
        let graph = create_network_from_file(file.path()).unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.network");
        let result = create_network_from_file(&path);
        assert!(matches!(result, Err(Error::Io { path: p, .. }) if p == path));
    }
}
