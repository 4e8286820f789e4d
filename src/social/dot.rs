use std::fmt::Write;

use crate::social::graph::SocialGraph;

const HEADER: [&str; 3] = ["digraph {", "    layout=neato", "    overlap=scalexy"];
const FOOTER: &str = "}";

/// Renders the graph as a Graphviz `digraph`, one line per follow.
#[must_use]
pub fn to_dot(graph: &SocialGraph) -> String {
    let mut result = HEADER.join("\n");
    for (follower, followee) in graph.edges() {
        let _ = write!(result, "\n    \"{follower}\" -> \"{followee}\"");
    }
    result.push('\n');
    result.push_str(FOOTER);
    result
}

/// Reads the `"a" -> "b"` lines back out of a DOT description, skipping
/// everything else.
#[must_use]
pub fn edges_from_dot(dot: &str) -> Vec<(String, String)> {
    dot.lines()
        .filter_map(|line| {
            let (from, to) = line.trim().split_once("->")?;
            Some((unquote(from)?, unquote(to)?))
        })
        .collect()
}

fn unquote(s: &str) -> Option<String> {
    s.trim()
        .strip_prefix('"')?
        .strip_suffix('"')
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use crate::social::dot::{edges_from_dot, to_dot};
    use crate::social::graph::SocialGraph;
    use crate::social::loader::parse_network;

    #[test]
    fn test_to_dot() {
        let mut graph = SocialGraph::new();
        graph.add_follow("a", "b");
        graph.add_follow("a", "c");
        graph.add_follow("b", "a");
        let expected = "digraph {
    layout=neato
    overlap=scalexy
    \"a\" -> \"b\"
    \"a\" -> \"c\"
    \"b\" -> \"a\"
}";
        assert_eq!(to_dot(&graph), expected);
    }

    #[test]
    fn test_to_dot_empty_graph() {
        assert_eq!(
            to_dot(&SocialGraph::new()),
            "digraph {\n    layout=neato\n    overlap=scalexy\n}"
        );
    }

    #[test]
    fn test_round_trip_edges() {
        let graph = parse_network("francis ann bob\nann bob carl\nbob\ncarl francis ann\n");
        let expected = graph
            .edges()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(edges_from_dot(&to_dot(&graph)), expected);
    }

    #[test]
    fn test_edges_from_dot_ignores_layout_lines() {
        let dot = "digraph {\n    layout=neato\n    overlap=scalexy\n}";
        assert!(edges_from_dot(dot).is_empty());
    }
}
