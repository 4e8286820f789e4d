use std::fs::File;
use std::path::Path;

use ron::ser::{to_string_pretty, to_writer_pretty, PrettyConfig};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::social::error::{Error, Result};
use crate::social::graph::SocialGraph;
use crate::social::user::User;

impl Serialize for SocialGraph {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_seq(Some(self.len()))?;
        for user in self.users() {
            s.serialize_element(user)?;
        }
        s.end()
    }
}

impl<'de> Deserialize<'de> for SocialGraph {
    /// Replays every user and follow, so followees missing from the
    /// snapshot still end up in the graph.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let users = Vec::<User>::deserialize(deserializer)?;

        let mut graph = Self::new();
        for user in users {
            graph.add_user(user.name.clone());
            for followee in user.followees {
                graph.add_follow(user.name.clone(), followee);
            }
        }
        Ok(graph)
    }
}

pub fn to_ron_string(graph: &SocialGraph) -> Result<String> {
    Ok(to_string_pretty(graph, PrettyConfig::default())?)
}

pub fn write_ron(graph: &SocialGraph, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    to_writer_pretty(file, graph, PrettyConfig::default())?;
    Ok(())
}

pub fn from_ron_str(s: &str) -> Result<SocialGraph> {
    Ok(ron::from_str(s)?)
}

#[cfg(test)]
mod tests {
    use crate::social::error::Error;
    use crate::social::loader::parse_network;
    use crate::social::snapshot::{from_ron_str, to_ron_string, write_ron};

    #[test]
    fn test_snapshot_restores_graph() {
        let graph = parse_network("francis ann bob\nann bob bob\ncarl\n");
        let restored = from_ron_str(&to_ron_string(&graph).unwrap()).unwrap();
        assert_eq!(restored, graph);
        assert_eq!(restored.get_followees("ann").unwrap(), vec!["bob", "bob"]);
    }

    #[test]
    fn test_snapshot_adds_missing_followees() {
        let ron = r#"[(name: "a", followees: ["b", "c"])]"#;
        let graph = from_ron_str(ron).unwrap();
        assert_eq!(graph.list_users(), vec!["a", "b", "c"]);
        assert!(graph.get_followees("c").unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(from_ron_str("not ron ["), Err(Error::Ron(_))));
    }

    #[test]
    fn test_write_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.ron");
        let graph = parse_network("a b\nb a\n");
        write_ron(&graph, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(from_ron_str(&written).unwrap(), graph);
    }
}
