use anyhow::{Context, Result};
use clap::Parser;
use friend_recommender::social::dot::to_dot;
use friend_recommender::social::graph::SocialGraph;
use friend_recommender::social::loader::create_network_from_file;
use friend_recommender::social::snapshot::write_ron;
use friend_recommender::social::user::Name;
use friend_recommender::time_it;

use crate::config::Config;

mod config;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();

    let graph = time_it!("loading network" =>
        create_network_from_file(&config.network)?
    );

    if let Some(path) = &config.ron {
        time_it!("writing snapshot" => write_ron(&graph, path)
            .with_context(|| format!("write snapshot to {}", path.display()))?);
    }

    if !config.no_dot {
        println!("{}", to_dot(&graph));
    }

    if config.all {
        let suggestions = time_it!("suggesting friends for everyone" => graph.suggest_all()?);
        for (name, suggestion) in suggestions {
            println!("{name} -> {}", display_suggestion(suggestion.as_ref()));
        }
    } else {
        let suggestion = suggest(&graph, &config.user)?;
        println!("{}", display_suggestion(suggestion.as_ref()));
    }

    Ok(())
}

fn suggest(graph: &SocialGraph, user: &str) -> Result<Option<Name>> {
    time_it!("suggesting a friend" => graph
        .suggest_friend(user)
        .with_context(|| format!("suggest a friend for '{user}'")))
}

fn display_suggestion(suggestion: Option<&Name>) -> &str {
    suggestion.map_or("None", std::ops::Deref::deref)
}
