use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "friend-recommender", author, version, about)]
pub struct Config {
    /// Network description: one user per line, followed by the users they follow.
    #[arg(default_value = "simple.network")]
    pub network: PathBuf,

    /// User to suggest a new friend for.
    #[arg(short, long, default_value = "francis")]
    pub user: String,

    /// Don't print the graphviz description of the network.
    #[arg(long)]
    pub no_dot: bool,

    /// Also write a RON snapshot of the loaded network to this path.
    #[arg(long, value_name = "PATH")]
    pub ron: Option<PathBuf>,

    /// Print a suggestion for every user instead of just --user.
    #[arg(long)]
    pub all: bool,
}
