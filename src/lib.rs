pub mod social {
    pub mod dot;
    pub mod error;
    pub mod graph;
    pub mod loader;
    pub mod macros;
    pub mod recommend;
    pub mod similarity;
    pub mod snapshot;
    pub mod user;
    pub mod utils;
}
