//! GitHub adapter for the `GistApi` port

mod client;

pub use client::GithubGistClient;
