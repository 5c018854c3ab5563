//! Terminal dashboard for the HTTP API.
//!
//! A line-oriented REPL: each line is parsed as a [`Query`], sent to
//! the API through [`Client`], and rendered as plain tables.
mod cli;
mod client;
mod query;
mod render;

pub use cli::*;
pub use client::*;
pub use query::*;
pub use render::*;
