//! Configuration loader and schema types.
//!
//! The embedding application (the command layer driving the playlist) loads
//! its defaults through here; the engine itself takes everything as plain
//! arguments.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
