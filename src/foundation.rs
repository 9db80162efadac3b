//! Shared foundation types: the crate-wide error taxonomy.

pub mod error;
