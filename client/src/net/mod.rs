//! Network layer: wire types and REST helpers for the DataEntry API.

pub mod api;
pub mod types;
