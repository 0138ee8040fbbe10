//! Terminal host for TabIntent

pub mod host;
