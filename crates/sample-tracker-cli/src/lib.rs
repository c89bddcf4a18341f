//! Terminal host for the sample tracker.
//!
//! Loads the initial record set (JSON fixture or mock data), drives the
//! core dashboard from command-line options and renders the resulting page.

pub mod config;
pub mod fixtures;
pub mod generator;
pub mod render;

pub use config::*;
pub use fixtures::*;
pub use generator::*;
pub use render::*;
