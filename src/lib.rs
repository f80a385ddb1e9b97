// Library crate for integration tests and the server binary.

pub mod config;
pub mod dataset;
pub mod effort;
pub mod error;
pub mod heatmap;
pub mod mode;
pub mod model;
pub mod rating;
pub mod routes;
pub mod server;
pub mod settings;
pub mod state;
