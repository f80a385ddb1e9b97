pub mod dataset;
pub mod health;
pub mod heatmap;
pub mod modes;
