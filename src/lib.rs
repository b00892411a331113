pub mod dates;
pub mod fixtures;
pub mod orchestrator;
pub mod out_models;
pub mod sampling;
pub mod settings;
pub mod taxonomy;

pub use orchestrator::{generate, GenerateReport, OUTPUT_FILES};
