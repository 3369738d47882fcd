pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod mutator;

pub use config::Config;
pub use input::Record;
pub use mutator::{generate, MutationConfig, Mutator};

use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub record_count: usize,
    pub mutation_count: usize,
    pub skipped_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordResult {
    pub line: usize,
    pub tokens: Vec<String>,
    pub mutations: Vec<String>,
}
