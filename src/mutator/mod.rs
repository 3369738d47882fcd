pub mod combinatorics;
pub mod generator;
pub mod names;
pub mod suffix;

pub use generator::{base_mutations, generate, MutationConfig};

use crate::cli::output::{write_record, OutputFormat};
use crate::input::{self, Record};
use crate::{Config, RecordResult, RunResult};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;

/// Records generated in parallel before their output is written, in order
const BATCH_SIZE: usize = 256;

pub struct Mutator {
    config: MutationConfig,
    max_tokens: usize,
    format: OutputFormat,
}

impl Mutator {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.mutation_config(),
            max_tokens: config.max_tokens,
            format: config.format,
        }
    }

    /// Generate the sorted mutations for one record, or `None` if the record
    /// has more tokens than the configured limit.
    pub fn mutate_record(&self, record: &Record) -> Option<RecordResult> {
        if self.max_tokens > 0 && record.tokens.len() > self.max_tokens {
            let orderings = combinatorics::ordered_selection_count(record.tokens.len())
                .map_or_else(|| "too many".to_string(), |count| count.to_string());
            warn!(
                "Skipping line {}: {} tokens exceeds the limit of {} ({} orderings)",
                record.line,
                record.tokens.len(),
                self.max_tokens,
                orderings
            );
            return None;
        }

        let mut mutations: Vec<String> = generate(&record.tokens, &self.config).into_iter().collect();
        mutations.sort_unstable();

        debug!("Line {}: {} mutations", record.line, mutations.len());

        Some(RecordResult {
            line: record.line,
            tokens: record.tokens.clone(),
            mutations,
        })
    }

    /// Read a name list and write every record's mutations to `out`
    pub fn run<W: Write>(&self, source: &Path, out: &mut W) -> Result<RunResult> {
        let content = input::read_source(source)?;
        let records = input::parse_records(&content);
        info!("Read {} records from {}", records.len(), source.display());

        self.run_records(&records, out)
    }

    pub fn run_records<W: Write>(&self, records: &[Record], out: &mut W) -> Result<RunResult> {
        let mut result = RunResult::default();

        for batch in records.chunks(BATCH_SIZE) {
            let generated: Vec<Option<RecordResult>> =
                batch.par_iter().map(|record| self.mutate_record(record)).collect();

            for record_result in generated {
                match record_result {
                    Some(record_result) => {
                        write_record(out, &record_result, self.format)
                            .context("Failed to write output")?;
                        result.record_count += 1;
                        result.mutation_count += record_result.mutations.len();
                    }
                    None => result.skipped_count += 1,
                }
            }
        }

        out.flush().context("Failed to write output")?;

        Ok(result)
    }
}
