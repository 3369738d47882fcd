use super::combinatorics::{ordered_selections, BinaryChoices};
use super::names::{self, Joiner};
use super::suffix;
use std::collections::HashSet;

/// Options the generator runs with. Built once per run and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationConfig {
    pub use_periods: bool,
    pub suffix_limit: u32,
    pub domain: String,
}

/// Generate every username mutation for one record.
///
/// Never fails. An empty token list produces an empty set. The number of
/// orderings explored grows with the falling-factorial sum of the token
/// count, so callers should keep records to a handful of tokens.
pub fn generate<S: AsRef<str>>(tokens: &[S], config: &MutationConfig) -> HashSet<String> {
    let base = base_mutations(tokens, config.use_periods);
    suffix::expand(&base, config.suffix_limit, &config.domain)
}

/// Mutations before numeric suffixes and domain are applied
pub fn base_mutations<S: AsRef<str>>(tokens: &[S], use_periods: bool) -> HashSet<String> {
    let mut base = HashSet::new();
    if tokens.is_empty() {
        return base;
    }

    let joiners = Joiner::active(use_periods);

    for &joiner in joiners {
        base.insert(names::join_initials(tokens, joiner));
        base.insert(names::first_initial_last(tokens, joiner));
        base.insert(names::join_names(tokens, joiner));
    }

    let full: Vec<String> = tokens.iter().map(|t| t.as_ref().to_lowercase()).collect();
    let initials: Vec<String> = tokens.iter().map(|t| names::initial(t.as_ref())).collect();

    // Every subset, in every order
    for order in ordered_selections(tokens.len()) {
        for &joiner in joiners {
            base.insert(join_positions(&full, &order, joiner));
            base.insert(join_positions(&initials, &order, joiner));
        }
    }

    // Each token either whole or abbreviated, original order
    for abbreviate in BinaryChoices::new(tokens.len()) {
        let parts: Vec<&str> = abbreviate
            .iter()
            .enumerate()
            .map(|(i, &short)| {
                if short {
                    initials[i].as_str()
                } else {
                    full[i].as_str()
                }
            })
            .collect();

        for &joiner in joiners {
            base.insert(parts.join(joiner.as_str()));
        }
    }

    base
}

fn join_positions(parts: &[String], order: &[usize], joiner: Joiner) -> String {
    order
        .iter()
        .map(|&i| parts[i].as_str())
        .collect::<Vec<_>>()
        .join(joiner.as_str())
}
