use std::fmt;

/// How name segments are glued together in a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joiner {
    Concat,
    Period,
}

impl Joiner {
    pub fn as_str(self) -> &'static str {
        match self {
            Joiner::Concat => "",
            Joiner::Period => ".",
        }
    }

    /// Joiners in effect for a run
    pub fn active(use_periods: bool) -> &'static [Joiner] {
        if use_periods {
            &[Joiner::Concat, Joiner::Period]
        } else {
            &[Joiner::Concat]
        }
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercased first character of a token. Empty for an empty token.
pub fn initial(token: &str) -> String {
    token
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

pub fn join_names<S: AsRef<str>>(tokens: &[S], joiner: Joiner) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(joiner.as_str())
}

pub fn join_initials<S: AsRef<str>>(tokens: &[S], joiner: Joiner) -> String {
    tokens
        .iter()
        .map(|t| initial(t.as_ref()))
        .collect::<Vec<_>>()
        .join(joiner.as_str())
}

/// First initial followed by the whole last token (`jsmith`, `j.smith`).
/// A single token is returned lowercased as-is.
pub fn first_initial_last<S: AsRef<str>>(tokens: &[S], joiner: Joiner) -> String {
    match tokens {
        [] => String::new(),
        [only] => only.as_ref().to_lowercase(),
        [first, .., last] => format!(
            "{}{}{}",
            initial(first.as_ref()),
            joiner,
            last.as_ref().to_lowercase()
        ),
    }
}
