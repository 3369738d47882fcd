use std::collections::HashSet;

/// `@domain`, or nothing when no domain is configured
pub fn domain_suffix(domain: &str) -> String {
    if domain.is_empty() {
        String::new()
    } else {
        format!("@{}", domain)
    }
}

/// All final forms of one base mutation: the plain form plus `1..=limit`
/// numbered forms, each followed by `tail`.
pub fn variants<'a>(
    mutation: &'a str,
    suffix_limit: u32,
    tail: &'a str,
) -> impl Iterator<Item = String> + 'a {
    std::iter::once(format!("{}{}", mutation, tail))
        .chain((1..=suffix_limit).map(move |i| format!("{}{}{}", mutation, i, tail)))
}

/// Expand a base mutation set with numeric suffixes and the domain
pub fn expand(base: &HashSet<String>, suffix_limit: u32, domain: &str) -> HashSet<String> {
    let tail = domain_suffix(domain);
    let mut out = HashSet::with_capacity(base.len().saturating_mul(suffix_limit as usize + 1));

    for mutation in base {
        out.extend(variants(mutation, suffix_limit, &tail));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_suffix_no_domain() {
        let out = expand(&base(&["jsmith"]), 0, "");
        assert_eq!(out, base(&["jsmith"]));
    }

    #[test]
    fn test_suffixes_keep_plain_form() {
        let out = expand(&base(&["jsmith"]), 3, "");
        assert_eq!(out, base(&["jsmith", "jsmith1", "jsmith2", "jsmith3"]));
    }

    #[test]
    fn test_domain_on_every_form() {
        let out = expand(&base(&["js"]), 2, "corp.local");
        assert_eq!(
            out,
            base(&["js@corp.local", "js1@corp.local", "js2@corp.local"])
        );
    }

    #[test]
    fn test_collisions_collapse() {
        // "j1" + 1 and "j11" plain collide
        let out = expand(&base(&["j1", "j11"]), 1, "");
        assert_eq!(out, base(&["j1", "j11", "j111"]));
    }
}
