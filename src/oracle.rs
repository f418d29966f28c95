use crate::error::Result;
use crate::rules::RuleSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Expands `seed` for `steps` steps by literal substitution.
///
/// Output length grows exponentially for most rule sets; only meant for
/// small step counts, e.g. to cross-check [`crate::Locator`].
pub fn expand<T>(rules: &RuleSet<T>, seed: &[T], steps: usize) -> Result<Vec<T>>
where
    T: Hash + Eq + Clone + Debug,
{
    let mut current = seed.to_vec();
    for _ in 0..steps {
        let mut next = Vec::with_capacity(current.len() * 2);
        for symbol in &current {
            next.extend_from_slice(rules.replacement(symbol)?);
        }
        current = next;
    }
    debug!(steps, length = current.len(), "expanded by substitution");
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    fn expand_str(rules: &RuleSet<char>, seed: &str, steps: usize) -> String {
        let seed: Vec<char> = seed.chars().collect();
        expand(rules, &seed, steps).unwrap().into_iter().collect()
    }

    #[test]
    fn test_zero_steps() {
        assert_eq!(expand_str(&presets::cat(), "CAT", 0), "CAT");
    }

    #[test]
    fn test_cat_three_steps() {
        assert_eq!(expand_str(&presets::cat(), "CAT", 1), "TGCCA");
        assert_eq!(expand_str(&presets::cat(), "CAT", 3), "TGCCACATCATTG");
    }

    #[test]
    fn test_unknown_seed_symbol() {
        let seed = ['C', 'X'];
        assert!(expand(&presets::cat(), &seed, 1).is_err());
    }
}
