use crate::config::LocateConfig;
use crate::error::{Result, RewriteError};
use crate::growth::GrowthTable;
use crate::matrix::Matrix;
use crate::reduce::reduce;
use crate::rules::RuleSet;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

/// Answers "which symbol sits at position `p` after `n` steps" for one rule set.
///
/// The transfer matrix is built once and shared by every query; each query
/// builds its own growth table, sized to its position.
///
/// ```
/// use num_bigint::BigUint;
/// use rewrite_index::{presets, Locator};
///
/// let rules = presets::cat();
/// let locator = Locator::new(&rules);
/// let seed: Vec<char> = "CAT".chars().collect();
///
/// let symbol = locator
///     .locate(&seed, &BigUint::from(3u32), &BigUint::from(12u32))
///     .unwrap();
/// assert_eq!(symbol, 'G');
/// ```
#[derive(Debug, Clone)]
pub struct Locator<'a, T> {
    rules: &'a RuleSet<T>,
    transfer: Matrix,
    config: LocateConfig,
}

impl<'a, T: Hash + Eq + Clone + Debug> Locator<'a, T> {
    pub fn new(rules: &'a RuleSet<T>) -> Self {
        Self {
            rules,
            transfer: rules.transfer_matrix(),
            config: LocateConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LocateConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rules(&self) -> &'a RuleSet<T> {
        self.rules
    }

    /// Returns the symbol at `position` of `seed` expanded for `steps` steps.
    pub fn locate(&self, seed: &[T], steps: &BigUint, position: &BigUint) -> Result<T> {
        if seed.is_empty() {
            return Err(RewriteError::EmptySeed);
        }
        let mut current = self.rules.indices_of(seed)?;

        let (table, _) = GrowthTable::build(
            self.transfer.clone(),
            position,
            steps,
            self.config.max_table_steps,
        )?;
        let level = table.last_step();

        if let Some(reduction) = reduce(self.rules, seed, steps, level)? {
            let index = self.rules.index_of(&reduction.seed)?;
            let span = table.span_of(level, index);
            if position >= span {
                return Err(RewriteError::ReductionOutOfReach {
                    position: position.clone(),
                    span: span.clone(),
                });
            }
            current = vec![index];
        } else {
            let length = table.span(level, &current);
            if *position >= length {
                return Err(RewriteError::PositionOutOfRange {
                    position: position.clone(),
                    length,
                });
            }
        }

        let index = self.descend(&table, current, level, position.clone())?;
        Ok(self.rules.symbol_at(index).clone())
    }

    /// Walks from `level` down to step 0, keeping only the replacement of the
    /// symbol whose subtree holds `position`.
    ///
    /// `position` must lie within the expansion of `current` at `level`;
    /// otherwise `PositionOutOfRange` is returned.
    fn descend(
        &self,
        table: &GrowthTable,
        mut current: Vec<usize>,
        mut level: usize,
        mut position: BigUint,
    ) -> Result<usize> {
        while level > 0 {
            let length = table.span(level, &current);
            debug_assert!(position < length);

            let mut chosen = None;
            for &symbol in &current {
                let span = table.span_of(level, symbol);
                if position < *span {
                    chosen = Some(symbol);
                    break;
                }
                position -= span;
            }
            let Some(symbol) = chosen else {
                return Err(RewriteError::PositionOutOfRange { position, length });
            };
            trace!(level, symbol = ?self.rules.symbol_at(symbol), %position, "descend");

            current = self.rules.encoded_replacement(symbol).to_vec();
            level -= 1;
        }

        match position.to_usize().and_then(|offset| current.get(offset)) {
            Some(&index) => Ok(index),
            None => Err(RewriteError::PositionOutOfRange {
                position,
                length: BigUint::from(current.len()),
            }),
        }
    }
}

/// Shorthand for a single query with the default configuration.
pub fn locate<T>(rules: &RuleSet<T>, seed: &[T], steps: &BigUint, position: &BigUint) -> Result<T>
where
    T: Hash + Eq + Clone + Debug,
{
    Locator::new(rules).locate(seed, steps, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{oracle, presets};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn at(rules: &RuleSet<char>, seed: &str, steps: u64, position: u64) -> Result<char> {
        locate(
            rules,
            &chars(seed),
            &BigUint::from(steps),
            &BigUint::from(position),
        )
    }

    #[test]
    fn test_cat_small() {
        let rules = presets::cat();
        assert_eq!(at(&rules, "CAT", 3, 12).unwrap(), 'G');
        assert_eq!(at(&rules, "CAT", 3, 5).unwrap(), 'C');
        assert_eq!(at(&rules, "CAT", 3, 6).unwrap(), 'A');
        assert_eq!(at(&rules, "CAT", 3, 7).unwrap(), 'T');
    }

    #[test]
    fn test_cat_every_position_matches_oracle() {
        let rules = presets::cat();
        let expanded = oracle::expand(&rules, &chars("CAT"), 3).unwrap();
        for (p, &expected) in expanded.iter().enumerate() {
            assert_eq!(at(&rules, "CAT", 3, p as u64).unwrap(), expected, "position {p}");
        }
    }

    #[test]
    fn test_zero_steps_reads_seed() {
        let rules = presets::rabbit();
        for (p, expected) in "RABBITS".chars().enumerate() {
            assert_eq!(at(&rules, "RABBITS", 0, p as u64).unwrap(), expected);
        }
    }

    #[test]
    fn test_huge_steps_position_zero() {
        let rules = presets::cat();
        let steps = BigUint::from(10u32).pow(100);
        let symbol = locate(&rules, &chars("CAT"), &steps, &BigUint::from(0u32)).unwrap();
        assert_eq!(symbol, 'C');
    }

    #[test]
    fn test_position_out_of_range() {
        let rules = presets::cat();
        let err = at(&rules, "CAT", 3, 13).unwrap_err();
        assert_eq!(
            err,
            RewriteError::PositionOutOfRange {
                position: BigUint::from(13u32),
                length: BigUint::from(13u32),
            }
        );
    }

    #[test]
    fn test_unknown_and_empty_seed() {
        let rules = presets::cat();
        assert!(matches!(at(&rules, "CAX", 3, 0), Err(RewriteError::UnknownSymbol(_))));
        assert_eq!(at(&rules, "", 3, 0).unwrap_err(), RewriteError::EmptySeed);
    }

    #[test]
    fn test_reduction_out_of_reach() {
        // A and B swap forever and never grow; C doubles.
        let rules = RuleSet::from_strs(&[("A", "B"), ("B", "A"), ("C", "CC")]).unwrap();
        let steps = BigUint::from(10u32).pow(100);
        let seed = chars("AC");
        // 10^100 is even, so the leading A has swapped back to itself.
        assert_eq!(
            locate(&rules, &seed, &steps, &BigUint::from(0u32)).unwrap(),
            'A'
        );
        assert!(matches!(
            locate(&rules, &seed, &steps, &BigUint::from(1u32)),
            Err(RewriteError::ReductionOutOfReach { .. })
        ));
    }

    #[test]
    fn test_fixed_point_is_stable() {
        // "A" expands to A followed by n copies of B.
        let rules = RuleSet::from_strs(&[("A", "AB"), ("B", "B")]).unwrap();
        let locator = Locator::new(&rules);
        let seed = chars("A");
        for steps in [6u64, 7, 50, 1000] {
            for p in 0..=6u64 {
                let expected = if p == 0 { 'A' } else { 'B' };
                let got = locator
                    .locate(&seed, &BigUint::from(steps), &BigUint::from(p))
                    .unwrap();
                assert_eq!(got, expected, "steps {steps}, position {p}");
            }
        }
    }

    #[test]
    fn test_non_growing_seed_symbol_within_reach() {
        // "BA" -> "BAB" -> "BABB" -> "BABBB"
        let rules = RuleSet::from_strs(&[("A", "AB"), ("B", "B")]).unwrap();
        assert_eq!(at(&rules, "BA", 3, 1).unwrap(), 'A');

        let expanded = oracle::expand(&rules, &chars("BA"), 3).unwrap();
        assert_eq!(expanded, chars("BABBB"));
        for (p, &expected) in expanded.iter().enumerate() {
            assert_eq!(at(&rules, "BA", 3, p as u64).unwrap(), expected, "position {p}");
        }
    }

    #[test]
    fn test_swapping_prefix_with_small_step_count() {
        let rules = RuleSet::from_strs(&[("A", "B"), ("B", "A"), ("C", "CC")]).unwrap();
        assert_eq!(at(&rules, "AC", 10, 1).unwrap(), 'C');

        let expanded = oracle::expand(&rules, &chars("AC"), 10).unwrap();
        for (p, &expected) in expanded.iter().enumerate() {
            assert_eq!(at(&rules, "AC", 10, p as u64).unwrap(), expected, "position {p}");
        }
    }

    #[test]
    fn test_step_count_at_limit_is_decoded_directly() {
        let rules = RuleSet::from_strs(&[("A", "B"), ("B", "A"), ("C", "CC")]).unwrap();
        let locator =
            Locator::new(&rules).with_config(LocateConfig::default().with_max_table_steps(12));
        let seed = chars("AC");
        let got = locator
            .locate(&seed, &BigUint::from(12u32), &BigUint::from(7u32))
            .unwrap();
        assert_eq!(got, 'C');
        assert!(matches!(
            locator.locate(&seed, &BigUint::from(13u32), &BigUint::from(7u32)),
            Err(RewriteError::ReductionOutOfReach { .. })
        ));
    }

    #[test]
    fn test_table_limit_is_reported() {
        let rules = RuleSet::from_strs(&[("A", "AB"), ("B", "B")]).unwrap();
        let locator =
            Locator::new(&rules).with_config(LocateConfig::default().with_max_table_steps(10));
        let steps = BigUint::from(10u32).pow(100);
        assert_eq!(
            locator
                .locate(&chars("A"), &steps, &BigUint::from(100u32))
                .unwrap_err(),
            RewriteError::TableLimitExceeded(10)
        );
    }
}
