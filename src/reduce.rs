use crate::error::{Result, RewriteError};
use crate::rules::RuleSet;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// A query rewritten to a single-symbol seed and a table-sized step count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction<T> {
    pub seed: T,
    pub steps: usize,
}

/// Follows the first-symbol trajectory from `start` for `steps` steps.
///
/// The trajectory is eventually periodic, so once a symbol repeats the
/// remaining step count is taken modulo the cycle length.
pub(crate) fn trajectory_end<T>(rules: &RuleSet<T>, start: usize, steps: &BigUint) -> usize
where
    T: Hash + Eq + Clone + Debug,
{
    let mut seen: Vec<Option<usize>> = vec![None; rules.len()];
    seen[start] = Some(0);

    let mut remaining = steps.clone();
    let mut taken = 0usize;
    let mut current = start;
    while !remaining.is_zero() {
        taken += 1;
        remaining -= 1u32;
        current = rules.encoded_replacement(current)[0];
        match seen[current] {
            Some(first) => remaining %= BigUint::from(taken - first),
            None => seen[current] = Some(taken),
        }
    }
    current
}

/// Returns the first symbol of `start` expanded for `steps` steps.
pub fn first_symbol_after<T>(rules: &RuleSet<T>, start: &T, steps: &BigUint) -> Result<T>
where
    T: Hash + Eq + Clone + Debug,
{
    let start = rules.index_of(start)?;
    let end = trajectory_end(rules, start, steps);
    Ok(rules.symbol_at(end).clone())
}

/// Reduces `steps` down to `table_steps` by advancing the seed's first
/// symbol along its trajectory. Returns `None` when `steps` is already within
/// the table.
///
/// After `steps` steps the seed equals, in its leftmost part, the expansion of
/// the returned symbol for `table_steps` steps; positions within that symbol's
/// span at `table_steps` decode identically.
pub fn reduce<T>(
    rules: &RuleSet<T>,
    seed: &[T],
    steps: &BigUint,
    table_steps: usize,
) -> Result<Option<Reduction<T>>>
where
    T: Hash + Eq + Clone + Debug,
{
    let first = seed.first().ok_or(RewriteError::EmptySeed)?;
    let table = BigUint::from(table_steps);
    if *steps <= table {
        return Ok(None);
    }

    let advance = steps - &table;
    let reduced = first_symbol_after(rules, first, &advance)?;
    debug!(from = %steps, to = table_steps, seed = ?reduced, "reduced step count");
    Ok(Some(Reduction {
        seed: reduced,
        steps: table_steps,
    }))
}
