use crate::error::{Result, RewriteError};
use crate::matrix::Matrix;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::debug;

/// Per-symbol expansion lengths indexed by step count.
///
/// Row `k`, column `i` is the length of symbol `i` expanded for `k` steps,
/// i.e. the `i`-th row sum of the transfer matrix raised to `k`.
#[derive(Debug, Clone)]
pub struct GrowthTable {
    transfer: Matrix,
    /// Transfer matrix raised to `last_step()`.
    power: Matrix,
    rows: Vec<Vec<BigUint>>,
}

/// Why table construction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frozen {
    /// The requested step count was reached.
    StepTarget,
    /// Every symbol already spans past the target position.
    Covered,
    /// Every symbol spans past the target or has stopped growing.
    Stalled,
}

impl GrowthTable {
    /// Creates a table holding only step 0 (every symbol has length 1).
    pub fn new(transfer: Matrix) -> Self {
        let (n, _) = transfer.dims();
        Self {
            power: Matrix::identity(n),
            rows: vec![vec![BigUint::one(); n]],
            transfer,
        }
    }

    /// Builds the table for a query at `position` after `steps` steps,
    /// stopping as soon as more rows would not be consulted.
    pub fn build(
        transfer: Matrix,
        position: &BigUint,
        steps: &BigUint,
        max_steps: usize,
    ) -> Result<(Self, Frozen)> {
        let mut table = Self::new(transfer);
        let step_target = steps.to_usize();
        // Step counts the table can reach are decoded directly, so stalling
        // only applies past the row limit.
        let may_stall = step_target.map_or(true, |n| n > max_steps);

        let frozen = loop {
            let k = table.last_step();
            if step_target == Some(k) {
                break Frozen::StepTarget;
            }
            if table.covers(k, position) {
                break Frozen::Covered;
            }
            // A symbol at most `position` long whose length did not change
            // only expands into such symbols, so its length is final.
            if may_stall && k > 0 && table.is_settled(k, position) {
                break Frozen::Stalled;
            }
            if k >= max_steps {
                return Err(RewriteError::TableLimitExceeded(max_steps));
            }
            table.extend()?;
        };

        debug!(steps = table.last_step(), ?frozen, "growth table frozen");
        Ok((table, frozen))
    }

    /// Appends the row for one more step.
    pub fn extend(&mut self) -> Result<()> {
        self.power = self.transfer.try_mul(&self.power)?;
        self.rows.push(self.power.row_sums());
        Ok(())
    }

    /// Highest step count held by the table.
    pub fn last_step(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn row(&self, step: usize) -> &[BigUint] {
        &self.rows[step]
    }

    /// Length of symbol `index` after `step` steps.
    pub fn span_of(&self, step: usize, index: usize) -> &BigUint {
        &self.rows[step][index]
    }

    /// Total length of the symbols `indices` after `step` steps.
    pub fn span(&self, step: usize, indices: &[usize]) -> BigUint {
        indices.iter().map(|&i| &self.rows[step][i]).sum()
    }

    /// True when every entry at `step` either exceeds `position` or equals
    /// the entry one step earlier.
    fn is_settled(&self, step: usize, position: &BigUint) -> bool {
        self.rows[step]
            .iter()
            .zip(&self.rows[step - 1])
            .all(|(len, prev)| len > position || len == prev)
    }

    /// True when every symbol's expansion at `step` contains `position`.
    pub fn covers(&self, step: usize, position: &BigUint) -> bool {
        self.rows[step].iter().all(|len| len > position)
    }
}
