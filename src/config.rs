/// Tunables for position queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocateConfig {
    /// Upper bound on growth-table rows built for a single query.
    ///
    /// Rule sets with at least one exponentially growing symbol need only a
    /// few hundred rows even for positions near 10^100. Linear growth needs
    /// as many rows as the position itself, which this bound turns into an
    /// error instead of an endless loop.
    pub max_table_steps: usize,
}

impl LocateConfig {
    pub fn with_max_table_steps(mut self, max_table_steps: usize) -> Self {
        self.max_table_steps = max_table_steps;
        self
    }
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            max_table_steps: 4096,
        }
    }
}
