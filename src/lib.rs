//! # Rewrite Index - Positional Lookup in Rewritten Strings
//!
//! Answers which symbol sits at position `p` of a seed string after `n`
//! simultaneous per-symbol rewriting steps, without building the string.
//! Both `n` and `p` may be astronomically large (10^100 and beyond).
//!
//! The lookup combines three pieces:
//! 1. **Growth table**: powers of the integer transfer matrix give each
//!    symbol's expansion length after `k` steps.
//! 2. **Cycle reduction**: the first-symbol trajectory is eventually
//!    periodic, which collapses a huge `n` to the table's range.
//! 3. **Descent**: walking from step `n` down to step 0, only the replacement
//!    of the symbol whose subtree holds `p` is kept.
//!
//! ## Example
//!
//! ```
//! use num_bigint::BigUint;
//! use rewrite_index::{locate, RuleSet};
//!
//! let rules = RuleSet::from_strs(&[("C", "TG"), ("A", "C"), ("T", "CA"), ("G", "T")]).unwrap();
//! let seed: Vec<char> = "CAT".chars().collect();
//!
//! let steps = BigUint::from(10u32).pow(100);
//! let symbol = locate(&rules, &seed, &steps, &BigUint::from(0u32)).unwrap();
//! assert_eq!(symbol, 'C');
//! ```
//!
//! ## Performance
//!
//! - Growth table rows grow logarithmically with `p` when some symbol grows
//!   exponentially; each row costs one N×N big-integer matrix product
//! - Cycle reduction visits at most N + 1 symbols before a repeat
//! - Descent is O(K × replacement length) big-integer comparisons

mod config;
mod error;
mod growth;
mod locate;
mod matrix;
pub mod oracle;
pub mod presets;
mod reduce;
mod rules;


pub use config::LocateConfig;
pub use error::{Result, RewriteError};
pub use growth::{Frozen, GrowthTable};
pub use locate::{locate, Locator};
pub use matrix::Matrix;
pub use reduce::{first_symbol_after, reduce, Reduction};
pub use rules::RuleSet;
