use num_bigint::BigUint;
use thiserror::Error;

/// Errors returned while building rule sets or answering position queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Matrix operands have incompatible shapes.
    #[error("dimension mismatch: {left:?} * {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A symbol was used that has no rule.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The same symbol was given two rules.
    #[error("duplicate rule for symbol: {0}")]
    DuplicateRule(String),

    /// A rule maps its symbol to nothing.
    #[error("empty replacement for symbol: {0}")]
    EmptyReplacement(String),

    /// The seed string has no symbols.
    #[error("seed is empty")]
    EmptySeed,

    /// The queried position lies past the end of the expanded string.
    #[error("position {position} out of range for length {length}")]
    PositionOutOfRange { position: BigUint, length: BigUint },

    /// The reduced single-symbol seed does not reach the queried position.
    #[error("position {position} not covered by reduced seed span {span}")]
    ReductionOutOfReach { position: BigUint, span: BigUint },

    /// The growth table needed more steps than allowed.
    #[error("growth table exceeded {0} steps")]
    TableLimitExceeded(usize),
}

pub type Result<T> = std::result::Result<T, RewriteError>;
