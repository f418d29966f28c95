use crate::error::{Result, RewriteError};
use crate::matrix::Matrix;
use ahash::AHashMap as HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An ordered, closed set of per-symbol rewrite rules.
///
/// Each symbol maps to a non-empty replacement, and every symbol appearing in
/// a replacement has a rule of its own. A symbol's position in the rule list
/// is its row/column in the transfer matrix.
#[derive(Debug, Clone)]
pub struct RuleSet<T> {
    rules: Vec<(T, Vec<T>)>,
    index: HashMap<T, usize>,
    /// Replacements with symbols swapped for their indices.
    encoded: Vec<Vec<usize>>,
}

impl<T: Hash + Eq + Clone + Debug> RuleSet<T> {
    /// Builds a rule set, validating that the alphabet is closed.
    pub fn new<I, R>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, R)>,
        R: IntoIterator<Item = T>,
    {
        let rules: Vec<(T, Vec<T>)> = rules
            .into_iter()
            .map(|(symbol, replacement)| (symbol, replacement.into_iter().collect()))
            .collect();

        let mut index = HashMap::with_capacity(rules.len());
        for (i, (symbol, replacement)) in rules.iter().enumerate() {
            if replacement.is_empty() {
                return Err(RewriteError::EmptyReplacement(format!("{symbol:?}")));
            }
            if index.insert(symbol.clone(), i).is_some() {
                return Err(RewriteError::DuplicateRule(format!("{symbol:?}")));
            }
        }

        let mut encoded = Vec::with_capacity(rules.len());
        for (_, replacement) in &rules {
            let codes = replacement
                .iter()
                .map(|s| {
                    index
                        .get(s)
                        .copied()
                        .ok_or_else(|| RewriteError::UnknownSymbol(format!("{s:?}")))
                })
                .collect::<Result<Vec<_>>>()?;
            encoded.push(codes);
        }

        Ok(Self {
            rules,
            index,
            encoded,
        })
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Symbols in rule order.
    pub fn symbols(&self) -> impl Iterator<Item = &T> {
        self.rules.iter().map(|(symbol, _)| symbol)
    }

    /// Matrix row/column of `symbol`.
    pub fn index_of(&self, symbol: &T) -> Result<usize> {
        self.index
            .get(symbol)
            .copied()
            .ok_or_else(|| RewriteError::UnknownSymbol(format!("{symbol:?}")))
    }

    /// One-step replacement of `symbol`.
    pub fn replacement(&self, symbol: &T) -> Result<&[T]> {
        let i = self.index_of(symbol)?;
        Ok(&self.rules[i].1)
    }

    pub(crate) fn symbol_at(&self, index: usize) -> &T {
        &self.rules[index].0
    }

    pub(crate) fn encoded_replacement(&self, index: usize) -> &[usize] {
        &self.encoded[index]
    }

    /// Maps every symbol of `seq` to its index, failing on the first unknown one.
    pub(crate) fn indices_of(&self, seq: &[T]) -> Result<Vec<usize>> {
        seq.iter().map(|s| self.index_of(s)).collect()
    }

    /// Builds the transfer matrix: entry (i, j) counts symbol j in the
    /// replacement of symbol i.
    pub fn transfer_matrix(&self) -> Matrix {
        let mut m = Matrix::zero(self.len());
        for (i, codes) in self.encoded.iter().enumerate() {
            for &j in codes {
                m.increment(i, j);
            }
        }
        m
    }
}

impl RuleSet<char> {
    /// Builds a `char` rule set from `(symbol, replacement)` string pairs.
    ///
    /// The key string must hold exactly one character.
    pub fn from_strs(rules: &[(&str, &str)]) -> Result<Self> {
        let mut pairs = Vec::with_capacity(rules.len());
        for &(key, replacement) in rules {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(RewriteError::UnknownSymbol(format!("{key:?}"))),
            };
            pairs.push((symbol, replacement.chars().collect::<Vec<_>>()));
        }
        Self::new(pairs)
    }
}
