//! The two sample rule sets used throughout the tests and demos.

use crate::rules::RuleSet;

pub const CAT_SEED: &str = "CAT";
pub const RABBIT_SEED: &str = "RABBITS";

/// `C->TG, A->C, T->CA, G->T`
pub fn cat() -> RuleSet<char> {
    RuleSet::from_strs(&[("C", "TG"), ("A", "C"), ("T", "CA"), ("G", "T")])
        .expect("cat rule set is closed")
}

/// `G->T, T->CA, C->BR, A->I, R->B, B->IS, I->TG, S->C`
pub fn rabbit() -> RuleSet<char> {
    RuleSet::from_strs(&[
        ("G", "T"),
        ("T", "CA"),
        ("C", "BR"),
        ("A", "I"),
        ("R", "B"),
        ("B", "IS"),
        ("I", "TG"),
        ("S", "C"),
    ])
    .expect("rabbit rule set is closed")
}
