use num_bigint::BigUint;
use rewrite_index::{presets, Locator, RuleSet};
use std::env;
use tracing_subscriber::EnvFilter;

/// Prints `count` symbols starting at position 10^exp after 10^exp steps,
/// for both sample rule sets.
///
/// Usage: cargo run --example solve [exp] [count]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [exp] [count]", args[0]);
        std::process::exit(1);
    }

    let exp: u32 = args.get(1).map_or(Ok(100), |s| s.parse()).unwrap_or_else(|_| {
        eprintln!("exp must be a non-negative integer");
        std::process::exit(1);
    });
    let count: u32 = args.get(2).map_or(Ok(1000), |s| s.parse()).unwrap_or_else(|_| {
        eprintln!("count must be a non-negative integer");
        std::process::exit(1);
    });

    let n = BigUint::from(10u32).pow(exp);
    for (rules, seed) in [
        (presets::cat(), presets::CAT_SEED),
        (presets::rabbit(), presets::RABBIT_SEED),
    ] {
        println!("{}", window(&rules, seed, &n, count));
    }
}

fn window(rules: &RuleSet<char>, seed: &str, n: &BigUint, count: u32) -> String {
    let seed: Vec<char> = seed.chars().collect();
    let locator = Locator::new(rules);

    (0..count)
        .map(|p| {
            let position = n + p;
            locator.locate(&seed, n, &position).unwrap_or_else(|e| {
                eprintln!("Lookup at {} failed: {}", position, e);
                std::process::exit(1);
            })
        })
        .collect()
}
