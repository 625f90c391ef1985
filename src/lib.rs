pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod parser;

use log::info;

pub use self::config::ParserConfig;
pub use self::error::CostError;
pub use self::evaluator::CostEvaluator;
pub use self::model::{Recipe, RecipeBook};
pub use self::parser::{parse_input, Problem};

/// Parse `input` with the default settings and return the minimum cost of its target.
///
/// # Example
/// ```
/// let cost = recipe_cost::solve("2\na=b+c\nb=d+e\na\n").unwrap();
/// assert_eq!(cost, 2);
/// ```
pub fn solve(input: &str) -> Result<u64, CostError> {
    solve_with_config(input, &ParserConfig::default())
}

/// Parse `input` with custom separators and return the minimum cost of its target.
pub fn solve_with_config(input: &str, config: &ParserConfig) -> Result<u64, CostError> {
    let Problem { book, target } = parse_input(input, config)?;

    let mut evaluator = CostEvaluator::new(&book);
    let cost = evaluator.cost(&target)?;
    info!(
        "Minimum cost of '{}' is {} ({} items evaluated)",
        target,
        cost,
        evaluator.evaluations()
    );
    Ok(cost)
}
