use thiserror::Error;

/// Errors that can occur while reading recipes or evaluating costs
#[derive(Error, Debug)]
pub enum CostError {
    /// Input ended before the recipe count line
    #[error("Missing recipe count on line 1")]
    MissingCount,

    /// First line is not a non-negative integer
    #[error("Invalid recipe count on line 1: {value:?}")]
    InvalidCount { value: String },

    /// Recipe line without the definition separator
    #[error("Missing '{separator}' separator on line {line}: {content:?}")]
    MissingSeparator {
        line: usize,
        separator: String,
        content: String,
    },

    /// Recipe line with more than one definition separator
    #[error("More than one '{separator}' separator on line {line}: {content:?}")]
    ExtraSeparator {
        line: usize,
        separator: String,
        content: String,
    },

    /// Empty item name on the left side of a recipe
    #[error("Empty item name on line {line}: {content:?}")]
    EmptyItem { line: usize, content: String },

    /// Nothing on the right side of a recipe
    #[error("Recipe has no ingredients on line {line}: {content:?}")]
    EmptyRecipe { line: usize, content: String },

    /// An ingredient between two separators is empty
    #[error("Empty ingredient name on line {line}: {content:?}")]
    EmptyIngredient { line: usize, content: String },

    /// Fewer recipe lines than announced by the count line
    #[error("Expected {expected} recipe lines but input ended after {found}")]
    UnexpectedEof { expected: usize, found: usize },

    /// No target item after the recipe lines
    #[error("Missing target item after the recipe lines")]
    MissingTarget,

    /// Recipe rejected when added to a recipe book
    #[error("Invalid recipe for {item:?}: {reason}")]
    InvalidRecipe { item: String, reason: &'static str },

    /// The recipe graph reachable from the target contains a cycle
    #[error("Recipe cycle detected: {}", .path.join(" -> "))]
    CycleError { path: Vec<String> },

    /// Cost does not fit in 64 bits
    #[error("Cost of '{item}' overflows")]
    Overflow { item: String },

    /// Failed to read input
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Configuration loaded but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
