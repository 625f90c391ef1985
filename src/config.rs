use config::{Config, Environment, File};
use serde::Deserialize;

use crate::CostError;

/// Settings for reading recipe input
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Separates the produced item from its ingredients (`table=wood+nail`)
    #[serde(default = "default_definition_separator")]
    pub definition_separator: String,
    /// Separates ingredients from each other
    #[serde(default = "default_ingredient_separator")]
    pub ingredient_separator: String,
    /// Strip surrounding whitespace (and CRLF leftovers) from names
    #[serde(default = "default_trim_whitespace")]
    pub trim_whitespace: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            definition_separator: default_definition_separator(),
            ingredient_separator: default_ingredient_separator(),
            trim_whitespace: default_trim_whitespace(),
        }
    }
}

// Default value functions
fn default_definition_separator() -> String {
    "=".to_string()
}

fn default_ingredient_separator() -> String {
    "+".to_string()
}

fn default_trim_whitespace() -> bool {
    true
}

impl ParserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_COST__ prefix
    /// 2. recipe-cost.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_COST__INGREDIENT_SEPARATOR
    pub fn load() -> Result<Self, CostError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe-cost").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_COST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let parsed: ParserConfig = settings.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject separator settings the parser cannot work with
    pub fn validate(&self) -> Result<(), CostError> {
        if self.definition_separator.is_empty() {
            return Err(CostError::InvalidConfig(
                "definition_separator cannot be empty".to_string(),
            ));
        }
        if self.ingredient_separator.is_empty() {
            return Err(CostError::InvalidConfig(
                "ingredient_separator cannot be empty".to_string(),
            ));
        }
        // also covers identical separators
        if self.definition_separator.contains(&self.ingredient_separator)
            || self.ingredient_separator.contains(&self.definition_separator)
        {
            return Err(CostError::InvalidConfig(format!(
                "definition separator {:?} and ingredient separator {:?} must not contain each other",
                self.definition_separator, self.ingredient_separator
            )));
        }
        Ok(())
    }
}
