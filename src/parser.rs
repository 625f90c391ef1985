use log::{debug, warn};

use crate::config::ParserConfig;
use crate::model::RecipeBook;
use crate::CostError;

/// A parsed input: the recipes and the item whose cost is wanted
#[derive(Debug, Clone)]
pub struct Problem {
    pub book: RecipeBook,
    pub target: String,
}

/// Parse the line-oriented input format.
///
/// ```text
/// 2
/// table=wood+nail
/// table=plank
/// table
/// ```
///
/// The first line is the number of recipe lines that follow. Each recipe
/// line is `ITEM=ING1+ING2+...`; repeated items collect alternative recipes.
/// The line after the recipes names the target item; it must be present but
/// may be blank. Anything after it is ignored.
pub fn parse_input(input: &str, config: &ParserConfig) -> Result<Problem, CostError> {
    config.validate()?;

    let mut lines = input.lines();

    let count_line = lines.next().ok_or(CostError::MissingCount)?;
    let expected: usize = count_line
        .trim()
        .parse()
        .map_err(|_| CostError::InvalidCount {
            value: count_line.to_string(),
        })?;
    debug!("Reading {} recipe lines", expected);

    let mut book = RecipeBook::new();
    for found in 0..expected {
        let content = lines.next().ok_or(CostError::UnexpectedEof { expected, found })?;
        // line 1 is the count
        let line = found + 2;
        let (item, ingredients) = parse_recipe_line(content, line, config)?;
        debug!("Line {}: {} <- {:?}", line, item, ingredients);
        book.add_recipe(item, ingredients)?;
    }

    // a blank target line names no recipe, so it evaluates as a base item
    let target = lines
        .next()
        .map(|raw| clean(raw, config))
        .ok_or(CostError::MissingTarget)?
        .to_string();

    let trailing = lines.filter(|rest| !rest.trim().is_empty()).count();
    if trailing > 0 {
        warn!("Ignoring {} non-empty lines after the target item", trailing);
    }

    debug!(
        "Parsed {} composite items, target '{}'",
        book.len(),
        target
    );
    Ok(Problem { book, target })
}

/// Split one `ITEM=ING1+ING2` line into the item and its ingredients
fn parse_recipe_line<'l>(
    content: &'l str,
    line: usize,
    config: &ParserConfig,
) -> Result<(&'l str, Vec<&'l str>), CostError> {
    let separator = config.definition_separator.as_str();
    let (left, right) = content
        .split_once(separator)
        .ok_or_else(|| CostError::MissingSeparator {
            line,
            separator: separator.to_string(),
            content: content.to_string(),
        })?;
    if right.contains(separator) {
        return Err(CostError::ExtraSeparator {
            line,
            separator: separator.to_string(),
            content: content.to_string(),
        });
    }

    let item = clean(left, config);
    if item.is_empty() {
        return Err(CostError::EmptyItem {
            line,
            content: content.to_string(),
        });
    }

    if clean(right, config).is_empty() {
        return Err(CostError::EmptyRecipe {
            line,
            content: content.to_string(),
        });
    }

    let ingredients: Vec<&str> = right
        .split(config.ingredient_separator.as_str())
        .map(|name| clean(name, config))
        .collect();
    if ingredients.iter().any(|name| name.is_empty()) {
        return Err(CostError::EmptyIngredient {
            line,
            content: content.to_string(),
        });
    }

    Ok((item, ingredients))
}

fn clean<'l>(name: &'l str, config: &ParserConfig) -> &'l str {
    if config.trim_whitespace {
        name.trim()
    } else {
        name
    }
}
