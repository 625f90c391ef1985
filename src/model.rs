use std::collections::HashMap;

use crate::CostError;

/// One way of producing an item: the ingredients combined to make it.
///
/// Ingredient order is kept as written but does not affect cost. Duplicates
/// are allowed and each occurrence is counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    ingredients: Vec<String>,
}

impl Recipe {
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Number of combination steps this recipe charges on top of its ingredients
    pub fn combination_steps(&self) -> u64 {
        // never empty, guarded by RecipeBook::add_recipe
        (self.ingredients.len() - 1) as u64
    }
}

/// All known recipes, keyed by the item they produce.
///
/// Items without an entry are base items. Alternative recipes for the same
/// item keep the order they were added in.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: HashMap<String, Vec<Recipe>>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register another recipe for `item`
    pub fn add_recipe<I, S>(
        &mut self,
        item: impl Into<String>,
        ingredients: I,
    ) -> Result<(), CostError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let item = item.into();
        if item.is_empty() {
            return Err(CostError::InvalidRecipe {
                item,
                reason: "item name is empty",
            });
        }

        let ingredients: Vec<String> = ingredients.into_iter().map(Into::into).collect();
        if ingredients.is_empty() {
            return Err(CostError::InvalidRecipe {
                item,
                reason: "recipe has no ingredients",
            });
        }
        if ingredients.iter().any(String::is_empty) {
            return Err(CostError::InvalidRecipe {
                item,
                reason: "ingredient name is empty",
            });
        }

        self.recipes
            .entry(item)
            .or_default()
            .push(Recipe { ingredients });
        Ok(())
    }

    /// Alternative recipes for `item`, or `None` for a base item
    pub fn recipes(&self, item: &str) -> Option<&[Recipe]> {
        self.recipes.get(item).map(Vec::as_slice)
    }

    pub(crate) fn entry(&self, item: &str) -> Option<(&str, &[Recipe])> {
        self.recipes
            .get_key_value(item)
            .map(|(name, recipes)| (name.as_str(), recipes.as_slice()))
    }

    pub fn is_composite(&self, item: &str) -> bool {
        self.recipes.contains_key(item)
    }

    /// Items that have at least one recipe
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    /// Number of composite items
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
