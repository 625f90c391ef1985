use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::model::{Recipe, RecipeBook};
use crate::CostError;

enum Frame<'a> {
    /// Schedule the composite ingredients of an item
    Expand(&'a str),
    /// All ingredients are resolved, pick the cheapest recipe
    Resolve(&'a str),
}

/// Computes minimum build costs over a [`RecipeBook`].
///
/// A base item costs 0. A composite item costs the minimum over its recipes
/// of the summed ingredient costs plus one combination step per extra
/// ingredient. Every item is computed at most once per evaluator; later
/// lookups are served from the memo table.
///
/// Evaluation walks the recipe graph with an explicit stack, so long recipe
/// chains do not grow the call stack. A cycle reachable from the requested
/// item is reported as [`CostError::CycleError`].
pub struct CostEvaluator<'a> {
    book: &'a RecipeBook,
    memo: HashMap<&'a str, u64>,
    choices: HashMap<&'a str, usize>,
    evaluations: usize,
}

impl<'a> CostEvaluator<'a> {
    pub fn new(book: &'a RecipeBook) -> Self {
        Self {
            book,
            memo: HashMap::new(),
            choices: HashMap::new(),
            evaluations: 0,
        }
    }

    /// Minimum cost of producing `item`
    pub fn cost(&mut self, item: &str) -> Result<u64, CostError> {
        let book = self.book;
        let Some((root, _)) = book.entry(item) else {
            trace!("'{}' is a base item", item);
            return Ok(0);
        };
        if let Some(&cost) = self.memo.get(root) {
            return Ok(cost);
        }

        let mut stack = vec![Frame::Expand(root)];
        let mut path: Vec<&'a str> = Vec::new();
        let mut in_progress: HashSet<&'a str> = HashSet::new();
        let mut resolved = 0;

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Expand(item) => {
                    if self.memo.contains_key(item) {
                        continue;
                    }
                    if in_progress.contains(item) {
                        return Err(cycle_error(&path, item));
                    }

                    in_progress.insert(item);
                    path.push(item);
                    stack.push(Frame::Resolve(item));

                    // reversed so the first ingredient is expanded first
                    for recipe in book.recipes(item).unwrap_or_default().iter().rev() {
                        for ingredient in recipe.ingredients().iter().rev() {
                            let ingredient = ingredient.as_str();
                            if book.is_composite(ingredient) && !self.memo.contains_key(ingredient)
                            {
                                stack.push(Frame::Expand(ingredient));
                            }
                        }
                    }
                }
                Frame::Resolve(item) => {
                    let recipes = book.recipes(item).unwrap_or_default();
                    let (choice, cost) = self.cheapest(item, recipes)?;

                    debug!("cost({}) = {} via recipe #{}", item, cost, choice + 1);
                    self.memo.insert(item, cost);
                    self.choices.insert(item, choice);
                    self.evaluations += 1;

                    path.pop();
                    in_progress.remove(item);
                    resolved = cost;
                }
            }
        }

        // the root's Resolve frame is the last one popped
        Ok(resolved)
    }

    /// Index and cost of the cheapest recipe; earlier recipes win ties.
    /// Every composite ingredient must already be memoized.
    fn cheapest(&self, item: &str, recipes: &[Recipe]) -> Result<(usize, u64), CostError> {
        let mut best: Option<(usize, u64)> = None;

        for (index, recipe) in recipes.iter().enumerate() {
            let mut total = recipe.combination_steps();
            for ingredient in recipe.ingredients() {
                let ingredient_cost = self.memo.get(ingredient.as_str()).copied().unwrap_or(0);
                total = total
                    .checked_add(ingredient_cost)
                    .ok_or_else(|| CostError::Overflow {
                        item: item.to_string(),
                    })?;
            }

            if best.map_or(true, |(_, lowest)| total < lowest) {
                best = Some((index, total));
            }
        }

        // the book never stores an item with an empty recipe list
        Ok(best.unwrap_or((0, 0)))
    }

    /// Recipe that produced the memoized minimum for `item`.
    ///
    /// `None` for base items and for items not evaluated yet.
    pub fn best_recipe(&self, item: &str) -> Option<&'a Recipe> {
        let index = *self.choices.get(item)?;
        self.book.recipes(item)?.get(index)
    }

    /// Previously computed cost of `item`, without evaluating anything
    pub fn memoized(&self, item: &str) -> Option<u64> {
        self.memo.get(item).copied()
    }

    /// Number of items whose cost has been computed so far
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

fn cycle_error(path: &[&str], repeated: &str) -> CostError {
    let start = path.iter().position(|item| *item == repeated).unwrap_or(0);
    let mut cycle: Vec<String> = path[start..].iter().map(|item| item.to_string()).collect();
    cycle.push(repeated.to_string());
    CostError::CycleError { path: cycle }
}
