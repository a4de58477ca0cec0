pub mod error;
pub mod model;
pub mod normalize;
pub mod render;

use log::debug;

pub use crate::error::CookbookError;
pub use crate::model::{Ingredient, Recipe};
pub use crate::normalize::normalize_markup;
pub use crate::render::{render_card, render_cards, render_cookbook};

/// Parse a JSON array of recipes into [`Recipe`] values.
///
/// Fields absent from the JSON stay unset and render as empty defaults;
/// there is no validation beyond JSON well-formedness.
pub fn recipes_from_json(json: &str) -> Result<Vec<Recipe>, CookbookError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    debug!("parsed {} recipe(s) from JSON input", recipes.len());
    Ok(recipes)
}

/// Render a JSON array of recipes straight into a cookbook document.
pub fn cookbook_from_json(json: &str) -> Result<String, CookbookError> {
    let recipes = recipes_from_json(json)?;
    Ok(render_cookbook(&recipes))
}
