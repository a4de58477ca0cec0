use log::debug;

use crate::model::{Ingredient, Recipe};

/// Title baked into the document skeleton.
const DOCUMENT_TITLE: &str = "My Team";

/// Render a single recipe into an HTML `<section>` fragment.
///
/// `None` yields the empty string, no markup at all. A present recipe
/// with unset fields yields a full card shell with an empty heading and
/// empty `<ul></ul>` / `<ol></ol>` lists. The two cases are distinct on
/// purpose.
///
/// Field values are interpolated verbatim; the output is structurally
/// correct markup whose exact whitespace is left to
/// [`normalize_markup`](crate::normalize::normalize_markup).
pub fn render_card(recipe: Option<&Recipe>) -> String {
    let Some(recipe) = recipe else {
        return String::new();
    };

    let name = recipe.name.as_deref().unwrap_or("");
    let ingredients = recipe.ingredients.as_deref().unwrap_or(&[]);
    let instructions = recipe.instructions.as_deref().unwrap_or(&[]);

    let mut card = String::new();
    card.push_str("<section>");
    card.push_str(&heading("h2", name));
    card.push_str(&heading("h4", "Ingredients:"));
    card.push_str(&unordered_list(ingredients.iter().map(ingredient_item)));
    card.push_str(&heading("h4", "Instructions:"));
    card.push_str(&ordered_list(instructions.iter().map(|step| list_item(step))));
    card.push_str("</section>");
    card
}

/// Render every recipe in order and concatenate the fragments.
///
/// No separator, no filtering, no de-duplication: a recipe appearing
/// twice renders twice, adjacently. An empty slice yields the empty
/// string.
pub fn render_cards(recipes: &[Recipe]) -> String {
    recipes.iter().map(|recipe| render_card(Some(recipe))).collect()
}

/// Render the full cookbook document: a static HTML skeleton whose body
/// holds the concatenated recipe cards and nothing else.
pub fn render_cookbook(recipes: &[Recipe]) -> String {
    debug!("rendering cookbook with {} recipe(s)", recipes.len());

    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"UTF-8\" />\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\
         <meta http-equiv=\"X-UA-Compatible\" content=\"ie=edge\" />\
         <title>{}</title>\
         </head>\
         <body>{}</body>\
         </html>",
        DOCUMENT_TITLE,
        render_cards(recipes)
    )
}

fn heading(tag: &str, text: &str) -> String {
    format!("<{}>{}</{}>", tag, text, tag)
}

fn list_item(text: &str) -> String {
    format!("<li>{}</li>", text)
}

fn ingredient_item(ingredient: &Ingredient) -> String {
    let name = ingredient.name.as_deref().unwrap_or("");
    let quantity = ingredient.quantity.as_deref().unwrap_or("");
    format!("<li>{} <b>{}</b></li>", name, quantity)
}

fn unordered_list(items: impl Iterator<Item = String>) -> String {
    format!("<ul>{}</ul>", items.collect::<String>())
}

fn ordered_list(items: impl Iterator<Item = String>) -> String {
    format!("<ol>{}</ol>", items.collect::<String>())
}
