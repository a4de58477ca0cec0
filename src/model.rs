use serde::{Deserialize, Serialize};

/// One ingredient line: what it is and how much of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Ingredient {
            name: Some(name.into()),
            quantity: Some(quantity.into()),
        }
    }
}

/// A recipe record as handed to the renderer.
///
/// Every field is optional; unset fields render as empty defaults
/// (empty name, empty ingredient and instruction lists) rather than
/// being an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
}
