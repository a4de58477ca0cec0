use cookbook_render::{
    cookbook_from_json, recipes_from_json, render_card, CookbookError, Ingredient,
};

#[test]
fn missing_fields_stay_unset_and_render_as_the_empty_shell() {
    let recipes = recipes_from_json("[{}]").unwrap();
    assert_eq!(recipes.len(), 1);
    assert!(recipes[0].name.is_none());
    assert!(recipes[0].ingredients.is_none());
    assert!(recipes[0].instructions.is_none());

    let card = render_card(Some(&recipes[0]));
    assert!(card.contains("<h2></h2>"));
    assert!(card.contains("<ul></ul>"));
    assert!(card.contains("<ol></ol>"));
}

#[test]
fn full_recipe_json_feeds_the_renderer() {
    let json = r#"
    [
        {
            "name": "Member Muffins?",
            "ingredients": [
                { "name": "milk", "quantity": "1 cup" },
                { "name": "sugar", "quantity": "2 tbs" }
            ],
            "instructions": ["Preheat oven to 220C", "Mix ingredients"]
        }
    ]
    "#;

    let recipes = recipes_from_json(json).unwrap();
    assert_eq!(recipes[0].name.as_deref(), Some("Member Muffins?"));
    assert_eq!(
        recipes[0].ingredients.as_deref(),
        Some(&[Ingredient::new("milk", "1 cup"), Ingredient::new("sugar", "2 tbs")][..])
    );

    let card = render_card(Some(&recipes[0]));
    assert!(card.contains("<li>milk <b>1 cup</b></li>"));
    assert!(card.contains("<li>Preheat oven to 220C</li>"));
}

#[test]
fn partial_ingredient_objects_are_accepted() {
    let recipes = recipes_from_json(r#"[{"ingredients": [{"name": "salt"}, {}]}]"#).unwrap();
    let card = render_card(Some(&recipes[0]));
    assert!(card.contains("<li>salt <b></b></li>"));
    assert!(card.contains("<li> <b></b></li>"));
}

#[test]
fn empty_array_renders_an_empty_cookbook() {
    let cookbook = cookbook_from_json("[]").unwrap();
    assert!(cookbook.contains("<body></body>"));
}

#[test]
fn malformed_json_is_surfaced_as_a_json_error() {
    let err = recipes_from_json("not json at all").unwrap_err();
    assert!(matches!(err, CookbookError::Json(_)));
}

#[test]
fn a_top_level_object_is_rejected() {
    // The input must be an array of recipes, not a single recipe.
    assert!(recipes_from_json(r#"{"name": "Toast"}"#).is_err());
}
