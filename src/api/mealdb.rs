//! TheMealDB recipe lookup. Free-text search by dish name; zero or one
//! record comes back, with ingredients spread over twenty numbered field
//! pairs that get compacted into an ordered list.

use super::fetch_text;
use crate::model::{Ingredient, Recipe};
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Request, RequestInit, RequestMode};

const MEALDB_API_KEY: &str = "1";

/// Looks up a recipe for the recognized dish label. `Ok(None)` means the
/// directory has no match, which is not an error.
pub async fn lookup_recipe(dish_name: &str) -> Result<Option<Recipe>, JsValue> {
    let url = format!(
        "https://www.themealdb.com/api/json/v1/{}/search.php?s={}",
        MEALDB_API_KEY,
        js_sys::encode_uri_component(dish_name)
    );

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(&url, &opts)?;

    let text = fetch_text(&request).await?;
    let value: Value =
        serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(parse_recipe(&value))
}

/// Extracts the first matching recipe record, or `None` when the `meals`
/// field is null or empty.
fn parse_recipe(value: &Value) -> Option<Recipe> {
    let record = value.get("meals")?.as_array()?.first()?;
    Some(Recipe {
        instructions: record
            .get("strInstructions")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        ingredients: compact_ingredients(record),
        image: record
            .get("strMealThumb")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

/// Folds `strIngredient1..=20` / `strMeasure1..=20` into an ordered list,
/// skipping blank or missing ingredients. A missing measure becomes an
/// empty string rather than dropping the ingredient.
fn compact_ingredients(record: &Value) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();
    for i in 1..=20 {
        let name = record
            .get(format!("strIngredient{}", i))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim();
        if name.is_empty() {
            continue;
        }
        let measure = record
            .get(format!("strMeasure{}", i))
            .and_then(Value::as_str)
            .unwrap_or_default();
        ingredients.push(Ingredient {
            name: name.to_string(),
            measure: measure.to_string(),
        });
    }
    ingredients
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_meals_is_no_match() {
        let value = json!({ "meals": null });
        assert!(parse_recipe(&value).is_none());
    }

    #[test]
    fn empty_meals_is_no_match() {
        let value = json!({ "meals": [] });
        assert!(parse_recipe(&value).is_none());
    }

    #[test]
    fn parses_first_record() {
        let value = json!({
            "meals": [{
                "strMeal": "Margherita Pizza",
                "strInstructions": "Stretch the dough.\nBake hot.",
                "strMealThumb": "https://example.test/pizza.jpg",
                "strIngredient1": "Flour",
                "strMeasure1": "500g",
                "strIngredient2": "Tomato",
                "strMeasure2": "200g"
            }]
        });
        let recipe = parse_recipe(&value).unwrap();
        assert_eq!(recipe.instructions, "Stretch the dough.\nBake hot.");
        assert_eq!(recipe.image.as_deref(), Some("https://example.test/pizza.jpg"));
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].name, "Flour");
        assert_eq!(recipe.ingredients[0].measure, "500g");
    }

    #[test]
    fn compaction_skips_blank_and_null_slots() {
        let record = json!({
            "strIngredient1": "Rice",
            "strMeasure1": "1 cup",
            "strIngredient2": "",
            "strMeasure2": "ignored",
            "strIngredient3": null,
            "strMeasure3": null,
            "strIngredient4": "  ",
            "strIngredient5": "Nori",
            "strMeasure5": null
        });
        let ingredients = compact_ingredients(&record);
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "Rice");
        assert_eq!(ingredients[1].name, "Nori");
        // missing measure compacts to an empty string
        assert_eq!(ingredients[1].measure, "");
    }

    #[test]
    fn compaction_preserves_slot_order() {
        let record = json!({
            "strIngredient2": "Second",
            "strIngredient1": "First",
            "strIngredient20": "Last"
        });
        let names: Vec<_> = compact_ingredients(&record)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Last"]);
    }
}
