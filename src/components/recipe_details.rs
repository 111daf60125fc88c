use crate::model::Food;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipeDetailsProps {
    pub food: Food,
}

/// Recipe panel for a recognized food. Renders nothing when the lookup
/// found no match.
#[function_component(RecipeDetails)]
pub fn recipe_details(props: &RecipeDetailsProps) -> Html {
    let Some(recipe) = &props.food.recipe else {
        return html! {};
    };

    html! {
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; display:flex; flex-direction:column; gap:14px;">
            <h3 style="margin:0;">{"Recipe Details"}</h3>
            if let Some(image) = &recipe.image {
                <img src={image.clone()} alt={props.food.name.clone()}
                    style="width:100%; max-height:220px; object-fit:cover; border-radius:8px;" />
            }
            <div>
                <h4 style="margin:0 0 8px 0;">{"Ingredients"}</h4>
                <ul style="display:grid; grid-template-columns:1fr 1fr; gap:4px; margin:0; padding-left:18px;">
                    { for recipe.ingredients.iter().map(|ingredient| html! {
                        <li style="opacity:0.85;">
                            { if ingredient.measure.is_empty() {
                                ingredient.name.clone()
                            } else {
                                format!("{} ({})", ingredient.name, ingredient.measure)
                            } }
                        </li>
                    }) }
                </ul>
            </div>
            <div>
                <h4 style="margin:0 0 8px 0;">{"Instructions"}</h4>
                <div style="display:flex; flex-direction:column; gap:8px; opacity:0.85;">
                    { for recipe.instructions.split('\n')
                        .filter(|step| !step.trim().is_empty())
                        .map(|step| html! { <p style="margin:0;">{ step.to_string() }</p> }) }
                </div>
            </div>
        </div>
    }
}
