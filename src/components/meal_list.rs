use crate::model::Meal;
use crate::util::format_clock;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MealListProps {
    pub title: AttrValue,
    pub meals: Vec<Meal>,
    /// Show the HH:MM log time under each entry (summary view only).
    #[prop_or(false)]
    pub show_time: bool,
}

#[function_component(MealList)]
pub fn meal_list(props: &MealListProps) -> Html {
    let rows = props.meals.iter().map(|meal| {
        html! {
            <div style="display:flex; justify-content:space-between; align-items:flex-start; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px 14px;">
                <div>
                    <div style="font-weight:600;">{ meal.meal_type.label() }</div>
                    <div style="opacity:0.8;">{ meal.food.name.clone() }</div>
                    if props.show_time {
                        <div style="font-size:12px; opacity:0.6; margin-top:4px;">{ format_clock(meal.logged_at_ms) }</div>
                    }
                </div>
                <div style="text-align:right;">
                    <div style="font-weight:600;">{ format!("{:.0} kcal", meal.food.macros.calories) }</div>
                    <div style="font-size:12px; opacity:0.7;">
                        { format!("P: {:.0}g · C: {:.0}g · F: {:.0}g",
                            meal.food.macros.protein,
                            meal.food.macros.carbs,
                            meal.food.macros.fats) }
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div>
            <h3 style="margin:0 0 12px 0;">{ props.title.clone() }</h3>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { for rows }
                if props.meals.is_empty() {
                    <p style="text-align:center; opacity:0.6; padding:12px 0; margin:0;">{"No meals logged yet today"}</p>
                }
            </div>
        </div>
    }
}
