use super::meal_list::MealList;
use crate::model::{Meal, NutritionData};
use crate::nutrition::{percent_of_goal, totals};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressTrackerProps {
    pub goals: NutritionData,
    pub meals: Vec<Meal>,
}

fn bar_color(pct: f64) -> &'static str {
    if pct < 25.0 {
        "#f85149"
    } else if pct < 50.0 {
        "#db6d28"
    } else if pct < 75.0 {
        "#d29922"
    } else if pct <= 100.0 {
        "#3fb950"
    } else {
        "#f85149"
    }
}

fn status_line(pct: f64) -> String {
    if pct > 100.0 {
        "Exceeded goal!".to_string()
    } else if pct >= 100.0 {
        "Goal achieved!".to_string()
    } else {
        format!("{:.1}% of daily goal", pct)
    }
}

#[function_component(ProgressTracker)]
pub fn progress_tracker(props: &ProgressTrackerProps) -> Html {
    let totals = totals(&props.meals);
    let nutrients = [
        ("Calories", totals.calories, props.goals.calories, " kcal"),
        ("Protein", totals.protein, props.goals.protein, "g"),
        ("Carbs", totals.carbs, props.goals.carbs, "g"),
        ("Fats", totals.fats, props.goals.fats, "g"),
    ];

    html! {
        <div style="max-width:640px; margin:0 auto;">
            <div style="text-align:center; margin-bottom:24px;">
                <h2 style="margin:0 0 6px 0;">{"Daily Progress"}</h2>
                <p style="margin:0; opacity:0.7;">{"Track your nutrition goals in real-time"}</p>
            </div>

            <div style="display:flex; flex-direction:column; gap:16px;">
                { for nutrients.iter().map(|(label, current, goal, unit)| {
                    // Percentage text is raw; only the bar width clamps.
                    let pct = percent_of_goal(*current, *goal);
                    html! {
                        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
                            <div style="display:flex; justify-content:space-between; margin-bottom:6px;">
                                <span style="font-weight:600;">{ *label }</span>
                                <span style="opacity:0.7;">{ format!("{:.1} / {:.0}{}", current, goal, unit) }</span>
                            </div>
                            <div style="height:12px; background:#21262d; border-radius:6px; overflow:hidden;">
                                <div style={format!("height:100%; width:{}%; background:{};", pct.min(100.0), bar_color(pct))} />
                            </div>
                            <div style="margin-top:6px; font-size:13px; opacity:0.7;">
                                { status_line(pct) }
                            </div>
                        </div>
                    }
                }) }
            </div>

            <div style="margin-top:28px;">
                <MealList title="Today's Meals" meals={props.meals.clone()} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_color_thresholds() {
        assert_eq!(bar_color(10.0), "#f85149");
        assert_eq!(bar_color(30.0), "#db6d28");
        assert_eq!(bar_color(60.0), "#d29922");
        assert_eq!(bar_color(100.0), "#3fb950");
        assert_eq!(bar_color(130.0), "#f85149");
    }

    #[test]
    fn status_line_variants() {
        assert_eq!(status_line(150.0), "Exceeded goal!");
        assert_eq!(status_line(100.0), "Goal achieved!");
        assert_eq!(status_line(25.0), "25.0% of daily goal");
    }
}
