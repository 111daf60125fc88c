use crate::model::NutritionData;
use crate::nutrition::percent_of_goal;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GoalComparisonPanelProps {
    pub totals: NutritionData,
    pub goals: NutritionData,
}

#[function_component(GoalComparisonPanel)]
pub fn goal_comparison_panel(props: &GoalComparisonPanelProps) -> Html {
    let t = props.totals;
    let g = props.goals;

    // Calories are a ceiling: staying under is good. Protein is a floor.
    // Carbs and fats read as achieved but only go green while under target.
    let calories_status = if t.calories <= g.calories {
        ("Within target", "#3fb950")
    } else {
        ("", "#f85149")
    };
    let calories_text = if t.calories <= g.calories {
        calories_status.0.to_string()
    } else {
        format!("{:.0}% over", (t.calories / g.calories - 1.0) * 100.0)
    };

    let gram_rows = [
        ("Protein", t.protein, g.protein, t.protein >= g.protein),
        ("Carbs", t.carbs, g.carbs, t.carbs <= g.carbs),
        ("Fats", t.fats, g.fats, t.fats <= g.fats),
    ];

    html! {
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
            <h3 style="margin:0 0 14px 0;">{"Goal Comparison"}</h3>
            <div style="display:flex; flex-direction:column; gap:12px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <div>
                        <span style="opacity:0.7;">{"Calories"}</span>
                        <div style="font-size:18px; font-weight:600;">
                            { format!("{:.0} / {:.0}", t.calories, g.calories) }
                        </div>
                    </div>
                    <div style={format!("font-size:13px; color:{};", calories_status.1)}>
                        { calories_text }
                    </div>
                </div>
                { for gram_rows.iter().map(|(label, total, goal, on_track)| {
                    let color = if *on_track { "#3fb950" } else { "#d29922" };
                    html! {
                        <div style="display:flex; justify-content:space-between; align-items:center;">
                            <div>
                                <span style="opacity:0.7;">{ *label }</span>
                                <div style="font-size:18px; font-weight:600;">
                                    { format!("{:.0}g / {:.0}g", total, goal) }
                                </div>
                            </div>
                            <div style={format!("font-size:13px; color:{};", color)}>
                                { format!("{:.0}% achieved", percent_of_goal(*total, *goal)) }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
