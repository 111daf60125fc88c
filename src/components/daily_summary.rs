use super::goal_comparison_panel::GoalComparisonPanel;
use super::macro_balance_panel::MacroBalancePanel;
use super::meal_list::MealList;
use crate::messages::MessagePicker;
use crate::model::{Meal, NutritionData};
use crate::nutrition::{achievement_score, totals};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DailySummaryProps {
    pub goals: NutritionData,
    pub meals: Vec<Meal>,
}

#[function_component(DailySummary)]
pub fn daily_summary(props: &DailySummaryProps) -> Html {
    let totals = totals(&props.meals);
    let score = achievement_score(&totals, &props.goals);

    // One seed per mount keeps the message stable across re-renders.
    let seed = use_state(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
    let message = MessagePicker::new(*seed).pick(score);

    html! {
        <div style="max-width:720px; margin:0 auto;">
            <div style="text-align:center; margin-bottom:24px;">
                <h2 style="margin:0 0 6px 0;">{"Daily Summary"}</h2>
                <p style="margin:0; opacity:0.7;">{"Your nutrition journey for today"}</p>
            </div>

            <div style="background:linear-gradient(135deg, #6e40c9, #388bfd); border-radius:16px; padding:28px; text-align:center; color:#fff; margin-bottom:24px;">
                <div style="font-size:52px; font-weight:700;">{ format!("{}%", score) }</div>
                <div style="font-size:18px; opacity:0.9; margin-bottom:10px;">{"Daily Goal Achievement"}</div>
                <div style="font-size:15px;">{ message }</div>
            </div>

            <div style="display:grid; grid-template-columns:1fr 1fr; gap:16px; margin-bottom:24px;">
                <MacroBalancePanel totals={totals} />
                <GoalComparisonPanel totals={totals} goals={props.goals} />
            </div>

            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
                <MealList title="Meal Breakdown" meals={props.meals.clone()} show_time={true} />
            </div>
        </div>
    }
}
