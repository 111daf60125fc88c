use super::{
    daily_summary::DailySummary, meal_entry::MealEntry, nutrition_goals::NutritionGoals,
    progress_tracker::ProgressTracker,
};
use crate::model::{AppAction, AppState, Meal, NutritionData};
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum View {
    Entry,
    Goals,
    Progress,
    Summary,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Entry);
    let state = use_reducer(AppState::new);

    let add_meal = {
        let state = state.clone();
        Callback::from(move |meal: Meal| state.dispatch(AppAction::AddMeal(meal)))
    };
    let save_goals = {
        let state = state.clone();
        Callback::from(move |goals: NutritionData| state.dispatch(AppAction::SetGoals(goals)))
    };

    let nav_button = |target: View, label: &str| -> Html {
        let active = *view == target;
        let onclick = {
            let view = view.clone();
            Callback::from(move |_| view.set(target))
        };
        let style = if active {
            "flex:1; padding:12px 16px; border-radius:10px; border:none; background:#2d1b55; color:#c9a7ff; font-weight:600; cursor:pointer;"
        } else {
            "flex:1; padding:12px 16px; border-radius:10px; border:none; background:transparent; color:inherit; cursor:pointer;"
        };
        html! { <button type="button" {onclick} style={style}>{ label }</button> }
    };

    let content = match *view {
        View::Entry => html! { <MealEntry on_add_meal={add_meal} /> },
        View::Goals => html! {
            <NutritionGoals goals={state.goals} on_save={save_goals} />
        },
        View::Progress => html! {
            <ProgressTracker goals={state.goals} meals={state.meals.clone()} />
        },
        View::Summary => html! {
            <DailySummary goals={state.goals} meals={state.meals.clone()} />
        },
    };

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#e6edf3; font-family:system-ui, sans-serif;">
            <div style="max-width:960px; margin:0 auto; padding:32px 16px;">
                <header style="text-align:center; margin-bottom:32px;">
                    <h1 style="margin:0 0 6px 0; font-size:34px;">{"NutriCook"}</h1>
                    <p style="margin:0; opacity:0.7;">{"AI-Powered Food Recognition & Nutrition Tracking"}</p>
                </header>

                <nav style="background:#161b22; border:1px solid #30363d; border-radius:14px; padding:8px; margin-bottom:28px; display:flex; gap:8px;">
                    { nav_button(View::Entry, "Snap Meal") }
                    { nav_button(View::Goals, "Goals") }
                    { nav_button(View::Progress, "Progress") }
                    { nav_button(View::Summary, "Summary") }
                </nav>

                <main style="background:#10151c; border:1px solid #30363d; border-radius:18px; padding:28px;">
                    { content }
                </main>

                <footer style="margin-top:32px; text-align:center; opacity:0.6;">
                    <p>{"Powered by AI - Making nutrition tracking effortless 🌟"}</p>
                </footer>
            </div>
        </div>
    }
}
