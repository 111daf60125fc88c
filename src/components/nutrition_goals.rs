use crate::model::{GOAL_PRESETS, NutritionData, validate_goals};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NutritionGoalsProps {
    pub goals: NutritionData,
    pub on_save: Callback<NutritionData>,
}

#[function_component(NutritionGoals)]
pub fn nutrition_goals(props: &NutritionGoalsProps) -> Html {
    let form = use_state(|| props.goals);
    let notice = use_state(|| None::<Result<(), String>>);

    // Per-field input handlers; a value that fails to parse becomes NaN so
    // validation catches it at save time.
    let field_input = |apply: fn(&mut NutritionData, f64)| {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value().parse::<f64>().unwrap_or(f64::NAN);
            let mut next = *form;
            apply(&mut next, value);
            form.set(next);
            notice.set(None);
        })
    };
    let on_calories = field_input(|d, v| d.calories = v);
    let on_protein = field_input(|d, v| d.protein = v);
    let on_carbs = field_input(|d, v| d.carbs = v);
    let on_fats = field_input(|d, v| d.fats = v);

    let apply_preset = |preset: NutritionData| {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            form.set(preset);
            notice.set(None);
        })
    };

    let on_submit = {
        let form = form.clone();
        let notice = notice.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_goals(&*form) {
                Ok(()) => {
                    on_save.emit(*form);
                    notice.set(Some(Ok(())));
                }
                Err(err) => notice.set(Some(Err(err.to_string()))),
            }
        })
    };

    let fields = [
        ("Daily Calories", form.calories, on_calories),
        ("Protein (g)", form.protein, on_protein),
        ("Carbs (g)", form.carbs, on_carbs),
        ("Fats (g)", form.fats, on_fats),
    ];

    html! {
        <div style="max-width:640px; margin:0 auto;">
            <div style="text-align:center; margin-bottom:24px;">
                <h2 style="margin:0 0 6px 0;">{"Set Your Daily Goals"}</h2>
                <p style="margin:0; opacity:0.7;">{"Choose a preset or customize your own nutrition targets"}</p>
            </div>

            <div style="display:grid; grid-template-columns:repeat(3, 1fr); gap:12px; margin-bottom:24px;">
                { for GOAL_PRESETS.iter().map(|(label, preset)| html! {
                    <button type="button" onclick={apply_preset(*preset)}
                        style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:14px; color:inherit; cursor:pointer; text-align:left;">
                        <div style="font-weight:600; margin-bottom:8px;">{ *label }</div>
                        <ul style="margin:0; padding-left:16px; font-size:13px; opacity:0.75;">
                            <li>{ format!("Calories: {:.0}", preset.calories) }</li>
                            <li>{ format!("Protein: {:.0}g", preset.protein) }</li>
                            <li>{ format!("Carbs: {:.0}g", preset.carbs) }</li>
                            <li>{ format!("Fats: {:.0}g", preset.fats) }</li>
                        </ul>
                    </button>
                }) }
            </div>

            <form onsubmit={on_submit} style="display:flex; flex-direction:column; gap:16px;">
                <div style="display:grid; grid-template-columns:1fr 1fr; gap:16px;">
                    { for fields.into_iter().map(|(label, value, oninput)| html! {
                        <label style="display:flex; flex-direction:column; gap:6px; font-size:14px;">
                            <span>{ label }</span>
                            <input type="number" min="1" step="any"
                                value={format!("{}", value)}
                                oninput={oninput}
                                style="background:#0d1117; border:1px solid #30363d; border-radius:8px; padding:8px 12px; color:inherit;" />
                        </label>
                    }) }
                </div>

                { match &*notice {
                    Some(Ok(())) => html! {
                        <div style="color:#3fb950; font-size:14px;">{"Goals saved."}</div>
                    },
                    Some(Err(msg)) => html! {
                        <div style="color:#f85149; font-size:14px;">{ msg.clone() }</div>
                    },
                    None => html! {},
                } }

                <button type="submit"
                    style="background:#6e40c9; border:none; border-radius:10px; padding:12px; color:#fff; font-weight:600; cursor:pointer;">
                    {"Save Goals"}
                </button>
            </form>
        </div>
    }
}
