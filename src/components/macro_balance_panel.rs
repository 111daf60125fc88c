use crate::model::NutritionData;
use crate::nutrition::macro_balance;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MacroBalancePanelProps {
    pub totals: NutritionData,
}

/// Share of calories per macro (Atwater factors), as three small bars.
#[function_component(MacroBalancePanel)]
pub fn macro_balance_panel(props: &MacroBalancePanelProps) -> Html {
    let balance = macro_balance(&props.totals);
    let rows = [
        ("Protein", balance.protein_pct, "#3fb950"),
        ("Carbs", balance.carbs_pct, "#58a6ff"),
        ("Fats", balance.fats_pct, "#d29922"),
    ];

    html! {
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
            <h3 style="margin:0 0 14px 0;">{"Macronutrient Balance"}</h3>
            <div style="display:flex; flex-direction:column; gap:12px;">
                { for rows.iter().map(|(label, pct, color)| html! {
                    <div>
                        <div style="display:flex; justify-content:space-between; font-size:13px; margin-bottom:4px;">
                            <span>{ *label }</span>
                            <span>{ format!("{:.0}%", pct) }</span>
                        </div>
                        <div style="height:8px; background:#21262d; border-radius:4px; overflow:hidden;">
                            <div style={format!("height:100%; width:{}%; background:{};", pct.min(100.0), color)} />
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
