//! Nutrition aggregation and scoring. Everything here is a pure function of
//! (meals, goals) and is recomputed on every render; with a handful of meals
//! per day there is nothing worth caching.

use crate::model::{Meal, NutritionData};

/// Element-wise sum of the macro fields of every logged meal. Summation is
/// commutative and associative with no intermediate rounding, so list order
/// does not matter.
pub fn totals(meals: &[Meal]) -> NutritionData {
    meals.iter().fold(NutritionData::default(), |acc, meal| {
        NutritionData {
            calories: acc.calories + meal.food.macros.calories,
            protein: acc.protein + meal.food.macros.protein,
            carbs: acc.carbs + meal.food.macros.carbs,
            fats: acc.fats + meal.food.macros.fats,
        }
    })
}

/// Raw, unclamped percentage of goal for one nutrient. A nonpositive goal
/// yields 0 rather than a division by zero; goals are validated at save
/// time, so this only covers the default-free path.
pub fn percent_of_goal(total: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    total / goal * 100.0
}

fn capped_ratio(total: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (total / goal).min(1.0)
}

/// Composite achievement score: mean over the four nutrients of
/// min(total/goal, 1), scaled to 0..=100 and rounded to nearest integer.
pub fn achievement_score(totals: &NutritionData, goals: &NutritionData) -> u32 {
    let ratios = [
        capped_ratio(totals.calories, goals.calories),
        capped_ratio(totals.protein, goals.protein),
        capped_ratio(totals.carbs, goals.carbs),
        capped_ratio(totals.fats, goals.fats),
    ];
    let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
    (mean * 100.0).round() as u32
}

/// Share of total calories contributed by each macro, via the Atwater
/// factors (protein 4, carbs 4, fat 9 kcal/g). Display-only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MacroBalance {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fats_pct: f64,
}

pub fn macro_balance(totals: &NutritionData) -> MacroBalance {
    if totals.calories <= 0.0 {
        return MacroBalance::default();
    }
    MacroBalance {
        protein_pct: totals.protein * 4.0 / totals.calories * 100.0,
        carbs_pct: totals.carbs * 4.0 / totals.calories * 100.0,
        fats_pct: totals.fats * 9.0 / totals.calories * 100.0,
    }
}

/// Fallback estimate for dishes the table does not know.
pub const DEFAULT_ESTIMATE: NutritionData = NutritionData::new(250.0, 10.0, 30.0, 8.0);

/// Macro estimates per serving for a small set of common dishes. A lookup
/// table, not a model; everything else gets [`DEFAULT_ESTIMATE`].
const NUTRITION_ESTIMATES: [(&str, NutritionData); 5] = [
    ("pizza", NutritionData::new(266.0, 11.0, 33.0, 10.0)),
    ("salad", NutritionData::new(100.0, 3.0, 11.0, 7.0)),
    ("burger", NutritionData::new(354.0, 20.0, 29.0, 17.0)),
    ("pasta", NutritionData::new(288.0, 12.0, 57.0, 2.0)),
    ("sushi", NutritionData::new(228.0, 9.0, 38.0, 4.0)),
];

/// Looks up the macro estimate for a recognized dish label
/// (case-insensitive), falling back to the fixed default.
pub fn estimate_for(label: &str) -> NutritionData {
    let key = label.to_lowercase();
    NUTRITION_ESTIMATES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, data)| *data)
        .unwrap_or(DEFAULT_ESTIMATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Food, MealType};

    fn meal(macros: NutritionData) -> Meal {
        Meal {
            meal_type: MealType::Lunch,
            food: Food {
                name: "test".to_string(),
                macros,
                recipe: None,
            },
            logged_at_ms: 0.0,
        }
    }

    fn goals() -> NutritionData {
        NutritionData::new(2000.0, 150.0, 250.0, 70.0)
    }

    #[test]
    fn totals_sum_elementwise() {
        let meals = vec![
            meal(NutritionData::new(266.0, 11.0, 33.0, 10.0)),
            meal(NutritionData::new(100.0, 3.0, 11.0, 7.0)),
            meal(NutritionData::new(354.0, 20.0, 29.0, 17.0)),
        ];
        let t = totals(&meals);
        assert_eq!(t, NutritionData::new(720.0, 34.0, 73.0, 34.0));
    }

    #[test]
    fn totals_order_independent() {
        let a = meal(NutritionData::new(266.0, 11.0, 33.0, 10.0));
        let b = meal(NutritionData::new(100.0, 3.0, 11.0, 7.0));
        let c = meal(NutritionData::new(228.0, 9.0, 38.0, 4.0));
        let fwd = totals(&[a.clone(), b.clone(), c.clone()]);
        let rev = totals(&[c, b, a]);
        assert_eq!(fwd, rev);
    }

    #[test]
    fn empty_log_is_all_zero() {
        let t = totals(&[]);
        assert_eq!(t, NutritionData::default());
        assert_eq!(achievement_score(&t, &goals()), 0);
    }

    #[test]
    fn worked_example_scores_24() {
        // goals {2000,150,250,70}, one meal {500,40,60,15}:
        // ratios {0.25, 0.2667, 0.24, 0.2143}, mean*100 rounds to 24.
        let t = totals(&[meal(NutritionData::new(500.0, 40.0, 60.0, 15.0))]);
        assert_eq!(t, NutritionData::new(500.0, 40.0, 60.0, 15.0));
        assert_eq!(achievement_score(&t, &goals()), 24);
    }

    #[test]
    fn score_clamps_at_100() {
        let t = NutritionData::new(9000.0, 900.0, 900.0, 900.0);
        assert_eq!(achievement_score(&t, &goals()), 100);
    }

    #[test]
    fn score_monotone_toward_goal() {
        let g = goals();
        let mut last = 0;
        for k in 0..=10 {
            let f = k as f64 / 10.0;
            let t = NutritionData::new(
                g.calories * f,
                g.protein * f,
                g.carbs * f,
                g.fats * f,
            );
            let score = achievement_score(&t, &g);
            assert!(score >= last, "score dropped at k={}", k);
            last = score;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn zero_goal_field_scores_as_zero_ratio() {
        // Validated goals can never be zero; the aggregator still must not
        // produce NaN if handed one.
        let g = NutritionData::new(2000.0, 0.0, 250.0, 70.0);
        let t = NutritionData::new(2000.0, 50.0, 250.0, 70.0);
        assert_eq!(achievement_score(&t, &g), 75);
        assert_eq!(percent_of_goal(50.0, 0.0), 0.0);
    }

    #[test]
    fn percent_of_goal_unclamped() {
        assert_eq!(percent_of_goal(500.0, 2000.0), 25.0);
        assert_eq!(percent_of_goal(3000.0, 2000.0), 150.0);
    }

    #[test]
    fn macro_balance_example() {
        // 40g protein on 500 kcal -> 32%.
        let t = NutritionData::new(500.0, 40.0, 60.0, 15.0);
        let b = macro_balance(&t);
        assert_eq!(b.protein_pct.round(), 32.0);
        assert_eq!(b.carbs_pct.round(), 48.0);
        assert_eq!(b.fats_pct.round(), 27.0);
    }

    #[test]
    fn macro_balance_guards_zero_calories() {
        let b = macro_balance(&NutritionData::new(0.0, 40.0, 60.0, 15.0));
        assert_eq!(b, MacroBalance::default());
    }

    #[test]
    fn estimate_lookup_known_and_unknown() {
        assert_eq!(estimate_for("pizza"), NutritionData::new(266.0, 11.0, 33.0, 10.0));
        assert_eq!(estimate_for("Sushi"), NutritionData::new(228.0, 9.0, 38.0, 4.0));
        assert_eq!(estimate_for("dragon fruit smoothie"), DEFAULT_ESTIMATE);
    }
}
