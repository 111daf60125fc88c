//! Core data model for NutriCook: nutrition profiles, recognized foods,
//! the session meal log and the app-state reducer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Four macro-nutrient fields. Used both as a daily goal profile and as the
/// macro content of a single food. Calories in kcal, the rest in grams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutritionData {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self { calories, protein, carbs, fats }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Snack,
        MealType::Dinner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Snack => "Snack",
            MealType::Dinner => "Dinner",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-text measure from the recipe source; may be empty.
    pub measure: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
    pub image: Option<String>,
}

/// Immutable snapshot of one recognized dish. Each logged meal owns its own
/// copy; nothing points back into a shared catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub macros: NutritionData,
    pub recipe: Option<Recipe>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: MealType,
    pub food: Food,
    /// Epoch milliseconds at confirmation time (js Date::now).
    pub logged_at_ms: f64,
}

/// Goal presets from the product: label + target profile.
pub const GOAL_PRESETS: [(&str, NutritionData); 3] = [
    ("Weight Loss", NutritionData::new(1800.0, 140.0, 180.0, 60.0)),
    ("Maintenance", NutritionData::new(2200.0, 150.0, 250.0, 70.0)),
    ("Muscle Gain", NutritionData::new(2800.0, 180.0, 350.0, 80.0)),
];

pub fn default_goals() -> NutritionData {
    NutritionData::new(2000.0, 150.0, 250.0, 70.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalError {
    /// A goal field is zero, negative or not a finite number. Zero goals
    /// would poison the ratio math, so they are rejected at save time.
    NonPositiveField(&'static str),
}

impl std::fmt::Display for GoalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalError::NonPositiveField(name) => {
                write!(f, "{} must be a positive number", name)
            }
        }
    }
}

/// Validates a profile for use as daily goals. Every field must be a finite
/// positive number.
pub fn validate_goals(goals: &NutritionData) -> Result<(), GoalError> {
    let fields = [
        ("Calories", goals.calories),
        ("Protein", goals.protein),
        ("Carbs", goals.carbs),
        ("Fats", goals.fats),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            return Err(GoalError::NonPositiveField(name));
        }
    }
    Ok(())
}

// ---------------- Reducer & Actions -----------------

/// Session-scoped application state. The meal log is append-only and lives
/// only for the lifetime of the page; goals are replaced wholesale on save.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub goals: NutritionData,
    pub meals: Vec<Meal>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            goals: default_goals(),
            meals: Vec::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub enum AppAction {
    AddMeal(Meal),
    SetGoals(NutritionData),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            AppAction::AddMeal(meal) => {
                new.meals.push(meal);
            }
            AppAction::SetGoals(goals) => {
                // Invalid goals never reach the state; the goals view
                // validates before dispatch, this is the backstop.
                if validate_goals(&goals).is_ok() {
                    new.goals = goals;
                } else {
                    return self;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, calories: f64) -> Food {
        Food {
            name: name.to_string(),
            macros: NutritionData::new(calories, 10.0, 20.0, 5.0),
            recipe: None,
        }
    }

    fn meal(name: &str, calories: f64) -> Meal {
        Meal {
            meal_type: MealType::Lunch,
            food: food(name, calories),
            logged_at_ms: 0.0,
        }
    }

    #[test]
    fn add_meal_appends_in_order() {
        let state = Rc::new(AppState::new());
        let state = state.reduce(AppAction::AddMeal(meal("pizza", 266.0)));
        let state = state.reduce(AppAction::AddMeal(meal("salad", 100.0)));
        assert_eq!(state.meals.len(), 2);
        assert_eq!(state.meals[0].food.name, "pizza");
        assert_eq!(state.meals[1].food.name, "salad");
    }

    #[test]
    fn set_goals_replaces_wholesale() {
        let state = Rc::new(AppState::new());
        let next = NutritionData::new(1800.0, 140.0, 180.0, 60.0);
        let state = state.reduce(AppAction::SetGoals(next));
        assert_eq!(state.goals, next);
    }

    #[test]
    fn set_goals_rejects_zero_field() {
        let state = Rc::new(AppState::new());
        let before = state.goals;
        let state = state.reduce(AppAction::SetGoals(NutritionData::new(
            2000.0, 0.0, 250.0, 70.0,
        )));
        assert_eq!(state.goals, before);
    }

    #[test]
    fn goals_independent_of_meals() {
        let state = Rc::new(AppState::new());
        let goals = state.goals;
        let state = state.reduce(AppAction::AddMeal(meal("burger", 354.0)));
        assert_eq!(state.goals, goals);
    }

    #[test]
    fn validate_goals_covers_each_field() {
        assert!(validate_goals(&default_goals()).is_ok());
        let bad = [
            NutritionData::new(0.0, 150.0, 250.0, 70.0),
            NutritionData::new(2000.0, -1.0, 250.0, 70.0),
            NutritionData::new(2000.0, 150.0, 0.0, 70.0),
            NutritionData::new(2000.0, 150.0, 250.0, f64::NAN),
        ];
        for goals in bad {
            assert!(validate_goals(&goals).is_err());
        }
    }
}
