pub mod app;
pub mod daily_summary;
pub mod goal_comparison_panel;
pub mod macro_balance_panel;
pub mod meal_entry;
pub mod meal_list;
pub mod nutrition_goals;
pub mod progress_tracker;
pub mod recipe_details;
