pub mod body;
pub mod config;
pub mod dashboard;
pub mod exercises;
pub mod goals;
pub mod nutrition;
pub mod records;
pub mod sets;
pub mod workouts;

pub use body::{
    add as add_measurement, delete as delete_measurement, list as list_measurements,
    NewMeasurement,
};
pub use config::{init as config_init, path as config_path, show as config_show};
pub use dashboard::show as show_dashboard;
pub use exercises::{add as add_exercise, delete as delete_exercise, list as list_exercises};
pub use goals::{
    add as add_goal, delete as delete_goal, list as list_goals, set_status as set_goal_status,
    NewGoal,
};
pub use nutrition::{add as add_meal, delete as delete_meal, list as list_meals, NewMeal};
pub use records::{get as get_record, update as update_record};
pub use sets::{add as add_set, delete as delete_set, list as list_sets, NewSet};
pub use workouts::{add as add_workout, delete as delete_workout, list as list_workouts, NewWorkout};
