// Data access: one service per table, sharing the statement builders in `crud`

pub mod crud;
pub mod user_service;
pub mod category_service;
pub mod exercise_service;
pub mod record_service;
pub mod repmax_service;
pub mod workout_service;
pub mod workout_exercise_service;

pub use user_service::UserService;
pub use category_service::CategoryService;
pub use exercise_service::ExerciseService;
pub use record_service::RecordService;
pub use repmax_service::RepmaxService;
pub use workout_service::WorkoutService;
pub use workout_exercise_service::WorkoutExerciseService;
