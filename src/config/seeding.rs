use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::DataError;
use crate::models::*;
use crate::services::*;

/// Inserts a small demo data set through the services.
///
/// Named rows (categories, users) are skipped when the name already exists;
/// the remaining tables are only seeded while `exercises` is empty.
pub struct DatabaseSeeder {
    pool: PgPool,
}

impl DatabaseSeeder {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        let categories = self.seed_categories().await?;
        let users = self.seed_users().await?;
        self.seed_training_data(&categories, &users).await?;

        tracing::info!("Database seeding completed!");
        Ok(())
    }

    async fn seed_categories(&self) -> Result<Vec<Category>> {
        let category_service = CategoryService::new(self.pool.clone());

        for name in ["Strength", "Cardio", "Flexibility", "Endurance"] {
            let request = CreateCategory {
                name: name.to_string(),
            };
            match category_service.create_category(request).await {
                Ok(_) => tracing::info!(name, "Created demo category"),
                Err(DataError::Conflict(_)) => tracing::debug!(name, "Category already present"),
                Err(e) => return Err(e.into()),
            }
        }

        Ok(category_service.list_categories().await?)
    }

    async fn seed_users(&self) -> Result<Vec<User>> {
        let user_service = UserService::new(self.pool.clone());

        let demo_users = vec![
            ("john_doe", "password123", 75, 180),
            ("jane_smith", "securePass456", 68, 165),
            ("mike_tyson", "gymLover789", 95, 178),
        ];

        for (name, password, weight, height) in demo_users {
            let user_data = CreateUser {
                password: password.to_string(),
                name: name.to_string(),
                weight,
                user_record_id: None,
                height: Some(height),
            };
            match user_service.create_user(user_data).await {
                Ok(_) => tracing::info!(name, "Created demo user"),
                Err(DataError::Conflict(_)) => tracing::debug!(name, "User already present"),
                Err(e) => return Err(e.into()),
            }
        }

        Ok(user_service.list_users().await?)
    }

    async fn seed_training_data(&self, categories: &[Category], users: &[User]) -> Result<()> {
        let exercise_service = ExerciseService::new(self.pool.clone());
        if !exercise_service.list_exercises().await?.is_empty() {
            tracing::debug!("Exercises already present, skipping training data");
            return Ok(());
        }

        let category_id = |name: &str| {
            categories
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.category_id)
                .ok_or_else(|| anyhow::anyhow!("Demo category {} missing", name))
        };

        let demo_exercises = [
            ("Bench Press", 80, Some("Chest"), Some("Triceps"), "Strength", true),
            ("Squats", 100, Some("Legs"), Some("Glutes"), "Strength", true),
            ("Deadlift", 120, Some("Back"), Some("Legs"), "Strength", true),
            ("Running", 0, Some("Legs"), None, "Cardio", false),
            ("Yoga Stretch", 0, Some("Full Body"), None, "Flexibility", false),
        ];

        let mut exercise_ids = Vec::new();
        for (name, weight, primary, secondary, category, base) in demo_exercises {
            let id = exercise_service
                .create_exercise(CreateExercise {
                    name: name.to_string(),
                    weight,
                    repmax_id: None,
                    primary_muscle: primary.map(str::to_string),
                    secondary_muscle: secondary.map(str::to_string),
                    category_id: category_id(category)?,
                    base_exercise: base,
                })
                .await?;
            exercise_ids.push(id);
        }
        tracing::info!(count = exercise_ids.len(), "Created demo exercises");

        let workout_service = WorkoutService::new(self.pool.clone());
        let workout_exercise_service = WorkoutExerciseService::new(self.pool.clone());
        let demo_workouts = [
            ("Full Body Workout", 30, false),
            ("Leg Day", 45, false),
            ("Back and Core", 50, true),
        ];

        let mut workout_ids = Vec::new();
        for ((name, timecap, for_kids), exercise_id) in demo_workouts.into_iter().zip(&exercise_ids) {
            let workout_id = workout_service
                .create_workout(CreateWorkout {
                    workout_name: name.to_string(),
                    timecap,
                    record_id: None,
                    exercise_id: Some(*exercise_id),
                    for_kids: Some(for_kids),
                })
                .await?;

            workout_exercise_service
                .create_workout_exercise(CreateWorkoutExercise {
                    workout_id,
                    exercise_id: *exercise_id,
                    sets: 3,
                    reps: 10,
                    rest_time: 90,
                })
                .await?;
            workout_ids.push(workout_id);
        }
        tracing::info!(count = workout_ids.len(), "Created demo workouts");

        let record_service = RecordService::new(self.pool.clone());
        let repmax_service = RepmaxService::new(self.pool.clone());
        let record_times = ["12:30", "18:05", "21:40"];

        for (index, user) in users.iter().take(3).enumerate() {
            let (Some(workout_id), Some(exercise_id)) =
                (workout_ids.get(index), exercise_ids.get(index))
            else {
                break;
            };

            let record_date = NaiveDate::from_ymd_opt(2025, 1, index as u32 + 1)
                .and_then(|d| d.and_hms_opt(10 + index as u32, 0, 0));

            record_service
                .create_record(CreateRecord {
                    workout_id: *workout_id,
                    user_id: user.user_id,
                    record_time: record_times[index].to_string(),
                    record_date,
                })
                .await?;

            let exercise = exercise_service.get_exercise(*exercise_id).await?;
            repmax_service
                .create_repmax(CreateRepmax {
                    exercise_id: *exercise_id,
                    user_id: user.user_id,
                    weight: exercise.weight,
                })
                .await?;
        }
        tracing::info!("Created demo records and repmaxes");

        Ok(())
    }
}
