// Data access behaviour against a real PostgreSQL (TEST_DATABASE_URL)

mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;

use fitness_tracker::error::{DataError, InputError};
use fitness_tracker::models::*;
use fitness_tracker::services::*;

use common::TestDatabase;

fn user_request(name: &str) -> CreateUser {
    CreateUser {
        password: "password123".to_string(),
        name: name.to_string(),
        weight: 75,
        user_record_id: None,
        height: Some(180),
    }
}

fn user_patch(body: serde_json::Value) -> Result<Patch<UserField>, InputError> {
    Patch::from_json(body.as_object().cloned().unwrap_or_default())
}

async fn seed_category(db: &TestDatabase, name: &str) -> i32 {
    CategoryService::new(db.pool.clone())
        .create_category(CreateCategory {
            name: name.to_string(),
        })
        .await
        .unwrap()
}

fn exercise_request(name: &str, category_id: i32) -> CreateExercise {
    CreateExercise {
        name: name.to_string(),
        weight: 80,
        repmax_id: None,
        primary_muscle: Some("Chest".to_string()),
        secondary_muscle: Some("Triceps".to_string()),
        category_id,
        base_exercise: true,
    }
}

async fn seed_workout(db: &TestDatabase, name: &str) -> i32 {
    WorkoutService::new(db.pool.clone())
        .create_workout(CreateWorkout {
            workout_name: name.to_string(),
            timecap: 30,
            record_id: None,
            exercise_id: None,
            for_kids: Some(false),
        })
        .await
        .unwrap()
}

#[tokio::test]
#[serial]
async fn test_created_user_reads_back_field_for_field() {
    let Some(db) = TestDatabase::connect().await else { return };
    let users = UserService::new(db.pool.clone());

    let request = user_request("john_doe");
    let user_id = users.create_user(request.clone()).await.unwrap();
    let user = users.get_user(user_id).await.unwrap();

    assert_eq!(
        user,
        User {
            user_id,
            password: request.password,
            name: request.name,
            weight: request.weight,
            user_record_id: request.user_record_id,
            height: request.height,
        }
    );
}

#[tokio::test]
#[serial]
async fn test_created_exercise_reads_back_field_for_field() {
    let Some(db) = TestDatabase::connect().await else { return };
    let category_id = seed_category(&db, "Strength").await;
    let exercises = ExerciseService::new(db.pool.clone());

    let request = exercise_request("Bench Press", category_id);
    let exercise_id = exercises.create_exercise(request.clone()).await.unwrap();

    assert_eq!(
        exercises.get_exercise(exercise_id).await.unwrap(),
        Exercise {
            exercise_id,
            name: request.name,
            weight: request.weight,
            repmax_id: None,
            primary_muscle: request.primary_muscle,
            secondary_muscle: request.secondary_muscle,
            category_id,
            base_exercise: true,
        }
    );
}

#[tokio::test]
#[serial]
async fn test_created_category_reads_back_field_for_field() {
    let Some(db) = TestDatabase::connect().await else { return };
    let categories = CategoryService::new(db.pool.clone());

    let category_id = seed_category(&db, "Endurance").await;

    assert_eq!(
        categories.get_category(category_id).await.unwrap(),
        Category {
            category_id,
            name: "Endurance".to_string(),
        }
    );
}

#[tokio::test]
#[serial]
async fn test_created_workout_reads_back_field_for_field() {
    let Some(db) = TestDatabase::connect().await else { return };
    let category_id = seed_category(&db, "Strength").await;
    let exercise_id = ExerciseService::new(db.pool.clone())
        .create_exercise(exercise_request("Deadlift", category_id))
        .await
        .unwrap();
    let workouts = WorkoutService::new(db.pool.clone());

    let request = CreateWorkout {
        workout_name: "Back and Core".to_string(),
        timecap: 50,
        record_id: Some(7),
        exercise_id: Some(exercise_id),
        for_kids: None,
    };
    let workout_id = workouts.create_workout(request.clone()).await.unwrap();

    assert_eq!(
        workouts.get_workout(workout_id).await.unwrap(),
        Workout {
            workout_id,
            workout_name: request.workout_name,
            timecap: request.timecap,
            record_id: Some(7),
            exercise_id: Some(exercise_id),
            for_kids: None,
        }
    );
}

#[tokio::test]
#[serial]
async fn test_created_record_reads_back_field_for_field() {
    let Some(db) = TestDatabase::connect().await else { return };
    let user_id = UserService::new(db.pool.clone())
        .create_user(user_request("john_doe"))
        .await
        .unwrap();
    let workout_id = seed_workout(&db, "Full Body Workout").await;
    let records = RecordService::new(db.pool.clone());

    let record_date = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap();
    let record_id = records
        .create_record(CreateRecord {
            workout_id,
            user_id,
            record_time: "12:30".to_string(),
            record_date: Some(record_date),
        })
        .await
        .unwrap();

    assert_eq!(
        records.get_record(record_id).await.unwrap(),
        Record {
            record_id,
            workout_id,
            user_id,
            record_date,
            record_time: "12:30".to_string(),
        }
    );
}

#[tokio::test]
#[serial]
async fn test_created_repmax_reads_back_field_for_field() {
    let Some(db) = TestDatabase::connect().await else { return };
    let user_id = UserService::new(db.pool.clone())
        .create_user(user_request("mike_tyson"))
        .await
        .unwrap();
    let category_id = seed_category(&db, "Strength").await;
    let exercise_id = ExerciseService::new(db.pool.clone())
        .create_exercise(exercise_request("Squats", category_id))
        .await
        .unwrap();
    let repmaxes = RepmaxService::new(db.pool.clone());

    let repmax_id = repmaxes
        .create_repmax(CreateRepmax {
            exercise_id,
            user_id,
            weight: 140,
        })
        .await
        .unwrap();

    assert_eq!(
        repmaxes.get_repmax(repmax_id).await.unwrap(),
        Repmax {
            repmax_id,
            exercise_id,
            user_id,
            weight: 140,
        }
    );
}

#[tokio::test]
#[serial]
async fn test_created_workout_exercise_reads_back_field_for_field() {
    let Some(db) = TestDatabase::connect().await else { return };
    let category_id = seed_category(&db, "Cardio").await;
    let exercise_id = ExerciseService::new(db.pool.clone())
        .create_exercise(exercise_request("Running", category_id))
        .await
        .unwrap();
    let workout_id = seed_workout(&db, "Morning Run").await;
    let links = WorkoutExerciseService::new(db.pool.clone());

    let link_id = links
        .create_workout_exercise(CreateWorkoutExercise {
            workout_id,
            exercise_id,
            sets: 4,
            reps: 12,
            rest_time: 0,
        })
        .await
        .unwrap();

    assert_eq!(
        links.get_workout_exercise(link_id).await.unwrap(),
        WorkoutExercise {
            workout_exercise_id: link_id,
            workout_id,
            exercise_id,
            sets: 4,
            reps: 12,
            rest_time: 0,
        }
    );
}

#[tokio::test]
#[serial]
async fn test_delete_twice_is_not_found() {
    let Some(db) = TestDatabase::connect().await else { return };
    let categories = CategoryService::new(db.pool.clone());

    let category_id = seed_category(&db, "Cardio").await;

    assert_eq!(categories.delete_category(category_id).await.unwrap(), category_id);
    assert_matches!(
        categories.delete_category(category_id).await,
        Err(DataError::NotFound { entity: "Category", id }) if id == category_id
    );
    assert_matches!(
        categories.get_category(category_id).await,
        Err(DataError::NotFound { .. })
    );
}

#[tokio::test]
#[serial]
async fn test_rejected_patch_leaves_row_unchanged() {
    let Some(db) = TestDatabase::connect().await else { return };
    let users = UserService::new(db.pool.clone());
    let user_id = users.create_user(user_request("jane_smith")).await.unwrap();
    let before = users.get_user(user_id).await.unwrap();

    assert_eq!(
        user_patch(json!({ "weight": 70, "email": "jane@example.com" })).unwrap_err(),
        InputError::InvalidColumn("email".to_string())
    );
    assert_eq!(
        user_patch(json!({ "weight": 70, "name": "" })).unwrap_err(),
        InputError::NoValueProvided("name".to_string())
    );

    assert_eq!(users.get_user(user_id).await.unwrap(), before);
}

#[tokio::test]
#[serial]
async fn test_update_missing_row_is_not_found() {
    let Some(db) = TestDatabase::connect().await else { return };
    let users = UserService::new(db.pool.clone());

    let result = users
        .update_user(4242, user_patch(json!({ "weight": 90 })).unwrap())
        .await;

    assert_matches!(result, Err(DataError::NotFound { entity: "User", id: 4242 }));
}

#[tokio::test]
#[serial]
async fn test_multi_column_update_applies_together() {
    let Some(db) = TestDatabase::connect().await else { return };
    let users = UserService::new(db.pool.clone());
    let user_id = users.create_user(user_request("mike_tyson")).await.unwrap();

    let patch = user_patch(json!({ "weight": 95, "height": 178, "user_record_id": 3 })).unwrap();
    assert_eq!(users.update_user(user_id, patch).await.unwrap(), user_id);

    let user = users.get_user(user_id).await.unwrap();
    assert_eq!(user.weight, 95);
    assert_eq!(user.height, Some(178));
    assert_eq!(user.user_record_id, Some(3));
    assert_eq!(user.name, "mike_tyson");
}

#[tokio::test]
#[serial]
async fn test_multi_column_update_is_atomic() {
    let Some(db) = TestDatabase::connect().await else { return };
    let users = UserService::new(db.pool.clone());
    users.create_user(user_request("taken")).await.unwrap();
    let user_id = users.create_user(user_request("other")).await.unwrap();

    let patch = user_patch(json!({ "name": "taken", "weight": 120 })).unwrap();
    assert_matches!(users.update_user(user_id, patch).await, Err(DataError::Conflict(_)));

    let user = users.get_user(user_id).await.unwrap();
    assert_eq!(user.name, "other");
    assert_eq!(user.weight, 75);
}

#[tokio::test]
#[serial]
async fn test_exercise_with_unknown_category_is_invalid_reference() {
    let Some(db) = TestDatabase::connect().await else { return };
    let exercises = ExerciseService::new(db.pool.clone());
    let before = exercises.list_exercises().await.unwrap().len();

    let result = exercises.create_exercise(exercise_request("Ghost Lift", 999)).await;

    assert_matches!(result, Err(DataError::InvalidReference(_)));
    assert_eq!(exercises.list_exercises().await.unwrap().len(), before);
}

#[tokio::test]
#[serial]
async fn test_duplicate_user_name_is_conflict() {
    let Some(db) = TestDatabase::connect().await else { return };
    let users = UserService::new(db.pool.clone());

    users.create_user(user_request("dup")).await.unwrap();
    let second = users.create_user(user_request("dup")).await;

    assert_matches!(second, Err(DataError::Conflict(_)));
    let named_dup = users
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .filter(|u| u.name == "dup")
        .count();
    assert_eq!(named_dup, 1);
}

#[tokio::test]
#[serial]
async fn test_deleting_category_cascades_to_exercises() {
    let Some(db) = TestDatabase::connect().await else { return };
    let categories = CategoryService::new(db.pool.clone());
    let exercises = ExerciseService::new(db.pool.clone());

    let category_id = seed_category(&db, "Flexibility").await;
    let exercise_id = exercises
        .create_exercise(exercise_request("Yoga Stretch", category_id))
        .await
        .unwrap();

    categories.delete_category(category_id).await.unwrap();

    assert_matches!(
        exercises.get_exercise(exercise_id).await,
        Err(DataError::NotFound { entity: "Exercise", .. })
    );
}

#[tokio::test]
#[serial]
async fn test_deleting_user_cascades_to_records_and_repmaxes() {
    let Some(db) = TestDatabase::connect().await else { return };
    let users = UserService::new(db.pool.clone());
    let records = RecordService::new(db.pool.clone());
    let repmaxes = RepmaxService::new(db.pool.clone());

    let user_id = users.create_user(user_request("john_doe")).await.unwrap();
    let category_id = seed_category(&db, "Strength").await;
    let exercise_id = ExerciseService::new(db.pool.clone())
        .create_exercise(exercise_request("Deadlift", category_id))
        .await
        .unwrap();
    let workout_id = seed_workout(&db, "Back and Core").await;

    records
        .create_record(CreateRecord {
            workout_id,
            user_id,
            record_time: "12:30".to_string(),
            record_date: None,
        })
        .await
        .unwrap();
    repmaxes
        .create_repmax(CreateRepmax {
            exercise_id,
            user_id,
            weight: 120,
        })
        .await
        .unwrap();

    users.delete_user(user_id).await.unwrap();

    assert_eq!(db.count("records").await, 0);
    assert_eq!(db.count("repmax").await, 0);
}

#[tokio::test]
#[serial]
async fn test_concurrent_updates_to_different_columns_both_land() {
    let Some(db) = TestDatabase::connect().await else { return };
    let users = UserService::new(db.pool.clone());
    let user_id = users.create_user(user_request("racer")).await.unwrap();

    let weight_users = users.clone();
    let height_users = users.clone();
    let weight = tokio::spawn(async move {
        weight_users
            .update_user(user_id, Patch::from_fields(vec![UserField::Weight(82)]).unwrap())
            .await
    });
    let height = tokio::spawn(async move {
        height_users
            .update_user(user_id, Patch::from_fields(vec![UserField::Height(185)]).unwrap())
            .await
    });

    assert_eq!(weight.await.unwrap().unwrap(), user_id);
    assert_eq!(height.await.unwrap().unwrap(), user_id);

    let user = users.get_user(user_id).await.unwrap();
    assert_eq!(user.weight, 82);
    assert_eq!(user.height, Some(185));
}

#[tokio::test]
#[serial]
async fn test_workout_exercise_lifecycle() {
    let Some(db) = TestDatabase::connect().await else { return };
    let links = WorkoutExerciseService::new(db.pool.clone());
    let category_id = seed_category(&db, "Strength").await;
    let exercise_id = ExerciseService::new(db.pool.clone())
        .create_exercise(exercise_request("Squats", category_id))
        .await
        .unwrap();
    let workout_id = seed_workout(&db, "Leg Day").await;

    let bad_workout = links
        .create_workout_exercise(CreateWorkoutExercise {
            workout_id: 777,
            exercise_id,
            sets: 3,
            reps: 10,
            rest_time: 90,
        })
        .await;
    assert_matches!(bad_workout, Err(DataError::InvalidReference(_)));
    assert_eq!(db.count("workout_exercises").await, 0);

    let link_id = links
        .create_workout_exercise(CreateWorkoutExercise {
            workout_id,
            exercise_id,
            sets: 3,
            reps: 10,
            rest_time: 90,
        })
        .await
        .unwrap();

    let patch = Patch::from_fields(vec![
        WorkoutExerciseField::Sets(5),
        WorkoutExerciseField::Reps(5),
    ])
    .unwrap();
    links.update_workout_exercise(link_id, patch).await.unwrap();

    let rows = links.list_for_workout(workout_id).await.unwrap();
    assert_eq!(
        rows,
        vec![WorkoutExercise {
            workout_exercise_id: link_id,
            workout_id,
            exercise_id,
            sets: 5,
            reps: 5,
            rest_time: 90,
        }]
    );

    WorkoutService::new(db.pool.clone())
        .delete_workout(workout_id)
        .await
        .unwrap();
    assert_matches!(
        links.get_workout_exercise(link_id).await,
        Err(DataError::NotFound { .. })
    );
}

#[tokio::test]
#[serial]
async fn test_new_record_time_moves_record_date() {
    let Some(db) = TestDatabase::connect().await else { return };
    let records = RecordService::new(db.pool.clone());
    let user_id = UserService::new(db.pool.clone())
        .create_user(user_request("jane_smith"))
        .await
        .unwrap();
    let workout_id = seed_workout(&db, "Full Body Workout").await;

    let old_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap();
    let record_id = records
        .create_record(CreateRecord {
            workout_id,
            user_id,
            record_time: "20:00".to_string(),
            record_date: Some(old_date),
        })
        .await
        .unwrap();

    let patch = Patch::from_fields(vec![RecordField::RecordTime("18:45".to_string())]).unwrap();
    records.update_record(record_id, patch).await.unwrap();

    let record = records.get_record(record_id).await.unwrap();
    assert_eq!(record.record_time, "18:45");
    assert!(record.record_date > old_date);

    let for_user = records.list_records_for_user(user_id).await.unwrap();
    assert_eq!(for_user, vec![record]);
}
