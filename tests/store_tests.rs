// tests/store_tests.rs

use chrono::{Duration, TimeZone, Utc};
use quiz_backend::{
    db,
    error::AppError,
    models::{
        question::CreateQuestionRequest,
        score::NewScore,
        user::{CreateUserRequest, Role, User},
    },
    seed,
    store::{questions, scores, users},
    utils::credentials::PlainTextVerifier,
};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// Fresh in-memory database with the schema applied.
/// A single connection that never expires keeps the memory database alive.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    db::migrate(&pool).await.expect("Failed to migrate database");
    pool
}

fn new_user(username: &str, password: &str, role: Role) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: password.to_string(),
        full_name: Some(format!("{} full", username)),
        email: Some(format!("{}@example.com", username)),
        role,
    }
}

fn new_question(text: &str) -> CreateQuestionRequest {
    CreateQuestionRequest {
        question: text.to_string(),
        option_a: "A".to_string(),
        option_b: "B".to_string(),
        option_c: "C".to_string(),
        option_d: "D".to_string(),
        correct_answer: "B".to_string(),
    }
}

fn attempt(score: i64, total: i64, at: chrono::DateTime<Utc>) -> NewScore {
    NewScore {
        score,
        total_questions: total,
        attempt_date: Some(at),
    }
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let pool = test_pool().await;

    let first = users::create(&pool, &new_user("alice", "pw", Role::Student))
        .await
        .expect("first create should succeed");
    assert!(first.id > 0);
    assert_eq!(first.username, "alice");

    let err = users::create(&pool, &new_user("alice", "other", Role::Admin))
        .await
        .expect_err("second create must fail");
    match err {
        AppError::Conflict(msg) => assert_eq!(msg, users::USERNAME_TAKEN),
        other => panic!("expected Conflict, got {:?}", other),
    }

    assert_eq!(users::count(&pool).await.unwrap(), 1);
    assert!(users::exists_by_username(&pool, "alice").await.unwrap());
    assert!(!users::exists_by_username(&pool, "bob").await.unwrap());
}

#[tokio::test]
async fn credentials_must_match_exactly() {
    let pool = test_pool().await;
    let verifier = PlainTextVerifier;
    let created = users::create(&pool, &new_user("student1", "student123", Role::Student))
        .await
        .unwrap();

    let found = users::find_by_username_and_password(&pool, &verifier, "student1", "student123")
        .await
        .unwrap()
        .expect("valid credentials should match");
    assert_eq!(found.id, created.id);

    for (username, password) in [
        ("student1", "wrong"),
        ("student1", "STUDENT123"),
        ("nobody", "student123"),
        ("Student1", "student123"),
    ] {
        let found = users::find_by_username_and_password(&pool, &verifier, username, password)
            .await
            .unwrap();
        assert!(found.is_none(), "{}/{} should not log in", username, password);
    }
}

#[tokio::test]
async fn find_by_role_filters_and_find_all_is_stable() {
    let pool = test_pool().await;
    users::create(&pool, &new_user("admin", "a", Role::Admin)).await.unwrap();
    users::create(&pool, &new_user("s1", "a", Role::Student)).await.unwrap();
    users::create(&pool, &new_user("s2", "a", Role::Student)).await.unwrap();

    let students = users::find_by_role(&pool, Role::Student).await.unwrap();
    let names: Vec<_> = students.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["s1", "s2"]);
    assert!(students.iter().all(|u| u.role == Role::Student));

    let admins = users::find_by_role(&pool, Role::Admin).await.unwrap();
    assert_eq!(admins.len(), 1);

    let once = users::find_all(&pool).await.unwrap();
    let twice = users::find_all(&pool).await.unwrap();
    let ids = |v: &[User]| v.iter().map(|u| u.id).collect::<Vec<_>>();
    assert_eq!(once.len(), 3);
    assert_eq!(ids(&once), ids(&twice));
}

#[tokio::test]
async fn deleting_questions_updates_count() {
    let pool = test_pool().await;
    let q1 = questions::create(&pool, &new_question("one")).await.unwrap();
    let q2 = questions::create(&pool, &new_question("two")).await.unwrap();
    assert_eq!(q2.correct_answer, "B");
    assert_eq!(questions::count(&pool).await.unwrap(), 2);

    questions::delete_by_id(&pool, q1.id).await.unwrap();

    assert_eq!(questions::count(&pool).await.unwrap(), 1);
    let remaining = questions::find_all(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, q2.id);

    let err = questions::delete_by_id(&pool, q1.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(questions::count(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn best_score_is_the_maximum_or_none() {
    let pool = test_pool().await;
    let user = users::create(&pool, &new_user("s1", "pw", Role::Student)).await.unwrap();
    let other = users::create(&pool, &new_user("s2", "pw", Role::Student)).await.unwrap();

    assert_eq!(scores::find_best_score_by_user_id(&pool, user.id).await.unwrap(), None);

    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    for (i, s) in [3, 9, 5].into_iter().enumerate() {
        scores::create(&pool, &user, attempt(s, 10, base + Duration::minutes(i as i64)))
            .await
            .unwrap();
    }
    scores::create(&pool, &other, attempt(10, 10, base)).await.unwrap();

    assert_eq!(scores::find_best_score_by_user_id(&pool, user.id).await.unwrap(), Some(9));
    assert_eq!(scores::find_best_score_by_user_id(&pool, other.id).await.unwrap(), Some(10));
    assert_eq!(scores::find_best_score_by_user_id(&pool, 4242).await.unwrap(), None);
}

#[tokio::test]
async fn history_is_newest_first() {
    let pool = test_pool().await;
    let user = users::create(&pool, &new_user("s1", "pw", Role::Student)).await.unwrap();
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    // Inserted out of chronological order on purpose.
    scores::create(&pool, &user, attempt(1, 5, base)).await.unwrap();
    scores::create(&pool, &user, attempt(3, 5, base + Duration::hours(2))).await.unwrap();
    scores::create(&pool, &user, attempt(2, 5, base + Duration::hours(1))).await.unwrap();

    let history = scores::find_by_user_ordered_by_date_desc(&pool, user.id)
        .await
        .unwrap();

    let values: Vec<i64> = history.iter().map(|s| s.score).collect();
    assert_eq!(values, [3, 2, 1]);
    assert!(
        history
            .windows(2)
            .all(|w| w[0].attempt_date >= w[1].attempt_date)
    );
    assert!(history.iter().all(|s| s.user_id == user.id));
}

#[tokio::test]
async fn attempt_date_defaults_to_now() {
    let pool = test_pool().await;
    let user = users::create(&pool, &new_user("s1", "pw", Role::Student)).await.unwrap();

    let before = Utc::now();
    let saved = scores::create(
        &pool,
        &user,
        NewScore {
            score: 4,
            total_questions: 5,
            attempt_date: None,
        },
    )
    .await
    .unwrap();
    let after = Utc::now();

    assert!(saved.attempt_date >= before - Duration::seconds(1));
    assert!(saved.attempt_date <= after + Duration::seconds(1));
    assert_eq!(saved.percentage(), 80.0);
}

#[tokio::test]
async fn top_scores_rank_by_score_then_recency() {
    let pool = test_pool().await;
    let user = users::create(&pool, &new_user("s1", "pw", Role::Student)).await.unwrap();
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let older_seven = scores::create(&pool, &user, attempt(7, 10, base)).await.unwrap();
    scores::create(&pool, &user, attempt(4, 10, base + Duration::hours(1))).await.unwrap();
    let newer_seven = scores::create(&pool, &user, attempt(7, 10, base + Duration::hours(2)))
        .await
        .unwrap();

    let ranked = scores::find_top_scores_by_user(&pool, user.id).await.unwrap();
    let ids: Vec<i64> = ranked.iter().map(|s| s.id).collect();
    assert_eq!(ids[..2], [newer_seven.id, older_seven.id]);
    assert_eq!(ranked[2].score, 4);
}

#[tokio::test]
async fn find_all_spans_users_and_rejects_dangling_references() {
    let pool = test_pool().await;
    let a = users::create(&pool, &new_user("a", "pw", Role::Student)).await.unwrap();
    let b = users::create(&pool, &new_user("b", "pw", Role::Student)).await.unwrap();
    let now = Utc::now();

    scores::create(&pool, &a, attempt(1, 2, now)).await.unwrap();
    scores::create(&pool, &b, attempt(2, 2, now)).await.unwrap();

    let all = scores::find_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].user_id, a.id);
    assert_eq!(all[1].user_id, b.id);

    // A user that was never stored cannot be referenced.
    let ghost = User { id: 9_999, ..a.clone() };
    let err = scores::create(&pool, &ghost, attempt(1, 1, now)).await.unwrap_err();
    assert!(matches!(err, AppError::InternalServerError(_)));
    assert_eq!(scores::find_all(&pool).await.unwrap().len(), 2);
}

#[tokio::test]
async fn seeding_runs_once() {
    let pool = test_pool().await;

    let first = seed::seed_demo_data(&pool).await.unwrap();
    assert_eq!(first.users, 3);
    assert_eq!(first.questions, 50);

    let second = seed::seed_demo_data(&pool).await.unwrap();
    assert_eq!(second, seed::SeedReport::default());

    assert_eq!(users::count(&pool).await.unwrap(), 3);
    assert_eq!(questions::count(&pool).await.unwrap(), 50);

    let admins = users::find_by_role(&pool, Role::Admin).await.unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].username, "admin");

    let catalog = questions::find_all(&pool).await.unwrap();
    assert_eq!(catalog[0].question, "What is the capital of France?");
    assert_eq!(catalog[0].correct_answer, "Paris");
}

#[tokio::test]
async fn seeding_skips_a_populated_store_independently() {
    let pool = test_pool().await;
    users::create(&pool, &new_user("existing", "pw", Role::Student)).await.unwrap();

    let report = seed::seed_demo_data(&pool).await.unwrap();
    assert_eq!(report.users, 0);
    assert_eq!(report.questions, 50);
    assert_eq!(users::count(&pool).await.unwrap(), 1);
}
