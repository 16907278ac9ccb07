use chrono::NaiveDate;
use rusqlite::Connection;
use shared::{
    api::payloads::ExerciseDetails,
    model::{Exercise, NewExercise, NewUser, User},
    types::Uuid,
};
use tracker_server::db;

fn migrated_connection() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::get_migrations().unwrap().to_latest(&mut conn).unwrap();
    db::run_pragmas(&conn).unwrap();
    conn
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn details(description: &str, duration: i64, date: Option<NaiveDate>) -> ExerciseDetails {
    ExerciseDetails {
        description: description.into(),
        duration,
        date,
    }
}

#[test]
fn test_migrations_are_valid() {
    db::get_migrations().unwrap().validate().unwrap();
}

#[test]
fn test_create_and_fetch_user() {
    let mut conn = migrated_connection();

    let user = User::create(&mut conn, NewUser::new(Uuid::new_v4(), "fcc_test")).unwrap();
    assert_eq!(user.username, "fcc_test");
    assert_eq!(User::fetch_by_id(&conn, &user.id).unwrap(), user);
    assert_eq!(User::fetch_maybe(&conn, &user.id).unwrap(), Some(user));
    assert_eq!(User::fetch_maybe(&conn, &Uuid::new_v4()).unwrap(), None);
}

#[test]
fn test_fetch_all_users_in_insertion_order() {
    let mut conn = migrated_connection();

    let names = ["zed", "amy", "bob"];
    for name in names {
        User::create(&mut conn, NewUser::new(Uuid::new_v4(), name)).unwrap();
    }

    let fetched: Vec<_> = User::fetch_all(&conn)
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(fetched, names);
}

#[test]
fn test_exercise_date_defaults_to_today() {
    let mut conn = migrated_connection();
    let user = User::create(&mut conn, NewUser::new(Uuid::new_v4(), "fcc_test")).unwrap();

    let today = ymd(2024, 6, 1);
    let with_date = Exercise::create(
        &mut conn,
        NewExercise::new(user.id, details("test", 60, Some(ymd(1990, 1, 1))), today),
    )
    .unwrap();
    let without_date =
        Exercise::create(&mut conn, NewExercise::new(user.id, details("test", 60, None), today))
            .unwrap();

    assert_eq!(with_date.date, ymd(1990, 1, 1));
    assert_eq!(without_date.date, today);
    assert_ne!(with_date.id, without_date.id);
}

#[test]
fn test_fetch_exercises_by_user() {
    let mut conn = migrated_connection();
    let user = User::create(&mut conn, NewUser::new(Uuid::new_v4(), "fcc_test")).unwrap();
    let other = User::create(&mut conn, NewUser::new(Uuid::new_v4(), "other")).unwrap();
    let today = ymd(2024, 6, 1);

    for (owner, description) in [(&user, "b"), (&other, "x"), (&user, "a")] {
        Exercise::create(
            &mut conn,
            NewExercise::new(owner.id, details(description, 10, None), today),
        )
        .unwrap();
    }

    let descriptions: Vec<_> = Exercise::fetch_by_user_id(&conn, &user.id)
        .unwrap()
        .into_iter()
        .map(|e| e.description)
        .collect();
    assert_eq!(descriptions, ["b", "a"]);
    assert!(Exercise::fetch_by_user_id(&conn, &Uuid::new_v4())
        .unwrap()
        .is_empty());
}

#[test]
fn test_exercise_requires_existing_user() {
    let mut conn = migrated_connection();

    let result = Exercise::create(
        &mut conn,
        NewExercise::new(Uuid::new_v4(), details("test", 60, None), ymd(2024, 6, 1)),
    );
    assert!(result.is_err());
}

#[test]
fn test_run_migrations_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("migrate.sqlite");
    let path = path.to_str().unwrap();

    assert_eq!(db::run_migrations(path).unwrap(), 2);
    assert_eq!(db::run_migrations(path).unwrap(), 0);

    let conn = Connection::open(path).unwrap();
    let journal_mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(journal_mode, "wal");
}
