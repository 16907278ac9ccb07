use chrono::NaiveDate;
use exemplar::Model;
use rusqlite::Connection;
use sea_query::{enum_def, Expr, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use crate::{api::payloads::ExerciseDetails, types::Uuid};

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("exercise")]
#[enum_def]
pub struct Exercise {
    pub id: Uuid,
    /// The owning user. Users don't know about their exercises
    pub user_id: Uuid,
    pub description: String,
    /// Minutes
    pub duration: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("exercise")]
pub struct NewExercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl NewExercise {
    /// `today` is used when the details didn't carry a date
    pub fn new(user_id: Uuid, details: ExerciseDetails, today: NaiveDate) -> Self {
        let ExerciseDetails {
            description,
            duration,
            date,
        } = details;

        Self {
            id: Uuid::new_v4(),
            user_id,
            description,
            duration,
            date: date.unwrap_or(today),
        }
    }
}

impl Exercise {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::UserId,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Exercise, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Exercise::from_row)?;
        Ok(res)
    }

    /// All of a user's exercises in insertion order
    pub fn fetch_by_user_id(
        conn: &Connection,
        user_id: &Uuid,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(ExerciseIden::UserId).eq(user_id))
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn create(
        conn: &mut Connection,
        new_exercise: NewExercise,
    ) -> Result<Exercise, rusqlite::Error> {
        let tx = conn.transaction()?;
        let exercise = {
            new_exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, &new_exercise.id)?
        };
        tx.commit()?;

        Ok(exercise)
    }
}
