use chrono::NaiveDate;
use exemplar::Model;
use rusqlite::Connection;
use sea_query::{enum_def, Expr, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use super::NATURAL_ORDER;
use crate::{filter::LogFilter, types::Uuid};

/// Largest LIMIT sqlite accepts, it binds integers as i64
const MAX_SQL_LIMIT: u64 = i64::MAX as u64;

pub const DEFAULT_DURATION_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("exercise")]
#[enum_def]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: u32,
    pub date: NaiveDate,
}

impl Exercise {
    pub fn new<T: Into<String>>(user_id: Uuid, description: T, duration: u32, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            description: description.into(),
            duration,
            date,
        }
    }

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

    pub fn create(&self, conn: &Connection) -> Result<(), rusqlite::Error> {
        self.insert(conn)
    }

    /// Exercises for a user in insertion order, restricted to the filter's
    /// date range and cap
    pub fn fetch_log(
        conn: &Connection,
        user_id: &Uuid,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let mut query = Self::select_star();
        query.and_where(Expr::col(ExerciseIden::UserId).eq(user_id));

        if let Some(from) = filter.from.active() {
            query.and_where(Expr::col(ExerciseIden::Date).gte(from));
        }
        if let Some(to) = filter.to.active() {
            query.and_where(Expr::col(ExerciseIden::Date).lte(to));
        }

        query.order_by_expr(Expr::cust(NATURAL_ORDER), Order::Asc);

        if let Some(limit) = filter.cap.limit() {
            query.limit((limit as u64).min(MAX_SQL_LIMIT));
        }

        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let exercises = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(exercises)
    }
}
