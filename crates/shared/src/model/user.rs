use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use super::NATURAL_ORDER;
use crate::types::Uuid;

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("user")]
#[enum_def]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("user")]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
}

impl NewUser {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }
}

impl From<NewUser> for User {
    fn from(value: NewUser) -> Self {
        Self {
            id: value.id,
            username: value.username,
        }
    }
}

impl User {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn fetch_by_username<T: AsRef<str>>(
        conn: &Connection,
        username: T,
    ) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Username).eq(username.as_ref()))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .order_by_expr(Expr::cust(NATURAL_ORDER), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, rusqlite::Error> {
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            User::fetch_by_id(&tx, &new_user.id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(user)
    }
}
