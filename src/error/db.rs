use sea_orm::{DbErr, RuntimeErr};
use sqlx::{postgres::PgDatabaseError, Error as SqlxError};

const UNIQUE_VIOLATION: &str = "23505";

/// Postgres constraint introspection on store errors.
pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self, constraint: &str) -> bool {
        violated_constraint(self, UNIQUE_VIOLATION) == Some(constraint)
    }
}

fn violated_constraint<'e>(err: &'e DbErr, code: &str) -> Option<&'e str> {
    let db_err = match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err)))
        | DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => db_err,
        _ => return None,
    };

    let Some(pg_err) = db_err.try_downcast_ref::<PgDatabaseError>() else {
        warn!("constraint check on a non-postgres error: {:?}", db_err);
        return None;
    };

    if pg_err.code() != code {
        return None;
    }

    pg_err.constraint()
}
