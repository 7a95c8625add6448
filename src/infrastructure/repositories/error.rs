use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return DomainError::Persistence(format!(
                    "database constraint violation: {constraint}"
                ));
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
