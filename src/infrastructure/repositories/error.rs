use crate::domain::errors::DomainError;

const CNT_BOUNTY_SLUG: &str = "Bounties_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_BOUNTY_SLUG) {
                return DomainError::Conflict("slug already exists".into());
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::Unavailable(err.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
