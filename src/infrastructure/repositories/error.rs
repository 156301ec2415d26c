use crate::domain::errors::DomainError;

const CNT_SAVED_SEARCH_USER: &str = "saved_searches_user_id_fkey";
const CNT_SAVED_SEARCH_NAME: &str = "saved_searches_name_not_blank_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_SAVED_SEARCH_USER => DomainError::NotFound("profile not found".into()),
                    CNT_SAVED_SEARCH_NAME => {
                        DomainError::Validation("saved search name cannot be empty".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
