// src/infrastructure/repositories/postgres/error.rs
use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_REVISION_NUMBER: &str = "post_revisions_post_id_revision_number_key";
const CNT_REVISION_POST: &str = "post_revisions_post_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_REVISION_NUMBER => {
                        DomainError::Conflict("revision number already taken for post".into())
                    }
                    CNT_POST_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_REVISION_POST => DomainError::NotFound("post not found".into()),
                    other => DomainError::Infrastructure(format!(
                        "database constraint violation: {other}"
                    )),
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Infrastructure(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Infrastructure(err.to_string()),
    }
}
