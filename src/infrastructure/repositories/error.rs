use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG_LIVE: &str = "articles_slug_live_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if constraint == CNT_ARTICLE_SLUG_LIVE {
                    return DomainError::SlugConflict(
                        "slug already in use by a live article".into(),
                    );
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => return DomainError::Conflict("unique constraint violated".into()),
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
