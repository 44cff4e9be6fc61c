//! PostgreSQL implementation of the link repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for link storage and retrieval.
///
/// Every mutation runs inside a transaction that commits only after exactly
/// one row was affected; any error path (or the future being dropped) leaves
/// the transaction to roll back when the handle drops, so partial writes are
/// never observable.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    token: String,
    target_url: String,
    visits: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for ShortLink {
    fn from(row: LinkRow) -> Self {
        Self {
            token: row.token,
            target_url: row.target_url,
            visits: row.visits,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, link: &ShortLink) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query(
            "INSERT INTO links (token, target_url, visits, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&link.token)
        .bind(&link.target_url)
        .bind(link.visits)
        .bind(link.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() != 1 {
            return Err(AppError::internal("storage/unexpected-write").with_debug(format!(
                "{} rows affected by insert, expected 1",
                result.rows_affected()
            )));
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<ShortLink, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            "SELECT token, target_url, visits, created_at FROM links WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.map(ShortLink::from).ok_or_else(|| {
            AppError::not_found("url/not-found", format!("No URL stored for token ({token})."))
        })
    }

    async fn update(&self, link: &ShortLink) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query("UPDATE links SET target_url = $1, visits = $2 WHERE token = $3")
            .bind(&link.target_url)
            .bind(link.visits)
            .bind(&link.token)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        match result.rows_affected() {
            1 => {
                tx.commit().await.map_err(map_sqlx_error)?;
                Ok(())
            }
            0 => Err(AppError::not_found(
                "url/not-found",
                format!("No URL stored for token ({}).", link.token),
            )),
            n => Err(AppError::internal("storage/unexpected-write")
                .with_debug(format!("{n} rows affected by update, expected 1"))),
        }
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let rows: Vec<LinkRow> =
            sqlx::query_as("SELECT token, target_url, visits, created_at FROM links")
                .fetch_all(self.pool.as_ref())
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }
}
