use crate::config::DatabaseConfig;
use crate::storage::bootstrap;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{Connection, FromRow};
use tracing::{info, instrument, warn};

const CREATE_REVIEWS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS reviews (
        id SERIAL PRIMARY KEY,
        filme_id INTEGER NOT NULL,
        autor VARCHAR(255) NOT NULL CHECK (char_length(autor) > 0),
        nota INTEGER NOT NULL CHECK (nota >= 1 AND nota <= 5),
        comentario TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// A stored movie review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i32,
    pub filme_id: i32,
    pub autor: String,
    pub nota: i32,
    pub comentario: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Fields supplied by the client when creating a review.
///
/// Integers are taken wide so that out-of-range values reach the table
/// constraints instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewReview {
    pub filme_id: i64,
    pub autor: String,
    pub nota: i64,
    #[serde(default)]
    pub comentario: Option<String>,
}

/// Columns generated by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct CreatedReview {
    pub id: i32,
    pub created_at: NaiveDateTime,
}

/// Review persistence. Every call opens and closes its own connection.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    config: DatabaseConfig,
}

impl ReviewStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Create the `reviews` table if it does not exist yet.
    #[instrument(skip(self))]
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        let mut conn = bootstrap::connect(&self.config).await?;
        sqlx::query(CREATE_REVIEWS_TABLE).execute(&mut conn).await?;
        conn.close().await?;

        info!("Reviews table ready");
        Ok(())
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = bootstrap::connect(&self.config).await?;
        sqlx::query("SELECT 1").execute(&mut conn).await?;
        conn.close().await
    }

    /// Insert a review. The `nota` range is enforced by the table constraint.
    #[instrument(skip(self, review), fields(filme_id = review.filme_id, nota = review.nota))]
    pub async fn create(&self, review: &NewReview) -> Result<CreatedReview, sqlx::Error> {
        let mut conn = bootstrap::connect(&self.config).await?;

        let created = sqlx::query_as::<_, CreatedReview>(
            r#"
            INSERT INTO reviews (filme_id, autor, nota, comentario)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at
            "#,
        )
        .bind(review.filme_id)
        .bind(&review.autor)
        .bind(review.nota)
        .bind(&review.comentario)
        .fetch_one(&mut conn)
        .await?;

        info!(id = created.id, "Review stored");
        Ok(keep_after_close(created, conn.close().await))
    }

    /// All reviews, newest first.
    pub async fn list(&self) -> Result<Vec<Review>, sqlx::Error> {
        let mut conn = bootstrap::connect(&self.config).await?;

        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, filme_id, autor, nota, comentario, created_at
            FROM reviews
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        Ok(keep_after_close(reviews, conn.close().await))
    }
}

/// Called once the statement has succeeded: a failed close is only logged.
fn keep_after_close<T>(value: T, closed: Result<(), sqlx::Error>) -> T {
    if let Err(e) = closed {
        warn!(error = %e, "Failed to close database connection");
    }
    value
}
