//! SQLite implementation of [`MessageStore`].
//!
//! Uses [`sqlx`] with the `sqlite` feature.  Migrations are run automatically
//! on startup via [`SqliteStore::connect`].
//!
//! # Migrations path
//!
//! `sqlx::migrate!("./migrations")` resolves the path **at compile time**
//! relative to `CARGO_MANIFEST_DIR` (the crate root), so the directory is
//! embedded into the binary.  The database file location is determined at
//! runtime by the `FRONTDESK_DATABASE_URL` environment variable and is
//! **not** related to the current working directory at runtime.
//!
//! # Queries
//!
//! The `sqlx::query` (runtime-verified) form is used deliberately so that no
//! `DATABASE_URL` environment variable is needed at compile time.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use frontdesk_core::NewContactMessage;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

use super::{ContactMessage, MessageStore, StoreError};

/// SQLite-backed contact-message store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the SQLite database at `url` and run pending
    /// migrations.
    ///
    /// `url` should be a sqlx-compatible SQLite URL, e.g.
    /// `"sqlite://frontdesk.db"`.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        // Path is resolved relative to CARGO_MANIFEST_DIR at compile time.
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

impl MessageStore for SqliteStore {
    async fn create(&self, submission: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let record = ContactMessage {
            id: Uuid::new_v4().to_string(),
            first_name: submission.first_name,
            last_name: submission.last_name,
            email: submission.email,
            phone: submission.phone,
            service: submission.service,
            message: submission.message,
            created_at: Utc::now(),
        };
        let created_at = record.created_at.to_rfc3339();
        sqlx::query(
            "INSERT INTO contact_messages \
             (id, first_name, last_name, email, phone, service, message, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&record.id)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.service)
        .bind(&record.message)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        type Row = (
            String,
            String,
            String,
            String,
            Option<String>,
            String,
            String,
            String,
        );
        let rows: Vec<Row> = sqlx::query_as(
            "SELECT id, first_name, last_name, email, phone, service, message, created_at \
             FROM contact_messages ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(
                |(id, first_name, last_name, email, phone, service, message, created_at)| {
                    ContactMessage {
                        id,
                        first_name,
                        last_name,
                        email,
                        phone,
                        service,
                        message,
                        created_at: created_at.parse::<DateTime<Utc>>().unwrap_or_else(
                            |e: chrono::ParseError| {
                                tracing::warn!(raw = %created_at, error = %e, "failed to parse message created_at; using now");
                                Utc::now()
                            },
                        ),
                    }
                },
            )
            .collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    fn submission(first_name: &str) -> NewContactMessage {
        NewContactMessage {
            first_name: first_name.to_owned(),
            last_name: "Doe".to_owned(),
            email: "john@co.com".to_owned(),
            phone: None,
            service: "Cloud Solutions".to_owned(),
            message: "Need help".to_owned(),
        }
    }

    async fn temp_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("contact.db").display());
        let store = SqliteStore::connect(&url).await.expect("connect");
        (dir, store)
    }

    #[tokio::test]
    async fn create_then_list_roundtrip() {
        let (_dir, store) = temp_store().await;
        let stored = store.create(submission("John")).await.expect("create");
        assert!(!stored.id.is_empty());

        let all = store.list_all().await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, stored.id);
        assert_eq!(all[0].first_name, "John");
        assert_eq!(all[0].phone, None);
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order() {
        let (_dir, store) = temp_store().await;
        for name in ["Ada", "Grace", "Edsger"] {
            store.create(submission(name)).await.expect("create");
        }
        let names: Vec<String> = store
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|m| m.first_name)
            .collect();
        assert_eq!(names, ["Ada", "Grace", "Edsger"]);
    }

    #[tokio::test]
    async fn resubmission_creates_a_second_record() {
        let (_dir, store) = temp_store().await;
        let first = store.create(submission("John")).await.expect("create");
        let second = store.create(submission("John")).await.expect("create");
        assert_ne!(first.id, second.id);
        assert_eq!(store.list_all().await.expect("list").len(), 2);
    }

    #[tokio::test]
    async fn empty_store_lists_empty() {
        let (_dir, store) = temp_store().await;
        assert!(store.list_all().await.expect("list").is_empty());
    }
}
