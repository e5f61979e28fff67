//! Repository pattern implementation for data access layer

use crate::core::error::Result;
use crate::db::manager::DatabaseManager;
use crate::db::models::{ItemRecord, NewItemRecord, NewUser, User};
use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row};
use std::sync::Arc;

/// Generic repository trait for the operations the service exposes
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Primary key type
    type Key: Send + Sync + 'static;
    /// Values needed to create a row
    type New: Send + Sync + 'static;

    /// Find an entity by its ID
    async fn find_by_id(&self, id: Self::Key) -> Result<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Insert a new entity, commit, and return the stored row
    async fn create(&self, entity: Self::New) -> Result<T>;
}

const ITEM_COLUMNS: &str = "id, name, price, description";

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<ItemRecord> {
    Ok(ItemRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        description: row.get(3)?,
    })
}

/// Repository for Item entities
pub struct ItemRepository {
    db: Arc<DatabaseManager>,
}

impl ItemRepository {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Number of stored items
    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM item", [], |row| row.get(0))?))
            .await
    }
}

#[async_trait]
impl Repository<ItemRecord> for ItemRepository {
    type Key = i64;
    type New = NewItemRecord;

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRecord>> {
        self.db
            .execute(move |conn| {
                Ok(conn
                    .query_row(
                        &format!("SELECT {} FROM item WHERE id = ? LIMIT 1", ITEM_COLUMNS),
                        [id],
                        item_from_row,
                    )
                    .optional()?)
            })
            .await
    }

    async fn find_all(&self) -> Result<Vec<ItemRecord>> {
        self.db
            .execute(|conn| {
                let mut stmt =
                    conn.prepare(&format!("SELECT {} FROM item ORDER BY id", ITEM_COLUMNS))?;
                let items = stmt
                    .query_map([], item_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(items)
            })
            .await
    }

    async fn create(&self, item: NewItemRecord) -> Result<ItemRecord> {
        self.db
            .transaction(move |tx| {
                tx.execute(
                    "INSERT INTO item (name, price, description) VALUES (?, ?, ?)",
                    rusqlite::params![&item.name, item.price, &item.description],
                )?;
                let id = tx.last_insert_rowid();

                // Read the row back so the caller sees what was actually stored.
                let stored = tx.query_row(
                    &format!("SELECT {} FROM item WHERE id = ?", ITEM_COLUMNS),
                    [id],
                    item_from_row,
                )?;
                Ok(stored)
            })
            .await
    }
}

const USER_COLUMNS: &str = "id, username, email, full_name, password_hash, disabled, created_at";

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        full_name: row.get(3)?,
        password_hash: row.get(4)?,
        disabled: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Repository for User entities
pub struct UserRepository {
    db: Arc<DatabaseManager>,
}

impl UserRepository {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let username = username.to_string();
        self.db
            .execute(move |conn| {
                Ok(conn
                    .query_row(
                        &format!("SELECT {} FROM users WHERE username = ?", USER_COLUMNS),
                        [&username],
                        user_from_row,
                    )
                    .optional()?)
            })
            .await
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?))
            .await
    }

    /// Enable or disable an account
    pub async fn set_disabled(&self, username: &str, disabled: bool) -> Result<bool> {
        let username = username.to_string();
        self.db
            .execute(move |conn| {
                let changed = conn.execute(
                    "UPDATE users SET disabled = ? WHERE username = ?",
                    rusqlite::params![disabled, &username],
                )?;
                Ok(changed > 0)
            })
            .await
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    type Key = i64;
    type New = NewUser;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.db
            .execute(move |conn| {
                Ok(conn
                    .query_row(
                        &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
                        [id],
                        user_from_row,
                    )
                    .optional()?)
            })
            .await
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        self.db
            .execute(|conn| {
                let mut stmt =
                    conn.prepare(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))?;
                let users = stmt
                    .query_map([], user_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(users)
            })
            .await
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        self.db
            .transaction(move |tx| {
                tx.execute(
                    "INSERT INTO users (username, email, full_name, password_hash) VALUES (?, ?, ?, ?)",
                    rusqlite::params![
                        &user.username,
                        &user.email,
                        &user.full_name,
                        &user.password_hash,
                    ],
                )?;
                let id = tx.last_insert_rowid();

                let stored = tx.query_row(
                    &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
                    [id],
                    user_from_row,
                )?;
                Ok(stored)
            })
            .await
    }
}
