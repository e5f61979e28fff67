//! Database models
//!
//! Data structures representing database tables

use serde::{Deserialize, Serialize};

/// Item row in the `item` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Column values for an item that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemRecord {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// User record in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub disabled: bool,
    pub created_at: String,
}

/// Column values for a user that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password_hash: String,
}
