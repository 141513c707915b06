//! Store error type
//!
//! Engine errors are classified into the integrity failures callers care
//! about (conflicts, dangling references, missing rows); everything else is
//! passed through as [`StoreError::Database`].

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced by [`crate::Store`] operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A uniqueness or primary-key constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A foreign key points at a row that does not exist
    #[error("Referential violation: {0}")]
    ReferentialViolation(String),

    /// The addressed row does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Input rejected before reaching the database
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl StoreError {
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return Self::ConstraintViolation(msg);
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return Self::ReferentialViolation(msg);
            }
            _ => {}
        }

        // Not every driver error carries a code sql_err() understands
        let message = err.to_string();
        if is_unique_message(&message) {
            Self::ConstraintViolation(message)
        } else if is_foreign_key_message(&message) {
            Self::ReferentialViolation(message)
        } else {
            Self::Database(err)
        }
    }
}

fn is_unique_message(message: &str) -> bool {
    message.contains("UNIQUE constraint failed")
        || message.contains("duplicate key value violates unique constraint")
}

fn is_foreign_key_message(message: &str) -> bool {
    message.contains("FOREIGN KEY constraint failed")
        || message.contains("violates foreign key constraint")
}
