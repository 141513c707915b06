//! Store: create/read/update/delete per entity plus the stateful team and
//! join-request operations
//!
//! Every multi-step mutation runs inside one database transaction. Single-row
//! writes rely on the engine's own atomicity. Uniqueness and foreign-key
//! failures come back as [`StoreError::ConstraintViolation`] and
//! [`StoreError::ReferentialViolation`].

mod accounts;
mod billing;
mod catalog;
mod join_requests;
mod matches;
mod teams;
mod validate;

pub use billing::{NewPayment, NewSubscription, NewTransaction};
pub use catalog::{NewEvent, NewSport, SportEdit};
pub use matches::{MatchResult, NewMatch, VolleyballLine};
pub use teams::{NewTeam, TeamRoster};

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, PrimaryKeyTrait};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;

/// Handle to the schema: a connection plus the clock used for timestamps
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Store backed by the system clock
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    pub fn with_clock(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Fetch a row by primary key
    pub async fn find<E>(&self, id: Uuid) -> Result<E::Model, StoreError>
    where
        E: EntityTrait,
        Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        find_in::<_, E>(&self.db, id).await
    }

    /// All rows of an entity
    pub async fn list<E>(&self) -> Result<Vec<E::Model>, StoreError>
    where
        E: EntityTrait,
    {
        Ok(E::find().all(&self.db).await?)
    }

    /// Delete a row by primary key; dependents go with it through the
    /// cascading foreign keys
    pub async fn delete<E>(&self, id: Uuid) -> Result<(), StoreError>
    where
        E: EntityTrait,
        Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::not_found(table_name::<E>(), id));
        }

        debug!("Deleted {} {}", table_name::<E>(), id);
        Ok(())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("backend", &self.db.get_database_backend())
            .finish_non_exhaustive()
    }
}

/// Fetch by primary key on any connection (plain or transactional)
pub(crate) async fn find_in<C, E>(conn: &C, id: Uuid) -> Result<E::Model, StoreError>
where
    C: ConnectionTrait,
    E: EntityTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| StoreError::not_found(table_name::<E>(), id))
}

fn table_name<E: EntityName>() -> String {
    E::default().table_name().to_string()
}
