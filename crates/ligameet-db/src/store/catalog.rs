//! Sports, events and the sport-specific event refinement

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use tracing::{debug, info};
use uuid::Uuid;

use super::validate::{check_len, check_window};
use super::{find_in, Store};
use crate::entities::{event, sport, sports_event, EventStatus};
use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
pub struct NewSport {
    pub name: String,
    pub rules: String,
    pub icon: Option<String>,
}

/// Partial update of a sport; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct SportEdit {
    pub name: Option<String>,
    pub rules: Option<String>,
    /// `Some(None)` clears the icon
    pub icon: Option<Option<String>>,
}

/// Input for [`Store::create_event`]. `status` defaults to upcoming.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: String,
    pub organizer_id: Uuid,
    pub status: EventStatus,
}

fn check_icon(icon: Option<&str>) -> Result<(), StoreError> {
    match icon {
        Some(icon) => check_len("icon", icon, 100),
        None => Ok(()),
    }
}

impl Store {
    pub async fn create_sport(&self, new: NewSport) -> Result<sport::Model, StoreError> {
        check_len("name", &new.name, 100)?;
        check_icon(new.icon.as_deref())?;

        let sport = sport::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name),
            rules: Set(new.rules),
            edited_at: Set(self.now()),
            icon: Set(new.icon),
        }
        .insert(&self.db)
        .await?;

        debug!("Created sport {} ({})", sport.name, sport.id);
        Ok(sport)
    }

    /// Apply an edit and stamp `edited_at` with the current time
    pub async fn edit_sport(&self, id: Uuid, edit: SportEdit) -> Result<sport::Model, StoreError> {
        let mut sport = find_in::<_, sport::Entity>(&self.db, id)
            .await?
            .into_active_model();

        if let Some(name) = edit.name {
            check_len("name", &name, 100)?;
            sport.name = Set(name);
        }
        if let Some(rules) = edit.rules {
            sport.rules = Set(rules);
        }
        if let Some(icon) = edit.icon {
            check_icon(icon.as_deref())?;
            sport.icon = Set(icon);
        }
        sport.edited_at = Set(self.now());

        Ok(sport.update(&self.db).await?)
    }

    pub async fn create_event(&self, new: NewEvent) -> Result<event::Model, StoreError> {
        check_len("name", &new.name, 100)?;
        check_len("location", &new.location, 255)?;
        check_window(new.starts_at, new.ends_at)?;

        let event = event::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name),
            starts_at: Set(new.starts_at),
            ends_at: Set(new.ends_at),
            location: Set(new.location),
            status: Set(new.status),
            organizer_id: Set(new.organizer_id),
        }
        .insert(&self.db)
        .await?;

        debug!("Created event {} ({}) [{}]", event.name, event.id, event.status);
        Ok(event)
    }

    pub async fn set_event_status(
        &self,
        id: Uuid,
        status: EventStatus,
    ) -> Result<event::Model, StoreError> {
        let mut event = find_in::<_, event::Entity>(&self.db, id)
            .await?
            .into_active_model();
        event.status = Set(status);

        let event = event.update(&self.db).await?;
        info!("Event {} is now {}", event.id, event.status);
        Ok(event)
    }

    pub async fn reschedule_event(
        &self,
        id: Uuid,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<event::Model, StoreError> {
        check_window(starts_at, ends_at)?;

        let mut event = find_in::<_, event::Entity>(&self.db, id)
            .await?
            .into_active_model();
        event.starts_at = Set(starts_at);
        event.ends_at = Set(ends_at);

        Ok(event.update(&self.db).await?)
    }

    /// Mark an event as belonging to a sport (at most one per event)
    pub async fn create_sports_event(
        &self,
        event_id: Uuid,
        sport_id: Uuid,
    ) -> Result<sports_event::Model, StoreError> {
        let sports_event = sports_event::ActiveModel {
            event_id: Set(event_id),
            sport_id: Set(sport_id),
        }
        .insert(&self.db)
        .await?;

        debug!("Event {} is a sports event for {}", event_id, sport_id);
        Ok(sports_event)
    }

    pub async fn sports_event_for(
        &self,
        event_id: Uuid,
    ) -> Result<Option<sports_event::Model>, StoreError> {
        Ok(sports_event::Entity::find_by_id(event_id)
            .one(&self.db)
            .await?)
    }
}
