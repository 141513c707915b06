//! Teams, their player sets, participants and event registrations
//!
//! A team's pending and confirmed players are rows of `team_players` that
//! differ by status. Approving a player deletes the pending row and inserts
//! the confirmed one inside a single transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::validate::check_len;
use super::{find_in, Store};
use crate::entities::{account, team, team_event, team_participant, team_player, PlayerStatus};
use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
pub struct NewTeam {
    pub name: String,
    pub team_type: String,
    pub sport_id: Uuid,
    pub coach_id: Uuid,
}

/// A team with its player sets and participants
#[derive(Debug, Clone, Serialize)]
pub struct TeamRoster {
    pub team: team::Model,
    pub pending: Vec<account::Model>,
    pub confirmed: Vec<account::Model>,
    pub participants: Vec<team_participant::Model>,
}

impl Store {
    pub async fn create_team(&self, new: NewTeam) -> Result<team::Model, StoreError> {
        check_len("name", &new.name, 100)?;
        check_len("team_type", &new.team_type, 50)?;

        let team = team::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name),
            team_type: Set(new.team_type),
            score: Set(0),
            sport_id: Set(new.sport_id),
            coach_id: Set(new.coach_id),
        }
        .insert(&self.db)
        .await?;

        debug!("Created team {} ({})", team.name, team.id);
        Ok(team)
    }

    pub async fn set_team_score(&self, team_id: Uuid, score: i32) -> Result<team::Model, StoreError> {
        let mut team = find_in::<_, team::Entity>(&self.db, team_id)
            .await?
            .into_active_model();
        team.score = Set(score);
        Ok(team.update(&self.db).await?)
    }

    /// Put an account in the team's pending set. Adding an existing member
    /// again leaves the set unchanged.
    pub async fn add_pending_player(
        &self,
        team_id: Uuid,
        account_id: Uuid,
    ) -> Result<team_player::Model, StoreError> {
        ensure_player(&self.db, team_id, account_id, PlayerStatus::Pending, self.now()).await
    }

    pub async fn add_confirmed_player(
        &self,
        team_id: Uuid,
        account_id: Uuid,
    ) -> Result<team_player::Model, StoreError> {
        ensure_player(&self.db, team_id, account_id, PlayerStatus::Confirmed, self.now()).await
    }

    /// Remove an account from one of the team's sets. Returns whether a
    /// row was removed.
    pub async fn remove_player(
        &self,
        team_id: Uuid,
        account_id: Uuid,
        status: PlayerStatus,
    ) -> Result<bool, StoreError> {
        let removed = remove_player_in(&self.db, team_id, account_id, status).await?;
        if removed {
            debug!("Removed {} from {} players of team {}", account_id, status, team_id);
        }
        Ok(removed)
    }

    pub async fn pending_players(&self, team_id: Uuid) -> Result<Vec<account::Model>, StoreError> {
        self.players_with_status(team_id, PlayerStatus::Pending).await
    }

    pub async fn confirmed_players(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<account::Model>, StoreError> {
        self.players_with_status(team_id, PlayerStatus::Confirmed).await
    }

    async fn players_with_status(
        &self,
        team_id: Uuid,
        status: PlayerStatus,
    ) -> Result<Vec<account::Model>, StoreError> {
        let account_ids: Vec<Uuid> = team_player::Entity::find()
            .filter(team_player::Column::TeamId.eq(team_id))
            .filter(team_player::Column::Status.eq(status))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|player| player.account_id)
            .collect();

        if account_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(account::Entity::find()
            .filter(account::Column::Id.is_in(account_ids))
            .order_by_asc(account::Column::Username)
            .all(&self.db)
            .await?)
    }

    /// Move an account from the team's pending set to its confirmed set.
    ///
    /// Returns `false` without changing anything when the account is not
    /// pending. Fails with `NotFound` when the team does not exist.
    pub async fn approve_player(&self, team_id: Uuid, account_id: Uuid) -> Result<bool, StoreError> {
        let txn = self.db.begin().await?;

        find_in::<_, team::Entity>(&txn, team_id).await?;
        let moved = confirm_pending_player(&txn, team_id, account_id, self.now()).await?;

        txn.commit().await?;

        if moved {
            info!("Approved player {} for team {}", account_id, team_id);
        } else {
            warn!(
                "Account {} is not pending on team {}, nothing to approve",
                account_id, team_id
            );
        }
        Ok(moved)
    }

    pub async fn add_team_participant(
        &self,
        team_id: Uuid,
        participant_id: Uuid,
        is_captain: bool,
    ) -> Result<team_participant::Model, StoreError> {
        let member = team_participant::ActiveModel {
            id: Set(Uuid::new_v4()),
            is_captain: Set(is_captain),
            participant_id: Set(participant_id),
            team_id: Set(team_id),
        }
        .insert(&self.db)
        .await?;

        debug!("Participant {} joined team {}", participant_id, team_id);
        Ok(member)
    }

    /// Set or clear the captain flag of a team participant row
    pub async fn set_captain(
        &self,
        team_participant_id: Uuid,
        is_captain: bool,
    ) -> Result<team_participant::Model, StoreError> {
        let mut member = find_in::<_, team_participant::Entity>(&self.db, team_participant_id)
            .await?
            .into_active_model();
        member.is_captain = Set(is_captain);
        Ok(member.update(&self.db).await?)
    }

    pub async fn register_team_for_event(
        &self,
        team_id: Uuid,
        event_id: Uuid,
    ) -> Result<team_event::Model, StoreError> {
        let registration = team_event::ActiveModel {
            id: Set(Uuid::new_v4()),
            team_id: Set(team_id),
            event_id: Set(event_id),
        }
        .insert(&self.db)
        .await?;

        info!("Team {} registered for event {}", team_id, event_id);
        Ok(registration)
    }

    pub async fn teams_in_event(&self, event_id: Uuid) -> Result<Vec<team::Model>, StoreError> {
        let team_ids: Vec<Uuid> = team_event::Entity::find()
            .filter(team_event::Column::EventId.eq(event_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|registration| registration.team_id)
            .collect();

        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(team::Entity::find()
            .filter(team::Column::Id.is_in(team_ids))
            .order_by_asc(team::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn team_roster(&self, team_id: Uuid) -> Result<TeamRoster, StoreError> {
        let team = find_in::<_, team::Entity>(&self.db, team_id).await?;
        let pending = self.pending_players(team_id).await?;
        let confirmed = self.confirmed_players(team_id).await?;
        let participants = team_participant::Entity::find()
            .filter(team_participant::Column::TeamId.eq(team_id))
            .all(&self.db)
            .await?;

        Ok(TeamRoster {
            team,
            pending,
            confirmed,
            participants,
        })
    }
}

/// Insert the membership row unless it already exists
pub(crate) async fn ensure_player<C>(
    conn: &C,
    team_id: Uuid,
    account_id: Uuid,
    status: PlayerStatus,
    now: DateTime<Utc>,
) -> Result<team_player::Model, StoreError>
where
    C: ConnectionTrait,
{
    let existing = team_player::Entity::find()
        .filter(team_player::Column::TeamId.eq(team_id))
        .filter(team_player::Column::AccountId.eq(account_id))
        .filter(team_player::Column::Status.eq(status))
        .one(conn)
        .await?;

    if let Some(player) = existing {
        return Ok(player);
    }

    let player = team_player::ActiveModel {
        id: Set(Uuid::new_v4()),
        team_id: Set(team_id),
        account_id: Set(account_id),
        status: Set(status),
        added_at: Set(now),
    }
    .insert(conn)
    .await?;

    debug!("Added {} to {} players of team {}", account_id, status, team_id);
    Ok(player)
}

pub(crate) async fn remove_player_in<C>(
    conn: &C,
    team_id: Uuid,
    account_id: Uuid,
    status: PlayerStatus,
) -> Result<bool, StoreError>
where
    C: ConnectionTrait,
{
    let result = team_player::Entity::delete_many()
        .filter(team_player::Column::TeamId.eq(team_id))
        .filter(team_player::Column::AccountId.eq(account_id))
        .filter(team_player::Column::Status.eq(status))
        .exec(conn)
        .await?;

    Ok(result.rows_affected > 0)
}

/// Pending to confirmed; `false` if the account was not pending
pub(crate) async fn confirm_pending_player<C>(
    conn: &C,
    team_id: Uuid,
    account_id: Uuid,
    now: DateTime<Utc>,
) -> Result<bool, StoreError>
where
    C: ConnectionTrait,
{
    if !remove_player_in(conn, team_id, account_id, PlayerStatus::Pending).await? {
        return Ok(false);
    }

    ensure_player(conn, team_id, account_id, PlayerStatus::Confirmed, now).await?;
    Ok(true)
}
