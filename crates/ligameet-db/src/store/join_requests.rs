//! Join requests: an account asking to join a team
//!
//! `approve_join_request` and `reject_join_request` only record the
//! decision. `accept_join_request` also moves the requester into the team's
//! confirmed players in the same transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::teams::{ensure_player, remove_player_in};
use super::{find_in, Store};
use crate::entities::{join_request, JoinRequestStatus, PlayerStatus};
use crate::error::StoreError;

impl Store {
    pub async fn create_join_request(
        &self,
        account_id: Uuid,
        team_id: Uuid,
    ) -> Result<join_request::Model, StoreError> {
        let request = join_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(account_id),
            team_id: Set(team_id),
            status: Set(JoinRequestStatus::Pending),
            requested_at: Set(self.now()),
            approved_at: Set(None),
            rejected_at: Set(None),
        }
        .insert(&self.db)
        .await?;

        debug!(
            "Join request {} from {} to team {}",
            request.id, account_id, team_id
        );
        Ok(request)
    }

    /// Oldest first
    pub async fn join_requests_for_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<join_request::Model>, StoreError> {
        Ok(join_request::Entity::find()
            .filter(join_request::Column::TeamId.eq(team_id))
            .order_by_asc(join_request::Column::RequestedAt)
            .all(&self.db)
            .await?)
    }

    /// Mark the request approved and stamp `approved_at`. Team membership is
    /// left alone.
    pub async fn approve_join_request(&self, id: Uuid) -> Result<join_request::Model, StoreError> {
        let txn = self.db.begin().await?;
        let request = decide(&txn, id, JoinRequestStatus::Approved, self.now()).await?;
        txn.commit().await?;

        info!("Join request {} approved", id);
        Ok(request)
    }

    /// Mark the request rejected and stamp `rejected_at`
    pub async fn reject_join_request(&self, id: Uuid) -> Result<join_request::Model, StoreError> {
        let txn = self.db.begin().await?;
        let request = decide(&txn, id, JoinRequestStatus::Rejected, self.now()).await?;
        txn.commit().await?;

        info!("Join request {} rejected", id);
        Ok(request)
    }

    /// Approve the request and confirm the requester on the team, dropping
    /// any pending membership, all in one transaction
    pub async fn accept_join_request(&self, id: Uuid) -> Result<join_request::Model, StoreError> {
        let now = self.now();
        let txn = self.db.begin().await?;

        let request = decide(&txn, id, JoinRequestStatus::Approved, now).await?;
        remove_player_in(&txn, request.team_id, request.account_id, PlayerStatus::Pending).await?;
        ensure_player(
            &txn,
            request.team_id,
            request.account_id,
            PlayerStatus::Confirmed,
            now,
        )
        .await?;

        txn.commit().await?;

        info!(
            "Join request {} accepted, {} confirmed on team {}",
            id, request.account_id, request.team_id
        );
        Ok(request)
    }
}

/// Record a decision. Earlier timestamps are left as they were, so a request
/// approved and later rejected carries both.
async fn decide<C>(
    conn: &C,
    id: Uuid,
    status: JoinRequestStatus,
    now: DateTime<Utc>,
) -> Result<join_request::Model, StoreError>
where
    C: ConnectionTrait,
{
    let mut request = find_in::<_, join_request::Entity>(conn, id)
        .await?
        .into_active_model();

    request.status = Set(status);
    match status {
        JoinRequestStatus::Approved => request.approved_at = Set(Some(now)),
        JoinRequestStatus::Rejected => request.rejected_at = Set(Some(now)),
        JoinRequestStatus::Pending => {}
    }

    Ok(request.update(conn).await?)
}
