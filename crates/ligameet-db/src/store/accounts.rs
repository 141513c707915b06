//! Accounts, participants and stored files

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;
use uuid::Uuid;

use super::validate::check_len;
use super::Store;
use crate::entities::{account, participant, stored_file, ParticipantRole};
use crate::error::StoreError;

impl Store {
    /// Mirror an identity from the authentication system
    pub async fn create_account(&self, username: &str) -> Result<account::Model, StoreError> {
        check_len("username", username, 150)?;

        let account = account::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            created_at: Set(self.now()),
        }
        .insert(&self.db)
        .await?;

        debug!("Created account {} ({})", account.username, account.id);
        Ok(account)
    }

    pub async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<account::Model>, StoreError> {
        Ok(account::Entity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    pub async fn create_participant(
        &self,
        account_id: Uuid,
        role: ParticipantRole,
    ) -> Result<participant::Model, StoreError> {
        let participant = participant::ActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(account_id),
            role: Set(role),
        }
        .insert(&self.db)
        .await?;

        debug!(
            "Created participant {} for account {} as {}",
            participant.id, account_id, role
        );
        Ok(participant)
    }

    /// Record an uploaded file; the bytes live outside the database
    pub async fn create_stored_file(
        &self,
        owner_id: Uuid,
        path: &str,
    ) -> Result<stored_file::Model, StoreError> {
        check_len("path", path, 100)?;

        let file = stored_file::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            path: Set(path.to_string()),
        }
        .insert(&self.db)
        .await?;

        debug!("Stored file {} for {}", file.path, owner_id);
        Ok(file)
    }

    pub async fn files_owned_by(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<stored_file::Model>, StoreError> {
        Ok(stored_file::Entity::find()
            .filter(stored_file::Column::OwnerId.eq(owner_id))
            .order_by_asc(stored_file::Column::Path)
            .all(&self.db)
            .await?)
    }
}
