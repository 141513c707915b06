//! Matches, participation rows, volleyball box scores and registration fees

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set};
use tracing::{debug, info};
use uuid::Uuid;

use super::validate::{check_len, check_money};
use super::{find_in, Store};
use crate::entities::{
    sport_match, team_match, team_registration_fee, user_match, user_registration_fee,
    volleyball_stats,
};
use crate::error::StoreError;

/// Input for [`Store::create_match`]; the score starts at 0
#[derive(Debug, Clone, Default)]
pub struct NewMatch {
    pub match_type: String,
    pub category: String,
    pub played_at: DateTime<Utc>,
    pub status: String,
    pub team_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub score: i32,
    pub status: String,
}

/// One player's volleyball numbers for a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolleyballLine {
    pub points: i32,
    pub assists: i32,
    pub blocks: i32,
    pub errors: i32,
    pub is_mvp: bool,
    pub sets: i32,
}

fn check_match_labels(match_type: &str, category: &str, status: &str) -> Result<(), StoreError> {
    check_len("match_type", match_type, 50)?;
    check_len("category", category, 50)?;
    check_len("status", status, 20)
}

impl Store {
    pub async fn create_match(&self, new: NewMatch) -> Result<sport_match::Model, StoreError> {
        check_match_labels(&new.match_type, &new.category, &new.status)?;

        let played = sport_match::ActiveModel {
            id: Set(Uuid::new_v4()),
            match_type: Set(new.match_type),
            category: Set(new.category),
            score: Set(0),
            played_at: Set(new.played_at),
            status: Set(new.status),
            team_id: Set(new.team_id),
        }
        .insert(&self.db)
        .await?;

        debug!("Created match {} for team {}", played.id, played.team_id);
        Ok(played)
    }

    pub async fn record_match_result(
        &self,
        match_id: Uuid,
        result: MatchResult,
    ) -> Result<sport_match::Model, StoreError> {
        check_len("status", &result.status, 20)?;

        let mut played = find_in::<_, sport_match::Entity>(&self.db, match_id)
            .await?
            .into_active_model();
        played.score = Set(result.score);
        played.status = Set(result.status);

        let played = played.update(&self.db).await?;
        info!(
            "Match {} result recorded: {} ({})",
            played.id, played.score, played.status
        );
        Ok(played)
    }

    pub async fn add_team_match(
        &self,
        team_id: Uuid,
        match_id: Uuid,
        is_winner: bool,
    ) -> Result<team_match::Model, StoreError> {
        Ok(team_match::ActiveModel {
            id: Set(Uuid::new_v4()),
            team_id: Set(team_id),
            match_id: Set(match_id),
            is_winner: Set(is_winner),
        }
        .insert(&self.db)
        .await?)
    }

    /// Record that an account played a match for a team
    pub async fn add_user_match(
        &self,
        match_id: Uuid,
        account_id: Uuid,
        team_id: Uuid,
        is_winner: bool,
    ) -> Result<user_match::Model, StoreError> {
        Ok(user_match::ActiveModel {
            id: Set(Uuid::new_v4()),
            match_id: Set(match_id),
            account_id: Set(account_id),
            team_id: Set(team_id),
            is_winner: Set(is_winner),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn record_volleyball_stats(
        &self,
        participant_id: Uuid,
        match_id: Uuid,
        user_match_id: Uuid,
        line: VolleyballLine,
    ) -> Result<volleyball_stats::Model, StoreError> {
        let stats = volleyball_stats::ActiveModel {
            id: Set(Uuid::new_v4()),
            points: Set(line.points),
            assists: Set(line.assists),
            blocks: Set(line.blocks),
            errors: Set(line.errors),
            is_mvp: Set(line.is_mvp),
            sets: Set(line.sets),
            participant_id: Set(participant_id),
            match_id: Set(match_id),
            user_match_id: Set(user_match_id),
        }
        .insert(&self.db)
        .await?;

        debug!(
            "Volleyball stats for participant {} in match {}",
            participant_id, match_id
        );
        Ok(stats)
    }

    /// Overwrite the numbers of an existing box score
    pub async fn update_volleyball_stats(
        &self,
        id: Uuid,
        line: VolleyballLine,
    ) -> Result<volleyball_stats::Model, StoreError> {
        let mut stats = find_in::<_, volleyball_stats::Entity>(&self.db, id)
            .await?
            .into_active_model();
        stats.points = Set(line.points);
        stats.assists = Set(line.assists);
        stats.blocks = Set(line.blocks);
        stats.errors = Set(line.errors);
        stats.is_mvp = Set(line.is_mvp);
        stats.sets = Set(line.sets);

        Ok(stats.update(&self.db).await?)
    }

    pub async fn volleyball_stats_for_match(
        &self,
        match_id: Uuid,
    ) -> Result<Vec<volleyball_stats::Model>, StoreError> {
        Ok(volleyball_stats::Entity::find()
            .filter(volleyball_stats::Column::MatchId.eq(match_id))
            .all(&self.db)
            .await?)
    }

    pub async fn create_team_registration_fee(
        &self,
        team_id: Uuid,
        match_id: Uuid,
        fee: Decimal,
    ) -> Result<team_registration_fee::Model, StoreError> {
        check_money("fee", fee)?;

        let fee = team_registration_fee::ActiveModel {
            id: Set(Uuid::new_v4()),
            team_id: Set(team_id),
            match_id: Set(match_id),
            fee: Set(fee),
            is_paid: Set(false),
        }
        .insert(&self.db)
        .await?;

        debug!("Registration fee {} for team {} in match {}", fee.fee, team_id, match_id);
        Ok(fee)
    }

    pub async fn mark_team_registration_fee_paid(
        &self,
        id: Uuid,
    ) -> Result<team_registration_fee::Model, StoreError> {
        let mut fee = find_in::<_, team_registration_fee::Entity>(&self.db, id)
            .await?
            .into_active_model();
        fee.is_paid = Set(true);

        let fee = fee.update(&self.db).await?;
        info!("Team registration fee {} paid", fee.id);
        Ok(fee)
    }

    pub async fn create_user_registration_fee(
        &self,
        user_match_id: Uuid,
    ) -> Result<user_registration_fee::Model, StoreError> {
        Ok(user_registration_fee::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_match_id: Set(user_match_id),
            is_paid: Set(false),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn mark_user_registration_fee_paid(
        &self,
        id: Uuid,
    ) -> Result<user_registration_fee::Model, StoreError> {
        let mut fee = find_in::<_, user_registration_fee::Entity>(&self.db, id)
            .await?
            .into_active_model();
        fee.is_paid = Set(true);

        let fee = fee.update(&self.db).await?;
        info!("User registration fee {} paid", fee.id);
        Ok(fee)
    }
}
