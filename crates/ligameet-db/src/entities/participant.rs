//! Participant entity: an account acting in a given role

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role a participant plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ParticipantRole {
    #[sea_orm(string_value = "player")]
    Player,

    #[sea_orm(string_value = "coach")]
    Coach,

    #[sea_orm(string_value = "referee")]
    Referee,

    #[sea_orm(string_value = "spectator")]
    Spectator,
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantRole::Player => write!(f, "player"),
            ParticipantRole::Coach => write!(f, "coach"),
            ParticipantRole::Referee => write!(f, "referee"),
            ParticipantRole::Spectator => write!(f, "spectator"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub account_id: Uuid,

    pub role: ParticipantRole,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Account,

    #[sea_orm(has_many = "super::team_participant::Entity")]
    TeamParticipants,

    #[sea_orm(has_many = "super::volleyball_stats::Entity")]
    VolleyballStats,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::team_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamParticipants.def()
    }
}

impl Related<super::volleyball_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolleyballStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
