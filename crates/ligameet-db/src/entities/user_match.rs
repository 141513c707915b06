//! UserMatch entity: an account playing a match for a team
//!
//! An account plays a given match at most once.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub match_id: Uuid,

    pub account_id: Uuid,

    pub team_id: Uuid,

    pub is_winner: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sport_match::Entity",
        from = "Column::MatchId",
        to = "super::sport_match::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Match,

    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Account,

    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,

    #[sea_orm(has_many = "super::volleyball_stats::Entity")]
    VolleyballStats,

    #[sea_orm(has_many = "super::user_registration_fee::Entity")]
    RegistrationFees,
}

impl Related<super::sport_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::volleyball_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolleyballStats.def()
    }
}

impl Related<super::user_registration_fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegistrationFees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
