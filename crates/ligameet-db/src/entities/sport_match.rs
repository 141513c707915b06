//! Match entity
//!
//! `match_type`, `category` and `status` are open strings (e.g. "casual" /
//! "official", a league code, "scheduled" / "finished"); unlike event status
//! they are not restricted to a closed set.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub match_type: String,

    pub category: String,

    pub score: i32,

    pub played_at: ChronoDateTimeUtc,

    pub status: String,

    /// Home team
    pub team_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,

    #[sea_orm(has_many = "super::team_match::Entity")]
    TeamMatches,

    #[sea_orm(has_many = "super::user_match::Entity")]
    UserMatches,

    #[sea_orm(has_many = "super::volleyball_stats::Entity")]
    VolleyballStats,

    #[sea_orm(has_many = "super::team_registration_fee::Entity")]
    RegistrationFees,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::team_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMatches.def()
    }
}

impl Related<super::user_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMatches.def()
    }
}

impl Related<super::volleyball_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolleyballStats.def()
    }
}

impl Related<super::team_registration_fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegistrationFees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
