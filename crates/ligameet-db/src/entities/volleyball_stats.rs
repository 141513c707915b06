//! VolleyballStats entity: per-player volleyball box score for a match
//!
//! Other sports get their own `<sport>_stats` table keyed the same way
//! (participant, match, user match).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "volleyball_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub points: i32,

    pub assists: i32,

    pub blocks: i32,

    pub errors: i32,

    pub is_mvp: bool,

    /// Sets played
    pub sets: i32,

    pub participant_id: Uuid,

    pub match_id: Uuid,

    pub user_match_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::participant::Entity",
        from = "Column::ParticipantId",
        to = "super::participant::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Participant,

    #[sea_orm(
        belongs_to = "super::sport_match::Entity",
        from = "Column::MatchId",
        to = "super::sport_match::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Match,

    #[sea_orm(
        belongs_to = "super::user_match::Entity",
        from = "Column::UserMatchId",
        to = "super::user_match::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UserMatch,
}

impl Related<super::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl Related<super::sport_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl Related<super::user_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
