//! UserRegistrationFee entity: whether a player paid to enter a match

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_registration_fees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_match_id: Uuid,

    pub is_paid: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_match::Entity",
        from = "Column::UserMatchId",
        to = "super::user_match::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UserMatch,
}

impl Related<super::user_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
