//! Payment entity
//!
//! A payment is drawn from a wallet and pays for either a subscription or a
//! team registration fee. Both references are optional and nothing stops a
//! row from setting both or neither.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,

    pub paid_at: ChronoDateTimeUtc,

    pub wallet_id: Uuid,

    pub subscription_id: Option<Uuid>,

    pub team_registration_fee_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wallet::Entity",
        from = "Column::WalletId",
        to = "super::wallet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Wallet,

    #[sea_orm(
        belongs_to = "super::subscription::Entity",
        from = "Column::SubscriptionId",
        to = "super::subscription::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Subscription,

    #[sea_orm(
        belongs_to = "super::team_registration_fee::Entity",
        from = "Column::TeamRegistrationFeeId",
        to = "super::team_registration_fee::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TeamRegistrationFee,

    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::wallet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallet.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

impl Related<super::team_registration_fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamRegistrationFee.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Amount: {:.2} - Date: {}", self.amount, self.paid_at)
    }
}
