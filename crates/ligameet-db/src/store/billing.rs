//! Wallets, subscriptions, payments and the transaction ledger
//!
//! Balances are stored, not derived: recording a payment or a transaction
//! does not move money between wallets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::validate::{check_len, check_money};
use super::{find_in, Store};
use crate::entities::{payment, subscription, transaction, wallet};
use crate::error::StoreError;

/// Input for [`Store::create_subscription`]; `started_at` defaults to now
#[derive(Debug, Clone, Default)]
pub struct NewSubscription {
    pub plan: String,
    pub account_id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    pub ends_at: DateTime<Utc>,
}

/// Input for [`Store::create_payment`]; `paid_at` defaults to now
#[derive(Debug, Clone, Default)]
pub struct NewPayment {
    pub amount: Decimal,
    pub wallet_id: Uuid,
    pub subscription_id: Option<Uuid>,
    pub team_registration_fee_id: Option<Uuid>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Input for [`Store::record_transaction`]; `occurred_at` defaults to now
#[derive(Debug, Clone, Default)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub payment_id: Uuid,
    pub account_id: Uuid,
    pub occurred_at: Option<DateTime<Utc>>,
}

impl Store {
    /// Open the account's wallet with a zero balance
    pub async fn create_wallet(&self, account_id: Uuid) -> Result<wallet::Model, StoreError> {
        let wallet = wallet::ActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(account_id),
            balance: Set(Decimal::new(0, 2)),
        }
        .insert(&self.db)
        .await?;

        debug!("Opened wallet {} for account {}", wallet.id, account_id);
        Ok(wallet)
    }

    pub async fn wallet_for(&self, account_id: Uuid) -> Result<Option<wallet::Model>, StoreError> {
        Ok(wallet::Entity::find()
            .filter(wallet::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await?)
    }

    pub async fn set_wallet_balance(
        &self,
        wallet_id: Uuid,
        balance: Decimal,
    ) -> Result<wallet::Model, StoreError> {
        check_money("balance", balance)?;

        let mut wallet = find_in::<_, wallet::Entity>(&self.db, wallet_id)
            .await?
            .into_active_model();
        wallet.balance = Set(balance);

        let wallet = wallet.update(&self.db).await?;
        info!("Wallet {} balance set to {:.2}", wallet.id, wallet.balance);
        Ok(wallet)
    }

    pub async fn create_subscription(
        &self,
        new: NewSubscription,
    ) -> Result<subscription::Model, StoreError> {
        check_len("plan", &new.plan, 50)?;

        let subscription = subscription::ActiveModel {
            id: Set(Uuid::new_v4()),
            plan: Set(new.plan),
            started_at: Set(new.started_at.unwrap_or_else(|| self.now())),
            ends_at: Set(new.ends_at),
            account_id: Set(new.account_id),
        }
        .insert(&self.db)
        .await?;

        debug!(
            "Subscription {} ({}) for account {}",
            subscription.id, subscription.plan, subscription.account_id
        );
        Ok(subscription)
    }

    pub async fn create_payment(&self, new: NewPayment) -> Result<payment::Model, StoreError> {
        check_money("amount", new.amount)?;

        let payment = payment::ActiveModel {
            id: Set(Uuid::new_v4()),
            amount: Set(new.amount),
            paid_at: Set(new.paid_at.unwrap_or_else(|| self.now())),
            wallet_id: Set(new.wallet_id),
            subscription_id: Set(new.subscription_id),
            team_registration_fee_id: Set(new.team_registration_fee_id),
        }
        .insert(&self.db)
        .await?;

        info!("{} from wallet {}", payment, payment.wallet_id);
        Ok(payment)
    }

    pub async fn record_transaction(
        &self,
        new: NewTransaction,
    ) -> Result<transaction::Model, StoreError> {
        check_money("amount", new.amount)?;

        let entry = transaction::ActiveModel {
            id: Set(Uuid::new_v4()),
            occurred_at: Set(new.occurred_at.unwrap_or_else(|| self.now())),
            amount: Set(new.amount),
            payment_id: Set(new.payment_id),
            account_id: Set(new.account_id),
        }
        .insert(&self.db)
        .await?;

        debug!("Ledger entry {} for account {}", entry.id, entry.account_id);
        Ok(entry)
    }

    /// Ledger of an account, oldest first
    pub async fn transactions_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<transaction::Model>, StoreError> {
        Ok(transaction::Entity::find()
            .filter(transaction::Column::AccountId.eq(account_id))
            .order_by_asc(transaction::Column::OccurredAt)
            .all(&self.db)
            .await?)
    }
}
