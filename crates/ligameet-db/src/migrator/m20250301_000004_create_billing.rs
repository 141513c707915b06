//! Wallets, subscriptions, registration fees, payments and the transaction ledger

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // 1. wallets (one per account)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Wallets::Table)
                    .if_not_exists()
                    .col(uuid(Wallets::Id).primary_key())
                    .col(uuid(Wallets::AccountId).unique_key())
                    .col(decimal_len(Wallets::Balance, 10, 2).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wallets_account_id")
                            .from(Wallets::Table, Wallets::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 2. subscriptions
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Subscriptions::Table)
                    .if_not_exists()
                    .col(uuid(Subscriptions::Id).primary_key())
                    .col(string_len(Subscriptions::Plan, 50))
                    .col(
                        timestamp_with_time_zone(Subscriptions::StartedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone(Subscriptions::EndsAt))
                    .col(uuid(Subscriptions::AccountId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriptions_account_id")
                            .from(Subscriptions::Table, Subscriptions::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subscriptions_account_id")
                    .table(Subscriptions::Table)
                    .col(Subscriptions::AccountId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. team_registration_fees
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(TeamRegistrationFees::Table)
                    .if_not_exists()
                    .col(uuid(TeamRegistrationFees::Id).primary_key())
                    .col(uuid(TeamRegistrationFees::TeamId))
                    .col(uuid(TeamRegistrationFees::MatchId))
                    .col(
                        decimal_len(TeamRegistrationFees::Fee, 10, 2)
                            .default(0),
                    )
                    .col(
                        boolean(TeamRegistrationFees::IsPaid)
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_registration_fees_team_id")
                            .from(TeamRegistrationFees::Table, TeamRegistrationFees::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_registration_fees_match_id")
                            .from(TeamRegistrationFees::Table, TeamRegistrationFees::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_registration_fees_match_id")
                    .table(TeamRegistrationFees::Table)
                    .col(TeamRegistrationFees::MatchId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 4. user_registration_fees
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(UserRegistrationFees::Table)
                    .if_not_exists()
                    .col(uuid(UserRegistrationFees::Id).primary_key())
                    .col(uuid(UserRegistrationFees::UserMatchId))
                    .col(
                        boolean(UserRegistrationFees::IsPaid)
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_registration_fees_user_match_id")
                            .from(
                                UserRegistrationFees::Table,
                                UserRegistrationFees::UserMatchId,
                            )
                            .to(UserMatches::Table, UserMatches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 5. payments
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(uuid(Payments::Id).primary_key())
                    .col(decimal_len(Payments::Amount, 10, 2))
                    .col(
                        timestamp_with_time_zone(Payments::PaidAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(uuid(Payments::WalletId))
                    .col(uuid_null(Payments::SubscriptionId))
                    .col(uuid_null(Payments::TeamRegistrationFeeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_wallet_id")
                            .from(Payments::Table, Payments::WalletId)
                            .to(Wallets::Table, Wallets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_subscription_id")
                            .from(Payments::Table, Payments::SubscriptionId)
                            .to(Subscriptions::Table, Subscriptions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_team_registration_fee_id")
                            .from(Payments::Table, Payments::TeamRegistrationFeeId)
                            .to(TeamRegistrationFees::Table, TeamRegistrationFees::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_wallet_id")
                    .table(Payments::Table)
                    .col(Payments::WalletId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 6. transactions (ledger)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(uuid(Transactions::Id).primary_key())
                    .col(
                        timestamp_with_time_zone(Transactions::OccurredAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(decimal_len(Transactions::Amount, 10, 2))
                    .col(uuid(Transactions::PaymentId))
                    .col(uuid(Transactions::AccountId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_payment_id")
                            .from(Transactions::Table, Transactions::PaymentId)
                            .to(Payments::Table, Payments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_account_id")
                            .from(Transactions::Table, Transactions::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_transactions_account_id")
                    .table(Transactions::Table)
                    .col(Transactions::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserRegistrationFees::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeamRegistrationFees::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subscriptions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Wallets::Table).to_owned())
            .await?;

        Ok(())
    }
}

// ============================================================
// Table identifiers
// ============================================================

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UserMatches {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Wallets {
    Table,
    Id,
    AccountId,
    Balance,
}

#[derive(DeriveIden)]
enum Subscriptions {
    Table,
    Id,
    Plan,
    StartedAt,
    EndsAt,
    AccountId,
}

#[derive(DeriveIden)]
enum TeamRegistrationFees {
    Table,
    Id,
    TeamId,
    MatchId,
    Fee,
    IsPaid,
}

#[derive(DeriveIden)]
enum UserRegistrationFees {
    Table,
    Id,
    UserMatchId,
    IsPaid,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    Amount,
    PaidAt,
    WalletId,
    SubscriptionId,
    TeamRegistrationFeeId,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    OccurredAt,
    Amount,
    PaymentId,
    AccountId,
}
