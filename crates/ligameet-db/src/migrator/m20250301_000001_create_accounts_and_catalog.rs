//! Accounts, sports, events and participants

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // 1. accounts (mirror of the auth system's identities)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(uuid(Accounts::Id).primary_key())
                    .col(string_len(Accounts::Username, 150).unique_key())
                    .col(
                        timestamp_with_time_zone(Accounts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 2. sports
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Sports::Table)
                    .if_not_exists()
                    .col(uuid(Sports::Id).primary_key())
                    .col(string_len(Sports::Name, 100))
                    .col(text(Sports::Rules))
                    .col(
                        timestamp_with_time_zone(Sports::EditedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string_len_null(Sports::Icon, 100))
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. events
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(uuid(Events::Id).primary_key())
                    .col(string_len(Events::Name, 100))
                    .col(timestamp_with_time_zone(Events::StartsAt))
                    .col(timestamp_with_time_zone(Events::EndsAt))
                    .col(string_len(Events::Location, 255))
                    .col(
                        string_len(Events::Status, 10)
                            .default("upcoming"),
                    )
                    .col(uuid(Events::OrganizerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_organizer_id")
                            .from(Events::Table, Events::OrganizerId)
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
                    .name("idx_events_organizer_id")
                    .table(Events::Table)
                    .col(Events::OrganizerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_status")
                    .table(Events::Table)
                    .col(Events::Status)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 4. sports_events (one-to-one refinement of events)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(SportsEvents::Table)
                    .if_not_exists()
                    .col(uuid(SportsEvents::EventId).primary_key())
                    .col(uuid(SportsEvents::SportId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sports_events_event_id")
                            .from(SportsEvents::Table, SportsEvents::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sports_events_sport_id")
                            .from(SportsEvents::Table, SportsEvents::SportId)
                            .to(Sports::Table, Sports::Id)
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
                    .name("idx_sports_events_sport_id")
                    .table(SportsEvents::Table)
                    .col(SportsEvents::SportId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 5. participants
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(uuid(Participants::Id).primary_key())
                    .col(uuid(Participants::AccountId))
                    .col(string_len(Participants::Role, 10))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participants_account_id")
                            .from(Participants::Table, Participants::AccountId)
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
                    .name("idx_participants_account_id")
                    .table(Participants::Table)
                    .col(Participants::AccountId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 6. stored_files
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(StoredFiles::Table)
                    .if_not_exists()
                    .col(uuid(StoredFiles::Id).primary_key())
                    .col(uuid(StoredFiles::OwnerId))
                    .col(string_len(StoredFiles::Path, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stored_files_owner_id")
                            .from(StoredFiles::Table, StoredFiles::OwnerId)
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
                    .name("idx_stored_files_owner_id")
                    .table(StoredFiles::Table)
                    .col(StoredFiles::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order (respecting foreign keys)
        manager
            .drop_table(Table::drop().table(StoredFiles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Participants::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SportsEvents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sports::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
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
    Username,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sports {
    Table,
    Id,
    Name,
    Rules,
    EditedAt,
    Icon,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Name,
    StartsAt,
    EndsAt,
    Location,
    Status,
    OrganizerId,
}

#[derive(DeriveIden)]
enum SportsEvents {
    Table,
    EventId,
    SportId,
}

#[derive(DeriveIden)]
enum Participants {
    Table,
    Id,
    AccountId,
    Role,
}

#[derive(DeriveIden)]
enum StoredFiles {
    Table,
    Id,
    OwnerId,
    Path,
}
