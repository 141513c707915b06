//! Teams, player membership, team participants, team events and join requests

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // 1. teams
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(uuid(Teams::Id).primary_key())
                    .col(string_len(Teams::Name, 100))
                    .col(string_len(Teams::TeamType, 50))
                    .col(integer(Teams::Score).default(0))
                    .col(uuid(Teams::SportId))
                    .col(uuid(Teams::CoachId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_sport_id")
                            .from(Teams::Table, Teams::SportId)
                            .to(Sports::Table, Sports::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_coach_id")
                            .from(Teams::Table, Teams::CoachId)
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
                    .name("idx_teams_sport_id")
                    .table(Teams::Table)
                    .col(Teams::SportId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teams_coach_id")
                    .table(Teams::Table)
                    .col(Teams::CoachId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 2. team_players junction table (confirmed + pending sets)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(TeamPlayers::Table)
                    .if_not_exists()
                    .col(uuid(TeamPlayers::Id).primary_key())
                    .col(uuid(TeamPlayers::TeamId))
                    .col(uuid(TeamPlayers::AccountId))
                    .col(string_len(TeamPlayers::Status, 16))
                    .col(
                        timestamp_with_time_zone(TeamPlayers::AddedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_team_id")
                            .from(TeamPlayers::Table, TeamPlayers::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_account_id")
                            .from(TeamPlayers::Table, TeamPlayers::AccountId)
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
                    .name("idx_team_players_unique")
                    .table(TeamPlayers::Table)
                    .col(TeamPlayers::TeamId)
                    .col(TeamPlayers::AccountId)
                    .col(TeamPlayers::Status)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_players_account_id")
                    .table(TeamPlayers::Table)
                    .col(TeamPlayers::AccountId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. team_participants
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(TeamParticipants::Table)
                    .if_not_exists()
                    .col(uuid(TeamParticipants::Id).primary_key())
                    .col(
                        boolean(TeamParticipants::IsCaptain)
                            .default(false),
                    )
                    .col(uuid(TeamParticipants::ParticipantId))
                    .col(uuid(TeamParticipants::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_participants_participant_id")
                            .from(TeamParticipants::Table, TeamParticipants::ParticipantId)
                            .to(Participants::Table, Participants::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_participants_team_id")
                            .from(TeamParticipants::Table, TeamParticipants::TeamId)
                            .to(Teams::Table, Teams::Id)
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
                    .name("unique_team_participant")
                    .table(TeamParticipants::Table)
                    .col(TeamParticipants::ParticipantId)
                    .col(TeamParticipants::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_participants_team_id")
                    .table(TeamParticipants::Table)
                    .col(TeamParticipants::TeamId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 4. team_events
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(TeamEvents::Table)
                    .if_not_exists()
                    .col(uuid(TeamEvents::Id).primary_key())
                    .col(uuid(TeamEvents::TeamId))
                    .col(uuid(TeamEvents::EventId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_events_team_id")
                            .from(TeamEvents::Table, TeamEvents::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_events_event_id")
                            .from(TeamEvents::Table, TeamEvents::EventId)
                            .to(Events::Table, Events::Id)
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
                    .name("unique_team_event")
                    .table(TeamEvents::Table)
                    .col(TeamEvents::TeamId)
                    .col(TeamEvents::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_events_event_id")
                    .table(TeamEvents::Table)
                    .col(TeamEvents::EventId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 5. join_requests
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(JoinRequests::Table)
                    .if_not_exists()
                    .col(uuid(JoinRequests::Id).primary_key())
                    .col(uuid(JoinRequests::AccountId))
                    .col(uuid(JoinRequests::TeamId))
                    .col(
                        string_len(JoinRequests::Status, 20)
                            .default("pending"),
                    )
                    .col(
                        timestamp_with_time_zone(JoinRequests::RequestedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(JoinRequests::ApprovedAt))
                    .col(timestamp_with_time_zone_null(JoinRequests::RejectedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_requests_account_id")
                            .from(JoinRequests::Table, JoinRequests::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_requests_team_id")
                            .from(JoinRequests::Table, JoinRequests::TeamId)
                            .to(Teams::Table, Teams::Id)
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
                    .name("idx_join_requests_team_id")
                    .table(JoinRequests::Table)
                    .col(JoinRequests::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_join_requests_status")
                    .table(JoinRequests::Table)
                    .col(JoinRequests::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JoinRequests::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeamEvents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeamParticipants::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeamPlayers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
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
enum Sports {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Participants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    Name,
    TeamType,
    Score,
    SportId,
    CoachId,
}

#[derive(DeriveIden)]
enum TeamPlayers {
    Table,
    Id,
    TeamId,
    AccountId,
    Status,
    AddedAt,
}

#[derive(DeriveIden)]
enum TeamParticipants {
    Table,
    Id,
    IsCaptain,
    ParticipantId,
    TeamId,
}

#[derive(DeriveIden)]
enum TeamEvents {
    Table,
    Id,
    TeamId,
    EventId,
}

#[derive(DeriveIden)]
enum JoinRequests {
    Table,
    Id,
    AccountId,
    TeamId,
    Status,
    RequestedAt,
    ApprovedAt,
    RejectedAt,
}
