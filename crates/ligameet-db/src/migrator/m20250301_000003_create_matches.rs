//! Matches, team/user match participation and volleyball statistics

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // 1. matches
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(uuid(Matches::Id).primary_key())
                    .col(string_len(Matches::MatchType, 50))
                    .col(string_len(Matches::Category, 50))
                    .col(integer(Matches::Score).default(0))
                    .col(timestamp_with_time_zone(Matches::PlayedAt))
                    .col(string_len(Matches::Status, 20))
                    .col(uuid(Matches::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team_id")
                            .from(Matches::Table, Matches::TeamId)
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
                    .name("idx_matches_team_id")
                    .table(Matches::Table)
                    .col(Matches::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_matches_played_at")
                    .table(Matches::Table)
                    .col(Matches::PlayedAt)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 2. team_matches
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(TeamMatches::Table)
                    .if_not_exists()
                    .col(uuid(TeamMatches::Id).primary_key())
                    .col(uuid(TeamMatches::TeamId))
                    .col(uuid(TeamMatches::MatchId))
                    .col(boolean(TeamMatches::IsWinner).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_matches_team_id")
                            .from(TeamMatches::Table, TeamMatches::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_matches_match_id")
                            .from(TeamMatches::Table, TeamMatches::MatchId)
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
                    .name("unique_team_match")
                    .table(TeamMatches::Table)
                    .col(TeamMatches::TeamId)
                    .col(TeamMatches::MatchId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_matches_match_id")
                    .table(TeamMatches::Table)
                    .col(TeamMatches::MatchId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. user_matches
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(UserMatches::Table)
                    .if_not_exists()
                    .col(uuid(UserMatches::Id).primary_key())
                    .col(uuid(UserMatches::MatchId))
                    .col(uuid(UserMatches::AccountId))
                    .col(uuid(UserMatches::TeamId))
                    .col(boolean(UserMatches::IsWinner).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_matches_match_id")
                            .from(UserMatches::Table, UserMatches::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_matches_account_id")
                            .from(UserMatches::Table, UserMatches::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_matches_team_id")
                            .from(UserMatches::Table, UserMatches::TeamId)
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
                    .name("unique_user_match")
                    .table(UserMatches::Table)
                    .col(UserMatches::MatchId)
                    .col(UserMatches::AccountId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_matches_account_id")
                    .table(UserMatches::Table)
                    .col(UserMatches::AccountId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 4. volleyball_stats
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(VolleyballStats::Table)
                    .if_not_exists()
                    .col(uuid(VolleyballStats::Id).primary_key())
                    .col(integer(VolleyballStats::Points).default(0))
                    .col(integer(VolleyballStats::Assists).default(0))
                    .col(integer(VolleyballStats::Blocks).default(0))
                    .col(integer(VolleyballStats::Errors).default(0))
                    .col(boolean(VolleyballStats::IsMvp).default(false))
                    .col(integer(VolleyballStats::Sets).default(0))
                    .col(uuid(VolleyballStats::ParticipantId))
                    .col(uuid(VolleyballStats::MatchId))
                    .col(uuid(VolleyballStats::UserMatchId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volleyball_stats_participant_id")
                            .from(VolleyballStats::Table, VolleyballStats::ParticipantId)
                            .to(Participants::Table, Participants::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volleyball_stats_match_id")
                            .from(VolleyballStats::Table, VolleyballStats::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volleyball_stats_user_match_id")
                            .from(VolleyballStats::Table, VolleyballStats::UserMatchId)
                            .to(UserMatches::Table, UserMatches::Id)
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
                    .name("idx_volleyball_stats_match_id")
                    .table(VolleyballStats::Table)
                    .col(VolleyballStats::MatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VolleyballStats::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserMatches::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeamMatches::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
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
enum Participants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
    MatchType,
    Category,
    Score,
    PlayedAt,
    Status,
    TeamId,
}

#[derive(DeriveIden)]
enum TeamMatches {
    Table,
    Id,
    TeamId,
    MatchId,
    IsWinner,
}

#[derive(DeriveIden)]
enum UserMatches {
    Table,
    Id,
    MatchId,
    AccountId,
    TeamId,
    IsWinner,
}

#[derive(DeriveIden)]
enum VolleyballStats {
    Table,
    Id,
    Points,
    Assists,
    Blocks,
    Errors,
    IsMvp,
    Sets,
    ParticipantId,
    MatchId,
    UserMatchId,
}
