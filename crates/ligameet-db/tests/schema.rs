//! Integration tests for the schema: migrations, generic CRUD, uniqueness,
//! referential integrity and cascading deletes
//!
//! Runs against a real SQLite in-memory database

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::*;
use ligameet_db::entities::{
    account, event, payment, sport, sport_match, team, team_match, team_registration_fee,
    transaction, user_match, user_registration_fee, volleyball_stats, EventStatus,
    ParticipantRole,
};
use ligameet_db::store::{NewEvent, NewPayment, NewSport, NewTeam, NewTransaction, SportEdit};
use ligameet_db::{connect, migrate, StoreError};
use rust_decimal_macros::dec;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

#[tokio::test]
async fn test_database_connection() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    let backend = db.get_database_backend();
    assert!(matches!(backend, sea_orm::DatabaseBackend::Sqlite));
}

#[tokio::test]
async fn test_migrations_run_successfully() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    let result = migrate(&db).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    migrate(&db).await.expect("First run failed");
    migrate(&db).await.expect("Second run failed");
}

#[tokio::test]
async fn test_find_list_delete() {
    let (store, _) = setup_test_store().await;

    let alice = account(&store, "alice").await;
    account(&store, "bob").await;

    let found = store.find::<account::Entity>(alice.id).await.unwrap();
    assert_eq!(found, alice);
    assert_eq!(found.to_string(), "alice");
    assert_eq!(found.created_at, t0());

    let all = store.list::<account::Entity>().await.unwrap();
    assert_eq!(all.len(), 2);

    store.delete::<account::Entity>(alice.id).await.unwrap();
    let err = store.find::<account::Entity>(alice.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), format!("accounts not found: {}", alice.id));
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let (store, _) = setup_test_store().await;

    let err = store.delete::<team::Entity>(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { ref entity, .. } if entity == "teams"));
}

#[tokio::test]
async fn test_find_account_by_username() {
    let (store, _) = setup_test_store().await;

    let carol = account(&store, "carol").await;

    let found = store.find_account_by_username("carol").await.unwrap();
    assert_eq!(found.map(|a| a.id), Some(carol.id));
    assert!(store.find_account_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let (store, _) = setup_test_store().await;

    account(&store, "dave").await;
    let err = store.create_account("dave").await.unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_sport_edit_stamps_edited_at() {
    let (store, clock) = setup_test_store().await;

    let sport = volleyball(&store).await;
    assert_eq!(sport.edited_at, t0());
    assert_eq!(sport.to_string(), "Volleyball");

    clock.advance(Duration::hours(3));
    let edited = store
        .edit_sport(
            sport.id,
            SportEdit {
                rules: Some("Best of three sets.".to_string()),
                icon: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(edited.name, "Volleyball");
    assert_eq!(edited.rules, "Best of three sets.");
    assert_eq!(edited.icon, None);
    assert_eq!(edited.edited_at, t0() + Duration::hours(3));
}

#[tokio::test]
async fn test_sport_name_too_long_is_invalid() {
    let (store, _) = setup_test_store().await;

    let err = store
        .create_sport(NewSport {
            name: "x".repeat(101),
            rules: String::new(),
            icon: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
}

#[tokio::test]
async fn test_empty_names_are_accepted() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = store
        .create_sport(NewSport {
            name: String::new(),
            rules: String::new(),
            icon: None,
        })
        .await
        .unwrap();
    assert_eq!(sport.name, "");

    let renamed = store
        .edit_sport(
            sport.id,
            SportEdit {
                name: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "");

    let unnamed = store
        .create_team(NewTeam {
            name: String::new(),
            team_type: String::new(),
            sport_id: sport.id,
            coach_id: coach.id,
        })
        .await
        .unwrap();
    assert_eq!(unnamed.name, "");

    let event = store
        .create_event(NewEvent {
            name: String::new(),
            starts_at: t0(),
            ends_at: t0(),
            organizer_id: coach.id,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(event.name, "");
}

#[tokio::test]
async fn test_event_defaults_and_status_changes() {
    let (store, _) = setup_test_store().await;

    let organizer = account(&store, "organizer").await;
    let event = spring_cup(&store, organizer.id).await;
    assert_eq!(event.status, EventStatus::Upcoming);

    let event = store
        .set_event_status(event.id, EventStatus::Ongoing)
        .await
        .unwrap();
    assert_eq!(event.status, EventStatus::Ongoing);

    let stored = store.find::<event::Entity>(event.id).await.unwrap();
    assert_eq!(stored.status, EventStatus::Ongoing);
}

#[tokio::test]
async fn test_event_window_is_validated() {
    let (store, _) = setup_test_store().await;

    let organizer = account(&store, "organizer").await;
    let start = Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap();

    let err = store
        .create_event(NewEvent {
            name: "Backwards Cup".to_string(),
            starts_at: start,
            ends_at: start - Duration::hours(1),
            location: "Nowhere".to_string(),
            organizer_id: organizer.id,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));

    let event = spring_cup(&store, organizer.id).await;
    let err = store
        .reschedule_event(event.id, start, start - Duration::days(1))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));

    let moved = store
        .reschedule_event(event.id, start, start + Duration::days(1))
        .await
        .unwrap();
    assert_eq!(moved.starts_at, start);
    assert_eq!(moved.ends_at, start + Duration::days(1));
}

#[tokio::test]
async fn test_one_sports_event_per_event() {
    let (store, _) = setup_test_store().await;

    let organizer = account(&store, "organizer").await;
    let sport = volleyball(&store).await;
    let event = spring_cup(&store, organizer.id).await;

    assert!(store.sports_event_for(event.id).await.unwrap().is_none());

    store.create_sports_event(event.id, sport.id).await.unwrap();
    let refined = store.sports_event_for(event.id).await.unwrap().unwrap();
    assert_eq!(refined.sport_id, sport.id);

    let err = store
        .create_sports_event(event.id, sport.id)
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_stored_files_by_owner() {
    let (store, _) = setup_test_store().await;

    let owner = account(&store, "owner").await;
    let other = account(&store, "other").await;

    store.create_stored_file(owner.id, "files/roster.pdf").await.unwrap();
    store.create_stored_file(owner.id, "files/fixtures.pdf").await.unwrap();
    store.create_stored_file(other.id, "files/other.pdf").await.unwrap();

    let files = store.files_owned_by(owner.id).await.unwrap();
    let paths: Vec<String> = files.iter().map(|f| f.to_string()).collect();
    assert_eq!(paths, vec!["files/fixtures.pdf", "files/roster.pdf"]);
}

#[tokio::test]
async fn test_missing_reference_is_referential_violation() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let err = store
        .create_team(NewTeam {
            name: "Ghosts".to_string(),
            team_type: "senior".to_string(),
            sport_id: Uuid::new_v4(),
            coach_id: coach.id,
        })
        .await
        .unwrap_err();

    assert!(
        matches!(err, StoreError::ReferentialViolation(_)),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_participant_is_unique_per_team() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let hawks = team(&store, "Hawks", sport.id, coach.id).await;

    let player = account(&store, "player").await;
    let participant = store
        .create_participant(player.id, ParticipantRole::Player)
        .await
        .unwrap();

    store
        .add_team_participant(eagles.id, participant.id, false)
        .await
        .unwrap();

    let err = store
        .add_team_participant(eagles.id, participant.id, true)
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err}");

    // Same participant, different team
    store
        .add_team_participant(hawks.id, participant.id, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_team_is_unique_per_event() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let hawks = team(&store, "Hawks", sport.id, coach.id).await;
    let event = spring_cup(&store, coach.id).await;

    store.register_team_for_event(eagles.id, event.id).await.unwrap();
    let err = store
        .register_team_for_event(eagles.id, event.id)
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err}");

    store.register_team_for_event(hawks.id, event.id).await.unwrap();

    let teams = store.teams_in_event(event.id).await.unwrap();
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Eagles", "Hawks"]);
}

#[tokio::test]
async fn test_team_is_unique_per_match() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let hawks = team(&store, "Hawks", sport.id, coach.id).await;
    let played = official_match(&store, eagles.id).await;

    store.add_team_match(eagles.id, played.id, true).await.unwrap();
    let err = store
        .add_team_match(eagles.id, played.id, false)
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err}");

    store.add_team_match(hawks.id, played.id, false).await.unwrap();
}

#[tokio::test]
async fn test_account_is_unique_per_match() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let hawks = team(&store, "Hawks", sport.id, coach.id).await;
    let first = official_match(&store, eagles.id).await;
    let second = official_match(&store, eagles.id).await;
    let player = account(&store, "player").await;

    store
        .add_user_match(first.id, player.id, eagles.id, true)
        .await
        .unwrap();

    // Switching team does not make a second row for the same match legal
    let err = store
        .add_user_match(first.id, player.id, hawks.id, false)
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err}");

    store
        .add_user_match(second.id, player.id, eagles.id, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deleting_match_cascades() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let player = account(&store, "player").await;
    let participant = store
        .create_participant(player.id, ParticipantRole::Player)
        .await
        .unwrap();
    let played = official_match(&store, eagles.id).await;

    store.add_team_match(eagles.id, played.id, true).await.unwrap();
    let user_match = store
        .add_user_match(played.id, player.id, eagles.id, true)
        .await
        .unwrap();
    store
        .record_volleyball_stats(participant.id, played.id, user_match.id, Default::default())
        .await
        .unwrap();
    let fee = store
        .create_team_registration_fee(eagles.id, played.id, dec!(12.50))
        .await
        .unwrap();
    store.create_user_registration_fee(user_match.id).await.unwrap();

    let wallet = store.create_wallet(coach.id).await.unwrap();
    let payment = store
        .create_payment(NewPayment {
            amount: dec!(12.50),
            wallet_id: wallet.id,
            team_registration_fee_id: Some(fee.id),
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .record_transaction(NewTransaction {
            amount: dec!(12.50),
            payment_id: payment.id,
            account_id: coach.id,
            occurred_at: None,
        })
        .await
        .unwrap();

    store.delete::<sport_match::Entity>(played.id).await.unwrap();

    assert!(store.list::<sport_match::Entity>().await.unwrap().is_empty());
    assert!(store.list::<team_match::Entity>().await.unwrap().is_empty());
    assert!(store.list::<user_match::Entity>().await.unwrap().is_empty());
    assert!(store.list::<volleyball_stats::Entity>().await.unwrap().is_empty());
    assert!(store.list::<team_registration_fee::Entity>().await.unwrap().is_empty());
    assert!(store.list::<user_registration_fee::Entity>().await.unwrap().is_empty());
    assert!(store.list::<payment::Entity>().await.unwrap().is_empty());
    assert!(store.list::<transaction::Entity>().await.unwrap().is_empty());

    // Unrelated rows survive
    assert_eq!(store.list::<team::Entity>().await.unwrap().len(), 1);
    assert_eq!(store.list::<sport::Entity>().await.unwrap().len(), 1);
    assert!(store.find::<ligameet_db::entities::wallet::Entity>(wallet.id).await.is_ok());
}

#[tokio::test]
async fn test_deleting_account_cascades_to_owned_rows() {
    let (store, _) = setup_test_store().await;

    let organizer = account(&store, "organizer").await;
    spring_cup(&store, organizer.id).await;
    store.create_wallet(organizer.id).await.unwrap();
    store
        .create_stored_file(organizer.id, "files/poster.png")
        .await
        .unwrap();

    store.delete::<account::Entity>(organizer.id).await.unwrap();

    assert!(store.list::<event::Entity>().await.unwrap().is_empty());
    assert!(store.wallet_for(organizer.id).await.unwrap().is_none());
    assert!(store.files_owned_by(organizer.id).await.unwrap().is_empty());
}
