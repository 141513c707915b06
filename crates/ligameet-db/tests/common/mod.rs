//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use ligameet_db::entities::{account, event, sport, sport_match, team};
use ligameet_db::store::{NewEvent, NewMatch, NewSport, NewTeam};
use ligameet_db::{connect, migrate, FixedClock, Store};

/// Reference instant the fixed clock starts at
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap()
}

/// Migrated in-memory database behind a store with a fixed clock
pub async fn setup_test_store() -> (Store, Arc<FixedClock>) {
    let db = connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    migrate(&db).await.expect("Failed to run migrations");

    let clock = Arc::new(FixedClock::new(t0()));
    let store = Store::with_clock(db, clock.clone());
    (store, clock)
}

pub async fn account(store: &Store, username: &str) -> account::Model {
    store
        .create_account(username)
        .await
        .expect("Failed to create account")
}

pub async fn volleyball(store: &Store) -> sport::Model {
    store
        .create_sport(NewSport {
            name: "Volleyball".to_string(),
            rules: "Best of five sets, rally scoring to 25.".to_string(),
            icon: Some("sports_icon/volleyball.png".to_string()),
        })
        .await
        .expect("Failed to create sport")
}

pub async fn team(store: &Store, name: &str, sport_id: uuid::Uuid, coach_id: uuid::Uuid) -> team::Model {
    store
        .create_team(NewTeam {
            name: name.to_string(),
            team_type: "senior".to_string(),
            sport_id,
            coach_id,
        })
        .await
        .expect("Failed to create team")
}

pub async fn spring_cup(store: &Store, organizer_id: uuid::Uuid) -> event::Model {
    store
        .create_event(NewEvent {
            name: "Spring Cup".to_string(),
            starts_at: Utc.with_ymd_and_hms(2025, 4, 12, 8, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2025, 4, 12, 8, 0, 0).unwrap() + Duration::days(2),
            location: "Municipal Sports Hall".to_string(),
            organizer_id,
            ..Default::default()
        })
        .await
        .expect("Failed to create event")
}

pub async fn official_match(store: &Store, team_id: uuid::Uuid) -> sport_match::Model {
    store
        .create_match(NewMatch {
            match_type: "official".to_string(),
            category: "senior".to_string(),
            played_at: Utc.with_ymd_and_hms(2025, 4, 12, 10, 0, 0).unwrap(),
            status: "scheduled".to_string(),
            team_id,
        })
        .await
        .expect("Failed to create match")
}
