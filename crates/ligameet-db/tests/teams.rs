//! Integration tests for team membership and join requests

mod common;

use chrono::Duration;
use common::*;
use ligameet_db::entities::{join_request, team, JoinRequestStatus, ParticipantRole, PlayerStatus};
use ligameet_db::StoreError;
use uuid::Uuid;

fn usernames(accounts: &[ligameet_db::entities::account::Model]) -> Vec<&str> {
    accounts.iter().map(|a| a.username.as_str()).collect()
}

#[tokio::test]
async fn test_approve_player_moves_pending_to_confirmed() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;

    store.add_pending_player(eagles.id, u1.id).await.unwrap();
    assert_eq!(usernames(&store.pending_players(eagles.id).await.unwrap()), vec!["u1"]);
    assert!(store.confirmed_players(eagles.id).await.unwrap().is_empty());

    let moved = store.approve_player(eagles.id, u1.id).await.unwrap();
    assert!(moved);

    assert!(store.pending_players(eagles.id).await.unwrap().is_empty());
    assert_eq!(usernames(&store.confirmed_players(eagles.id).await.unwrap()), vec!["u1"]);
}

#[tokio::test]
async fn test_approve_player_not_pending_is_noop() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;
    let u2 = account(&store, "u2").await;

    store.add_confirmed_player(eagles.id, u1.id).await.unwrap();

    // Neither pending nor confirmed
    assert!(!store.approve_player(eagles.id, u2.id).await.unwrap());
    // Already confirmed
    assert!(!store.approve_player(eagles.id, u1.id).await.unwrap());

    assert!(store.pending_players(eagles.id).await.unwrap().is_empty());
    assert_eq!(usernames(&store.confirmed_players(eagles.id).await.unwrap()), vec!["u1"]);
}

#[tokio::test]
async fn test_approve_player_unknown_team_is_not_found() {
    let (store, _) = setup_test_store().await;

    let u1 = account(&store, "u1").await;
    let err = store.approve_player(Uuid::new_v4(), u1.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { ref entity, .. } if entity == "teams"));
}

#[tokio::test]
async fn test_approve_player_only_touches_its_team() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let hawks = team(&store, "Hawks", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;

    store.add_pending_player(eagles.id, u1.id).await.unwrap();
    store.add_pending_player(hawks.id, u1.id).await.unwrap();

    assert!(store.approve_player(eagles.id, u1.id).await.unwrap());

    assert_eq!(usernames(&store.pending_players(hawks.id).await.unwrap()), vec!["u1"]);
    assert!(store.confirmed_players(hawks.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_adding_player_twice_keeps_one_row() {
    let (store, clock) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;

    let first = store.add_pending_player(eagles.id, u1.id).await.unwrap();
    clock.advance(Duration::minutes(5));
    let second = store.add_pending_player(eagles.id, u1.id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.added_at, t0());
    assert_eq!(second.status, PlayerStatus::Pending);
    assert_eq!(store.pending_players(eagles.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_player() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;

    store.add_confirmed_player(eagles.id, u1.id).await.unwrap();

    assert!(!store
        .remove_player(eagles.id, u1.id, PlayerStatus::Pending)
        .await
        .unwrap());
    assert!(store
        .remove_player(eagles.id, u1.id, PlayerStatus::Confirmed)
        .await
        .unwrap());
    assert!(store.confirmed_players(eagles.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleting_team_removes_memberships() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;

    store.add_pending_player(eagles.id, u1.id).await.unwrap();
    store.create_join_request(u1.id, eagles.id).await.unwrap();

    store.delete::<team::Entity>(eagles.id).await.unwrap();

    assert!(store.pending_players(eagles.id).await.unwrap().is_empty());
    assert!(store.list::<join_request::Entity>().await.unwrap().is_empty());
    // The account itself stays
    assert!(store.find_account_by_username("u1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_captain_and_roster() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;
    let u2 = account(&store, "u2").await;
    let participant = store
        .create_participant(u1.id, ParticipantRole::Player)
        .await
        .unwrap();

    let member = store
        .add_team_participant(eagles.id, participant.id, false)
        .await
        .unwrap();
    let member = store.set_captain(member.id, true).await.unwrap();
    assert!(member.is_captain);

    store.add_confirmed_player(eagles.id, u1.id).await.unwrap();
    store.add_pending_player(eagles.id, u2.id).await.unwrap();
    store.set_team_score(eagles.id, 12).await.unwrap();

    let roster = store.team_roster(eagles.id).await.unwrap();
    assert_eq!(roster.team.score, 12);
    assert_eq!(usernames(&roster.confirmed), vec!["u1"]);
    assert_eq!(usernames(&roster.pending), vec!["u2"]);
    assert_eq!(roster.participants.len(), 1);
    assert!(roster.participants[0].is_captain);

    let json = serde_json::to_value(&roster).unwrap();
    assert_eq!(json["team"]["name"], "Eagles");
    assert_eq!(json["confirmed"][0]["username"], "u1");
    assert_eq!(json["participants"][0]["is_captain"], true);
}

#[tokio::test]
async fn test_join_request_approve_and_reject_timestamps() {
    let (store, clock) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;
    let u2 = account(&store, "u2").await;

    let first = store.create_join_request(u1.id, eagles.id).await.unwrap();
    assert_eq!(first.status, JoinRequestStatus::Pending);
    assert_eq!(first.requested_at, t0());
    assert_eq!(first.approved_at, None);
    assert_eq!(first.rejected_at, None);

    clock.advance(Duration::minutes(1));
    let second = store.create_join_request(u2.id, eagles.id).await.unwrap();

    clock.advance(Duration::hours(1));
    let approved = store.approve_join_request(first.id).await.unwrap();
    assert_eq!(approved.status, JoinRequestStatus::Approved);
    assert_eq!(approved.approved_at, Some(t0() + Duration::minutes(61)));
    assert_eq!(approved.rejected_at, None);
    assert_eq!(approved.requested_at, t0());

    let rejected = store.reject_join_request(second.id).await.unwrap();
    assert_eq!(rejected.status, JoinRequestStatus::Rejected);
    assert_eq!(rejected.rejected_at, Some(t0() + Duration::minutes(61)));
    assert_eq!(rejected.approved_at, None);

    let listed = store.join_requests_for_team(eagles.id).await.unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_join_request_approval_leaves_membership_alone() {
    let (store, _) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;

    let request = store.create_join_request(u1.id, eagles.id).await.unwrap();
    store.approve_join_request(request.id).await.unwrap();

    assert!(store.pending_players(eagles.id).await.unwrap().is_empty());
    assert!(store.confirmed_players(eagles.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_join_request_last_decision_wins() {
    let (store, clock) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;

    let request = store.create_join_request(u1.id, eagles.id).await.unwrap();

    clock.advance(Duration::minutes(10));
    store.approve_join_request(request.id).await.unwrap();
    clock.advance(Duration::minutes(10));
    let request = store.reject_join_request(request.id).await.unwrap();

    assert_eq!(request.status, JoinRequestStatus::Rejected);
    assert_eq!(request.approved_at, Some(t0() + Duration::minutes(10)));
    assert_eq!(request.rejected_at, Some(t0() + Duration::minutes(20)));

    let stored = store.find::<join_request::Entity>(request.id).await.unwrap();
    assert_eq!(stored, request);
}

#[tokio::test]
async fn test_join_request_unknown_id_is_not_found() {
    let (store, _) = setup_test_store().await;

    let missing = Uuid::new_v4();
    assert!(store.approve_join_request(missing).await.unwrap_err().is_not_found());
    assert!(store.reject_join_request(missing).await.unwrap_err().is_not_found());
    assert!(store.accept_join_request(missing).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_accept_join_request_confirms_requester() {
    let (store, clock) = setup_test_store().await;

    let coach = account(&store, "coach").await;
    let sport = volleyball(&store).await;
    let eagles = team(&store, "Eagles", sport.id, coach.id).await;
    let u1 = account(&store, "u1").await;

    store.add_pending_player(eagles.id, u1.id).await.unwrap();
    let request = store.create_join_request(u1.id, eagles.id).await.unwrap();

    clock.advance(Duration::hours(2));
    let request = store.accept_join_request(request.id).await.unwrap();

    assert_eq!(request.status, JoinRequestStatus::Approved);
    assert_eq!(request.approved_at, Some(t0() + Duration::hours(2)));
    assert!(store.pending_players(eagles.id).await.unwrap().is_empty());
    assert_eq!(usernames(&store.confirmed_players(eagles.id).await.unwrap()), vec!["u1"]);
}
