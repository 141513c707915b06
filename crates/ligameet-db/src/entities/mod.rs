//! Database entities

pub mod account;
pub mod event;
pub mod join_request;
pub mod participant;
pub mod payment;
pub mod sport;
pub mod sport_match;
pub mod sports_event;
pub mod stored_file;
pub mod subscription;
pub mod team;
pub mod team_event;
pub mod team_match;
pub mod team_participant;
pub mod team_player;
pub mod team_registration_fee;
pub mod transaction;
pub mod user_match;
pub mod user_registration_fee;
pub mod volleyball_stats;
pub mod wallet;

pub use event::EventStatus;
pub use join_request::JoinRequestStatus;
pub use participant::ParticipantRole;
pub use team_player::PlayerStatus;

pub mod prelude {
    pub use super::account::Entity as Account;
    pub use super::event::Entity as Event;
    pub use super::join_request::Entity as JoinRequest;
    pub use super::participant::Entity as Participant;
    pub use super::payment::Entity as Payment;
    pub use super::sport::Entity as Sport;
    pub use super::sport_match::Entity as Match;
    pub use super::sports_event::Entity as SportsEvent;
    pub use super::stored_file::Entity as StoredFile;
    pub use super::subscription::Entity as Subscription;
    pub use super::team::Entity as Team;
    pub use super::team_event::Entity as TeamEvent;
    pub use super::team_match::Entity as TeamMatch;
    pub use super::team_participant::Entity as TeamParticipant;
    pub use super::team_player::Entity as TeamPlayer;
    pub use super::team_registration_fee::Entity as TeamRegistrationFee;
    pub use super::transaction::Entity as Transaction;
    pub use super::user_match::Entity as UserMatch;
    pub use super::user_registration_fee::Entity as UserRegistrationFee;
    pub use super::volleyball_stats::Entity as VolleyballStats;
    pub use super::wallet::Entity as Wallet;
}
