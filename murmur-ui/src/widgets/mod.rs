pub mod empty_state;
pub mod message_card;
pub mod profile_link;
pub mod sidebar;
