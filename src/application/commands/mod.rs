pub mod moderation;
pub mod traffic;
