pub mod conversation;
pub mod mentor;
