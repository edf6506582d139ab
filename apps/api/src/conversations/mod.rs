// Student → mentor conversations: open an existing thread or create one.

pub mod handlers;
pub mod store;
