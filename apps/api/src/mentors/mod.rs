// Mentor discovery: loads mentor profiles and ranks them against a student's filters.

pub mod handlers;
pub mod store;
