//! Backend REST plumbing: wire types, the API client, and the health poll.

pub mod api;
pub mod health;
pub mod types;
