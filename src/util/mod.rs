//! Small shared utilities: timestamps and the persisted session identity.

pub mod session;
pub mod time;
