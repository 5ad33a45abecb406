//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `connection`) so individual components
//! can depend on small focused models. Each model is a plain struct held in
//! an `RwSignal` provided via context; every mutation goes through a named
//! transition method so the state machine is unit-testable without a browser.

pub mod chat;
pub mod connection;
