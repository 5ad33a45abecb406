#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Backend connectivity as reported by the periodic health poll.
///
/// Independent of the per-message `loading` flag: a send may be in flight
/// while the poll runs, since they touch disjoint state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No poll result yet.
    #[default]
    Checking,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    /// The send affordance is withheld only once the backend is known to be
    /// unreachable; an unresolved first poll does not block sending.
    pub fn allows_send(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}
