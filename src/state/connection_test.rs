use super::*;

// =============================================================
// ConnectionStatus defaults and send gating
// =============================================================

#[test]
fn default_is_checking() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Checking);
}

#[test]
fn only_disconnected_blocks_sending() {
    assert!(ConnectionStatus::Checking.allows_send());
    assert!(ConnectionStatus::Connected.allows_send());
    assert!(!ConnectionStatus::Disconnected.allows_send());
}
