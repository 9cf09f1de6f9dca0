use adfilter_dns_domain::{DnsDecision, RecordType, ServerLifecycleState};
use std::net::Ipv4Addr;

#[test]
fn test_blocked_decision_has_no_address() {
    assert!(DnsDecision::Blocked.is_blocked());
    assert_eq!(DnsDecision::Blocked.address(), None);
}

#[test]
fn test_allowed_decision_carries_address() {
    let decision = DnsDecision::Allowed(Ipv4Addr::LOCALHOST);
    assert!(!decision.is_blocked());
    assert_eq!(decision.address(), Some(Ipv4Addr::LOCALHOST));
}

#[test]
fn test_record_type_codes() {
    assert_eq!(RecordType::from_u16(1), Some(RecordType::A));
    assert_eq!(RecordType::from_u16(28), Some(RecordType::AAAA));
    assert_eq!(RecordType::from_u16(4242), None);
    assert_eq!(RecordType::HTTPS.as_str(), "HTTPS");
    assert_eq!(RecordType::MX.to_string(), "MX");
}

#[test]
fn test_lifecycle_state_running_and_display() {
    assert_eq!(ServerLifecycleState::NotStarted.to_string(), "not_started");
    assert_eq!(ServerLifecycleState::Stopped.to_string(), "stopped");
    assert!(ServerLifecycleState::Running.is_running());
    assert!(!ServerLifecycleState::Stopped.is_running());
}
