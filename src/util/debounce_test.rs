use super::*;

#[test]
fn only_latest_ticket_is_current() {
    let gate = DebounceGate::default();
    let first = gate.arm();
    let second = gate.arm();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn cancel_stales_pending_ticket() {
    let gate = DebounceGate::default();
    let ticket = gate.arm();
    gate.cancel();
    assert!(!gate.is_current(ticket));
}

#[test]
fn clones_share_generation() {
    let gate = DebounceGate::default();
    let other = gate.clone();
    let ticket = gate.arm();
    other.arm();
    assert!(!gate.is_current(ticket));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn runs_inline_without_timer() {
    let seen = Arc::new(AtomicU64::new(0));
    let sink = seen.clone();
    let debounced = debounce(Duration::from_millis(300), move |n: u64| sink.store(n, Ordering::Relaxed));
    debounced(4);
    debounced(7);
    assert_eq!(seen.load(Ordering::Relaxed), 7);
}
