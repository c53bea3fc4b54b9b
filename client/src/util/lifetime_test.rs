use super::*;

#[test]
fn new_lifetime_is_active() {
    assert!(ViewLifetime::new().is_active());
    assert!(ViewLifetime::default().is_active());
}

#[test]
fn end_is_observed_by_clones() {
    let lifetime = ViewLifetime::new();
    let task_side = lifetime.clone();
    lifetime.end();
    assert!(!task_side.is_active());
    lifetime.end();
    assert!(!lifetime.is_active());
}

#[test]
fn deliver_runs_while_active() {
    let lifetime = ViewLifetime::new();
    let mut delivered = 0;
    assert!(lifetime.deliver(|| delivered += 1));
    assert_eq!(delivered, 1);
}

#[test]
fn deliver_discards_after_end() {
    let lifetime = ViewLifetime::new();
    let task_side = lifetime.clone();
    lifetime.end();
    let mut delivered = false;
    assert!(!task_side.deliver(|| delivered = true));
    assert!(!delivered);
}
