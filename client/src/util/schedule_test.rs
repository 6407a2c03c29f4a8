use super::*;

#[test]
fn default_period_is_five_minutes() {
    let scheduler = IntervalScheduler::default();
    assert_eq!(scheduler.period(), Duration::from_secs(300));
    assert!(scheduler.is_visible());
}

#[test]
fn zero_period_is_clamped() {
    assert_eq!(IntervalScheduler::new(Duration::ZERO).period(), Duration::from_secs(1));
}

#[test]
fn toggle_visible_flips_and_reports_new_value() {
    let scheduler = IntervalScheduler::new(Duration::from_secs(10));
    assert!(!scheduler.toggle_visible());
    assert!(!scheduler.is_visible());
    assert!(scheduler.toggle_visible());
    assert!(scheduler.is_visible());
}

#[test]
fn clones_share_visibility() {
    let scheduler = IntervalScheduler::default();
    let handle = scheduler.clone();
    assert!(!handle.toggle_visible());
    assert!(!scheduler.is_visible());
}
