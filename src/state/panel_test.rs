use super::*;

#[test]
fn visibility_starts_closed() {
    assert_eq!(Visibility::default(), Visibility::Closed);
    assert!(!Visibility::default().is_open());
}

#[test]
fn toggle_flips_state() {
    assert_eq!(Visibility::Closed.toggled(), Visibility::Open);
    assert_eq!(Visibility::Open.toggled(), Visibility::Closed);
}

#[test]
fn double_toggle_returns_to_start() {
    for start in [Visibility::Closed, Visibility::Open] {
        assert_eq!(start.toggled().toggled(), start);
    }
}
