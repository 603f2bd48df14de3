use super::*;

#[test]
fn open_shows_exactly_one_message() {
    let mut notice = GameOverNotice::new();
    assert!(!notice.is_open());

    notice.open("Checkmate!");
    assert!(notice.is_open());
    assert_eq!(notice.message(), Some("Checkmate!"));
}

#[test]
fn close_removes_the_message() {
    let mut notice = GameOverNotice::new();
    notice.open("Draw!");
    notice.close();
    assert!(!notice.is_open());
    assert_eq!(notice.message(), None);
}

#[test]
fn a_duplicate_open_replaces_rather_than_stacks() {
    let mut notice = GameOverNotice::new();
    notice.open("Checkmate!");
    notice.open("Draw!");
    assert_eq!(notice.message(), Some("Draw!"));

    notice.close();
    assert_eq!(notice.message(), None, "one close clears the single message");
}
