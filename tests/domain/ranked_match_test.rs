use propusk::domain::RankedMatch;

#[test]
fn given_entries_when_displaying_then_they_are_joined_with_pipes() {
    let matches = RankedMatch::new(vec!["кот".to_string(), "кит".to_string()]);

    assert_eq!(matches.display(), "кот | кит");
    assert_eq!(format!("{matches}"), matches.display());
}

#[test]
fn given_no_entries_when_displaying_then_string_is_empty() {
    let matches = RankedMatch::empty();

    assert!(matches.is_empty());
    assert_eq!(matches.display(), "");
}
