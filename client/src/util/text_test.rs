use super::*;

#[test]
fn blank_query_matches_everything() {
    assert!(matches_query("Emma Thompson", ""));
    assert!(matches_query("Emma Thompson", "   "));
    assert!(matches_query("", ""));
}

#[test]
fn match_ignores_case_and_padding() {
    assert!(matches_query("Emma Thompson", "thomp"));
    assert!(matches_query("Emma Thompson", "  EMMA "));
    assert!(!matches_query("Emma Thompson", "noah"));
}

#[test]
fn any_matches_checks_each_field() {
    assert!(any_matches(["Noah", "noah.w@example.com", "1002"], "1002"));
    assert!(any_matches(["Noah", "noah.w@example.com", "1002"], "EXAMPLE"));
    assert!(!any_matches(["Noah", "noah.w@example.com", "1002"], "olivia"));
    assert!(any_matches(std::iter::empty(), ""));
}
