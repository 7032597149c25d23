use super::*;

#[test]
fn accept_all_grants_everything() {
    let prefs = ConsentPrefs::accept_all();
    assert!(prefs.necessary && prefs.analytics && prefs.marketing);
}

#[test]
fn essential_only_grants_only_necessary() {
    let prefs = ConsentPrefs::essential_only();
    assert!(prefs.necessary);
    assert!(!prefs.analytics);
    assert!(!prefs.marketing);
}

#[test]
fn stored_form_roundtrips() {
    let stored = to_stored(ConsentPrefs::accept_all());
    assert_eq!(from_stored(&stored), Some(ConsentPrefs::accept_all()));
}

#[test]
fn stored_form_is_the_documented_shape() {
    let stored = to_stored(ConsentPrefs::essential_only());
    assert_eq!(stored, r#"{"necessary":true,"analytics":false,"marketing":false}"#);
}

#[test]
fn garbage_reads_as_no_decision() {
    assert_eq!(from_stored("definitely not json"), None);
    assert_eq!(from_stored(""), None);
}
