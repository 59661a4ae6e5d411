use proptest::prelude::*;
use text_redact::{redact, Redactor, Term, TermOrder, TermSet, MARKER};

fn set(raw: &[&str]) -> TermSet {
    raw.iter().filter_map(|t| Term::new(t)).collect()
}

// Characters that never occur in the marker, so substitutions cannot create
// new occurrences of a term.
const SAFE: &str = "[.*+?()|^$\\\\{}0-9xyz -]";

fn safe_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("{}{{0,40}}", SAFE)).unwrap()
}

fn safe_term() -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[.*+?()|^$\\\\{{}}0-9xyz-]{}{{0,6}}", SAFE)).unwrap()
}

proptest! {
    #[test]
    fn empty_term_set_is_identity(text in any::<String>()) {
        prop_assert_eq!(redact(&text, &TermSet::default()).unwrap(), text);
    }

    #[test]
    fn no_term_occurrence_survives(
        terms in proptest::collection::vec(safe_term(), 1..4),
        text in safe_text(),
    ) {
        let term_set: TermSet = terms.iter().filter_map(|t| Term::new(t)).collect();
        let output = redact(&text, &term_set).unwrap().to_lowercase();
        for term in term_set.iter() {
            prop_assert!(!output.contains(&term.as_str().to_lowercase()));
        }
    }

    #[test]
    fn embedded_term_is_matched_literally(
        term in safe_term(),
        prefix in safe_text(),
        suffix in safe_text(),
    ) {
        let term_set = set(&[term.as_str()]);
        prop_assume!(!term_set.is_empty());
        let text = format!("{}{}{}", prefix, term, suffix);
        prop_assert!(redact(&text, &term_set).unwrap().contains(MARKER));
    }

    #[test]
    fn single_safe_term_is_idempotent(term in safe_term(), text in safe_text()) {
        let term_set = set(&[term.as_str()]);
        let redactor = Redactor::new(&term_set).unwrap();
        let once = redactor.redact(&text);
        prop_assert_eq!(redactor.redact(&once), once.clone());
    }

    #[test]
    fn non_overlapping_term_set_is_idempotent(
        terms in proptest::collection::vec("[.*+?()|^$\\\\{}0-9xyz-]{3}", 2..5),
        text in safe_text(),
    ) {
        let lowered: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
        for (i, a) in lowered.iter().enumerate() {
            for (j, b) in lowered.iter().enumerate() {
                prop_assume!(i == j || !a.contains(b.as_str()));
            }
        }

        let term_set: TermSet = terms.iter().filter_map(|t| Term::new(t)).collect();
        let redactor = Redactor::new(&term_set).unwrap();
        let once = redactor.redact(&text);
        prop_assert_eq!(redactor.redact(&once), once.clone());
    }

    #[test]
    fn case_variants_are_all_redacted(word in "[a-zA-Z]{1,12}") {
        let redactor = Redactor::new(&set(&[word.as_str()])).unwrap();
        prop_assert_eq!(redactor.redact(&word.to_uppercase()), MARKER);
        prop_assert_eq!(redactor.redact(&word.to_lowercase()), MARKER);
    }

    #[test]
    fn every_match_consumes_input(term in safe_term(), text in safe_text()) {
        let redactor = Redactor::new(&set(&[term.as_str()])).unwrap();
        let (output, count) = redactor.redact_counted(&text);
        let removed = text.len() + count * MARKER.len() - output.len();
        prop_assert!(removed >= count);
    }
}

#[test]
fn metacharacter_terms_do_not_act_as_patterns() {
    let terms = set(&["a.b*c"]);
    assert_eq!(redact("see a.b*c here", &terms).unwrap(), "see [REDACTED] here");
    assert_eq!(redact("see aXbYYc here", &terms).unwrap(), "see aXbYYc here");
    assert_eq!(redact("see abbbc here", &terms).unwrap(), "see abbbc here");
}

#[test]
fn phone_number_term_is_literal() {
    let terms = set(&["(555) 123-4567"]);
    assert_eq!(
        redact("tel: (555) 123-4567.", &terms).unwrap(),
        "tel: [REDACTED]."
    );
    assert_eq!(redact("tel: 555 123-4567.", &terms).unwrap(), "tel: 555 123-4567.");
}

#[test]
fn confidential_matches_every_casing() {
    let terms = set(&["Confidential"]);
    for text in ["CONFIDENTIAL", "confidential", "Confidential"] {
        assert_eq!(redact(text, &terms).unwrap(), MARKER);
    }
}

#[test]
fn overlap_resolution_depends_on_order() {
    let listed = set(&["Account", "Account Number"]);
    let text = "Account Number 12 / account";

    assert_eq!(
        redact(text, &listed.ordered(TermOrder::AsListed)).unwrap(),
        "[REDACTED] Number 12 / [REDACTED]"
    );
    assert_eq!(
        redact(text, &listed.ordered(TermOrder::LongestFirst)).unwrap(),
        "[REDACTED] 12 / [REDACTED]"
    );
}

#[test]
fn later_term_may_rewrite_marker_text() {
    // sequential application: "red" matches inside the earlier marker
    let terms = set(&["token", "red"]);
    assert_eq!(redact("token", &terms).unwrap(), "[[REDACTED]ACTED]");
}

#[test]
fn idempotence_fails_for_marker_matching_terms() {
    let terms = set(&["acted"]);
    let once = redact("redacted", &terms).unwrap();
    let twice = redact(&once, &terms).unwrap();
    assert_eq!(once, "red[REDACTED]");
    assert_ne!(once, twice);
}
