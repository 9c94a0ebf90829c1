use rendezvous::dialogue::context::Slot;
use rendezvous::grammar::{Grammar, Polarity};

#[test]
fn test_person_tokens_resolve_to_full_names() {
    let grammar = Grammar::new();
    assert_eq!(grammar.person("vlad"), Some("Vladislav Maraev"));
    assert_eq!(grammar.person("aya"), Some("Nayat Astaiza Soriano"));
    assert_eq!(grammar.person("victoria"), Some("Victoria Daniilidou"));
    assert_eq!(grammar.person("hank"), Some("Hank Best"));
    assert_eq!(grammar.person("emma"), Some("Emma Katz"));
    assert_eq!(grammar.person("rasputin"), None);
}

#[test]
fn test_lookups_fold_case() {
    let grammar = Grammar::new();
    assert_eq!(grammar.person("VLAD"), Some("Vladislav Maraev"));
    assert_eq!(grammar.person("Hank"), Some("Hank Best"));
    assert_eq!(grammar.day("Monday"), Some("Monday"));
    assert_eq!(grammar.answer("YES"), Some(Polarity::Positive));
}

#[test]
fn test_days_are_weekdays_only() {
    let grammar = Grammar::new();
    assert_eq!(grammar.day("friday"), Some("Friday"));
    assert_eq!(grammar.day("saturday"), None);
    assert_eq!(grammar.day("sunday"), None);
}

#[test]
fn test_locations_resolve_to_display_names() {
    let grammar = Grammar::new();
    assert_eq!(grammar.location("lab"), Some("the lab"));
    assert_eq!(grammar.location("university"), Some("the university offices"));
    assert_eq!(
        grammar.location("restaurant"),
        Some("the university restaurant nackrosen")
    );
    assert_eq!(grammar.location("moon"), None);
}

#[test]
fn test_weeks_accept_one_through_twenty() {
    let grammar = Grammar::new();
    assert_eq!(grammar.week("1"), Some("Week 1"));
    assert_eq!(grammar.week("20"), Some("Week 20"));
    assert_eq!(grammar.week("0"), None);
    assert_eq!(grammar.week("21"), None);
    assert_eq!(grammar.week("next"), None);
}

#[test]
fn test_times_are_clock_hours() {
    let grammar = Grammar::new();
    assert_eq!(grammar.time("1"), Some("1:00"));
    assert_eq!(grammar.time("8"), Some("8:00"));
    assert_eq!(grammar.time("12"), Some("12:00"));
    assert_eq!(grammar.time("0"), None);
    assert_eq!(grammar.time("13"), None);
}

#[test]
fn test_durations_have_display_forms() {
    let grammar = Grammar::new();
    assert_eq!(grammar.duration("15"), Some("15 minutes"));
    assert_eq!(grammar.duration("30"), Some("half an hour"));
    assert_eq!(grammar.duration("45"), Some("45 minutes"));
    assert_eq!(grammar.duration("60"), None);
}

#[test]
fn test_answers_classify_by_polarity() {
    let grammar = Grammar::new();
    let positives = ["yes", "yeah", "ofcourse", "definitely", "affermative", "uhu", "positive"];
    for token in positives {
        assert_eq!(
            grammar.answer(token),
            Some(Polarity::Positive),
            "{token:?} should read as a yes"
        );
    }
    for token in ["no", "noway", "never", "not", "negative"] {
        assert_eq!(
            grammar.answer(token),
            Some(Polarity::Negative),
            "{token:?} should read as a no"
        );
    }
    assert_eq!(grammar.answer("blue"), None);
    assert_eq!(grammar.answer(""), None);
}

#[test]
fn test_canonical_dispatches_by_slot() {
    let grammar = Grammar::new();
    assert_eq!(grammar.canonical(Slot::Person, "vlad"), Some("Vladislav Maraev"));
    assert_eq!(grammar.canonical(Slot::Week, "3"), Some("Week 3"));
    assert_eq!(grammar.canonical(Slot::Duration, "30"), Some("half an hour"));
    assert_eq!(grammar.canonical(Slot::Answer, "uhu"), Some("positive"));
    assert_eq!(grammar.canonical(Slot::Answer, "noway"), Some("negative"));

    // the families do not bleed into each other
    assert_eq!(grammar.canonical(Slot::Person, "monday"), None);
    assert_eq!(grammar.canonical(Slot::Day, "vlad"), None);
    assert_eq!(grammar.canonical(Slot::Week, "30"), None);
    assert_eq!(grammar.canonical(Slot::Time, "15"), None);
}
