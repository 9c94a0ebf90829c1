//! Literal vocabulary data: surface token -> canonical display string.
//!
//! These tables are the whole of what the dialogue understands. Keys are
//! stored lowercase; lookups case-fold, so casing here is cosmetic only.
//! The answer synonyms are surface tokens as the recognizer produces them
//! and are kept verbatim, odd spellings included.

/// People an appointment can be booked with.
pub const PERSONS: &[(&str, &str)] = &[
    ("vlad", "Vladislav Maraev"),
    ("aya", "Nayat Astaiza Soriano"),
    ("victoria", "Victoria Daniilidou"),
    ("hank", "Hank Best"),
    ("emma", "Emma Katz"),
];

/// Bookable weekdays.
pub const DAYS: &[(&str, &str)] = &[
    ("monday", "Monday"),
    ("tuesday", "Tuesday"),
    ("wednesday", "Wednesday"),
    ("thursday", "Thursday"),
    ("friday", "Friday"),
];

/// Known meeting places.
pub const LOCATIONS: &[(&str, &str)] = &[
    ("lab", "the lab"),
    ("university", "the university offices"),
    ("restaurant", "the university restaurant nackrosen"),
];

/// Tokens that count as a yes.
pub const POSITIVE_ANSWERS: &[&str] = &[
    "yes",
    "yeah",
    "ofcourse",
    "definitely",
    "affermative",
    "uhu",
    "positive",
];

/// Tokens that count as a no.
pub const NEGATIVE_ANSWERS: &[&str] = &["no", "noway", "never", "not", "negative"];

/// Meeting lengths on offer.
pub const DURATIONS: &[(&str, &str)] = &[
    ("15", "15 minutes"),
    ("30", "half an hour"),
    ("45", "45 minutes"),
];

/// Inclusive range of bookable starting hours ("1".."12" -> "1:00".."12:00").
pub const TIME_HOURS: std::ops::RangeInclusive<u32> = 1..=12;

/// Inclusive range of bookable weeks ("1".."20" -> "Week 1".."Week 20").
pub const WEEKS: std::ops::RangeInclusive<u32> = 1..=20;
