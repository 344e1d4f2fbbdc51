//! Content-based classification rule tables.
//!
//! Each category is a label plus the terms that signal it. Tables are
//! ordered; detection reports labels in table order. Two tables exist
//! because the two operations cite different document vocabularies:
//! profile generation looks for leadership-assessment material,
//! question answering looks for clinical material.

/// A single search term within a content rule.
///
/// Terms normally match against the lower-cased context. A `raw` term
/// matches against the context as supplied; the numeric "360" checks are
/// specified that way and stay that way.
#[derive(Debug, Clone, Copy)]
pub struct TermPattern {
    pub needle: &'static str,
    pub raw: bool,
}

const fn term(needle: &'static str) -> TermPattern {
    TermPattern { needle, raw: false }
}

const fn raw_term(needle: &'static str) -> TermPattern {
    TermPattern { needle, raw: true }
}

/// One content-based category: a label and the terms that signal it.
#[derive(Debug, Clone, Copy)]
pub struct ContentRule {
    pub label: &'static str,
    pub terms: &'static [TermPattern],
}

/// Categories checked when composing a profile-generation prompt.
pub const PROFILE_RULES: &[ContentRule] = &[
    ContentRule {
        label: "Hogan Assessment",
        terms: &[
            term("hogan"),
            term("hpi"),
            term("hds"),
            term("mvpi"),
            term("motives values preferences"),
            term("personality inventory"),
            term("development survey"),
        ],
    },
    ContentRule {
        label: "360° Feedback",
        terms: &[raw_term("360"), term("360-degree")],
    },
    ContentRule {
        label: "CV/Resume",
        terms: &[
            term("cv"),
            term("resume"),
            term("résumé"),
            term("curriculum vitae"),
            term("work history"),
            term("professional experience"),
            term("education:"),
        ],
    },
    ContentRule {
        label: "Intercultural Development Assessment",
        terms: &[
            term("intercultural development inventory"),
            term("intercultural sensitivity"),
            term("cultural competence"),
        ],
    },
    ContentRule {
        label: "Individual Directions Inventory",
        terms: &[
            term("individual directions inventory"),
            term("idi report"),
            term("directions inventory"),
        ],
    },
    ContentRule {
        label: "Performance Review",
        terms: &[
            term("performance review"),
            term("annual review"),
            term("performance assessment"),
            term("performance rating"),
        ],
    },
    ContentRule {
        label: "Interview Notes",
        terms: &[
            term("interview notes"),
            term("interview summary"),
            term("candidate interview"),
        ],
    },
];

/// Categories checked when composing a question-answering prompt.
pub const CLINICAL_RULES: &[ContentRule] = &[
    ContentRule {
        label: "Psychological Assessment",
        terms: &[
            term("psychological assessment"),
            term("psych eval"),
            term("mental status"),
            term("diagnosis"),
            term("dsm"),
            term("icd"),
            term("symptoms"),
        ],
    },
    ContentRule {
        label: "Treatment Notes",
        terms: &[
            term("treatment notes"),
            term("therapy notes"),
            term("session notes"),
            term("progress notes"),
        ],
    },
    ContentRule {
        label: "Medical History",
        terms: &[
            term("medical history"),
            term("medication"),
            term("health history"),
            term("physical exam"),
            term("vitals"),
        ],
    },
    ContentRule {
        label: "Clinical Interview",
        terms: &[
            term("clinical interview"),
            term("intake"),
            term("initial assessment"),
            term("client report"),
        ],
    },
    ContentRule {
        label: "Standardized Tests",
        terms: &[
            term("mmpi"),
            term("wais"),
            term("wisc"),
            term("beck"),
            term("hamilton"),
            term("gaf"),
            term("phq"),
            term("gad"),
        ],
    },
    ContentRule {
        label: "Personality Assessment",
        terms: &[
            term("hogan"),
            term("hpi"),
            term("hds"),
            term("mvpi"),
            term("personality inventory"),
        ],
    },
];
