//! Fixed keyword tables.

use std::fmt;

/// A canonical topic that keyword aliases map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Famine,
    Displacement,
}

impl Topic {
    /// The canonical id, which is also what local media file names contain.
    pub fn id(self) -> &'static str {
        match self {
            Topic::Famine => "famine",
            Topic::Displacement => "displacement",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Arabic,
}

/// Keyword aliases, in normalized (trimmed, lowercased) form.
const ALIASES: &[(&str, Topic, Language)] = &[
    ("famine", Topic::Famine, Language::English),
    ("مجاعة", Topic::Famine, Language::Arabic),
    ("displacement", Topic::Displacement, Language::English),
    ("نزوح", Topic::Displacement, Language::Arabic),
];

const TOPIC_PAGES: &[(Topic, Language, &str)] = &[
    (Topic::Famine, Language::English, "html/famine_crisis.html"),
    (Topic::Famine, Language::Arabic, "html/famine_crisis_ar.html"),
    (Topic::Displacement, Language::English, "html/event_displacement_en.html"),
    (Topic::Displacement, Language::Arabic, "html/event_displacement_ar.html"),
];

/// Trims and lowercases a keyword.
pub fn normalize(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

fn lookup_alias(alias: &str) -> Option<(Topic, Language)> {
    ALIASES
        .iter()
        .find(|(a, _, _)| *a == alias)
        .map(|&(_, topic, lang)| (topic, lang))
}

/// Maps a free-text keyword to its canonical topic.
pub fn canonical_topic(keyword: &str) -> Option<Topic> {
    lookup_alias(&normalize(keyword)).map(|(topic, _)| topic)
}

/// Finds the topic page for a keyword.
///
/// The trimmed keyword is tried as written first and lowercased second; the
/// alias it matches decides the page language.
pub fn topic_page(keyword: &str) -> Option<&'static str> {
    let keyword = keyword.trim();
    let (topic, lang) = lookup_alias(keyword)
        .or_else(|| lookup_alias(&keyword.to_lowercase()))?;
    TOPIC_PAGES
        .iter()
        .find(|(t, l, _)| *t == topic && *l == lang)
        .map(|(_, _, page)| *page)
}
