use std::cmp::Ordering;

use icu::collator::CollatorBorrowed;

/// Trims, collapses internal whitespace and capitalises each word of a person's name.
pub fn normalise_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalise_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalise_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    first
        .to_uppercase()
        .chain(chars.as_str().to_lowercase().chars())
        .collect()
}

/// A full name split the Vietnamese way: family name first, given name last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VietnameseName<'a> {
    pub family: &'a str,
    pub middle: String,
    pub given: &'a str,
}

impl<'a> VietnameseName<'a> {
    pub fn parse(full_name: &'a str) -> Self {
        let parts: Vec<&str> = full_name.split_whitespace().collect();

        match *parts.as_slice() {
            [] => Self {
                family: "",
                middle: String::new(),
                given: "",
            },
            [given] => Self {
                family: "",
                middle: String::new(),
                given,
            },
            [family, given] => Self {
                family,
                middle: String::new(),
                given,
            },
            [family, ref middle @ .., given] => Self {
                family,
                middle: middle.join(" "),
                given,
            },
        }
    }

    /// Given name first, then middle names, then family name.
    pub fn collate(&self, other: &Self, collator: &CollatorBorrowed<'_>) -> Ordering {
        collator
            .compare(self.given, other.given)
            .then_with(|| collator.compare(&self.middle, &other.middle))
            .then_with(|| collator.compare(self.family, other.family))
    }
}
