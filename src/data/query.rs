use std::cmp::Ordering;

use icu::collator::CollatorBorrowed;
use serde::Deserialize;

use crate::data::{name::VietnameseName, student::Student};

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Name,
    Dob,
    ClassName,
    Gpa,
}

impl SortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Dob => "dob",
            Self::ClassName => "class_name",
            Self::Gpa => "gpa",
        }
    }
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    SortedBy(SortField, SortOrder),
}

impl SortState {
    /// Picking the active sort again switches sorting off.
    #[must_use]
    pub fn toggle(self, field: SortField, order: SortOrder) -> Self {
        if self == Self::SortedBy(field, order) {
            Self::Unsorted
        } else {
            Self::SortedBy(field, order)
        }
    }

    pub fn is_active(self, field: SortField, order: SortOrder) -> bool {
        self == Self::SortedBy(field, order)
    }
}

/// Case-insensitive substring match against id or name. An empty keyword matches everyone.
pub fn filter<'a>(students: &'a [Student], keyword: &str) -> Vec<&'a Student> {
    let keyword = keyword.trim().to_lowercase();

    students
        .iter()
        .filter(|student| {
            student.id().to_lowercase().contains(&keyword)
                || student.name.to_lowercase().contains(&keyword)
        })
        .collect()
}

/// Stable sort of an already-filtered view; the roster itself is never reordered.
pub fn sort(students: &mut Vec<&Student>, state: SortState, collator: &CollatorBorrowed<'_>) {
    let SortState::SortedBy(field, order) = state else {
        return;
    };

    match field {
        SortField::Gpa => students.sort_by(|a, b| order.apply(a.gpa.cmp(&b.gpa))),
        SortField::Dob => {
            students.sort_by(|a, b| order.apply(a.date_of_birth.cmp(&b.date_of_birth)));
        }
        SortField::Id => {
            students.sort_by(|a, b| order.apply(collator.compare(a.id(), b.id())));
        }
        SortField::ClassName => {
            students.sort_by(|a, b| order.apply(collator.compare(&a.class_name, &b.class_name)));
        }
        SortField::Name => {
            let mut keyed: Vec<_> = students
                .drain(..)
                .map(|student| (VietnameseName::parse(&student.name), student))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| order.apply(a.collate(b, collator)));
            students.extend(keyed.into_iter().map(|(_, student)| student));
        }
    }
}

/// Filter, then sort: what the table shows.
pub fn run<'a>(
    students: &'a [Student],
    keyword: &str,
    state: SortState,
    collator: &CollatorBorrowed<'_>,
) -> Vec<&'a Student> {
    let mut visible = filter(students, keyword);
    sort(&mut visible, state, collator);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::date_locale::tests::vietnamese_collator, data::roster::Roster};

    fn ids<'a>(students: &[&'a Student]) -> Vec<&'a str> {
        students.iter().map(|student| student.id()).collect()
    }

    #[test]
    fn toggling_twice_returns_to_unsorted() {
        let state = SortState::default()
            .toggle(SortField::Gpa, SortOrder::Desc)
            .toggle(SortField::Gpa, SortOrder::Desc);
        assert_eq!(state, SortState::Unsorted);

        let state = SortState::Unsorted
            .toggle(SortField::Gpa, SortOrder::Desc)
            .toggle(SortField::Gpa, SortOrder::Asc);
        assert_eq!(state, SortState::SortedBy(SortField::Gpa, SortOrder::Asc));
        assert!(state.is_active(SortField::Gpa, SortOrder::Asc));
        assert!(!state.is_active(SortField::Gpa, SortOrder::Desc));
    }

    #[test]
    fn sorts_gpa_descending() {
        let roster = Roster::seeded();
        let collator = vietnamese_collator();
        let visible = run(
            roster.students(),
            "",
            SortState::SortedBy(SortField::Gpa, SortOrder::Desc),
            &collator,
        );

        let gpas: Vec<_> = visible.iter().map(|s| s.gpa.to_string()).collect();
        assert_eq!(gpas, ["3.91", "3.84", "3.82", "3.78", "3.61"]);
    }

    #[test]
    fn sorts_names_by_given_name_under_vietnamese_collation() {
        let roster = Roster::seeded();
        let collator = vietnamese_collator();
        let visible = run(
            roster.students(),
            "",
            SortState::SortedBy(SortField::Name, SortOrder::Asc),
            &collator,
        );

        // Đức, Khánh, Khôi, Lâm, Thắng
        assert_eq!(
            ids(&visible),
            [
                "B23DCCN001",
                "B23DCCN005",
                "B23DCCN003",
                "B23DCCN002",
                "B23DCCN004"
            ]
        );
    }

    #[test]
    fn sorts_dates_chronologically() {
        let roster = Roster::seeded();
        let collator = vietnamese_collator();
        let visible = run(
            roster.students(),
            "",
            SortState::SortedBy(SortField::Dob, SortOrder::Asc),
            &collator,
        );

        assert_eq!(
            ids(&visible),
            [
                "B23DCCN001",
                "B23DCCN005",
                "B23DCCN004",
                "B23DCCN003",
                "B23DCCN002"
            ]
        );
    }

    #[test]
    fn equal_keys_keep_insertion_order_in_both_directions() {
        let roster = Roster::seeded();
        let collator = vietnamese_collator();

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let visible = run(
                roster.students(),
                "",
                SortState::SortedBy(SortField::ClassName, order),
                &collator,
            );
            assert_eq!(ids(&visible), ids(&filter(roster.students(), "")));
        }
    }

    #[test]
    fn unsorted_view_is_insertion_order() {
        let roster = Roster::seeded();
        let collator = vietnamese_collator();
        let visible = run(roster.students(), "", SortState::Unsorted, &collator);
        assert_eq!(ids(&visible), ids(&roster.students().iter().collect::<Vec<_>>()));
    }

    #[test]
    fn filter_matches_id_or_name_ignoring_case() {
        let roster = Roster::seeded();

        assert_eq!(ids(&filter(roster.students(), "b23dccn00")).len(), 5);
        assert_eq!(ids(&filter(roster.students(), "  VĂN ")), [
            "B23DCCN002",
            "B23DCCN003",
            "B23DCCN005"
        ]);
        assert_eq!(ids(&filter(roster.students(), "005")), ["B23DCCN005"]);
        assert!(filter(roster.students(), "nobody").is_empty());
        assert_eq!(roster.len(), 5);
    }
}
