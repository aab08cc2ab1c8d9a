use std::{
    cmp::Ordering,
    fmt::{self, Write as _},
};

use jiff::civil::Date;
use maud::Render;
use serde::Deserialize;

use crate::data::name::normalise_name;

/// A grade point average, always within `[0.00, 4.00]`.
#[derive(Debug, Copy, Clone)]
pub struct Gpa(f64);

impl Gpa {
    pub const ZERO: Self = Self(0.0);
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 4.0;

    pub fn new(value: f64) -> Option<Self> {
        // `+ 0.0` folds -0.0 into 0.0
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value + 0.0))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Gpa {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Gpa {}

impl PartialOrd for Gpa {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Gpa {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Gpa {
    /// Two decimals, with exact ties rounded half up rather than to even.
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // a value sits exactly between two hundredths iff it is an odd multiple of 1/8
        let eighths = self.0 * 8.0;
        let value = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
            (self.0 * 100.0).round() / 100.0
        } else {
            self.0
        };
        write!(f, "{value:.2}")
    }
}

impl Render for Gpa {
    fn render_to(&self, buffer: &mut String) {
        let _ = write!(buffer, "{self}");
    }
}

/// The student form exactly as it was submitted.
#[derive(Deserialize, Debug, Clone)]
pub struct StudentForm {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub gpa: String,
}

/// A bundle that has passed validation, not yet normalised.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub date_of_birth: Date,
    pub class_name: String,
    pub gpa: Gpa,
}

#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub date_of_birth: Option<Date>,
    pub class_name: Option<String>,
    pub gpa: Option<Gpa>,
}

impl From<NewStudent> for StudentPatch {
    fn from(
        NewStudent {
            id: _,
            name,
            date_of_birth,
            class_name,
            gpa,
        }: NewStudent,
    ) -> Self {
        Self {
            name: Some(name),
            date_of_birth: Some(date_of_birth),
            class_name: Some(class_name),
            gpa: Some(gpa),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: String,
    pub name: String,
    pub date_of_birth: Date,
    pub class_name: String,
    pub gpa: Gpa,
}

impl Student {
    pub fn new(
        NewStudent {
            id,
            name,
            date_of_birth,
            class_name,
            gpa,
        }: NewStudent,
    ) -> Self {
        Self {
            id: id.trim().to_string(),
            name: normalise_name(&name),
            date_of_birth,
            class_name: class_name.trim().to_string(),
            gpa,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replaces the provided fields, normalising them the same way [`Student::new`] does.
    pub fn update(
        &mut self,
        StudentPatch {
            name,
            date_of_birth,
            class_name,
            gpa,
        }: StudentPatch,
    ) {
        if let Some(name) = name {
            self.name = normalise_name(&name);
        }
        if let Some(date_of_birth) = date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(class_name) = class_name {
            self.class_name = class_name.trim().to_string();
        }
        if let Some(gpa) = gpa {
            self.gpa = gpa;
        }
    }
}
