use jiff::civil::Date;
use snafu::{OptionExt, ResultExt, Snafu, ensure};

use crate::data::student::{Gpa, NewStudent, StudentForm};

/// September, when the academic year starts.
const ACADEMIC_YEAR_START_MONTH: i8 = 9;
const MIN_AGE_BEFORE_ACADEMIC_YEAR: i32 = 19;
const MIN_AGE_FROM_ACADEMIC_YEAR: i32 = 18;
const MAX_AGE: i32 = 100;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ValidationError {
    #[snafu(display("Vui lòng nhập đầy đủ thông tin."))]
    MissingFields,
    #[snafu(display("Điểm GPA phải nằm trong khoảng 0.00 - 4.00."))]
    GpaOutOfRange { provided: String },
    #[snafu(display("Ngày sinh không hợp lệ."))]
    InvalidDateOfBirth {
        source: jiff::Error,
        provided: String,
    },
    #[snafu(display("Ngày sinh không được là ngày trong tương lai."))]
    FutureDateOfBirth { date_of_birth: Date, today: Date },
    #[snafu(display("Ngày sinh không hợp lệ (tuổi quá bé)."))]
    TooYoung { age: i32, min_age: i32 },
    #[snafu(display("Ngày sinh không hợp lệ (tuổi quá lớn)."))]
    TooOld { age: i32 },
}

/// The youngest accepted age: a year older until the academic year starts.
pub fn min_age(today: Date) -> i32 {
    if today.month() < ACADEMIC_YEAR_START_MONTH {
        MIN_AGE_BEFORE_ACADEMIC_YEAR
    } else {
        MIN_AGE_FROM_ACADEMIC_YEAR
    }
}

/// Age as a plain difference of calendar years, ignoring month and day.
pub fn age_in_years(date_of_birth: Date, today: Date) -> i32 {
    i32::from(today.year()) - i32::from(date_of_birth.year())
}

/// Checks a submitted form, stopping at the first rule it breaks.
pub fn validate(form: &StudentForm, today: Date) -> Result<NewStudent, ValidationError> {
    let StudentForm {
        student_id,
        full_name,
        dob,
        class_name,
        gpa,
    } = form;

    ensure!(
        [student_id, full_name, dob, class_name, gpa]
            .iter()
            .all(|field| !field.trim().is_empty()),
        MissingFieldsSnafu
    );

    let gpa = gpa
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(Gpa::new)
        .context(GpaOutOfRangeSnafu { provided: gpa })?;

    let date_of_birth: Date = dob
        .trim()
        .parse()
        .context(InvalidDateOfBirthSnafu { provided: dob })?;

    ensure!(
        date_of_birth <= today,
        FutureDateOfBirthSnafu {
            date_of_birth,
            today
        }
    );

    let age = age_in_years(date_of_birth, today);
    let min_age = min_age(today);
    ensure!(age >= min_age, TooYoungSnafu { age, min_age });
    ensure!(age <= MAX_AGE, TooOldSnafu { age });

    Ok(NewStudent {
        id: student_id.clone(),
        name: full_name.clone(),
        date_of_birth,
        class_name: class_name.clone(),
        gpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    const TODAY: Date = date(2025, 10, 14);

    fn form(dob: &str, gpa: &str) -> StudentForm {
        StudentForm {
            student_id: "B23DCCN001".to_string(),
            full_name: "bùi anh đức".to_string(),
            dob: dob.to_string(),
            class_name: "D23CTCN01-B".to_string(),
            gpa: gpa.to_string(),
        }
    }

    #[test]
    fn accepts_a_valid_form() {
        let student = validate(&form("2005-03-15", " 3.82 "), TODAY).unwrap();
        assert_eq!(student.date_of_birth, date(2005, 3, 15));
        assert_eq!(student.gpa.to_string(), "3.82");
        assert_eq!(student.name, "bùi anh đức");
    }

    #[test]
    fn rejects_missing_fields() {
        let mut missing_class = form("2005-03-15", "3.0");
        missing_class.class_name = String::new();
        assert!(matches!(
            validate(&missing_class, TODAY),
            Err(ValidationError::MissingFields)
        ));

        let mut blank_id = form("2005-03-15", "3.0");
        blank_id.student_id = "   ".to_string();
        assert!(matches!(
            validate(&blank_id, TODAY),
            Err(ValidationError::MissingFields)
        ));

        assert!(matches!(
            validate(&form("2005-03-15", ""), TODAY),
            Err(ValidationError::MissingFields)
        ));
    }

    #[test]
    fn rejects_gpa_outside_range() {
        for gpa in ["4.5", "-0.1", "abc", "NaN", "inf"] {
            assert!(
                matches!(
                    validate(&form("2005-03-15", gpa), TODAY),
                    Err(ValidationError::GpaOutOfRange { .. })
                ),
                "{gpa} should be rejected"
            );
        }
        assert!(validate(&form("2005-03-15", "0"), TODAY).is_ok());
        assert!(validate(&form("2005-03-15", "4.00"), TODAY).is_ok());
    }

    #[test]
    fn rejects_unparsable_dates() {
        for dob in ["2005-02-30", "15/03/2005", "yesterday"] {
            assert!(matches!(
                validate(&form(dob, "3.0"), TODAY),
                Err(ValidationError::InvalidDateOfBirth { .. })
            ));
        }
    }

    #[test]
    fn rejects_future_dates() {
        assert!(matches!(
            validate(&form("2025-10-15", "3.0"), TODAY),
            Err(ValidationError::FutureDateOfBirth { .. })
        ));
    }

    #[test]
    fn gpa_is_checked_before_date() {
        assert!(matches!(
            validate(&form("not a date", "9"), TODAY),
            Err(ValidationError::GpaOutOfRange { .. })
        ));
    }

    #[test]
    fn minimum_age_depends_on_academic_year() {
        assert_eq!(min_age(date(2025, 8, 31)), 19);
        assert_eq!(min_age(date(2025, 9, 1)), 18);

        // born 2007: 18 by year difference
        assert!(validate(&form("2007-12-31", "3.0"), date(2025, 9, 1)).is_ok());
        assert!(matches!(
            validate(&form("2007-01-01", "3.0"), date(2025, 8, 31)),
            Err(ValidationError::TooYoung {
                age: 18,
                min_age: 19
            })
        ));
    }

    #[test]
    fn age_ignores_month_and_day() {
        assert_eq!(age_in_years(date(2006, 12, 31), date(2025, 1, 1)), 19);
        assert!(validate(&form("2006-12-31", "3.0"), date(2025, 1, 1)).is_ok());
    }

    #[test]
    fn rejects_implausibly_old() {
        assert!(validate(&form("1925-06-01", "3.0"), TODAY).is_ok());
        assert!(matches!(
            validate(&form("1924-06-01", "3.0"), TODAY),
            Err(ValidationError::TooOld { age: 101 })
        ));
    }
}
