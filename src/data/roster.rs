use jiff::civil::{Date, date};
use snafu::{OptionExt, ensure};

use crate::{
    data::student::{Gpa, NewStudent, Student, StudentPatch},
    error::{DuplicateIdSnafu, MissingStudentSnafu, RosterResult},
};

/// Demo data: (id, name, date of birth, class, GPA).
const SEED: [(&str, &str, Date, &str, f64); 5] = [
    ("B23DCCN001", "Bùi Anh Đức", date(2005, 3, 15), "D23CTCN01-B", 3.82),
    ("B23DCCN002", "Bùi Văn Lâm", date(2005, 12, 20), "D23CTCN01-B", 3.61),
    ("B23DCCN003", "Phan Văn Khôi", date(2005, 11, 2), "D23CTCN01-B", 3.84),
    ("B23DCCN004", "Dương Trọng Thắng", date(2005, 9, 2), "D23CTCN01-B", 3.78),
    ("B23DCCN005", "Trần Văn Khánh", date(2005, 8, 2), "D23CTCN01-B", 3.91),
];

/// Students in insertion order, at most one per case-insensitive id.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn seeded() -> Self {
        let students = SEED
            .into_iter()
            .map(|(id, name, date_of_birth, class_name, gpa)| {
                Student::new(NewStudent {
                    id: id.to_string(),
                    name: name.to_string(),
                    date_of_birth,
                    class_name: class_name.to_string(),
                    gpa: Gpa::new(gpa).unwrap_or(Gpa::ZERO),
                })
            })
            .collect();

        Self { students }
    }

    pub fn seed(&mut self) {
        *self = Self::seeded();
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id() == id)
    }

    fn contains_ignoring_case(&self, id: &str) -> bool {
        let id = id.to_lowercase();
        self.students
            .iter()
            .any(|student| student.id().to_lowercase() == id)
    }

    /// Appends the student and hands back its normalised id.
    pub fn add(&mut self, new_student: NewStudent) -> RosterResult<String> {
        let student = Student::new(new_student);
        ensure!(
            !self.contains_ignoring_case(student.id()),
            DuplicateIdSnafu { id: student.id() }
        );

        let id = student.id().to_string();
        self.students.push(student);
        Ok(id)
    }

    pub fn update(&mut self, id: &str, patch: StudentPatch) -> RosterResult<&Student> {
        let student = self
            .students
            .iter_mut()
            .find(|student| student.id() == id)
            .context(MissingStudentSnafu { id })?;

        student.update(patch);
        Ok(student)
    }

    /// Removing an id that isn't there is not an error.
    pub fn remove(&mut self, id: &str) -> Option<Student> {
        let index = self.students.iter().position(|student| student.id() == id)?;
        Some(self.students.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    fn new_student(id: &str) -> NewStudent {
        NewStudent {
            id: id.to_string(),
            name: "  hoàng   minh châu ".to_string(),
            date_of_birth: date(2004, 6, 1),
            class_name: " D22CQCN03-B ".to_string(),
            gpa: Gpa::new(3.25).unwrap(),
        }
    }

    #[test]
    fn add_then_find_returns_normalised_record() {
        let mut roster = Roster::default();
        let id = roster.add(new_student(" B22DCCN100 ")).unwrap();
        assert_eq!(id, "B22DCCN100");

        let found = roster.find("B22DCCN100").unwrap();
        assert_eq!(found.name, "Hoàng Minh Châu");
        assert_eq!(found.class_name, "D22CQCN03-B");
        assert_eq!(found.date_of_birth, date(2004, 6, 1));
        assert_eq!(found.gpa, Gpa::new(3.25).unwrap());
    }

    #[test]
    fn duplicate_ids_differing_by_case_are_rejected() {
        let mut roster = Roster::default();
        roster.add(new_student("B22DCCN100")).unwrap();

        let err = roster.add(new_student("b22dccn100")).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId { .. }));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students()[0].id(), "B22DCCN100");
    }

    #[test]
    fn update_keeps_id_and_missing_ids_fail() {
        let mut roster = Roster::seeded();
        let updated = roster
            .update(
                "B23DCCN002",
                StudentPatch {
                    class_name: Some("  D23CTCN02-B ".to_string()),
                    ..StudentPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id(), "B23DCCN002");
        assert_eq!(updated.class_name, "D23CTCN02-B");
        assert_eq!(updated.name, "Bùi Văn Lâm");

        let err = roster
            .update("B23DCCN999", StudentPatch::default())
            .unwrap_err();
        assert!(matches!(err, RosterError::MissingStudent { .. }));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut roster = Roster::seeded();
        assert!(roster.remove("B23DCCN003").is_some());
        assert!(roster.remove("B23DCCN003").is_none());
        assert_eq!(roster.len(), 4);
        assert!(roster.find("B23DCCN003").is_none());
    }

    #[test]
    fn seed_replaces_everything() {
        let mut roster = Roster::default();
        roster.add(new_student("X1")).unwrap();
        roster.seed();

        let ids: Vec<_> = roster.students().iter().map(Student::id).collect();
        assert_eq!(
            ids,
            [
                "B23DCCN001",
                "B23DCCN002",
                "B23DCCN003",
                "B23DCCN004",
                "B23DCCN005"
            ]
        );
    }
}
