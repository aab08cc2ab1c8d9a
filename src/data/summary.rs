use crate::data::student::{Gpa, Student};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub average_gpa: Gpa,
    pub max_gpa: Gpa,
}

impl Summary {
    pub fn of(students: &[Student]) -> Self {
        let Some(max_gpa) = students.iter().map(|student| student.gpa).max() else {
            return Self {
                count: 0,
                average_gpa: Gpa::ZERO,
                max_gpa: Gpa::ZERO,
            };
        };

        let total: f64 = students.iter().map(|student| student.gpa.value()).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = total / students.len() as f64;

        Self {
            count: students.len(),
            // the mean of in-range values stays in range
            average_gpa: Gpa::new(average).unwrap_or(max_gpa),
            max_gpa,
        }
    }
}
