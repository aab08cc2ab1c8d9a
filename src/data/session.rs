use icu::collator::CollatorBorrowed;
use jiff::civil::Date;
use snafu::{OptionExt, ResultExt};

use crate::{
    data::{
        query::{self, SortField, SortOrder, SortState},
        roster::Roster,
        student::{Student, StudentForm},
        summary::Summary,
        validation::validate,
    },
    error::{MissingStudentSnafu, RosterResult, ValidationSnafu},
    maud_conveniences::Notice,
};

/// Everything the page is currently showing: the roster, the edit in progress and the sort.
#[derive(Debug, Default)]
pub struct Session {
    roster: Roster,
    editing_id: Option<String>,
    sort: SortState,
}

impl Session {
    #[cfg(test)]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            ..Self::default()
        }
    }

    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn editing(&self) -> Option<&Student> {
        self.editing_id
            .as_deref()
            .and_then(|id| self.roster.find(id))
    }

    pub const fn sort(&self) -> SortState {
        self.sort
    }

    /// Adds a new student, or updates the one being edited.
    pub fn submit(&mut self, form: &StudentForm, today: Date) -> RosterResult<Notice> {
        let new_student = validate(form, today).context(ValidationSnafu)?;

        if let Some(editing_id) = self.editing_id.as_deref() {
            let updated = self.roster.update(editing_id, new_student.into())?;
            info!(id = updated.id(), "Updated student");
            self.editing_id = None;
            Ok(Notice::success("Cập nhật thông tin thành công!"))
        } else {
            let id = self.roster.add(new_student)?;
            info!(%id, "Added student");
            Ok(Notice::success("Đã thêm sinh viên thành công!"))
        }
    }

    pub fn begin_editing(&mut self, id: &str) -> RosterResult<&Student> {
        let student = self.roster.find(id).context(MissingStudentSnafu { id })?;
        self.editing_id = Some(student.id().to_string());
        Ok(student)
    }

    pub fn cancel_editing(&mut self) {
        self.editing_id = None;
    }

    pub fn remove(&mut self, id: &str) -> Notice {
        if self.roster.remove(id).is_some() {
            info!(id, "Removed student");
        }
        if self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
        }
        Notice::success("Đã xóa sinh viên.")
    }

    pub fn seed(&mut self) -> Notice {
        self.roster.seed();
        self.editing_id = None;
        info!(count = self.roster.len(), "Loaded demo students");
        Notice::success("Đã thêm dữ liệu mẫu!")
    }

    pub fn toggle_sort(&mut self, field: SortField, order: SortOrder) -> SortState {
        self.sort = self.sort.toggle(field, order);
        self.sort
    }

    pub fn visible(&self, keyword: &str, collator: &CollatorBorrowed<'_>) -> Vec<&Student> {
        query::run(self.roster.students(), keyword, self.sort, collator)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self.roster.students())
    }
}
