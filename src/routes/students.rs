use crate::{
    config::date_locale::DateLocaleConfig,
    data::{
        query::{SortField, SortOrder},
        session::Session,
        student::{Student, StudentForm},
    },
    error::RosterResult,
    maud_conveniences::{
        Notice, empty_notice, simple_form_element, stat, subtitle, title,
    },
    state::RosterState,
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::json;

const SORTABLE_COLUMNS: [(SortField, &str); 5] = [
    (SortField::Id, "Mã SV"),
    (SortField::Name, "Họ và tên"),
    (SortField::Dob, "Ngày sinh"),
    (SortField::ClassName, "Lớp"),
    (SortField::Gpa, "GPA"),
];

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize, Debug)]
pub struct IdQuery {
    pub id: String,
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize, Debug)]
pub struct SubmitForm {
    #[serde(flatten)]
    pub student: StudentForm,
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize, Debug)]
pub struct SortForm {
    pub field: SortField,
    pub order: SortOrder,
    #[serde(default)]
    pub q: String,
}

fn student_form(editing: Option<&Student>) -> Markup {
    let date_of_birth = editing.map(|student| student.date_of_birth.to_string());
    let gpa = editing.map(|student| student.gpa.to_string());

    html! {
        form hx-post="/internal/students" hx-target="#workspace" hx-swap="outerHTML" hx-include="#search_input" {
            @if editing.is_some() {
                (subtitle("Cập nhật sinh viên"))
            } @else {
                (subtitle("Thêm sinh viên"))
            }

            (simple_form_element("student_id", "Mã sinh viên", "text", editing.map(Student::id), editing.is_some()))
            (simple_form_element("full_name", "Họ và tên", "text", editing.map(|student| student.name.as_str()), false))
            (simple_form_element("dob", "Ngày sinh", "date", date_of_birth.as_deref(), false))
            (simple_form_element("class_name", "Lớp học", "text", editing.map(|student| student.class_name.as_str()), false))
            (simple_form_element("gpa", "Điểm GPA", "number", gpa.as_deref(), false))

            div class="flex flex-wrap gap-2" {
                button id="submit_button" type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                    @if editing.is_some() { "Cập nhật" } @else { "Thêm sinh viên" }
                }
                button type="button" hx-post="/internal/students/reset" hx-target="#workspace" hx-swap="outerHTML" hx-include="#search_input" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                    "Làm mới"
                }
            }
        }

        div class="flex flex-wrap gap-2 mt-6" {
            button hx-post="/internal/seed" hx-target="#workspace" hx-swap="outerHTML" hx-include="#search_input" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                "Dữ liệu mẫu"
            }
            button hx-get="/internal/export?format=xlsx" hx-target="#notice" hx-swap="outerHTML" class="bg-pink-600 hover:bg-pink-700 font-bold py-2 px-4 rounded" {
                "Tải Excel"
            }
            button hx-get="/internal/export?format=csv" hx-target="#notice" hx-swap="outerHTML" class="bg-pink-600 hover:bg-pink-700 font-bold py-2 px-4 rounded" {
                "Tải CSV"
            }
        }
    }
}

fn sort_button(session: &Session, field: SortField, order: SortOrder) -> Markup {
    let active = session.sort().is_active(field, order);
    let hx_vals = json!({"field": field.as_str(), "order": order.as_str()}).to_string();
    let arrow = match order {
        SortOrder::Asc => "▲",
        SortOrder::Desc => "▼",
    };

    html! {
        button class={"sort-btn px-1 rounded " (if active { "bg-blue-600 text-white" } else { "text-gray-400 hover:text-white" })}
            data-field=(field.as_str()) data-order=(order.as_str())
            hx-post="/internal/sort" hx-vals=(hx_vals) hx-include="#search_input" hx-target="#student_table" {
            (arrow)
        }
    }
}

/// The sortable table of students matching `keyword`.
pub fn student_table(
    session: &Session,
    keyword: &str,
    date_locale: &DateLocaleConfig,
) -> RosterResult<Markup> {
    let visible = session.visible(keyword, date_locale.collator());

    let mut rows = Vec::with_capacity(visible.len());
    for student in visible {
        rows.push((student, date_locale.short_ymd(student.date_of_birth)?));
    }

    Ok(html! {
        table class="min-w-full bg-gray-800 rounded shadow-md" {
            thead class="bg-gray-700" {
                tr {
                    @for (field, heading) in SORTABLE_COLUMNS {
                        th class="py-2 px-4 text-left font-semibold text-gray-300" {
                            (heading) " "
                            (sort_button(session, field, SortOrder::Asc))
                            (sort_button(session, field, SortOrder::Desc))
                        }
                    }
                    th class="py-2 px-4 text-left font-semibold text-gray-300" {"Thao tác"}
                }
            }
            tbody {
                @if rows.is_empty() {
                    tr {
                        td colspan="6" class="py-4 px-4 text-center italic text-gray-400" {"Không tìm thấy sinh viên phù hợp."}
                    }
                }
                @for (student, date_of_birth) in rows {
                    @let hx_vals = json!({"id": student.id()}).to_string();
                    tr {
                        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(student.id())}
                        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(student.name)}
                        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(date_of_birth)}
                        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(student.class_name)}
                        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {
                            span class="rounded bg-blue-900 px-2 py-1 font-mono" {(student.gpa)}
                        }
                        td class="py-2 px-4 border-b border-gray-600 text-gray-200 space-x-2" {
                            button data-action="edit" hx-get="/internal/students/edit" hx-vals=(hx_vals) hx-include="#search_input" hx-target="#workspace" hx-swap="outerHTML" class="bg-slate-600 hover:bg-slate-800 py-1 px-2 rounded" {
                                "Sửa"
                            }
                            button data-action="delete" hx-delete="/internal/students" hx-vals=(hx_vals) hx-include="#search_input" hx-target="#workspace" hx-swap="outerHTML" hx-confirm="Bạn có chắc chắn muốn xóa sinh viên này?" class="bg-red-600 hover:bg-red-800 py-1 px-2 rounded" {
                                "Xóa"
                            }
                        }
                    }
                }
            }
        }
    })
}

fn summary(session: &Session) -> Markup {
    let summary = session.summary();

    html! {
        div id="summary" class="grid grid-cols-3 gap-4" {
            (stat("Tổng số sinh viên", summary.count))
            (stat("GPA trung bình", summary.average_gpa))
            (stat("GPA cao nhất", summary.max_gpa))
        }
    }
}

/// Form, summary and table; what every mutation re-renders.
pub fn workspace(
    session: &Session,
    keyword: &str,
    date_locale: &DateLocaleConfig,
) -> RosterResult<Markup> {
    let table = student_table(session, keyword, date_locale)?;

    Ok(html! {
        div id="workspace" class="container mx-auto flex flex-col lg:flex-row gap-8" {
            div class="bg-gray-800 p-8 rounded shadow-md w-full lg:max-w-sm" {
                (student_form(session.editing()))
            }
            div class="bg-gray-800 p-8 rounded shadow-md w-full flex flex-col space-y-4" {
                (title("Danh sách sinh viên"))
                (summary(session))
                input type="search" id="search_input" name="q" value=(keyword) placeholder="Tìm theo mã hoặc tên..." hx-get="/internal/students" hx-trigger="input changed delay:200ms, search" hx-target="#student_table" class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
                div id="student_table" class="overflow-x-auto" {
                    (table)
                }
            }
        }
    })
}

fn with_notice(workspace: Markup, notice: &Notice) -> Markup {
    html! {
        (workspace)
        (notice.out_of_band())
    }
}

pub async fn internal_get_students(
    State(state): State<RosterState>,
    Query(SearchQuery { q }): Query<SearchQuery>,
) -> RosterResult<Markup> {
    let session = state.session().await;
    student_table(&session, &q, &state.config().date_locale_config())
}

pub async fn internal_post_student(
    State(state): State<RosterState>,
    Form(SubmitForm { student, q }): Form<SubmitForm>,
) -> RosterResult<Markup> {
    let date_locale = state.config().date_locale_config();
    let mut session = state.session().await;

    let notice = session.submit(&student, date_locale.today())?;
    Ok(with_notice(workspace(&session, &q, &date_locale)?, &notice))
}

pub async fn internal_get_edit_student(
    State(state): State<RosterState>,
    Query(IdQuery { id, q }): Query<IdQuery>,
) -> RosterResult<Markup> {
    let date_locale = state.config().date_locale_config();
    let mut session = state.session().await;

    session.begin_editing(&id)?;
    workspace(&session, &q, &date_locale)
}

pub async fn internal_post_reset_form(
    State(state): State<RosterState>,
    Form(SearchQuery { q }): Form<SearchQuery>,
) -> RosterResult<Markup> {
    let date_locale = state.config().date_locale_config();
    let mut session = state.session().await;

    session.cancel_editing();
    workspace(&session, &q, &date_locale)
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Query(IdQuery { id, q }): Query<IdQuery>,
) -> RosterResult<Markup> {
    let date_locale = state.config().date_locale_config();
    let mut session = state.session().await;

    let notice = session.remove(&id);
    Ok(with_notice(workspace(&session, &q, &date_locale)?, &notice))
}

pub async fn internal_post_seed(
    State(state): State<RosterState>,
    Form(SearchQuery { q }): Form<SearchQuery>,
) -> RosterResult<Markup> {
    let date_locale = state.config().date_locale_config();
    let mut session = state.session().await;

    let notice = session.seed();
    Ok(with_notice(workspace(&session, &q, &date_locale)?, &notice))
}

pub async fn internal_post_sort(
    State(state): State<RosterState>,
    Form(SortForm { field, order, q }): Form<SortForm>,
) -> RosterResult<Markup> {
    let date_locale = state.config().date_locale_config();
    let mut session = state.session().await;

    let sort = session.toggle_sort(field, order);
    debug!(?sort, "Changed sort");
    student_table(&session, &q, &date_locale)
}

pub async fn internal_get_clear_notice() -> Markup {
    empty_notice()
}
