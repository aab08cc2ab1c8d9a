use crate::{
    routes::{
        export::{get_export_csv, get_export_xlsx, internal_get_export},
        index::get_index_route,
        students::{
            delete_student, internal_get_clear_notice, internal_get_edit_student,
            internal_get_students, internal_post_reset_form, internal_post_seed,
            internal_post_sort, internal_post_student,
        },
    },
    state::RosterState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub mod export;
pub mod index;
pub mod students;

pub fn router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route(
            "/internal/students",
            get(internal_get_students)
                .post(internal_post_student)
                .delete(delete_student),
        )
        .route("/internal/students/edit", get(internal_get_edit_student))
        .route("/internal/students/reset", post(internal_post_reset_form))
        .route("/internal/seed", post(internal_post_seed))
        .route("/internal/sort", post(internal_post_sort))
        .route("/internal/export", get(internal_get_export))
        .route("/internal/notice/clear", get(internal_get_clear_notice))
        .route("/export/students.xlsx", get(get_export_xlsx))
        .route("/export/students.csv", get(get_export_csv))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
