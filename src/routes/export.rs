use crate::{
    error::{EmptyRosterSnafu, RosterResult},
    export::{ExportFormat, file_name, rows, to_csv, to_xlsx},
    maud_conveniences::Notice,
    state::RosterState,
};
use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{AppendHeaders, IntoResponse, Response},
};
use maud::Render;
use serde::Deserialize;
use snafu::ensure;

#[derive(Deserialize, Debug)]
pub struct FormatQuery {
    format: ExportFormat,
}

pub const fn download_path(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Xlsx => "/export/students.xlsx",
        ExportFormat::Csv => "/export/students.csv",
    }
}

/// Refuses an empty roster up front, otherwise sends the browser off to the file.
pub async fn internal_get_export(
    State(state): State<RosterState>,
    Query(FormatQuery { format }): Query<FormatQuery>,
) -> RosterResult<Response> {
    ensure!(!state.session().await.roster().is_empty(), EmptyRosterSnafu);

    Ok((
        AppendHeaders([("HX-Redirect", download_path(format))]),
        Notice::success("Đã tải danh sách sinh viên thành công!").render(),
    )
        .into_response())
}

async fn download(state: &RosterState, format: ExportFormat) -> RosterResult<Response> {
    let date_locale = state.config().date_locale_config();
    let rows = rows(state.session().await.roster(), &date_locale)?;

    let bytes = match format {
        ExportFormat::Xlsx => to_xlsx(&rows)?,
        ExportFormat::Csv => to_csv(&rows)?,
    };
    let file_name = file_name(date_locale.today(), format);
    info!(?format, rows = rows.len(), %file_name, "Exported students");

    Ok((
        AppendHeaders([
            (CONTENT_TYPE, format.content_type().to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ]),
        bytes,
    )
        .into_response())
}

pub async fn get_export_xlsx(State(state): State<RosterState>) -> RosterResult<Response> {
    download(&state, ExportFormat::Xlsx).await
}

pub async fn get_export_csv(State(state): State<RosterState>) -> RosterResult<Response> {
    download(&state, ExportFormat::Csv).await
}
