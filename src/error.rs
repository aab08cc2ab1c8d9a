use crate::{data::validation::ValidationError, maud_conveniences::Notice};
use axum::{
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use maud::Render;
use snafu::Snafu;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("{source}"))]
    Validation { source: ValidationError },
    #[snafu(display("Mã sinh viên đã tồn tại. Vui lòng kiểm tra lại."))]
    DuplicateId { id: String },
    #[snafu(display("Không tìm thấy sinh viên để cập nhật."))]
    MissingStudent { id: String },
    #[snafu(display("Danh sách sinh viên trống. Không có dữ liệu để tải."))]
    EmptyRoster,
    #[snafu(display("Error writing XLSX"))]
    Xlsx {
        source: rust_xlsxwriter::XlsxError,
    },
    #[snafu(display("Error with CSVs"))]
    Csv { source: csv::Error },
    #[snafu(display("Error flushing CSV"))]
    CsvFlush { source: std::io::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unknown timezone {:?}", tz))]
    InvalidTimezone { source: jiff::Error, tz: String },
    #[snafu(display("Invalid locale {:?}", provided))]
    InvalidLocale {
        source: icu::locale::ParseError,
        provided: String,
    },
    #[snafu(display("Unable to load collation data for {:?}", locale))]
    InvalidCollator {
        source: icu_provider::DataError,
        locale: String,
    },
    #[snafu(display("Unable to create date formatter"))]
    BadDateTimeFormatter {
        source: icu::datetime::DateTimeFormatterLoadError,
    },
}

impl RosterError {
    pub const fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::DuplicateId { .. } => StatusCode::CONFLICT,
            Self::MissingStudent { .. } => StatusCode::NOT_FOUND,
            Self::EmptyRoster => BI,
            Self::Xlsx { .. } | Self::Csv { .. } | Self::CsvFlush { .. } => ISE,
            Self::BadEnvVar { .. } | Self::InvalidTimezone { .. } | Self::InvalidLocale { .. } => {
                ISE
            }
            Self::InvalidCollator { .. } | Self::BadDateTimeFormatter { .. } => ISE,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            warn!(?self, "Rejected request");
        }

        // errors always land in the notice area, whatever the request targeted
        (
            status_code,
            AppendHeaders([("HX-Retarget", "#notice"), ("HX-Reswap", "outerHTML")]),
            Notice::error(self.to_string()).render(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_client_errors() {
        let duplicate = RosterError::DuplicateId {
            id: "B23DCCN001".to_string(),
        };
        assert_eq!(duplicate.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            duplicate.to_string(),
            "Mã sinh viên đã tồn tại. Vui lòng kiểm tra lại."
        );

        let validation = RosterError::Validation {
            source: ValidationError::MissingFields,
        };
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(validation.to_string(), "Vui lòng nhập đầy đủ thông tin.");
    }

    #[test]
    fn responses_are_retargeted_to_the_notice() {
        let response = RosterError::EmptyRoster.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["HX-Retarget"], "#notice");
    }
}
