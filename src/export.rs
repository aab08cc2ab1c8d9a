use crate::{
    config::date_locale::DateLocaleConfig,
    data::{roster::Roster, student::Student},
    error::{CsvFlushSnafu, CsvSnafu, EmptyRosterSnafu, RosterResult, XlsxSnafu},
};
use jiff::civil::Date;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};

const FILE_PREFIX: &str = "danh_sach_sinh_vien_";
const SHEET_NAME: &str = "Danh sách sinh viên";
const HEADERS: [&str; 5] = ["Mã SV", "Họ và tên", "Ngày sinh", "Lớp học", "Điểm GPA"];
const COLUMN_WIDTHS: [f64; 5] = [12.0, 25.0, 15.0, 15.0, 12.0];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Csv => "text/csv; charset=utf-8",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    #[serde(rename = "Mã SV")]
    pub id: String,
    #[serde(rename = "Họ và tên")]
    pub name: String,
    #[serde(rename = "Ngày sinh")]
    pub date_of_birth: String,
    #[serde(rename = "Lớp học")]
    pub class_name: String,
    #[serde(rename = "Điểm GPA")]
    pub gpa: String,
}

impl ExportRow {
    fn new(student: &Student, date_locale: &DateLocaleConfig) -> RosterResult<Self> {
        Ok(Self {
            id: student.id().to_string(),
            name: student.name.clone(),
            date_of_birth: date_locale.short_ymd(student.date_of_birth)?,
            class_name: student.class_name.clone(),
            gpa: student.gpa.to_string(),
        })
    }

    const fn cells(&self) -> [&String; 5] {
        [
            &self.id,
            &self.name,
            &self.date_of_birth,
            &self.class_name,
            &self.gpa,
        ]
    }
}

/// The whole roster in insertion order, regardless of what the table is filtered to.
pub fn rows(roster: &Roster, date_locale: &DateLocaleConfig) -> RosterResult<Vec<ExportRow>> {
    ensure!(!roster.is_empty(), EmptyRosterSnafu);

    roster
        .students()
        .iter()
        .map(|student| ExportRow::new(student, date_locale))
        .collect()
}

pub fn file_name(today: Date, format: ExportFormat) -> String {
    format!("{FILE_PREFIX}{today}.{}", format.extension())
}

pub fn to_xlsx(rows: &[ExportRow]) -> RosterResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).context(XlsxSnafu)?;

    for (col, (header, width)) in (0_u16..).zip(HEADERS.into_iter().zip(COLUMN_WIDTHS)) {
        worksheet
            .write_string_with_format(0, col, header, &header_format)
            .context(XlsxSnafu)?;
        worksheet.set_column_width(col, width).context(XlsxSnafu)?;
    }

    for (row_index, row) in (1_u32..).zip(rows) {
        for (col, cell) in (0_u16..).zip(row.cells()) {
            worksheet
                .write_string(row_index, col, cell)
                .context(XlsxSnafu)?;
        }
    }

    workbook.save_to_buffer().context(XlsxSnafu)
}

pub fn to_csv(rows: &[ExportRow]) -> RosterResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    for row in rows {
        writer.serialize(row).context(CsvSnafu)?;
    }

    writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)
        .context(CsvFlushSnafu)
}
