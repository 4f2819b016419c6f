//! Monthly Report Export
//!
//! Lays the full history out as one sheet per month and renders it as an
//! XLSX workbook.
//!
//! ```text
//! Sheet: Март
//! | Сотрудник | Футболка: состояние | Футболка: размер | Футболка: дата выдачи | Штаны: ... |
//! |-----------|---------------------|------------------|-----------------------|------------|
//! | Бирюков   | Нужно новое         | M                | 2024-03-02            | ...        |
//! | Наумов    | Не заполнено        | S                |                       | ...        |
//! ```

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

use crate::domain::resolver::{issue_date, resolve};
use crate::domain::{DomainError, DomainResult, Employee, ItemKind, Month, Restaurant};

/// Cell text for an item with no record this month
pub const NOT_FILLED: &str = "Не заполнено";

const NAME_HEADER: &str = "Сотрудник";

/// One worksheet's worth of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column headers; order is fixed across sheets
pub fn header() -> Vec<String> {
    let mut header = vec![NAME_HEADER.to_string()];
    for kind in ItemKind::ALL {
        header.push(format!("{}: состояние", kind.label()));
        header.push(format!("{}: размер", kind.label()));
        header.push(format!("{}: дата выдачи", kind.label()));
    }
    header
}

pub fn build_sheet(employees: &[Employee], month: Month) -> Sheet {
    let rows = employees
        .iter()
        .map(|emp| {
            let mut row = vec![emp.name.clone()];
            for kind in ItemKind::ALL {
                let item = emp.item(kind);
                let condition = resolve(item, month);

                row.push(condition.map(|c| c.label()).unwrap_or(NOT_FILLED).to_string());
                row.push(item.size.label().to_string());
                row.push(match condition {
                    Some(c) if c.needs_replacement() => issue_date(item, month).unwrap_or_default().to_string(),
                    _ => String::new(),
                });
            }
            row
        })
        .collect();

    Sheet {
        name: month.label().to_string(),
        header: header(),
        rows,
    }
}

/// All twelve months in calendar order
pub fn build_sheets(employees: &[Employee]) -> Vec<Sheet> {
    Month::ALL.into_iter().map(|m| build_sheet(employees, m)).collect()
}

fn render(sheets: &[Sheet]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        worksheet.set_column_width(0, 25)?;

        for (col, title) in sheet.header.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &bold)?;
        }
        for (r, row) in sheet.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(r as u32 + 1, col as u16, value)?;
                }
            }
        }
    }
    Ok(workbook)
}

pub fn to_xlsx_bytes(sheets: &[Sheet]) -> DomainResult<Vec<u8>> {
    render(sheets)
        .and_then(|mut wb| wb.save_to_buffer())
        .map_err(|e| DomainError::Internal(format!("Failed to render workbook: {}", e)))
}

pub fn write_xlsx(sheets: &[Sheet], path: &Path) -> DomainResult<()> {
    let mut workbook = render(sheets)
        .map_err(|e| DomainError::Internal(format!("Failed to render workbook: {}", e)))?;
    workbook
        .save(path)
        .map_err(|e| DomainError::Store(format!("Failed to write {}: {}", path.display(), e)))?;
    log::info!("Report written to {}", path.display());
    Ok(())
}

/// `Учёт_формы_<restaurant>_<date>.xlsx`
pub fn report_file_name(restaurant: Restaurant, date: NaiveDate) -> String {
    format!("Учёт_формы_{}_{}.xlsx", restaurant.display_name(), date.format("%Y-%m-%d"))
}
