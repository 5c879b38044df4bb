use crate::dataset::{parse_date_text, Dataset};
use crate::errors::LoadError;
use crate::models::Cell;
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, Timelike};
use std::path::Path;
use tracing::info;

/// Reads the action sheet from a workbook. Runs once, before the server binds.
pub fn load_dataset(path: &Path, sheet: &str, today: NaiveDate) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|err| LoadError::Unreadable {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|err| LoadError::Sheet {
            sheet: sheet.to_string(),
            message: err.to_string(),
        })?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| LoadError::EmptySheet(sheet.to_string()))?
        .iter()
        .map(to_cell)
        .collect();
    let body = rows.map(|row| row.iter().map(to_cell).collect()).collect();

    let dataset = Dataset::from_rows(header, body, today)?;
    info!(
        "loaded {} actions from {} (sheet '{sheet}', today {today})",
        dataset.records.len(),
        path.display()
    );
    Ok(dataset)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(n) => Cell::Int(*n),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        // durations are numbers, not points in time
        Data::DateTime(dt) if !dt.is_datetime() => Cell::Float(dt.as_f64()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) if datetime.num_seconds_from_midnight() == 0 => {
                Cell::Date(datetime.date())
            }
            Some(datetime) => Cell::DateTime(datetime),
            None => Cell::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_date_text(s).map_or_else(|| Cell::Text(s.clone()), Cell::Date),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

#[cfg(test)]
#[path = "../tests/support/workbook.rs"]
mod workbook;
