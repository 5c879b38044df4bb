use crate::errors::LoadError;
use crate::models::{
    ActionRecord, Cell, Status, DATE_COLUMN, RESPONSIBLE_COLUMN, STATUS_COLUMN, TARGET_COLUMN,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// The action sheet as loaded at startup. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<ActionRecord>,
    /// "Today" as seen by the loader; every Status was derived against it.
    pub loaded_on: NaiveDate,
    pub responsibles: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    responsible: usize,
    date: usize,
    target: usize,
    status: usize,
}

impl Dataset {
    /// Builds the dataset from a header row and data rows that were already read
    /// from the workbook.
    pub fn from_rows(
        header: Vec<Cell>,
        rows: Vec<Vec<Cell>>,
        today: NaiveDate,
    ) -> Result<Self, LoadError> {
        let mut columns = dedupe_columns(
            header
                .iter()
                .enumerate()
                .map(|(idx, cell)| column_name(idx, cell))
                .collect(),
        );

        let find = |name: &'static str| {
            columns
                .iter()
                .position(|column| column == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        let responsible = find(RESPONSIBLE_COLUMN)?;
        let date = find(DATE_COLUMN)?;
        let target = find(TARGET_COLUMN)?;
        let existing_status = columns.iter().position(|column| column == STATUS_COLUMN);
        let status = match existing_status {
            Some(idx) => idx,
            None => {
                columns.push(STATUS_COLUMN.to_string());
                columns.len() - 1
            }
        };
        let index = ColumnIndex {
            responsible,
            date,
            target,
            status,
        };

        let mut records = Vec::with_capacity(rows.len());
        let mut invalid_dates = 0usize;
        for (row_number, mut cells) in rows.into_iter().enumerate() {
            if cells.iter().all(Cell::is_empty) {
                continue;
            }
            cells.resize(columns.len(), Cell::Empty);
            // header is row 1
            let line = row_number + 2;
            records.push(build_record(cells, index, today, line, &mut invalid_dates));
        }

        if invalid_dates > 0 {
            warn!("{invalid_dates} date cells could not be parsed and were left empty");
        }

        let responsibles = records
            .iter()
            .filter_map(|record| record.responsible.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(Self {
            columns,
            records,
            loaded_on: today,
            responsibles,
        })
    }
}

fn build_record(
    mut cells: Vec<Cell>,
    index: ColumnIndex,
    today: NaiveDate,
    line: usize,
    invalid_dates: &mut usize,
) -> ActionRecord {
    let responsible = responsible_value(&cells[index.responsible]);

    let mut parse_column = |idx: usize, name: &str| {
        let parsed = parse_date_cell(&cells[idx]);
        if parsed.is_none() && !cells[idx].is_empty() {
            debug!(line, column = name, value = ?cells[idx], "unparseable date");
            *invalid_dates += 1;
        }
        parsed
    };
    let date = parse_column(index.date, DATE_COLUMN);
    let target = parse_column(index.target, TARGET_COLUMN);
    let status = Status::classify(target, today);

    cells[index.date] = date.map_or(Cell::Empty, Cell::Date);
    cells[index.target] = target.map_or(Cell::Empty, Cell::Date);
    cells[index.status] = Cell::Text(status.label().to_string());

    ActionRecord {
        responsible,
        date,
        target,
        status,
        cells,
    }
}

fn column_name(idx: usize, cell: &Cell) -> String {
    match cell {
        Cell::Text(text) if !text.trim().is_empty() => text.trim().to_string(),
        Cell::Int(n) => n.to_string(),
        Cell::Float(f) => f.to_string(),
        Cell::Bool(b) => b.to_string(),
        Cell::Date(date) => date.to_string(),
        Cell::DateTime(datetime) => datetime.to_string(),
        _ => format!("Unnamed: {idx}"),
    }
}

/// Repeated header names get a `.1`, `.2`, ... suffix so every column id is unique.
fn dedupe_columns(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    let mut columns = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        columns.push(candidate);
    }
    columns
}

fn responsible_value(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Cell::Int(n) => Some(n.to_string()),
        Cell::Float(f) => Some(f.to_string()),
        Cell::Bool(b) => Some(b.to_string()),
        Cell::Date(date) => Some(date.to_string()),
        Cell::DateTime(datetime) => Some(datetime.to_string()),
        Cell::Empty => None,
    }
}

pub fn parse_date_cell(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(date) => Some(*date),
        Cell::DateTime(datetime) => Some(datetime.date()),
        Cell::Text(text) => parse_date_text(text),
        _ => None,
    }
}

pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|datetime| datetime.date())
        })
}
