use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const RESPONSIBLE_COLUMN: &str = "Responsible";
pub const DATE_COLUMN: &str = "Date";
pub const TARGET_COLUMN: &str = "Target";
pub const STATUS_COLUMN: &str = "Status";

/// Label shown for actions that have no Responsible value.
pub const UNSPECIFIED_LABEL: &str = "(unspecified)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "On Time", alias = "OnTime")]
    OnTime,
    Late,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::OnTime, Status::Late];

    /// An action is late only when it has a target strictly before `today`.
    /// A missing target is never late.
    pub fn classify(target: Option<NaiveDate>, today: NaiveDate) -> Self {
        match target {
            Some(target) if target < today => Status::Late,
            _ => Status::OnTime,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::OnTime => "On Time",
            Status::Late => "Late",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "On Time" | "OnTime" => Some(Status::OnTime),
            "Late" => Some(Status::Late),
            _ => None,
        }
    }
}

/// A single spreadsheet value, passed through to the table untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    pub responsible: Option<String>,
    pub date: Option<NaiveDate>,
    pub target: Option<NaiveDate>,
    pub status: Status,
    /// Full row in dataset column order, derived Status included.
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub responsible: Vec<String>,
    pub status: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub responsible: Option<String>,
    pub count: usize,
}

impl GroupCount {
    pub fn label(&self) -> &str {
        self.responsible.as_deref().unwrap_or(UNSPECIFIED_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub total: usize,
    pub on_time: usize,
    pub late: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub label: String,
    pub responsible: Option<String>,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<BarPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub responsible: Option<String>,
    pub value: usize,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    pub total_bar: BarChart,
    pub total_pie: PieChart,
    pub late_bar: BarChart,
    pub late_pie: PieChart,
}

/// Everything the page shows, produced in one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct ViewBundle {
    pub table: TableView,
    pub counters: Counters,
    pub total_by_responsible: Vec<GroupCount>,
    pub late_by_responsible: Vec<GroupCount>,
    pub charts: ChartSet,
}
