use crate::aggregate::count_by_responsible;
use crate::dataset::Dataset;
use crate::filter::{filter_records, late_only};
use crate::models::{
    ActionRecord, BarChart, BarPoint, ChartSet, ColumnDescriptor, Counters, FilterSelection,
    GroupCount, PieChart, PieSlice, Status, TableView, ViewBundle,
};
use tracing::debug;

/// Recomputes every output of the page from the full dataset.
pub fn compute_view(dataset: &Dataset, selection: &FilterSelection) -> ViewBundle {
    let filtered = filter_records(&dataset.records, selection);
    let late = late_only(&filtered);

    let counters = Counters {
        total: filtered.len(),
        on_time: filtered.len() - late.len(),
        late: late.len(),
    };
    let total_by_responsible = count_by_responsible(&filtered);
    let late_by_responsible = count_by_responsible(&late);

    debug!(
        responsible = ?selection.responsible,
        status = ?selection.status,
        total = counters.total,
        late = counters.late,
        "refreshed view"
    );

    ViewBundle {
        table: build_table(&dataset.columns, &filtered),
        counters,
        charts: ChartSet {
            total_bar: bar_chart(
                "Total Actions by Responsible",
                "Total Actions",
                &total_by_responsible,
            ),
            total_pie: pie_chart("Percentage of Actions by Responsible", &total_by_responsible),
            late_bar: bar_chart(
                "Late Actions by Responsible",
                "Late Actions",
                &late_by_responsible,
            ),
            late_pie: pie_chart(
                "Percentage of Late Actions by Responsible",
                &late_by_responsible,
            ),
        },
        total_by_responsible,
        late_by_responsible,
    }
}

fn build_table(columns: &[String], records: &[&ActionRecord]) -> TableView {
    TableView {
        columns: columns
            .iter()
            .map(|name| ColumnDescriptor {
                name: name.clone(),
                id: name.clone(),
            })
            .collect(),
        rows: records.iter().map(|record| record.cells.clone()).collect(),
    }
}

fn bar_chart(title: &str, y_label: &str, groups: &[GroupCount]) -> BarChart {
    BarChart {
        title: title.to_string(),
        x_label: "Responsible".to_string(),
        y_label: y_label.to_string(),
        bars: groups
            .iter()
            .map(|group| BarPoint {
                label: group.label().to_string(),
                responsible: group.responsible.clone(),
                value: group.count,
            })
            .collect(),
    }
}

fn pie_chart(title: &str, groups: &[GroupCount]) -> PieChart {
    let total: usize = groups.iter().map(|group| group.count).sum();
    PieChart {
        title: title.to_string(),
        slices: groups
            .iter()
            .map(|group| PieSlice {
                label: group.label().to_string(),
                responsible: group.responsible.clone(),
                value: group.count,
                share: if total == 0 {
                    0.0
                } else {
                    group.count as f64 * 100.0 / total as f64
                },
            })
            .collect(),
    }
}

/// Options for the Status filter, in display order.
pub fn status_options() -> Vec<&'static str> {
    Status::ALL.iter().map(|status| status.label()).collect()
}
