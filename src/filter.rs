use crate::models::{ActionRecord, FilterSelection, Status};

/// Keeps the records matching both dimensions of the selection, in input order.
/// An empty list on either dimension does not filter on it; unknown values
/// match nothing.
pub fn filter_records<'a, I>(records: I, selection: &FilterSelection) -> Vec<&'a ActionRecord>
where
    I: IntoIterator<Item = &'a ActionRecord>,
{
    let statuses: Vec<Option<Status>> = selection
        .status
        .iter()
        .map(|label| Status::from_label(label))
        .collect();

    records
        .into_iter()
        .filter(|record| matches_responsible(record, &selection.responsible))
        .filter(|record| statuses.is_empty() || statuses.contains(&Some(record.status)))
        .collect()
}

pub fn late_only<'a>(records: &[&'a ActionRecord]) -> Vec<&'a ActionRecord> {
    records
        .iter()
        .copied()
        .filter(|record| record.status == Status::Late)
        .collect()
}

fn matches_responsible(record: &ActionRecord, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    match record.responsible.as_deref() {
        Some(responsible) => selected.iter().any(|value| value == responsible),
        None => false,
    }
}
