use crate::models::{ActionRecord, GroupCount};
use std::collections::BTreeMap;

/// Counts records per Responsible. Named groups come back sorted by name; the
/// group of records without a Responsible, if any, comes last.
pub fn count_by_responsible(records: &[&ActionRecord]) -> Vec<GroupCount> {
    let mut named: BTreeMap<&str, usize> = BTreeMap::new();
    let mut unspecified = 0usize;

    for record in records {
        match record.responsible.as_deref() {
            Some(responsible) => *named.entry(responsible).or_default() += 1,
            None => unspecified += 1,
        }
    }

    let mut groups: Vec<GroupCount> = named
        .into_iter()
        .map(|(responsible, count)| GroupCount {
            responsible: Some(responsible.to_string()),
            count,
        })
        .collect();

    if unspecified > 0 {
        groups.push(GroupCount {
            responsible: None,
            count: unspecified,
        });
    }

    groups
}
