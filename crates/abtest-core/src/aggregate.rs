//! Group session records into per-group summaries.

use std::collections::BTreeMap;

use crate::error::AnalysisError;
use crate::types::{GroupPair, GroupSummary, SessionRecord};

/// Sum conversions and count sessions per group.
///
/// Records with an empty `session_result` still register their group but
/// add nothing to either count. The output is sorted by group label.
///
/// # Errors
///
/// Returns [`AnalysisError::CountOverflow`] if a group's sums exceed `u64`.
pub fn aggregate<'a, I>(records: I) -> Result<Vec<GroupSummary>, AnalysisError>
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    let mut groups: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

    for record in records {
        let group = record.group_id.as_str();
        let entry = groups.entry(group).or_insert((0, 0));
        if let Some(result) = record.session_result {
            let overflow = || AnalysisError::CountOverflow {
                group: group.to_string(),
            };
            entry.0 = entry.0.checked_add(result).ok_or_else(overflow)?;
            entry.1 = entry.1.checked_add(1).ok_or_else(overflow)?;
        }
    }

    tracing::debug!(groups = groups.len(), "aggregated session records");

    Ok(groups
        .into_iter()
        .map(|(group_id, (conversions, sessions))| {
            GroupSummary::new(group_id, conversions, sessions)
        })
        .collect())
}

/// Pick the `a` and `b` groups out of aggregated summaries.
///
/// # Errors
///
/// - [`AnalysisError::InsufficientGroups`] unless exactly two groups exist.
/// - [`AnalysisError::MissingGroup`] if either label is not among them.
pub fn select_pair(
    summaries: &[GroupSummary],
    label_a: &str,
    label_b: &str,
) -> Result<GroupPair, AnalysisError> {
    let found = || summaries.iter().map(|s| s.group_id.clone()).collect::<Vec<_>>();

    if summaries.len() != 2 {
        return Err(AnalysisError::InsufficientGroups { found: found() });
    }

    let lookup = |label: &str| {
        summaries
            .iter()
            .find(|s| s.group_id == label)
            .cloned()
            .ok_or_else(|| AnalysisError::MissingGroup {
                expected: label.to_string(),
                found: found(),
            })
    };

    Ok(GroupPair::new(lookup(label_a)?, lookup(label_b)?))
}
