//! Filter → sort → paginate projection.
//!
//! The three filters are ANDed: a record must satisfy every active one.
//! Sorting is a stable sort, so equal keys keep their snapshot order and the
//! result is deterministic under ties. Pagination clamps the requested page
//! into range rather than failing.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use firmdex_core::types::{CompanyRecord, SortDirection, SortKey, ViewState};

/// One visible page of the directory plus its pagination metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirectoryPage {
    /// The records visible on this page, in sorted order.
    pub records: Vec<CompanyRecord>,
    /// Total records matching the active filters (across all pages).
    pub total_matching: usize,
    /// `ceil(total_matching / page_size)`; 0 when nothing matches.
    pub total_pages: usize,
    /// The page actually served, after clamping into `[1, max(1, total_pages)]`.
    pub page: usize,
}

/// Projects the full record list through the view state.
pub fn project(records: &[CompanyRecord], state: &ViewState) -> DirectoryPage {
    let mut matching: Vec<&CompanyRecord> = records
        .iter()
        .filter(|record| matches_filters(record, state))
        .collect();

    // Stable sort: ties keep snapshot order.
    matching.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, state.sort_key);
        match state.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let page_size = state.page_size.max(1);
    let total_matching = matching.len();
    let total_pages = total_matching.div_ceil(page_size);
    let page = state.page.clamp(1, total_pages.max(1));

    let visible = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    DirectoryPage {
        records: visible,
        total_matching,
        total_pages,
        page,
    }
}

/// Unique locations across the full unfiltered list, sorted lexicographically.
///
/// Recompute when the records change, not when filters change — these
/// populate the filter choices, so they must not shrink as filters narrow.
pub fn distinct_locations(records: &[CompanyRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.location.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Unique industries across the full unfiltered list, sorted lexicographically.
pub fn distinct_industries(records: &[CompanyRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.industry.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

fn matches_filters(record: &CompanyRecord, state: &ViewState) -> bool {
    let search_ok = state.search_term.is_empty() || {
        let needle = state.search_term.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.location.to_lowercase().contains(&needle)
    };

    search_ok
        && (state.location_filter.is_empty() || record.location == state.location_filter)
        && (state.industry_filter.is_empty() || record.industry == state.industry_filter)
}

fn compare_by_key(a: &CompanyRecord, b: &CompanyRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_case_insensitive(&a.name, &b.name),
        SortKey::Location => compare_case_insensitive(&a.location, &b.location),
        SortKey::Industry => compare_case_insensitive(&a.industry, &b.industry),
        SortKey::Employees => a.employees.cmp(&b.employees),
        SortKey::Founded => a.founded.cmp(&b.founded),
    }
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
