//! View state: the user-controlled parameters driving the visible subset.
//!
//! The page-reset rule lives here as an explicit state transition: changing
//! any filter or the sort puts the user back on page 1. That is a UX
//! contract, not a side effect of re-rendering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::PAGE_SIZE;
use crate::error::DirectoryError;

/// Field the directory view sorts by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Company name (case-insensitive).
    #[default]
    Name,
    /// Location (case-insensitive).
    Location,
    /// Industry label (case-insensitive).
    Industry,
    /// Head count.
    Employees,
    /// Founding year.
    Founded,
}

impl SortKey {
    /// Lowercase label, matching the `FromStr` spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Location => "location",
            SortKey::Industry => "industry",
            SortKey::Employees => "employees",
            SortKey::Founded => "founded",
        }
    }
}

impl FromStr for SortKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "location" => Ok(SortKey::Location),
            "industry" => Ok(SortKey::Industry),
            "employees" => Ok(SortKey::Employees),
            "founded" => Ok(SortKey::Founded),
            other => Err(DirectoryError::Config(format!(
                "unknown sort key '{other}' (expected name, location, industry, employees, or founded)"
            ))),
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// User-controlled view parameters for one session.
///
/// Empty filter strings mean "inactive". `page` is 1-based; out-of-range
/// pages are clamped at projection time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Substring searched in `name` and `location`, case-insensitive.
    pub search_term: String,
    /// Exact location filter; empty means all locations.
    pub location_filter: String,
    /// Exact industry filter; empty means all industries.
    pub industry_filter: String,
    /// Field to sort by.
    pub sort_key: SortKey,
    /// Sort direction.
    pub sort_direction: SortDirection,
    /// Current page, 1-based.
    pub page: usize,
    /// Records per page.
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            location_filter: String::new(),
            industry_filter: String::new(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl ViewState {
    /// Sets the search term and returns to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Sets the location filter and returns to page 1.
    pub fn set_location_filter(&mut self, location: impl Into<String>) {
        self.location_filter = location.into();
        self.page = 1;
    }

    /// Sets the industry filter and returns to page 1.
    pub fn set_industry_filter(&mut self, industry: impl Into<String>) {
        self.industry_filter = industry.into();
        self.page = 1;
    }

    /// Sorts by `key`, flipping direction when the key is already active.
    ///
    /// Returns to page 1 either way.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    /// Sets the sort key (keeping direction) and returns to page 1.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.page = 1;
    }

    /// Sets the sort direction and returns to page 1.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
        self.page = 1;
    }

    /// Moves to a page. No clamping here; projection clamps against the
    /// actual match count.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}
