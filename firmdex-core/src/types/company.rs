//! Company record type.
//!
//! Records are flat and immutable once produced for a given cache generation.
//! Ids are unique within one snapshot but not guaranteed stable across
//! refreshes if the source data reorders.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_FOUNDED_YEAR, MIN_FOUNDED_YEAR};
use crate::error::{DirectoryError, Result};

/// One entry in the company directory.
///
/// # JSON shape
/// ```json
/// { "id": 1, "name": "Acme", "location": "NY", "industry": "Tech",
///   "employees": 100, "founded": 2000, "ticker": "ACME" }
/// ```
///
/// `ticker` is omitted entirely for non-public companies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Unique identifier within one cache generation.
    pub id: u32,
    /// Display name. Non-empty.
    pub name: String,
    /// Free-form location ("City, Region" or a single literal like
    /// "United States").
    pub location: String,
    /// Category label from a small open set.
    pub industry: String,
    /// Head count.
    pub employees: u32,
    /// Founding year.
    pub founded: i32,
    /// Stock symbol; absent for private companies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
}

impl CompanyRecord {
    /// Creates a record for a publicly listed company.
    pub fn public(
        id: u32,
        name: impl Into<String>,
        location: impl Into<String>,
        industry: impl Into<String>,
        employees: u32,
        founded: i32,
        ticker: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            industry: industry.into(),
            employees,
            founded,
            ticker: Some(ticker.into()),
        }
    }

    /// Creates a record for a private company (no ticker).
    pub fn private(
        id: u32,
        name: impl Into<String>,
        location: impl Into<String>,
        industry: impl Into<String>,
        employees: u32,
        founded: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            industry: industry.into(),
            employees,
            founded,
            ticker: None,
        }
    }

    /// Validates the record defensively.
    ///
    /// Not a schema check — the service trusts its own sources for shape —
    /// but rejects the obviously absurd: empty names, implausible founding
    /// years.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DirectoryError::InvalidRecord(format!(
                "record {} has an empty name",
                self.id
            )));
        }

        if !(MIN_FOUNDED_YEAR..=MAX_FOUNDED_YEAR).contains(&self.founded) {
            return Err(DirectoryError::InvalidRecord(format!(
                "record {} has implausible founding year {}",
                self.id, self.founded
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let record = CompanyRecord::public(1, "Acme", "NY", "Tech", 100, 2000, "ACME");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let record = CompanyRecord::private(2, "   ", "NY", "Tech", 10, 1990);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_absurd_year() {
        let mut record = CompanyRecord::private(3, "Acme", "NY", "Tech", 10, 1990);
        record.founded = -44;
        assert!(record.validate().is_err());
        record.founded = 99999;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_ticker_omitted_when_absent() {
        let record = CompanyRecord::private(4, "Stripe", "San Francisco, CA", "Fintech", 8000, 2010);
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("ticker"));

        let record = CompanyRecord::public(5, "Apple", "Cupertino, CA", "Tech", 160000, 1976, "AAPL");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"ticker\":\"AAPL\""));
    }

    #[test]
    fn test_deserialize_without_ticker() {
        let json = r#"{"id":1,"name":"Acme","location":"NY","industry":"Tech","employees":100,"founded":2000}"#;
        let record: CompanyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ticker, None);
    }
}
