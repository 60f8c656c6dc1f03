//! Curated fallback dataset.
//!
//! Served whenever the ticker registry is unreachable or returns garbage, so
//! the directory is never empty. Twenty well-known companies with fully
//! populated fields; head counts are round figures from public filings, not
//! live numbers.

use firmdex_core::types::CompanyRecord;

/// Number of companies in the curated dataset.
pub const CURATED_COUNT: usize = 20;

/// Returns the fixed fallback list.
///
/// Ids are 1..=20, assigned in list order. Two entries (Stripe, SpaceX) are
/// private and carry no ticker.
pub fn curated_companies() -> Vec<CompanyRecord> {
    vec![
        CompanyRecord::public(1, "Apple", "Cupertino, CA", "Technology", 164_000, 1976, "AAPL"),
        CompanyRecord::public(2, "Microsoft", "Redmond, WA", "Technology", 221_000, 1975, "MSFT"),
        CompanyRecord::public(3, "Alphabet", "Mountain View, CA", "Technology", 182_000, 1998, "GOOGL"),
        CompanyRecord::public(4, "Amazon", "Seattle, WA", "Retail", 1_540_000, 1994, "AMZN"),
        CompanyRecord::public(5, "Meta", "Menlo Park, CA", "Technology", 67_000, 2004, "META"),
        CompanyRecord::public(6, "Tesla", "Austin, TX", "Automotive", 140_000, 2003, "TSLA"),
        CompanyRecord::public(7, "Nvidia", "Santa Clara, CA", "Semiconductors", 29_600, 1993, "NVDA"),
        CompanyRecord::public(8, "Netflix", "Los Gatos, CA", "Entertainment", 13_000, 1997, "NFLX"),
        CompanyRecord::public(9, "Salesforce", "San Francisco, CA", "Technology", 72_000, 1999, "CRM"),
        CompanyRecord::public(10, "Adobe", "San Jose, CA", "Technology", 29_900, 1982, "ADBE"),
        CompanyRecord::public(11, "Intel", "Santa Clara, CA", "Semiconductors", 124_000, 1968, "INTC"),
        CompanyRecord::public(12, "IBM", "Armonk, NY", "Technology", 282_000, 1911, "IBM"),
        CompanyRecord::public(13, "Oracle", "Austin, TX", "Technology", 164_000, 1977, "ORCL"),
        CompanyRecord::public(14, "Cisco", "San Jose, CA", "Technology", 84_900, 1984, "CSCO"),
        CompanyRecord::public(15, "JPMorgan Chase", "New York, NY", "Finance", 309_000, 1871, "JPM"),
        CompanyRecord::public(16, "Goldman Sachs", "New York, NY", "Finance", 45_300, 1869, "GS"),
        CompanyRecord::public(17, "Shopify", "Ottawa, ON", "Retail", 8_300, 2006, "SHOP"),
        CompanyRecord::public(18, "Spotify", "Stockholm, Sweden", "Entertainment", 9_800, 2006, "SPOT"),
        CompanyRecord::private(19, "Stripe", "San Francisco, CA", "Finance", 8_000, 2010),
        CompanyRecord::private(20, "SpaceX", "Hawthorne, CA", "Aerospace", 13_000, 2002),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_curated_count() {
        assert_eq!(curated_companies().len(), CURATED_COUNT);
    }

    #[test]
    fn test_ids_unique_and_sequential() {
        let companies = curated_companies();
        let ids: HashSet<u32> = companies.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), companies.len());
        for (i, company) in companies.iter().enumerate() {
            assert_eq!(company.id, (i + 1) as u32);
        }
    }

    #[test]
    fn test_all_records_valid() {
        for company in curated_companies() {
            company.validate().unwrap_or_else(|e| panic!("{}: {e}", company.name));
        }
    }

    #[test]
    fn test_private_entries_have_no_ticker() {
        let companies = curated_companies();
        let private: Vec<&str> = companies
            .iter()
            .filter(|c| c.ticker.is_none())
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(private, vec!["Stripe", "SpaceX"]);
    }
}
