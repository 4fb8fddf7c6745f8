use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MAX_FILTER_CHARS, clip};

/// Query parameters accepted by the table filter bars.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub tab: Option<String>,
}

/// Filter values held for the current page.
///
/// They are echoed back into the filter bar but never narrow the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFilters {
    pub search: String,
    pub category: String,
    pub status: String,
    pub role: String,
    #[serde(default)]
    pub amount: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

fn clean(value: Option<&String>) -> String {
    value.map(|v| clip(v, MAX_FILTER_CHARS)).unwrap_or_default()
}

fn parse_date(value: Option<&String>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
}

impl TableFilters {
    pub fn from_query(query: &FilterQuery) -> Self {
        let mut from = parse_date(query.from.as_ref());
        let mut to = parse_date(query.to.as_ref());
        if let (Some(f), Some(t)) = (from, to) {
            if t < f {
                std::mem::swap(&mut from, &mut to);
            }
        }
        Self {
            search: clean(query.q.as_ref()),
            category: clean(query.category.as_ref()),
            status: clean(query.status.as_ref()),
            role: clean(query.role.as_ref()),
            amount: clean(query.amount.as_ref()),
            from,
            to,
        }
    }

    /// True when the query carried any filter field at all.
    pub fn present_in(query: &FilterQuery) -> bool {
        query.q.is_some()
            || query.category.is_some()
            || query.status.is_some()
            || query.role.is_some()
            || query.amount.is_some()
            || query.from.is_some()
            || query.to.is_some()
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || !self.category.is_empty()
            || !self.status.is_empty()
            || !self.role.is_empty()
            || !self.amount.is_empty()
            || self.from.is_some()
            || self.to.is_some()
    }

    /// Button caption for the date-range picker.
    pub fn date_range_label(&self, placeholder: &str) -> String {
        const FMT: &str = "%b %d, %Y";
        match (self.from, self.to) {
            (Some(f), Some(t)) => format!("{} - {}", f.format(FMT), t.format(FMT)),
            (Some(f), None) => f.format(FMT).to_string(),
            _ => placeholder.to_string(),
        }
    }

    pub fn from_value(&self) -> String {
        self.from.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
    }

    pub fn to_value(&self) -> String {
        self.to.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
    }
}
