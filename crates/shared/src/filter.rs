//! Exercise log filtering.
//!
//! A [`LogFilter`] is built from the raw `from`, `to` and `limit` query values.
//! Values that don't parse never reject the request, they simply don't
//! constrain the result. The same filter is evaluated in memory with
//! [`LogFilter::apply`] and translated into SQL by the sqlite store.

use chrono::NaiveDate;

use crate::date::parse_calendar_date;

/// One end of the date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Active(NaiveDate),
    Inactive,
}

impl DateBound {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(parse_calendar_date) {
            Some(Ok(date)) => Self::Active(date),
            _ => Self::Inactive,
        }
    }

    pub fn active(&self) -> Option<NaiveDate> {
        match self {
            Self::Active(date) => Some(*date),
            Self::Inactive => None,
        }
    }
}

/// Maximum number of log entries to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Limited(usize),
    Unlimited,
}

impl Cap {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().parse::<usize>()) {
            Some(Ok(n)) => Self::Limited(n),
            _ => Self::Unlimited,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Limited(n) => Some(*n),
            Self::Unlimited => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFilter {
    pub from: DateBound,
    pub to: DateBound,
    pub cap: Cap,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            from: DateBound::Inactive,
            to: DateBound::Inactive,
            cap: Cap::Unlimited,
        }
    }
}

impl LogFilter {
    pub fn build(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: DateBound::parse(from),
            to: DateBound::parse(to),
            cap: Cap::parse(limit),
        }
    }

    /// Both bounds are inclusive
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.from.active().map_or(true, |from| date >= from)
            && self.to.active().map_or(true, |to| date <= to)
    }

    /// Keeps the items inside the date range, in their original order, up to
    /// the cap
    pub fn apply<T, I, F>(&self, items: I, date_of: F) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> NaiveDate,
    {
        let matching = items.into_iter().filter(|item| self.matches(date_of(item)));
        match self.cap.limit() {
            Some(n) => matching.take(n).collect(),
            None => matching.collect(),
        }
    }
}
