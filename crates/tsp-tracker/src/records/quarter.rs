use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting quarter, written `YYYY-QN` (for example `2025-Q1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quarter {
    year: i32,
    quarter: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuarterParseError {
    #[error("quarter '{0}' must look like YYYY-QN")]
    Format(String),
    #[error("quarter number {0} must be between 1 and 4")]
    QuarterOutOfRange(u8),
    #[error("year {0} is outside the supported reporting range")]
    YearOutOfRange(i32),
}

const MONTH_SPANS: [&str; 4] = ["Jan - Mar", "Apr - Jun", "Jul - Sep", "Oct - Dec"];

impl Quarter {
    pub fn new(year: i32, quarter: u8) -> Result<Self, QuarterParseError> {
        if !(1..=4).contains(&quarter) {
            return Err(QuarterParseError::QuarterOutOfRange(quarter));
        }
        if !(1900..=9999).contains(&year) {
            return Err(QuarterParseError::YearOutOfRange(year));
        }
        Ok(Self { year, quarter })
    }

    /// Quarter containing the given date.
    pub fn containing(date: NaiveDate) -> Result<Self, QuarterParseError> {
        let quarter = ((date.month0() / 3) + 1) as u8;
        Self::new(date.year(), quarter)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    /// Long label used by the entry form, e.g. `Q1 2025 (Jan - Mar)`.
    pub fn label(&self) -> String {
        format!(
            "Q{} {} ({})",
            self.quarter,
            self.year,
            MONTH_SPANS[usize::from(self.quarter - 1)]
        )
    }

    /// Compact chart label, e.g. `Q1 '25`.
    pub fn short_label(&self) -> String {
        format!("Q{} '{:02}", self.quarter, self.year.rem_euclid(100))
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        let month = u32::from(self.quarter - 1) * 3 + 1;
        NaiveDate::from_ymd_opt(self.year, month, 1)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        let next_start = match self.quarter {
            4 => NaiveDate::from_ymd_opt(self.year + 1, 1, 1),
            q => NaiveDate::from_ymd_opt(self.year, u32::from(q) * 3 + 1, 1),
        };
        next_start.and_then(|date| date.pred_opt())
    }

    pub fn previous(&self) -> Option<Self> {
        match self.quarter {
            1 => Self::new(self.year - 1, 4).ok(),
            q => Some(Self {
                year: self.year,
                quarter: q - 1,
            }),
        }
    }

    /// The `count` quarters ending with `self`, oldest first.
    pub fn trailing(&self, count: usize) -> Vec<Self> {
        let mut quarters = Vec::with_capacity(count);
        let mut cursor = Some(*self);
        while quarters.len() < count {
            match cursor {
                Some(quarter) => {
                    quarters.push(quarter);
                    cursor = quarter.previous();
                }
                None => break,
            }
        }
        quarters.reverse();
        quarters
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

impl FromStr for Quarter {
    type Err = QuarterParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let format_error = || QuarterParseError::Format(trimmed.to_string());

        let (year, quarter) = trimmed.split_once('-').ok_or_else(format_error)?;
        let quarter = quarter
            .strip_prefix('Q')
            .or_else(|| quarter.strip_prefix('q'))
            .ok_or_else(format_error)?;
        let year = year.parse::<i32>().map_err(|_| format_error())?;
        let quarter = quarter.parse::<u8>().map_err(|_| format_error())?;

        Self::new(year, quarter)
    }
}

impl TryFrom<String> for Quarter {
    type Error = QuarterParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quarter> for String {
    fn from(quarter: Quarter) -> Self {
        quarter.to_string()
    }
}
