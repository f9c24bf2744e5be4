use super::codec::parse_field;
use super::{QueryCodec, QueryParams};
use crate::error::ValidationError;
use chrono::NaiveDate;

pub const START_DATE: &str = "startDate";
pub const END_DATE: &str = "endDate";

/// Inclusive reporting window. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, ValidationError> {
        match (start, end) {
            (Some(start), Some(end)) if start > end => {
                Err(ValidationError::InvertedDateRange { start, end })
            }
            _ => Ok(Self { start, end }),
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

impl QueryCodec for DateRange {
    fn encode(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt(START_DATE, self.start);
        params.insert_opt(END_DATE, self.end);
        params
    }

    fn decode(params: &QueryParams) -> Self {
        let start = parse_field::<NaiveDate>(params, START_DATE);
        let end = parse_field::<NaiveDate>(params, END_DATE);
        Self::new(start, end).unwrap_or_else(|err| {
            tracing::debug!(%err, "ignoring date range");
            Self::default()
        })
    }
}
