use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::Kind;
use crate::parse::Scalar;

const DATE_TIME_FORMATS: &[&str] = &[
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y/%m/%d %H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
	"%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse an invariant-calendar date or date-time; date-only values land at midnight.
pub(crate) fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
	DATE_TIME_FORMATS
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
		.or_else(|| {
			DATE_FORMATS
				.iter()
				.find_map(|format| NaiveDate::parse_from_str(text, format).ok())
				.map(|date| date.and_time(NaiveTime::MIN))
		})
}

impl Scalar for NaiveDateTime {
	const KIND: Kind = Kind::Timestamp;

	fn parse_text(text: &str) -> Option<Self> {
		parse_timestamp(text)
	}
}
