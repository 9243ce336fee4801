use std::fmt;

use chrono::TimeDelta;

use crate::Kind;
use crate::parse::Scalar;
use crate::parse::number::is_digits;

const SECONDS_PER_DAY: u64 = 86_400;
const NANOS_PER_TICK: u32 = 100;
/// Fractions resolve to 100 ns ticks.
const MAX_FRACTION_DIGITS: usize = 7;

/// Components of `[-][d.|d:]h:mm[:ss[.fffffff]]` before range checks.
#[derive(Debug, Default)]
struct Span {
	days: Option<u64>,
	hours: u64,
	minutes: u64,
	seconds: u64,
	nanos: u32,
}

impl Span {
	fn into_delta(self) -> Option<TimeDelta> {
		if self.minutes > 59 || self.seconds > 59 {
			return None;
		}
		if self.days.is_some() && self.hours > 23 {
			return None;
		}

		let seconds = self
			.days
			.unwrap_or(0)
			.checked_mul(SECONDS_PER_DAY)?
			.checked_add(self.hours.checked_mul(3_600)?)?
			.checked_add(self.minutes * 60 + self.seconds)?;
		let whole = TimeDelta::try_seconds(i64::try_from(seconds).ok()?)?;
		whole.checked_add(&TimeDelta::nanoseconds(i64::from(self.nanos)))
	}
}

/// Parse elapsed time; without a day component hours may exceed 23.
pub(crate) fn parse_duration(text: &str) -> Option<TimeDelta> {
	let (negative, body) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text),
	};

	let parts: Vec<&str> = body.split(':').collect();
	let span = match parts.as_slice() {
		[days] => Span {
			days: Some(number(days)?),
			..Span::default()
		},
		[head, minutes] => {
			let (days, hours) = split_days(head)?;
			Span {
				days,
				hours,
				minutes: number(minutes)?,
				..Span::default()
			}
		}
		[head, minutes, seconds] => {
			let (days, hours) = split_days(head)?;
			let (seconds, nanos) = split_fraction(seconds)?;
			Span {
				days,
				hours,
				minutes: number(minutes)?,
				seconds,
				nanos,
			}
		}
		[days, hours, minutes, seconds] => {
			let (seconds, nanos) = split_fraction(seconds)?;
			Span {
				days: Some(number(days)?),
				hours: number(hours)?,
				minutes: number(minutes)?,
				seconds,
				nanos,
			}
		}
		_ => return None,
	};

	let delta = span.into_delta()?;
	Some(if negative { -delta } else { delta })
}

fn number(text: &str) -> Option<u64> {
	if !is_digits(text) {
		return None;
	}
	text.parse().ok()
}

/// `d.h` or plain `h`.
fn split_days(text: &str) -> Option<(Option<u64>, u64)> {
	match text.split_once('.') {
		Some((days, hours)) => Some((Some(number(days)?), number(hours)?)),
		None => Some((None, number(text)?)),
	}
}

/// `ss` or `ss.fffffff`, fraction returned as nanoseconds.
fn split_fraction(text: &str) -> Option<(u64, u32)> {
	let Some((seconds, fraction)) = text.split_once('.') else {
		return Some((number(text)?, 0));
	};
	if !is_digits(fraction) || fraction.len() > MAX_FRACTION_DIGITS {
		return None;
	}

	let mut ticks = 0_u32;
	for idx in 0..MAX_FRACTION_DIGITS {
		let digit = fraction.as_bytes().get(idx).map_or(0, |byte| u32::from(byte - b'0'));
		ticks = ticks * 10 + digit;
	}
	Some((number(seconds)?, ticks * NANOS_PER_TICK))
}

/// Render as `[-][d.]hh:mm:ss[.fffffff]`, truncated to whole ticks.
pub(crate) fn format_duration(delta: &TimeDelta, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	let negative = *delta < TimeDelta::zero();
	let magnitude = if negative { -*delta } else { *delta };
	let total = magnitude.num_seconds();
	let ticks = magnitude.subsec_nanos() / NANOS_PER_TICK as i32;

	if negative {
		f.write_str("-")?;
	}
	let days = total / SECONDS_PER_DAY as i64;
	if days > 0 {
		write!(f, "{days}.")?;
	}
	let rest = total % SECONDS_PER_DAY as i64;
	write!(f, "{:02}:{:02}:{:02}", rest / 3_600, rest % 3_600 / 60, rest % 60)?;
	if ticks > 0 {
		let fraction = format!("{ticks:07}");
		write!(f, ".{}", fraction.trim_end_matches('0'))?;
	}
	Ok(())
}

impl Scalar for TimeDelta {
	const KIND: Kind = Kind::Duration;

	fn parse_text(text: &str) -> Option<Self> {
		parse_duration(text)
	}
}
