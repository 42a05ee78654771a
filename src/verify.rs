/*!
# libCLImate: Verification
*/

use crate::{
	Climate,
	ClimateError,
	escalate::{self, Directives},
	OptionArg,
};
use std::ops::{Range, RangeInclusive};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Positional Value Constraint.
///
/// How many positional values a session considers acceptable. Built from
/// plain counts, ranges, or count sets:
///
/// ```
/// use libclimate::ValueConstraint;
///
/// assert_eq!(ValueConstraint::from(2), ValueConstraint::Exactly(2));
/// assert_eq!(ValueConstraint::from(1..=3), ValueConstraint::Between(1, 3));
/// assert_eq!(ValueConstraint::from(1..3), ValueConstraint::Between(1, 2));
/// assert_eq!(ValueConstraint::from([1, 3]), ValueConstraint::OneOf(vec![1, 3]));
/// ```
pub enum ValueConstraint {
	/// # Exactly This Many.
	Exactly(usize),

	/// # Between, Inclusive.
	Between(usize, usize),

	/// # One of These Counts.
	OneOf(Vec<usize>),
}

impl From<usize> for ValueConstraint {
	#[inline]
	fn from(src: usize) -> Self { Self::Exactly(src) }
}

impl From<RangeInclusive<usize>> for ValueConstraint {
	fn from(src: RangeInclusive<usize>) -> Self {
		let (start, end) = src.into_inner();
		if start == end { Self::Exactly(start) }
		else { Self::Between(start, end) }
	}
}

impl From<Range<usize>> for ValueConstraint {
	// Half-open in, inclusive out.
	fn from(src: Range<usize>) -> Self {
		Self::from(src.start..=src.end.saturating_sub(1))
	}
}

impl From<Vec<usize>> for ValueConstraint {
	#[inline]
	fn from(src: Vec<usize>) -> Self { Self::OneOf(src) }
}

impl From<&[usize]> for ValueConstraint {
	#[inline]
	fn from(src: &[usize]) -> Self { Self::OneOf(src.to_vec()) }
}

impl<const N: usize> From<[usize; N]> for ValueConstraint {
	#[inline]
	fn from(src: [usize; N]) -> Self { Self::OneOf(src.to_vec()) }
}

impl ValueConstraint {
	#[must_use]
	/// # Allows a Count?
	pub fn allows(&self, given: usize) -> bool {
		match self {
			Self::Exactly(n) => given == *n,
			Self::Between(min, max) => (*min..=*max).contains(&given),
			Self::OneOf(set) => set.contains(&given),
		}
	}

	/// # Describe the Requirement.
	///
	/// The phrasing used in "wrong number of values" messages: a bare
	/// count, `"<min> - <max>"`, or the set in brackets, e.g. `"[1, 3]"`.
	pub(crate) fn describe(&self) -> String {
		match self {
			Self::Exactly(n) => n.to_string(),
			Self::Between(min, max) => format!("{min} - {max}"),
			Self::OneOf(set) => format!("{set:?}"),
		}
	}
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Per-Call Verification Directives.
///
/// The default directives leave everything to the session's escalation
/// policy; each `raise_*` switch lifts one violation class out of that
/// policy and returns it as an error instead.
pub struct VerifyOptions {
	/// # Raise on Missing Required Options.
	pub raise_on_required: bool,

	/// # Raise on Unknown Occurrences.
	pub raise_on_unknown: bool,

	/// # Raise on Value-Count Violations.
	pub raise_on_values: bool,
}

impl VerifyOptions {
	#[must_use]
	/// # Raise Everything.
	///
	/// Handy when violations should surface as plain `Result` errors, as
	/// with [`Climate::parse_and_verify`](crate::Climate::parse_and_verify).
	pub const fn raising() -> Self {
		Self {
			raise_on_required: true,
			raise_on_unknown: true,
			raise_on_values: true,
		}
	}
}



/// # Check Required Options.
///
/// Walk the required specifications in registration order and escalate one
/// violation per absent option. Returns the absent canonical names, which
/// under a non-raising, non-exiting policy can run the full length of the
/// registry.
///
/// ## Errors
///
/// Relays the first violation when `raise` is set.
pub(crate) fn check_required(
	climate: &Climate,
	given: &[OptionArg],
	raise: bool,
) -> Result<Vec<String>, ClimateError> {
	let mut missing = Vec::new();
	for spec in climate.registry().required_options() {
		if ! given.iter().any(|arg| arg.name() == spec.name()) {
			let err = ClimateError::MissingRequired {
				name: spec.name().to_owned(),
				message: spec.required_message(),
				hint: climate.hint(),
			};
			let directives = Directives {
				raise,
				exit: climate.exit_on_missing(),
				status: 1,
				program_name: climate.program_name(),
			};
			let mut stream = climate.contingent();
			escalate::escalate(err, &directives, &mut **stream)?;
			missing.push(spec.name().to_owned());
		}
	}
	Ok(missing)
}

/// # Check the Value Count.
///
/// No-op without a constraint. On violation, the value-name table is
/// consulted at the index of the given count; a hit names the first value
/// that went unsupplied, a miss falls back to the generic wrong-number
/// message.
///
/// ## Errors
///
/// Relays the violation when `raise` is set.
pub(crate) fn check_values(
	climate: &Climate,
	values: &[String],
	raise: bool,
) -> Result<(), ClimateError> {
	let Some(constraint) = climate.value_constraint() else { return Ok(()); };
	let given = values.len();
	if constraint.allows(given) { return Ok(()); }

	let err = match climate.value_names().get(given) {
		Some(name) => ClimateError::MissingValue {
			name: name.clone(),
			hint: climate.hint(),
		},
		None => ClimateError::WrongValueCount {
			given,
			expected: constraint.describe(),
			hint: climate.hint(),
		},
	};
	let directives = Directives {
		raise,
		exit: climate.exit_on_missing(),
		status: 1,
		program_name: climate.program_name(),
	};
	let mut stream = climate.contingent();
	escalate::escalate(err, &directives, &mut **stream)
}
