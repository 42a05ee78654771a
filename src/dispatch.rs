/*!
# libCLImate: Dispatch
*/

use crate::{
	args::Args,
	Climate,
	ClimateError,
	escalate::{self, Directives},
	FlagArg,
	OptionArg,
	spec::Builtin,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
/// # Occurrence Disposition.
///
/// What became of a single flag or option occurrence during dispatch.
pub enum Disposition {
	/// # Matched; an Action (or Builtin) Ran.
	Handled,

	/// # Matched; No Action to Run.
	Unhandled,

	/// # No Matching Specification.
	Unknown,
}

#[derive(Debug, Clone, Eq, PartialEq)]
/// # Classified Occurrences.
///
/// Occurrences of one kind bucketed by disposition, as reported by
/// [`Climate::run`](crate::Climate::run). `given` always holds the lot;
/// the other three partition it.
pub struct Classified<T> {
	/// # All Occurrences.
	pub given: Vec<T>,

	/// # Matched, With an Action.
	pub handled: Vec<T>,

	/// # Matched, Without an Action.
	pub unhandled: Vec<T>,

	/// # Unmatched.
	pub unknown: Vec<T>,
}

impl<T> Default for Classified<T> {
	// Manual, so T needn't be Default itself.
	fn default() -> Self {
		Self {
			given: Vec::new(),
			handled: Vec::new(),
			unhandled: Vec::new(),
			unknown: Vec::new(),
		}
	}
}

impl<T: Clone> Classified<T> {
	/// # Partition by Disposition.
	///
	/// The two slices run in parallel; dispatch produces exactly one
	/// disposition per occurrence.
	pub(crate) fn partition(given: &[T], dispositions: &[Disposition]) -> Self {
		let mut out = Self {
			given: given.to_vec(),
			..Self::default()
		};
		for (arg, disposition) in given.iter().zip(dispositions) {
			match disposition {
				Disposition::Handled => out.handled.push(arg.clone()),
				Disposition::Unhandled => out.unhandled.push(arg.clone()),
				Disposition::Unknown => out.unknown.push(arg.clone()),
			}
		}
		out
	}
}



/// # Dispatch All Occurrences.
///
/// Flags first, then options, each kind in command-line order; this runs
/// as part of parsing, so actions fire before any verification gets a
/// look-in. Returns one disposition per occurrence, kind by kind.
pub(crate) fn run(climate: &Climate, args: &Args) -> (Vec<Disposition>, Vec<Disposition>) {
	let flags = args.flags.iter().map(|arg| dispatch_flag(climate, arg)).collect();
	let options = args.options.iter().map(|arg| dispatch_option(climate, arg)).collect();
	(flags, options)
}

/// # Dispatch One Flag.
///
/// Builtins route to the usage/version renderers; everything else fires
/// its action, if it has one.
fn dispatch_flag(climate: &Climate, arg: &FlagArg) -> Disposition {
	let Some(spec) = climate.registry().find_flag(arg.name()) else {
		report_unknown(climate, ClimateError::UnrecognisedFlag {
			token: arg.to_string(),
			hint: climate.hint(),
		});
		return Disposition::Unknown;
	};

	if let Some(builtin) = spec.builtin_kind() {
		match builtin {
			Builtin::Help => climate.show_usage(),
			Builtin::Version => climate.show_version(),
		}
		return Disposition::Handled;
	}

	if spec.fire(arg) { Disposition::Handled }
	else { Disposition::Unhandled }
}

/// # Dispatch One Option.
fn dispatch_option(climate: &Climate, arg: &OptionArg) -> Disposition {
	let Some(spec) = climate.registry().find_option(arg.name()) else {
		report_unknown(climate, ClimateError::UnrecognisedOption {
			token: arg.to_string(),
			hint: climate.hint(),
		});
		return Disposition::Unknown;
	};

	if spec.fire(arg) { Disposition::Handled }
	else { Disposition::Unhandled }
}

/// # Report an Unknown Occurrence.
///
/// Ignoring beats exiting beats warning; dispatch never raises, so the
/// escalation result can be dropped.
fn report_unknown(climate: &Climate, err: ClimateError) {
	if climate.ignore_unknown() { return; }

	let directives = Directives {
		raise: false,
		exit: climate.exit_on_unknown(),
		status: 1,
		program_name: climate.program_name(),
	};
	let mut stream = climate.contingent();
	let _ = escalate::escalate(err, &directives, &mut **stream);
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_partition() {
		let given = vec!["a", "b", "c", "d"];
		let dispositions = vec![
			Disposition::Handled,
			Disposition::Unknown,
			Disposition::Unhandled,
			Disposition::Handled,
		];

		let classified = Classified::partition(&given, &dispositions);
		assert_eq!(classified.given, ["a", "b", "c", "d"]);
		assert_eq!(classified.handled, ["a", "d"]);
		assert_eq!(classified.unhandled, ["c"]);
		assert_eq!(classified.unknown, ["b"]);
	}

	#[test]
	fn t_partition_empty() {
		let classified = Classified::<&str>::partition(&[], &[]);
		assert!(classified.given.is_empty());
		assert!(classified.handled.is_empty());
		assert!(classified.unhandled.is_empty());
		assert!(classified.unknown.is_empty());
	}
}
