/*!
# libCLImate: Arguments
*/

use crate::registry::{Registry, Resolution};
use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Flag Occurrence.
///
/// A valueless argument as it appeared on the command line, carrying both
/// the form actually given and the canonical name it resolved to. The two
/// coincide for unrecognised occurrences.
///
/// `Display` renders the given form, e.g. `-d`.
pub struct FlagArg {
	/// # Given Form.
	given_name: String,

	/// # Canonical Name.
	name: String,
}

impl fmt::Display for FlagArg {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.given_name)
	}
}

impl FlagArg {
	/// # New.
	pub(crate) fn new<S: Into<String>>(given_name: S, name: S) -> Self {
		Self {
			given_name: given_name.into(),
			name: name.into(),
		}
	}

	#[must_use]
	/// # Given Form.
	pub fn given_name(&self) -> &str { &self.given_name }

	#[must_use]
	/// # Canonical Name.
	pub fn name(&self) -> &str { &self.name }
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Option Occurrence.
///
/// A valued argument as it appeared on the command line. The value may
/// still be absent when the token ran out of road, e.g. a trailing
/// `--verbosity` with nothing after it and no default to fall back on.
///
/// `Display` renders the given form with the value re-attached, e.g.
/// `-v=chatty`.
pub struct OptionArg {
	/// # Given Form.
	given_name: String,

	/// # Canonical Name.
	name: String,

	/// # Value.
	value: Option<String>,
}

impl fmt::Display for OptionArg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value.as_deref() {
			Some(value) => write!(f, "{}={value}", self.given_name),
			None => f.write_str(&self.given_name),
		}
	}
}

impl OptionArg {
	/// # New.
	pub(crate) fn new<S: Into<String>>(given_name: S, name: S, value: Option<String>) -> Self {
		Self {
			given_name: given_name.into(),
			name: name.into(),
			value,
		}
	}

	#[must_use]
	/// # Given Form.
	pub fn given_name(&self) -> &str { &self.given_name }

	#[must_use]
	/// # Canonical Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Value.
	pub fn value(&self) -> Option<&str> { self.value.as_deref() }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Tokenized Arguments.
///
/// The raw split of an argument vector into flag occurrences, option
/// occurrences, and positional values, before any dispatch or verification
/// has had a say.
pub(crate) struct Args {
	/// # Original Vector.
	pub(crate) argv: Vec<String>,

	/// # Flag Occurrences.
	pub(crate) flags: Vec<FlagArg>,

	/// # Option Occurrences.
	pub(crate) options: Vec<OptionArg>,

	/// # Positional Values.
	pub(crate) values: Vec<String>,

	/// # Separator Position.
	///
	/// The index of the first `--` in `argv`, if any appeared.
	pub(crate) double_slash_index: Option<usize>,
}



/// # Tokenize an Argument Vector.
///
/// Split `raw` into occurrences and values against `registry`:
///
/// * A token of `--` ends recognition; everything after it is a value.
/// * Unhyphenated tokens, and the bare `-` stdin convention, are values.
/// * A token with `=` is an option occurrence, whatever the name part is
///   registered as.
/// * A registered option without `=` consumes the next token as its value,
///   hyphens and all; with no token left, or an empty value, the
///   specification's default fills in.
/// * Aliases resolve to their target's canonical name; a value-bound alias
///   becomes an option occurrence carrying the baked-in value, though an
///   explicit `=` value still wins.
///
/// Unrecognised hyphenated tokens pass through shaped by their syntax, a
/// flag without `=`, an option with, so dispatch can report them.
pub(crate) fn tokenize<I>(raw: I, registry: &Registry) -> Args
where I: IntoIterator, I::Item: Into<String> {
	let argv: Vec<String> = raw.into_iter().map(Into::into).collect();
	let len = argv.len();

	let mut flags = Vec::new();
	let mut options = Vec::new();
	let mut values = Vec::new();
	let mut double_slash_index = None;

	let mut idx = 0;
	while idx < len {
		let token = argv[idx].as_str();
		idx += 1;

		// Everything after the first separator is a value, later
		// separators included.
		if double_slash_index.is_some() {
			values.push(token.to_owned());
			continue;
		}
		if token == "--" {
			double_slash_index = Some(idx - 1);
			continue;
		}
		if token == "-" || ! token.starts_with('-') {
			values.push(token.to_owned());
			continue;
		}

		let (head, attached) = match token.split_once('=') {
			Some((h, v)) => (h, Some(v)),
			None => (token, None),
		};

		match registry.resolve(head) {
			// An attached value forces option shape even when the name
			// belongs to a flag.
			Some(Resolution::Flag(spec)) => match attached {
				Some(v) => options.push(OptionArg::new(head, spec.name(), Some(v.to_owned()))),
				None => flags.push(FlagArg::new(head, spec.name())),
			},
			Some(Resolution::Option(spec)) => {
				let given = match attached {
					Some(v) => Some(v.to_owned()),
					None if idx < len => {
						idx += 1;
						Some(argv[idx - 1].clone())
					},
					None => None,
				};
				let value = match given {
					Some(v) if v.is_empty() =>
						spec.default().map(str::to_owned).or(Some(v)),
					None => spec.default().map(str::to_owned),
					keep => keep,
				};
				options.push(OptionArg::new(head, spec.name(), value));
			},
			Some(Resolution::Bound { name, value }) => {
				let value = attached.map_or_else(|| value.to_owned(), str::to_owned);
				options.push(OptionArg::new(head, name, Some(value)));
			},
			Some(Resolution::Name(name)) => match attached {
				Some(v) => options.push(OptionArg::new(head, name, Some(v.to_owned()))),
				None => flags.push(FlagArg::new(head, name)),
			},
			None => match attached {
				Some(v) => options.push(OptionArg::new(head, head, Some(v.to_owned()))),
				None => flags.push(FlagArg::new(head, head)),
			},
		}
	}

	Args { argv, flags, options, values, double_slash_index }
}
