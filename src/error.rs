/*!
# libCLImate: Errors
*/

use std::io::Error as IoError;
use thiserror::Error;



#[derive(Debug, Error)]
/// # Climate Error.
///
/// This enum covers both halves of the crate's error surface: violations
/// discovered while reconciling an argument vector against the registered
/// specifications, and failures raised while building a
/// [`Climate`](crate::Climate) by hand or from a configuration document.
///
/// Argument violations are normally reported through the session's
/// escalation policy (a warning line or a process exit) rather than
/// returned, so those variants only reach callers that explicitly ask for
/// raising behavior via [`VerifyOptions`](crate::VerifyOptions).
///
/// The `hint` fields hold the session's pre-joined help-hint suffix, e.g.
/// `"; use --help for usage"`, or an empty string when suppressed, keeping
/// `Display` output identical to what the escalation policy writes.
pub enum ClimateError {
	#[error("unrecognised flag '{token}'{hint}")]
	/// # Unrecognised Flag.
	///
	/// A flag-shaped token matched no registered specification.
	UnrecognisedFlag {
		/// # Offending Token.
		token: String,
		/// # Help Hint.
		hint: String,
	},

	#[error("unrecognised option '{token}'{hint}")]
	/// # Unrecognised Option.
	///
	/// An option-shaped token (name and value) matched no registered
	/// specification.
	UnrecognisedOption {
		/// # Offending Token.
		token: String,
		/// # Help Hint.
		hint: String,
	},

	#[error("{message}{hint}")]
	/// # Missing Required Option.
	///
	/// A specification marked required had no matching occurrence. The
	/// message comes from the specification itself, defaulting to
	/// `"<name> not specified"`.
	MissingRequired {
		/// # Canonical Option Name.
		name: String,
		/// # Required Message.
		message: String,
		/// # Help Hint.
		hint: String,
	},

	#[error("{name} not specified{hint}")]
	/// # Missing Named Value.
	///
	/// The positional value count fell short and a human-readable name was
	/// configured for the first absent slot.
	MissingValue {
		/// # Value Name.
		name: String,
		/// # Help Hint.
		hint: String,
	},

	#[error("wrong number of values: {given} given, {expected} required{hint}")]
	/// # Wrong Number of Values.
	///
	/// The positional value count failed the configured constraint and no
	/// per-slot name applied.
	WrongValueCount {
		/// # Values Given.
		given: usize,
		/// # Requirement Description.
		expected: String,
		/// # Help Hint.
		hint: String,
	},

	#[error("duplicate {kind} specification '{name}'")]
	/// # Duplicate Specification.
	///
	/// Canonical names are unique per kind; registering a second flag (or
	/// option, or alias) under an existing name is refused.
	DuplicateSpec {
		/// # Specification Kind.
		kind: &'static str,
		/// # Canonical Name.
		name: String,
	},

	#[error("no aliases supplied for '{0}'")]
	/// # Empty Alias List.
	///
	/// An alias specification needs at least one alternate form.
	EmptyAliases(String),

	#[error("missing element '{0}'")]
	/// # Missing Configuration Element.
	///
	/// A required key was absent from a configuration document.
	MissingElement(String),

	#[error("wrong type for '{path}': expected {expected}")]
	/// # Wrong Configuration Type.
	///
	/// A configuration key was present but held a value of the wrong type.
	WrongType {
		/// # Key Path.
		path: String,
		/// # Expected Type.
		expected: &'static str,
	},

	#[error("malformed configuration: {0}")]
	/// # Configuration Syntax.
	///
	/// The configuration document was not valid TOML.
	Syntax(#[from] toml::de::Error),

	#[error("unable to read configuration: {0}")]
	/// # Configuration I/O.
	///
	/// The configuration file could not be read.
	Io(#[from] IoError),
}
