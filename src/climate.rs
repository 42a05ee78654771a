/*!
# libCLImate: Session
*/

use crate::{
	args::{self, Args},
	Classified,
	ClimateError,
	config,
	dispatch,
	Disposition,
	escalate,
	FlagArg,
	FlagSpec,
	help,
	InfoLine,
	OptionArg,
	OptionSpec,
	Registry,
	spec::{AliasSpec, Builtin, Spec},
	ValueConstraint,
	verify,
	VerifyOptions,
	Version,
	VersionPart,
};
use std::{
	cell::{RefCell, RefMut},
	fmt,
	io::{self, Write},
	path::Path,
};



/// # Default Flags-and-Options Usage Segment.
const FLAGS_AND_OPTIONS_SEGMENT: &str = "[ ... flags and options ... ]";

/// # Default Help-Hint Suffix.
const USAGE_HELP_SUFFIX: &str = "use --help for usage";

/// # Policy Bit: exit when required options or the value count fail.
const EXIT_ON_MISSING: u8 =  0b0000_0001;

/// # Policy Bit: drop unknown occurrences without reporting.
const IGNORE_UNKNOWN: u8 =   0b0000_0010;

/// # Policy Bit: exit after reporting an unknown occurrence.
const EXIT_ON_UNKNOWN: u8 =  0b0000_0100;

/// # Policy Bit: exit after usage or version output.
const EXIT_ON_USAGE: u8 =    0b0000_1000;

/// # Default Policy.
const POLICY_DEFAULT: u8 = EXIT_ON_MISSING | EXIT_ON_UNKNOWN | EXIT_ON_USAGE;



/// # Climate.
///
/// The session facade: a specification registry, the policy switches that
/// decide how violations escalate, and the presentation odds and ends that
/// feed usage and version output.
///
/// Sessions are built once, builder-style, then used to parse as many
/// argument vectors as needed. Parsing tokenizes and dispatches in one
/// pass, firing specification actions on the spot; constraint verification
/// is deferred to [`Parsed::verify`], which can run any number of times.
///
/// ## Examples
///
/// ```
/// use libclimate::{Climate, FlagSpec, OptionSpec};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let debug = Rc::new(Cell::new(false));
/// let hook = Rc::clone(&debug);
///
/// let climate = Climate::new()
///     .with_program_name("myprog")
///     .with_version([0, 1, 0])
///     .with_flag(
///         FlagSpec::new("--debug")
///             .with_alias("-d")
///             .with_help("runs in Debug mode")
///             .with_action(move |_, _| hook.set(true))
///     ).unwrap()
///     .with_option(
///         OptionSpec::new("--verbosity")
///             .with_alias("-v")
///             .with_help("specifies the verbosity")
///     ).unwrap();
///
/// let results = climate.parse(["-d", "-v", "chatty", "input.txt"]);
/// assert!(debug.get());
/// assert_eq!(results.values(), ["input.txt"]);
/// assert_eq!(results.options()[0].value(), Some("chatty"));
/// ```
pub struct Climate {
	/// # Specification Registry.
	registry: Registry,

	/// # Program Name.
	program_name: String,

	/// # Program Version.
	version: Option<Version>,

	/// # Policy Bits.
	policy: u8,

	/// # Help-Hint Suffix.
	usage_help_suffix: String,

	/// # Leading Usage Lines.
	info_lines: Vec<InfoLine>,

	/// # Usage Segment Override.
	flags_and_options: Option<String>,

	/// # Trailing Usage Placeholders.
	usage_values: Option<String>,

	/// # Positional Value Names.
	value_names: Vec<String>,

	/// # Positional Count Constraint.
	constraint: Option<ValueConstraint>,

	/// # Normative Stream.
	stdout: RefCell<Box<dyn Write>>,

	/// # Contingent Stream.
	stderr: RefCell<Box<dyn Write>>,
}

impl fmt::Debug for Climate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Climate")
			.field("registry", &self.registry)
			.field("program_name", &self.program_name)
			.field("version", &self.version)
			.field("policy", &self.policy)
			.field("usage_help_suffix", &self.usage_help_suffix)
			.field("info_lines", &self.info_lines)
			.field("flags_and_options", &self.flags_and_options)
			.field("usage_values", &self.usage_values)
			.field("value_names", &self.value_names)
			.field("constraint", &self.constraint)
			.finish_non_exhaustive()
	}
}

impl Default for Climate {
	#[inline]
	fn default() -> Self { Self::new() }
}

/// ## Construction.
impl Climate {
	#[must_use]
	/// # New.
	///
	/// A fresh session: the implicit `--help` and `--version` flags, a
	/// program name inferred from the environment, the standard streams,
	/// and a policy that exits on unknown occurrences, missing
	/// requirements, and usage/version display, but never silently drops
	/// anything.
	pub fn new() -> Self {
		Self {
			registry: Registry::with_builtins(),
			program_name: program_name_from_env(),
			version: None,
			policy: POLICY_DEFAULT,
			usage_help_suffix: USAGE_HELP_SUFFIX.to_owned(),
			info_lines: Vec::new(),
			flags_and_options: None,
			usage_values: None,
			value_names: Vec::new(),
			constraint: None,
			stdout: RefCell::new(Box::new(io::stdout())),
			stderr: RefCell::new(Box::new(io::stderr())),
		}
	}

	/// # Load From a Configuration String.
	///
	/// Build a session from a TOML document with a top-level `libclimate`
	/// table; see the crate documentation for the full schema.
	///
	/// ## Errors
	///
	/// Returns an error if the document is malformed, the `libclimate`
	/// table is absent, a key holds a value of the wrong type, or a
	/// deserialized specification fails registration.
	pub fn load_str(raw: &str) -> Result<Self, ClimateError> {
		config::from_str(raw)
	}

	/// # Load From a Configuration File.
	///
	/// Same as [`Climate::load_str`], reading the document from `path`.
	///
	/// ## Errors
	///
	/// Returns an error if the file cannot be read, or for any of the
	/// reasons [`Climate::load_str`] can fail.
	pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self, ClimateError> {
		config::from_path(path.as_ref())
	}

	#[must_use]
	/// # With a Program Name.
	///
	/// Override the inferred name; an empty string suppresses message
	/// prefixing altogether.
	pub fn with_program_name<S: Into<String>>(mut self, program_name: S) -> Self {
		self.program_name = program_name.into();
		self
	}

	#[must_use]
	/// # With a Version.
	pub fn with_version<V: Into<Version>>(mut self, version: V) -> Self {
		self.version = Some(version.into());
		self
	}

	#[must_use]
	/// # With an Inferred Version.
	///
	/// Run [`Version::infer`] over `lookup` and adopt the result, if any;
	/// a lookup with no major part leaves the version unset.
	pub fn with_version_lookup<F>(mut self, lookup: F) -> Self
	where F: Fn(VersionPart) -> Option<String> {
		self.version = Version::infer(lookup);
		self
	}

	#[must_use]
	/// # Without the Implicit `--help` Flag.
	pub fn without_help_flag(mut self) -> Self {
		self.registry.remove_builtin(Builtin::Help);
		self
	}

	#[must_use]
	/// # Without the Implicit `--version` Flag.
	pub fn without_version_flag(mut self) -> Self {
		self.registry.remove_builtin(Builtin::Version);
		self
	}

	#[must_use]
	/// # With: Exit on Missing.
	///
	/// Terminate (status `1`) when verification finds a missing required
	/// option or a value-count violation. Default `true`.
	pub const fn with_exit_on_missing(self, yes: bool) -> Self {
		self.with_policy_bit(EXIT_ON_MISSING, yes)
	}

	#[must_use]
	/// # With: Ignore Unknown.
	///
	/// Silently drop unknown occurrences at dispatch, pre-empting
	/// reporting and exiting both. Default `false`.
	pub const fn with_ignore_unknown(self, yes: bool) -> Self {
		self.with_policy_bit(IGNORE_UNKNOWN, yes)
	}

	#[must_use]
	/// # With: Exit on Unknown.
	///
	/// Terminate (status `1`) after reporting an unknown occurrence at
	/// dispatch. Default `true`.
	pub const fn with_exit_on_unknown(self, yes: bool) -> Self {
		self.with_policy_bit(EXIT_ON_UNKNOWN, yes)
	}

	#[must_use]
	/// # With: Exit on Usage.
	///
	/// Terminate (status `0`) after rendering usage or version output.
	/// Default `true`.
	pub const fn with_exit_on_usage(self, yes: bool) -> Self {
		self.with_policy_bit(EXIT_ON_USAGE, yes)
	}

	/// # Set or Clear a Policy Bit.
	const fn with_policy_bit(mut self, bit: u8, yes: bool) -> Self {
		if yes { self.policy |= bit; }
		else { self.policy &= ! bit; }
		self
	}

	#[must_use]
	/// # With a Help-Hint Suffix.
	///
	/// The trailing hint joined to violation messages, by default
	/// `"use --help for usage"`; an empty string drops the hint (and its
	/// joining `"; "`) entirely.
	pub fn with_usage_help_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
		self.usage_help_suffix = suffix.into();
		self
	}

	#[must_use]
	/// # With Info Lines.
	///
	/// Lines rendered above the `USAGE:` line; [`InfoLine::Version`]
	/// stands in for the rendered version.
	pub fn with_info_lines<I>(mut self, lines: I) -> Self
	where I: IntoIterator, I::Item: Into<InfoLine> {
		self.info_lines = lines.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	/// # With a Flags-and-Options Segment.
	///
	/// Replace the `"[ ... flags and options ... ]"` portion of the usage
	/// line.
	pub fn with_flags_and_options<S: Into<String>>(mut self, segment: S) -> Self {
		self.flags_and_options = Some(segment.into());
		self
	}

	#[must_use]
	/// # With Usage Value Placeholders.
	///
	/// Appended to the usage line, e.g. `"<dir-1> [ <dir-2> ]"`.
	pub fn with_usage_values<S: Into<String>>(mut self, values: S) -> Self {
		self.usage_values = Some(values.into());
		self
	}

	#[must_use]
	/// # With Value Names.
	///
	/// Human-readable names for the positional values, in order, used to
	/// phrase shortfall messages, e.g. `"input-path not specified"`.
	pub fn with_value_names<I>(mut self, names: I) -> Self
	where I: IntoIterator, I::Item: Into<String> {
		self.value_names = names.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	/// # With a Value Constraint.
	///
	/// Accepts anything [`ValueConstraint`] converts from: an exact count,
	/// a range, or a set of allowed counts.
	pub fn with_value_constraint<C: Into<ValueConstraint>>(mut self, constraint: C) -> Self {
		self.constraint = Some(constraint.into());
		self
	}

	#[must_use]
	/// # With a Normative Stream.
	///
	/// Where usage and version output lands; stdout unless replaced.
	pub fn with_stdout<W: Write + 'static>(mut self, stream: W) -> Self {
		self.stdout = RefCell::new(Box::new(stream));
		self
	}

	#[must_use]
	/// # With a Contingent Stream.
	///
	/// Where violation messages land; stderr unless replaced.
	pub fn with_stderr<W: Write + 'static>(mut self, stream: W) -> Self {
		self.stderr = RefCell::new(Box::new(stream));
		self
	}

	/// # With a Flag Specification.
	///
	/// ## Errors
	///
	/// Returns an error if a flag is already registered under the same
	/// canonical name.
	pub fn with_flag(mut self, spec: FlagSpec) -> Result<Self, ClimateError> {
		self.registry.push(Spec::Flag(spec))?;
		Ok(self)
	}

	/// # With an Option Specification.
	///
	/// ## Errors
	///
	/// Returns an error if an option is already registered under the same
	/// canonical name.
	pub fn with_option(mut self, spec: OptionSpec) -> Result<Self, ClimateError> {
		self.registry.push(Spec::Option(spec))?;
		Ok(self)
	}

	/// # With an Alias.
	///
	/// Register alternate forms for `resolved`, which may be value-bound,
	/// e.g. `with_alias("--verbosity=chatty", ["-c"])`.
	///
	/// ## Errors
	///
	/// Returns an error if `forms` is empty, or an alias is already
	/// registered under the same resolved target.
	pub fn with_alias<I>(mut self, resolved: &str, forms: I) -> Result<Self, ClimateError>
	where I: IntoIterator, I::Item: Into<String> {
		let spec = AliasSpec::new(resolved).with_aliases(forms);
		if spec.aliases().is_empty() {
			return Err(ClimateError::EmptyAliases(resolved.to_owned()));
		}
		self.registry.push(Spec::Alias(spec))?;
		Ok(self)
	}

	/// # Attach a Flag Action.
	///
	/// Set (or replace) the action on an already-registered flag, the
	/// deferred counterpart to [`FlagSpec::with_action`]. Returns whether
	/// the flag was found; a miss logs a warning rather than failing.
	pub fn on_flag<F>(&mut self, name: &str, action: F) -> bool
	where F: FnMut(&FlagArg, &FlagSpec) + 'static {
		self.registry.attach_flag(name, action)
	}

	/// # Attach an Option Action.
	///
	/// Same as [`Climate::on_flag`], for options.
	pub fn on_option<F>(&mut self, name: &str, action: F) -> bool
	where F: FnMut(&OptionArg, &OptionSpec) + 'static {
		self.registry.attach_option(name, action)
	}
}

/// ## Getters.
impl Climate {
	#[must_use]
	/// # Program Name.
	pub fn program_name(&self) -> &str { &self.program_name }

	#[must_use]
	/// # Version.
	pub const fn version(&self) -> Option<&Version> { self.version.as_ref() }

	#[must_use]
	/// # Specification Registry.
	pub const fn registry(&self) -> &Registry { &self.registry }

	#[must_use]
	/// # Help-Hint Suffix.
	pub fn usage_help_suffix(&self) -> &str { &self.usage_help_suffix }

	#[must_use]
	/// # Exit on Missing?
	pub const fn exit_on_missing(&self) -> bool { 0 != self.policy & EXIT_ON_MISSING }

	#[must_use]
	/// # Ignore Unknown?
	pub const fn ignore_unknown(&self) -> bool { 0 != self.policy & IGNORE_UNKNOWN }

	#[must_use]
	/// # Exit on Unknown?
	pub const fn exit_on_unknown(&self) -> bool { 0 != self.policy & EXIT_ON_UNKNOWN }

	#[must_use]
	/// # Exit on Usage?
	pub const fn exit_on_usage(&self) -> bool { 0 != self.policy & EXIT_ON_USAGE }

	#[must_use]
	/// # Value Constraint.
	pub const fn value_constraint(&self) -> Option<&ValueConstraint> {
		self.constraint.as_ref()
	}

	#[must_use]
	/// # Value Names.
	pub fn value_names(&self) -> &[String] { &self.value_names }

	/// # Info Lines.
	pub(crate) fn info_lines(&self) -> &[InfoLine] { &self.info_lines }

	/// # Flags-and-Options Segment.
	pub(crate) fn flags_and_options(&self) -> &str {
		self.flags_and_options.as_deref().unwrap_or(FLAGS_AND_OPTIONS_SEGMENT)
	}

	/// # Usage Value Placeholders.
	pub(crate) fn usage_values(&self) -> Option<&str> {
		self.usage_values.as_deref()
	}

	/// # Joined Help Hint.
	///
	/// `"; <suffix>"`, or nothing when the suffix is empty.
	pub(crate) fn hint(&self) -> String {
		if self.usage_help_suffix.is_empty() { String::new() }
		else { format!("; {}", self.usage_help_suffix) }
	}

	/// # Borrow the Normative Stream.
	pub(crate) fn normative(&self) -> RefMut<'_, Box<dyn Write>> {
		self.stdout.borrow_mut()
	}

	/// # Borrow the Contingent Stream.
	pub(crate) fn contingent(&self) -> RefMut<'_, Box<dyn Write>> {
		self.stderr.borrow_mut()
	}
}

/// ## Operations.
impl Climate {
	/// # Parse an Argument Vector.
	///
	/// Tokenize `argv` against the registry and dispatch the occurrences
	/// on the spot: actions fire, builtins render, unknowns escalate per
	/// policy. No constraint checking happens here; that waits for
	/// [`Parsed::verify`].
	///
	/// Note: with the exit-on-unknown or exit-on-usage policy bits set,
	/// this call does not return when dispatch hits the corresponding
	/// condition.
	#[must_use]
	pub fn parse<I>(&self, argv: I) -> Parsed<'_>
	where I: IntoIterator, I::Item: Into<String> {
		let args = args::tokenize(argv, &self.registry);
		let (flag_dispositions, option_dispositions) = dispatch::run(self, &args);
		Parsed { climate: self, args, flag_dispositions, option_dispositions }
	}

	#[must_use]
	/// # Parse the Process Arguments.
	///
	/// [`Climate::parse`] over [`std::env::args`], minus the leading
	/// program path.
	pub fn parse_env(&self) -> Parsed<'_> {
		self.parse(std::env::args().skip(1))
	}

	/// # Verify With Default Directives.
	///
	/// Equivalent to [`Climate::verify_with`] under
	/// [`VerifyOptions::default`]: every violation class follows the
	/// session's escalation policy.
	///
	/// ## Errors
	///
	/// Never under the default directives; the signature matches
	/// [`Climate::verify_with`] so call sites can switch freely.
	pub fn verify(&self, results: &Parsed<'_>) -> Result<(), ClimateError> {
		self.verify_with(results, VerifyOptions::default())
	}

	/// # Verify.
	///
	/// Run the constraint checks over previously-parsed results: unknown
	/// occurrences (when raising for them), then required options, then
	/// the value count. Repeatable; each call re-applies the same checks
	/// against the same results.
	///
	/// ## Errors
	///
	/// Returns the first violation in a class whose `raise_*` directive is
	/// set; everything else escalates per the session policy instead.
	pub fn verify_with(&self, results: &Parsed<'_>, options: VerifyOptions) -> Result<(), ClimateError> {
		// Ignoring unknowns beats raising for them.
		if options.raise_on_unknown && ! self.ignore_unknown() {
			if let Some(err) = results.first_unknown() { return Err(err); }
		}
		verify::check_required(self, results.options(), options.raise_on_required)?;
		verify::check_values(self, results.values(), options.raise_on_values)
	}

	/// # Parse, Then Verify.
	///
	/// ## Errors
	///
	/// Relays whatever [`Climate::verify_with`] raises under `options`.
	pub fn parse_and_verify<I>(&self, argv: I, options: VerifyOptions) -> Result<Parsed<'_>, ClimateError>
	where I: IntoIterator, I::Item: Into<String> {
		let results = self.parse(argv);
		self.verify_with(&results, options)?;
		Ok(results)
	}

	/// # Parse and Classify.
	///
	/// The one-shot form: parse, run both constraint checks under the
	/// session policy, and fold everything into an owned, bucketed
	/// [`RunResults`].
	#[must_use]
	pub fn run<I>(&self, argv: I) -> RunResults
	where I: IntoIterator, I::Item: Into<String> {
		let results = self.parse(argv);
		let missing_options =
			verify::check_required(self, results.options(), false).unwrap_or_default();
		let _ = verify::check_values(self, results.values(), false);

		let Parsed { args, flag_dispositions, option_dispositions, .. } = results;
		RunResults {
			flags: Classified::partition(&args.flags, &flag_dispositions),
			options: Classified::partition(&args.options, &option_dispositions),
			argv: args.argv,
			values: args.values,
			missing_options,
			double_slash_index: args.double_slash_index,
		}
	}

	/// # Show Usage.
	///
	/// Render the help text to the normative stream; does not return when
	/// the exit-on-usage policy bit is set (status `0`).
	pub fn show_usage(&self) {
		{
			let mut out = self.normative();
			let _ = help::render_usage(self, &mut **out);
			let _ = out.flush();
		}
		if self.exit_on_usage() { escalate::terminate(0); }
	}

	/// # Show Version.
	///
	/// Render the `"<program> <version>"` line to the normative stream;
	/// does not return when the exit-on-usage policy bit is set (status
	/// `0`).
	pub fn show_version(&self) {
		{
			let mut out = self.normative();
			let _ = help::render_version(self, &mut **out);
			let _ = out.flush();
		}
		if self.exit_on_usage() { escalate::terminate(0); }
	}

	/// # Abort.
	///
	/// Write the prefixed message to the contingent stream and terminate
	/// with status `1`. For anything fancier, see [`Climate::abort_with`].
	pub fn abort(&self, message: &str) -> ! {
		{
			let mut stream = self.contingent();
			let _ = writeln!(stream, "{}", escalate::compose(&self.program_name, message));
			let _ = stream.flush();
		}
		escalate::terminate(1)
	}

	/// # Abort, Directed.
	///
	/// Write the prefixed message to the directed stream and terminate
	/// with the directed status. With `exit` unset the process carries on
	/// and the composed message comes back instead, mostly useful for
	/// capturing what would have been said.
	pub fn abort_with(&self, message: &str, directives: &Abort) -> String {
		let program_name = directives.program_name.as_deref().unwrap_or(&self.program_name);
		let composed = escalate::compose(program_name, message);
		{
			let mut stream = match directives.stream {
				AbortStream::Contingent => self.contingent(),
				AbortStream::Normative => self.normative(),
			};
			let _ = writeln!(stream, "{composed}");
			let _ = stream.flush();
		}
		if let Some(status) = directives.exit { escalate::terminate(status); }
		composed
	}
}

/// # Program Name From the Environment.
///
/// The file name of the zeroth process argument, or empty when that cannot
/// be had.
fn program_name_from_env() -> String {
	std::env::args_os().next()
		.as_deref()
		.map(Path::new)
		.and_then(Path::file_name)
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_default()
}



#[derive(Debug)]
/// # Parsed Results.
///
/// The modern results object: the tokenized occurrences and values, the
/// per-occurrence dispositions dispatch assigned, and a handle back to the
/// session for deferred verification.
pub struct Parsed<'a> {
	/// # Owning Session.
	climate: &'a Climate,

	/// # Tokenized Arguments.
	args: Args,

	/// # Flag Dispositions.
	flag_dispositions: Vec<Disposition>,

	/// # Option Dispositions.
	option_dispositions: Vec<Disposition>,
}

impl<'a> Parsed<'a> {
	#[must_use]
	/// # Owning Session.
	pub const fn climate(&self) -> &'a Climate { self.climate }

	#[must_use]
	/// # Original Argument Vector.
	pub fn argv(&self) -> &[String] { &self.args.argv }

	#[must_use]
	/// # Flag Occurrences.
	pub fn flags(&self) -> &[FlagArg] { &self.args.flags }

	#[must_use]
	/// # Option Occurrences.
	pub fn options(&self) -> &[OptionArg] { &self.args.options }

	#[must_use]
	/// # Positional Values.
	pub fn values(&self) -> &[String] { &self.args.values }

	#[must_use]
	/// # Separator Position.
	///
	/// The index the first `--` held in the argument vector, if any.
	pub const fn double_slash_index(&self) -> Option<usize> {
		self.args.double_slash_index
	}

	#[must_use]
	/// # Flag Dispositions.
	///
	/// Parallel to [`Parsed::flags`].
	pub fn flag_dispositions(&self) -> &[Disposition] { &self.flag_dispositions }

	#[must_use]
	/// # Option Dispositions.
	///
	/// Parallel to [`Parsed::options`].
	pub fn option_dispositions(&self) -> &[Disposition] { &self.option_dispositions }

	/// # Verify With Default Directives.
	///
	/// ## Errors
	///
	/// See [`Climate::verify`].
	pub fn verify(&self) -> Result<(), ClimateError> {
		self.climate.verify(self)
	}

	/// # Verify.
	///
	/// ## Errors
	///
	/// See [`Climate::verify_with`].
	pub fn verify_with(&self, options: VerifyOptions) -> Result<(), ClimateError> {
		self.climate.verify_with(self, options)
	}

	/// # First Unknown Occurrence, as an Error.
	///
	/// Flags before options, command-line order within each, mirroring
	/// dispatch.
	pub(crate) fn first_unknown(&self) -> Option<ClimateError> {
		let hint = self.climate.hint();
		for (arg, disposition) in self.args.flags.iter().zip(&self.flag_dispositions) {
			if Disposition::Unknown == *disposition {
				return Some(ClimateError::UnrecognisedFlag {
					token: arg.to_string(),
					hint: hint.clone(),
				});
			}
		}
		for (arg, disposition) in self.args.options.iter().zip(&self.option_dispositions) {
			if Disposition::Unknown == *disposition {
				return Some(ClimateError::UnrecognisedOption {
					token: arg.to_string(),
					hint: hint.clone(),
				});
			}
		}
		None
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Run Results.
///
/// The owned, bucketed shape [`Climate::run`] returns: everything a caller
/// needs after the one-shot pipeline, free of borrows.
pub struct RunResults {
	/// # Original Argument Vector.
	pub argv: Vec<String>,

	/// # Flag Occurrences, Bucketed.
	pub flags: Classified<FlagArg>,

	/// # Option Occurrences, Bucketed.
	pub options: Classified<OptionArg>,

	/// # Positional Values.
	pub values: Vec<String>,

	/// # Missing Required Options.
	///
	/// Canonical names, in registration order.
	pub missing_options: Vec<String>,

	/// # Separator Position.
	pub double_slash_index: Option<usize>,
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Abort Directives.
///
/// Knobs for [`Climate::abort_with`]. The default matches plain
/// [`Climate::abort`]: status `1`, session program name, contingent
/// stream.
pub struct Abort {
	/// # Exit Status.
	///
	/// `None` suppresses termination; the composed message is returned
	/// instead.
	pub exit: Option<i32>,

	/// # Program-Name Override.
	pub program_name: Option<String>,

	/// # Target Stream.
	pub stream: AbortStream,
}

impl Default for Abort {
	fn default() -> Self {
		Self {
			exit: Some(1),
			program_name: None,
			stream: AbortStream::Contingent,
		}
	}
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Abort Stream.
pub enum AbortStream {
	#[default]
	/// # The Contingent (Violation) Stream.
	Contingent,

	/// # The Normative (Output) Stream.
	Normative,
}
