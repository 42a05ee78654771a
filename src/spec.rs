/*!
# libCLImate: Specifications
*/

use crate::{
	FlagArg,
	OptionArg,
};
use std::cell::RefCell;
use std::fmt;



/// # Flag Action.
///
/// A boxed callback fired when a matching flag occurrence is dispatched,
/// receiving the occurrence and its specification.
pub type FlagAction = Box<dyn FnMut(&FlagArg, &FlagSpec)>;

/// # Option Action.
///
/// A boxed callback fired when a matching option occurrence is dispatched,
/// receiving the occurrence and its specification.
pub type OptionAction = Box<dyn FnMut(&OptionArg, &OptionSpec)>;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Builtin Marker.
///
/// The implicit help/version flags carry one of these so dispatch can route
/// them to the usage and version renderers instead of a user action.
pub(crate) enum Builtin {
	/// # The `--help` Flag.
	Help,

	/// # The `--version` Flag.
	Version,
}



/// # Flag Specification.
///
/// A valueless argument, e.g. `--verbose`, with any number of alternate
/// forms and an optional action to fire when dispatched.
///
/// ## Examples
///
/// ```
/// use libclimate::FlagSpec;
///
/// let spec = FlagSpec::new("--debug")
///     .with_alias("-d")
///     .with_help("runs in Debug mode");
///
/// assert_eq!(spec.name(), "--debug");
/// assert_eq!(spec.aliases(), ["-d"]);
/// ```
pub struct FlagSpec {
	/// # Canonical Name.
	name: String,

	/// # Alternate Forms.
	aliases: Vec<String>,

	/// # Help Text.
	help: Option<String>,

	/// # Action Slot.
	action: Option<RefCell<FlagAction>>,

	/// # Builtin Marker.
	builtin: Option<Builtin>,
}

impl fmt::Debug for FlagSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FlagSpec")
			.field("name", &self.name)
			.field("aliases", &self.aliases)
			.field("help", &self.help)
			.field("action", &self.action.is_some())
			.field("builtin", &self.builtin)
			.finish()
	}
}

/// ## Construction.
impl FlagSpec {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self {
			name: name.into(),
			aliases: Vec::new(),
			help: None,
			action: None,
			builtin: None,
		}
	}

	/// # The Implicit `--help` Flag.
	pub(crate) fn help_flag() -> Self {
		Self {
			builtin: Some(Builtin::Help),
			..Self::new("--help").with_help("shows this help and terminates")
		}
	}

	/// # The Implicit `--version` Flag.
	pub(crate) fn version_flag() -> Self {
		Self {
			builtin: Some(Builtin::Version),
			..Self::new("--version").with_help("shows version and terminates")
		}
	}

	#[must_use]
	/// # With an Alias.
	pub fn with_alias<S: Into<String>>(mut self, alias: S) -> Self {
		self.aliases.push(alias.into());
		self
	}

	#[must_use]
	/// # With Aliases.
	pub fn with_aliases<I>(mut self, aliases: I) -> Self
	where I: IntoIterator, I::Item: Into<String> {
		self.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}

	#[must_use]
	/// # With Help Text.
	pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
		self.help = Some(help.into());
		self
	}

	#[must_use]
	/// # With an Action.
	///
	/// Replaces any previously-set action.
	pub fn with_action<F>(mut self, action: F) -> Self
	where F: FnMut(&FlagArg, &FlagSpec) + 'static {
		self.action = Some(RefCell::new(Box::new(action)));
		self
	}
}

/// ## Getters.
impl FlagSpec {
	#[must_use]
	/// # Canonical Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Alternate Forms.
	pub fn aliases(&self) -> &[String] { &self.aliases }

	#[must_use]
	/// # Help Text.
	pub fn help(&self) -> Option<&str> { self.help.as_deref() }

	#[must_use]
	/// # Has an Action?
	pub const fn has_action(&self) -> bool { self.action.is_some() }

	/// # Builtin Marker.
	pub(crate) const fn builtin_kind(&self) -> Option<Builtin> { self.builtin }
}

/// ## Dispatch.
impl FlagSpec {
	/// # Replace the Action.
	pub(crate) fn set_action<F>(&mut self, action: F)
	where F: FnMut(&FlagArg, &FlagSpec) + 'static {
		self.action = Some(RefCell::new(Box::new(action)));
	}

	/// # Fire the Action.
	///
	/// Invoke the action, if any, with the occurrence. Returns `true` when
	/// an action ran.
	pub(crate) fn fire(&self, arg: &FlagArg) -> bool {
		self.action.as_ref().is_some_and(|action| {
			let mut action = action.borrow_mut();
			(*action)(arg, self);
			true
		})
	}
}



/// # Option Specification.
///
/// A valued argument, e.g. `--verbosity=chatty`, extending [`FlagSpec`]'s
/// surface with a default value, an allowed-value list, and a required
/// marker for verification.
pub struct OptionSpec {
	/// # Canonical Name.
	name: String,

	/// # Alternate Forms.
	aliases: Vec<String>,

	/// # Help Text.
	help: Option<String>,

	/// # Allowed Values.
	values: Vec<String>,

	/// # Default Value.
	default: Option<String>,

	/// # Required?
	required: bool,

	/// # Custom Required Message.
	required_message: Option<String>,

	/// # Action Slot.
	action: Option<RefCell<OptionAction>>,
}

impl fmt::Debug for OptionSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OptionSpec")
			.field("name", &self.name)
			.field("aliases", &self.aliases)
			.field("help", &self.help)
			.field("values", &self.values)
			.field("default", &self.default)
			.field("required", &self.required)
			.field("required_message", &self.required_message)
			.field("action", &self.action.is_some())
			.finish()
	}
}

/// ## Construction.
impl OptionSpec {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self {
			name: name.into(),
			aliases: Vec::new(),
			help: None,
			values: Vec::new(),
			default: None,
			required: false,
			required_message: None,
			action: None,
		}
	}

	#[must_use]
	/// # With an Alias.
	pub fn with_alias<S: Into<String>>(mut self, alias: S) -> Self {
		self.aliases.push(alias.into());
		self
	}

	#[must_use]
	/// # With Aliases.
	pub fn with_aliases<I>(mut self, aliases: I) -> Self
	where I: IntoIterator, I::Item: Into<String> {
		self.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}

	#[must_use]
	/// # With Help Text.
	pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
		self.help = Some(help.into());
		self
	}

	#[must_use]
	/// # With Allowed Values.
	///
	/// These are advisory, rendered under the option's help block; parsing
	/// does not reject other values.
	pub fn with_values<I>(mut self, values: I) -> Self
	where I: IntoIterator, I::Item: Into<String> {
		self.values.extend(values.into_iter().map(Into::into));
		self
	}

	#[must_use]
	/// # With a Default Value.
	///
	/// Substituted when an occurrence arrives without a value, or with an
	/// empty one.
	pub fn with_default<S: Into<String>>(mut self, default: S) -> Self {
		self.default = Some(default.into());
		self
	}

	#[must_use]
	/// # With a Required Marker.
	pub const fn with_required(mut self, yes: bool) -> Self {
		self.required = yes;
		self
	}

	#[must_use]
	/// # With a Custom Required Message.
	///
	/// Overrides the `"<name> not specified"` default used when a required
	/// option goes missing.
	pub fn with_required_message<S: Into<String>>(mut self, message: S) -> Self {
		self.required_message = Some(message.into());
		self
	}

	#[must_use]
	/// # With an Action.
	///
	/// Replaces any previously-set action.
	pub fn with_action<F>(mut self, action: F) -> Self
	where F: FnMut(&OptionArg, &OptionSpec) + 'static {
		self.action = Some(RefCell::new(Box::new(action)));
		self
	}
}

/// ## Getters.
impl OptionSpec {
	#[must_use]
	/// # Canonical Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Alternate Forms.
	pub fn aliases(&self) -> &[String] { &self.aliases }

	#[must_use]
	/// # Help Text.
	pub fn help(&self) -> Option<&str> { self.help.as_deref() }

	#[must_use]
	/// # Allowed Values.
	pub fn values(&self) -> &[String] { &self.values }

	#[must_use]
	/// # Default Value.
	pub fn default(&self) -> Option<&str> { self.default.as_deref() }

	#[must_use]
	/// # Required?
	pub const fn required(&self) -> bool { self.required }

	#[must_use]
	/// # Required Message.
	///
	/// The custom message if set, otherwise `"<name> not specified"`.
	pub fn required_message(&self) -> String {
		self.required_message.as_ref().map_or_else(
			|| format!("{} not specified", self.name),
			Clone::clone,
		)
	}

	#[must_use]
	/// # Has an Action?
	pub const fn has_action(&self) -> bool { self.action.is_some() }
}

/// ## Dispatch.
impl OptionSpec {
	/// # Replace the Action.
	pub(crate) fn set_action<F>(&mut self, action: F)
	where F: FnMut(&OptionArg, &OptionSpec) + 'static {
		self.action = Some(RefCell::new(Box::new(action)));
	}

	/// # Fire the Action.
	///
	/// Invoke the action, if any, with the occurrence. Returns `true` when
	/// an action ran.
	pub(crate) fn fire(&self, arg: &OptionArg) -> bool {
		self.action.as_ref().is_some_and(|action| {
			let mut action = action.borrow_mut();
			(*action)(arg, self);
			true
		})
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Alias Specification.
///
/// Extra forms for a specification registered elsewhere. The resolved
/// target may embed a value, e.g. `--verbosity=chatty`, in which case a
/// matching token becomes an option occurrence carrying that value.
///
/// ## Examples
///
/// ```
/// use libclimate::AliasSpec;
///
/// let spec = AliasSpec::new("--verbosity=chatty").with_alias("-c");
/// assert_eq!(spec.target(), "--verbosity");
/// assert_eq!(spec.bound_value(), Some("chatty"));
/// ```
pub struct AliasSpec {
	/// # Resolved Target.
	resolved: String,

	/// # Alternate Forms.
	aliases: Vec<String>,
}

impl AliasSpec {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(resolved: S) -> Self {
		Self {
			resolved: resolved.into(),
			aliases: Vec::new(),
		}
	}

	#[must_use]
	/// # With an Alias.
	pub fn with_alias<S: Into<String>>(mut self, alias: S) -> Self {
		self.aliases.push(alias.into());
		self
	}

	#[must_use]
	/// # With Aliases.
	pub fn with_aliases<I>(mut self, aliases: I) -> Self
	where I: IntoIterator, I::Item: Into<String> {
		self.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}

	#[must_use]
	/// # Resolved Target.
	///
	/// The full target, value and all.
	pub fn resolved(&self) -> &str { &self.resolved }

	#[must_use]
	/// # Alternate Forms.
	pub fn aliases(&self) -> &[String] { &self.aliases }

	#[must_use]
	/// # Target Name.
	///
	/// The resolved target with any bound value stripped.
	pub fn target(&self) -> &str {
		self.resolved.split_once('=').map_or(self.resolved.as_str(), |(name, _)| name)
	}

	#[must_use]
	/// # Bound Value.
	pub fn bound_value(&self) -> Option<&str> {
		self.resolved.split_once('=').map(|(_, value)| value)
	}
}



#[derive(Debug)]
/// # Specification.
///
/// The registry stores all three kinds side by side, preserving
/// registration order for help rendering and resolution.
pub enum Spec {
	/// # Flag.
	Flag(FlagSpec),

	/// # Option.
	Option(OptionSpec),

	/// # Alias.
	Alias(AliasSpec),
}

impl Spec {
	#[must_use]
	/// # Canonical (or Resolved) Name.
	pub fn name(&self) -> &str {
		match self {
			Self::Flag(s) => s.name(),
			Self::Option(s) => s.name(),
			Self::Alias(s) => s.resolved(),
		}
	}

	#[must_use]
	/// # Kind, Human-Readable.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Flag(_) => "flag",
			Self::Option(_) => "option",
			Self::Alias(_) => "alias",
		}
	}
}
