/*!
# libCLImate: Registry
*/

use crate::{
	ClimateError,
	FlagArg,
	FlagSpec,
	OptionArg,
	OptionSpec,
	spec::{Builtin, Spec},
};



#[derive(Debug, Default)]
/// # Specification Registry.
///
/// An ordered collection of flag, option, and alias specifications. Order
/// is significant twice over: token resolution takes the first match, and
/// help rendering lists entries as registered.
///
/// Canonical names are unique per kind; the same name may appear as both a
/// flag and an option, though that is rarely a good idea.
pub struct Registry {
	/// # Specifications.
	specs: Vec<Spec>,
}

/// # Resolution.
///
/// What a hyphenated token's name part turned out to be.
pub(crate) enum Resolution<'a> {
	/// # A Registered Flag.
	Flag(&'a FlagSpec),

	/// # A Registered Option.
	Option(&'a OptionSpec),

	/// # A Value-Bound Alias.
	///
	/// The alias resolved to `name` with `value` baked in.
	Bound {
		/// # Canonical Name.
		name: &'a str,
		/// # Bound Value.
		value: &'a str,
	},

	/// # A Name Without a Specification.
	///
	/// An alias chased to a target nothing is registered under.
	Name(&'a str),
}

impl Registry {
	/// # New, With Builtins.
	///
	/// The starting registry for a session: the implicit `--help` and
	/// `--version` flags, nothing else.
	pub(crate) fn with_builtins() -> Self {
		Self {
			specs: vec![
				Spec::Flag(FlagSpec::help_flag()),
				Spec::Flag(FlagSpec::version_flag()),
			],
		}
	}

	/// # Register a Specification.
	///
	/// ## Errors
	///
	/// Returns an error when a specification of the same kind already
	/// holds the canonical name.
	pub(crate) fn push(&mut self, spec: Spec) -> Result<(), ClimateError> {
		if self.specs.iter().any(|other| other.kind() == spec.kind() && other.name() == spec.name()) {
			return Err(ClimateError::DuplicateSpec {
				kind: spec.kind(),
				name: spec.name().to_owned(),
			});
		}
		self.specs.push(spec);
		Ok(())
	}

	#[must_use]
	/// # Specifications.
	///
	/// All entries, in registration order.
	pub fn specs(&self) -> &[Spec] { &self.specs }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.specs.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.specs.is_empty() }

	/// # Find a Flag.
	///
	/// Canonical names only; aliases go through [`Registry::resolve`].
	pub(crate) fn find_flag(&self, name: &str) -> Option<&FlagSpec> {
		self.specs.iter().find_map(|spec| match spec {
			Spec::Flag(s) if s.name() == name => Some(s),
			_ => None,
		})
	}

	/// # Find an Option.
	///
	/// Canonical names only; aliases go through [`Registry::resolve`].
	pub(crate) fn find_option(&self, name: &str) -> Option<&OptionSpec> {
		self.specs.iter().find_map(|spec| match spec {
			Spec::Option(s) if s.name() == name => Some(s),
			_ => None,
		})
	}

	/// # Resolve a Token Name.
	///
	/// Walk the registry in order, returning the first specification whose
	/// canonical name or alias list matches `token`. Alias specifications
	/// resolve onward: value-bound targets come back as [`Resolution::Bound`],
	/// the rest chase the target through the flags and options.
	pub(crate) fn resolve(&self, token: &str) -> Option<Resolution<'_>> {
		for spec in &self.specs {
			match spec {
				Spec::Flag(s) =>
					if s.name() == token || s.aliases().iter().any(|a| a == token) {
						return Some(Resolution::Flag(s));
					},
				Spec::Option(s) =>
					if s.name() == token || s.aliases().iter().any(|a| a == token) {
						return Some(Resolution::Option(s));
					},
				Spec::Alias(s) =>
					if s.aliases().iter().any(|a| a == token) {
						return Some(match s.bound_value() {
							Some(value) => Resolution::Bound { name: s.target(), value },
							None => self.chase(s.target()),
						});
					},
			}
		}
		None
	}

	/// # Chase an Alias Target.
	///
	/// Land on whatever flag or option is registered under `name`, falling
	/// back to the bare name when nothing is.
	fn chase<'a>(&'a self, name: &'a str) -> Resolution<'a> {
		if let Some(s) = self.find_flag(name) { Resolution::Flag(s) }
		else if let Some(s) = self.find_option(name) { Resolution::Option(s) }
		else { Resolution::Name(name) }
	}

	/// # Attach a Flag Action.
	///
	/// Replace the action on the flag registered under `name`, returning
	/// `true` on success. A miss leaves the registry untouched and logs a
	/// warning.
	pub(crate) fn attach_flag<F>(&mut self, name: &str, action: F) -> bool
	where F: FnMut(&FlagArg, &FlagSpec) + 'static {
		let hit = self.specs.iter_mut().find_map(|spec| match spec {
			Spec::Flag(s) if s.name() == name => Some(s),
			_ => None,
		});
		match hit {
			Some(s) => {
				s.set_action(action);
				true
			}
			None => {
				tracing::warn!("no flag specification '{name}' to attach an action to");
				false
			}
		}
	}

	/// # Attach an Option Action.
	///
	/// Same as [`Registry::attach_flag`], for options.
	pub(crate) fn attach_option<F>(&mut self, name: &str, action: F) -> bool
	where F: FnMut(&OptionArg, &OptionSpec) + 'static {
		let hit = self.specs.iter_mut().find_map(|spec| match spec {
			Spec::Option(s) if s.name() == name => Some(s),
			_ => None,
		});
		match hit {
			Some(s) => {
				s.set_action(action);
				true
			}
			None => {
				tracing::warn!("no option specification '{name}' to attach an action to");
				false
			}
		}
	}

	/// # Remove a Builtin Flag.
	pub(crate) fn remove_builtin(&mut self, kind: Builtin) {
		self.specs.retain(|spec| match spec {
			Spec::Flag(s) => s.builtin_kind() != Some(kind),
			_ => true,
		});
	}

	/// # Required Options.
	///
	/// In registration order.
	pub(crate) fn required_options(&self) -> impl Iterator<Item = &OptionSpec> {
		self.specs.iter().filter_map(|spec| match spec {
			Spec::Option(s) if s.required() => Some(s),
			_ => None,
		})
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::AliasSpec;

	#[test]
	fn t_builtins() {
		let mut registry = Registry::with_builtins();
		assert_eq!(registry.len(), 2);
		assert!(registry.find_flag("--help").is_some());
		assert!(registry.find_flag("--version").is_some());

		registry.remove_builtin(Builtin::Help);
		assert_eq!(registry.len(), 1);
		assert!(registry.find_flag("--help").is_none());
		assert!(registry.find_flag("--version").is_some());

		registry.remove_builtin(Builtin::Version);
		assert!(registry.is_empty());
	}

	#[test]
	fn t_push_duplicates() {
		let mut registry = Registry::default();
		registry.push(Spec::Flag(FlagSpec::new("--debug"))).unwrap();

		// Same kind, same name: no.
		assert!(matches!(
			registry.push(Spec::Flag(FlagSpec::new("--debug"))),
			Err(ClimateError::DuplicateSpec { kind: "flag", .. }),
		));

		// Same name, different kind: allowed.
		registry.push(Spec::Option(OptionSpec::new("--debug"))).unwrap();
		assert!(matches!(
			registry.push(Spec::Option(OptionSpec::new("--debug"))),
			Err(ClimateError::DuplicateSpec { kind: "option", .. }),
		));

		assert_eq!(registry.len(), 2);
	}

	#[test]
	fn t_resolve() {
		let mut registry = Registry::default();
		registry.push(Spec::Flag(FlagSpec::new("--debug").with_alias("-d"))).unwrap();
		registry.push(Spec::Option(OptionSpec::new("--verbosity").with_alias("-v"))).unwrap();
		registry.push(Spec::Alias(AliasSpec::new("--verbosity=chatty").with_alias("-c"))).unwrap();
		registry.push(Spec::Alias(AliasSpec::new("--debug").with_alias("-D"))).unwrap();
		registry.push(Spec::Alias(AliasSpec::new("--missing").with_alias("-m"))).unwrap();

		// Canonical names and aliases land on their specifications.
		assert!(matches!(registry.resolve("--debug"), Some(Resolution::Flag(s)) if s.name() == "--debug"));
		assert!(matches!(registry.resolve("-d"), Some(Resolution::Flag(_))));
		assert!(matches!(registry.resolve("--verbosity"), Some(Resolution::Option(_))));
		assert!(matches!(registry.resolve("-v"), Some(Resolution::Option(_))));

		// Value-bound aliases carry their value along.
		assert!(matches!(
			registry.resolve("-c"),
			Some(Resolution::Bound { name: "--verbosity", value: "chatty" }),
		));

		// Plain aliases chase their target.
		assert!(matches!(registry.resolve("-D"), Some(Resolution::Flag(_))));

		// A target nothing is registered under is just a name.
		assert!(matches!(registry.resolve("-m"), Some(Resolution::Name("--missing"))));

		// Unknowns are unknowns.
		assert!(registry.resolve("--nope").is_none());
	}

	#[test]
	fn t_attach() {
		let mut registry = Registry::default();
		registry.push(Spec::Flag(FlagSpec::new("--debug"))).unwrap();
		registry.push(Spec::Option(OptionSpec::new("--verbosity"))).unwrap();

		assert!(registry.attach_flag("--debug", |_, _| ()));
		assert!(registry.find_flag("--debug").unwrap().has_action());

		assert!(registry.attach_option("--verbosity", |_, _| ()));
		assert!(registry.find_option("--verbosity").unwrap().has_action());

		// Misses (and kind mismatches) report failure.
		assert!(! registry.attach_flag("--verbosity", |_, _| ()));
		assert!(! registry.attach_option("--nope", |_, _| ()));
	}
}
