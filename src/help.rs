/*!
# libCLImate: Usage and Version Rendering
*/

use crate::{
	Climate,
	Spec,
};
use std::io::{self, Write};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Usage Info Line.
///
/// Leading lines printed above the `USAGE:` line, typically a blurb about
/// the program. The [`InfoLine::Version`] placeholder is swapped at render
/// time for the same `"<program> <version>"` line `--version` prints.
pub enum InfoLine {
	/// # Literal Text.
	Text(String),

	/// # Version Placeholder.
	Version,
}

impl From<&str> for InfoLine {
	#[inline]
	fn from(src: &str) -> Self { Self::Text(src.to_owned()) }
}

impl From<String> for InfoLine {
	#[inline]
	fn from(src: String) -> Self { Self::Text(src) }
}



/// # Render Usage.
///
/// The full help text: info lines, the `USAGE:` line, then one block per
/// registered flag and option, each giving the alias forms, the canonical
/// name (with a `=<value>` placeholder for options), the help text, and,
/// for options, any advisory value list. Alias specifications lend their
/// forms to their targets and are not listed separately.
pub(crate) fn render_usage(climate: &Climate, out: &mut dyn Write) -> io::Result<()> {
	for line in climate.info_lines() {
		match line {
			InfoLine::Text(text) => writeln!(out, "{text}")?,
			InfoLine::Version => writeln!(out, "{}", version_line(climate))?,
		}
	}

	let program_name = climate.program_name();
	let segment = climate.flags_and_options();
	match climate.usage_values() {
		Some(values) => writeln!(out, "USAGE: {program_name} {segment} {values}")?,
		None => writeln!(out, "USAGE: {program_name} {segment}")?,
	}
	writeln!(out)?;
	writeln!(out, "flags/options:")?;
	writeln!(out)?;

	for spec in climate.registry().specs() {
		match spec {
			Spec::Flag(s) => {
				for alias in s.aliases() { writeln!(out, "\t{alias}")?; }
				writeln!(out, "\t{}", s.name())?;
				if let Some(help) = s.help() { writeln!(out, "\t\t{help}")?; }
				writeln!(out)?;
			},
			Spec::Option(s) => {
				for alias in s.aliases() { writeln!(out, "\t{alias}")?; }
				writeln!(out, "\t{}=<value>", s.name())?;
				if let Some(help) = s.help() { writeln!(out, "\t\t{help}")?; }
				if ! s.values().is_empty() {
					writeln!(out, "\t\twhere <value> one of:")?;
					for value in s.values() { writeln!(out, "\t\t\t{value}")?; }
				}
				writeln!(out)?;
			},
			Spec::Alias(_) => (),
		}
	}

	Ok(())
}

/// # Render Version.
pub(crate) fn render_version(climate: &Climate, out: &mut dyn Write) -> io::Result<()> {
	writeln!(out, "{}", version_line(climate))
}

/// # The Version Line.
///
/// `"<program> <version>"`, minus whichever halves are unset.
pub(crate) fn version_line(climate: &Climate) -> String {
	match (climate.program_name(), climate.version()) {
		("", None) => String::new(),
		("", Some(version)) => version.to_string(),
		(program_name, None) => program_name.to_owned(),
		(program_name, Some(version)) => format!("{program_name} {version}"),
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		FlagSpec,
		OptionSpec,
	};

	/// # Rendered Usage, Squeezed.
	///
	/// Non-blank lines, whitespace-trimmed, the shape the assertions care
	/// about.
	fn squeeze(climate: &Climate) -> Vec<String> {
		let mut out = Vec::new();
		render_usage(climate, &mut out).unwrap();
		String::from_utf8(out).unwrap()
			.lines()
			.map(str::trim)
			.filter(|line| ! line.is_empty())
			.map(str::to_owned)
			.collect()
	}

	#[test]
	fn t_usage_minimal() {
		let climate = Climate::new().with_program_name("program");
		assert_eq!(squeeze(&climate), [
			"USAGE: program [ ... flags and options ... ]",
			"flags/options:",
			"--help",
			"shows this help and terminates",
			"--version",
			"shows version and terminates",
		]);
	}

	#[test]
	fn t_usage_blocks() {
		let climate = Climate::new()
			.with_program_name("program")
			.with_flag(
				FlagSpec::new("--succinct")
					.with_alias("-s")
					.with_help("operates succinctly")
			).unwrap()
			.with_option(
				OptionSpec::new("--verbosity")
					.with_alias("-v")
					.with_help("specifies the verbosity")
					.with_values(["terse", "chatty"])
			).unwrap();

		assert_eq!(squeeze(&climate), [
			"USAGE: program [ ... flags and options ... ]",
			"flags/options:",
			"--help",
			"shows this help and terminates",
			"--version",
			"shows version and terminates",
			"-s",
			"--succinct",
			"operates succinctly",
			"-v",
			"--verbosity=<value>",
			"specifies the verbosity",
			"where <value> one of:",
			"terse",
			"chatty",
		]);
	}

	#[test]
	fn t_usage_trimmings() {
		let climate = Climate::new()
			.with_program_name("program")
			.with_version([0, 1, 0])
			.with_info_lines([
				InfoLine::Text("demo program".to_owned()),
				InfoLine::Version,
				InfoLine::Text(String::new()),
			])
			.with_usage_values("<dir-1> [ <dir-2> ]")
			.without_version_flag();

		let mut out = Vec::new();
		render_usage(&climate, &mut out).unwrap();
		let raw = String::from_utf8(out).unwrap();

		// Info lines render verbatim, above the usage line.
		assert!(raw.starts_with("demo program\nprogram 0.1.0\n\nUSAGE: program [ ... flags and options ... ] <dir-1> [ <dir-2> ]\n"));

		// The version flag is gone.
		assert!(! raw.contains("--version"));
		assert!(raw.contains("\t--help\n"));
	}

	#[test]
	fn t_version_line() {
		let climate = Climate::new()
			.with_program_name("program")
			.with_version([1, 2, 3, 4]);
		assert_eq!(version_line(&climate), "program 1.2.3.4");

		let climate = Climate::new().with_program_name("program");
		assert_eq!(version_line(&climate), "program");

		let climate = Climate::new()
			.with_program_name("")
			.with_version("0.5.0");
		assert_eq!(version_line(&climate), "0.5.0");

		let mut out = Vec::new();
		let climate = Climate::new()
			.with_program_name("program")
			.with_version([1, 2, 3, 4]);
		render_version(&climate, &mut out).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "program 1.2.3.4\n");
	}
}
