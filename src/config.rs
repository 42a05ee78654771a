/*!
# libCLImate: Configuration
*/

use crate::{
	Climate,
	ClimateError,
	FlagSpec,
	InfoLine,
	OptionSpec,
	ValueConstraint,
	Version,
};
use std::path::Path;
use toml::Value;



/// # Session From a TOML Document.
pub(crate) fn from_str(raw: &str) -> Result<Climate, ClimateError> {
	let root: Value = raw.parse()?;
	from_value(&root)
}

/// # Session From a TOML File.
pub(crate) fn from_path(path: &Path) -> Result<Climate, ClimateError> {
	let raw = std::fs::read_to_string(path)?;
	from_str(&raw)
}

/// # Session From a Parsed Document.
///
/// Everything lives under a top-level `libclimate` table; unrecognised
/// keys are logged and skipped so documents can carry settings for other
/// consumers.
fn from_value(root: &Value) -> Result<Climate, ClimateError> {
	let table = root.get("libclimate")
		.ok_or_else(|| ClimateError::MissingElement("libclimate".to_owned()))?
		.as_table()
		.ok_or_else(|| wrong("libclimate", "table"))?;

	let mut climate = Climate::new();
	for (key, value) in table {
		let path = format!("libclimate.{key}");
		match key.as_str() {
			"program_name" =>
				climate = climate.with_program_name(str_of(value, &path)?),
			"usage_help_suffix" =>
				climate = climate.with_usage_help_suffix(str_of(value, &path)?),
			"flags_and_options" =>
				climate = climate.with_flags_and_options(str_of(value, &path)?),
			"usage_values" =>
				climate = climate.with_usage_values(str_of(value, &path)?),
			"exit_on_missing" =>
				climate = climate.with_exit_on_missing(bool_of(value, &path)?),
			"ignore_unknown" =>
				climate = climate.with_ignore_unknown(bool_of(value, &path)?),
			"exit_on_unknown" =>
				climate = climate.with_exit_on_unknown(bool_of(value, &path)?),
			"exit_on_usage" =>
				climate = climate.with_exit_on_usage(bool_of(value, &path)?),
			"info_lines" =>
				climate = climate.with_info_lines(info_lines_of(value, &path)?),
			"value_names" =>
				climate = climate.with_value_names(strings_of(value, &path)?),
			"constrain_values" =>
				climate = climate.with_value_constraint(constraint_of(value, &path)?),
			"version" =>
				climate = climate.with_version(version_of(value, &path)?),
			"clasp" =>
				climate = load_clasp(climate, value, &path)?,
			unknown =>
				tracing::warn!("unrecognised configuration key 'libclimate.{unknown}'"),
		}
	}

	Ok(climate)
}

/// # Load the Specification Block.
fn load_clasp(mut climate: Climate, value: &Value, path: &str) -> Result<Climate, ClimateError> {
	let table = value.as_table().ok_or_else(|| wrong(path, "table"))?;
	for (key, item) in table {
		if "specifications" == key.as_str() {
			let list_path = format!("{path}.specifications");
			let list = item.as_array().ok_or_else(|| wrong(&list_path, "array"))?;
			for (idx, spec) in list.iter().enumerate() {
				climate = load_spec(climate, spec, &format!("{list_path}[{idx}]"))?;
			}
		}
		else {
			tracing::warn!("unrecognised configuration key '{path}.{key}'");
		}
	}
	Ok(climate)
}

/// # Load One Specification.
///
/// Each entry is a table wrapping exactly one of `flag`, `option`, or
/// `alias`.
fn load_spec(climate: Climate, value: &Value, path: &str) -> Result<Climate, ClimateError> {
	let table = value.as_table().ok_or_else(|| wrong(path, "table"))?;
	if let Some(inner) = table.get("flag") {
		load_flag(climate, inner, &format!("{path}.flag"))
	}
	else if let Some(inner) = table.get("option") {
		load_option(climate, inner, &format!("{path}.option"))
	}
	else if let Some(inner) = table.get("alias") {
		load_alias(climate, inner, &format!("{path}.alias"))
	}
	else {
		Err(ClimateError::MissingElement(format!("{path}.(flag|option|alias)")))
	}
}

/// # Load a Flag Specification.
fn load_flag(climate: Climate, value: &Value, path: &str) -> Result<Climate, ClimateError> {
	let table = value.as_table().ok_or_else(|| wrong(path, "table"))?;
	let name_path = format!("{path}.name");
	let name = table.get("name")
		.ok_or_else(|| ClimateError::MissingElement(name_path.clone()))?;
	let mut spec = FlagSpec::new(str_of(name, &name_path)?);

	for (key, item) in table {
		let key_path = format!("{path}.{key}");
		match key.as_str() {
			"name" => {},
			"alias" => spec = spec.with_alias(str_of(item, &key_path)?),
			"aliases" => spec = spec.with_aliases(strings_of(item, &key_path)?),
			"help" => spec = spec.with_help(str_of(item, &key_path)?),
			unknown =>
				tracing::warn!("unrecognised configuration key '{path}.{unknown}'"),
		}
	}

	climate.with_flag(spec)
}

/// # Load an Option Specification.
fn load_option(climate: Climate, value: &Value, path: &str) -> Result<Climate, ClimateError> {
	let table = value.as_table().ok_or_else(|| wrong(path, "table"))?;
	let name_path = format!("{path}.name");
	let name = table.get("name")
		.ok_or_else(|| ClimateError::MissingElement(name_path.clone()))?;
	let mut spec = OptionSpec::new(str_of(name, &name_path)?);

	for (key, item) in table {
		let key_path = format!("{path}.{key}");
		match key.as_str() {
			"name" => {},
			"alias" => spec = spec.with_alias(str_of(item, &key_path)?),
			"aliases" => spec = spec.with_aliases(strings_of(item, &key_path)?),
			"help" => spec = spec.with_help(str_of(item, &key_path)?),
			"values" => spec = spec.with_values(strings_of(item, &key_path)?),
			"default" => spec = spec.with_default(str_of(item, &key_path)?),
			"required" => spec = spec.with_required(bool_of(item, &key_path)?),
			"required_message" =>
				spec = spec.with_required_message(str_of(item, &key_path)?),
			unknown =>
				tracing::warn!("unrecognised configuration key '{path}.{unknown}'"),
		}
	}

	climate.with_option(spec)
}

/// # Load an Alias Specification.
fn load_alias(climate: Climate, value: &Value, path: &str) -> Result<Climate, ClimateError> {
	let table = value.as_table().ok_or_else(|| wrong(path, "table"))?;
	let resolved_path = format!("{path}.resolved");
	let resolved = str_of(
		table.get("resolved")
			.ok_or_else(|| ClimateError::MissingElement(resolved_path.clone()))?,
		&resolved_path,
	)?;

	let mut forms = Vec::new();
	for (key, item) in table {
		let key_path = format!("{path}.{key}");
		match key.as_str() {
			"resolved" => {},
			"alias" => forms.push(str_of(item, &key_path)?.to_owned()),
			"aliases" => forms.extend(strings_of(item, &key_path)?),
			unknown =>
				tracing::warn!("unrecognised configuration key '{path}.{unknown}'"),
		}
	}

	climate.with_alias(resolved, forms)
}

/// # Wrong-Type Error.
fn wrong(path: &str, expected: &'static str) -> ClimateError {
	ClimateError::WrongType { path: path.to_owned(), expected }
}

/// # A String, Or Else.
fn str_of<'a>(value: &'a Value, path: &str) -> Result<&'a str, ClimateError> {
	value.as_str().ok_or_else(|| wrong(path, "string"))
}

/// # A Boolean, Or Else.
fn bool_of(value: &Value, path: &str) -> Result<bool, ClimateError> {
	value.as_bool().ok_or_else(|| wrong(path, "boolean"))
}

/// # A Count, Or Else.
fn count_of(value: &Value, path: &str) -> Result<usize, ClimateError> {
	value.as_integer()
		.and_then(|n| usize::try_from(n).ok())
		.ok_or_else(|| wrong(path, "non-negative integer"))
}

/// # An Array of Strings, Or Else.
fn strings_of(value: &Value, path: &str) -> Result<Vec<String>, ClimateError> {
	let list = value.as_array().ok_or_else(|| wrong(path, "array"))?;
	let mut out = Vec::with_capacity(list.len());
	for (idx, item) in list.iter().enumerate() {
		out.push(str_of(item, &format!("{path}[{idx}]"))?.to_owned());
	}
	Ok(out)
}

/// # Info Lines.
///
/// An array of strings, the literal `"version"` standing in for the
/// rendered program version.
fn info_lines_of(value: &Value, path: &str) -> Result<Vec<InfoLine>, ClimateError> {
	Ok(strings_of(value, path)?
		.into_iter()
		.map(|line|
			if "version" == line { InfoLine::Version }
			else { InfoLine::Text(line) }
		)
		.collect())
}

/// # A Value Constraint.
///
/// An exact count, an array of allowed counts, or a `{ min, max }` table
/// for an inclusive range. Anything else is a hard error, not a warning.
fn constraint_of(value: &Value, path: &str) -> Result<ValueConstraint, ClimateError> {
	if value.is_integer() {
		return count_of(value, path).map(ValueConstraint::from);
	}

	if let Some(list) = value.as_array() {
		let mut counts = Vec::with_capacity(list.len());
		for (idx, item) in list.iter().enumerate() {
			counts.push(count_of(item, &format!("{path}[{idx}]"))?);
		}
		return Ok(ValueConstraint::from(counts));
	}

	if let Some(table) = value.as_table() {
		let min_path = format!("{path}.min");
		let min = count_of(
			table.get("min").ok_or_else(|| ClimateError::MissingElement(min_path.clone()))?,
			&min_path,
		)?;
		let max_path = format!("{path}.max");
		let max = count_of(
			table.get("max").ok_or_else(|| ClimateError::MissingElement(max_path.clone()))?,
			&max_path,
		)?;
		return Ok(ValueConstraint::from(min..=max));
	}

	Err(wrong(path, "integer, array, or min/max table"))
}

/// # A Version.
///
/// A dotted string, or an array of string/integer parts.
fn version_of(value: &Value, path: &str) -> Result<Version, ClimateError> {
	if let Some(text) = value.as_str() {
		return Ok(Version::Text(text.to_owned()));
	}

	if let Some(list) = value.as_array() {
		let mut parts = Vec::with_capacity(list.len());
		for (idx, item) in list.iter().enumerate() {
			if let Some(text) = item.as_str() { parts.push(text.to_owned()); }
			else if let Some(n) = item.as_integer() { parts.push(n.to_string()); }
			else {
				return Err(wrong(&format!("{path}[{idx}]"), "string or integer"));
			}
		}
		return Ok(Version::Parts(parts));
	}

	Err(wrong(path, "string or array"))
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::VerifyOptions;

	const FULL: &str = r#"
[libclimate]
program_name = "myprog"
usage_help_suffix = "see --help"
exit_on_missing = false
ignore_unknown = true
exit_on_unknown = false
exit_on_usage = false
info_lines = ["My Program", "version", ""]
usage_values = "<dir-1> [ <dir-2> ]"
value_names = ["first directory", "second directory"]
version = [0, 1, 0]

[libclimate.constrain_values]
min = 1
max = 2

[[libclimate.clasp.specifications]]
flag = { name = "--debug", alias = "-d", help = "runs in Debug mode" }

[[libclimate.clasp.specifications]]
option = { name = "--verbosity", alias = "-v", help = "specifies the verbosity", values = ["terse", "quiet", "silent", "chatty"], default = "quiet" }

[[libclimate.clasp.specifications]]
alias = { resolved = "--verbosity=chatty", alias = "-c" }
"#;

	#[test]
	fn t_load_full() {
		let climate = Climate::load_str(FULL).unwrap();
		assert_eq!(climate.program_name(), "myprog");
		assert_eq!(climate.usage_help_suffix(), "see --help");
		assert!(! climate.exit_on_missing());
		assert!(climate.ignore_unknown());
		assert!(! climate.exit_on_unknown());
		assert!(! climate.exit_on_usage());
		assert_eq!(
			climate.version().map(ToString::to_string).as_deref(),
			Some("0.1.0"),
		);
		assert_eq!(
			climate.value_constraint(),
			Some(&ValueConstraint::Between(1, 2)),
		);
		assert_eq!(climate.value_names(), ["first directory", "second directory"]);
		assert_eq!(climate.info_lines(), [
			InfoLine::Text("My Program".to_owned()),
			InfoLine::Version,
			InfoLine::Text(String::new()),
		]);

		// Implicit help and version, plus the three configured entries.
		assert_eq!(climate.registry().len(), 5);
		assert!(climate.registry().find_flag("--debug").is_some());
		let verbosity = climate.registry().find_option("--verbosity").unwrap();
		assert_eq!(verbosity.values(), ["terse", "quiet", "silent", "chatty"]);
		assert_eq!(verbosity.default(), Some("quiet"));

		// And the lot holds together end to end.
		let results = climate.parse(["-d", "-c", "dir-1"]);
		assert_eq!(results.flags().len(), 1);
		assert_eq!(results.flags()[0].name(), "--debug");
		assert_eq!(results.options().len(), 1);
		assert_eq!(results.options()[0].name(), "--verbosity");
		assert_eq!(results.options()[0].value(), Some("chatty"));
		assert_eq!(results.values(), ["dir-1"]);
		assert!(results.verify_with(VerifyOptions::raising()).is_ok());

		// Empty attached values fall back to the configured default.
		let results = climate.parse(["-v=", "dir-1"]);
		assert_eq!(results.options()[0].value(), Some("quiet"));
	}

	#[test]
	fn t_load_missing_root() {
		assert!(matches!(
			Climate::load_str("[other]\nkey = 1\n"),
			Err(ClimateError::MissingElement(element)) if element == "libclimate",
		));
	}

	#[test]
	fn t_load_syntax() {
		assert!(matches!(
			Climate::load_str("not = = toml"),
			Err(ClimateError::Syntax(_)),
		));
	}

	#[test]
	fn t_load_unknown_keys() {
		// Unrecognised keys warn rather than fail.
		let climate = Climate::load_str("[libclimate]\nfuture_knob = 1\n").unwrap();
		assert_eq!(climate.registry().len(), 2);
	}

	#[test]
	fn t_load_wrong_types() {
		match Climate::load_str("[libclimate]\nexit_on_missing = \"yes\"\n") {
			Err(ClimateError::WrongType { path, expected }) => {
				assert_eq!(path, "libclimate.exit_on_missing");
				assert_eq!(expected, "boolean");
			},
			other => panic!("expected a wrong-type error, got {other:?}"),
		}

		match Climate::load_str("[libclimate]\nconstrain_values = \"2\"\n") {
			Err(ClimateError::WrongType { path, expected }) => {
				assert_eq!(path, "libclimate.constrain_values");
				assert_eq!(expected, "integer, array, or min/max table");
			},
			other => panic!("expected a wrong-type error, got {other:?}"),
		}

		match Climate::load_str("[libclimate]\nconstrain_values = -1\n") {
			Err(ClimateError::WrongType { path, expected }) => {
				assert_eq!(path, "libclimate.constrain_values");
				assert_eq!(expected, "non-negative integer");
			},
			other => panic!("expected a wrong-type error, got {other:?}"),
		}
	}

	#[test]
	fn t_load_spec_errors() {
		const NAMELESS: &str = r#"
[[libclimate.clasp.specifications]]
flag = { help = "nameless" }
"#;
		assert!(matches!(
			Climate::load_str(NAMELESS),
			Err(ClimateError::MissingElement(element))
				if element == "libclimate.clasp.specifications[0].flag.name",
		));

		const SHAPELESS: &str = r#"
[[libclimate.clasp.specifications]]
other = { name = "--x" }
"#;
		assert!(matches!(
			Climate::load_str(SHAPELESS),
			Err(ClimateError::MissingElement(element))
				if element == "libclimate.clasp.specifications[0].(flag|option|alias)",
		));

		const DUPLICATED: &str = r#"
[[libclimate.clasp.specifications]]
flag = { name = "--debug" }

[[libclimate.clasp.specifications]]
flag = { name = "--debug" }
"#;
		assert!(matches!(
			Climate::load_str(DUPLICATED),
			Err(ClimateError::DuplicateSpec { kind: "flag", .. }),
		));

		const FORMLESS: &str = r#"
[[libclimate.clasp.specifications]]
alias = { resolved = "--verbosity=chatty" }
"#;
		assert!(matches!(
			Climate::load_str(FORMLESS),
			Err(ClimateError::EmptyAliases(resolved))
				if resolved == "--verbosity=chatty",
		));
	}

	#[test]
	fn t_load_constraint_forms() {
		let climate = Climate::load_str("[libclimate]\nconstrain_values = 2\n").unwrap();
		assert_eq!(climate.value_constraint(), Some(&ValueConstraint::Exactly(2)));

		let climate = Climate::load_str("[libclimate]\nconstrain_values = [1, 3]\n").unwrap();
		assert_eq!(
			climate.value_constraint(),
			Some(&ValueConstraint::OneOf(vec![1, 3])),
		);

		// Degenerate ranges collapse to exact counts.
		let climate = Climate::load_str(
			"[libclimate]\nconstrain_values = { min = 2, max = 2 }\n"
		).unwrap();
		assert_eq!(climate.value_constraint(), Some(&ValueConstraint::Exactly(2)));

		assert!(matches!(
			Climate::load_str("[libclimate]\nconstrain_values = { min = 1 }\n"),
			Err(ClimateError::MissingElement(element))
				if element == "libclimate.constrain_values.max",
		));
	}

	#[test]
	fn t_load_version_forms() {
		let climate = Climate::load_str("[libclimate]\nversion = \"0.1.2\"\n").unwrap();
		assert_eq!(climate.version(), Some(&Version::Text("0.1.2".to_owned())));

		let climate = Climate::load_str("[libclimate]\nversion = [1, 2, \"rc1\"]\n").unwrap();
		assert_eq!(
			climate.version().map(ToString::to_string).as_deref(),
			Some("1.2.rc1"),
		);

		assert!(matches!(
			Climate::load_str("[libclimate]\nversion = 1.5\n"),
			Err(ClimateError::WrongType { expected: "string or array", .. }),
		));
	}

	#[test]
	fn t_load_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("climate.toml");
		std::fs::write(&path, "[libclimate]\nprogram_name = \"fromfile\"\n").unwrap();

		let climate = Climate::load_path(&path).unwrap();
		assert_eq!(climate.program_name(), "fromfile");

		assert!(matches!(
			Climate::load_path(dir.path().join("absent.toml")),
			Err(ClimateError::Io(_)),
		));
	}
}
