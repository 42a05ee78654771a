/*!
# libCLImate: Flags and Options

This example registers a flag, an option, and a value-bound alias, then
reports what the command line resolved to. Try it like:
cargo run --example flag_and_option_specifications -- -d --verbosity=silent dir-1
*/

use libclimate::{
	Climate,
	ClimateError,
	FlagSpec,
	InfoLine,
	OptionSpec,
	VerifyOptions,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;



fn main() {
	let debug = Rc::new(Cell::new(false));
	let verbosity = Rc::new(RefCell::new(None::<String>));

	let climate = match build(&debug, &verbosity) {
		Ok(c) => c,
		Err(e) => {
			println!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	};

	// Dispatch happens here; --help and --version short-circuit.
	let results = climate.parse_env();
	if let Err(e) = results.verify_with(VerifyOptions::raising()) {
		climate.abort(&e.to_string());
	}

	if debug.get() {
		println!("Debug mode is specified");
	}
	if let Some(v) = verbosity.borrow().as_deref() {
		println!("verbosity is specified as: \x1b[2m{v}\x1b[0m");
	}
	for (i, value) in results.values().iter().enumerate() {
		println!("value[{i}]: \x1b[2m{value}\x1b[0m");
	}
}

/// # The Session.
fn build(debug: &Rc<Cell<bool>>, verbosity: &Rc<RefCell<Option<String>>>)
-> Result<Climate, ClimateError> {
	let debug = Rc::clone(debug);
	let verbosity = Rc::clone(verbosity);

	Ok(
		Climate::new()
			.with_version([0, 1, 0])
			.with_info_lines([
				InfoLine::from("libCLImate demonstrations"),
				InfoLine::Version,
				InfoLine::from("Illustrates flag, option, and alias specifications."),
				InfoLine::from(""),
			])
			.with_flag(
				FlagSpec::new("--debug")
					.with_alias("-d")
					.with_help("runs in Debug mode")
					.with_action(move |_, _| debug.set(true))
			)?
			.with_option(
				OptionSpec::new("--verbosity")
					.with_alias("-v")
					.with_help("specifies the verbosity")
					.with_values(["terse", "quiet", "silent", "chatty"])
					.with_action(move |arg, _|
						*verbosity.borrow_mut() = arg.value().map(str::to_owned)
					)
			)?
			.with_alias("--verbosity=chatty", ["-c"])?
			.with_value_constraint(1..=2)
			.with_usage_values("<dir-1> [ <dir-2> ]")
			.with_value_names(["first directory", "second directory"])
	)
}
