/*!
# libCLImate: Configuration

This example deserializes its entire session from TOML, then attaches
callbacks to the loaded specifications. Misconfigurations warn via tracing;
try adding an unrecognised key to see one.
*/

use libclimate::{Climate, VerifyOptions};
use std::cell::Cell;
use std::rc::Rc;

const CONFIG: &str = r#"
[libclimate]
program_name = "from_toml"
version = [0, 7, 0]
usage_values = "<input> [ <output> ]"
value_names = ["input path", "output path"]

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



fn main() {
	tracing_subscriber::fmt()
		.with_max_level(tracing::Level::WARN)
		.init();

	let mut climate = match Climate::load_str(CONFIG) {
		Ok(c) => c,
		Err(e) => {
			println!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	};

	let debug = Rc::new(Cell::new(false));
	let hook = Rc::clone(&debug);
	climate.on_flag("--debug", move |_, _| hook.set(true));
	climate.on_option("--verbosity", |arg, _| {
		println!(
			"verbosity is specified as: \x1b[2m{}\x1b[0m",
			arg.value().unwrap_or(""),
		);
	});

	let results = climate.parse_env();
	if let Err(e) = results.verify_with(VerifyOptions::raising()) {
		climate.abort(&e.to_string());
	}

	if debug.get() {
		println!("Debug mode is specified");
	}
	for value in results.values() {
		println!("value: \x1b[2m{value}\x1b[0m");
	}
}
