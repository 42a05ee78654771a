/*!
# libCLImate: Usage and Version

This example wires up nothing but the implicit --help and --version flags.
Run it with one of those to see the generated output; anything else reports
there was nothing to do.
*/

use libclimate::{Climate, InfoLine};



fn main() {
	let climate = Climate::new()
		.with_version([0, 0, 1])
		.with_info_lines([
			InfoLine::from("libCLImate demonstrations"),
			InfoLine::Version,
			InfoLine::from("Illustrates the generated usage and version output."),
			InfoLine::from(""),
		]);

	let results = climate.run(std::env::args().skip(1));
	if results.flags.given.is_empty() && results.options.given.is_empty() {
		println!("no flags specified");
	}
}
