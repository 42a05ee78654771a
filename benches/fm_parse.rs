/*!
# Benchmark: `libclimate::Climate`
*/

use brunch::{
	Bench,
	benches,
};
use libclimate::{Climate, FlagSpec, OptionSpec};

fn climate() -> Climate {
	Climate::new()
		.with_program_name("bench")
		.with_version([0, 7, 0])
		.with_flag(FlagSpec::new("--quiet").with_alias("-q")).unwrap()
		.with_option(OptionSpec::new("--key").with_alias("-k")).unwrap()
		.with_alias("--key=val", ["-x"]).unwrap()
}

benches!(
	Bench::new("libclimate::Climate::new()")
		.run(|| Climate::new()),

	Bench::spacer(),

	Bench::new("libclimate::Climate::parse(7 args)")
		.run_seeded_with(climate, |c| c.parse([
			"-q", "--key=val", "-x", "out", "--quiet", "/foo/bar", "/bar/baz",
		]).values().len()),

	Bench::new("libclimate::Climate::run(7 args)")
		.run_seeded_with(climate, |c| c.run([
			"-q", "--key=val", "-x", "out", "--quiet", "/foo/bar", "/bar/baz",
		]).values.len()),
);
