/*!
# libCLImate

[![docs.rs](https://img.shields.io/docsrs/libclimate.svg?style=flat-square&label=docs.rs)](https://docs.rs/libclimate/)
[![changelog](https://img.shields.io/crates/v/libclimate.svg?style=flat-square&label=changelog&color=9b59b6)](https://github.com/Blobfolio/libclimate/blob/master/CHANGELOG.md)<br>
[![crates.io](https://img.shields.io/crates/v/libclimate.svg?style=flat-square&label=crates.io)](https://crates.io/crates/libclimate)
[![ci](https://img.shields.io/github/actions/workflow/status/Blobfolio/libclimate/ci.yaml?style=flat-square&label=ci)](https://github.com/Blobfolio/libclimate/actions)
[![deps.rs](https://deps.rs/repo/github/blobfolio/libclimate/status.svg?style=flat-square&label=deps.rs)](https://deps.rs/repo/github/blobfolio/libclimate)<br>
[![license](https://img.shields.io/badge/license-wtfpl-ff1493?style=flat-square)](https://en.wikipedia.org/wiki/WTFPL)
[![contributions welcome](https://img.shields.io/badge/PRs-welcome-brightgreen.svg?style=flat-square&label=contributions)](https://github.com/Blobfolio/libclimate/issues)

This crate provides a declarative command-line session layer called [`Climate`], taking care of the boilerplate that crowds every `main`: flag and option registration, alias resolution, `--help`/`--version` handling, required-option and value-count verification, and the prefixed abort messaging that goes with all of it.

Register [`FlagSpec`]/[`OptionSpec`] entries (with callbacks, if you like), then [`Climate::parse`] an argument vector. Matching and dispatch happen on the spot; constraint verification waits until you ask for it, as many times as you ask for it. Prefer a single braided call? [`Climate::run`] folds parse and verification into one owned [`RunResults`].

Everything that can terminate the process is policy-gated, so embedding contexts and tests can swap exits for warnings or typed errors.



## Example

A general setup might look something like the following.

Refer to the documentation for [`Climate`], [`FlagSpec`], and [`OptionSpec`] for more information, caveats, etc.

```
use libclimate::{Climate, FlagSpec, OptionSpec};
use std::cell::Cell;
use std::rc::Rc;

let debug = Rc::new(Cell::new(false));
let hook = Rc::clone(&debug);

let climate = Climate::new()
    .with_program_name("myprog")
    .with_version([0, 1, 0])
    .with_flag(
        FlagSpec::new("--debug")
            .with_alias("-d")
            .with_help("runs in Debug mode")
            .with_action(move |_, _| hook.set(true))
    ).unwrap()
    .with_option(
        OptionSpec::new("--verbosity")
            .with_alias("-v")
            .with_help("specifies the verbosity")
            .with_values(["terse", "quiet", "silent", "chatty"])
    ).unwrap()
    .with_alias("--verbosity=chatty", ["-c"]).unwrap()
    .with_value_constraint(1..=2)
    .with_usage_values("<dir-1> [ <dir-2> ]")
    .with_value_names(["first directory", "second directory"]);

// Parsing dispatches as it goes; the --debug action has already fired.
// (Production code would usually reach for `climate.parse_env()`.)
let results = climate.parse(["-d", "-c", "dir-1"]);
assert!(debug.get());
assert_eq!(results.options()[0].value(), Some("chatty"));
assert_eq!(results.values(), ["dir-1"]);

// Constraint verification is separate, explicit, and repeatable.
assert!(results.verify().is_ok());
```



## Configuration

Sessions can also be deserialized from TOML via [`Climate::load_str`] or [`Climate::load_path`]:

```toml
[libclimate]
program_name = "myprog"
version = [0, 1, 0]
constrain_values = { min = 1, max = 2 }
value_names = ["first directory", "second directory"]

[[libclimate.clasp.specifications]]
flag = { name = "--debug", alias = "-d", help = "runs in Debug mode" }

[[libclimate.clasp.specifications]]
option = { name = "--verbosity", alias = "-v", values = ["terse", "quiet", "silent", "chatty"] }

[[libclimate.clasp.specifications]]
alias = { resolved = "--verbosity=chatty", alias = "-c" }
```

Callbacks cannot be serialized, of course; attach those afterward with [`Climate::on_flag`]/[`Climate::on_option`].
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod args;
mod climate;
mod config;
mod dispatch;
mod error;
mod escalate;
mod help;
mod registry;
mod spec;
mod verify;
mod version;

pub use args::{
	FlagArg,
	OptionArg,
};
pub use climate::{
	Abort,
	AbortStream,
	Climate,
	Parsed,
	RunResults,
};
pub use dispatch::{
	Classified,
	Disposition,
};
pub use error::ClimateError;
pub use help::InfoLine;
pub use registry::Registry;
pub use spec::{
	AliasSpec,
	FlagAction,
	FlagSpec,
	OptionAction,
	OptionSpec,
	Spec,
};
pub use verify::{
	ValueConstraint,
	VerifyOptions,
};
pub use version::{
	Version,
	VersionPart,
};

#[cfg(test)] use brunch as _; // Used by the benches.
#[cfg(test)] use tracing_subscriber as _; // Used by the demos.
