/*!
# libCLImate: Escalation
*/

use crate::ClimateError;
use std::io::Write;
use std::process;



#[derive(Debug, Clone, Copy)]
/// # Escalation Directives.
///
/// Call-site policy for [`escalate`]. Raising beats exiting beats the
/// warn-and-continue fallback.
pub(crate) struct Directives<'a> {
	/// # Raise Instead of Reporting.
	pub(crate) raise: bool,

	/// # Exit After Reporting.
	pub(crate) exit: bool,

	/// # Exit Status.
	pub(crate) status: i32,

	/// # Program-Name Prefix.
	pub(crate) program_name: &'a str,
}

/// # Compose a Prefixed Message.
///
/// Prepend `"<program_name>: "`, except when the program name is empty, in
/// which case the message stands alone.
pub(crate) fn compose(program_name: &str, message: &str) -> String {
	if program_name.is_empty() { message.to_owned() }
	else { format!("{program_name}: {message}") }
}

/// # Escalate a Violation.
///
/// Apply the directives to `err`: hand it back when raising, otherwise
/// write the composed message to `stream` and, when exiting, flush and
/// terminate with the given status.
///
/// ## Errors
///
/// Returns `err` itself when the directives say to raise; stream failures
/// are swallowed, reporting being best-effort by nature.
pub(crate) fn escalate(
	err: ClimateError,
	directives: &Directives<'_>,
	stream: &mut dyn Write,
) -> Result<(), ClimateError> {
	if directives.raise { return Err(err); }

	let _ = writeln!(stream, "{}", compose(directives.program_name, &err.to_string()));
	if directives.exit {
		let _ = stream.flush();
		terminate(directives.status);
	}

	Ok(())
}

/// # Terminate.
///
/// The crate's one and only process exit. Dispatch, verification, usage
/// and version display, and aborts all funnel through here when their
/// policy calls for leaving.
pub(crate) fn terminate(status: i32) -> ! { process::exit(status) }



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_compose() {
		assert_eq!(compose("myprog", "went sideways"), "myprog: went sideways");
		assert_eq!(compose("", "went sideways"), "went sideways");
	}

	#[test]
	fn t_escalate_warns() {
		let err = ClimateError::MissingValue {
			name: "input-path".to_owned(),
			hint: "; use --help for usage".to_owned(),
		};
		let directives = Directives {
			raise: false,
			exit: false,
			status: 1,
			program_name: "myprog",
		};

		let mut out = Vec::new();
		assert!(escalate(err, &directives, &mut out).is_ok());
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"myprog: input-path not specified; use --help for usage\n",
		);
	}

	#[test]
	fn t_escalate_raises() {
		let err = ClimateError::MissingValue {
			name: "input-path".to_owned(),
			hint: String::new(),
		};
		let directives = Directives {
			raise: true,
			exit: true, // Raising wins; this must not terminate the tests.
			status: 1,
			program_name: "myprog",
		};

		let mut out = Vec::new();
		assert!(matches!(
			escalate(err, &directives, &mut out),
			Err(ClimateError::MissingValue { .. }),
		));

		// Nothing gets written on the raise path.
		assert!(out.is_empty());
	}
}
