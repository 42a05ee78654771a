/*!
# libCLImate: Version
*/

use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq, Hash)]
/// # Program Version.
///
/// A version is either a pre-rendered string or a list of dotted parts.
/// Both render identically through `Display`, so the distinction only
/// matters at construction time.
///
/// Explicit conversions exist for the usual suspects, strings, string
/// vectors, and numeric arrays, while [`Version::infer`] can assemble one
/// from per-part lookups, e.g. build-time environment variables.
///
/// ## Examples
///
/// ```
/// use libclimate::Version;
///
/// assert_eq!(Version::from("1.2.3").to_string(), "1.2.3");
/// assert_eq!(Version::from([1, 2, 3, 4]).to_string(), "1.2.3.4");
/// ```
pub enum Version {
	/// # Pre-Rendered Text.
	Text(String),

	/// # Dotted Parts.
	Parts(Vec<String>),
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(v) => f.write_str(v),
			Self::Parts(parts) => f.write_str(&parts.join(".")),
		}
	}
}

impl From<&str> for Version {
	#[inline]
	fn from(src: &str) -> Self { Self::Text(src.to_owned()) }
}

impl From<String> for Version {
	#[inline]
	fn from(src: String) -> Self { Self::Text(src) }
}

impl From<Vec<String>> for Version {
	#[inline]
	fn from(src: Vec<String>) -> Self { Self::Parts(src) }
}

impl<const N: usize> From<[u32; N]> for Version {
	#[inline]
	fn from(src: [u32; N]) -> Self {
		Self::Parts(src.iter().map(u32::to_string).collect())
	}
}

impl Version {
	/// # Infer From Part Lookups.
	///
	/// Query `lookup` for version information, most-aggregate first:
	/// a [`VersionPart::Full`] hit wins outright, otherwise the parts are
	/// collected in order, major, minor, then patch (or revision where no
	/// patch exists), then build, stopping at the first absent tier.
	///
	/// Returns `None` when not even a major part can be found.
	///
	/// ## Examples
	///
	/// ```
	/// use libclimate::{Version, VersionPart};
	///
	/// let version = Version::infer(|part| match part {
	///     VersionPart::Major => Some("1".to_owned()),
	///     VersionPart::Minor => Some("2".to_owned()),
	///     _ => None,
	/// });
	/// assert_eq!(version.map(|v| v.to_string()), Some("1.2".to_owned()));
	/// ```
	#[must_use]
	pub fn infer<F>(lookup: F) -> Option<Self>
	where F: Fn(VersionPart) -> Option<String> {
		if let Some(full) = lookup(VersionPart::Full) {
			return Some(Self::Text(full));
		}

		let mut parts = vec![lookup(VersionPart::Major)?];
		if let Some(minor) = lookup(VersionPart::Minor) {
			parts.push(minor);
			if let Some(patch) = lookup(VersionPart::Patch).or_else(|| lookup(VersionPart::Revision)) {
				parts.push(patch);
				if let Some(build) = lookup(VersionPart::Build) {
					parts.push(build);
				}
			}
		}

		Some(Self::Parts(parts))
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
/// # Version Part.
///
/// The tiers [`Version::infer`] asks about, in the order it asks.
pub enum VersionPart {
	/// # Complete Version String.
	Full,

	/// # Major.
	Major,

	/// # Minor.
	Minor,

	/// # Patch.
	Patch,

	/// # Revision.
	///
	/// Some projects say "revision" where others say "patch"; this tier is
	/// consulted only when [`VersionPart::Patch`] comes up empty.
	Revision,

	/// # Build.
	Build,
}
