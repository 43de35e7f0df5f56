//! Error taxonomy.
//!
//! Only configuration errors are fatal enough to surface as values; unknown
//! id operations degrade to logged no-ops and gate failures are rendering
//! decisions, not errors.

/// Configuration errors reported by
/// [`validate_definition`](crate::validate::validate_definition).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
	/// The definition has an empty id.
	#[error("slot definition is missing an id")]
	MissingId,

	/// The definition has an empty display name.
	#[error("slot definition {id:?} is missing a display name")]
	MissingName { id: Box<str> },

	/// The id does not match `^[a-z][a-z0-9-]*[a-z0-9]$`.
	#[error("slot id {id:?} is not kebab-case")]
	IdNotKebabCase { id: Box<str> },
}
