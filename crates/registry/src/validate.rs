//! Opt-in definition validation for module authors.
//!
//! The registry itself is permissive on `register_slot`; modules that want
//! their slot contracts checked call this at build time or in tests.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DefinitionError;
use crate::slot::SlotDefinition;

static KEBAB_ID: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("^[a-z][a-z0-9-]*[a-z0-9]$").expect("kebab id pattern"));

/// Fails when the id or name is missing, or the id is not kebab-case.
pub fn validate_definition<T>(definition: &SlotDefinition<T>) -> Result<(), DefinitionError> {
	let id = definition.id.as_str();
	if id.is_empty() {
		return Err(DefinitionError::MissingId);
	}
	if definition.name.is_empty() {
		return Err(DefinitionError::MissingName { id: Box::from(id) });
	}
	if !KEBAB_ID.is_match(id) {
		return Err(DefinitionError::IdNotKebabCase { id: Box::from(id) });
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_kebab_case_ids() {
		for id in ["dashboard-header", "card-footer", "a0", "nav-2-items"] {
			let definition = SlotDefinition::<()>::new(id, "Name");
			assert_eq!(validate_definition(&definition), Ok(()), "{id}");
		}
	}

	#[test]
	fn rejects_bad_ids() {
		for id in ["Header", "dashboard_header", "-leading", "trailing-", "mixedCase"] {
			let definition = SlotDefinition::<()>::new(id, "Name");
			assert_eq!(
				validate_definition(&definition),
				Err(DefinitionError::IdNotKebabCase { id: Box::from(id) }),
				"{id}"
			);
		}
	}

	#[test]
	fn rejects_missing_fields() {
		assert_eq!(
			validate_definition(&SlotDefinition::<()>::new("", "Name")),
			Err(DefinitionError::MissingId)
		);
		assert_eq!(
			validate_definition(&SlotDefinition::<()>::new("ok-id", "")),
			Err(DefinitionError::MissingName {
				id: Box::from("ok-id")
			})
		);
	}
}
