//! Ready-made compound specs for common layouts.

use crate::compound::CompoundSpec;

/// A card with header, body and footer; the body is required.
pub fn card() -> CompoundSpec {
	CompoundSpec::new("card")
		.slot("header", "Header")
		.required_slot("body", "Body")
		.slot("footer", "Footer")
}

/// A dashboard shell: header, sidebar, content and footer.
pub fn dashboard() -> CompoundSpec {
	CompoundSpec::new("dashboard")
		.slot("header", "Header")
		.slot("sidebar", "Sidebar")
		.required_slot("content", "Content")
		.slot("footer", "Footer")
}

#[cfg(test)]
mod tests {
	use trellis_registry::validate_definition;

	use super::*;

	#[test]
	fn preset_ids_are_kebab_case() {
		for spec in [card(), dashboard()] {
			for definition in spec.definitions::<()>() {
				assert_eq!(validate_definition(&definition), Ok(()), "{}", definition.id);
			}
		}
	}

	#[test]
	fn dashboard_exposes_four_slots() {
		let spec = dashboard();
		assert_eq!(spec.names().count(), 4);
		assert_eq!(
			spec.slot_id("sidebar").unwrap().as_str(),
			"dashboard-sidebar"
		);
	}
}
