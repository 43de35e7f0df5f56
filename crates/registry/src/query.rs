//! Discovery surfaces for tooling: summaries, id matching, docs output.

use std::fmt::Write as _;

use regex::Regex;

use crate::entry::SlotState;
use crate::registry::SlotRegistry;
use crate::slot::SlotId;

/// Derived per-slot flags for discovery and debugging tooling.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SlotSummary {
	pub id: Box<str>,
	pub name: Box<str>,
	pub required: bool,
	pub has_content: bool,
	pub content_count: usize,
	pub state: SlotState,
}

impl<T> SlotRegistry<T> {
	/// Summaries of every slot, in registration order.
	pub fn summaries(&self) -> Vec<SlotSummary> {
		self.slot_ids()
			.into_iter()
			.filter_map(|id| {
				self.with_slot(&id, |entry| SlotSummary {
					id: Box::from(id.as_str()),
					name: entry.definition().name.clone(),
					required: entry.definition().required,
					has_content: !entry.is_empty(),
					content_count: entry.len(),
					state: entry.state(),
				})
			})
			.collect()
	}

	/// Slot ids containing the given substring.
	pub fn find_by_substring(&self, needle: &str) -> Vec<SlotId> {
		self.slot_ids()
			.into_iter()
			.filter(|id| id.as_str().contains(needle))
			.collect()
	}

	/// Slot ids matching the given pattern.
	pub fn find_by_pattern(&self, pattern: &Regex) -> Vec<SlotId> {
		self.slot_ids()
			.into_iter()
			.filter(|id| pattern.is_match(id.as_str()))
			.collect()
	}

	/// Required slots that currently resolve no content.
	pub fn missing_required(&self) -> Vec<SlotId> {
		self.slot_ids()
			.into_iter()
			.filter(|id| {
				self.with_slot(id, |entry| entry.definition().required && entry.is_empty())
					.unwrap_or(false)
			})
			.collect()
	}

	/// Markdown table of all slots, for documentation tooling.
	pub fn document_slots(&self) -> String {
		let mut out = String::from("| id | name | required | contents |\n|---|---|---|---|\n");
		for summary in self.summaries() {
			let _ = writeln!(
				out,
				"| `{}` | {} | {} | {} |",
				summary.id,
				summary.name,
				if summary.required { "yes" } else { "no" },
				summary.content_count,
			);
		}
		out
	}
}
