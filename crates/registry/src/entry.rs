//! Per-slot aggregate state and content resolution.

use std::cmp::Reverse;

use smallvec::SmallVec;

use crate::contribution::{Contribution, ContributionId};
use crate::features::FeatureSet;
use crate::slot::SlotDefinition;

/// Content lifecycle state of a registered slot.
///
/// The unregistered state is represented by absence from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotState {
	/// Registered, no contributions.
	Empty,
	/// Registered with at least one contribution.
	Active,
}

/// How a slot picks its winning contribution among those passing the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionStrategy {
	/// Highest priority wins; ties keep registration order.
	#[default]
	Priority,
	/// Earliest surviving registration wins, ignoring priority.
	FirstWins,
	/// Latest surviving registration wins, ignoring priority.
	LastWins,
}

/// A contribution plus the identity it was registered under.
pub struct Registered<T> {
	pub id: ContributionId,
	pub contribution: Contribution<T>,
}

/// Aggregate per slot id: the definition and its ordered contribution list.
///
/// The list is kept sorted at insertion time under an explicit total order
/// (priority descending, then registration sequence ascending). Active
/// content is always derived from the list head, never stored separately.
pub struct SlotEntry<T> {
	pub(crate) definition: SlotDefinition<T>,
	pub(crate) contributions: SmallVec<[Registered<T>; 4]>,
	pub(crate) ever_had_content: bool,
}

fn sort_key<T>(r: &Registered<T>) -> (Reverse<i16>, u64) {
	(Reverse(r.contribution.priority), r.id.seq())
}

impl<T> SlotEntry<T> {
	pub(crate) fn new(definition: SlotDefinition<T>) -> Self {
		Self {
			definition,
			contributions: SmallVec::new(),
			ever_had_content: false,
		}
	}

	/// Inserts in sorted position. Sequence numbers are unique, so the total
	/// order has no equal keys and stability never depends on the sort
	/// primitive.
	pub(crate) fn insert(&mut self, registered: Registered<T>) {
		let pos = self
			.contributions
			.binary_search_by(|r| sort_key(r).cmp(&sort_key(&registered)))
			.unwrap_or_else(|p| p);
		self.contributions.insert(pos, registered);
		self.ever_had_content = true;
	}

	/// Removes by identity. Returns false when the identity is not present
	/// (double removal is a no-op).
	pub(crate) fn remove(&mut self, id: &ContributionId) -> bool {
		let before = self.contributions.len();
		self.contributions.retain(|r| r.id != *id);
		self.contributions.len() != before
	}

	#[inline]
	pub fn definition(&self) -> &SlotDefinition<T> {
		&self.definition
	}

	#[inline]
	pub fn state(&self) -> SlotState {
		if self.contributions.is_empty() {
			SlotState::Empty
		} else {
			SlotState::Active
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.contributions.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.contributions.is_empty()
	}

	pub fn contributions(&self) -> impl Iterator<Item = &Registered<T>> {
		self.contributions.iter()
	}

	/// Highest-priority payload, ignoring feature conditions.
	pub fn active(&self) -> Option<&T> {
		self.contributions.first().map(|r| &r.contribution.payload)
	}

	/// Highest-priority payload visible for the given active set. The gate
	/// runs before selection, so a gated-out head falls through to the next
	/// contribution.
	pub fn resolve<'a>(&'a self, active: &'a FeatureSet) -> Option<&'a T> {
		self.visible(active).next()
	}

	/// All visible payloads, in slot order.
	pub fn visible<'a>(&'a self, active: &'a FeatureSet) -> impl Iterator<Item = &'a T> {
		self.contributions
			.iter()
			.filter(|r| r.contribution.passes(active))
			.map(|r| &r.contribution.payload)
	}

	pub fn resolve_with(&self, strategy: ResolutionStrategy, active: &FeatureSet) -> Option<&T> {
		let mut passing = self
			.contributions
			.iter()
			.filter(|r| r.contribution.passes(active));
		match strategy {
			ResolutionStrategy::Priority => passing.next().map(|r| &r.contribution.payload),
			ResolutionStrategy::FirstWins => passing
				.min_by_key(|r| r.id.seq())
				.map(|r| &r.contribution.payload),
			ResolutionStrategy::LastWins => passing
				.max_by_key(|r| r.id.seq())
				.map(|r| &r.contribution.payload),
		}
	}
}
