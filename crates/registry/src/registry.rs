//! The slot registry: single source of truth within one provider scope.
//!
//! All mutations are synchronous and funneled through one lock, so content
//! order is deterministic regardless of how many independent owners call in.
//! Operations on unknown ids are logged no-ops rather than errors; owners
//! mount and unmount in any order and a transient miss must not crash the
//! host tree.

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;

use crate::contribution::{Contribution, ContributionId};
use crate::entry::{Registered, ResolutionStrategy, SlotEntry, SlotState};
use crate::features::FeatureSet;
use crate::slot::{SlotDefinition, SlotId};

/// Registry construction knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryConfig {
	/// Per-slot contribution cap; further additions are logged and dropped.
	pub max_contents: Option<usize>,
}

/// Mutation counters, cheap enough to keep unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryStats {
	pub slots_registered: u64,
	pub slots_unregistered: u64,
	pub contents_added: u64,
	pub contents_removed: u64,
}

#[derive(Default)]
struct Counters {
	slots_registered: AtomicU64,
	slots_unregistered: AtomicU64,
	contents_added: AtomicU64,
	contents_removed: AtomicU64,
}

struct RegistryState<T> {
	slots: IndexMap<SlotId, SlotEntry<T>, FxBuildHasher>,
}

/// One contribution inside a [`SlotSnapshot`].
#[derive(Debug, Clone)]
pub struct ContributionView<T> {
	pub id: ContributionId,
	pub payload: T,
	pub priority: i16,
}

/// Point-in-time cloned view of one slot.
#[derive(Debug, Clone)]
pub struct SlotSnapshot<T> {
	pub id: SlotId,
	pub name: Box<str>,
	pub required: bool,
	pub state: SlotState,
	/// Contributions in slot order (priority descending, then registration).
	pub contributions: Vec<ContributionView<T>>,
	/// Derived head-of-list payload; `None` when the slot is empty.
	pub active: Option<T>,
}

/// Maps slot identifiers to their definition and ordered contribution list.
///
/// Exclusively owned by its provider scope; never a process-wide singleton,
/// so nested and parallel scopes coexist (notably in tests).
pub struct SlotRegistry<T> {
	state: RwLock<RegistryState<T>>,
	seq: AtomicU64,
	counters: Counters,
	config: RegistryConfig,
}

impl<T> Default for SlotRegistry<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> SlotRegistry<T> {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			state: RwLock::new(RegistryState {
				slots: IndexMap::default(),
			}),
			seq: AtomicU64::new(0),
			counters: Counters::default(),
			config,
		}
	}

	/// Idempotent upsert: a new id gets a fresh entry with an empty
	/// contribution list; re-registering an existing id merges definition
	/// fields and leaves contributions untouched.
	pub fn register_slot(&self, definition: SlotDefinition<T>) {
		let mut state = self.state.write();
		match state.slots.entry(definition.id.clone()) {
			indexmap::map::Entry::Occupied(mut occupied) => {
				tracing::debug!(id = %definition.id, "slot re-registered, merging definition");
				occupied.get_mut().definition.merge_from(definition);
			}
			indexmap::map::Entry::Vacant(vacant) => {
				vacant.insert(SlotEntry::new(definition));
				self.counters.slots_registered.fetch_add(1, Ordering::Relaxed);
			}
		}
	}

	pub fn register_slots(&self, definitions: impl IntoIterator<Item = SlotDefinition<T>>) {
		for definition in definitions {
			self.register_slot(definition);
		}
	}

	/// Removes the entry entirely (definition and contributions). A later
	/// `add_content` against the id does not resurrect it.
	pub fn unregister_slot(&self, id: &SlotId) {
		let mut state = self.state.write();
		match state.slots.shift_remove(id) {
			Some(entry) => {
				if entry.definition.required && !entry.ever_had_content {
					tracing::warn!(id = %id, "required slot unregistered without ever receiving content");
				}
				self.counters.slots_unregistered.fetch_add(1, Ordering::Relaxed);
			}
			None => {
				tracing::debug!(id = %id, "unregister of unknown slot ignored");
			}
		}
	}

	/// Appends a contribution and returns its fresh identity, or `None` when
	/// the slot is unknown, the definition validator rejects the payload, or
	/// the per-slot cap is hit. All three are logged, none are errors: an
	/// owner may race its target slot's unmount.
	pub fn add_content(&self, slot: &SlotId, contribution: Contribution<T>) -> Option<ContributionId> {
		let mut state = self.state.write();
		let Some(entry) = state.slots.get_mut(slot) else {
			let suggestion = nearest_id(&state, slot);
			tracing::warn!(slot = %slot, ?suggestion, "content for unregistered slot ignored");
			return None;
		};
		if let Some(validator) = entry.definition.validator.as_deref()
			&& !validator(&contribution.payload)
		{
			tracing::warn!(slot = %slot, "contribution rejected by slot validator");
			return None;
		}
		if let Some(cap) = self.config.max_contents
			&& entry.len() >= cap
		{
			tracing::warn!(slot = %slot, cap, "slot contribution cap reached, contribution dropped");
			return None;
		}
		let id = ContributionId::mint(slot.clone(), self.seq.fetch_add(1, Ordering::Relaxed));
		entry.insert(Registered {
			id: id.clone(),
			contribution,
		});
		self.counters.contents_added.fetch_add(1, Ordering::Relaxed);
		Some(id)
	}

	/// Removes by identity. No-op when the slot or the contribution is gone,
	/// so double removal and unmount races are harmless.
	pub fn remove_content(&self, id: &ContributionId) {
		let mut state = self.state.write();
		let removed = state
			.slots
			.get_mut(id.slot())
			.is_some_and(|entry| entry.remove(id));
		if removed {
			self.counters.contents_removed.fetch_add(1, Ordering::Relaxed);
		} else {
			tracing::debug!(id = %id, "removal of unknown contribution ignored");
		}
	}

	pub fn has_slot(&self, id: &SlotId) -> bool {
		self.state.read().slots.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.state.read().slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.state.read().slots.is_empty()
	}

	/// Registered slot ids, in registration order.
	pub fn slot_ids(&self) -> Vec<SlotId> {
		self.state.read().slots.keys().cloned().collect()
	}

	/// Zero-clone read access to one entry under the lock.
	pub fn with_slot<R>(&self, id: &SlotId, f: impl FnOnce(&SlotEntry<T>) -> R) -> Option<R> {
		let state = self.state.read();
		state.slots.get(id).map(f)
	}

	pub fn stats(&self) -> RegistryStats {
		RegistryStats {
			slots_registered: self.counters.slots_registered.load(Ordering::Relaxed),
			slots_unregistered: self.counters.slots_unregistered.load(Ordering::Relaxed),
			contents_added: self.counters.contents_added.load(Ordering::Relaxed),
			contents_removed: self.counters.contents_removed.load(Ordering::Relaxed),
		}
	}
}

impl<T: Clone> SlotRegistry<T> {
	/// Cloned view of one slot, or `None` when unregistered.
	pub fn get(&self, id: &SlotId) -> Option<SlotSnapshot<T>> {
		self.with_slot(id, |entry| snapshot(id, entry))
	}

	/// Cloned views of every slot, in registration order.
	pub fn all_slots(&self) -> Vec<SlotSnapshot<T>> {
		let state = self.state.read();
		state
			.slots
			.iter()
			.map(|(id, entry)| snapshot(id, entry))
			.collect()
	}

	/// Highest-priority payload visible for the given active set.
	pub fn resolve(&self, id: &SlotId, active: &FeatureSet) -> Option<T> {
		self.with_slot(id, |entry| entry.resolve(active).cloned())
			.flatten()
	}

	pub fn resolve_with(
		&self,
		id: &SlotId,
		strategy: ResolutionStrategy,
		active: &FeatureSet,
	) -> Option<T> {
		self.with_slot(id, |entry| entry.resolve_with(strategy, active).cloned())
			.flatten()
	}

	/// All visible payloads for the slot, in slot order.
	pub fn resolve_all(&self, id: &SlotId, active: &FeatureSet) -> Vec<T> {
		self.with_slot(id, |entry| entry.visible(active).cloned().collect())
			.unwrap_or_default()
	}
}

fn snapshot<T: Clone>(id: &SlotId, entry: &SlotEntry<T>) -> SlotSnapshot<T> {
	SlotSnapshot {
		id: id.clone(),
		name: entry.definition.name.clone(),
		required: entry.definition.required,
		state: entry.state(),
		contributions: entry
			.contributions()
			.map(|r| ContributionView {
				id: r.id.clone(),
				payload: r.contribution.payload.clone(),
				priority: r.contribution.priority,
			})
			.collect(),
		active: entry.active().cloned(),
	}
}

/// Closest registered id by Jaro-Winkler distance, for "did you mean" hints.
fn nearest_id<T>(state: &RegistryState<T>, id: &SlotId) -> Option<SlotId> {
	state
		.slots
		.keys()
		.map(|k| (strsim::jaro_winkler(k.as_str(), id.as_str()), k))
		.filter(|(score, _)| *score > 0.8)
		.max_by(|(a, _), (b, _)| a.total_cmp(b))
		.map(|(_, k)| k.clone())
}
