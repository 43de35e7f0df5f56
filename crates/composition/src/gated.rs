//! Slot-level feature gating, independent of content.
//!
//! Contribution-level conditions are checked by the registry during
//! resolution; a [`GatedSlot`] additionally refuses to expose the slot at
//! all when the caller's active set fails the slot's own conditions.

use trellis_registry::{FeatureConditions, FeatureSet, SlotId};

use crate::provider::SlotScope;

/// A consumer-side wrapper that renders nothing unless its conditions pass.
pub struct GatedSlot<T> {
	scope: SlotScope<T>,
	slot: SlotId,
	conditions: FeatureConditions,
}

impl<T> GatedSlot<T> {
	pub fn new(scope: SlotScope<T>, slot: impl Into<SlotId>, conditions: FeatureConditions) -> Self {
		Self {
			scope,
			slot: slot.into(),
			conditions,
		}
	}

	#[inline]
	pub fn slot(&self) -> &SlotId {
		&self.slot
	}

	/// Whether the wrapper itself is visible for the caller.
	pub fn visible(&self, active: &FeatureSet) -> bool {
		self.conditions.is_satisfied_by(active)
	}
}

impl<T: Clone> GatedSlot<T> {
	/// Active content for the caller, or `None` when the slot-level gate
	/// fails, the slot is unregistered, or nothing passes for that set.
	pub fn render(&self, active: &FeatureSet) -> Option<T> {
		if !self.visible(active) {
			return None;
		}
		self.scope.resolve(&self.slot, active)
	}

	/// Like [`render`](Self::render) but with an explicit fallback.
	pub fn render_or(&self, active: &FeatureSet, fallback: T) -> T {
		self.render(active).unwrap_or(fallback)
	}
}
