//! Drop-based registration guards.
//!
//! Acquisition and release are symmetric: a guard registers on creation and
//! releases on drop, including unwinds, so an owner that errors mid-lifetime
//! still cleans up after itself. Release never panics; if the provider died
//! first, the registry took everything with it and the guard skips quietly.

use trellis_registry::{Contribution, ContributionId, SlotDefinition, SlotId};

use crate::provider::SlotScope;

/// Scoped slot registration: registers on creation, unregisters on drop.
pub struct SlotRegistration<T> {
	scope: SlotScope<T>,
	id: SlotId,
}

impl<T> SlotRegistration<T> {
	pub(crate) fn acquire(scope: SlotScope<T>, definition: SlotDefinition<T>) -> Self {
		let id = definition.id.clone();
		scope.registry().register_slot(definition);
		Self { scope, id }
	}

	#[inline]
	pub fn id(&self) -> &SlotId {
		&self.id
	}

	/// Re-registers with changed definition fields. A changed id releases
	/// the old one first, so no duplicate or orphan entry survives; an
	/// unchanged id goes through the registry's merge upsert.
	pub fn replace(&mut self, definition: SlotDefinition<T>) {
		let registry = self.scope.registry();
		if definition.id != self.id {
			registry.unregister_slot(&self.id);
			self.id = definition.id.clone();
		}
		registry.register_slot(definition);
	}
}

impl<T> Drop for SlotRegistration<T> {
	fn drop(&mut self) {
		if let Some(registry) = self.scope.try_registry() {
			registry.unregister_slot(&self.id);
		}
	}
}

/// Scoped content registration: submits on creation, removes on drop.
///
/// Holds the exact identity minted at registration; a remount goes through a
/// fresh guard and therefore a fresh identity, never a reused one.
pub struct ContentRegistration<T> {
	scope: SlotScope<T>,
	id: Option<ContributionId>,
}

impl<T> ContentRegistration<T> {
	pub(crate) fn acquire(scope: SlotScope<T>, slot: &SlotId, contribution: Contribution<T>) -> Self {
		let id = scope.registry().add_content(slot, contribution);
		Self { scope, id }
	}

	/// A guard holding nothing; dropped without effect.
	pub(crate) fn inert(scope: SlotScope<T>) -> Self {
		Self { scope, id: None }
	}

	/// `None` when the registry declined the contribution (unknown slot,
	/// validator rejection, or cap).
	#[inline]
	pub fn id(&self) -> Option<&ContributionId> {
		self.id.as_ref()
	}

	#[inline]
	pub fn is_registered(&self) -> bool {
		self.id.is_some()
	}

	/// Swaps the content for changed payload or priority: the old identity
	/// is removed before the new contribution is submitted.
	pub fn replace(&mut self, slot: &SlotId, contribution: Contribution<T>) {
		let registry = self.scope.registry();
		if let Some(old) = self.id.take() {
			registry.remove_content(&old);
		}
		self.id = registry.add_content(slot, contribution);
	}

	/// Releases early, before the guard goes out of scope.
	pub fn release(mut self) {
		self.release_inner();
	}

	fn release_inner(&mut self) {
		if let Some(id) = self.id.take()
			&& let Some(registry) = self.scope.try_registry()
		{
			registry.remove_content(&id);
		}
	}
}

impl<T> Drop for ContentRegistration<T> {
	fn drop(&mut self) {
		self.release_inner();
	}
}
