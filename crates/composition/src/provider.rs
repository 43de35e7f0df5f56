//! Provider scopes: one registry instance per subtree lifetime.

use std::sync::{Arc, Weak};

use rustc_hash::FxHashMap as HashMap;
use trellis_registry::{
	Contribution, FeatureSet, RegistryConfig, RegistryStats, ResolutionStrategy, SlotDefinition,
	SlotId, SlotRegistry, SlotSnapshot,
};

use crate::lifecycle::{ContentRegistration, SlotRegistration};

/// Re-exported under the provider's name: the counters a tracking provider
/// reports.
pub type ProviderStats = RegistryStats;

/// Accessibility hints stored for collaborator layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibilityOptions {
	/// Announce content changes to assistive technology.
	pub announce_changes: bool,
	/// Expose slots as labelled landmark regions.
	pub labelled_regions: bool,
}

/// Configuration accepted by [`SlotProvider::with_options`].
///
/// Only `strategy` and `max_contents` change registry behavior;
/// `hot_reload`, `performance_tracking` and `accessibility` are stored
/// configuration surfaced to collaborators, and `extra` carries arbitrary
/// attributes without losing a typed surface.
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
	pub strategy: ResolutionStrategy,
	pub hot_reload: bool,
	pub performance_tracking: bool,
	pub max_contents: Option<usize>,
	pub accessibility: AccessibilityOptions,
	pub extra: HashMap<Box<str>, serde_json::Value>,
}

impl ProviderOptions {
	pub fn strategy(mut self, strategy: ResolutionStrategy) -> Self {
		self.strategy = strategy;
		self
	}

	pub fn hot_reload(mut self, hot_reload: bool) -> Self {
		self.hot_reload = hot_reload;
		self
	}

	pub fn performance_tracking(mut self, performance_tracking: bool) -> Self {
		self.performance_tracking = performance_tracking;
		self
	}

	pub fn max_contents(mut self, max_contents: usize) -> Self {
		self.max_contents = Some(max_contents);
		self
	}

	pub fn accessibility(mut self, accessibility: AccessibilityOptions) -> Self {
		self.accessibility = accessibility;
		self
	}

	pub fn extra(mut self, key: impl Into<Box<str>>, value: impl Into<serde_json::Value>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}
}

/// Owns one [`SlotRegistry`] for its subtree's lifetime.
///
/// Scoped state, not a process singleton: nested and parallel providers
/// coexist, each with an independent registry. Dropping the provider tears
/// the registry down; scope handles outliving it fail fast (see
/// [`SlotScope`]).
pub struct SlotProvider<T> {
	registry: Arc<SlotRegistry<T>>,
	options: ProviderOptions,
}

impl<T> Default for SlotProvider<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> SlotProvider<T> {
	pub fn new() -> Self {
		Self::with_options(ProviderOptions::default())
	}

	pub fn with_options(options: ProviderOptions) -> Self {
		tracing::debug!(strategy = ?options.strategy, "slot provider created");
		let registry = Arc::new(SlotRegistry::with_config(RegistryConfig {
			max_contents: options.max_contents,
		}));
		Self { registry, options }
	}

	/// A cloneable handle for descendants of this provider.
	pub fn scope(&self) -> SlotScope<T> {
		SlotScope {
			registry: Arc::downgrade(&self.registry),
			strategy: self.options.strategy,
		}
	}

	pub fn options(&self) -> &ProviderOptions {
		&self.options
	}

	/// Direct registry access for the provider owner itself.
	pub fn registry(&self) -> &SlotRegistry<T> {
		&self.registry
	}

	/// Mutation counters; `None` unless `performance_tracking` was enabled.
	pub fn stats(&self) -> Option<ProviderStats> {
		self.options
			.performance_tracking
			.then(|| self.registry.stats())
	}
}

/// Handle into a provider's registry, held by contributing and consuming
/// components.
///
/// Using a scope after its provider was dropped is a structural wiring
/// mistake, not a runtime race, so every operation fails fast with a panic.
/// The one exception is guard teardown, which skips quietly (the registry
/// died with everything in it).
pub struct SlotScope<T> {
	registry: Weak<SlotRegistry<T>>,
	strategy: ResolutionStrategy,
}

impl<T> Clone for SlotScope<T> {
	fn clone(&self) -> Self {
		Self {
			registry: self.registry.clone(),
			strategy: self.strategy,
		}
	}
}

impl<T> SlotScope<T> {
	pub(crate) fn registry(&self) -> Arc<SlotRegistry<T>> {
		self.registry
			.upgrade()
			.expect("slot operation outside an active provider scope")
	}

	pub(crate) fn try_registry(&self) -> Option<Arc<SlotRegistry<T>>> {
		self.registry.upgrade()
	}

	/// Registers the slot and returns a guard that unregisters it on drop.
	pub fn register_slot(&self, definition: SlotDefinition<T>) -> SlotRegistration<T> {
		SlotRegistration::acquire(self.clone(), definition)
	}

	pub fn register_slots(
		&self,
		definitions: impl IntoIterator<Item = SlotDefinition<T>>,
	) -> Vec<SlotRegistration<T>> {
		definitions
			.into_iter()
			.map(|definition| self.register_slot(definition))
			.collect()
	}

	/// Submits content and returns a guard that removes it on drop.
	pub fn add_content(&self, slot: &SlotId, contribution: Contribution<T>) -> ContentRegistration<T> {
		ContentRegistration::acquire(self.clone(), slot, contribution)
	}

	pub fn add_contents(
		&self,
		slot: &SlotId,
		contributions: impl IntoIterator<Item = Contribution<T>>,
	) -> Vec<ContentRegistration<T>> {
		contributions
			.into_iter()
			.map(|contribution| self.add_content(slot, contribution))
			.collect()
	}

	pub fn has_slot(&self, id: &SlotId) -> bool {
		self.registry().has_slot(id)
	}
}

impl<T: Clone> SlotScope<T> {
	pub fn get(&self, id: &SlotId) -> Option<SlotSnapshot<T>> {
		self.registry().get(id)
	}

	/// Resolves under the provider's configured strategy.
	pub fn resolve(&self, id: &SlotId, active: &FeatureSet) -> Option<T> {
		self.registry().resolve_with(id, self.strategy, active)
	}

	pub fn resolve_all(&self, id: &SlotId, active: &FeatureSet) -> Vec<T> {
		self.registry().resolve_all(id, active)
	}
}
