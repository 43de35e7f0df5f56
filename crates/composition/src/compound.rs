//! Compound slots: a declarative bundle of named slots under one prefix.
//!
//! A [`CompoundSpec`] maps slot names to definition partials; mounting it
//! registers every slot and returns accessors keyed by the short name, so a
//! "card" compound exposes `header`/`body`/`footer` without callers spelling
//! out full ids. Pure declarative convenience; the only state is the mounted
//! guards.

use trellis_registry::{Contribution, FeatureSet, SlotDefinition, SlotId};

use crate::lifecycle::{ContentRegistration, SlotRegistration};
use crate::provider::SlotScope;

#[derive(Debug, Clone)]
struct CompoundSlotSpec {
	name: Box<str>,
	display: Box<str>,
	required: bool,
}

/// Named map of slot-name to definition partial, with an id prefix.
#[derive(Debug, Clone)]
pub struct CompoundSpec {
	prefix: Box<str>,
	slots: Vec<CompoundSlotSpec>,
}

impl CompoundSpec {
	pub fn new(prefix: impl Into<Box<str>>) -> Self {
		Self {
			prefix: prefix.into(),
			slots: Vec::new(),
		}
	}

	pub fn slot(self, name: impl Into<Box<str>>, display: impl Into<Box<str>>) -> Self {
		self.push(name.into(), display.into(), false)
	}

	pub fn required_slot(self, name: impl Into<Box<str>>, display: impl Into<Box<str>>) -> Self {
		self.push(name.into(), display.into(), true)
	}

	fn push(mut self, name: Box<str>, display: Box<str>, required: bool) -> Self {
		self.slots.push(CompoundSlotSpec {
			name,
			display,
			required,
		});
		self
	}

	#[inline]
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.slots.iter().map(|s| s.name.as_ref())
	}

	/// Full id for a short name: `<prefix>-<name>`, underscores kebabized.
	pub fn slot_id(&self, name: &str) -> Option<SlotId> {
		self.slots
			.iter()
			.find(|s| &*s.name == name)
			.map(|s| compound_id(&self.prefix, &s.name))
	}

	/// Expands the partials into full definitions.
	pub fn definitions<T>(&self) -> Vec<SlotDefinition<T>> {
		self.slots
			.iter()
			.map(|s| {
				SlotDefinition::new(compound_id(&self.prefix, &s.name), s.display.clone())
					.required(s.required)
			})
			.collect()
	}

	/// Registers every slot through the scope and returns the accessors.
	pub fn mount<T>(&self, scope: &SlotScope<T>) -> CompoundSlots<T> {
		let guards = scope.register_slots(self.definitions());
		CompoundSlots {
			scope: scope.clone(),
			names: self
				.slots
				.iter()
				.map(|s| (s.name.clone(), compound_id(&self.prefix, &s.name)))
				.collect(),
			_guards: guards,
		}
	}
}

fn compound_id(prefix: &str, name: &str) -> SlotId {
	SlotId::new(format!("{}-{}", prefix, name.replace('_', "-")))
}

/// A mounted compound: per-name accessors over the fixed slot set.
///
/// Dropping it unregisters every slot of the compound.
pub struct CompoundSlots<T> {
	scope: SlotScope<T>,
	names: Vec<(Box<str>, SlotId)>,
	_guards: Vec<SlotRegistration<T>>,
}

impl<T> CompoundSlots<T> {
	pub fn id_of(&self, name: &str) -> Option<&SlotId> {
		self.names.iter().find(|(n, _)| &**n == name).map(|(_, id)| id)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(|(n, _)| n.as_ref())
	}

	/// Submits content to a named child slot. Unknown names resolve to an
	/// inert guard, mirroring the registry's tolerant write surface.
	pub fn add_content(&self, name: &str, contribution: Contribution<T>) -> ContentRegistration<T> {
		match self.id_of(name) {
			Some(id) => self.scope.add_content(id, contribution),
			None => {
				tracing::warn!(name, "content for unknown compound slot ignored");
				ContentRegistration::inert(self.scope.clone())
			}
		}
	}
}

impl<T: Clone> CompoundSlots<T> {
	pub fn resolve(&self, name: &str, active: &FeatureSet) -> Option<T> {
		self.scope.resolve(self.id_of(name)?, active)
	}
}
