//! Slot identifiers and definitions.

use std::fmt;
use std::sync::Arc;

/// Unique identifier for a named insertion point.
///
/// Slot ids are kebab-case by convention (`"dashboard-header"`). Construction
/// is permissive; strict format checks live in
/// [`validate_definition`](crate::validate::validate_definition) so that
/// module authors opt in to them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(Box<str>);

impl SlotId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		Self(id.into())
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SlotId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for SlotId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for SlotId {
	fn from(id: String) -> Self {
		Self::new(id)
	}
}

/// Predicate over a contribution payload; rejecting payloads are dropped at
/// [`add_content`](crate::registry::SlotRegistry::add_content) time.
pub type PayloadValidator<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Describes one named insertion point.
pub struct SlotDefinition<T> {
	/// Unique key within a registry.
	pub id: SlotId,
	/// Human-readable name, used for diagnostics.
	pub name: Box<str>,
	/// Required slots are expected to resolve content; empty ones are
	/// surfaced by [`missing_required`](crate::registry::SlotRegistry::missing_required)
	/// and warned about at unregister time.
	pub required: bool,
	/// Optional payload predicate.
	pub validator: Option<PayloadValidator<T>>,
}

impl<T> SlotDefinition<T> {
	pub fn new(id: impl Into<SlotId>, name: impl Into<Box<str>>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			required: false,
			validator: None,
		}
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	pub fn validator(mut self, f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
		self.validator = Some(Arc::new(f));
		self
	}

	/// Last registration wins: `name` and `required` are overwritten; a new
	/// validator replaces the old one, `None` leaves it in place.
	pub(crate) fn merge_from(&mut self, other: SlotDefinition<T>) {
		self.name = other.name;
		self.required = other.required;
		if other.validator.is_some() {
			self.validator = other.validator;
		}
	}
}

impl<T> Clone for SlotDefinition<T> {
	fn clone(&self) -> Self {
		Self {
			id: self.id.clone(),
			name: self.name.clone(),
			required: self.required,
			validator: self.validator.clone(),
		}
	}
}

impl<T> fmt::Debug for SlotDefinition<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotDefinition")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("required", &self.required)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}
