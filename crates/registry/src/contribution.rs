//! Content contributions and their stable identities.

use std::fmt;

use rustc_hash::FxHashMap as HashMap;
use uuid::Uuid;

use crate::features::{FeatureConditions, FeatureSet};
use crate::slot::SlotId;

/// Stable identity of one registered contribution.
///
/// Combines the slot id, a per-registry monotonic sequence number and a
/// random token. Identity is never positional: removing one contribution
/// cannot shift the identity of any other, and an identity is never reused
/// across remounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContributionId {
	slot: SlotId,
	seq: u64,
	token: Uuid,
}

impl ContributionId {
	pub(crate) fn mint(slot: SlotId, seq: u64) -> Self {
		Self {
			slot,
			seq,
			token: Uuid::new_v4(),
		}
	}

	/// The slot this contribution was registered against.
	#[inline]
	pub fn slot(&self) -> &SlotId {
		&self.slot
	}

	/// Registration order within the owning registry.
	#[inline]
	pub(crate) fn seq(&self) -> u64 {
		self.seq
	}
}

impl fmt::Display for ContributionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}#{}", self.slot, self.seq)
	}
}

/// A single content item submitted to a slot.
pub struct Contribution<T> {
	/// Opaque renderable payload.
	pub payload: T,
	/// Higher sorts first; ties keep registration order. Default 0.
	pub priority: i16,
	/// Optional visibility conditions, checked before priority selection.
	pub conditions: Option<FeatureConditions>,
	/// Free-form metadata (source component id, category, ...).
	pub metadata: HashMap<Box<str>, serde_json::Value>,
}

impl<T> Contribution<T> {
	pub fn new(payload: T) -> Self {
		Self {
			payload,
			priority: 0,
			conditions: None,
			metadata: HashMap::default(),
		}
	}

	pub fn priority(mut self, priority: i16) -> Self {
		self.priority = priority;
		self
	}

	pub fn conditions(mut self, conditions: FeatureConditions) -> Self {
		self.conditions = Some(conditions);
		self
	}

	pub fn metadata(mut self, key: impl Into<Box<str>>, value: impl Into<serde_json::Value>) -> Self {
		self.metadata.insert(key.into(), value.into());
		self
	}

	/// Whether this contribution is visible for the given active set.
	pub fn passes(&self, active: &FeatureSet) -> bool {
		self.conditions
			.as_ref()
			.is_none_or(|c| c.is_satisfied_by(active))
	}
}

impl<T: Clone> Clone for Contribution<T> {
	fn clone(&self) -> Self {
		Self {
			payload: self.payload.clone(),
			priority: self.priority,
			conditions: self.conditions.clone(),
			metadata: self.metadata.clone(),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Contribution<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Contribution")
			.field("payload", &self.payload)
			.field("priority", &self.priority)
			.field("conditions", &self.conditions)
			.finish()
	}
}
