//! Feature sets and the visibility gate.
//!
//! A contribution (or a whole slot wrapper) may carry [`FeatureConditions`];
//! the gate is a pure computation over the caller's active feature set and
//! never an error: a failing gate is simply a rendering decision.

use rustc_hash::FxHashSet;

/// How required features are matched against the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
	/// Every required feature must be active.
	#[default]
	All,
	/// At least one required feature must be active.
	Any,
}

/// A set of feature names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureSet(FxHashSet<Box<str>>);

impl FeatureSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, feature: impl Into<Box<str>>) -> bool {
		self.0.insert(feature.into())
	}

	#[inline]
	pub fn contains(&self, feature: &str) -> bool {
		self.0.contains(feature)
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(AsRef::as_ref)
	}
}

impl<S: Into<Box<str>>> FromIterator<S> for FeatureSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

/// Visibility conditions carried by a contribution or a slot wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureConditions {
	pub required: FeatureSet,
	pub mode: MatchMode,
}

impl FeatureConditions {
	/// Conditions requiring every listed feature.
	pub fn all<I, S>(required: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		Self {
			required: required.into_iter().collect(),
			mode: MatchMode::All,
		}
	}

	/// Conditions requiring at least one listed feature.
	pub fn any<I, S>(required: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		Self {
			required: required.into_iter().collect(),
			mode: MatchMode::Any,
		}
	}

	/// Empty requirements always pass, regardless of mode.
	pub fn is_satisfied_by(&self, active: &FeatureSet) -> bool {
		if self.required.is_empty() {
			return true;
		}
		match self.mode {
			MatchMode::All => self.required.iter().all(|f| active.contains(f)),
			MatchMode::Any => self.required.iter().any(|f| active.contains(f)),
		}
	}
}
