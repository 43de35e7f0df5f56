//! Provider-scoped slot registry with priority-ordered content contributions.
//!
//! A *slot* is a named insertion point owned by one registry instance. Content
//! owners submit *contributions* (an opaque payload plus a priority and
//! optional feature conditions) against a slot id; the registry keeps each
//! slot's contribution list in a deterministic order and derives the slot's
//! *active content* from it. Consumers read a slot by id and render its active
//! content, or fall back when the slot is empty.
//!
//! # Modules
//!
//! - [`slot`] - Slot identifiers and definitions
//! - [`contribution`] - Content contributions and their stable identities
//! - [`features`] - Feature sets and the visibility gate
//! - [`entry`] - Per-slot aggregate state and resolution
//! - [`registry`] - The registry itself (single mutation surface per scope)
//! - [`query`] - Discovery surfaces for tooling
//! - [`validate`] - Opt-in definition validation for module authors
//!
//! Every operation on an unknown id is a logged no-op rather than an error:
//! contributors and consumers mount and unmount independently, and a missing
//! slot must never take the host tree down with it.

pub mod contribution;
pub mod entry;
pub mod error;
pub mod features;
pub mod query;
pub mod registry;
pub mod slot;
pub mod validate;

pub use contribution::{Contribution, ContributionId};
pub use entry::{Registered, ResolutionStrategy, SlotEntry, SlotState};
pub use error::DefinitionError;
pub use features::{FeatureConditions, FeatureSet, MatchMode};
pub use query::SlotSummary;
pub use registry::{ContributionView, RegistryConfig, RegistryStats, SlotRegistry, SlotSnapshot};
pub use slot::{PayloadValidator, SlotDefinition, SlotId};
pub use validate::validate_definition;
