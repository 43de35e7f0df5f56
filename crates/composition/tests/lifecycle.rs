//! Integration tests for provider scopes, registration guards and compounds.

use std::panic::{AssertUnwindSafe, catch_unwind};

use pretty_assertions::assert_eq;
use trellis_composition::registry::{
	Contribution, FeatureConditions, FeatureSet, ResolutionStrategy, SlotDefinition, SlotId,
};
use trellis_composition::{
	GatedSlot, ProviderOptions, SlotProvider, compound_spec, presets,
};

fn no_features() -> FeatureSet {
	FeatureSet::new()
}

#[test]
fn guard_registers_and_releases_on_drop() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();
	let slot = SlotId::new("drawer");

	{
		let _registration = scope.register_slot(SlotDefinition::new("drawer", "Drawer"));
		assert!(scope.has_slot(&slot));

		let content = scope.add_content(&slot, Contribution::new("widget"));
		assert!(content.is_registered());
		assert_eq!(scope.resolve(&slot, &no_features()), Some("widget"));
	}

	// Both guards dropped: content removed, slot unregistered.
	assert!(!scope.has_slot(&slot));
}

#[test]
fn content_guard_releases_independently() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();
	let _slot_guard = scope.register_slot(SlotDefinition::new("toolbar", "Toolbar"));
	let slot = SlotId::new("toolbar");

	let keep = scope.add_content(&slot, Contribution::new("keep").priority(1));
	let drop_me = scope.add_content(&slot, Contribution::new("drop").priority(5));
	assert_eq!(scope.resolve(&slot, &no_features()), Some("drop"));

	drop(drop_me);
	assert_eq!(scope.resolve(&slot, &no_features()), Some("keep"));
	drop(keep);
	assert_eq!(scope.resolve(&slot, &no_features()), None);
	assert!(scope.has_slot(&slot));
}

#[test]
fn guards_release_during_unwind() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();
	let slot = SlotId::new("fragile");

	let result = catch_unwind(AssertUnwindSafe(|| {
		let _registration = scope.register_slot(SlotDefinition::new("fragile", "Fragile"));
		let _content = scope.add_content(&slot, Contribution::new("x"));
		panic!("owner failed mid-lifetime");
	}));

	assert!(result.is_err());
	assert!(!scope.has_slot(&slot));
}

#[test]
fn replace_reconciles_identities() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();

	let mut registration = scope.register_slot(SlotDefinition::new("old-id", "Old"));
	registration.replace(SlotDefinition::new("new-id", "New"));
	assert!(!scope.has_slot(&SlotId::new("old-id")));
	assert!(scope.has_slot(&SlotId::new("new-id")));

	let slot = SlotId::new("new-id");
	let mut content = scope.add_content(&slot, Contribution::new("v1"));
	let first_id = content.id().cloned().unwrap();
	content.replace(&slot, Contribution::new("v2"));
	let second_id = content.id().cloned().unwrap();

	// Fresh identity per registration; old one no longer removable.
	assert_ne!(first_id, second_id);
	assert_eq!(scope.resolve(&slot, &no_features()), Some("v2"));
	assert_eq!(scope.get(&slot).unwrap().contributions.len(), 1);
}

#[test]
#[should_panic(expected = "outside an active provider scope")]
fn scope_use_after_provider_drop_is_fatal() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();
	drop(provider);
	let _ = scope.resolve(&SlotId::new("anything"), &no_features());
}

#[test]
fn guard_drop_after_provider_drop_is_quiet() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();
	let registration = scope.register_slot(SlotDefinition::new("outlived", "Outlived"));
	let content = scope.add_content(&SlotId::new("outlived"), Contribution::new("x"));

	drop(provider);
	// Guards outliving the provider release without panicking.
	drop(content);
	drop(registration);
}

#[test]
fn provider_strategy_drives_resolution() {
	let provider: SlotProvider<&str> =
		SlotProvider::with_options(ProviderOptions::default().strategy(ResolutionStrategy::LastWins));
	let scope = provider.scope();
	let _guard = scope.register_slot(SlotDefinition::new("status", "Status"));
	let slot = SlotId::new("status");

	let _a = scope.add_content(&slot, Contribution::new("first").priority(9));
	let _b = scope.add_content(&slot, Contribution::new("second").priority(1));
	assert_eq!(scope.resolve(&slot, &no_features()), Some("second"));
}

#[test]
fn performance_tracking_exposes_counters() {
	let untracked: SlotProvider<&str> = SlotProvider::new();
	assert!(untracked.stats().is_none());

	let provider: SlotProvider<&str> =
		SlotProvider::with_options(ProviderOptions::default().performance_tracking(true));
	let scope = provider.scope();
	let _guard = scope.register_slot(SlotDefinition::new("tracked", "Tracked"));
	let _content = scope.add_content(&SlotId::new("tracked"), Contribution::new("x"));

	let stats = provider.stats().unwrap();
	assert_eq!(stats.slots_registered, 1);
	assert_eq!(stats.contents_added, 1);
}

#[test]
fn nested_providers_are_independent() {
	let outer: SlotProvider<&str> = SlotProvider::new();
	let inner: SlotProvider<&str> = SlotProvider::new();
	let _outer_guard = outer
		.scope()
		.register_slot(SlotDefinition::new("shared-id", "Outer"));
	let _inner_guard = inner
		.scope()
		.register_slot(SlotDefinition::new("shared-id", "Inner"));

	assert_eq!(&*outer.registry().get(&SlotId::new("shared-id")).unwrap().name, "Outer");
	assert_eq!(&*inner.registry().get(&SlotId::new("shared-id")).unwrap().name, "Inner");
}

#[test]
fn gated_slot_refuses_without_features() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();
	let _guard = scope.register_slot(SlotDefinition::new("admin-tools", "Admin Tools"));
	let _content = scope.add_content(&SlotId::new("admin-tools"), Contribution::new("panel"));

	let gated = GatedSlot::new(
		scope.clone(),
		"admin-tools",
		FeatureConditions::all(["admin"]),
	);

	assert_eq!(gated.render(&no_features()), None);
	assert_eq!(gated.render_or(&no_features(), "fallback"), "fallback");

	let admin: FeatureSet = ["admin"].into_iter().collect();
	assert!(gated.visible(&admin));
	assert_eq!(gated.render(&admin), Some("panel"));
}

#[test]
fn compound_mount_registers_and_unmounts() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();

	let card = presets::card().mount(&scope);
	assert!(scope.has_slot(&SlotId::new("card-body")));

	let _title = card.add_content("header", Contribution::new("Invoice"));
	assert_eq!(card.resolve("header", &no_features()), Some("Invoice"));
	assert_eq!(card.resolve("body", &no_features()), None);

	let orphan = card.add_content("no-such-slot", Contribution::new("lost"));
	assert!(!orphan.is_registered());

	drop(card);
	assert!(!scope.has_slot(&SlotId::new("card-body")));
	assert!(!scope.has_slot(&SlotId::new("card-header")));
}

#[test]
fn compound_macro_mounts_like_a_preset() {
	let provider: SlotProvider<&str> = SlotProvider::new();
	let scope = provider.scope();

	let spec = compound_spec!("report", {
		title: "Title",
		required summary: "Summary",
	});
	let mounted = spec.mount(&scope);
	assert_eq!(mounted.id_of("summary").unwrap().as_str(), "report-summary");
	assert_eq!(
		provider.registry().missing_required(),
		[SlotId::new("report-summary")]
	);
}
