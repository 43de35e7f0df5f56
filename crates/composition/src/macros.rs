//! Declarative compound-spec construction.

/// Declares a [`CompoundSpec`](crate::compound::CompoundSpec) from a fixed
/// slot set. Prefix `required` marks a slot as required; underscores in slot
/// names become dashes in the generated ids.
///
/// ```
/// use trellis_composition::compound_spec;
///
/// let card = compound_spec!("card", {
/// 	header: "Header",
/// 	required body: "Body",
/// 	footer: "Footer",
/// });
/// assert_eq!(card.slot_id("body").unwrap().as_str(), "card-body");
/// ```
#[macro_export]
macro_rules! compound_spec {
	($prefix:expr, { $($rest:tt)* }) => {{
		let spec = $crate::compound::CompoundSpec::new($prefix);
		$crate::__compound_spec_slots!(spec, $($rest)*)
	}};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __compound_spec_slots {
	($spec:ident,) => { $spec };
	($spec:ident, required $name:ident : $display:expr, $($rest:tt)*) => {{
		let $spec = $spec.required_slot(stringify!($name), $display);
		$crate::__compound_spec_slots!($spec, $($rest)*)
	}};
	($spec:ident, required $name:ident : $display:expr) => {
		$spec.required_slot(stringify!($name), $display)
	};
	($spec:ident, $name:ident : $display:expr, $($rest:tt)*) => {{
		let $spec = $spec.slot(stringify!($name), $display);
		$crate::__compound_spec_slots!($spec, $($rest)*)
	}};
	($spec:ident, $name:ident : $display:expr) => {
		$spec.slot(stringify!($name), $display)
	};
}
