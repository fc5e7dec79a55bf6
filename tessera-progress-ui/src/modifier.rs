//! Modifier extensions used by and around progress rings.
//!
//! ## Usage
//!
//! Size a ring explicitly or attach accessibility semantics to any subtree.

mod layout;
mod semantics;

use tessera_ui::{DimensionValue, Dp, Modifier, ModifierChild, Px, RenderSlot};

use layout::modifier_constraints;

pub use semantics::SemanticsArgs;

fn replayable_modifier_child(child: ModifierChild) -> RenderSlot {
    RenderSlot::new(child)
}

/// An exact-extent constraint the parent may still tighten.
fn exact(extent: Dp) -> DimensionValue {
    let px: Px = extent.into();
    DimensionValue::Wrap {
        min: Some(px),
        max: Some(px),
    }
}

/// Pushes a wrapper constraining the child on the given axes; `None` leaves
/// an axis untouched.
fn constrained(
    modifier: Modifier,
    width: Option<DimensionValue>,
    height: Option<DimensionValue>,
) -> Modifier {
    modifier.push_wrapper(move |child| {
        let child = replayable_modifier_child(child);
        move || {
            modifier_constraints(width, height, child.clone());
        }
    })
}

/// Extensions for composing reusable wrapper behavior around component
/// subtrees.
pub trait ModifierExt {
    /// Constrains the content to an exact size when possible.
    fn size(self, width: Dp, height: Dp) -> Modifier;

    /// Constrains the content to an exact width when possible.
    fn width(self, width: Dp) -> Modifier;

    /// Constrains the content to an exact height when possible.
    fn height(self, height: Dp) -> Modifier;

    /// Fills the available width within parent bounds.
    fn fill_max_width(self) -> Modifier;

    /// Fills the available height within parent bounds.
    fn fill_max_height(self) -> Modifier;

    /// Fills the available size within parent bounds.
    fn fill_max_size(self) -> Modifier;

    /// Attaches accessibility semantics metadata to this subtree.
    fn semantics(self, args: SemanticsArgs) -> Modifier;
}

impl ModifierExt for Modifier {
    fn size(self, width: Dp, height: Dp) -> Modifier {
        constrained(self, Some(exact(width)), Some(exact(height)))
    }

    fn width(self, width: Dp) -> Modifier {
        constrained(self, Some(exact(width)), None)
    }

    fn height(self, height: Dp) -> Modifier {
        constrained(self, None, Some(exact(height)))
    }

    fn fill_max_width(self) -> Modifier {
        constrained(self, Some(DimensionValue::FILLED), None)
    }

    fn fill_max_height(self) -> Modifier {
        constrained(self, None, Some(DimensionValue::FILLED))
    }

    fn fill_max_size(self) -> Modifier {
        constrained(
            self,
            Some(DimensionValue::FILLED),
            Some(DimensionValue::FILLED),
        )
    }

    fn semantics(self, args: SemanticsArgs) -> Modifier {
        self.push_wrapper(move |child| {
            let args = args.clone();
            let child = replayable_modifier_child(child);
            move || {
                semantics::modifier_semantics(args.clone(), child.clone());
            }
        })
    }
}
