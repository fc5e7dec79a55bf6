//! Semantics modifiers for accessibility metadata.

use tessera_ui::{
    RenderSlot,
    accesskit::{Live, Role},
    tessera,
};

/// Arguments for the `semantics` modifier.
#[derive(PartialEq, Clone, Default)]
pub struct SemanticsArgs {
    /// Optional accessibility role.
    pub role: Option<Role>,
    /// Optional label announced by assistive technologies.
    pub label: Option<String>,
    /// Optional description announced by assistive technologies.
    pub description: Option<String>,
    /// Optional numeric value.
    pub numeric_value: Option<f64>,
    /// Optional numeric range.
    pub numeric_range: Option<(f64, f64)>,
    /// Live region politeness.
    pub live: Option<Live>,
}

impl SemanticsArgs {
    /// Creates a new empty semantics configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accessibility role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the accessibility label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the accessibility description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a numeric value.
    pub fn numeric_value(mut self, value: f64) -> Self {
        self.numeric_value = Some(value);
        self
    }

    /// Set a numeric range.
    pub fn numeric_range(mut self, min: f64, max: f64) -> Self {
        self.numeric_range = Some((min, max));
        self
    }

    /// Set live region politeness.
    pub fn live(mut self, live: Live) -> Self {
        self.live = Some(live);
        self
    }
}

#[derive(Clone, PartialEq)]
struct ModifierSemanticsArgs {
    semantics: SemanticsArgs,
    child: RenderSlot,
}

pub(crate) fn modifier_semantics(args: SemanticsArgs, child: RenderSlot) {
    let render_args = ModifierSemanticsArgs {
        semantics: args,
        child,
    };
    modifier_semantics_node(&render_args);
}

#[tessera]
fn modifier_semantics_node(args: &ModifierSemanticsArgs) {
    let SemanticsArgs {
        role,
        label,
        description,
        numeric_value,
        numeric_range,
        live,
    } = args.semantics.clone();

    args.child.render();

    input_handler(move |input| {
        let mut builder = input.accessibility();

        if let Some(role) = role {
            builder = builder.role(role);
        }
        if let Some(label) = label.as_ref() {
            builder = builder.label(label.clone());
        }
        if let Some(description) = description.as_ref() {
            builder = builder.description(description.clone());
        }
        if let Some(numeric_value) = numeric_value {
            builder = builder.numeric_value(numeric_value);
        }
        if let Some((min, max)) = numeric_range {
            builder = builder.numeric_range(min, max);
        }
        if let Some(live) = live {
            builder = builder.live(live);
        }

        builder.commit();
    });
}
