//! Layout modifiers for sizing constraints.

use tessera_ui::{
    ComputedData, Constraint, DimensionValue, LayoutInput, LayoutOutput, LayoutSpec,
    MeasurementError, PxPosition, tessera,
};

#[tessera]
pub(crate) fn modifier_constraints<F>(
    width_override: Option<DimensionValue>,
    height_override: Option<DimensionValue>,
    child: F,
) where
    F: FnOnce(),
{
    layout(ConstraintLayout {
        width_override,
        height_override,
    });

    child();
}

#[derive(Clone, Copy, PartialEq)]
struct ConstraintLayout {
    width_override: Option<DimensionValue>,
    height_override: Option<DimensionValue>,
}

impl LayoutSpec for ConstraintLayout {
    fn measure(
        &self,
        input: &LayoutInput<'_>,
        output: &mut LayoutOutput<'_>,
    ) -> Result<ComputedData, MeasurementError> {
        let child_id = input
            .children_ids()
            .first()
            .copied()
            .expect("modifier_constraints expects exactly one child");

        let parent_width = input.parent_constraint().width();
        let parent_height = input.parent_constraint().height();
        let constraint = Constraint::new(
            self.width_override.unwrap_or(parent_width),
            self.height_override.unwrap_or(parent_height),
        )
        .merge(input.parent_constraint());

        let child_measurement = input.measure_child(child_id, &constraint)?;
        output.place_child(child_id, PxPosition::ZERO);

        Ok(child_measurement)
    }
}
