use super::{Capacity, Direction, Step};
use crate::error::StepError;

/// The guided setup sequence: `OUTER, TABLE, 1..=capacity, FINAL`.
#[must_use]
pub fn step_order(capacity: Capacity) -> Vec<Step> {
    let mut steps = Vec::with_capacity(usize::from(capacity.get()) + 3);
    steps.push(Step::Outer);
    steps.push(Step::Table);
    steps.extend((1..=capacity.get()).map(Step::Slot));
    steps.push(Step::Final);
    steps
}

/// Moves one step forward or back through [`step_order`].
///
/// # Errors
///
/// Returns `StepError::Boundary` when moving back from OUTER or forward from
/// FINAL, and `StepError::NotInSequence` when `current` is a slot beyond the
/// capacity.
pub fn advance_step(current: Step, capacity: Capacity, forward: bool) -> Result<Step, StepError> {
    let order = step_order(capacity);
    let index = order
        .iter()
        .position(|&s| s == current)
        .ok_or(StepError::NotInSequence {
            step: current,
            capacity: capacity.get(),
        })?;
    let target = if forward {
        index.checked_add(1).filter(|&i| i < order.len())
    } else {
        index.checked_sub(1)
    };
    target.map(|i| order[i]).ok_or(StepError::Boundary {
        direction: Direction::from_forward(forward),
        step: current,
    })
}
