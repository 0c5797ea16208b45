use serde::Serialize;
use tracing::debug;

use super::AttemptPlacement;
use crate::error::Result;
use crate::geometry::Quadrilateral;
use crate::setup::TableSetup;
use crate::zone::{advance_step, Direction, Step, Zone};

/// Result of a successful [`ChangeStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepChange {
    /// Step the setup moved to.
    pub step: Step,
    /// Zone updated on the way, `None` when leaving FINAL.
    pub zone: Option<Zone>,
}

/// Commits the boundary drawn at the current step, then moves one step.
pub struct ChangeStep {
    direction: Direction,
    candidate: Quadrilateral,
}

impl ChangeStep {
    /// Creates a new `ChangeStep` operation.
    #[must_use]
    pub fn new(direction: Direction, candidate: Quadrilateral) -> Self {
        Self {
            direction,
            candidate,
        }
    }

    /// Executes the step change on `setup`.
    ///
    /// The move is checked before any geometry runs. FINAL owns no zone, so
    /// leaving it only moves the step.
    ///
    /// # Errors
    ///
    /// Returns `StepError::Boundary` for `previous` at OUTER or `next` at
    /// FINAL, or any [`AttemptPlacement`] rejection. `setup` is unchanged on
    /// error.
    pub fn execute(&self, setup: &mut TableSetup) -> Result<StepChange> {
        let from = setup.step;
        let to = advance_step(from, setup.capacity(), self.direction.is_forward())?;
        let zone = match from.zone() {
            Some(_) => Some(AttemptPlacement::new(from, self.candidate).execute(&mut setup.zones)?),
            None => None,
        };
        setup.step = to;
        debug!(camera_id = %setup.camera_id, %from, %to, "step changed");
        Ok(StepChange { step: to, zone })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{PlacementError, ShapeDefect, StepError, TableZonesError};
    use crate::zone::{Capacity, ZoneName};

    fn setup(capacity: u8) -> TableSetup {
        TableSetup::new("t1", "cam1", Capacity::new(capacity).unwrap())
    }

    fn default_of(setup: &TableSetup, name: ZoneName) -> Quadrilateral {
        *setup.zones.get(name).unwrap()
    }

    #[test]
    fn next_commits_then_advances() {
        let mut s = setup(2);
        let outer = Quadrilateral::rect(10, 10, 1910, 1070);
        let change = ChangeStep::new(Direction::Next, outer).execute(&mut s).unwrap();
        assert_eq!(change.step, Step::Table);
        assert_eq!(change.zone, Some(Zone::new(ZoneName::Outer, outer)));
        assert_eq!(s.step, Step::Table);
    }

    #[test]
    fn previous_commits_then_retreats() {
        let mut s = setup(2);
        s.step = Step::Slot(1);
        let slot = default_of(&s, ZoneName::Slot(1));
        let change = ChangeStep::new(Direction::Previous, slot).execute(&mut s).unwrap();
        assert_eq!(change.step, Step::Table);
        assert_eq!(s.step, Step::Table);
    }

    #[test]
    fn boundary_is_checked_before_the_shape() {
        let mut s = setup(2);
        let err = ChangeStep::new(Direction::Previous, Quadrilateral::DEGENERATE)
            .execute(&mut s)
            .unwrap_err();
        assert_eq!(
            err,
            TableZonesError::Step(StepError::Boundary {
                direction: Direction::Previous,
                step: Step::Outer,
            })
        );
        assert_eq!(err.to_string(), "Cannot move previous from OUTER step.");
    }

    #[test]
    fn rejected_shape_keeps_the_step() {
        let mut s = setup(2);
        let before = s.clone();
        let err = ChangeStep::new(Direction::Next, Quadrilateral::DEGENERATE)
            .execute(&mut s)
            .unwrap_err();
        assert_eq!(
            err,
            TableZonesError::Placement(PlacementError::InvalidShape(ShapeDefect::DuplicatePoints))
        );
        assert_eq!(s, before);
    }

    #[test]
    fn leaving_final_skips_placement() {
        let mut s = setup(1);
        s.step = Step::Final;
        let change = ChangeStep::new(Direction::Previous, Quadrilateral::DEGENERATE)
            .execute(&mut s)
            .unwrap();
        assert_eq!(change, StepChange { step: Step::Slot(1), zone: None });
    }

    #[test]
    fn cannot_pass_final() {
        let mut s = setup(1);
        s.step = Step::Final;
        let err = ChangeStep::new(Direction::Next, Quadrilateral::rect(0, 0, 1, 1))
            .execute(&mut s)
            .unwrap_err();
        assert_eq!(err.to_string(), "Cannot move next from FINAL step.");
        assert_eq!(s.step, Step::Final);
    }
}
