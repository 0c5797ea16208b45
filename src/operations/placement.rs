use tracing::debug;

use super::{CheckIntersection, ValidatePolygon};
use crate::error::PlacementError;
use crate::geometry::Quadrilateral;
use crate::zone::{Step, Zone, ZoneName, ZoneSet};

/// Zones a placement at `step` must not touch.
///
/// - OUTER: every other zone.
/// - TABLE: OUTER only; slots may overlap the table.
/// - Slot `k`: OUTER and every other slot, but not TABLE.
/// - FINAL: nothing, it owns no zone.
///
/// Returned in zone order (`OUTER, TABLE, 1, 2, ...`).
#[must_use]
pub fn relevant_neighbors(step: Step, zones: &ZoneSet) -> Vec<ZoneName> {
    let names = zones.iter().map(|z| z.name);
    match step {
        Step::Outer => names.filter(|&n| n != ZoneName::Outer).collect(),
        Step::Table => names.filter(|&n| n == ZoneName::Outer).collect(),
        Step::Slot(k) => names
            .filter(|&n| n != ZoneName::Slot(k) && n != ZoneName::Table)
            .collect(),
        Step::Final => Vec::new(),
    }
}

/// Validates a candidate boundary for the zone edited at `step` and, if it
/// passes, stores it.
///
/// The shape is checked first, then the candidate is tested against each
/// [`relevant_neighbors`] zone in order; the first failure is returned and the
/// zone set is left untouched.
pub struct AttemptPlacement {
    step: Step,
    candidate: Quadrilateral,
}

impl AttemptPlacement {
    /// Creates a new `AttemptPlacement` operation.
    #[must_use]
    pub fn new(step: Step, candidate: Quadrilateral) -> Self {
        Self { step, candidate }
    }

    /// Checks the placement without committing it.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::NoZoneAtStep` for FINAL or a slot outside the
    /// capacity, `PlacementError::InvalidShape` for a malformed candidate, and
    /// `PlacementError::Overlap` for the first forbidden neighbor it touches.
    pub fn check(&self, zones: &ZoneSet) -> Result<ZoneName, PlacementError> {
        let name = self
            .step
            .zone()
            .filter(|&n| zones.get(n).is_some())
            .ok_or(PlacementError::NoZoneAtStep(self.step))?;

        ValidatePolygon::new(self.candidate).execute().into_result()?;

        for neighbor in relevant_neighbors(self.step, zones) {
            let Some(&quad) = zones.get(neighbor) else {
                continue;
            };
            let report = CheckIntersection::new(self.candidate, quad).execute();
            if !report.is_valid() {
                debug!(step = %self.step, zone = %neighbor, "{}", report.reason());
                return Err(PlacementError::Overlap {
                    step: self.step,
                    zone: neighbor,
                    points: report.count(),
                });
            }
        }
        Ok(name)
    }

    /// Executes the placement, overwriting the zone on success.
    ///
    /// # Errors
    ///
    /// See [`AttemptPlacement::check`]. On error `zones` is unchanged.
    pub fn execute(&self, zones: &mut ZoneSet) -> Result<Zone, PlacementError> {
        let name = self.check(zones).inspect_err(|err| {
            debug!(step = %self.step, "placement rejected: {err}");
        })?;
        let zone = zones
            .replace(name, self.candidate)
            .ok_or(PlacementError::NoZoneAtStep(self.step))?;
        debug!(step = %self.step, quad = %self.candidate, "placement accepted");
        Ok(zone)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapeDefect;
    use crate::math::Point;
    use crate::zone::Capacity;

    fn cap(n: u8) -> Capacity {
        Capacity::new(n).unwrap()
    }

    /// OUTER `(0,0)-(100,100)`, TABLE `(20,20)-(80,80)`, slot 1 straddling the
    /// table's top edge, slot 2 inside the table near the bottom.
    fn layout() -> ZoneSet {
        ZoneSet::from_zones(
            cap(2),
            [
                Zone::new(ZoneName::Outer, Quadrilateral::rect(0, 0, 100, 100)),
                Zone::new(ZoneName::Table, Quadrilateral::rect(20, 20, 80, 80)),
                Zone::new(ZoneName::Slot(1), Quadrilateral::rect(30, 10, 50, 30)),
                Zone::new(ZoneName::Slot(2), Quadrilateral::rect(30, 60, 50, 75)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn neighbor_sets_per_step() {
        let zones = layout();
        assert_eq!(
            relevant_neighbors(Step::Outer, &zones),
            [ZoneName::Table, ZoneName::Slot(1), ZoneName::Slot(2)]
        );
        assert_eq!(relevant_neighbors(Step::Table, &zones), [ZoneName::Outer]);
        assert_eq!(
            relevant_neighbors(Step::Slot(1), &zones),
            [ZoneName::Outer, ZoneName::Slot(2)]
        );
        assert_eq!(
            relevant_neighbors(Step::Slot(2), &zones),
            [ZoneName::Outer, ZoneName::Slot(1)]
        );
        assert!(relevant_neighbors(Step::Final, &zones).is_empty());
    }

    #[test]
    fn table_may_overlap_slots() {
        let mut zones = layout();
        // Moves the table edge across slot 1 while staying inside OUTER.
        let candidate = Quadrilateral::rect(25, 15, 85, 85);
        let zone = AttemptPlacement::new(Step::Table, candidate)
            .execute(&mut zones)
            .unwrap();
        assert_eq!(zone, Zone::new(ZoneName::Table, candidate));
        assert_eq!(zones.get(ZoneName::Table), Some(&candidate));
    }

    #[test]
    fn outer_must_not_touch_a_slot() {
        let mut zones = layout();
        let before = zones.clone();
        // Top edge at y = 15 cuts through slot 1 (y 10..30) above the table.
        let candidate = Quadrilateral::rect(5, 15, 95, 95);
        let err = AttemptPlacement::new(Step::Outer, candidate)
            .execute(&mut zones)
            .unwrap_err();
        assert_eq!(
            err,
            PlacementError::Overlap {
                step: Step::Outer,
                zone: ZoneName::Slot(1),
                points: 2,
            }
        );
        assert_eq!(err.to_string(), "Boundary OUTER intersects with 1 boundary.");
        assert_eq!(zones, before);
    }

    #[test]
    fn outer_reports_table_before_slots() {
        let mut zones = layout();
        // Crosses the table and both slots; TABLE comes first in zone order.
        let candidate = Quadrilateral::rect(40, 5, 95, 95);
        let err = AttemptPlacement::new(Step::Outer, candidate)
            .execute(&mut zones)
            .unwrap_err();
        assert!(matches!(err, PlacementError::Overlap { zone: ZoneName::Table, .. }));
    }

    #[test]
    fn table_must_stay_inside_outer_boundary() {
        let mut zones = layout();
        let candidate = Quadrilateral::rect(50, 50, 120, 90);
        let err = AttemptPlacement::new(Step::Table, candidate)
            .execute(&mut zones)
            .unwrap_err();
        assert_eq!(err.to_string(), "Boundary TABLE intersects with OUTER boundary.");
    }

    #[test]
    fn slot_may_cross_table_but_not_other_slots() {
        let mut zones = layout();
        // Crosses the table's left edge only.
        let ok = Quadrilateral::rect(10, 40, 40, 55);
        assert!(AttemptPlacement::new(Step::Slot(2), ok).execute(&mut zones).is_ok());

        // Now overlaps slot 1.
        let bad = Quadrilateral::rect(40, 20, 60, 40);
        let err = AttemptPlacement::new(Step::Slot(2), bad)
            .execute(&mut zones)
            .unwrap_err();
        assert!(matches!(err, PlacementError::Overlap { zone: ZoneName::Slot(1), .. }));
        assert_eq!(zones.get(ZoneName::Slot(2)), Some(&ok));
    }

    #[test]
    fn slot_must_not_cross_outer() {
        let mut zones = layout();
        let candidate = Quadrilateral::rect(90, 40, 110, 60);
        let err = AttemptPlacement::new(Step::Slot(1), candidate)
            .execute(&mut zones)
            .unwrap_err();
        assert_eq!(err.to_string(), "Boundary 1 intersects with OUTER boundary.");
    }

    #[test]
    fn shape_is_checked_before_neighbors() {
        let mut zones = layout();
        // A bowtie that also crosses OUTER.
        let bowtie = Quadrilateral::from([(90, 10), (110, 30), (110, 10), (90, 30)].map(Point::from));
        let err = AttemptPlacement::new(Step::Table, bowtie)
            .execute(&mut zones)
            .unwrap_err();
        assert_eq!(err, PlacementError::InvalidShape(ShapeDefect::SelfIntersecting));
        assert_eq!(err.to_string(), "Polygon is self-intersecting.");
    }

    #[test]
    fn final_step_has_nothing_to_place() {
        let mut zones = layout();
        let err = AttemptPlacement::new(Step::Final, Quadrilateral::rect(1, 1, 2, 2))
            .execute(&mut zones)
            .unwrap_err();
        assert_eq!(err, PlacementError::NoZoneAtStep(Step::Final));
    }

    #[test]
    fn slot_outside_capacity_has_nothing_to_place() {
        let mut zones = layout();
        let err = AttemptPlacement::new(Step::Slot(3), Quadrilateral::rect(1, 1, 2, 2))
            .execute(&mut zones)
            .unwrap_err();
        assert_eq!(err, PlacementError::NoZoneAtStep(Step::Slot(3)));
    }

    #[test]
    fn check_does_not_commit() {
        let zones = layout();
        let candidate = Quadrilateral::rect(25, 15, 85, 85);
        assert_eq!(
            AttemptPlacement::new(Step::Table, candidate).check(&zones),
            Ok(ZoneName::Table)
        );
        assert_eq!(zones, layout());
    }
}
