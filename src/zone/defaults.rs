//! Default zone coordinates per table capacity.
//!
//! The table is evaluated at compile time: OUTER is the frame minus a margin,
//! TABLE is a fixed rectangle in the middle of the frame, and the numbered
//! slots straddle the table's top edge (left to right) and then its bottom
//! edge (right to left), so seats are numbered clockwise.

use super::ZoneName;
use crate::config::{
    FRAME_HEIGHT, FRAME_WIDTH, MAX_CAPACITY, OUTER_MARGIN, SLOT_GAP, SLOT_HALF_HEIGHT,
    TABLE_EXTENTS,
};
use crate::geometry::Quadrilateral;

const MAX_SLOTS: usize = MAX_CAPACITY as usize;

#[derive(Clone, Copy)]
struct Layout {
    outer: Quadrilateral,
    table: Quadrilateral,
    slots: [Quadrilateral; MAX_SLOTS],
}

static LAYOUTS: [Layout; MAX_SLOTS] = build_layouts();

/// Default quadrilateral for `name` on a table with `capacity` slots.
///
/// Combinations without a layout (capacity outside `1..=6`, or a slot number
/// above the capacity) fall back to [`Quadrilateral::DEGENERATE`].
#[must_use]
pub fn default_quadrilateral(name: ZoneName, capacity: u8) -> Quadrilateral {
    let Some(layout) = usize::from(capacity).checked_sub(1).and_then(|i| LAYOUTS.get(i)) else {
        return Quadrilateral::DEGENERATE;
    };
    match name {
        ZoneName::Outer => layout.outer,
        ZoneName::Table => layout.table,
        ZoneName::Slot(k) if (1..=capacity).contains(&k) => layout.slots[usize::from(k - 1)],
        ZoneName::Slot(_) => Quadrilateral::DEGENERATE,
    }
}

const fn build_layouts() -> [Layout; MAX_SLOTS] {
    let empty = Layout {
        outer: Quadrilateral::DEGENERATE,
        table: Quadrilateral::DEGENERATE,
        slots: [Quadrilateral::DEGENERATE; MAX_SLOTS],
    };
    let mut layouts = [empty; MAX_SLOTS];
    let mut i = 0;
    while i < MAX_SLOTS {
        let capacity = i + 1;
        let mut slots = [Quadrilateral::DEGENERATE; MAX_SLOTS];
        let mut k = 1;
        while k <= capacity {
            slots[k - 1] = slot_rect(capacity, k);
            k += 1;
        }
        layouts[i] = Layout {
            outer: Quadrilateral::rect(
                OUTER_MARGIN,
                OUTER_MARGIN,
                FRAME_WIDTH - OUTER_MARGIN,
                FRAME_HEIGHT - OUTER_MARGIN,
            ),
            table: Quadrilateral::rect(TABLE_EXTENTS.0, TABLE_EXTENTS.1, TABLE_EXTENTS.2, TABLE_EXTENTS.3),
            slots,
        };
        i += 1;
    }
    layouts
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn slot_rect(capacity: usize, k: usize) -> Quadrilateral {
    let (left, top, right, bottom) = TABLE_EXTENTS;
    let top_count = capacity.div_ceil(2);
    let (count, column, edge_y) = if k <= top_count {
        (top_count, k - 1, top)
    } else {
        let bottom_count = capacity - top_count;
        (bottom_count, bottom_count - 1 - (k - 1 - top_count), bottom)
    };
    let cell = (right - left) / count as i32;
    let x0 = left + column as i32 * cell + SLOT_GAP / 2;
    Quadrilateral::rect(x0, edge_y - SLOT_HALF_HEIGHT, x0 + cell - SLOT_GAP, edge_y + SLOT_HALF_HEIGHT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point;
    use crate::operations::{CheckIntersection, ValidatePolygon};
    use crate::zone::Capacity;

    #[test]
    fn outer_and_table_do_not_depend_on_capacity() {
        for capacity in 1..=6 {
            assert_eq!(
                default_quadrilateral(ZoneName::Outer, capacity),
                Quadrilateral::rect(40, 40, 1880, 1040)
            );
            assert_eq!(
                default_quadrilateral(ZoneName::Table, capacity),
                Quadrilateral::rect(480, 360, 1440, 720)
            );
        }
    }

    #[test]
    fn single_slot_spans_the_top_edge() {
        assert_eq!(
            default_quadrilateral(ZoneName::Slot(1), 1),
            Quadrilateral::rect(500, 240, 1420, 480)
        );
    }

    #[test]
    fn slots_are_numbered_clockwise() {
        // Capacity 4: two slots on top left to right, two below right to left.
        let q = |k| default_quadrilateral(ZoneName::Slot(k), 4);
        assert_eq!(q(1).ul, Point::new(500, 240));
        assert_eq!(q(2).ul, Point::new(980, 240));
        assert_eq!(q(3).ul, Point::new(980, 600));
        assert_eq!(q(4).ul, Point::new(500, 600));
    }

    #[test]
    fn unknown_combinations_fall_back_to_degenerate() {
        assert_eq!(default_quadrilateral(ZoneName::Slot(4), 3), Quadrilateral::DEGENERATE);
        assert_eq!(default_quadrilateral(ZoneName::Outer, 0), Quadrilateral::DEGENERATE);
        assert_eq!(default_quadrilateral(ZoneName::Table, 7), Quadrilateral::DEGENERATE);
        assert_eq!(default_quadrilateral(ZoneName::Slot(0), 6), Quadrilateral::DEGENERATE);
    }

    #[test]
    fn defaults_pass_the_placement_rules() {
        for raw in 1..=6 {
            let capacity = Capacity::new(raw).unwrap();
            let names: Vec<_> = capacity.zone_names().collect();
            for &name in &names {
                let quad = default_quadrilateral(name, raw);
                assert!(ValidatePolygon::new(quad).execute().is_valid(), "{name} @ {raw}");
            }
            for (i, &a) in names.iter().enumerate() {
                for &b in &names[i + 1..] {
                    // Slots may sit across the table edge.
                    if matches!((a, b), (ZoneName::Table, ZoneName::Slot(_))) {
                        continue;
                    }
                    let report = CheckIntersection::new(
                        default_quadrilateral(a, raw),
                        default_quadrilateral(b, raw),
                    )
                    .execute();
                    assert!(report.is_valid(), "{a} vs {b} @ {raw}: {}", report.reason());
                }
            }
        }
    }
}
