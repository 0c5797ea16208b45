use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{default_quadrilateral, Capacity, ZoneName};
use crate::error::SetupError;
use crate::geometry::Quadrilateral;

/// A zone name together with its current boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(rename = "boundary_type")]
    pub name: ZoneName,
    #[serde(flatten)]
    pub quad: Quadrilateral,
}

impl Zone {
    #[must_use]
    pub fn new(name: ZoneName, quad: Quadrilateral) -> Self {
        Self { name, quad }
    }
}

/// All zones of one camera: exactly one quadrilateral per zone of the
/// capacity, no more and no fewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ZoneSetRecord", try_from = "ZoneSetRecord")]
pub struct ZoneSet {
    capacity: Capacity,
    zones: BTreeMap<ZoneName, Quadrilateral>,
}

impl ZoneSet {
    /// Creates the default layout for `capacity`.
    #[must_use]
    pub fn with_defaults(capacity: Capacity) -> Self {
        let zones = capacity
            .zone_names()
            .map(|name| (name, default_quadrilateral(name, capacity.get())))
            .collect();
        Self { capacity, zones }
    }

    /// Rebuilds a zone set from stored zone records.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::UnexpectedZone` for a slot above the capacity,
    /// `SetupError::DuplicateZone` when a name repeats, and
    /// `SetupError::MissingZone` when a zone of the capacity is absent.
    pub fn from_zones(
        capacity: Capacity,
        zones: impl IntoIterator<Item = Zone>,
    ) -> Result<Self, SetupError> {
        let mut map = BTreeMap::new();
        for zone in zones {
            if !capacity.contains(zone.name) {
                return Err(SetupError::UnexpectedZone(zone.name));
            }
            if map.insert(zone.name, zone.quad).is_some() {
                return Err(SetupError::DuplicateZone(zone.name));
            }
        }
        if let Some(missing) = capacity.zone_names().find(|name| !map.contains_key(name)) {
            return Err(SetupError::MissingZone(missing));
        }
        Ok(Self {
            capacity,
            zones: map,
        })
    }

    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Current boundary of `name`, if the zone exists at this capacity.
    #[must_use]
    pub fn get(&self, name: ZoneName) -> Option<&Quadrilateral> {
        self.zones.get(&name)
    }

    /// Zone record for `name`.
    #[must_use]
    pub fn zone(&self, name: ZoneName) -> Option<Zone> {
        self.get(name).map(|&quad| Zone::new(name, quad))
    }

    /// Zones in `OUTER, TABLE, 1..=n` order.
    pub fn iter(&self) -> impl Iterator<Item = Zone> + '_ {
        self.zones.iter().map(|(&name, &quad)| Zone::new(name, quad))
    }

    /// Restores every zone to its capacity default.
    pub fn reset(&mut self) {
        *self = Self::with_defaults(self.capacity);
    }

    /// Overwrites an existing zone. Returns `None` if the zone does not exist.
    pub(crate) fn replace(&mut self, name: ZoneName, quad: Quadrilateral) -> Option<Zone> {
        let slot = self.zones.get_mut(&name)?;
        *slot = quad;
        Some(Zone::new(name, quad))
    }
}

#[derive(Serialize, Deserialize)]
struct ZoneSetRecord {
    capacity: Capacity,
    items: Vec<Zone>,
}

impl From<ZoneSet> for ZoneSetRecord {
    fn from(set: ZoneSet) -> Self {
        Self {
            capacity: set.capacity,
            items: set.iter().collect(),
        }
    }
}

impl TryFrom<ZoneSetRecord> for ZoneSet {
    type Error = SetupError;

    fn try_from(record: ZoneSetRecord) -> Result<Self, Self::Error> {
        Self::from_zones(record.capacity, record.items)
    }
}
