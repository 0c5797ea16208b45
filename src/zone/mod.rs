//! Zone names, guided-setup steps and table capacity.

pub mod defaults;
pub mod set;
pub mod steps;

pub use defaults::default_quadrilateral;
pub use set::{Zone, ZoneSet};
pub use steps::{advance_step, step_order};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{MAX_CAPACITY, MIN_CAPACITY};
use crate::error::SetupError;

/// A named region on the camera frame.
///
/// Ordering is `OUTER < TABLE < 1 < 2 < ...`, which is also the order zones
/// are stored and checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ZoneName {
    Outer,
    Table,
    /// Numbered seating slot, starting at 1.
    Slot(u8),
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outer => f.write_str("OUTER"),
            Self::Table => f.write_str("TABLE"),
            Self::Slot(k) => write!(f, "{k}"),
        }
    }
}

impl FromStr for ZoneName {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OUTER" => Ok(Self::Outer),
            "TABLE" => Ok(Self::Table),
            _ => match s.parse::<u8>() {
                Ok(k) if (MIN_CAPACITY..=MAX_CAPACITY).contains(&k) => Ok(Self::Slot(k)),
                _ => Err(SetupError::UnknownName(s.to_owned())),
            },
        }
    }
}

impl From<ZoneName> for String {
    fn from(name: ZoneName) -> Self {
        name.to_string()
    }
}

impl TryFrom<String> for ZoneName {
    type Error = SetupError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Position in the guided setup sequence.
///
/// Every step but [`Step::Final`] edits the zone of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Step {
    Outer,
    Table,
    Slot(u8),
    Final,
}

impl Step {
    /// The zone edited at this step, `None` for [`Step::Final`].
    #[must_use]
    pub fn zone(self) -> Option<ZoneName> {
        match self {
            Self::Outer => Some(ZoneName::Outer),
            Self::Table => Some(ZoneName::Table),
            Self::Slot(k) => Some(ZoneName::Slot(k)),
            Self::Final => None,
        }
    }
}

impl From<ZoneName> for Step {
    fn from(name: ZoneName) -> Self {
        match name {
            ZoneName::Outer => Self::Outer,
            ZoneName::Table => Self::Table,
            ZoneName::Slot(k) => Self::Slot(k),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zone() {
            Some(name) => fmt::Display::fmt(&name, f),
            None => f.write_str("FINAL"),
        }
    }
}

impl FromStr for Step {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "FINAL" {
            return Ok(Self::Final);
        }
        s.parse::<ZoneName>().map(Self::from)
    }
}

impl From<Step> for String {
    fn from(step: Step) -> Self {
        step.to_string()
    }
}

impl TryFrom<String> for Step {
    type Error = SetupError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Number of numbered seating slots on a table, within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Capacity(u8);

impl Capacity {
    /// Validates a raw slot count.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::InvalidCapacity` outside `1..=6`.
    pub fn new(slots: u8) -> Result<Self, SetupError> {
        if (MIN_CAPACITY..=MAX_CAPACITY).contains(&slots) {
            Ok(Self(slots))
        } else {
            Err(SetupError::InvalidCapacity(slots))
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether a zone exists on a table of this capacity.
    #[must_use]
    pub fn contains(self, name: ZoneName) -> bool {
        match name {
            ZoneName::Outer | ZoneName::Table => true,
            ZoneName::Slot(k) => (1..=self.0).contains(&k),
        }
    }

    /// Every zone of a table with this capacity: `OUTER, TABLE, 1..=n`.
    pub fn zone_names(self) -> impl Iterator<Item = ZoneName> {
        [ZoneName::Outer, ZoneName::Table]
            .into_iter()
            .chain((1..=self.0).map(ZoneName::Slot))
    }
}

impl From<Capacity> for u8 {
    fn from(capacity: Capacity) -> Self {
        capacity.0
    }
}

impl TryFrom<u8> for Capacity {
    type Error = SetupError;

    fn try_from(slots: u8) -> Result<Self, Self::Error> {
        Self::new(slots)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a step change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    #[must_use]
    pub fn from_forward(forward: bool) -> Self {
        if forward {
            Self::Next
        } else {
            Self::Previous
        }
    }

    #[must_use]
    pub fn is_forward(self) -> bool {
        self == Self::Next
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("previous"),
        }
    }
}

impl FromStr for Direction {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(Self::Next),
            "previous" => Ok(Self::Previous),
            _ => Err(SetupError::UnknownDirection(s.to_owned())),
        }
    }
}
