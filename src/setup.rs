//! Per-camera table setups and the in-memory registry that holds them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SetupError};
use crate::geometry::Quadrilateral;
use crate::operations::{ChangeStep, StepChange};
use crate::zone::{Capacity, Direction, Step, ZoneSet};

/// Zone configuration of one table as seen by one camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSetup {
    pub table_id: String,
    pub camera_id: String,
    /// Step currently being edited.
    pub step: Step,
    pub zones: ZoneSet,
}

impl TableSetup {
    /// Creates a setup at the OUTER step with every zone at its default.
    #[must_use]
    pub fn new(table_id: impl Into<String>, camera_id: impl Into<String>, capacity: Capacity) -> Self {
        Self {
            table_id: table_id.into(),
            camera_id: camera_id.into(),
            step: Step::Outer,
            zones: ZoneSet::with_defaults(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.zones.capacity()
    }

    /// Restores the default zones and returns to the OUTER step.
    ///
    /// Runs no geometry checks.
    pub fn reset(&mut self) {
        self.zones.reset();
        self.step = Step::Outer;
    }

    /// Places `candidate` at the current step and moves in `direction`.
    ///
    /// # Errors
    ///
    /// See [`ChangeStep::execute`].
    pub fn change_step(&mut self, direction: Direction, candidate: Quadrilateral) -> Result<StepChange> {
        ChangeStep::new(direction, candidate).execute(self)
    }
}

/// All known setups, keyed by camera.
///
/// Each camera's setup is independent. Callers that share a registry between
/// threads serialise access themselves.
#[derive(Debug, Clone, Default)]
pub struct SetupRegistry {
    setups: BTreeMap<String, TableSetup>,
}

impl SetupRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new setup for `table_id` seen by `camera_id`.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::InvalidCapacity` outside `1..=6` and
    /// `SetupError::AlreadyExists` if either the table or the camera already
    /// has a setup.
    pub fn create(&mut self, table_id: &str, camera_id: &str, capacity: u8) -> Result<&TableSetup> {
        let capacity = Capacity::new(capacity)?;
        if self.setups.contains_key(camera_id) || self.setups.values().any(|s| s.table_id == table_id) {
            return Err(SetupError::AlreadyExists {
                table_id: table_id.to_owned(),
                camera_id: camera_id.to_owned(),
            }
            .into());
        }
        info!(table_id, camera_id, %capacity, "created table setup");
        let setup = TableSetup::new(table_id, camera_id, capacity);
        Ok(self.setups.entry(camera_id.to_owned()).or_insert(setup))
    }

    /// Returns the setup for `camera_id`.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NotFound` if the camera has no setup.
    pub fn get(&self, camera_id: &str) -> Result<&TableSetup> {
        self.setups
            .get(camera_id)
            .ok_or_else(|| SetupError::NotFound(camera_id.to_owned()).into())
    }

    /// Returns a mutable reference to the setup for `camera_id`.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NotFound` if the camera has no setup.
    pub fn get_mut(&mut self, camera_id: &str) -> Result<&mut TableSetup> {
        self.setups
            .get_mut(camera_id)
            .ok_or_else(|| SetupError::NotFound(camera_id.to_owned()).into())
    }

    /// Removes and returns the setup for `camera_id`.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NotFound` if the camera has no setup.
    pub fn remove(&mut self, camera_id: &str) -> Result<TableSetup> {
        let setup = self
            .setups
            .remove(camera_id)
            .ok_or_else(|| SetupError::NotFound(camera_id.to_owned()))?;
        info!(camera_id, table_id = %setup.table_id, "removed table setup");
        Ok(setup)
    }

    /// Places `candidate` on the camera's current step and moves on.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NotFound` for an unknown camera, otherwise see
    /// [`ChangeStep::execute`].
    pub fn change_step(
        &mut self,
        camera_id: &str,
        direction: Direction,
        candidate: Quadrilateral,
    ) -> Result<StepChange> {
        self.get_mut(camera_id)?.change_step(direction, candidate)
    }

    /// Resets the camera's setup to its defaults.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NotFound` if the camera has no setup.
    pub fn reset(&mut self, camera_id: &str) -> Result<&TableSetup> {
        let setup = self.get_mut(camera_id)?;
        setup.reset();
        debug!(camera_id, "reset table setup");
        Ok(setup)
    }

    /// Iterates over all setups in camera order.
    pub fn iter(&self) -> impl Iterator<Item = &TableSetup> {
        self.setups.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.setups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.setups.is_empty()
    }
}
