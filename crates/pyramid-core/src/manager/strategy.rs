//! Drivers, intents and enablers

use super::{apply_patch, PyramidManager};
use crate::error::Result;
use crate::patch::{DriverUpdate, EnablerUpdate, IntentUpdate};
use pyramid_model::{
    remove_by_id, DriverId, Enabler, EnablerId, IntentId, StrategicDriver, StrategicIntent,
};

impl PyramidManager {
    /// Add a strategic driver
    pub fn add_driver(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        rationale: Option<String>,
    ) -> StrategicDriver {
        let mut driver = StrategicDriver::new(name, description).with_rationale(rationale);
        driver.audit = self.stamp();
        self.pyramid.strategic_drivers.push(driver.clone());
        self.record_added(&driver);
        driver
    }

    /// Update a driver; `false` if it does not exist
    pub fn update_driver(&mut self, id: DriverId, update: DriverUpdate) -> bool {
        let updated = apply_patch(&mut self.pyramid.strategic_drivers, id, update);
        self.finish_update::<StrategicDriver>(id, updated)
    }

    /// Remove a driver
    ///
    /// Intents and commitments pointing at it are left in place and show up
    /// as structure errors on the next validation.
    pub fn remove_driver(&mut self, id: DriverId) -> bool {
        let removed = remove_by_id(&mut self.pyramid.strategic_drivers, id);
        self.record_removed::<StrategicDriver>(id, removed)
    }

    /// Add a strategic intent under an existing driver
    ///
    /// # Errors
    /// Returns [`PyramidError::ReferenceNotFound`](crate::PyramidError::ReferenceNotFound)
    /// if `driver_id` does not resolve; the document is left unchanged.
    pub fn add_intent(
        &mut self,
        statement: impl Into<String>,
        driver_id: DriverId,
        is_stakeholder_voice: bool,
    ) -> Result<StrategicIntent> {
        self.require_driver(driver_id)?;

        let mut intent = StrategicIntent::new(statement, driver_id, is_stakeholder_voice);
        intent.audit = self.stamp();
        self.pyramid.strategic_intents.push(intent.clone());
        self.record_added(&intent);
        Ok(intent)
    }

    /// Update an intent; `Ok(false)` if it does not exist
    ///
    /// # Errors
    /// Returns [`PyramidError::ReferenceNotFound`](crate::PyramidError::ReferenceNotFound)
    /// if the patch moves the intent to an unknown driver.
    pub fn update_intent(&mut self, id: IntentId, update: IntentUpdate) -> Result<bool> {
        if self.pyramid.intent(id).is_none() {
            return Ok(false);
        }
        if let Some(driver_id) = update.driver_id {
            self.require_driver(driver_id)?;
        }

        let updated = apply_patch(&mut self.pyramid.strategic_intents, id, update);
        Ok(self.finish_update::<StrategicIntent>(id, updated))
    }

    /// Remove an intent; commitment links to it are left dangling
    pub fn remove_intent(&mut self, id: IntentId) -> bool {
        let removed = remove_by_id(&mut self.pyramid.strategic_intents, id);
        self.record_removed::<StrategicIntent>(id, removed)
    }

    /// Add an enabler supporting the given drivers
    pub fn add_enabler(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        enabler_type: Option<String>,
        driver_ids: Vec<DriverId>,
    ) -> Enabler {
        let mut enabler = Enabler::new(name, description)
            .with_type(enabler_type)
            .with_drivers(driver_ids);
        enabler.audit = self.stamp();
        self.pyramid.enablers.push(enabler.clone());
        self.record_added(&enabler);
        enabler
    }

    /// Update an enabler; `false` if it does not exist
    pub fn update_enabler(&mut self, id: EnablerId, update: EnablerUpdate) -> bool {
        let updated = apply_patch(&mut self.pyramid.enablers, id, update);
        self.finish_update::<Enabler>(id, updated)
    }

    /// Remove an enabler
    pub fn remove_enabler(&mut self, id: EnablerId) -> bool {
        let removed = remove_by_id(&mut self.pyramid.enablers, id);
        self.record_removed::<Enabler>(id, removed)
    }
}
