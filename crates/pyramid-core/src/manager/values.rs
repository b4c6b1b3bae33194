//! Values and behaviours

use super::{apply_patch, PyramidManager};
use crate::patch::{BehaviourUpdate, ValueUpdate};
use pyramid_model::{remove_by_id, Behaviour, BehaviourId, Value, ValueId};

impl PyramidManager {
    /// Add a value
    pub fn add_value(&mut self, name: impl Into<String>, description: impl Into<String>) -> Value {
        let mut value = Value::new(name, description);
        value.audit = self.stamp();
        self.pyramid.values.push(value.clone());
        self.record_added(&value);
        value
    }

    /// Update a value; `false` if it does not exist
    pub fn update_value(&mut self, id: ValueId, update: ValueUpdate) -> bool {
        let updated = apply_patch(&mut self.pyramid.values, id, update);
        self.finish_update::<Value>(id, updated)
    }

    /// Remove a value; behaviours keep their (now dangling) links
    pub fn remove_value(&mut self, id: ValueId) -> bool {
        let removed = remove_by_id(&mut self.pyramid.values, id);
        self.record_removed::<Value>(id, removed)
    }

    /// Add a behaviour expressing the given values
    ///
    /// Value links are not checked here; dangling ones surface as structure
    /// warnings on validation.
    pub fn add_behaviour(
        &mut self,
        statement: impl Into<String>,
        value_ids: Vec<ValueId>,
    ) -> Behaviour {
        let mut behaviour = Behaviour::new(statement, value_ids);
        behaviour.audit = self.stamp();
        self.pyramid.behaviours.push(behaviour.clone());
        self.record_added(&behaviour);
        behaviour
    }

    /// Update a behaviour; `false` if it does not exist
    pub fn update_behaviour(&mut self, id: BehaviourId, update: BehaviourUpdate) -> bool {
        let updated = apply_patch(&mut self.pyramid.behaviours, id, update);
        self.finish_update::<Behaviour>(id, updated)
    }

    /// Remove a behaviour
    pub fn remove_behaviour(&mut self, id: BehaviourId) -> bool {
        let removed = remove_by_id(&mut self.pyramid.behaviours, id);
        self.record_removed::<Behaviour>(id, removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BehaviourUpdate, PyramidManager, ValueUpdate};
    use pretty_assertions::assert_eq;
    use pyramid_model::{Metadata, ValueId};

    fn manager() -> PyramidManager {
        PyramidManager::new(Metadata::new("FY26 Strategy", "Acme"))
    }

    #[test]
    fn value_update_changes_supplied_fields_only() {
        let mut manager = manager();
        let value = manager.add_value("Integrity", "We do what we say");
        let before = manager.backdate();

        assert!(manager.update_value(
            value.id,
            ValueUpdate {
                description: Some("We keep our promises".into()),
                ..ValueUpdate::default()
            },
        ));

        let stored = manager.get_value(value.id).unwrap();
        assert_eq!(stored.name, "Integrity");
        assert_eq!(stored.description, "We keep our promises");
        assert!(stored.audit.updated_at > before);
        assert!(manager.metadata().updated_at > before);
    }

    #[test]
    fn unknown_value_is_left_alone() {
        let mut manager = manager();
        manager.add_value("Integrity", "");
        let before = manager.backdate();

        assert!(!manager.update_value(ValueId::new(), ValueUpdate::default()));
        assert!(!manager.remove_value(ValueId::new()));
        assert_eq!(manager.metadata().updated_at, before);
    }

    #[test]
    fn removing_value_keeps_behaviour_links() {
        let mut manager = manager();
        let value = manager.add_value("Integrity", "");
        let behaviour = manager.add_behaviour("We admit mistakes early", vec![value.id]);

        assert!(manager.remove_value(value.id));
        assert!(!manager.remove_value(value.id));

        assert!(manager.get_value(value.id).is_none());
        assert_eq!(
            manager.get_behaviour(behaviour.id).unwrap().value_ids,
            vec![value.id]
        );
    }

    #[test]
    fn behaviour_update_and_removal() {
        let mut manager = manager();
        let integrity = manager.add_value("Integrity", "");
        let care = manager.add_value("Care", "");
        let behaviour = manager.add_behaviour("We admit mistakes early", vec![integrity.id]);
        let before = manager.backdate();

        assert!(manager.update_behaviour(
            behaviour.id,
            BehaviourUpdate {
                value_ids: Some(vec![integrity.id, care.id]),
                ..BehaviourUpdate::default()
            },
        ));
        let stored = manager.get_behaviour(behaviour.id).unwrap();
        assert_eq!(stored.statement, "We admit mistakes early");
        assert_eq!(stored.value_ids, vec![integrity.id, care.id]);
        assert!(stored.audit.updated_at > before);

        assert!(manager.remove_behaviour(behaviour.id));
        assert!(!manager.remove_behaviour(behaviour.id));
        assert!(!manager.update_behaviour(behaviour.id, BehaviourUpdate::default()));
    }
}
