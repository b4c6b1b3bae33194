//! Vision container and statements

use super::{apply_patch, PyramidManager};
use crate::patch::VisionStatementUpdate;
use pyramid_model::{remove_by_id, StatementType, Vision, VisionStatement, VisionStatementId};

impl PyramidManager {
    /// Vision container, if one exists
    #[inline]
    #[must_use]
    pub fn vision(&self) -> Option<&Vision> {
        self.pyramid.vision.as_ref()
    }

    /// Append a statement, creating the container on first use
    pub fn add_vision_statement(
        &mut self,
        statement_type: StatementType,
        text: impl Into<String>,
    ) -> VisionStatement {
        let audit = self.stamp();
        let vision = self.pyramid.vision.get_or_insert_with(|| Vision {
            audit: audit.clone(),
            ..Vision::new()
        });

        let mut statement = VisionStatement::new(statement_type, text, vision.next_order());
        statement.audit = audit;
        vision.statements.push(statement.clone());
        vision.audit.touch();

        self.record_added(&statement);
        statement
    }

    /// Update a statement; `false` if it does not exist
    pub fn update_vision_statement(
        &mut self,
        id: VisionStatementId,
        update: VisionStatementUpdate,
    ) -> bool {
        let updated = match self.pyramid.vision.as_mut() {
            Some(vision) => {
                let reorders = update.order.is_some();
                let updated = apply_patch(&mut vision.statements, id, update);
                if updated && reorders {
                    vision.renumber();
                }
                updated
            }
            None => false,
        };
        self.finish_update::<VisionStatement>(id, updated)
    }

    /// Remove a statement and close the gap in display order
    pub fn remove_vision_statement(&mut self, id: VisionStatementId) -> bool {
        let removed = match self.pyramid.vision.as_mut() {
            Some(vision) => {
                let removed = remove_by_id(&mut vision.statements, id);
                if removed {
                    vision.renumber();
                    vision.audit.touch();
                }
                removed
            }
            None => false,
        };
        self.record_removed::<VisionStatement>(id, removed)
    }

    /// Drop the whole vision container; `false` if there was none
    pub fn clear_vision(&mut self) -> bool {
        let cleared = self.pyramid.vision.take().is_some();
        if cleared {
            self.mark_modified();
            tracing::debug!("cleared vision");
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use crate::{PyramidManager, VisionStatementUpdate};
    use pretty_assertions::assert_eq;
    use pyramid_model::{Metadata, StatementType};

    fn manager() -> PyramidManager {
        PyramidManager::new(Metadata::new("FY26 Strategy", "Acme"))
    }

    #[test]
    fn first_statement_creates_container() {
        let mut manager = manager();
        assert!(manager.vision().is_none());

        let statement = manager.add_vision_statement(StatementType::Mission, "We insure homes");
        assert_eq!(statement.order, 0);
        assert!(manager.pyramid().has_vision());
    }

    #[test]
    fn removal_renumbers_remaining_statements() {
        let mut manager = manager();
        manager.add_vision_statement(StatementType::Vision, "first");
        let middle = manager.add_vision_statement(StatementType::Mission, "second");
        manager.add_vision_statement(StatementType::Purpose, "third");

        assert!(manager.remove_vision_statement(middle.id));
        assert!(!manager.remove_vision_statement(middle.id));

        assert_eq!(
            orders(&manager),
            vec![("first".to_string(), 0), ("third".to_string(), 1)]
        );
    }

    #[test]
    fn update_changes_text_only() {
        let mut manager = manager();
        let statement = manager.add_vision_statement(StatementType::Belief, "draft");

        assert!(manager.update_vision_statement(
            statement.id,
            VisionStatementUpdate::text("Everyone deserves a safe home"),
        ));

        let stored = manager.pyramid().vision_statement(statement.id).unwrap();
        assert_eq!(stored.text, "Everyone deserves a safe home");
        assert_eq!(stored.statement_type, StatementType::Belief);
    }

    fn orders(manager: &PyramidManager) -> Vec<(String, u32)> {
        manager
            .vision()
            .unwrap()
            .ordered()
            .iter()
            .map(|s| (s.text.clone(), s.order))
            .collect()
    }

    #[test]
    fn reorder_keeps_orders_contiguous() {
        let mut manager = manager();
        let first = manager.add_vision_statement(StatementType::Vision, "first");
        manager.add_vision_statement(StatementType::Mission, "second");

        assert!(manager.update_vision_statement(
            first.id,
            VisionStatementUpdate {
                order: Some(u32::MAX),
                ..VisionStatementUpdate::default()
            },
        ));
        assert_eq!(
            orders(&manager),
            vec![("second".to_string(), 0), ("first".to_string(), 1)]
        );

        let third = manager.add_vision_statement(StatementType::Purpose, "third");
        assert_eq!(third.order, 2);
    }

    #[test]
    fn loaded_maximum_order_does_not_overflow() {
        let mut manager = manager();
        let statement = manager.add_vision_statement(StatementType::Vision, "first");
        let json = manager
            .to_json()
            .unwrap()
            .replace("\"order\":0", &format!("\"order\":{}", u32::MAX));
        let mut loaded = PyramidManager::from_json(&json).unwrap();
        assert_eq!(
            loaded.pyramid().vision_statement(statement.id).unwrap().order,
            u32::MAX
        );

        let next = loaded.add_vision_statement(StatementType::Mission, "second");
        assert_eq!(next.order, 1);
        assert_eq!(
            orders(&loaded),
            vec![("first".to_string(), 0), ("second".to_string(), 1)]
        );
    }

    #[test]
    fn clear_reports_whether_a_vision_existed() {
        let mut manager = manager();
        assert!(!manager.clear_vision());
        manager.add_vision_statement(StatementType::Vision, "x");
        assert!(manager.clear_vision());
        assert!(manager.vision().is_none());
    }
}
