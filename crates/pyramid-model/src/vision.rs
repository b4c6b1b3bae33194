//! Vision tier: the container and its ordered statements

use crate::entity::{impl_entity, AuditInfo, EntityKind};
use crate::error::ModelError;
use crate::ids::{VisionId, VisionStatementId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of statement held in the vision container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementType {
    /// Long-term picture of success
    Vision,
    /// What the organisation does and for whom
    Mission,
    /// Conviction the organisation holds
    Belief,
    /// What the organisation cares about deeply
    Passion,
    /// Why the organisation exists
    Purpose,
    /// Stretch ambition
    Aspiration,
}

impl StatementType {
    /// All statement types in display order
    pub const ALL: [StatementType; 6] = [
        StatementType::Vision,
        StatementType::Mission,
        StatementType::Belief,
        StatementType::Passion,
        StatementType::Purpose,
        StatementType::Aspiration,
    ];

    /// Lowercase label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatementType::Vision => "vision",
            StatementType::Mission => "mission",
            StatementType::Belief => "belief",
            StatementType::Passion => "passion",
            StatementType::Purpose => "purpose",
            StatementType::Aspiration => "aspiration",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| ModelError::UnknownStatementType(s.to_string()))
    }
}

/// One statement inside the vision container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionStatement {
    /// Identifier
    pub id: VisionStatementId,
    /// Statement kind
    pub statement_type: StatementType,
    /// Statement text
    pub text: String,
    /// Display position, zero-based
    pub order: u32,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl VisionStatement {
    /// Create new statement
    #[must_use]
    pub fn new(statement_type: StatementType, text: impl Into<String>, order: u32) -> Self {
        Self {
            id: VisionStatementId::new(),
            statement_type,
            text: text.into(),
            order,
            audit: AuditInfo::now(),
        }
    }
}

impl_entity!(VisionStatement, VisionStatementId, EntityKind::VisionStatement);

/// Vision container: an ordered list of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vision {
    /// Identifier
    pub id: VisionId,
    /// Statements, kept in insertion order
    #[serde(default)]
    pub statements: Vec<VisionStatement>,
    /// Audit stamps
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Vision {
    /// Create empty container
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: VisionId::new(),
            statements: Vec::new(),
            audit: AuditInfo::now(),
        }
    }

    /// Whether the container holds no statements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Display order for the next appended statement
    ///
    /// Renumbers the container first when the highest order is already
    /// `u32::MAX`, so appending never wraps around.
    pub fn next_order(&mut self) -> u32 {
        let Some(highest) = self.statements.iter().map(|s| s.order).max() else {
            return 0;
        };
        if let Some(next) = highest.checked_add(1) {
            return next;
        }
        self.renumber();
        u32::try_from(self.statements.len()).unwrap_or(u32::MAX)
    }

    /// Statements sorted by display order
    #[must_use]
    pub fn ordered(&self) -> Vec<&VisionStatement> {
        let mut sorted: Vec<_> = self.statements.iter().collect();
        sorted.sort_by_key(|s| s.order);
        sorted
    }

    /// Reassign contiguous display orders following the current ordering
    pub fn renumber(&mut self) {
        self.statements.sort_by_key(|s| s.order);
        for (position, statement) in (0u32..).zip(self.statements.iter_mut()) {
            statement.order = position;
        }
    }
}

impl Default for Vision {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(Vision, VisionId, EntityKind::Vision);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_type_parses_case_insensitively() {
        assert_eq!("Mission".parse::<StatementType>().unwrap(), StatementType::Mission);
        assert_eq!(" purpose ".parse::<StatementType>().unwrap(), StatementType::Purpose);
        assert!(matches!(
            "slogan".parse::<StatementType>(),
            Err(ModelError::UnknownStatementType(_))
        ));
    }

    #[test]
    fn next_order_follows_highest() {
        let mut vision = Vision::new();
        assert_eq!(vision.next_order(), 0);
        vision
            .statements
            .push(VisionStatement::new(StatementType::Vision, "a", 0));
        vision
            .statements
            .push(VisionStatement::new(StatementType::Mission, "b", 4));
        assert_eq!(vision.next_order(), 5);
    }

    #[test]
    fn next_order_renumbers_instead_of_overflowing() {
        let mut vision = Vision::new();
        vision
            .statements
            .push(VisionStatement::new(StatementType::Vision, "a", 3));
        vision
            .statements
            .push(VisionStatement::new(StatementType::Mission, "b", u32::MAX));

        assert_eq!(vision.next_order(), 2);
        let orders: Vec<_> = vision.statements.iter().map(|s| s.order).collect();
        assert_eq!(orders, [0, 1]);
    }

    #[test]
    fn renumber_closes_gaps() {
        let mut vision = Vision::new();
        vision
            .statements
            .push(VisionStatement::new(StatementType::Mission, "second", 7));
        vision
            .statements
            .push(VisionStatement::new(StatementType::Vision, "first", 2));
        vision.renumber();

        let texts: Vec<_> = vision.ordered().iter().map(|s| s.text.clone()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(vision.statements[1].order, 1);
    }
}
