//! Person records.
//!
//! People are the only entity in the family tree. A person is either a man
//! or a woman; the two variants carry different authoritative data. All
//! references between people are `PersonId` handles into the tree store,
//! never owned pointers.

use crate::PersonId;

/// Variant-specific data for a person.
///
/// A man's last name is authoritative. A woman stores no last name (hers is
/// derived from her spouse or father); instead she carries the ordered list
/// of the children she bore, which is the authoritative source of
/// parent-to-child traversal edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonKind {
    Man {
        last_name: String,
    },
    Woman {
        /// Children in birth order.
        children: Vec<PersonId>,
    },
}

/// A person in the family tree.
#[derive(Debug, Clone)]
pub struct Person {
    /// Unique identifier for this person.
    pub id: PersonId,
    /// Given name, set at creation.
    pub first_name: String,
    /// Spouse link. Symmetric: if A's spouse is B, B's spouse is A.
    pub spouse: Option<PersonId>,
    /// Father link, immutable after creation. Absent for root ancestors.
    pub father: Option<PersonId>,
    /// Man or woman payload.
    pub kind: PersonKind,
}

impl Person {
    /// Create a new man.
    pub fn new_man(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            spouse: None,
            father: None,
            kind: PersonKind::Man {
                last_name: last_name.into(),
            },
        }
    }

    /// Create a new woman.
    pub fn new_woman(id: PersonId, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            spouse: None,
            father: None,
            kind: PersonKind::Woman {
                children: Vec::new(),
            },
        }
    }

    /// Returns true if this person is a man.
    pub fn is_man(&self) -> bool {
        matches!(self.kind, PersonKind::Man { .. })
    }

    /// Returns true if this person is a woman.
    pub fn is_woman(&self) -> bool {
        matches!(self.kind, PersonKind::Woman { .. })
    }

    /// The stored last name. Only men have one; a woman's effective last
    /// name is derived at lookup time from her spouse or father.
    pub fn last_name(&self) -> Option<&str> {
        match &self.kind {
            PersonKind::Man { last_name } => Some(last_name),
            PersonKind::Woman { .. } => None,
        }
    }

    /// The children this person bore, in birth order. Always empty for a
    /// man: his children are reached through his spouse.
    pub fn children(&self) -> &[PersonId] {
        match &self.kind {
            PersonKind::Man { .. } => &[],
            PersonKind::Woman { children } => children,
        }
    }
}
