//! Immutable family tree storage.

use banns_core::{Person, PersonId};
use std::collections::HashMap;

/// The in-memory family tree.
///
/// Built once by [`TreeBuilder`](crate::TreeBuilder) and read-only
/// thereafter. All lookups are guarded: asking about an unknown person or a
/// missing link yields `None` (or an empty slice), never a panic, so sparse
/// trees are fully supported.
#[derive(Debug)]
pub struct FamilyTree {
    /// Person storage.
    people: HashMap<PersonId, Person>,
}

impl FamilyTree {
    pub(crate) fn from_people(people: HashMap<PersonId, Person>) -> Self {
        Self { people }
    }

    /// Get a person by ID.
    pub fn get_person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Returns true if the tree contains this person.
    pub fn contains(&self, id: PersonId) -> bool {
        self.people.contains_key(&id)
    }

    /// Number of people in the tree.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Iterate over all people, in no particular order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// A person's father, if recorded.
    pub fn father_of(&self, id: PersonId) -> Option<PersonId> {
        self.get_person(id)?.father
    }

    /// A person's spouse, if married.
    pub fn spouse_of(&self, id: PersonId) -> Option<PersonId> {
        self.get_person(id)?.spouse
    }

    /// A person's mother. Mothers are not stored; the mother is the spouse
    /// of the recorded father, so either missing link yields `None`.
    pub fn mother_of(&self, id: PersonId) -> Option<PersonId> {
        let father = self.father_of(id)?;
        self.spouse_of(father)
    }

    /// The children a person bore, in birth order. Empty for men (their
    /// children hang off the spouse) and for unknown IDs.
    pub fn children_of(&self, id: PersonId) -> &[PersonId] {
        self.get_person(id).map(Person::children).unwrap_or(&[])
    }
}
