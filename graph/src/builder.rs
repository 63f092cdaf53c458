//! TreeBuilder for constructing an immutable FamilyTree.

use crate::FamilyTree;
use banns_core::{Person, PersonId, PersonKind};
use log::debug;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during tree construction.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonId),

    #[error("Expected a man: {0}")]
    NotAMan(PersonId),

    #[error("Expected a woman: {0}")]
    NotAWoman(PersonId),

    #[error("Already married: {0}")]
    AlreadyMarried(PersonId),

    #[error("Parents are not married to each other: father {father}, mother {mother}")]
    ParentsNotMarried { father: PersonId, mother: PersonId },

    #[error("Spouse links are not mutual between {0} and {1}")]
    SpouseNotMutual(PersonId, PersonId),

    #[error("Child {child} is inconsistent with the children list of {mother}")]
    InconsistentChild { child: PersonId, mother: PersonId },
}

/// Result type for tree construction.
pub type BuildResult<T> = Result<T, BuildError>;

/// Builder for constructing an immutable [`FamilyTree`].
///
/// People are added one at a time; parent links are fixed at creation and
/// spouse links are set symmetrically by [`marry`](TreeBuilder::marry).
/// Adding a child requires its parents to be married already, which keeps
/// the tree consistent: a child sits in its mother's children list exactly
/// when the child's father's spouse is that mother.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    /// Next person ID to allocate.
    next_person_id: u64,
    /// People being built.
    people: HashMap<PersonId, Person>,
}

impl TreeBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            next_person_id: 1,
            people: HashMap::new(),
        }
    }

    fn alloc_id(&mut self) -> PersonId {
        let id = PersonId::new(self.next_person_id);
        self.next_person_id += 1;
        id
    }

    /// Add a man with an authoritative last name.
    pub fn add_man(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> PersonBuilder<'_> {
        let id = self.alloc_id();
        PersonBuilder {
            builder: self,
            id,
            first_name: first_name.into(),
            last_name: Some(last_name.into()),
            parents: None,
        }
    }

    /// Add a woman. Her last name is never stored; it is derived from her
    /// spouse or father at lookup time.
    pub fn add_woman(&mut self, first_name: impl Into<String>) -> PersonBuilder<'_> {
        let id = self.alloc_id();
        PersonBuilder {
            builder: self,
            id,
            first_name: first_name.into(),
            last_name: None,
            parents: None,
        }
    }

    /// Marry a man and a woman, setting both spouse links.
    pub fn marry(&mut self, man: PersonId, woman: PersonId) -> BuildResult<()> {
        let m = self.people.get(&man).ok_or(BuildError::UnknownPerson(man))?;
        if !m.is_man() {
            return Err(BuildError::NotAMan(man));
        }
        let w = self
            .people
            .get(&woman)
            .ok_or(BuildError::UnknownPerson(woman))?;
        if !w.is_woman() {
            return Err(BuildError::NotAWoman(woman));
        }
        if m.spouse.is_some() {
            return Err(BuildError::AlreadyMarried(man));
        }
        if w.spouse.is_some() {
            return Err(BuildError::AlreadyMarried(woman));
        }

        if let Some(p) = self.people.get_mut(&man) {
            p.spouse = Some(woman);
        }
        if let Some(p) = self.people.get_mut(&woman) {
            p.spouse = Some(man);
        }
        Ok(())
    }

    /// Seal the tree. Runs a validation sweep over the link invariants; the
    /// builder's own operations preserve them, so a failure here means the
    /// builder was bypassed.
    pub fn finish(self) -> BuildResult<FamilyTree> {
        // Spouse links: mutual, and between a man and a woman.
        for person in self.people.values() {
            if let Some(spouse_id) = person.spouse {
                let spouse = self
                    .people
                    .get(&spouse_id)
                    .ok_or(BuildError::UnknownPerson(spouse_id))?;
                if spouse.spouse != Some(person.id) {
                    return Err(BuildError::SpouseNotMutual(person.id, spouse_id));
                }
                if person.is_man() && !spouse.is_woman() {
                    return Err(BuildError::NotAWoman(spouse_id));
                }
                if person.is_woman() && !spouse.is_man() {
                    return Err(BuildError::NotAMan(spouse_id));
                }
            }
        }

        // Children lists: every listed child's father must be married to
        // that mother, and every child with married parents must be listed.
        for mother in self.people.values().filter(|p| p.is_woman()) {
            for &child_id in mother.children() {
                let child = self
                    .people
                    .get(&child_id)
                    .ok_or(BuildError::UnknownPerson(child_id))?;
                let consistent = child
                    .father
                    .and_then(|f| self.people.get(&f))
                    .map(|f| f.spouse == Some(mother.id))
                    .unwrap_or(false);
                if !consistent {
                    return Err(BuildError::InconsistentChild {
                        child: child_id,
                        mother: mother.id,
                    });
                }
            }
        }
        for child in self.people.values() {
            if let Some(father_id) = child.father {
                let father = self
                    .people
                    .get(&father_id)
                    .ok_or(BuildError::UnknownPerson(father_id))?;
                if !father.is_man() {
                    return Err(BuildError::NotAMan(father_id));
                }
                if let Some(mother_id) = father.spouse {
                    let listed = self
                        .people
                        .get(&mother_id)
                        .map(|m| m.children().contains(&child.id))
                        .unwrap_or(false);
                    if !listed {
                        return Err(BuildError::InconsistentChild {
                            child: child.id,
                            mother: mother_id,
                        });
                    }
                }
            }
        }

        debug!("family tree sealed: {} people", self.people.len());
        Ok(FamilyTree::from_people(self.people))
    }
}

/// Builder for a single person.
pub struct PersonBuilder<'a> {
    builder: &'a mut TreeBuilder,
    id: PersonId,
    first_name: String,
    /// `Some` for a man, `None` for a woman.
    last_name: Option<String>,
    parents: Option<(PersonId, PersonId)>,
}

impl<'a> PersonBuilder<'a> {
    /// Record this person as a child of a father and mother already in the
    /// tree. The pair must be married to each other; the child is appended
    /// to the mother's children list.
    pub fn child_of(mut self, father: PersonId, mother: PersonId) -> Self {
        self.parents = Some((father, mother));
        self
    }

    /// Finish building this person.
    pub fn done(self) -> BuildResult<PersonId> {
        let mut person = match self.last_name {
            Some(last) => Person::new_man(self.id, self.first_name, last),
            None => Person::new_woman(self.id, self.first_name),
        };

        if let Some((father_id, mother_id)) = self.parents {
            let father = self
                .builder
                .people
                .get(&father_id)
                .ok_or(BuildError::UnknownPerson(father_id))?;
            if !father.is_man() {
                return Err(BuildError::NotAMan(father_id));
            }
            let mother = self
                .builder
                .people
                .get(&mother_id)
                .ok_or(BuildError::UnknownPerson(mother_id))?;
            if !mother.is_woman() {
                return Err(BuildError::NotAWoman(mother_id));
            }
            if father.spouse != Some(mother_id) {
                return Err(BuildError::ParentsNotMarried {
                    father: father_id,
                    mother: mother_id,
                });
            }

            person.father = Some(father_id);
            if let Some(m) = self.builder.people.get_mut(&mother_id) {
                if let PersonKind::Woman { children } = &mut m.kind {
                    children.push(self.id);
                }
            }
        }

        self.builder.people.insert(self.id, person);
        Ok(self.id)
    }
}
