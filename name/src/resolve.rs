//! Full-name resolution.
//!
//! There is exactly one way to derive a person's full name, used identically
//! everywhere a name is needed (candidate matching, relative-set comparison,
//! listings). Names are recomputed per lookup, never cached: a woman's last
//! name depends on links that differ from person to person.

use banns_core::{Person, PersonId, PersonKind};
use banns_graph::FamilyTree;

/// Last name used when a woman has neither spouse nor father.
pub const FALLBACK_LAST_NAME: &str = "Doe";

/// The last name a person goes by.
///
/// A man's stored last name is authoritative. A woman takes her spouse's
/// last name, else her father's, else [`FALLBACK_LAST_NAME`]. A link to a
/// person without a stored last name contributes nothing and the chain
/// falls through.
pub fn effective_last_name<'t>(tree: &'t FamilyTree, person: &'t Person) -> &'t str {
    match &person.kind {
        PersonKind::Man { last_name } => last_name,
        PersonKind::Woman { .. } => person
            .spouse
            .and_then(|id| tree.get_person(id))
            .and_then(Person::last_name)
            .or_else(|| {
                person
                    .father
                    .and_then(|id| tree.get_person(id))
                    .and_then(Person::last_name)
            })
            .unwrap_or(FALLBACK_LAST_NAME),
    }
}

/// A person's resolved full name: `first_name + " " + effective last name`.
pub fn full_name(tree: &FamilyTree, person: &Person) -> String {
    format!("{} {}", person.first_name, effective_last_name(tree, person))
}

/// Resolve by ID. `None` for IDs the tree does not know.
pub fn full_name_of(tree: &FamilyTree, id: PersonId) -> Option<String> {
    tree.get_person(id).map(|p| full_name(tree, p))
}
