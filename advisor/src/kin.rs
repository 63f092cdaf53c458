//! Relative-set derivations.
//!
//! Each set is computed through guarded link walks: a missing father,
//! mother or spouse contributes nothing, so sparse trees produce smaller
//! sets instead of failures. Sets are inclusive: everyone is a child of
//! their own mother, so a person sits in their own sibling set and parents
//! sit in the aunt/uncle sets. The evaluator's fixed check order decides
//! which category such overlaps are reported under.

use banns_core::PersonId;
use banns_graph::FamilyTree;

/// A person's siblings: the children of their mother (the father's spouse).
pub fn siblings(tree: &FamilyTree, id: PersonId) -> Vec<PersonId> {
    match tree.mother_of(id) {
        Some(mother) => tree.children_of(mother).to_vec(),
        None => Vec::new(),
    }
}

/// A person's aunts and uncles: the siblings of the mother, then of the
/// father, each side re-derived from that side's grandmother.
pub fn parents_siblings(tree: &FamilyTree, id: PersonId) -> Vec<PersonId> {
    let mut out = Vec::new();
    if let Some(mother) = tree.mother_of(id) {
        out.extend(siblings(tree, mother));
    }
    if let Some(father) = tree.father_of(id) {
        out.extend(siblings(tree, father));
    }
    out
}

/// The children a person is parent to: a woman's own list, a man's
/// children reached through his spouse.
pub fn offspring(tree: &FamilyTree, id: PersonId) -> Vec<PersonId> {
    let person = match tree.get_person(id) {
        Some(p) => p,
        None => return Vec::new(),
    };
    if person.is_woman() {
        person.children().to_vec()
    } else {
        match person.spouse {
            Some(spouse) => tree.children_of(spouse).to_vec(),
            None => Vec::new(),
        }
    }
}

/// Children of each of a person's siblings (nieces and nephews).
pub fn siblings_children(tree: &FamilyTree, id: PersonId) -> Vec<PersonId> {
    siblings(tree, id)
        .into_iter()
        .flat_map(|sibling| offspring(tree, sibling))
        .collect()
}

/// Children of each aunt or uncle on either side (first cousins).
pub fn parents_siblings_children(tree: &FamilyTree, id: PersonId) -> Vec<PersonId> {
    parents_siblings(tree, id)
        .into_iter()
        .flat_map(|aunt_or_uncle| offspring(tree, aunt_or_uncle))
        .collect()
}
