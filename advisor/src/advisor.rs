//! The marriage advisor.

use banns_core::{Impediment, PersonId, Verdict};
use banns_graph::FamilyTree;
use banns_name::{full_name, full_name_of, FullName};
use banns_traverse::walk;
use log::debug;

use crate::kin;

/// Which candidate a visited person matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

/// Evaluates marriage queries against a family tree.
///
/// The verdict is decided at the first visited person whose resolved full
/// name equals either candidate, by screening the other candidate's name
/// against that person's relative sets in a fixed order. The first
/// impediment found wins. A person who clears every screen allows the
/// marriage even when the other candidate is nowhere in the tree;
/// [`advise_strict`](MarriageAdvisor::advise_strict) is the two-sided
/// variant.
pub struct MarriageAdvisor<'t> {
    tree: &'t FamilyTree,
    first: FullName,
    second: FullName,
}

impl<'t> MarriageAdvisor<'t> {
    /// Create an advisor for one candidate pair.
    pub fn new(tree: &'t FamilyTree, first: FullName, second: FullName) -> Self {
        Self { tree, first, second }
    }

    /// Decide from the first matched person's perspective alone.
    pub fn advise(&self, root: PersonId) -> Verdict {
        let verdict = walk(self.tree, root, &mut |id| {
            self.evaluate(id).map(|(_, verdict)| verdict)
        })
        .unwrap_or(Verdict::NoDecision);

        debug!("advise({} / {}): {}", self.first, self.second, verdict);
        verdict
    }

    /// Two-sided variant: a clean match does not allow on its own, the walk
    /// goes on until the other candidate is located. A violation on either
    /// side disallows; both sides clearing allows; a walk that ends with one
    /// side never located stays undecided. Equal candidate names need only
    /// the one match, and re-matches of an already cleared side are skipped.
    pub fn advise_strict(&self, root: PersonId) -> Verdict {
        let mut cleared: Option<Side> = None;

        let verdict = walk(self.tree, root, &mut |id| {
            let (side, verdict) = self.evaluate(id)?;
            // Each side testifies through its first matched node only.
            if cleared == Some(side) {
                return None;
            }
            match verdict {
                Verdict::Disallowed(_) => Some(verdict),
                Verdict::Allowed => {
                    if self.first == self.second || cleared.is_some() {
                        Some(Verdict::Allowed)
                    } else {
                        cleared = Some(side);
                        debug!("{} cleared every check, walking on for the other candidate", id);
                        None
                    }
                }
                Verdict::NoDecision => None,
            }
        })
        .unwrap_or(Verdict::NoDecision);

        debug!("advise_strict({} / {}): {}", self.first, self.second, verdict);
        verdict
    }

    /// Evaluate one visited person: `None` when their resolved name matches
    /// neither candidate, otherwise the matched side and the verdict from
    /// this person's perspective.
    ///
    /// Candidate order is the tie-break: a name equal to both candidates
    /// matches as the first.
    fn evaluate(&self, id: PersonId) -> Option<(Side, Verdict)> {
        let person = self.tree.get_person(id)?;
        let name = full_name(self.tree, person);
        let (side, other) = if name == self.first.as_str() {
            (Side::First, self.second.as_str())
        } else if name == self.second.as_str() {
            (Side::Second, self.first.as_str())
        } else {
            return None;
        };
        debug!("{} resolved to {:?}, screening against {:?}", id, name, other);

        if person.spouse.is_some() {
            return Some((side, Verdict::Disallowed(Impediment::AlreadyMarried)));
        }
        if self.any_named(kin::siblings(self.tree, id), other) {
            return Some((side, Verdict::Disallowed(Impediment::Siblings)));
        }
        if self.any_named(kin::parents_siblings(self.tree, id), other) {
            return Some((side, Verdict::Disallowed(Impediment::AuntOrUncle)));
        }
        if self.any_named(kin::siblings_children(self.tree, id), other) {
            return Some((side, Verdict::Disallowed(Impediment::NieceOrNephew)));
        }
        if self.any_named(kin::parents_siblings_children(self.tree, id), other) {
            return Some((side, Verdict::Disallowed(Impediment::FirstCousins)));
        }
        if self.other_is_parent(id, other) {
            return Some((side, Verdict::Disallowed(Impediment::ParentOrChild)));
        }
        if self.any_named(kin::offspring(self.tree, id), other) {
            return Some((side, Verdict::Disallowed(Impediment::ParentOrChild)));
        }

        Some((side, Verdict::Allowed))
    }

    /// True if any of `ids` resolves to the other candidate's name.
    fn any_named(&self, ids: Vec<PersonId>, other: &str) -> bool {
        ids.into_iter()
            .any(|id| full_name_of(self.tree, id).as_deref() == Some(other))
    }

    /// The parent screen: the father's and mother's names, plus the
    /// person's own children.
    fn other_is_parent(&self, id: PersonId, other: &str) -> bool {
        let father_matches = self
            .tree
            .father_of(id)
            .and_then(|f| full_name_of(self.tree, f))
            .as_deref()
            == Some(other);
        let mother_matches = self
            .tree
            .mother_of(id)
            .and_then(|m| full_name_of(self.tree, m))
            .as_deref()
            == Some(other);

        father_matches || mother_matches || self.any_named(kin::offspring(self.tree, id), other)
    }
}
