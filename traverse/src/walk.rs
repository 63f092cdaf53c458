//! The depth-first traversal driver.

use banns_core::{PersonId, Verdict};
use banns_graph::FamilyTree;
use log::trace;
use std::collections::HashSet;

/// Walk the tree depth-first in pre-order from `root`, applying `visit` to
/// each reachable person until it returns a verdict.
///
/// The current person is visited first; her children are then walked in
/// birth order. Men carry no children list, so they contribute no further
/// edges of their own: a man's children are reached when his spouse is
/// visited. Spouse links themselves are never traversed.
///
/// The first `Some(Verdict)` halts the entire walk and propagates up as its
/// result; a walk that finishes without one returns `None`. Each person is
/// visited at most once per walk, and an unknown root yields no visits.
pub fn walk<F>(tree: &FamilyTree, root: PersonId, visit: &mut F) -> Option<Verdict>
where
    F: FnMut(PersonId) -> Option<Verdict>,
{
    let mut seen = HashSet::new();
    walk_from(tree, root, visit, &mut seen)
}

fn walk_from<F>(
    tree: &FamilyTree,
    id: PersonId,
    visit: &mut F,
    seen: &mut HashSet<PersonId>,
) -> Option<Verdict>
where
    F: FnMut(PersonId) -> Option<Verdict>,
{
    if !tree.contains(id) || !seen.insert(id) {
        return None;
    }

    trace!("visiting {}", id);
    if let Some(verdict) = visit(id) {
        trace!("walk halted at {} with verdict: {}", id, verdict);
        return Some(verdict);
    }

    for &child in tree.children_of(id) {
        if let Some(verdict) = walk_from(tree, child, visit, seen) {
            return Some(verdict);
        }
    }
    None
}

/// Visit every person reachable from `root`, in walk order, without
/// producing a verdict. Used by the read-only listings.
pub fn for_each_reachable<F>(tree: &FamilyTree, root: PersonId, mut f: F)
where
    F: FnMut(PersonId),
{
    walk(tree, root, &mut |id| {
        f(id);
        None
    });
}
