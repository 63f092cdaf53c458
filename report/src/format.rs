//! Output formatting for verdicts and family listings.

use banns_core::{PersonId, Verdict};
use banns_graph::FamilyTree;
use banns_name::full_name;
use banns_traverse::for_each_reachable;

/// Format a verdict as the single line the advisor announces.
pub fn verdict_line(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Allowed => "They can marry!".to_string(),
        Verdict::Disallowed(_) => "They cannot marry!".to_string(),
        Verdict::NoDecision => "No decision: no matching candidate was found.".to_string(),
    }
}

/// Format the reason behind a disallowed verdict, if there is one.
pub fn reason_line(verdict: &Verdict) -> Option<String> {
    verdict
        .impediment()
        .map(|impediment| format!("Impediment: {}.", impediment))
}

/// List the resolved full name of every person reachable from `root`,
/// one per line, in walk order.
pub fn name_listing(tree: &FamilyTree, root: PersonId) -> String {
    let mut out = String::new();
    for_each_reachable(tree, root, |id| {
        if let Some(person) = tree.get_person(id) {
            out.push_str(&full_name(tree, person));
            out.push('\n');
        }
    });
    out
}

/// List every reachable person's first name with the first names of their
/// children, one person per line, in walk order. A man's children are his
/// wife's children.
pub fn children_listing(tree: &FamilyTree, root: PersonId) -> String {
    let mut out = String::new();
    for_each_reachable(tree, root, |id| {
        let person = match tree.get_person(id) {
            Some(p) => p,
            None => return,
        };
        let child_ids = if person.is_man() {
            person.spouse.map(|wife| tree.children_of(wife)).unwrap_or(&[])
        } else {
            tree.children_of(id)
        };
        let children: Vec<&str> = child_ids
            .iter()
            .filter_map(|child| tree.get_person(*child))
            .map(|child| child.first_name.as_str())
            .collect();
        out.push_str(&person.first_name);
        out.push_str(": ");
        out.push_str(&children.join(", "));
        out.push('\n');
    });
    out
}
