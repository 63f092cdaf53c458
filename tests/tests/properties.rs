//! Properties of the advisor over generated trees.

use banns_advisor::MarriageAdvisor;
use banns_core::{Impediment, PersonId, Verdict};
use banns_graph::FamilyTree;
use banns_name::{full_name, FullName};
use banns_tests::gen::{grow, GrowthPlan};
use banns_traverse::for_each_reachable;
use pretty_assertions::assert_eq;

const SEEDS: [u64; 4] = [1, 7, 42, 1337];

/// A name no generated person can carry.
const OUTSIDER: &str = "Zz Unseen";

fn plans() -> impl Iterator<Item = GrowthPlan> {
    SEEDS.into_iter().map(|seed| GrowthPlan {
        seed,
        generations: 4,
        max_children: 3,
    })
}

fn reachable_names(tree: &FamilyTree, root: PersonId) -> Vec<(PersonId, String)> {
    let mut out = Vec::new();
    for_each_reachable(tree, root, |id| {
        if let Some(person) = tree.get_person(id) {
            out.push((id, full_name(tree, person)));
        }
    });
    out
}

fn advise(tree: &FamilyTree, root: PersonId, first: &str, second: &str) -> Verdict {
    let advisor = MarriageAdvisor::new(
        tree,
        FullName::parse(first).unwrap(),
        FullName::parse(second).unwrap(),
    );
    advisor.advise(root)
}

fn advise_strict(tree: &FamilyTree, root: PersonId, first: &str, second: &str) -> Verdict {
    let advisor = MarriageAdvisor::new(
        tree,
        FullName::parse(first).unwrap(),
        FullName::parse(second).unwrap(),
    );
    advisor.advise_strict(root)
}

#[test]
fn the_walk_and_the_resolver_are_reproducible() {
    for plan in plans() {
        let a = grow(&plan).unwrap();
        let b = grow(&plan).unwrap();
        assert_eq!(
            reachable_names(&a.tree, a.root),
            reachable_names(&b.tree, b.root),
            "seed {}",
            plan.seed
        );
    }
}

#[test]
fn the_walk_visits_nobody_twice_and_every_name_resolves() {
    for plan in plans() {
        let grown = grow(&plan).unwrap();
        let names = reachable_names(&grown.tree, grown.root);

        let ids: std::collections::HashSet<PersonId> =
            names.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), names.len(), "seed {}", plan.seed);

        // Two tokens each: the fallback surname covers everyone.
        for (_, name) in &names {
            assert_eq!(name.split_whitespace().count(), 2, "{:?}", name);
        }
    }
}

#[test]
fn repeated_queries_agree() {
    for plan in plans() {
        let grown = grow(&plan).unwrap();
        let names = reachable_names(&grown.tree, grown.root);

        for window in names.windows(2) {
            let (a, b) = (&window[0].1, &window[1].1);
            let once = advise(&grown.tree, grown.root, a, b);
            let again = advise(&grown.tree, grown.root, a, b);
            assert_eq!(once, again, "seed {}: {} / {}", plan.seed, a, b);
        }
    }
}

#[test]
fn argument_order_never_changes_the_verdict() {
    // Which side gets screened is fixed by walk order, not by the order
    // the candidates were given in, so swapping them changes nothing.
    for plan in plans() {
        let grown = grow(&plan).unwrap();
        let names = reachable_names(&grown.tree, grown.root);

        for window in names.windows(2) {
            let (a, b) = (&window[0].1, &window[1].1);
            assert_eq!(
                advise(&grown.tree, grown.root, a, b),
                advise(&grown.tree, grown.root, b, a),
                "seed {}: {} / {}",
                plan.seed,
                a,
                b
            );
            assert_eq!(
                advise_strict(&grown.tree, grown.root, a, b),
                advise_strict(&grown.tree, grown.root, b, a),
                "seed {}: strict {} / {}",
                plan.seed,
                a,
                b
            );
        }
    }
}

#[test]
fn a_married_match_refuses_no_matter_who_the_other_is() {
    for plan in plans() {
        let grown = grow(&plan).unwrap();

        for (id, name) in reachable_names(&grown.tree, grown.root) {
            let verdict = advise(&grown.tree, grown.root, &name, OUTSIDER);
            if grown.tree.spouse_of(id).is_some() {
                assert_eq!(
                    verdict,
                    Verdict::Disallowed(Impediment::AlreadyMarried),
                    "seed {}: {}",
                    plan.seed,
                    name
                );
            } else {
                // An unmarried match screens an unknown name against real
                // relatives only, so nothing can catch.
                assert_eq!(verdict, Verdict::Allowed, "seed {}: {}", plan.seed, name);
            }
        }
    }
}

#[test]
fn no_decision_exactly_when_no_candidate_is_reachable() {
    for plan in plans() {
        let grown = grow(&plan).unwrap();

        assert_eq!(
            advise(&grown.tree, grown.root, "Xx Unseen", OUTSIDER),
            Verdict::NoDecision
        );

        for (_, name) in reachable_names(&grown.tree, grown.root) {
            assert_ne!(
                advise(&grown.tree, grown.root, &name, OUTSIDER),
                Verdict::NoDecision,
                "seed {}: {}",
                plan.seed,
                name
            );
        }
    }
}

#[test]
fn strict_mode_never_allows_on_one_located_side() {
    for plan in plans() {
        let grown = grow(&plan).unwrap();

        for (id, name) in reachable_names(&grown.tree, grown.root) {
            let verdict = advise_strict(&grown.tree, grown.root, &name, OUTSIDER);
            if grown.tree.spouse_of(id).is_some() {
                assert_eq!(
                    verdict,
                    Verdict::Disallowed(Impediment::AlreadyMarried),
                    "seed {}: {}",
                    plan.seed,
                    name
                );
            } else {
                assert_eq!(verdict, Verdict::NoDecision, "seed {}: {}", plan.seed, name);
            }
        }
    }
}
