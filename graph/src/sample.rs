//! Reference family tree shared by the demo binary and the test suites.

use crate::{BuildResult, FamilyTree, TreeBuilder};
use banns_core::PersonId;

/// Build the four-generation Smith/Johnson tree.
///
/// James Smith × Mary Smith have Patricia, Robert and Linda. Patricia
/// marries William Johnson; their children are Michael and Barbara. Michael
/// marries Jennifer; their daughter is Susan. Returns the tree and the
/// traversal root (Mary, the matriarch).
///
/// Jennifer has no recorded parents, so Susan's branch hangs off a woman no
/// children list reaches: from Mary the walk visits Mary, Patricia, Michael,
/// Barbara, Robert and Linda only.
pub fn four_generations() -> BuildResult<(FamilyTree, PersonId)> {
    let mut b = TreeBuilder::new();

    let james = b.add_man("James", "Smith").done()?;
    let mary = b.add_woman("Mary").done()?;
    b.marry(james, mary)?;

    let patricia = b.add_woman("Patricia").child_of(james, mary).done()?;
    let _robert = b.add_man("Robert", "Smith").child_of(james, mary).done()?;
    let _linda = b.add_woman("Linda").child_of(james, mary).done()?;

    let william = b.add_man("William", "Johnson").done()?;
    b.marry(william, patricia)?;

    let michael = b.add_man("Michael", "Johnson").child_of(william, patricia).done()?;
    let _barbara = b.add_woman("Barbara").child_of(william, patricia).done()?;

    let jennifer = b.add_woman("Jennifer").done()?;
    b.marry(michael, jennifer)?;

    let _susan = b.add_woman("Susan").child_of(michael, jennifer).done()?;

    let tree = b.finish()?;
    Ok((tree, mary))
}
