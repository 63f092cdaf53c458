//! Query outcomes.
//!
//! Every marriage query terminates in exactly one `Verdict`. A disallowed
//! verdict carries the impediment that produced it; the impediment is
//! diagnostic detail, the rendered outcome for callers is the verdict alone.

use std::fmt;

/// One of the six relationship classes that rule a marriage out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impediment {
    /// The matched person already has a spouse.
    AlreadyMarried,
    /// The other candidate is a child of the matched person's mother.
    Siblings,
    /// The other candidate is a sibling of the matched person's father or mother.
    AuntOrUncle,
    /// The other candidate is a child of one of the matched person's siblings.
    NieceOrNephew,
    /// The other candidate is a child of one of the matched person's aunts or uncles.
    FirstCousins,
    /// The other candidate is a parent or child of the matched person.
    ParentOrChild,
}

impl fmt::Display for Impediment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Impediment::AlreadyMarried => "already married",
            Impediment::Siblings => "siblings",
            Impediment::AuntOrUncle => "aunt or uncle",
            Impediment::NieceOrNephew => "niece or nephew",
            Impediment::FirstCousins => "first cousins",
            Impediment::ParentOrChild => "parent or child",
        };
        write!(f, "{}", s)
    }
}

/// Terminal outcome of a marriage query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The matched person cleared every check.
    Allowed,
    /// A check found the named impediment.
    Disallowed(Impediment),
    /// The walk finished without locating a candidate.
    NoDecision,
}

impl Verdict {
    /// Returns true if the marriage is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }

    /// Returns true if the marriage is disallowed.
    pub fn is_disallowed(&self) -> bool {
        matches!(self, Verdict::Disallowed(_))
    }

    /// The impediment, if this verdict is a disallowance.
    pub fn impediment(&self) -> Option<Impediment> {
        match self {
            Verdict::Disallowed(imp) => Some(*imp),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Allowed => write!(f, "allowed"),
            Verdict::Disallowed(imp) => write!(f, "disallowed ({})", imp),
            Verdict::NoDecision => write!(f, "no decision"),
        }
    }
}
