//! Application state and query execution.

use std::io::{self, BufRead, Write};

use banns_advisor::MarriageAdvisor;
use banns_core::PersonId;
use banns_graph::{sample, BuildResult, FamilyTree};
use banns_name::{FullName, NameError};
use banns_report::{children_listing, name_listing, reason_line, verdict_line};
use log::info;

/// One loaded family tree plus the query options.
pub struct App {
    tree: FamilyTree,
    root: PersonId,
    strict: bool,
}

impl App {
    /// Create an app over the built-in four-generation demo tree.
    pub fn new() -> BuildResult<Self> {
        let (tree, root) = sample::four_generations()?;
        Ok(Self {
            tree,
            root,
            strict: false,
        })
    }

    /// Switch to the two-sided screening mode.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Answer one marriage query, returning the printable report.
    pub fn advise(&self, first: &str, second: &str) -> Result<String, NameError> {
        let first = FullName::parse(first)?;
        let second = FullName::parse(second)?;
        let advisor = MarriageAdvisor::new(&self.tree, first, second);
        let verdict = if self.strict {
            advisor.advise_strict(self.root)
        } else {
            advisor.advise(self.root)
        };
        info!("verdict: {}", verdict);

        let mut report = verdict_line(&verdict);
        if let Some(reason) = reason_line(&verdict) {
            report.push('\n');
            report.push_str(&reason);
        }
        Ok(report)
    }

    /// The resolved name of every reachable person, one per line.
    pub fn names(&self) -> String {
        name_listing(&self.tree, self.root)
    }

    /// Every reachable person's children, one line per person.
    pub fn children(&self) -> String {
        children_listing(&self.tree, self.root)
    }

    /// Prompt for two candidates on stdin and print the verdict.
    pub fn interactive(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        print!("Enter one marriage candidate:  ");
        stdout.flush()?;
        let mut first = String::new();
        if stdin.lock().read_line(&mut first)? == 0 {
            return Ok(()); // EOF
        }

        print!("Enter another marriage candidate:  ");
        stdout.flush()?;
        let mut second = String::new();
        if stdin.lock().read_line(&mut second)? == 0 {
            return Ok(());
        }

        match self.advise(first.trim(), second.trim()) {
            Ok(report) => println!("{}", report),
            Err(e) => eprintln!("Error: {}", e),
        }
        Ok(())
    }
}
