//! Marriage advice over the demo family tree.
//!
//! This is the entry point for the `banns` binary.

use std::env;
use std::process;

use banns_cli::App;

const USAGE: &str = "\
Usage: banns [OPTIONS] [FIRST SECOND]

Ask whether two people may marry under the family tree rules. With no
candidate names the program prompts for them on stdin. Candidates are
full names, quoted (\"Robert Smith\") or given as four bare words.

Options:
  -s, --strict    require both candidates to clear the checks
      --names     list every reachable person's resolved name
      --children  list every reachable person's children
  -v, --verbose   debug logging (same as RUST_LOG=debug)
  -h, --help      show this help";

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut verbose = false;
    let mut strict = false;
    let mut names = false;
    let mut children = false;
    let mut candidates: Vec<String> = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-s" | "--strict" => strict = true,
            "--names" => names = true,
            "--children" => children = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
            other => candidates.push(other.to_string()),
        }
    }

    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error building the family tree: {}", e);
            process::exit(1);
        }
    };
    app.set_strict(strict);

    if names {
        print!("{}", app.names());
    }
    if children {
        print!("{}", app.children());
    }

    let pair = match candidates.len() {
        0 => None,
        2 => Some((candidates[0].clone(), candidates[1].clone())),
        4 => Some((candidates[..2].join(" "), candidates[2..].join(" "))),
        n => {
            eprintln!("Expected two candidate names, got {}", n);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    match pair {
        Some((first, second)) => match app.advise(&first, &second) {
            Ok(report) => println!("{}", report),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        // Listing flags alone do not start a prompt session.
        None if names || children => {}
        None => {
            if let Err(e) = app.interactive() {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
