//! `rank-tree-repl`: drive a [`RankTreeSet`] with line commands.
//!
//! Reads one command per line from stdin and prints each reply to stdout.
//! Blank lines are skipped; malformed lines are reported on stderr and the
//! session continues. `EXIT` or end of input ends it.
//!
//! ```text
//! INSERT 5
//! Added: 5
//! FIND_KTH 1
//! 5
//! EXIT
//! ```

use std::io::{self, BufRead};

use rank_tree::RankTreeSet;
use rank_tree::command::{self, Command, Reply};

fn main() {
    let stdin = io::stdin();
    let mut set = RankTreeSet::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(1);
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(parsed) => match command::execute(&mut set, &parsed) {
                Reply::Message(message) => println!("{message}"),
                Reply::Exit => break,
            },
            Err(error) => eprintln!("{error}"),
        }
    }
}
