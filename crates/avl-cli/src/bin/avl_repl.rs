//! `avl-repl` — interactive AVL tree shell over stdin/stdout.
//!
//! Reads one command per line, prints the reply, and keeps a single
//! tree for the lifetime of the process. Type `help` for the command
//! list; `quit` or end-of-input leaves the shell.

use std::io::{self, BufRead, Write};

use avl_cli::{Command, Session};

fn main() {
    let mut session = Session::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => session.eval(cmd),
            Err(e) => format!("error: {e}"),
        };
        if let Err(e) = writeln!(out, "{reply}") {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
