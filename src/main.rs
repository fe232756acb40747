use std::path::PathBuf;
use std::str::FromStr;

use home::home_dir;
use lazy_static::lazy_static;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use structopt::StructOpt;

use etude::playground::{Outcome, Playground};

mod demo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

lazy_static! {
    static ref HISTORY_FILE: PathBuf = match home_dir() {
        Some(mut p) => {
            p.push(".etude_history");
            p
        }
        None => {
            eprintln!("could not locate home dir, saving history to current dir");
            PathBuf::from_str(".etude_history").unwrap()
        }
    };
}

#[derive(StructOpt, Debug)]
struct Opt {
    /// Demos to run, see --list
    #[structopt(name = "DEMO")]
    demos: Vec<String>,
    /// Open the stack playground after running demos
    #[structopt(short, long)]
    interactive: bool,
    /// List the available demos
    #[structopt(short, long)]
    list: bool,
}

fn main() {
    let Opt {
        demos,
        interactive,
        list,
    } = Opt::from_args();

    if list {
        for (name, _) in demo::DEMOS {
            println!("{}", name);
        }
        return;
    }

    for name in &demos {
        match demo::find(name) {
            Some(run) => {
                println!("[{}]", name);
                run();
            }
            None => {
                eprintln!("no such demo: {}, try --list", name);
                std::process::exit(1);
            }
        }
    }

    if interactive || demos.is_empty() {
        repl();
    }
}

fn repl() {
    let mut playground = Playground::new();
    println!(
        "etude v{} stack playground (capacity {})",
        VERSION,
        playground.capacity()
    );
    println!("type help for commands");
    let mut rl = Editor::<()>::new();
    let _ = rl.load_history(&*HISTORY_FILE);

    loop {
        let input = match readline(&mut rl, ">>> ") {
            Some(input) => input,
            None => break,
        };
        if input.trim().is_empty() {
            continue;
        }
        match playground.eval_line(&input) {
            Ok(outcomes) => {
                for outcome in &outcomes {
                    println!("{}", outcome);
                }
                if outcomes.contains(&Outcome::Farewell) {
                    break;
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn readline(rl: &mut Editor<()>, prompt: &str) -> Option<String> {
    let input = match rl.readline(prompt) {
        Ok(input) => input,
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => return None,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    rl.add_history_entry(&input);
    if let Err(e) = rl.save_history(&*HISTORY_FILE) {
        eprintln!("Error saving history file: {}", e)
    }
    Some(input)
}
