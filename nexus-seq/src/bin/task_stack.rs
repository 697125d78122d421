//! Loads a task file onto a stack and sorts it by number or by name.
//!
//! Run: cargo run --features demo --bin task_stack -- -i tasks.txt -s name

use std::process;
use std::str::FromStr;

mod common;

use common::{Task, load_tasks};
use getopts::Options;
use nexus_seq::{AllocCounter, Stack};

#[derive(Debug, Clone, Copy)]
enum SortBy {
    Number,
    Name,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown sort key '{other}' (expected number or name)")),
        }
    }
}

fn print_stack(label: &str, stack: &Stack<Task>) {
    println!(
        "{label} ({} tasks, {} live allocations)",
        stack.len(),
        AllocCounter::global().live()
    );
    for task in stack {
        println!("  {:>4}  {}", task.number, task.name);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut opts = Options::new();
    opts.optopt("i", "input", "task file (defaults to stdin)", "FILE");
    opts.optopt("s", "sort", "sort key: number or name (default number)", "KEY");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage(&format!("Usage: {} [options]", args[0])));
        return;
    }

    let sort_by = match matches.opt_str("s").map(|s| s.parse::<SortBy>()) {
        None => SortBy::Number,
        Some(Ok(key)) => key,
        Some(Err(e)) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let tasks = match load_tasks(matches.opt_str("i").as_deref()) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("failed to read tasks: {e}");
            process::exit(1);
        }
    };

    let mut stack = Stack::new();
    for task in tasks {
        stack.push(task);
    }
    print_stack("Loaded", &stack);

    match sort_by {
        SortBy::Number => stack.sort_by_key(|t| t.number),
        SortBy::Name => stack.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    print_stack(&format!("Sorted by {sort_by:?}"), &stack);

    while let Some(task) = stack.try_pop() {
        println!("Popped {} {}", task.number, task.name);
    }

    stack.destroy();
    println!("After destroy: {} live allocations", AllocCounter::global().live());
}
