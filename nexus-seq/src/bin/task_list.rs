//! Linked-list walkthrough over a task file.
//!
//! Loads the tasks at the front, then again at the back, mirror-swaps the
//! second list and removes tasks from the front, printing the list and the
//! live allocation count after each step.
//!
//! Run: cargo run --features demo --bin task_list -- -i tasks.txt [-r 2]

use std::process;

mod common;

use common::{Task, load_tasks};
use getopts::Options;
use nexus_seq::{AllocCounter, FrontAction, SeqList};

fn print_list(label: &str, list: &SeqList<Task>) {
    println!(
        "{label} ({} tasks, {} live allocations)",
        list.len(),
        AllocCounter::global().live()
    );
    for task in list {
        println!("  {:>4}  {}", task.number, task.name);
    }
}

fn run(tasks: &[Task], removals: usize) {
    let mut list: SeqList<Task> = SeqList::new();
    for task in tasks {
        list.push_front(task.clone());
    }
    print_list("Loaded at front", &list);
    list.destroy();
    println!("After destroy: {} live allocations", AllocCounter::global().live());

    let mut list: SeqList<Task> = SeqList::new();
    for task in tasks {
        list.push_back(task.clone());
    }
    print_list("Loaded at back", &list);

    let len = list.len();
    for i in 0..len / 2 {
        list.swap(i, len - i - 1);
    }
    print_list("Mirror swapped", &list);

    for _ in 0..removals.min(list.len()) {
        let task = list.get_front(FrontAction::Delete);
        println!("Removed {} {}", task.number, task.name);
    }
    print_list("After removal", &list);

    list.destroy();
    println!("After destroy: {} live allocations", AllocCounter::global().live());
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut opts = Options::new();
    opts.optopt("i", "input", "task file (defaults to stdin)", "FILE");
    opts.optopt("r", "remove", "tasks to remove from the front (default 2)", "N");
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

    let removals = match matches.opt_str("r").map(|r| r.parse::<usize>()) {
        None => 2,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid --remove value: {e}");
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

    run(&tasks, removals);
}
