//! Priority-queue simulation with random task priorities.
//!
//! Enqueues a batch of tasks, then dequeues until the queue drains, enqueueing
//! one new task after every full burst of dequeues. A burst that empties the
//! queue ends the run. Each burst shrinks the queue by `burst - 1`, so the
//! burst must be at least 2. Runs once per ordering: fifo, lowest number first
//! and highest number first.
//!
//! Run: cargo run --features demo --bin task_queue -- [-n 15] [-b 3] [-p 4] [--seed 7]

use std::process;

use getopts::{Matches, Options};
use nexus_seq::{AllocCounter, Fifo, HighestFirst, LowestFirst, Priority, PriorityQueue};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
struct Task {
    id: u64,
    priority: u32,
}

fn priority(task: &Task) -> u32 {
    task.priority
}

#[derive(Debug, Clone, Copy)]
struct Config {
    initial: u32,
    burst: u32,
    max_priority: u32,
    seed: u64,
}

struct Spawner {
    rng: SmallRng,
    next_id: u64,
    max_priority: u32,
}

impl Spawner {
    fn spawn<P: Priority<Task>>(&mut self, pq: &mut PriorityQueue<Task, P>) {
        let task = Task {
            id: self.next_id,
            priority: self.rng.random_range(1..=self.max_priority),
        };
        self.next_id += 1;
        println!("  enqueue task {:>3} (priority {})", task.id, task.priority);
        pq.enqueue(task);
    }
}

/// Tasks enqueued and dequeued by one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Totals {
    enqueued: u64,
    dequeued: u64,
}

fn simulate<P: Priority<Task>>(label: &str, order: P, config: Config) -> Totals {
    let mut spawner = Spawner {
        rng: SmallRng::seed_from_u64(config.seed),
        next_id: 0,
        max_priority: config.max_priority,
    };
    let mut pq = PriorityQueue::new(order);
    let mut dequeued = 0;

    println!("{label}");
    for _ in 0..config.initial {
        spawner.spawn(&mut pq);
    }
    println!("  {} queued, {} live allocations", pq.len(), AllocCounter::global().live());

    let mut until_enqueue = config.burst;
    while let Some(task) = pq.try_dequeue() {
        dequeued += 1;
        println!("  dequeue task {:>3} (priority {})", task.id, task.priority);

        until_enqueue -= 1;
        if until_enqueue == 0 {
            spawner.spawn(&mut pq);
            until_enqueue = config.burst;
        }
    }

    pq.destroy();
    println!("  drained, {} live allocations", AllocCounter::global().live());

    Totals {
        enqueued: spawner.next_id,
        dequeued,
    }
}

fn parse_opt<T: std::str::FromStr>(matches: &Matches, name: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match matches.opt_str(name).map(|v| v.parse::<T>()) {
        None => default,
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            eprintln!("invalid --{name} value: {e}");
            process::exit(2);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut opts = Options::new();
    opts.optopt("n", "initial", "tasks enqueued up front (default 15)", "N");
    opts.optopt("b", "burst", "dequeues per enqueue (default 3)", "N");
    opts.optopt("p", "max-priority", "priorities are drawn from 1..=P (default 4)", "P");
    opts.optopt("", "seed", "random seed (default 7)", "SEED");
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

    let config = Config {
        initial: parse_opt(&matches, "initial", 15),
        burst: parse_opt(&matches, "burst", 3),
        max_priority: parse_opt(&matches, "max-priority", 4),
        seed: parse_opt(&matches, "seed", 7),
    };
    if config.max_priority == 0 {
        eprintln!("--max-priority must be at least 1");
        process::exit(2);
    }
    if config.burst < 2 {
        eprintln!("--burst must be at least 2 for the queue to drain");
        process::exit(2);
    }

    let runs = [
        simulate("fifo", Fifo, config),
        simulate("lowest number first", LowestFirst::by(priority), config),
        simulate("highest number first", HighestFirst::by(priority), config),
    ];
    for totals in runs {
        println!("{} enqueued, {} dequeued", totals.enqueued, totals.dequeued);
    }
}
