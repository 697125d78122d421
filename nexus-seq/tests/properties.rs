//! Randomized checks of list, stack, queue and priority queue behaviour.
//!
//! Every run uses fixed seeds so failures reproduce.

use std::collections::VecDeque;

use nexus_seq::{AllocCounter, FrontAction, LowestFirst, PriorityQueue, Queue, SeqList, Stack};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 4] = [1, 42, 12345, 99999];
const OPS: usize = 2_000;

// =============================================================================
// SeqList vs VecDeque model
// =============================================================================

#[test]
fn list_matches_deque_model() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let counter = AllocCounter::new();
        let mut list: SeqList<u32> = SeqList::with_counter(counter.clone());
        let mut model: VecDeque<u32> = VecDeque::new();

        for _ in 0..OPS {
            match rng.random_range(0..8) {
                0 => {
                    let v = rng.random();
                    list.push_front(v);
                    model.push_front(v);
                }
                1 | 2 => {
                    let v = rng.random();
                    list.push_back(v);
                    model.push_back(v);
                }
                3 => assert_eq!(list.pop_front(), model.pop_front()),
                4 if !model.is_empty() => {
                    assert_eq!(list.get_front(FrontAction::Retain), model[0]);
                }
                5 if !model.is_empty() => {
                    let i = rng.random_range(0..model.len());
                    assert_eq!(list.get_at(i), model[i]);
                }
                6 if !model.is_empty() => {
                    let i = rng.random_range(0..model.len());
                    let v = rng.random();
                    list.set_at(i, v);
                    model[i] = v;
                }
                7 if !model.is_empty() => {
                    let i = rng.random_range(0..model.len());
                    let j = rng.random_range(0..model.len());
                    list.swap(i, j);
                    model.swap(i, j);
                }
                _ => {}
            }

            assert_eq!(list.len(), model.len());
            assert_eq!(counter.live(), model.len() + 1);
        }

        assert!(list.iter().eq(model.iter()));
        assert!(list.iter().rev().eq(model.iter().rev()));

        list.destroy();
        assert_eq!(counter.live(), 0);
    }
}

#[test]
fn length_is_inserted_minus_removed() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut list: SeqList<u8> = SeqList::with_counter(AllocCounter::new());
    let (mut inserted, mut removed) = (0usize, 0usize);

    for _ in 0..OPS {
        if rng.random_bool(0.6) {
            list.push_back(0);
            inserted += 1;
        } else if list.pop_front().is_some() {
            removed += 1;
        }
        assert_eq!(list.len(), inserted - removed);
    }
}

#[test]
fn set_then_get_round_trips_at_every_index() {
    let mut list: SeqList<usize> = SeqList::with_counter(AllocCounter::new());
    list.extend(0..33);

    for i in 0..list.len() {
        list.set_at(i, i * 7);
        assert_eq!(list.get_at(i), i * 7);
    }
}

#[test]
fn double_swap_is_identity() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut list: SeqList<u32> = SeqList::with_counter(AllocCounter::new());
    list.extend(0..20);
    let before: Vec<_> = list.iter().copied().collect();

    for _ in 0..200 {
        let i = rng.random_range(0..20);
        let j = rng.random_range(0..20);
        list.swap(i, j);
        list.swap(i, j);
        assert!(list.iter().eq(before.iter()));
    }
}

#[test]
fn destroy_lowers_counter_by_len_plus_one() {
    let counter = AllocCounter::new();
    let mut keep: SeqList<u8> = SeqList::with_counter(counter.clone());
    keep.extend([1, 2]);

    for n in [0usize, 1, 2, 17] {
        let mut list: SeqList<usize> = SeqList::with_counter(counter.clone());
        list.extend(0..n);

        let before = counter.live();
        list.destroy();
        assert_eq!(before - counter.live(), n + 1);
    }

    assert_eq!(counter.live(), 3);
}

// =============================================================================
// Adapters
// =============================================================================

#[test]
fn stack_pops_in_reverse() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut stack = Stack::with_counter(AllocCounter::new());
        let pushed: Vec<u32> = (0..100).map(|_| rng.random()).collect();

        for &v in &pushed {
            stack.push(v);
        }
        let popped: Vec<_> = (0..pushed.len()).map(|_| stack.pop()).collect();

        assert!(popped.into_iter().eq(pushed.into_iter().rev()));
        assert!(stack.is_empty());
    }
}

#[test]
fn queue_dequeues_in_order() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut queue = Queue::with_counter(AllocCounter::new());
        let queued: Vec<u32> = (0..100).map(|_| rng.random()).collect();

        for &v in &queued {
            queue.enqueue(v);
        }
        let out: Vec<_> = (0..queued.len()).map(|_| queue.dequeue()).collect();

        assert_eq!(out, queued);
        assert!(queue.is_empty());
    }
}

#[test]
fn stack_sort_matches_stable_sort() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut stack = Stack::with_counter(AllocCounter::new());
        for id in 0..60u32 {
            stack.push((rng.random_range(0..10u8), id));
        }

        stack.sort_by_key(|task| task.0);

        let bottom_up: Vec<_> = stack.iter().rev().copied().collect();
        assert!(bottom_up.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(bottom_up.len(), 60);

        let mut ids: Vec<_> = bottom_up.iter().map(|t| t.1).collect();
        ids.sort_unstable();
        assert!(ids.into_iter().eq(0..60));
    }
}

#[test]
fn priority_queue_interleaved_is_sorted_and_stable() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let counter = AllocCounter::new();
        let mut pq = PriorityQueue::with_counter(
            LowestFirst::by(|task: &(u8, u32)| task.0),
            counter.clone(),
        );

        let mut next_id = 0u32;
        let mut out = Vec::new();

        for _ in 0..OPS {
            if rng.random_bool(0.55) {
                pq.enqueue((rng.random_range(1..=4), next_id));
                next_id += 1;
            } else if let Some(task) = pq.try_dequeue() {
                out.push(task);
            }

            // (rank, id) strictly increases: ranks never decrease, ties in arrival order
            let snapshot: Vec<_> = pq.iter().copied().collect();
            assert!(snapshot.windows(2).all(|w| w[0] < w[1]), "{snapshot:?}");
        }

        while let Some(task) = pq.try_dequeue() {
            out.push(task);
        }
        assert_eq!(out.len(), next_id as usize);

        pq.destroy();
        assert_eq!(counter.live(), 0);
    }
}

#[test]
fn priority_queue_drains_in_rank_order() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut pq = PriorityQueue::with_counter(
        LowestFirst::by(|task: &(u8, u32)| task.0),
        AllocCounter::new(),
    );

    let mut expected = Vec::new();
    for id in 0..200u32 {
        let task = (rng.random_range(0..8u8), id);
        pq.enqueue(task);
        expected.push(task);
    }
    // Vec::sort_by_key is stable, so ties stay in enqueue order
    expected.sort_by_key(|task| task.0);

    let out: Vec<_> = (0..expected.len()).map(|_| pq.dequeue()).collect();
    assert_eq!(out, expected);
}
