//! Doubly-linked sequential container with stack, queue and priority queue
//! adapters.
//!
//! One container, three views:
//!
//! ```text
//! SeqList<T>          - owns nodes, front/back insert, indexed read/write/swap
//!     │
//!     ├── Stack<T>            - push/pop at the front (LIFO)
//!     ├── Queue<T>            - enqueue at the back, dequeue at the front (FIFO)
//!     └── PriorityQueue<T, P> - Queue + stable insertion by an ordering P
//! ```
//!
//! The container never inspects its elements. Ordering is a capability the
//! priority queue receives at construction ([`Priority`]); the list itself
//! is pure mechanism.
//!
//! # Quick Start
//!
//! ```
//! use nexus_seq::{LowestFirst, PriorityQueue, Queue, Stack};
//!
//! let mut stack: Stack<u32> = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), 2);
//!
//! let mut queue: Queue<u32> = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), 1);
//!
//! let mut pq = PriorityQueue::new(LowestFirst::by(|task: &(u32, char)| task.0));
//! pq.enqueue((3, 'a'));
//! pq.enqueue((1, 'b'));
//! pq.enqueue((1, 'c'));
//! assert_eq!(pq.dequeue(), (1, 'b'));
//! assert_eq!(pq.dequeue(), (1, 'c'));
//! assert_eq!(pq.dequeue(), (3, 'a'));
//! ```
//!
//! # Node Storage
//!
//! Nodes live in an arena owned by the list and link to each other by key
//! rather than by pointer:
//!
//! ```text
//! Storage<T>          - insert -> Key, remove, get, get_pair_mut
//!     │
//!     ├── Arena<T, K>     - growable Vec with an intrusive free list (default)
//!     └── slab::Slab<T>   - feature `slab`
//! ```
//!
//! # Allocation Accounting
//!
//! Every list handle and node is registered with an [`AllocCounter`]. After
//! all containers are gone the counter reads zero again, which tests and the
//! demo binaries check.
//!
//! # Errors
//!
//! Emptiness and index preconditions panic with a descriptive message. The
//! `try_*` methods report the same conditions as `Option` or
//! [`OutOfBounds`] instead.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`
//! - `demo` - Build the `task_list`, `task_stack` and `task_queue` demo binaries

#![warn(missing_docs)]

pub mod counter;
pub mod error;
pub mod key;
pub mod list;
pub mod priority;
pub mod queue;
pub mod stack;
pub mod storage;

pub use counter::AllocCounter;
pub use error::OutOfBounds;
pub use key::Key;
pub use list::{FrontAction, Iter, ListNode, ListStorage, SeqList};
pub use priority::{Fifo, HighestFirst, LowestFirst, Priority, PriorityQueue};
pub use queue::Queue;
pub use stack::Stack;
pub use storage::{Arena, Storage};

#[cfg(feature = "slab")]
pub use list::SlabListStorage;
