//! Frontier containers: FIFO, LIFO and priority-ordered.
//!
//! Every frontier tracks the states it currently holds so the driver can
//! skip children that are already queued. Only the search driver mutates a
//! frontier.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::sync::Arc;

use crate::node::Node;

/// An ordered container of generated-but-unexpanded nodes.
pub trait Frontier<S, A> {
    /// Offer a node with its ordering priority.
    ///
    /// FIFO and LIFO frontiers ignore `priority`. Returns `false` if the
    /// node was not queued because its state is already held (or, for a
    /// priority frontier, held at an equal or better priority).
    fn insert(&mut self, node: Arc<Node<S, A>>, priority: f64) -> bool;

    /// Remove the next node in strategy order.
    fn remove_next(&mut self) -> Option<Arc<Node<S, A>>>;

    /// Whether a node for `state` is currently queued.
    fn contains(&self, state: &S) -> bool;

    /// Number of queued nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of [`Frontier::len`].
    fn high_water(&self) -> usize;

    /// Superseded entries discarded on removal. Only a frontier that
    /// replaces queued entries has any.
    fn stale_discarded(&self) -> u64 {
        0
    }
}

/// First-in first-out frontier (breadth-first order).
pub struct FifoFrontier<S, A> {
    queue: VecDeque<Arc<Node<S, A>>>,
    queued: HashSet<S>,
    high_water: usize,
}

impl<S, A> FifoFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            high_water: 0,
        }
    }
}

impl<S, A> Default for FifoFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash, A> Frontier<S, A> for FifoFrontier<S, A> {
    fn insert(&mut self, node: Arc<Node<S, A>>, _priority: f64) -> bool {
        if !self.queued.insert(node.state().clone()) {
            return false;
        }
        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    fn remove_next(&mut self) -> Option<Arc<Node<S, A>>> {
        let node = self.queue.pop_front()?;
        self.queued.remove(node.state());
        Some(node)
    }

    fn contains(&self, state: &S) -> bool {
        self.queued.contains(state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Last-in first-out frontier (depth-first order).
pub struct LifoFrontier<S, A> {
    stack: Vec<Arc<Node<S, A>>>,
    queued: HashSet<S>,
    high_water: usize,
}

impl<S, A> LifoFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            queued: HashSet::new(),
            high_water: 0,
        }
    }
}

impl<S, A> Default for LifoFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash, A> Frontier<S, A> for LifoFrontier<S, A> {
    fn insert(&mut self, node: Arc<Node<S, A>>, _priority: f64) -> bool {
        if !self.queued.insert(node.state().clone()) {
            return false;
        }
        self.stack.push(node);
        self.high_water = self.high_water.max(self.stack.len());
        true
    }

    fn remove_next(&mut self) -> Option<Arc<Node<S, A>>> {
        let node = self.stack.pop()?;
        self.queued.remove(node.state());
        Some(node)
    }

    fn contains(&self, state: &S) -> bool {
        self.queued.contains(state)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// The priority ordering key: `(priority, sequence)`.
///
/// Lower priority first; ties broken by older insertion sequence so equal
/// priorities pop in FIFO order regardless of heap internals.
#[derive(Debug, Clone, Copy)]
pub struct PriorityKey {
    pub priority: f64,
    pub sequence: u64,
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// A heap entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<PriorityKey>` to get
/// min-heap behavior (lowest priority first).
struct HeapEntry<S, A> {
    key: Reverse<PriorityKey>,
    node: Arc<Node<S, A>>,
}

impl<S, A> PartialEq for HeapEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, A> Eq for HeapEntry<S, A> {}

impl<S, A> PartialOrd for HeapEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for HeapEntry<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority-ordered frontier (uniform-cost and A*).
///
/// Holds at most one live entry per state. Offering a state that is already
/// queued at a strictly worse priority replaces it: the new entry is pushed
/// and the old one is left in the heap as stale, to be discarded when it
/// surfaces.
pub struct PriorityFrontier<S, A> {
    heap: BinaryHeap<HeapEntry<S, A>>,
    /// State → key of its live heap entry.
    live: HashMap<S, PriorityKey>,
    next_sequence: u64,
    high_water: usize,
    stale_discarded: u64,
}

impl<S, A> PriorityFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_sequence: 0,
            high_water: 0,
            stale_discarded: 0,
        }
    }
}

impl<S, A> Default for PriorityFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash, A> Frontier<S, A> for PriorityFrontier<S, A> {
    fn insert(&mut self, node: Arc<Node<S, A>>, priority: f64) -> bool {
        if let Some(queued) = self.live.get(node.state()) {
            if queued.priority <= priority {
                return false;
            }
        }
        let key = PriorityKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.live.insert(node.state().clone(), key);
        self.heap.push(HeapEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.live.len());
        true
    }

    fn remove_next(&mut self) -> Option<Arc<Node<S, A>>> {
        while let Some(entry) = self.heap.pop() {
            let is_live = self
                .live
                .get(entry.node.state())
                .is_some_and(|key| key.sequence == entry.key.0.sequence);
            if is_live {
                self.live.remove(entry.node.state());
                return Some(entry.node);
            }
            self.stale_discarded += 1;
        }
        None
    }

    fn contains(&self, state: &S) -> bool {
        self.live.contains_key(state)
    }

    fn len(&self) -> usize {
        self.live.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }

    fn stale_discarded(&self) -> u64 {
        self.stale_discarded
    }
}
