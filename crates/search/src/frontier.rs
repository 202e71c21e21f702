use geospat_core::Distance;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::hash::Hash;

/// Min-priority queue keyed by a floating-point score.
///
/// # Ordering
///
/// The smallest key comes out first. Equal keys come out in insertion order,
/// so a search driven by this queue is deterministic across runs. Keys are
/// compared with [`f64::total_cmp`].
///
/// # Decrease-key
///
/// Each item has at most one live entry. Pushing an item that is already
/// queued with a strictly better key supersedes the old entry, which stays in
/// the heap but is discarded when it surfaces. Pushing with a worse or equal
/// key is ignored. Once popped, an item may be pushed again.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    live: HashMap<T, (Distance, u64)>,
    ticket: u64,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    key: Distance,
    ticket: u64,
    item: T,
}

impl<T> Frontier<T>
where
    T: Copy + Eq + Hash,
{
    /// Queue `item` at `key`. Returns false if an equal or better entry
    /// for the same item is already queued.
    pub fn push(&mut self, item: T, key: Distance) -> bool {
        match self.live.get(&item) {
            Some((best, _)) if key.total_cmp(best) != Ordering::Less => false,
            _ => {
                self.ticket += 1;
                self.live.insert(item, (key, self.ticket));
                self.heap.push(Entry {
                    key,
                    ticket: self.ticket,
                    item,
                });
                true
            }
        }
    }
    /// Remove and return the live item with the smallest key.
    pub fn pop(&mut self) -> Option<(T, Distance)> {
        self.prune();
        let entry = self.heap.pop()?;
        self.live.remove(&entry.item);
        Some((entry.item, entry.key))
    }
    /// The live item with the smallest key, without removing it.
    pub fn peek(&mut self) -> Option<(T, Distance)> {
        self.prune();
        self.heap.peek().map(|e| (e.item, e.key))
    }
    /// Number of live items.
    pub fn len(&self) -> usize {
        self.live.len()
    }
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
    /// Whether `item` currently has a live entry.
    pub fn contains(&self, item: &T) -> bool {
        self.live.contains_key(item)
    }
    /// Drop superseded entries sitting at the top of the heap.
    fn prune(&mut self) {
        while let Some(top) = self.heap.peek() {
            match self.live.get(&top.item) {
                Some((_, ticket)) if *ticket == top.ticket => break,
                _ => {
                    self.heap.pop();
                }
            }
        }
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            ticket: 0,
        }
    }
}

/// Reversed so that `BinaryHeap` (a max-heap) yields the smallest key,
/// then the oldest ticket.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.ticket.cmp(&self.ticket))
    }
}
impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Eq for Entry<T> {}
impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
