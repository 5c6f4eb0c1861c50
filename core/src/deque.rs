//! Indexable double-ended queue backing the employee collections.
//!
//! A doubly linked node chain stored in an arena: nodes live in a slab
//! of stable integer slots with a free list, and link to each other by
//! slot index instead of by pointer. Push/pop at either end is O(1);
//! indexed access walks the chain from whichever end is nearer, so
//! `get`, `insert_at` and `remove_at` are O(min(i, n - i)).
//!
//! RULE: out-of-range indexes and pops from an empty deque are contract
//! violations surfaced as errors, never panics. The manager always
//! checks size/membership before mutating, so its own logic cannot
//! trigger them.

use crate::error::{CoreError, CoreResult};

/// Which end `resize` grows or shrinks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    /// Operate on the back of the deque.
    Forward,
    /// Operate on the front of the deque.
    Reverse,
}

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A double-ended queue with O(min(i, n-i)) access at arbitrary positions.
///
/// Not `Clone`: the node chain has a single owner.
pub struct IndexedDeque<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for IndexedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IndexedDeque<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) -> Node<T> {
        let node = self.slots[slot].take().expect("slot must be occupied");
        self.free.push(slot);
        node
    }

    fn node(&self, slot: usize) -> &Node<T> {
        self.slots[slot].as_ref().expect("slot must be occupied")
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        self.slots[slot].as_mut().expect("slot must be occupied")
    }

    /// Slot of the i-th element, walking from the nearer end.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            let mut slot = self.head?;
            for _ in 0..index {
                slot = self.node(slot).next?;
            }
            Some(slot)
        } else {
            let mut slot = self.tail?;
            for _ in index..self.len - 1 {
                slot = self.node(slot).prev?;
            }
            Some(slot)
        }
    }

    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.node_mut(old).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.node_mut(old).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    pub fn pop_back(&mut self) -> CoreResult<T> {
        let slot = self.tail.ok_or(CoreError::EmptyContainer)?;
        let node = self.release(slot);
        self.tail = node.prev;
        match self.tail {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.head = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn pop_front(&mut self) -> CoreResult<T> {
        let slot = self.head.ok_or(CoreError::EmptyContainer)?;
        let node = self.release(slot);
        self.head = node.next;
        match self.head {
            Some(next) => self.node_mut(next).prev = None,
            None => self.tail = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Insert at position `index`, valid for 0 <= index <= len.
    /// The ends delegate to the O(1) pushes; anywhere else splices a
    /// new node between its neighbours.
    pub fn insert_at(&mut self, index: usize, value: T) -> CoreResult<()> {
        if index > self.len {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let after = self.slot_at(index).expect("interior index checked above");
        let before = self.node(after).prev.expect("interior node has a prev");
        let slot = self.alloc(Node {
            value,
            prev: Some(before),
            next: Some(after),
        });
        self.node_mut(before).next = Some(slot);
        self.node_mut(after).prev = Some(slot);
        self.len += 1;
        Ok(())
    }

    /// Remove the element at `index`, valid for 0 <= index < len.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<T> {
        if index >= self.len {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return self.pop_front();
        }
        if index == self.len - 1 {
            return self.pop_back();
        }
        let slot = self.slot_at(index).expect("interior index checked above");
        let node = self.release(slot);
        let before = node.prev.expect("interior node has a prev");
        let after = node.next.expect("interior node has a next");
        self.node_mut(before).next = Some(after);
        self.node_mut(after).prev = Some(before);
        self.len -= 1;
        Ok(node.value)
    }

    pub fn get(&self, index: usize) -> CoreResult<&T> {
        self.slot_at(index)
            .map(|slot| &self.node(slot).value)
            .ok_or(CoreError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    pub fn get_mut(&mut self, index: usize) -> CoreResult<&mut T> {
        let len = self.len;
        match self.slot_at(index) {
            Some(slot) => Ok(&mut self.node_mut(slot).value),
            None => Err(CoreError::IndexOutOfRange { index, len }),
        }
    }

    pub fn front(&self) -> CoreResult<&T> {
        self.head
            .map(|slot| &self.node(slot).value)
            .ok_or(CoreError::EmptyContainer)
    }

    pub fn back(&self) -> CoreResult<&T> {
        self.tail
            .map(|slot| &self.node(slot).value)
            .ok_or(CoreError::EmptyContainer)
    }

    /// Remove all elements, dropping the contained values.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
        self.slots.clear();
        self.free.clear();
    }

    /// Iterate front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            slot: self.head,
        }
    }
}

impl<T: Clone> IndexedDeque<T> {
    /// Grow by pushing clones of `default` at the chosen end, or shrink
    /// by popping from that end, until the deque holds `new_len` values.
    pub fn resize(&mut self, new_len: usize, default: &T, direction: ResizeDirection) {
        while self.len < new_len {
            match direction {
                ResizeDirection::Forward => self.push_back(default.clone()),
                ResizeDirection::Reverse => self.push_front(default.clone()),
            }
        }
        while self.len > new_len {
            let popped = match direction {
                ResizeDirection::Forward => self.pop_back(),
                ResizeDirection::Reverse => self.pop_front(),
            };
            debug_assert!(popped.is_ok());
        }
    }
}

pub struct Iter<'a, T> {
    deque: &'a IndexedDeque<T>,
    slot: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = self.slot?;
        let node = self.deque.node(slot);
        self.slot = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a IndexedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
