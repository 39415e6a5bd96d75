//! Node storage for a single list.
//!
//! Every node of a list lives in one slot of a growable array owned by that
//! list. Released slots are threaded into a free list through their `next`
//! field and handed out again by later insertions.

use crate::prelude::*;
use crate::Error;

#[derive(Clone, Copy)]
pub(crate) struct Node {
  pub(crate) value: i32,
  pub(crate) next: Option<usize>,
}

pub(crate) struct Arena<A: Allocator> {
  nodes: Vec<Node, A>,
  free: Option<usize>,
}

/// Walks a chain of slots starting at some link, yielding slot indices.

pub(crate) struct Chain<'a, A: Allocator> {
  arena: &'a Arena<A>,
  link: Option<usize>,
}

#[inline(never)]
#[cold]
fn grow_failed<T, E: Fail>(len: usize) -> Result<T, E> {
  // The vector may have asked for more than one extra slot, but this is the
  // smallest layout that would have satisfied the request.

  match Layout::array::<Node>(len + 1) {
    Ok(layout) => E::fail(Error::ParentAllocatorFailed(layout)),
    Err(_) => E::fail(Error::TooLarge),
  }
}

impl<A: Allocator> Arena<A> {
  #[inline(always)]
  pub(crate) fn new_in(allocator: A) -> Self {
    Self {
      nodes: Vec::new_in(allocator),
      free: None,
    }
  }

  #[inline(always)]
  pub(crate) fn allocator(&self) -> &A {
    self.nodes.allocator()
  }

  #[inline(always)]
  pub(crate) fn node(&self, x: usize) -> &Node {
    &self.nodes[x]
  }

  #[inline(always)]
  pub(crate) fn node_mut(&mut self, x: usize) -> &mut Node {
    &mut self.nodes[x]
  }

  /// Stores a new node, reusing a released slot when one is available.

  pub(crate) fn alloc<E: Fail>(&mut self, value: i32, next: Option<usize>) -> Result<usize, E> {
    let node = Node { value, next };

    if let Some(x) = self.free {
      self.free = self.nodes[x].next;
      self.nodes[x] = node;
      return Ok(x);
    }

    if self.nodes.try_reserve(1).is_err() {
      return grow_failed(self.nodes.len());
    }

    let x = self.nodes.len();
    self.nodes.push(node);
    Ok(x)
  }

  /// Releases a slot that is no longer part of any chain.

  pub(crate) fn free(&mut self, x: usize) {
    self.nodes[x].next = self.free;
    self.free = Some(x);
  }

  /// Releases every slot at once.

  pub(crate) fn reset(&mut self) {
    self.nodes.clear();
    self.free = None;
  }

  #[inline(always)]
  pub(crate) fn chain(&self, link: Option<usize>) -> Chain<'_, A> {
    Chain { arena: self, link }
  }

  #[cfg(test)]
  fn slots(&self) -> usize {
    self.nodes.len()
  }
}

impl<'a, A: Allocator> Iterator for Chain<'a, A> {
  type Item = usize;

  #[inline(always)]
  fn next(&mut self) -> Option<usize> {
    let x = self.link?;
    self.link = self.arena.node(x).next;
    Some(x)
  }
}
