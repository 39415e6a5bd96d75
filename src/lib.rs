#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use crate::arena::Arena;
use crate::prelude::*;

pub use allocator_api2::alloc::AllocError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod arena;
mod prelude;
mod render;
mod sort;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list of `i32` values.
///
/// The nodes of a list are stored in an arena owned by the list and backed by
/// the allocator `A`. Nodes are never shared between lists.
///
/// The list does not cache its length. Every operation which needs a position
/// other than the front walks the chain from the first node.

pub struct List<A: Allocator = Global> {
  first: Option<usize>,
  arena: Arena<A>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub(crate) enum Error {
  ParentAllocatorFailed(Layout),
  TooLarge,
}

pub(crate) enum Panicked { }

pub(crate) trait Fail: Sized {
  fn fail<T>(_: Error) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
pub(crate) fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::ParentAllocatorFailed(layout) =>
        alloc::alloc::handle_alloc_error(layout),
      Error::TooLarge =>
        // The node arena would need more than `isize::MAX` bytes.
        panic!("intlist: attempted to grow a list beyond the addressable size!"),
    }
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Error) -> Result<T, Self> {
    Err(AllocError)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn from_slice<A, E>(values: &[i32], allocator: A) -> Result<List<A>, E>
where
  A: Allocator,
  E: Fail,
{
  let mut list = List::new_in(allocator);
  let mut tail = None;

  for &value in values {
    tail = Some(list.append(tail, value)?);
  }

  Ok(list)
}

fn push_front<A, E>(list: &mut List<A>, value: i32) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let x = list.arena.alloc(value, list.first)?;
  list.first = Some(x);
  Ok(())
}

fn push_back<A, E>(list: &mut List<A>, value: i32) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let tail = list.tail();
  let _: usize = list.append(tail, value)?;
  Ok(())
}

fn insert<A, E>(list: &mut List<A>, value: i32, index: usize) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  if index == 0 {
    return push_front(list, value);
  }

  let Some(p) = list.nth(index - 1) else {
    panic!("intlist: insertion index (is {index}) should be <= len");
  };

  let x = list.arena.alloc(value, list.arena.node(p).next)?;
  list.arena.node_mut(p).next = Some(x);
  Ok(())
}

impl List<Global> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self::new_in(Global)
  }

  /// Creates a list holding the given values, in order, backed by the global
  /// allocator. An empty slice gives an empty list.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn from_slice(values: &[i32]) -> Self {
    unwrap(from_slice(values, Global))
  }

  /// Creates a list holding the given values, in order, backed by the global
  /// allocator.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_from_slice(values: &[i32]) -> Result<Self, AllocError> {
    from_slice(values, Global)
  }
}

impl<A: Allocator> List<A> {
  /// Creates an empty list whose nodes will be stored in `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self {
      first: None,
      arena: Arena::new_in(allocator),
    }
  }

  /// Creates a list holding the given values, in order, whose nodes are
  /// stored in `allocator`.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn from_slice_in(values: &[i32], allocator: A) -> Self {
    unwrap(from_slice(values, allocator))
  }

  /// Creates a list holding the given values, in order, whose nodes are
  /// stored in `allocator`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_from_slice_in(values: &[i32], allocator: A) -> Result<Self, AllocError> {
    from_slice(values, allocator)
  }

  /// A reference to the allocator backing the nodes.

  pub fn allocator(&self) -> &A {
    self.arena.allocator()
  }

  /// Whether the list has no nodes.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.first.is_none()
  }

  /// The number of nodes, counted by walking the whole chain.

  pub fn size(&self) -> usize {
    self.chain().count()
  }

  /// Whether the list holds exactly `values`, in order.

  pub fn equals(&self, values: &[i32]) -> bool {
    let mut chain = self.chain();

    for &value in values {
      match chain.next() {
        Some(x) if self.arena.node(x).value == value => {}
        _ => return false,
      }
    }

    chain.next().is_none()
  }

  /// The value at `index`, or `0` if `index` is not less than the size of the
  /// list.

  pub fn get(&self, index: usize) -> i32 {
    match self.nth(index) {
      Some(x) => self.arena.node(x).value,
      None => {
        log::debug!("intlist: get at index {index} is out of range, returning 0");
        0
      }
    }
  }

  /// Overwrites the value at `index`. Does nothing if `index` is not less than
  /// the size of the list.

  pub fn set(&mut self, index: usize, value: i32) {
    match self.nth(index) {
      Some(x) => self.arena.node_mut(x).value = value,
      None => log::debug!("intlist: set at index {index} is out of range, ignoring"),
    }
  }

  /// The index of the first node holding `value`, or the size of the list if
  /// there is none.

  pub fn search(&self, value: i32) -> usize {
    let mut i = 0;

    for x in self.chain() {
      if self.arena.node(x).value == value {
        return i;
      }
      i = i + 1;
    }

    i
  }

  /// Whether every value is less than or equal to its successor.

  pub fn is_sorted(&self) -> bool {
    let mut chain = self.chain();

    let Some(x) = chain.next() else { return true; };

    let mut prev = self.arena.node(x).value;

    for x in chain {
      let value = self.arena.node(x).value;
      if prev > value {
        return false;
      }
      prev = value;
    }

    true
  }

  /// Adds a value at the front of the list.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn push_front(&mut self, value: i32) {
    unwrap(push_front(self, value))
  }

  /// Adds a value at the front of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged.

  pub fn try_push_front(&mut self, value: i32) -> Result<(), AllocError> {
    push_front(self, value)
  }

  /// Adds a value at the back of the list. This walks the whole chain.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn push_back(&mut self, value: i32) {
    unwrap(push_back(self, value))
  }

  /// Adds a value at the back of the list. This walks the whole chain.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged.

  pub fn try_push_back(&mut self, value: i32) -> Result<(), AllocError> {
    push_back(self, value)
  }

  /// Removes the first node.
  ///
  /// # Panics
  ///
  /// Panics if the list is empty.

  pub fn pop_front(&mut self) {
    let Some(x) = self.first else {
      panic!("intlist: pop_front on an empty list");
    };

    self.first = self.arena.node(x).next;
    self.release(x);
  }

  /// Removes the last node.
  ///
  /// # Panics
  ///
  /// Panics if the list is empty.

  pub fn pop_back(&mut self) {
    let Some(mut x) = self.first else {
      panic!("intlist: pop_back on an empty list");
    };

    let mut prev = None;

    while let Some(y) = self.arena.node(x).next {
      prev = Some(x);
      x = y;
    }

    match prev {
      None => self.first = None,
      Some(p) => self.arena.node_mut(p).next = None,
    }

    self.release(x);
  }

  /// Inserts a value so that it ends up at position `index`, shifting later
  /// values back by one. An `index` equal to the size of the list appends.
  ///
  /// # Panics
  ///
  /// Panics if `index` is greater than the size of the list, or on failure to
  /// allocate memory.

  pub fn insert(&mut self, value: i32, index: usize) {
    unwrap(insert(self, value, index))
  }

  /// Inserts a value so that it ends up at position `index`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged.
  ///
  /// # Panics
  ///
  /// Panics if `index` is greater than the size of the list.

  pub fn try_insert(&mut self, value: i32, index: usize) -> Result<(), AllocError> {
    insert(self, value, index)
  }

  /// Removes the node at position `index`, shifting later values forward by
  /// one.
  ///
  /// # Panics
  ///
  /// Panics if `index` is not less than the size of the list.

  pub fn remove(&mut self, index: usize) {
    if index == 0 {
      return self.pop_front();
    }

    let target = self.nth(index - 1).and_then(|p| self.arena.node(p).next.map(|x| (p, x)));

    let Some((p, x)) = target else {
      panic!("intlist: removal index (is {index}) should be < len");
    };

    self.arena.node_mut(p).next = self.arena.node(x).next;
    self.release(x);
  }

  /// Removes every node.

  pub fn clear(&mut self) {
    self.first = None;
    self.arena.reset();
  }

  ////////////////////////////////////////////////////////////////////////////
  //
  // crate-internal helpers
  //
  ////////////////////////////////////////////////////////////////////////////

  #[inline(always)]
  pub(crate) fn chain(&self) -> arena::Chain<'_, A> {
    self.arena.chain(self.first)
  }

  #[inline(always)]
  pub(crate) fn value(&self, x: usize) -> i32 {
    self.arena.node(x).value
  }

  pub(crate) fn front(&self) -> Option<i32> {
    self.first.map(|x| self.value(x))
  }

  pub(crate) fn tail(&self) -> Option<usize> {
    self.chain().last()
  }

  fn nth(&self, index: usize) -> Option<usize> {
    self.chain().nth(index)
  }

  /// Links a new node after `tail`, which must be the last node of the chain
  /// or `None` for an empty list, and returns the new tail.

  pub(crate) fn append<E: Fail>(&mut self, tail: Option<usize>, value: i32) -> Result<usize, E> {
    let x = self.arena.alloc(value, None)?;

    match tail {
      None => self.first = Some(x),
      Some(t) => self.arena.node_mut(t).next = Some(x),
    }

    Ok(x)
  }

  fn release(&mut self, x: usize) {
    if self.first.is_none() {
      self.arena.reset();
    } else {
      self.arena.free(x);
    }
  }
}

impl Default for List<Global> {
  fn default() -> Self {
    Self::new()
  }
}
