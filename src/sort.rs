//! Splitting, merging, and merge sort.
//!
//! These copy values into fresh nodes of the destination lists and release
//! the nodes of the source lists, so the lists involved may live in different
//! allocators.

use crate::prelude::*;

fn split<A, B, C, E>(list: &mut List<A>, out1: &mut List<B>, out2: &mut List<C>) -> Result<(), E>
where
  A: Allocator,
  B: Allocator,
  C: Allocator,
  E: Fail,
{
  let half = list.size() / 2;
  let mut t1 = out1.tail();
  let mut t2 = out2.tail();

  for (i, x) in list.chain().enumerate() {
    let value = list.value(x);
    if i < half {
      t1 = Some(out1.append(t1, value)?);
    } else {
      t2 = Some(out2.append(t2, value)?);
    }
  }

  list.clear();
  Ok(())
}

fn merge<A, B, C, E>(out: &mut List<A>, in1: &mut List<B>, in2: &mut List<C>) -> Result<(), E>
where
  A: Allocator,
  B: Allocator,
  C: Allocator,
  E: Fail,
{
  let mut tail = out.tail();

  while let (Some(a), Some(b)) = (in1.front(), in2.front()) {
    // Equal fronts are taken from `in2` first.

    if a < b {
      tail = Some(out.append(tail, a)?);
      in1.pop_front();
    } else {
      tail = Some(out.append(tail, b)?);
      in2.pop_front();
    }
  }

  while let Some(a) = in1.front() {
    tail = Some(out.append(tail, a)?);
    in1.pop_front();
  }

  while let Some(b) = in2.front() {
    tail = Some(out.append(tail, b)?);
    in2.pop_front();
  }

  Ok(())
}

impl<A: Allocator> List<A> {
  /// Moves the first `size / 2` values of this list, in order, to the back of
  /// `out1` and the remaining values to the back of `out2`. For an odd size
  /// `out2` receives the larger half. This list is left empty.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn split<B, C>(&mut self, out1: &mut List<B>, out2: &mut List<C>)
  where
    B: Allocator,
    C: Allocator,
  {
    unwrap(split(self, out1, out2))
  }

  /// Merges two ascending lists onto the back of this one, leaving both
  /// inputs empty. When the fronts of `in1` and `in2` are equal the value from
  /// `in2` is taken first.
  ///
  /// If either input is not sorted the order of the result is unspecified,
  /// though it still holds every value of both inputs.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn merge<B, C>(&mut self, in1: &mut List<B>, in2: &mut List<C>)
  where
    B: Allocator,
    C: Allocator,
  {
    unwrap(merge(self, in1, in2))
  }
}

impl<A: Allocator + Clone> List<A> {
  /// Sorts the list in ascending order with a top-down merge sort.
  ///
  /// The halves at each level are held in temporary lists backed by clones of
  /// this list's allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn merge_sort(&mut self) {
    let n = self.size();

    if n <= 1 {
      return;
    }

    log::trace!("intlist: merge_sort splitting {n} nodes");

    let mut part1 = List::new_in(self.allocator().clone());
    let mut part2 = List::new_in(self.allocator().clone());

    self.split(&mut part1, &mut part2);
    part1.merge_sort();
    part2.merge_sort();
    self.merge(&mut part1, &mut part2);
  }
}
