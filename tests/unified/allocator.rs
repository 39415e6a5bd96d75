use core::ptr::NonNull;
use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Layout;
use bumpalo::Bump;
use expect_test::expect;
use intlist::List;

#[derive(Clone, Copy)]
struct Refuse;

unsafe impl Allocator for Refuse {
  fn allocate(&self, _: Layout) -> Result<NonNull<[u8]>, AllocError> {
    Err(AllocError)
  }

  unsafe fn deallocate(&self, _: NonNull<u8>, _: Layout) {
  }
}

#[test]
fn test_list_in_bump() {
  let bump = Bump::new();
  let mut list = List::from_slice_in(&[9, 3, 7, 2, 4, 0, 8], &bump);

  list.insert(42, 3);
  list.remove(0);
  list.push_back(-1);

  expect!["[3, 7, 42, 2, 4, 0, 8, -1]"].assert_eq(&format!("{:?}", list));
  assert!(bump.allocated_bytes() > 0);
}

#[test]
fn test_merge_sort_in_bump() {
  let bump = Bump::new();
  let mut list = List::from_slice_in(&[8, 4, 1, 6, 10, 3, 0, 9, 5, 2, 7], &bump);

  list.merge_sort();

  expect!["[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]"].assert_eq(&format!("{:?}", list));
}

#[test]
fn test_split_and_merge_across_allocators() {
  let bump = Bump::new();
  let mut list = List::from_slice(&[4, 1, 3, 2]);
  let mut l1 = List::new_in(&bump);
  let mut l2 = List::new_in(&bump);

  list.split(&mut l1, &mut l2);
  l1.merge_sort();
  l2.merge_sort();

  let mut out = List::new_in(&bump);
  out.merge(&mut l1, &mut l2);

  assert!(list.is_empty());
  assert!(out.equals(&[1, 2, 3, 4]));
}

#[test]
fn test_allocation_failure() {
  assert!(List::try_from_slice_in(&[1, 2, 3], Refuse).is_err());

  let mut list = List::try_from_slice_in(&[], Refuse).unwrap();
  assert!(list.try_push_front(1).is_err());
  assert!(list.try_push_back(1).is_err());
  assert!(list.try_insert(1, 0).is_err());
  assert!(list.is_empty());

  // Out-of-range reads and writes never allocate.
  list.set(0, 1);
  assert!(list.get(0) == 0);
  assert!(list.search(1) == 0);
}

#[test]
fn test_global_allocation_succeeds() {
  let mut list = List::try_from_slice(&[1, 2]).unwrap();
  assert!(list.try_push_front(0).is_ok());
  assert!(list.try_push_back(3).is_ok());
  assert!(list.try_insert(9, 2).is_ok());
  expect!["0,1,9,2,3,"].assert_eq(&format!("{}", list));
}
