use std::cell::Cell;
use std::num::NonZeroU32;

/// Type of `Function` identifier.
///
/// The IDs of `Function`s are unique, two functions built from the same
/// data still get different IDs.
pub(crate) type FunctionId = NonZeroU32;

/// Type of `BasicBlock` identifier.
///
/// The IDs of `BasicBlock`s are unique.
pub(crate) type BasicBlockId = NonZeroU32;

thread_local! {
  /// The next function ID.
  static NEXT_FUNCTION_ID: Cell<u32> = Cell::new(1);
  /// The next basic block ID.
  static NEXT_BASIC_BLOCK_ID: Cell<u32> = Cell::new(1);
}

/// Takes the next ID from the given counter.
///
/// # Panics
///
/// Panics if the counter overflows.
fn next_id(counter: &'static std::thread::LocalKey<Cell<u32>>) -> NonZeroU32 {
  counter.with(|id| {
    let cur = id.get();
    id.set(cur.checked_add(1).expect("ID counter overflow"));
    NonZeroU32::new(cur).expect("ID counter starts from 1")
  })
}

/// Gets the next function ID.
pub(crate) fn next_func_id() -> FunctionId {
  next_id(&NEXT_FUNCTION_ID)
}

/// Gets the next basic block ID.
pub(crate) fn next_bb_id() -> BasicBlockId {
  next_id(&NEXT_BASIC_BLOCK_ID)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn ids_are_unique() {
    let f1 = next_func_id();
    let f2 = next_func_id();
    assert_ne!(f1, f2);
    let bb1 = next_bb_id();
    let bb2 = next_bb_id();
    assert!(bb2 > bb1);
  }
}
