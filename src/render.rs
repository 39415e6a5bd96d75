use crate::prelude::*;

impl<A: Allocator> fmt::Debug for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
      .entries(self.chain().map(|x| self.value(x)))
      .finish()
  }
}

/// Each value followed by a comma, as in `9,3,7,`.

impl<A: Allocator> fmt::Display for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for x in self.chain() {
      write!(f, "{},", self.value(x))?;
    }
    Ok(())
  }
}
