//! Layout ([`Layout`]) and basic block list related implementations.

use crate::ir::entities::BasicBlock;
use key_node_list::{impl_node, KeyNodeList};
use std::collections::HashMap;

/// Layout of basic blocks in a function.
///
/// `Layout` maintains the order of basic blocks ([`BasicBlock`]) in
/// function. The first basic block is the entry.
pub struct Layout {
  bbs: BasicBlockList,
}

impl Layout {
  /// Creates a new layout.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a reference to the basic block list.
  pub fn bbs(&self) -> &BasicBlockList {
    &self.bbs
  }

  /// Returns a mutable reference to the basic block list.
  pub fn bbs_mut(&mut self) -> &mut BasicBlockList {
    &mut self.bbs
  }

  /// Returns the entry basic block of the function, returns `None` if
  /// the function is a declaration.
  pub fn entry_bb(&self) -> Option<BasicBlock> {
    self.bbs.front_key().copied()
  }
}

impl Default for Layout {
  fn default() -> Self {
    Self {
      bbs: BasicBlockList::with_map(HashMap::new()),
    }
  }
}

/// Basic block list, stores the order of all basic blocks in the function.
///
/// Basic block list is a [`KeyNodeList`], with the key is [`BasicBlock`],
/// and the node is [`BasicBlockNode`].
///
/// You can push new basic blocks to the list by calling
/// [`push_key_front`](BasicBlockList::push_key_front) or
/// [`push_key_back`](BasicBlockList::push_key_back).
pub type BasicBlockList =
  KeyNodeList<BasicBlock, BasicBlockNode, HashMap<BasicBlock, BasicBlockNode>>;

/// The node in [`BasicBlockList`].
pub struct BasicBlockNode {
  prev: Option<BasicBlock>,
  next: Option<BasicBlock>,
}

impl_node!(BasicBlockNode { Key = BasicBlock, prev = prev, next = next });

impl From<()> for BasicBlockNode {
  fn from(_: ()) -> Self {
    Self {
      prev: None,
      next: None,
    }
  }
}
