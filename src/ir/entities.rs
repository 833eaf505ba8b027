//! Analysis target entities, including programs ([`Program`]), functions
//! ([`Function`], [`FunctionData`]) and basic blocks ([`BasicBlock`],
//! [`BasicBlockData`]).

use crate::ir::idman::{next_bb_id, next_func_id};
use crate::ir::idman::{BasicBlockId, FunctionId};
use crate::ir::layout::Layout;
use std::collections::HashMap;

/// A program.
///
/// Programs hold functions, and serve as the analysis context of
/// [`FunctionPassManager`](crate::opt::FunctionPassManager).
#[derive(Default)]
pub struct Program {
  funcs: HashMap<Function, FunctionData>,
  func_layout: Vec<Function>,
}

impl Program {
  /// Creates a new program.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new function in the current program.
  pub fn new_func(&mut self, data: FunctionData) -> Function {
    let func = Function(next_func_id());
    self.funcs.insert(func, data);
    self.func_layout.push(func);
    func
  }

  /// Removes the given function by its handle.
  ///
  /// Returns the function data if the function was found.
  pub fn remove_func(&mut self, func: Function) -> Option<FunctionData> {
    self.func_layout.retain(|f| *f != func);
    self.funcs.remove(&func)
  }

  /// Returns a reference to the function map.
  pub fn funcs(&self) -> &HashMap<Function, FunctionData> {
    &self.funcs
  }

  /// Returns a reference to the layout of all functions.
  pub fn func_layout(&self) -> &[Function] {
    &self.func_layout
  }

  /// Returns a reference to the function data by the given function handle.
  ///
  /// # Panics
  ///
  /// Panics if the given function does not exist.
  pub fn func(&self, func: Function) -> &FunctionData {
    self.funcs.get(&func).expect("`func` does not exist")
  }

  /// Returns a mutable reference to the function data
  /// by the given function handle.
  ///
  /// # Panics
  ///
  /// Panics if the given function does not exist.
  pub fn func_mut(&mut self, func: Function) -> &mut FunctionData {
    self.funcs.get_mut(&func).expect("`func` does not exist")
  }
}

/// A handle of function.
///
/// Handles are compared by identity: two functions with the same name and
/// the same blocks are still different functions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Function(FunctionId);

/// Data of function.
///
/// A function has a name, a list of basic blocks and the functions
/// it calls.
pub struct FunctionData {
  name: String,
  bbs: HashMap<BasicBlock, BasicBlockData>,
  layout: Layout,
  callees: Vec<Function>,
}

impl FunctionData {
  /// Creates a new function definition without any basic blocks.
  pub fn new(name: String) -> Self {
    Self {
      name,
      bbs: HashMap::new(),
      layout: Layout::new(),
      callees: Vec::new(),
    }
  }

  /// Returns a reference to the function's name.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Sets the name of the function.
  pub fn set_name(&mut self, name: String) {
    self.name = name;
  }

  /// Creates a new basic block and appends it to the end of the layout.
  pub fn new_bb(&mut self, name: Option<String>) -> BasicBlock {
    let bb = BasicBlock(next_bb_id());
    self.bbs.insert(bb, BasicBlockData { name });
    let pushed = self.layout.bbs_mut().push_key_back(bb).is_ok();
    debug_assert!(pushed, "fresh basic block is already in the layout");
    bb
  }

  /// Returns a reference to the basic block data by the given handle.
  ///
  /// # Panics
  ///
  /// Panics if the given basic block does not exist.
  pub fn bb(&self, bb: BasicBlock) -> &BasicBlockData {
    self.bbs.get(&bb).expect("`bb` does not exist")
  }

  /// Returns a reference to the layout.
  pub fn layout(&self) -> &Layout {
    &self.layout
  }

  /// Returns a mutable reference to the layout.
  pub fn layout_mut(&mut self) -> &mut Layout {
    &mut self.layout
  }

  /// Records a call from this function to `callee`.
  ///
  /// Returns `false` if the call was already recorded.
  pub fn add_callee(&mut self, callee: Function) -> bool {
    if self.callees.contains(&callee) {
      false
    } else {
      self.callees.push(callee);
      true
    }
  }

  /// Returns the functions called by this function.
  pub fn callees(&self) -> &[Function] {
    &self.callees
  }
}

/// A handle of basic block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct BasicBlock(BasicBlockId);

/// Data of basic block.
pub struct BasicBlockData {
  name: Option<String>,
}

impl BasicBlockData {
  /// Returns a reference to the basic block's name.
  pub fn name(&self) -> &Option<String> {
    &self.name
  }
}
