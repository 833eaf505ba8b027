//! Analysis targets.
//!
//! This module provides a minimal in-memory program model the pass
//! manager can analyze, including:
//!
//! * Programs ([`Program`]), which act as the analysis context.
//! * Functions ([`Function`], [`FunctionData`]), the analysis objects.
//! * Basic blocks ([`BasicBlock`], [`BasicBlockData`]) and their order
//!   in a function ([`Layout`](layout::Layout)).
//!
//! # Example
//!
//! ```
//! use passman::ir::*;
//!
//! let mut program = Program::new();
//! let mut data = FunctionData::new("@main".into());
//! let entry = data.new_bb(Some("%entry".into()));
//! data.new_bb(Some("%end".into()));
//! let main = program.new_func(data);
//!
//! assert_eq!(program.func(main).layout().entry_bb(), Some(entry));
//! assert_eq!(program.func(main).layout().bbs().len(), 2);
//! ```

pub mod entities;
pub mod layout;

mod idman;

pub use entities::{BasicBlock, BasicBlockData, Function, FunctionData, Program};
