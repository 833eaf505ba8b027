//! The analysis pass manager.
//!
//! This module provides pass descriptors and the pass manager for
//! analyzing objects such as functions, including:
//!
//! * The pass descriptor ([`Pass`]), made of a name and callbacks that
//!   compute, release and register dependencies of an analysis.
//! * The pass manager ([`PassManager`]) that holds all registered passes,
//!   evaluates them on demand and caches their results ([`ResultCache`]).
//! * Some basic function analyses ([`passes`]).
//!
//! # Example
//!
//! Implement a pass that depends on the basic block counter:
//!
//! ```
//! use passman::ir::*;
//! use passman::opt::passes::COUNT_BB;
//! use passman::opt::*;
//! use std::rc::Rc;
//!
//! fn is_leaf(
//!   pm: &mut FunctionPassManager,
//!   _: &Pass<Function, Program>,
//!   func: Function,
//! ) -> Result<PassResult, Error> {
//!   let bb_num = pm.get_result_as::<usize>("COUNTBB", func)?;
//!   Ok(Rc::new(*bb_num == 1))
//! }
//!
//! fn release(_: &mut FunctionPassManager, _: &Pass<Function, Program>, _: Function) {}
//!
//! fn register_deps(pm: &mut FunctionPassManager) {
//!   pm.register(&COUNT_BB);
//! }
//!
//! static IS_LEAF: Pass<Function, Program> =
//!   Pass::new("ISLEAF", is_leaf, release).with_dependencies(register_deps);
//!
//! // build a program with a single-block function
//! let mut program = Program::new();
//! let mut data = FunctionData::new("@main".into());
//! data.new_bb(Some("%entry".into()));
//! let main = program.new_func(data);
//!
//! // register pass, then query the result
//! let mut passman = FunctionPassManager::new();
//! passman.set_context(Some(&program));
//! assert!(passman.register(&IS_LEAF));
//! assert!(*passman.get_result_as::<bool>("ISLEAF", main).unwrap());
//! assert!(passman.get_cached_result("COUNTBB", main).is_some());
//!
//! // release all results before the program changes
//! passman.invalidate(main);
//! assert!(passman.get_cached_result("ISLEAF", main).is_none());
//! ```

mod cache;
mod error;
mod pass;
pub mod passes;
mod passman;

pub use cache::ResultCache;
pub use error::Error;
pub use pass::*;
pub use passman::{FunctionPassManager, PassManager};
