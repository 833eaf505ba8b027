//! Library for managing memoized analysis passes.
//!
//! An analysis pass is a named computation over an analysis object, for
//! example counting the basic blocks of a function. Passes are registered
//! to a pass manager, which computes their results on demand, caches them
//! per (pass, object) pair, and resolves dependencies between passes
//! without the caller ordering anything:
//!
//! ```
//! use passman::ir::{FunctionData, Program};
//! use passman::opt::passes::CALLEE_BB;
//! use passman::opt::FunctionPassManager;
//!
//! let mut program = Program::new();
//! let mut leaf = FunctionData::new("@leaf".into());
//! leaf.new_bb(Some("%entry".into()));
//! leaf.new_bb(Some("%exit".into()));
//! let leaf = program.new_func(leaf);
//! let mut main = FunctionData::new("@main".into());
//! main.new_bb(Some("%entry".into()));
//! main.add_callee(leaf);
//! let main = program.new_func(main);
//!
//! let mut passman = FunctionPassManager::new();
//! passman.set_context(Some(&program));
//! // `CALLEEBB` registers `COUNTBB` as its dependency
//! assert!(passman.register(&CALLEE_BB));
//! let total = passman.get_result_as::<usize>("CALLEEBB", main).unwrap();
//! assert_eq!(*total, 2);
//! passman.invalidate_all();
//! ```
//!
//! # Circular dependencies
//!
//! Two passes may register each other as dependencies, this is called a
//! *soft* circular dependency and is always resolved by the manager. But
//! if computing the result of a pass on an object requires that very
//! result, directly or through other passes, the dependency is *hard*
//! circular and can never be satisfied. The pass manager detects it at
//! run time and panics.
//!
//! # Features
//!
//! * `no-logger`: disables the colored diagnostics printed to stderr.
//!   Error and warning counters in [`logger`] are still updated.

pub mod ir;
pub mod logger;
pub mod opt;
