//! Basic function analyses.
//!
//! Both analyses read function data from the [`Program`] set as the
//! context of the pass manager, and fail with
//! [`Error::MissingContext`] if there is none.

use crate::ir::{Function, Program};
use crate::logger::log_note;
use crate::opt::{Error, FunctionPassManager, Pass, PassResult};
use std::rc::Rc;

/// Counts basic blocks of a function, the result is a `usize`.
pub static COUNT_BB: Pass<Function, Program> = Pass::new("COUNTBB", count_bb, release);

/// Sums up the basic block count of all functions called by a function,
/// recursive calls excluded. The result is a `usize`.
///
/// Depends on [`COUNT_BB`].
pub static CALLEE_BB: Pass<Function, Program> =
  Pass::new("CALLEEBB", callee_bb, release).with_dependencies(register_callee_bb_deps);

fn count_bb(
  pm: &mut FunctionPassManager,
  pass: &Pass<Function, Program>,
  func: Function,
) -> Result<PassResult, Error> {
  let program = pm.context().ok_or(Error::MissingContext(pass.name))?;
  Ok(Rc::new(program.func(func).layout().bbs().len()))
}

fn callee_bb(
  pm: &mut FunctionPassManager,
  pass: &Pass<Function, Program>,
  func: Function,
) -> Result<PassResult, Error> {
  let program = pm.context().ok_or(Error::MissingContext(pass.name))?;
  let mut total = 0;
  for &callee in program.func(func).callees() {
    if callee != func {
      total += *pm.get_result_as::<usize>(COUNT_BB.name, callee)?;
    }
  }
  Ok(Rc::new(total))
}

fn register_callee_bb_deps(pm: &mut FunctionPassManager) {
  pm.register(&COUNT_BB);
}

/// Results are plain values, dropping the cache entry is enough.
fn release(_: &mut FunctionPassManager, pass: &Pass<Function, Program>, func: Function) {
  log_note(|| format!("released result of `{}` on {:?}", pass.name, func));
}
