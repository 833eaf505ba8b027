use crate::opt::{Error, PassManager};
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Result of running a pass on an object.
///
/// Results are type-erased, the requester downcasts them to the concrete
/// type the pass produces. See
/// [`get_result_as`](PassManager::get_result_as).
pub type PassResult = Rc<dyn Any>;

/// Callback that computes the result of a pass on an object.
///
/// The callback may request results of other passes through the given
/// pass manager.
pub type RunFn<O, C> = fn(&mut PassManager<'_, O, C>, &Pass<O, C>, O) -> Result<PassResult, Error>;

/// Callback that releases the cached result of a pass on an object.
///
/// The result is still cached when the callback is invoked, and is
/// removed right after the callback returns.
pub type InvalidateFn<O, C> = fn(&mut PassManager<'_, O, C>, &Pass<O, C>, O);

/// Callback that registers the passes a pass depends on.
pub type RegisterFn<O, C> = fn(&mut PassManager<'_, O, C>);

/// Descriptor of a pass.
///
/// A pass is valid only if it has a non-empty name, a `run` callback and
/// an `invalidate` callback. Descriptors are usually declared as `static`
/// items and registered by reference:
///
/// ```
/// use passman::ir::{Function, Program};
/// use passman::opt::*;
/// use std::rc::Rc;
///
/// fn run(_: &mut FunctionPassManager, _: &Pass<Function, Program>, _: Function)
///   -> Result<PassResult, Error> {
///   Ok(Rc::new(42))
/// }
///
/// fn invalidate(_: &mut FunctionPassManager, _: &Pass<Function, Program>, _: Function) {}
///
/// static ANSWER: Pass<Function, Program> = Pass::new("ANSWER", run, invalidate);
///
/// let mut passman = FunctionPassManager::new();
/// assert!(passman.register(&ANSWER));
/// ```
pub struct Pass<O, C> {
  /// Name of the pass, unique in a pass manager.
  pub name: &'static str,
  /// Computes the result.
  pub run: Option<RunFn<O, C>>,
  /// Releases the result.
  pub invalidate: Option<InvalidateFn<O, C>>,
  /// Registers dependencies, invoked once when this pass is registered.
  pub register_dependencies: Option<RegisterFn<O, C>>,
}

impl<O, C> Pass<O, C> {
  /// Creates a new pass without dependencies.
  pub const fn new(name: &'static str, run: RunFn<O, C>, invalidate: InvalidateFn<O, C>) -> Self {
    Self {
      name,
      run: Some(run),
      invalidate: Some(invalidate),
      register_dependencies: None,
    }
  }

  /// Attaches a dependency registration callback to the current pass.
  pub const fn with_dependencies(self, register: RegisterFn<O, C>) -> Self {
    Self {
      name: self.name,
      run: self.run,
      invalidate: self.invalidate,
      register_dependencies: Some(register),
    }
  }

  /// Checks if the current pass can be registered.
  pub fn is_valid(&self) -> bool {
    !self.name.is_empty() && self.run.is_some() && self.invalidate.is_some()
  }

  /// Describes the first problem that makes the current pass invalid.
  pub(in crate::opt) fn defect(&self) -> Option<&'static str> {
    match (self.name.is_empty(), self.run, self.invalidate) {
      (true, _, _) => Some("an empty name"),
      (_, None, None) => Some("no `run` and `invalidate` callbacks"),
      (_, None, _) => Some("no `run` callback"),
      (_, _, None) => Some("no `invalidate` callback"),
      _ => None,
    }
  }
}

impl<O, C> fmt::Debug for Pass<O, C> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Pass")
      .field("name", &self.name)
      .field("run", &self.run.is_some())
      .field("invalidate", &self.invalidate.is_some())
      .field("register_dependencies", &self.register_dependencies.is_some())
      .finish()
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::ir::{Function, Program};
  use crate::opt::FunctionPassManager;

  fn run(
    _: &mut FunctionPassManager,
    _: &Pass<Function, Program>,
    _: Function,
  ) -> Result<PassResult, Error> {
    Ok(Rc::new(()))
  }

  fn invalidate(_: &mut FunctionPassManager, _: &Pass<Function, Program>, _: Function) {}

  fn register(_: &mut FunctionPassManager) {}

  #[test]
  fn validity() {
    let pass: Pass<Function, Program> = Pass::new("P", run, invalidate);
    assert!(pass.is_valid());
    assert_eq!(pass.defect(), None);
    assert!(pass.register_dependencies.is_none());
    let pass = pass.with_dependencies(register);
    assert!(pass.register_dependencies.is_some());
    let unnamed: Pass<Function, Program> = Pass::new("", run, invalidate);
    assert_eq!(unnamed.defect(), Some("an empty name"));
    let no_run: Pass<Function, Program> = Pass {
      name: "P",
      run: None,
      invalidate: Some(invalidate),
      register_dependencies: None,
    };
    assert!(!no_run.is_valid());
    assert_eq!(no_run.defect(), Some("no `run` callback"));
    let bare: Pass<Function, Program> = Pass {
      name: "P",
      run: None,
      invalidate: None,
      register_dependencies: None,
    };
    assert_eq!(bare.defect(), Some("no `run` and `invalidate` callbacks"));
  }
}
