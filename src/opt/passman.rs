use crate::ir::{Function, Program};
use crate::logger::{log_error, log_note, log_warning};
use crate::opt::{Error, InvalidateFn, Pass, PassResult, ResultCache, RunFn};
use std::any::{type_name, Any};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

/// Pass manager of function analyses, using the program as the
/// analysis context.
pub type FunctionPassManager<'a> = PassManager<'a, Function, Program>;

/// A registered pass, with its callbacks already validated.
struct Registered<'a, O, C> {
  pass: &'a Pass<O, C>,
  run: RunFn<O, C>,
  invalidate: InvalidateFn<O, C>,
}

/// Manages all registered passes and their cached results.
///
/// Results are computed lazily by [`get_result`](Self::get_result) and
/// cached per (pass, object) until [`invalidate`](Self::invalidate) is
/// called on the object. A pass may request results of other passes from
/// its `run` callback, the manager evaluates them on demand.
///
/// `O` is the type of analysis objects, compared by identity, and `C`
/// is the type of the analysis context shared by all passes.
pub struct PassManager<'a, O, C> {
  passes: HashMap<&'static str, Registered<'a, O, C>>,
  order: Vec<&'static str>,
  cache: ResultCache<O>,
  in_flight: HashSet<(&'static str, O)>,
  context: Option<&'a C>,
}

impl<'a, O, C> PassManager<'a, O, C> {
  /// Creates a new `PassManager`.
  pub fn new() -> Self {
    Self {
      passes: HashMap::new(),
      order: Vec::new(),
      cache: ResultCache::new(),
      in_flight: HashSet::new(),
      context: None,
    }
  }

  /// Sets the analysis context.
  pub fn set_context(&mut self, context: Option<&'a C>) {
    self.context = context;
  }

  /// Returns the analysis context.
  pub fn context(&self) -> Option<&'a C> {
    self.context
  }

  /// Checks if a pass with the given name has been registered.
  pub fn is_registered(&self, name: &str) -> bool {
    self.passes.contains_key(name)
  }

  /// Returns the registered pass with the given name.
  pub fn pass(&self, name: &str) -> Option<&'a Pass<O, C>> {
    self.passes.get(name).map(|r| r.pass)
  }

  /// Returns an iterator over names of all registered passes,
  /// in registration order.
  pub fn passes(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.order.iter().copied()
  }

  /// Returns the number of cached results.
  pub fn cached_len(&self) -> usize {
    self.cache.len()
  }

  /// Registers a new pass to the current pass manager.
  ///
  /// Returns `false` if the pass is invalid (see [`Pass::is_valid`]).
  /// Registering a pass whose name is already registered does nothing
  /// and returns `true`.
  ///
  /// The pass is registered before its dependencies, so passes that
  /// register each other as dependencies do not recurse forever.
  pub fn register(&mut self, pass: &'a Pass<O, C>) -> bool {
    if let Some(defect) = pass.defect() {
      log_warning(&format!("pass `{}` has {}, ignored", pass.name, defect));
      return false;
    }
    let (run, invalidate) = match (pass.run, pass.invalidate) {
      (Some(run), Some(invalidate)) => (run, invalidate),
      _ => return false,
    };
    if self.passes.contains_key(pass.name) {
      return true;
    }
    self.passes.insert(
      pass.name,
      Registered {
        pass,
        run,
        invalidate,
      },
    );
    self.order.push(pass.name);
    log_note(|| format!("registered pass `{}`", pass.name));
    if let Some(register) = pass.register_dependencies {
      register(self);
    }
    true
  }
}

impl<'a, O, C> PassManager<'a, O, C>
where
  O: Copy + Eq + Hash + Debug,
{
  /// Returns the result of the given pass on the given object.
  ///
  /// Returns the cached result if there is one. Otherwise runs the pass,
  /// caches its result and returns it. Errors returned by the pass are
  /// propagated and nothing is cached.
  ///
  /// # Panics
  ///
  /// Panics if computing the result requires the result itself, i.e. the
  /// pass on the object is requested again, directly or through other
  /// passes, before its `run` callback returns.
  pub fn get_result(&mut self, name: &str, obj: O) -> Result<PassResult, Error> {
    if let Some(result) = self.cache.get(name, obj) {
      return Ok(result.clone());
    }
    let (pass, run) = match self.passes.get(name) {
      Some(r) => (r.pass, r.run),
      None => {
        log_error(&format!("requested result of unknown pass `{}`", name));
        return Err(Error::UnknownPass(name.into()));
      }
    };
    // guard against hard circular dependencies
    if !self.in_flight.insert((pass.name, obj)) {
      let message = format!(
        "hard circular dependency: result of pass `{}` on {:?} depends on itself",
        pass.name, obj
      );
      log_error(&message);
      panic!("{}", message);
    }
    log_note(|| format!("running pass `{}` on {:?}", pass.name, obj));
    let result = run(self, pass, obj);
    self.in_flight.remove(&(pass.name, obj));
    let result = result?;
    self.cache.insert(pass.name, obj, result.clone());
    Ok(result)
  }

  /// Returns the result of the given pass on the given object,
  /// downcasted to `T`.
  ///
  /// See [`get_result`](Self::get_result) for details.
  pub fn get_result_as<T: Any>(&mut self, name: &str, obj: O) -> Result<Rc<T>, Error> {
    self
      .get_result(name, obj)?
      .downcast::<T>()
      .map_err(|_| Error::ResultTypeMismatch {
        pass: name.into(),
        expected: type_name::<T>(),
      })
  }

  /// Returns the cached result of the given pass on the given object,
  /// returns `None` if there is no cached result.
  ///
  /// This method never runs any pass.
  pub fn get_cached_result(&self, name: &str, obj: O) -> Option<PassResult> {
    self.cache.get(name, obj).cloned()
  }

  /// Returns the cached result of the given pass on the given object,
  /// downcasted to `T`. Returns `None` if there is no cached result,
  /// or the result is not a `T`.
  pub fn get_cached_result_as<T: Any>(&self, name: &str, obj: O) -> Option<Rc<T>> {
    self.get_cached_result(name, obj)?.downcast::<T>().ok()
  }

  /// Checks if the result of the given pass on the given object
  /// is being computed.
  pub fn is_evaluating(&self, name: &str, obj: O) -> bool {
    self.passes.get_key_value(name).map_or(false, |(name, _)| {
      self.in_flight.contains(&(*name, obj))
    })
  }

  /// Invalidates all cached results on the given object.
  ///
  /// The `invalidate` callback of every pass that has a cached result on
  /// the object is called, in registration order, then the result is
  /// removed from the cache. Passes without a cached result are skipped.
  ///
  /// Results cached again by `invalidate` callbacks are invalidated too,
  /// the object has no cached results when this method returns.
  pub fn invalidate(&mut self, obj: O) {
    while let Some(name) = self.first_cached(obj) {
      let (pass, invalidate) = match self.passes.get(name) {
        Some(r) => (r.pass, r.invalidate),
        None => break,
      };
      log_note(|| format!("invalidating pass `{}` on {:?}", name, obj));
      invalidate(self, pass, obj);
      self.cache.remove(name, obj);
    }
  }

  /// Returns the first pass in registration order that has a cached
  /// result on the given object.
  fn first_cached(&self, obj: O) -> Option<&'static str> {
    self.order.iter().copied().find(|name| self.cache.contains(name, obj))
  }

  /// Invalidates all cached results on all objects.
  pub fn invalidate_all(&mut self) {
    let objs: Vec<_> = self.cache.objects().copied().collect();
    for obj in objs {
      self.invalidate(obj);
    }
  }
}

impl<'a, O, C> Default for PassManager<'a, O, C> {
  fn default() -> Self {
    Self::new()
  }
}

/// Dropping the pass manager never calls `invalidate` callbacks, the
/// remaining results are dropped along with the cache.
impl<'a, O, C> Drop for PassManager<'a, O, C> {
  fn drop(&mut self) {
    if !self.cache.is_empty() {
      log_warning(&format!(
        "pass manager dropped with {} cached result(s) not invalidated",
        self.cache.len()
      ));
    }
  }
}
