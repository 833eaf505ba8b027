use crate::opt::PassResult;
use std::collections::HashMap;
use std::hash::Hash;

/// Cache of pass results.
///
/// Stores at most one result per (pass name, object) pair. Entries are
/// grouped by object, since invalidation always happens per object.
pub struct ResultCache<O> {
  entries: HashMap<O, HashMap<&'static str, PassResult>>,
}

impl<O> ResultCache<O> {
  /// Creates a new empty cache.
  pub fn new() -> Self {
    Self {
      entries: HashMap::new(),
    }
  }

  /// Returns the number of cached results.
  pub fn len(&self) -> usize {
    self.entries.values().map(HashMap::len).sum()
  }

  /// Checks if the cache is empty.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Returns an iterator over all objects that have cached results.
  pub fn objects(&self) -> impl Iterator<Item = &O> {
    self.entries.keys()
  }
}

impl<O: Copy + Eq + Hash> ResultCache<O> {
  /// Returns the cached result of the given pass on the given object.
  pub fn get(&self, pass: &str, obj: O) -> Option<&PassResult> {
    self.entries.get(&obj).and_then(|m| m.get(pass))
  }

  /// Checks if there is a cached result of the given pass on
  /// the given object.
  pub fn contains(&self, pass: &str, obj: O) -> bool {
    self.get(pass, obj).is_some()
  }

  /// Caches a result, returns the result it replaced if any.
  pub fn insert(&mut self, pass: &'static str, obj: O, result: PassResult) -> Option<PassResult> {
    self.entries.entry(obj).or_default().insert(pass, result)
  }

  /// Removes the cached result of the given pass on the given object.
  pub fn remove(&mut self, pass: &str, obj: O) -> Option<PassResult> {
    let results = self.entries.get_mut(&obj)?;
    let result = results.remove(pass);
    if results.is_empty() {
      self.entries.remove(&obj);
    }
    result
  }
}

impl<O> Default for ResultCache<O> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use std::rc::Rc;

  #[test]
  fn insert_get_remove() {
    let mut cache = ResultCache::new();
    assert!(cache.is_empty());
    assert!(cache.get("A", 1u32).is_none());
    let result: PassResult = Rc::new(10);
    assert!(cache.insert("A", 1, result.clone()).is_none());
    cache.insert("B", 1, Rc::new("b"));
    cache.insert("A", 2, Rc::new(20));
    assert_eq!(cache.len(), 3);
    assert!(Rc::ptr_eq(cache.get("A", 1).unwrap(), &result));
    assert!(cache.contains("B", 1));
    assert!(!cache.contains("B", 2));
    assert!(Rc::ptr_eq(&cache.remove("A", 1).unwrap(), &result));
    assert!(cache.remove("A", 1).is_none());
    assert!(cache.remove("B", 1).is_some());
    assert_eq!(cache.objects().copied().collect::<Vec<_>>(), vec![2]);
    assert!(!cache.contains("B", 1));
    assert!(cache.remove("A", 2).is_some());
    assert!(cache.is_empty());
  }

  #[test]
  fn insert_replaces() {
    let mut cache = ResultCache::new();
    cache.insert("A", 'x', Rc::new(1));
    let old = cache.insert("A", 'x', Rc::new(2)).unwrap();
    assert_eq!(old.downcast_ref::<i32>(), Some(&1));
    assert_eq!(cache.len(), 1);
  }
}
