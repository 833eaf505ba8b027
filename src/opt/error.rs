use std::{error, fmt};

/// The type of error returned by evaluation methods of
/// [`PassManager`](super::PassManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// The requested pass has not been registered.
  UnknownPass(String),
  /// The pass needs the analysis context, but none was set.
  MissingContext(&'static str),
  /// The cached result of the pass is not of the requested type.
  ResultTypeMismatch {
    pass: String,
    expected: &'static str,
  },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Error::UnknownPass(name) => write!(f, "unknown pass `{}`", name),
      Error::MissingContext(name) => {
        write!(f, "pass `{}` requires an analysis context", name)
      }
      Error::ResultTypeMismatch { pass, expected } => {
        write!(f, "result of pass `{}` is not of type `{}`", pass, expected)
      }
    }
  }
}

impl error::Error for Error {}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      Error::UnknownPass("DOM".into()).to_string(),
      "unknown pass `DOM`"
    );
    assert_eq!(
      Error::MissingContext("COUNTBB").to_string(),
      "pass `COUNTBB` requires an analysis context"
    );
    let err = Error::ResultTypeMismatch {
      pass: "COUNTBB".into(),
      expected: "u8",
    };
    assert_eq!(err.to_string(), "result of pass `COUNTBB` is not of type `u8`");
  }
}
