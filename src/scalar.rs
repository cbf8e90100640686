//! Dynamically-kinded sequence elements.
//!
//! The generic sort entry points are homogeneous by construction, so they
//! need no runtime check. [`Scalar`] models the original contract where a
//! sequence's element kind is only known at runtime: each value belongs to
//! exactly one comparable kind, and comparing across kinds is an error
//! rather than a coercion.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Error;

/// The comparable kind of a [`Scalar`]. Int and Float are distinct kinds;
/// there is no cross-kind ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Float,
    Text,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Text => "text",
        };
        f.write_str(name)
    }
}

/// A single element of a dynamically-kinded sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Int(_) => Kind::Int,
            Scalar::Float(_) => Kind::Float,
            Scalar::Text(_) => Kind::Text,
        }
    }

    /// Natural total order within one kind. Floats use `total_cmp`, so NaN
    /// has a defined position instead of poisoning the sort.
    pub fn try_cmp(&self, other: &Scalar) -> Result<Ordering, Error> {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => Ok(a.cmp(b)),
            (Scalar::Float(a), Scalar::Float(b)) => Ok(a.total_cmp(b)),
            (Scalar::Text(a), Scalar::Text(b)) => Ok(a.cmp(b)),
            _ => Err(Error::TypeMismatch {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// Checks that every element of `v` shares one comparable kind.
///
/// An empty sequence passes vacuously. On failure the reported pair is the
/// first element's kind and the first kind that differs from it.
pub fn ensure_uniform_kind(v: &[Scalar]) -> Result<(), Error> {
    let mut kinds = v.iter().map(Scalar::kind);
    if let Some(first) = kinds.next() {
        for kind in kinds {
            if kind != first {
                return Err(Error::TypeMismatch {
                    left: first,
                    right: kind,
                });
            }
        }
    }
    Ok(())
}
