//! The tagged union a variable resolves to.

use std::fmt;

use figvar_snapshot::{Rgba, VariableKind};

use crate::error::{Error, Result};
use crate::format;

/// A fully resolved variable value, tagged by kind.
///
/// Every alias has already been followed by the time a `Value` exists; this
/// is always a literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    String(String),
    Float(f64),
    Color(Rgba),
}

impl Value {
    /// The kind this value carries.
    pub fn kind(&self) -> VariableKind {
        match self {
            Value::Boolean(_) => VariableKind::Boolean,
            Value::String(_) => VariableKind::String,
            Value::Float(_) => VariableKind::Float,
            Value::Color(_) => VariableKind::Color,
        }
    }

    /// Returns the boolean if this is a [`Value::Boolean`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the color if this is a [`Value::Color`].
    pub fn as_color(&self) -> Option<Rgba> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Renders a float value as a pixel length (`2.0` becomes `"2px"`).
    pub fn px(&self) -> Result<String> {
        match self {
            Value::Float(n) => Ok(format::px(*n)),
            other => Err(kind_mismatch("float", other)),
        }
    }

    /// Renders a color value as a CSS `rgba()` string, alpha passed through.
    pub fn rgba(&self) -> Result<String> {
        match self {
            Value::Color(c) => Ok(format::rgba(*c)),
            other => Err(kind_mismatch("color", other)),
        }
    }

    /// Renders a color value as a CSS `rgba()` string with the alpha
    /// overridden.
    pub fn rgba_with_alpha(&self, alpha: f64) -> Result<String> {
        match self {
            Value::Color(c) => Ok(format::rgba_with_alpha(*c, alpha)),
            other => Err(kind_mismatch("color", other)),
        }
    }

    /// Renders a color value as an uppercase hex string, alpha dropped.
    pub fn hex(&self) -> Result<String> {
        match self {
            Value::Color(c) => Ok(format::hex(*c)),
            other => Err(kind_mismatch("color", other)),
        }
    }
}

fn kind_mismatch(expected: &'static str, actual: &Value) -> Error {
    Error::KindMismatch {
        expected,
        actual: actual.kind().as_str(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => f.write_str(s),
            Value::Float(n) => write!(f, "{}", n),
            Value::Color(c) => f.write_str(&format::rgba(*c)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Rgba> for Value {
    fn from(c: Rgba) -> Self {
        Value::Color(c)
    }
}
