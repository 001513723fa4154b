//! JSON encoding and reconstruction.
//!
//! Reconstruction has no reflection to lean on, so types are rebuilt through
//! constructors registered ahead of time under a name. A JSON object's field
//! values are handed to the constructor positionally, in the order they
//! appear in the text.

use std::any::Any;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failures while encoding or reconstructing values.
#[derive(Debug, Error)]
pub enum HelperError {
    /// The text is not valid JSON, or the value could not be encoded.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Nothing is registered under this name.
    #[error("no constructor registered for '{name}'")]
    UnknownConstructor {
        /// The requested constructor name.
        name: String,
    },

    /// The JSON parsed but is not an object.
    #[error("expected a JSON object to construct '{name}'")]
    NotAnObject {
        /// The requested constructor name.
        name: String,
    },

    /// The constructor takes a different number of arguments.
    #[error("expected {expected} arguments, found {found}")]
    Arity {
        /// Arguments the constructor takes.
        expected: usize,
        /// Arguments decoded from the JSON object.
        found: usize,
    },

    /// An argument has the wrong JSON type.
    #[error("argument {index} must be {expected}")]
    ArgumentType {
        /// Zero-based position of the argument.
        index: usize,
        /// Description of the accepted type.
        expected: &'static str,
    },

    /// The constructor produced a different type than requested.
    #[error("constructor '{name}' does not produce the requested type")]
    TypeMismatch {
        /// The requested constructor name.
        name: String,
    },
}

type Constructor = Box<dyn Fn(Vec<Value>) -> Result<Box<dyn Any>, HelperError>>;

/// Named constructors taking their arguments as an ordered list of JSON
/// values.
#[derive(Default)]
pub struct ConstructorRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ConstructorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `constructor` under `name`. A later registration under the
    /// same name replaces the earlier one.
    pub fn register<T, F>(&mut self, name: &str, constructor: F)
    where
        T: Any,
        F: Fn(Vec<Value>) -> Result<T, HelperError> + 'static,
    {
        let _ = self.constructors.insert(
            name.to_string(),
            Box::new(move |args| constructor(args).map(|value| Box::new(value) as Box<dyn Any>)),
        );
    }

    /// Whether a constructor is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Invoke the constructor registered under `name` with `args`.
    ///
    /// # Errors
    ///
    /// [`HelperError::UnknownConstructor`] if `name` is not registered, or
    /// whatever the constructor returns when it rejects `args`.
    pub fn construct(&self, name: &str, args: Vec<Value>) -> Result<Box<dyn Any>, HelperError> {
        let constructor =
            self.constructors
                .get(name)
                .ok_or_else(|| HelperError::UnknownConstructor {
                    name: name.to_string(),
                })?;
        constructor(args)
    }
}

/// Encode `value` as compact JSON.
///
/// # Errors
///
/// [`HelperError::Json`] if `value` cannot be represented as JSON, e.g. a map
/// with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, HelperError> {
    Ok(serde_json::to_string(value)?)
}

/// Rebuild a value from a JSON object by passing its field values, in text
/// order, to the constructor registered under `name`.
///
/// # Errors
///
/// - [`HelperError::UnknownConstructor`] if `name` is not registered.
/// - [`HelperError::Json`] if `json` does not parse.
/// - [`HelperError::NotAnObject`] if `json` is not an object.
/// - Any error the constructor returns.
pub fn from_json(
    registry: &ConstructorRegistry,
    name: &str,
    json: &str,
) -> Result<Box<dyn Any>, HelperError> {
    if !registry.contains(name) {
        return Err(HelperError::UnknownConstructor {
            name: name.to_string(),
        });
    }

    let Value::Object(fields) = serde_json::from_str(json)? else {
        return Err(HelperError::NotAnObject {
            name: name.to_string(),
        });
    };

    let args = fields.into_iter().map(|(_, value)| value).collect();
    registry.construct(name, args)
}

/// Typed form of [`from_json`].
///
/// # Errors
///
/// Everything [`from_json`] returns, plus [`HelperError::TypeMismatch`] if
/// the constructor builds something other than `T`.
pub fn from_json_as<T: Any>(
    registry: &ConstructorRegistry,
    name: &str,
    json: &str,
) -> Result<T, HelperError> {
    from_json(registry, name, json)?
        .downcast::<T>()
        .map(|value| *value)
        .map_err(|_| HelperError::TypeMismatch {
            name: name.to_string(),
        })
}

/// Read argument `index` as a number.
///
/// # Errors
///
/// [`HelperError::ArgumentType`] if the argument is missing or not a number.
pub fn number_arg(args: &[Value], index: usize) -> Result<f64, HelperError> {
    args.get(index)
        .and_then(Value::as_f64)
        .ok_or(HelperError::ArgumentType {
            index,
            expected: "a number",
        })
}

/// Check that exactly `expected` arguments were given.
///
/// # Errors
///
/// [`HelperError::Arity`] otherwise.
pub fn expect_arity(args: &[Value], expected: usize) -> Result<(), HelperError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(HelperError::Arity {
            expected,
            found: args.len(),
        })
    }
}
