//! The per-call argument set.

use crate::error::{ArgsError, ArgsResult};
use crate::value::ArgValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Positional values and keyword arguments of a single module call.
///
/// Created fresh for each call and rewritten in place by the pipeline.
/// Positional values are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallArgs {
    #[serde(default)]
    pub positional: Vec<ArgValue>,
    #[serde(default)]
    pub kwargs: BTreeMap<String, ArgValue>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value.
    pub fn arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.kwargs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kwargs.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) -> Option<ArgValue> {
        self.kwargs.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<ArgValue> {
        self.kwargs.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.kwargs.is_empty()
    }

    /// Build keyword arguments from a JSON object.
    pub fn from_json_kwargs(value: serde_json::Value) -> ArgsResult<Self> {
        let serde_json::Value::Object(map) = value else {
            return Err(ArgsError::UnsupportedValue(
                "keyword arguments must be a JSON object".to_string(),
            ));
        };
        let mut args = CallArgs::new();
        for (name, value) in map {
            args.kwargs.insert(name, ArgValue::from_json(value)?);
        }
        Ok(args)
    }

    /// Render the call as a GMT argument string.
    ///
    /// Positional values come first, then `-<key><value>` for each keyword
    /// in key order. A sequence value repeats the option once per element.
    pub fn to_arg_string(&self) -> String {
        let mut parts: Vec<String> = self.positional.iter().map(|v| v.to_string()).collect();
        for (key, value) in &self.kwargs {
            match value {
                ArgValue::Seq(items) => {
                    parts.extend(items.iter().map(|item| format!("-{}{}", key, item)));
                }
                other => parts.push(format!("-{}{}", key, other)),
            }
        }
        parts.join(" ")
    }
}
