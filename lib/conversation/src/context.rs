//! Conversation contexts.
//!
//! A context is a named unit of dialog state with a lifespan counted in
//! turns and an optional parameter mapping. The remote service decrements
//! lifespans; this crate only carries and filters them.
//!
//! Filtering is stable: survivors keep their relative order. Filter methods
//! report whether anything was removed so callers can decide whether the
//! collection needs to be persisted again.

use crate::parameter::ParameterValue;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Reserved context name with key-based removal semantics.
pub const GENERIC_CONTEXT_NAME: &str = "generic";

/// Parameter mapping attached to a context.
pub type Parameters = BTreeMap<String, ParameterValue>;

/// A named conversation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context name.
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub name: String,
    /// Remaining number of turns the context stays active.
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub lifespan: i64,
    /// Parameters, if any. `None` is distinct from an empty mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

impl Context {
    /// Creates a context without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, lifespan: i64) -> Self {
        Self {
            name: name.into(),
            lifespan,
            parameters: None,
        }
    }

    /// Replaces the parameter mapping.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Adds a single parameter, creating the mapping if needed.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.parameters
            .get_or_insert_with(Parameters::new)
            .insert(key.into(), value.into());
        self
    }

    /// Returns true if this is the reserved generic context.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        self.name == GENERIC_CONTEXT_NAME
    }

    /// Returns true if the parameter mapping contains any of the given keys.
    ///
    /// Contexts without parameters never match.
    #[must_use]
    pub fn has_any_parameter<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        self.parameters
            .as_ref()
            .is_some_and(|params| keys.iter().any(|key| params.contains_key(key.as_ref())))
    }
}

/// Ordered collection of contexts.
///
/// Serializes as a plain JSON array. Duplicate names are allowed and each
/// entry is matched independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextCollection(Vec<Context>);

impl ContextCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection holds no contexts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates contexts in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Context> {
        self.0.iter()
    }

    /// Appends a context.
    pub fn push(&mut self, context: Context) {
        self.0.push(context);
    }

    /// Returns the first context with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Context> {
        self.0.iter().find(|ctx| ctx.name == name)
    }

    /// Consumes the collection, returning the contexts in order.
    #[must_use]
    pub fn into_inner(self) -> Vec<Context> {
        self.0
    }

    /// Projects each context to a JSON value, for callers that persist
    /// contexts in a document store.
    #[must_use]
    pub fn to_values(&self) -> Vec<JsonValue> {
        self.0
            .iter()
            .map(|ctx| {
                let mut value = serde_json::Map::new();
                value.insert("name".to_string(), JsonValue::String(ctx.name.clone()));
                value.insert("lifespan".to_string(), JsonValue::from(ctx.lifespan));
                if let Some(params) = &ctx.parameters {
                    let params = params
                        .iter()
                        .map(|(k, v)| (k.clone(), JsonValue::from(v.clone())))
                        .collect();
                    value.insert("parameters".to_string(), JsonValue::Object(params));
                }
                JsonValue::Object(value)
            })
            .collect()
    }

    /// Removes every context whose name equals one of `names`.
    ///
    /// Returns true if at least one context was removed.
    pub fn filter_by_names<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        let before = self.0.len();
        self.0
            .retain(|ctx| !names.iter().any(|name| ctx.name == name.as_ref()));
        self.0.len() != before
    }

    /// Returns true if any context is named one of `names`.
    ///
    /// Parameters are not inspected.
    #[must_use]
    pub fn contains_name<S: AsRef<str>>(&self, names: &[S]) -> bool {
        self.0
            .iter()
            .any(|ctx| names.iter().any(|name| ctx.name == name.as_ref()))
    }

    /// Removes generic contexts whose parameters contain any of `keys`.
    ///
    /// Contexts with another name, and generic contexts without parameters,
    /// are kept. Returns true if at least one context was removed.
    pub fn filter_by_generic_names<S: AsRef<str>>(&mut self, keys: &[S]) -> bool {
        let before = self.0.len();
        self.0
            .retain(|ctx| !(ctx.is_generic() && ctx.has_any_parameter(keys)));
        self.0.len() != before
    }

    /// Removes every parameter whose key contains any of `tokens`.
    ///
    /// Contexts are never removed, only their parameter entries. Contexts
    /// without parameters are untouched. Returns true if any parameter
    /// was removed across the collection.
    pub fn filter_parameters_by_key_substring<S: AsRef<str>>(&mut self, tokens: &[S]) -> bool {
        let mut removal = false;
        for ctx in &mut self.0 {
            let Some(params) = ctx.parameters.as_mut() else {
                continue;
            };
            let before = params.len();
            params.retain(|key, _| !tokens.iter().any(|token| key.contains(token.as_ref())));
            removal |= params.len() != before;
        }
        removal
    }
}

impl From<Vec<Context>> for ContextCollection {
    fn from(contexts: Vec<Context>) -> Self {
        Self(contexts)
    }
}

impl FromIterator<Context> for ContextCollection {
    fn from_iter<I: IntoIterator<Item = Context>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ContextCollection {
    type Item = Context;
    type IntoIter = std::vec::IntoIter<Context>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContextCollection {
    type Item = &'a Context;
    type IntoIter = std::slice::Iter<'a, Context>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
