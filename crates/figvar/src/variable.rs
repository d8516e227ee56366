//! Variable handles: mode-aware resolution through alias chains.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use figvar_snapshot::{Rgba, ValueSlot, VariableKind, VariableRecord};

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::registry::VariableCore;
use crate::session::Session;
use crate::value::Value;

/// An identity-stable handle for one variable.
///
/// A handle never caches a resolved value: every [`resolve`](Self::resolve)
/// reads the owning collection's mode state at that moment, so mode changes
/// made after the handle was obtained are always reflected.
#[derive(Clone)]
pub struct Variable {
    session: Session,
    core: Rc<VariableCore>,
}

impl Variable {
    pub(crate) fn new(session: Session, core: Rc<VariableCore>) -> Self {
        Variable { session, core }
    }

    /// The variable's id in the snapshot.
    pub fn id(&self) -> &str {
        &self.core.record.id
    }

    /// The variable's display name.
    pub fn name(&self) -> &str {
        &self.core.record.name
    }

    /// Session-unique identity counter. Two handles for the same variable
    /// always report the same uid.
    pub fn uid(&self) -> u64 {
        self.core.uid
    }

    /// The kind this variable's slots resolve to.
    pub fn kind(&self) -> VariableKind {
        self.core.record.kind
    }

    /// The owning collection's handle.
    ///
    /// Fails only on a snapshot whose variable names a collection id that has
    /// no record.
    pub fn collection(&self) -> Result<Collection> {
        let id = &self.core.record.collection_id;
        self.session
            .collection_by_id(id)
            .ok_or_else(|| Error::CollectionNotFound(id.clone()))
    }

    /// The mode id this variable resolves through right now, delegated to the
    /// owning collection.
    pub fn mode_id(&self) -> Result<String> {
        Ok(self.collection()?.mode_id().to_string())
    }

    /// The owning collection's default mode id.
    pub fn default_mode_id(&self) -> Result<String> {
        Ok(self.collection()?.default_mode_id().to_string())
    }

    /// Selects a mode on the owning collection, then returns `&self` so the
    /// selection chains into a read.
    pub fn mode(&self, name: &str) -> Result<&Self> {
        self.collection()?.mode(name)?;
        Ok(self)
    }

    /// Resolves this variable to a concrete value under the current mode
    /// state.
    ///
    /// The slot for the owning collection's active mode id is looked up
    /// first; an alias slot is then followed to its target variable, which
    /// resolves under its *own* collection's active mode, and so on until a
    /// literal is reached. Traversal tracks the variables it has visited and
    /// fails fast when one repeats instead of recursing forever.
    pub fn resolve(&self) -> Result<Value> {
        let snapshot = self.session.snapshot();
        let store = self.session.store();

        let mut visited: HashSet<&str> = HashSet::new();
        let mut path: Vec<String> = Vec::new();
        let mut record: &VariableRecord = &self.core.record;

        loop {
            if !visited.insert(record.id.as_str()) {
                path.push(record.name.clone());
                return Err(Error::CycleDetected { path });
            }
            path.push(record.name.clone());

            let collection = snapshot
                .collection(&record.collection_id)
                .ok_or_else(|| Error::CollectionNotFound(record.collection_id.clone()))?;
            let mode_id = store.mode_id_for(collection);

            let slot = record
                .values_by_mode
                .get(mode_id)
                .ok_or_else(|| Error::ModeNotFound {
                    variable: record.name.clone(),
                    mode_id: mode_id.to_string(),
                })?;

            match slot {
                ValueSlot::Alias(alias) => {
                    record = snapshot.variable(&alias.id).ok_or_else(|| {
                        Error::UnresolvedAlias {
                            from: record.name.clone(),
                            id: alias.id.clone(),
                        }
                    })?;
                }
                ValueSlot::Boolean(b) => return Ok(Value::Boolean(*b)),
                ValueSlot::Float(n) => return Ok(Value::Float(*n)),
                ValueSlot::String(s) => return Ok(Value::String(s.clone())),
                ValueSlot::Color(c) => return Ok(Value::Color(*c)),
            }
        }
    }

    /// Resolves and narrows to a boolean.
    pub fn bool_value(&self) -> Result<bool> {
        match self.resolve()? {
            Value::Boolean(b) => Ok(b),
            other => Err(kind_mismatch("boolean", &other)),
        }
    }

    /// Resolves and narrows to a string.
    pub fn string_value(&self) -> Result<String> {
        match self.resolve()? {
            Value::String(s) => Ok(s),
            other => Err(kind_mismatch("string", &other)),
        }
    }

    /// Resolves and narrows to a float.
    pub fn float_value(&self) -> Result<f64> {
        match self.resolve()? {
            Value::Float(n) => Ok(n),
            other => Err(kind_mismatch("float", &other)),
        }
    }

    /// Resolves and narrows to a color.
    pub fn color_value(&self) -> Result<Rgba> {
        match self.resolve()? {
            Value::Color(c) => Ok(c),
            other => Err(kind_mismatch("color", &other)),
        }
    }

    /// Resolves a float variable and renders it as a pixel length.
    pub fn px(&self) -> Result<String> {
        self.resolve()?.px()
    }

    /// Resolves a color variable and renders it as a CSS `rgba()` string.
    pub fn rgba(&self) -> Result<String> {
        self.resolve()?.rgba()
    }

    /// Resolves a color variable and renders it as a CSS `rgba()` string
    /// with the alpha overridden.
    pub fn rgba_with_alpha(&self, alpha: f64) -> Result<String> {
        self.resolve()?.rgba_with_alpha(alpha)
    }

    /// Resolves a color variable and renders it as an uppercase hex string.
    pub fn hex(&self) -> Result<String> {
        self.resolve()?.hex()
    }
}

fn kind_mismatch(expected: &'static str, actual: &Value) -> Error {
    Error::KindMismatch {
        expected,
        actual: actual.kind().as_str(),
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Variable {}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("uid", &self.uid())
            .finish()
    }
}
