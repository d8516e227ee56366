//! Record types mirroring the design tool's local-variables payload.
//!
//! Field names follow the wire format (`camelCase`, with a few renames where
//! the wire spelling differs from the natural Rust name). Unknown payload
//! fields such as `description`, `remote`, or `scopes` are ignored on decode.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four value kinds a variable can resolve to.
///
/// Spelled `BOOLEAN`/`STRING`/`FLOAT`/`COLOR` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableKind {
    Boolean,
    String,
    Float,
    Color,
}

impl VariableKind {
    /// Lowercase label, used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Boolean => "boolean",
            VariableKind::String => "string",
            VariableKind::Float => "float",
            VariableKind::Color => "color",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color value with channels in the `0.0..=1.0` range, as delivered by the
/// design tool.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Creates a color from unit-range channels.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
}

/// Discriminator the wire format attaches to alias objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasTag {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// A reference from one variable's value slot to another variable.
///
/// On the wire: `{ "type": "VARIABLE_ALIAS", "id": "VariableID:..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRef {
    #[serde(rename = "type")]
    pub tag: AliasTag,
    /// Id of the variable this slot points at.
    pub id: String,
}

impl AliasRef {
    /// Creates an alias pointing at the given variable id.
    pub fn to(id: impl Into<String>) -> Self {
        AliasRef {
            tag: AliasTag::VariableAlias,
            id: id.into(),
        }
    }
}

/// One value slot of a variable: either a kind-typed literal or an alias to
/// another variable.
///
/// `Alias` is listed first so an aliased slot is never mistaken for a literal
/// object; the `VARIABLE_ALIAS` tag on [`AliasRef`] keeps color objects out of
/// that arm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueSlot {
    Alias(AliasRef),
    Boolean(bool),
    Float(f64),
    String(String),
    Color(Rgba),
}

impl ValueSlot {
    /// Returns the alias reference if this slot indirects to another variable.
    pub fn as_alias(&self) -> Option<&AliasRef> {
        match self {
            ValueSlot::Alias(alias) => Some(alias),
            _ => None,
        }
    }

    /// Returns true if this slot is an alias rather than a literal.
    pub fn is_alias(&self) -> bool {
        matches!(self, ValueSlot::Alias(_))
    }
}

/// One named mode of a collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeRecord {
    pub mode_id: String,
    pub name: String,
}

/// A collection of variables sharing one mutually-exclusive set of modes.
///
/// `default_mode_id` is trusted to match one of the declared `modes`; the
/// dataset is not validated on ingest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub id: String,
    pub name: String,
    pub default_mode_id: String,
    /// Declared modes, in declaration order.
    pub modes: Vec<ModeRecord>,
    /// Member variable ids, in declaration order.
    pub variable_ids: Vec<String>,
}

/// A named, typed variable with one value slot per mode of its owning
/// collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableRecord {
    pub id: String,
    pub name: String,
    /// Id of the owning collection.
    #[serde(rename = "variableCollectionId")]
    pub collection_id: String,
    /// The kind every slot of this variable ultimately resolves to.
    #[serde(rename = "resolvedType")]
    pub kind: VariableKind,
    /// Mode id to value slot.
    pub values_by_mode: HashMap<String, ValueSlot>,
}
