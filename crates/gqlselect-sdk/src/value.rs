//! Argument values and the expressions that produce them.
//!
//! A [`ValueExpression`] is what a resolver argument is bound to. It is
//! resolved to a concrete [`Value`] at compile time: literals are used as-is,
//! captured paths are walked member by member, constructed values were
//! already evaluated by the caller.

use crate::error::CompileError;
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A concrete argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    Null,
    String(String),
    /// GUID-like identifier.
    Id(Uuid),
    DateTime(DateTime<FixedOffset>),
    Boolean(bool),
    Int(i64),
    /// Unsigned integers that do not fit `Int`.
    UInt(u64),
    Float(f64),
    /// Enum value, emitted as a bare identifier.
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Capture any serializable host value.
    ///
    /// Structs become [`Value::Object`] so [`CapturedPath`] can walk them;
    /// leaves keep their kind (see [`crate::capture`]).
    pub fn capture<T: Serialize + ?Sized>(host: &T) -> Result<Self, CompileError> {
        Ok(crate::capture::to_value(host)?)
    }

    /// Plain JSON form, used when a list argument is serialized.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::String(s) | Value::Enum(s) => serde_json::Value::String(s.clone()),
            Value::Id(id) => serde_json::Value::String(id.to_string()),
            Value::DateTime(dt) => serde_json::Value::String(format_round_trip(dt)),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::UInt(u) => serde_json::Value::from(*u),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Id(_) => "id",
            Value::DateTime(_) => "date-time",
            Value::Boolean(_) => "boolean",
            Value::Int(_) | Value::UInt(_) => "int",
            Value::Float(_) => "float",
            Value::Enum(_) => "enum",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }
}

/// Round-trip ISO-8601 form with seven fractional digits,
/// e.g. `2024-01-01T00:00:00.0000000+00:00`.
pub fn format_round_trip(dt: &DateTime<FixedOffset>) -> String {
    let ticks = (dt.nanosecond() % 1_000_000_000) / 100;
    format!(
        "{}.{:07}{}",
        dt.format("%Y-%m-%dT%H:%M:%S"),
        ticks,
        dt.format("%:z")
    )
}

/// `f32` through its shortest decimal form, so `0.1f32` stays `0.1`.
pub(crate) fn widen_f32(v: f32) -> f64 {
    v.to_string().parse().unwrap_or(f64::from(v))
}

/// The default textual form. Objects apply the argument rendering rules to
/// each entry.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::String(s) | Value::Enum(s) => f.write_str(s),
            Value::Id(id) => write!(f, "{}", id),
            Value::DateTime(dt) => f.write_str(&format_round_trip(dt)),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::List(_) => write!(f, "{}", self.to_json()),
            Value::Object(map) => {
                let entries: Vec<String> = map
                    .iter()
                    .filter_map(|(name, value)| crate::arguments::render_value(name, value))
                    .collect();
                write!(f, "{{{}}}", entries.join(", "))
            }
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }

            impl From<$ty> for ValueExpression {
                fn from(v: $ty) -> Self {
                    ValueExpression::Literal(v.into())
                }
            }
        )*
    };
}

value_from! {
    &str => String,
    String => String,
    bool => Boolean,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f64 => Float,
    Uuid => Id,
    DateTime<FixedOffset> => DateTime,
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map(Value::Int).unwrap_or(Value::UInt(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(widen_f32(v))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v.fixed_offset())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// Chain of member accesses rooted in a value captured at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedPath {
    pub root: Value,
    #[serde(default)]
    pub members: Vec<String>,
}

impl CapturedPath {
    pub fn new(root: impl Into<Value>) -> Self {
        Self {
            root: root.into(),
            members: Vec::new(),
        }
    }

    /// Capture a serializable host value as the root of a path.
    pub fn capture<T: Serialize + ?Sized>(host: &T) -> Result<Self, CompileError> {
        Ok(Self::new(Value::capture(host)?))
    }

    /// Dereference one more member.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(name.into());
        self
    }

    /// Walk the member chain, one dereference at a time.
    pub fn resolve(&self) -> Result<&Value, CompileError> {
        let mut current = &self.root;
        for member in &self.members {
            current = match current {
                Value::Object(fields) => fields.get(member),
                _ => None,
            }
            .ok_or_else(|| CompileError::UnresolvedPath {
                path: self.to_string(),
            })?;
        }
        Ok(current)
    }
}

impl fmt::Display for CapturedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("captured")?;
        for member in &self.members {
            write!(f, ".{}", member)?;
        }
        Ok(())
    }
}

/// An expression bound to a resolver argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueExpression {
    Literal(Value),
    CapturedPath(CapturedPath),
    /// An inline-constructed object, evaluated by the caller before the
    /// selection was built.
    Constructed(Value),
    /// A reference to a schema member. It has no value on the client side.
    FieldRef(String),
}

impl ValueExpression {
    pub fn constructed(value: impl Into<Value>) -> Self {
        Self::Constructed(value.into())
    }

    pub fn field_ref(name: impl Into<String>) -> Self {
        Self::FieldRef(name.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::CapturedPath(_) => "captured path",
            Self::Constructed(_) => "constructed value",
            Self::FieldRef(_) => "field reference",
        }
    }
}

impl From<Value> for ValueExpression {
    fn from(v: Value) -> Self {
        Self::Literal(v)
    }
}

impl From<CapturedPath> for ValueExpression {
    fn from(path: CapturedPath) -> Self {
        Self::CapturedPath(path)
    }
}

impl From<u64> for ValueExpression {
    fn from(v: u64) -> Self {
        Self::Literal(v.into())
    }
}

impl From<f32> for ValueExpression {
    fn from(v: f32) -> Self {
        Self::Literal(v.into())
    }
}

impl From<DateTime<Utc>> for ValueExpression {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Literal(v.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for ValueExpression {
    fn from(v: Option<T>) -> Self {
        Self::Literal(v.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for ValueExpression {
    fn from(v: Vec<T>) -> Self {
        Self::Literal(v.into())
    }
}
