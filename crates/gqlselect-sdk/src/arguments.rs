//! Argument serialization.
//!
//! Each [`ArgumentBinding`] is resolved to a concrete [`Value`] and rendered
//! according to the value's kind. Null values drop the argument entirely.

use crate::error::CompileError;
use crate::selection::ArgumentBinding;
use crate::value::{format_round_trip, Value, ValueExpression};

/// Render `(a: 1, b: "x")` for a call's bindings.
///
/// Returns `None` when no binding produces any output, so callers never emit
/// empty parentheses.
pub fn render_arguments(bindings: &[ArgumentBinding]) -> Result<Option<String>, CompileError> {
    let mut rendered = Vec::with_capacity(bindings.len());
    for binding in bindings {
        if let Some(arg) = render_argument(binding)? {
            rendered.push(arg);
        }
    }
    if rendered.is_empty() {
        Ok(None)
    } else {
        Ok(Some(format!("({})", rendered.join(", "))))
    }
}

/// Render a single binding, or `None` if its value is null.
pub fn render_argument(binding: &ArgumentBinding) -> Result<Option<String>, CompileError> {
    let value = resolve(binding)?;
    tracing::trace!(parameter = %binding.name, kind = value.kind(), "rendering argument");
    Ok(render_value(parameter_name(&binding.name), value))
}

/// Resolve the bound expression to the value it stands for.
fn resolve(binding: &ArgumentBinding) -> Result<&Value, CompileError> {
    match &binding.value {
        ValueExpression::Literal(value) | ValueExpression::Constructed(value) => Ok(value),
        ValueExpression::CapturedPath(path) => path.resolve(),
        other @ ValueExpression::FieldRef(_) => Err(CompileError::UnsupportedArgument {
            parameter: binding.name.clone(),
            kind: other.kind(),
        }),
    }
}

/// `name: value` per the value's kind. Booleans use `name:value` with no space.
pub fn render_value(name: &str, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(format!("{}: \"{}\"", name, s)),
        Value::Id(id) => Some(format!("{}: \"{}\"", name, id)),
        Value::DateTime(dt) => Some(format!("{}: \"{}\"", name, format_round_trip(dt))),
        Value::Boolean(b) => Some(format!("{}:{}", name, b)),
        // Lists go out as JSON, not GraphQL list literals.
        Value::List(_) => Some(format!("{}: {}", name, value.to_json())),
        other => Some(format!("{}: {}", name, other)),
    }
}

/// Parameter names may carry the raw identifier prefix of a Rust keyword.
fn parameter_name(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}
