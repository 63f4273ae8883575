//! Leaf type assertions
//!
//! Each function checks the runtime tag exactly; nothing is coerced (a
//! numeric string is not a number, a number is not a string), unlike
//! `mlua::FromLua`, which follows Lua's string/number conversions.

use mlua::{AnyUserData, Function, Table, Value};

use crate::error::{DecodeError, DecodeResult};

/// Return the value as a string, or a type error.
///
/// Strings that are not valid UTF-8 fail with the runtime's conversion error.
pub fn as_string(value: &Value) -> DecodeResult<String> {
    match value {
        Value::String(s) => Ok((*s.to_str()?).to_owned()),
        _ => Err(DecodeError::type_mismatch("string", value)),
    }
}

/// Return the value as a number, or a type error.
///
/// Both integer and float subtypes are accepted.
pub fn as_number(value: &Value) -> DecodeResult<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Integer(i) => Ok(*i as f64),
        _ => Err(DecodeError::type_mismatch("number", value)),
    }
}

/// Return the value as a boolean, or a type error.
pub fn as_boolean(value: &Value) -> DecodeResult<bool> {
    match value {
        Value::Boolean(b) => Ok(*b),
        _ => Err(DecodeError::type_mismatch("boolean", value)),
    }
}

/// Return the value as a function handle, or a type error.
pub fn as_function(value: &Value) -> DecodeResult<Function> {
    match value {
        Value::Function(f) => Ok(f.clone()),
        _ => Err(DecodeError::type_mismatch("function", value)),
    }
}

/// Return the value as a table handle, or a type error.
pub fn as_table(value: &Value) -> DecodeResult<Table> {
    match value {
        Value::Table(t) => Ok(t.clone()),
        _ => Err(DecodeError::type_mismatch("table", value)),
    }
}

/// Return the value as a user data handle, or a type error.
pub fn as_user_data(value: &Value) -> DecodeResult<AnyUserData> {
    match value {
        Value::UserData(u) => Ok(u.clone()),
        _ => Err(DecodeError::type_mismatch("UserData", value)),
    }
}

/// Invoke `f` with the host value of type `T` wrapped in a user data value.
///
/// Fails with a type error when the value is not user data, and with the
/// runtime's `UserDataTypeMismatch` when it wraps some other host type.
pub fn unwrap_user_data<T, R>(value: &Value, f: impl FnOnce(&T) -> DecodeResult<R>) -> DecodeResult<R>
where
    T: 'static,
{
    let user_data = as_user_data(value)?;
    let inner = user_data.borrow::<T>()?;
    f(&inner)
}

// ============================================================================
// FromScript
// ============================================================================

/// Convert from a Lua value to a Rust type without coercion.
///
/// Implement this trait to make a type usable with
/// [`value_into`](crate::fields::value_into).
pub trait FromScript: Sized {
    /// Convert, returning an error if the value has the wrong type
    fn from_script(value: &Value) -> DecodeResult<Self>;
}

impl FromScript for String {
    fn from_script(value: &Value) -> DecodeResult<Self> {
        as_string(value)
    }
}

impl FromScript for f64 {
    fn from_script(value: &Value) -> DecodeResult<Self> {
        as_number(value)
    }
}

impl FromScript for bool {
    fn from_script(value: &Value) -> DecodeResult<Self> {
        as_boolean(value)
    }
}

impl FromScript for Function {
    fn from_script(value: &Value) -> DecodeResult<Self> {
        as_function(value)
    }
}

impl FromScript for Table {
    fn from_script(value: &Value) -> DecodeResult<Self> {
        as_table(value)
    }
}

impl FromScript for AnyUserData {
    fn from_script(value: &Value) -> DecodeResult<Self> {
        as_user_data(value)
    }
}

// Optional destinations accept nil
impl<T: FromScript> FromScript for Option<T> {
    fn from_script(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::Nil => Ok(None),
            _ => T::from_script(value).map(Some),
        }
    }
}
