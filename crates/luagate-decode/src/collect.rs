//! Collection and singleton helpers

use mlua::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::walk::for_each_pair;

/// Collect the values of a table into a vector, in iteration order.
///
/// Fails with a type error when `value` is not a table. Keys are not
/// inspected: a table with string keys yields its values just the same,
/// and index gaps are not detected.
pub fn decode_slice(value: &Value) -> DecodeResult<Vec<Value>> {
    let table = match value {
        Value::Table(table) => table,
        _ => return Err(DecodeError::type_mismatch("table", value)),
    };

    let mut values = Vec::with_capacity(table.raw_len());
    for_each_pair(table, |_key, value| {
        values.push(value.clone());
        Ok::<(), DecodeError>(())
    })?;

    Ok(values)
}

/// Invoke `f` on each element of a list-shaped value, or once on the value
/// itself when it is not a table.
///
/// List iteration stops at the first error. When the value is not a table
/// the slice error is dropped and only `f`'s own result is reported.
pub fn for_each_or_singleton<F, E>(value: &Value, mut f: F) -> Result<(), E>
where
    F: FnMut(&Value) -> Result<(), E>,
{
    let values = match decode_slice(value) {
        Ok(values) => values,
        Err(err) => {
            tracing::trace!(error = %err, "decoding value as singleton");
            return f(value);
        }
    };

    for value in &values {
        f(value)?;
    }
    Ok(())
}
