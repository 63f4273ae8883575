//! Table walker

use mlua::{Table, Value};

/// Invoke `f` on each key/value pair of `table` in the order Lua's `next`
/// yields them.
///
/// The first error returned by `f` stops the walk and is returned; the
/// remaining pairs are never visited. A runtime failure while advancing the
/// iterator is returned the same way.
pub fn for_each_pair<F, E>(table: &Table, mut f: F) -> Result<(), E>
where
    F: FnMut(&Value, &Value) -> Result<(), E>,
    E: From<mlua::Error>,
{
    for pair in table.pairs::<Value, Value>() {
        let (key, value) = pair?;
        f(&key, &value)?;
    }
    Ok(())
}
