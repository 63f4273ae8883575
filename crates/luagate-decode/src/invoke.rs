//! Invocation wrapper
//!
//! Host functions are written as `Fn(&mut ScriptState) -> Result<(), E>`.
//! On success the wrapped function returns whatever the host function
//! pushed. On failure it raises a Lua runtime error whose message is the
//! error's `Display` output, so a script sees it through `pcall` or as an
//! uncaught error.

use std::fmt;

use mlua::{Function, Lua, MultiValue, Table};

use crate::state::ScriptState;

fn adapt<F, E>(
    name: Option<String>,
    f: F,
) -> impl Fn(&Lua, MultiValue) -> mlua::Result<MultiValue> + 'static
where
    F: Fn(&mut ScriptState<'_>) -> Result<(), E> + 'static,
    E: fmt::Display + 'static,
{
    move |lua: &Lua, args: MultiValue| {
        let mut state = ScriptState::new(lua, args.into_iter().collect());
        match f(&mut state) {
            Ok(()) => Ok(state.into_returns()),
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(function = name.as_deref(), error = %message, "host function raised error");
                Err(mlua::Error::RuntimeError(message))
            }
        }
    }
}

/// Wrap an error-returning host function into a Lua function.
pub fn wrap_host_function<F, E>(lua: &Lua, f: F) -> mlua::Result<Function>
where
    F: Fn(&mut ScriptState<'_>) -> Result<(), E> + 'static,
    E: fmt::Display + 'static,
{
    lua.create_function(adapt(None, f))
}

/// Like [`wrap_host_function`], with a name attached to its diagnostics.
pub fn wrap_named_host_function<F, E>(lua: &Lua, name: impl Into<String>, f: F) -> mlua::Result<Function>
where
    F: Fn(&mut ScriptState<'_>) -> Result<(), E> + 'static,
    E: fmt::Display + 'static,
{
    lua.create_function(adapt(Some(name.into()), f))
}

/// Set every `(name, function)` pair as a field of `table`.
pub fn set_functions(table: &Table, api: &[(String, Function)]) -> mlua::Result<()> {
    for (name, function) in api {
        table.set(name.as_str(), function.clone())?;
    }
    Ok(())
}

/// Build a module loader from a set of functions.
///
/// Each call of the returned function creates a fresh table holding `api`
/// and returns it, ready to be bound as a namespace in the script
/// environment (for example through `package.preload`).
pub fn create_module<I, S>(lua: &Lua, api: I) -> mlua::Result<Function>
where
    I: IntoIterator<Item = (S, Function)>,
    S: Into<String>,
{
    let api: Vec<(String, Function)> = api
        .into_iter()
        .map(|(name, function)| (name.into(), function))
        .collect();

    wrap_host_function(lua, move |state: &mut ScriptState<'_>| -> mlua::Result<()> {
        let table = state.new_table()?;
        set_functions(&table, &api)?;
        state.push(table)
    })
}
