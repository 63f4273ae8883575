//! Per-call view of the Lua state handed to host functions
//!
//! Host functions read their arguments from a [`ScriptState`] and push the
//! values they return onto it. The invocation wrapper builds one state per
//! call and hands the pushed values back to Lua when the function succeeds.

use mlua::{IntoLua, Lua, MultiValue, Table, Value};

/// Arguments and return values of one host-function call.
pub struct ScriptState<'lua> {
    lua: &'lua Lua,
    args: Vec<Value>,
    returns: Vec<Value>,
}

impl<'lua> ScriptState<'lua> {
    /// Create a call state with the given arguments and no return values
    pub fn new(lua: &'lua Lua, args: Vec<Value>) -> Self {
        Self {
            lua,
            args,
            returns: Vec::new(),
        }
    }

    /// The Lua state the call runs in
    pub fn lua(&self) -> &'lua Lua {
        self.lua
    }

    // ========================================================================
    // Arguments
    // ========================================================================

    /// All arguments, in call order
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Argument `n` (1-based, like the Lua stack); `Nil` when absent
    pub fn arg(&self, n: usize) -> Value {
        n.checked_sub(1)
            .and_then(|i| self.args.get(i))
            .cloned()
            .unwrap_or(Value::Nil)
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Push a return value
    pub fn push(&mut self, value: impl IntoLua) -> mlua::Result<()> {
        let value = value.into_lua(self.lua)?;
        self.returns.push(value);
        Ok(())
    }

    /// Values pushed so far
    pub fn returns(&self) -> &[Value] {
        &self.returns
    }

    pub(crate) fn into_returns(self) -> MultiValue {
        self.returns.into_iter().collect()
    }

    // ========================================================================
    // Environment
    // ========================================================================

    /// Create an empty table
    pub fn new_table(&self) -> mlua::Result<Table> {
        self.lua.create_table()
    }

    /// Bind a global variable
    pub fn set_global(&self, name: &str, value: impl IntoLua) -> mlua::Result<()> {
        self.lua.globals().set(name, value)
    }

    /// Read a global variable
    pub fn global(&self, name: &str) -> mlua::Result<Value> {
        self.lua.globals().get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_one_based() {
        let lua = Lua::new();
        let state = ScriptState::new(&lua, vec![Value::Integer(10), Value::Boolean(true)]);

        assert_eq!(state.args().len(), 2);
        assert!(matches!(state.arg(1), Value::Integer(10)));
        assert!(matches!(state.arg(2), Value::Boolean(true)));
        assert!(state.arg(0).is_nil());
        assert!(state.arg(3).is_nil());
    }

    #[test]
    fn test_push_converts_host_values() {
        let lua = Lua::new();
        let mut state = ScriptState::new(&lua, Vec::new());
        state.push("hello").unwrap();
        state.push(3).unwrap();
        assert_eq!(state.returns().len(), 2);
        assert!(std::ptr::eq(state.lua(), &lua));

        let returns: Vec<Value> = state.into_returns().into_iter().collect();
        assert_eq!(returns.len(), 2);
        assert_eq!(crate::assert::as_string(&returns[0]).unwrap(), "hello");
        assert!(matches!(returns[1], Value::Integer(3)));
    }

    #[test]
    fn test_globals_round_trip_through_lua() {
        let lua = Lua::new();
        let state = ScriptState::new(&lua, Vec::new());
        state.set_global("answer", 42).unwrap();

        let answer: i64 = lua.load("return answer").eval().unwrap();
        assert_eq!(answer, 42);
        assert!(state.global("missing").unwrap().is_nil());
    }
}
