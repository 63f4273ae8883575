//! Script module builder
//!
//! Collects wrapped host functions under a namespace name and exposes them
//! to scripts, either as a loader function or installed directly as a
//! global table.

use std::fmt;

use mlua::{Function, Lua};
use rustc_hash::FxHashMap;

use crate::invoke::{create_module, set_functions, wrap_named_host_function};
use crate::state::ScriptState;

/// Named namespace of host functions.
///
/// ```ignore
/// let mut module = ScriptModule::new("review");
/// module.register(&lua, "approve", |state| {
///     let reviewer = as_string(&state.arg(1))?;
///     state.push(format!("approved by {}", reviewer))?;
///     Ok::<(), DecodeError>(())
/// })?;
/// module.install(&lua)?;
/// ```
pub struct ScriptModule {
    name: String,
    functions: FxHashMap<String, Function>,
}

impl ScriptModule {
    /// Create an empty module.
    ///
    /// # Arguments
    /// * `name` - Namespace name as it will appear to scripts
    pub fn new(name: impl Into<String>) -> Self {
        ScriptModule {
            name: name.into(),
            functions: FxHashMap::default(),
        }
    }

    /// Register an error-returning host function, wrapped with the
    /// invocation wrapper. A repeated name replaces the earlier one.
    pub fn register<F, E>(&mut self, lua: &Lua, name: impl Into<String>, f: F) -> mlua::Result<()>
    where
        F: Fn(&mut ScriptState<'_>) -> Result<(), E> + 'static,
        E: fmt::Display + 'static,
    {
        let name = name.into();
        let qualified = format!("{}.{}", self.name, name);
        let function = wrap_named_host_function(lua, qualified, f)?;
        self.functions.insert(name, function);
        Ok(())
    }

    /// Register an already-built Lua function as-is
    pub fn register_function(&mut self, name: impl Into<String>, function: Function) {
        self.functions.insert(name.into(), function);
    }

    /// Get module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get function by name
    pub fn get_function(&self, name: &str) -> Option<Function> {
        self.functions.get(name).cloned()
    }

    /// Get all function names, sorted
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get number of registered functions
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Loader function that returns a fresh namespace table on every call
    pub fn loader(&self, lua: &Lua) -> mlua::Result<Function> {
        create_module(lua, self.sorted_api())
    }

    /// Build the namespace table and bind it as a global under the module name
    pub fn install(&self, lua: &Lua) -> mlua::Result<()> {
        let table = lua.create_table()?;
        set_functions(&table, &self.sorted_api())?;
        lua.globals().set(self.name.as_str(), table)?;
        tracing::debug!(
            module = %self.name,
            functions = self.functions.len(),
            "installed script module"
        );
        Ok(())
    }

    fn sorted_api(&self) -> Vec<(String, Function)> {
        let mut api: Vec<(String, Function)> = self
            .functions
            .iter()
            .map(|(name, function)| (name.clone(), function.clone()))
            .collect();
        api.sort_by(|a, b| a.0.cmp(&b.0));
        api
    }
}

impl fmt::Debug for ScriptModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptModule")
            .field("name", &self.name)
            .field("functions", &self.function_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::as_string;
    use crate::error::DecodeError;
    use mlua::{Table, Value};

    fn echo_module(lua: &Lua) -> ScriptModule {
        let mut module = ScriptModule::new("echo");
        module
            .register(lua, "say", |state: &mut ScriptState<'_>| {
                let text = as_string(&state.arg(1))?;
                state.push(text)?;
                Ok::<(), DecodeError>(())
            })
            .unwrap();
        module
            .register(lua, "fail", |_state: &mut ScriptState<'_>| {
                Err(DecodeError::custom("always fails"))
            })
            .unwrap();
        module
    }

    #[test]
    fn test_module_metadata() {
        let lua = Lua::new();
        let module = echo_module(&lua);
        assert_eq!(module.name(), "echo");
        assert_eq!(module.function_count(), 2);
        assert_eq!(module.function_names(), vec!["fail", "say"]);
        assert!(module.get_function("say").is_some());
        assert!(module.get_function("shout").is_none());
        assert_eq!(
            format!("{:?}", module),
            r#"ScriptModule { name: "echo", functions: ["fail", "say"] }"#
        );
    }

    #[test]
    fn test_install_binds_global_namespace() {
        let lua = Lua::new();
        echo_module(&lua).install(&lua).unwrap();

        let said: String = lua.load(r#"return echo.say("hi")"#).eval().unwrap();
        assert_eq!(said, "hi");

        let (ok, message): (bool, String) = lua
            .load("local ok, err = pcall(echo.say, 1) return ok, tostring(err)")
            .eval()
            .unwrap();
        assert!(!ok);
        assert!(message.contains("wrong type: expecting string, have Number"));
    }

    #[test]
    fn test_registered_failure_raises() {
        let lua = Lua::new();
        echo_module(&lua).install(&lua).unwrap();

        let result: mlua::Result<()> = lua.load("echo.fail()").exec();
        let message = result.unwrap_err().to_string();
        assert!(message.contains("always fails"));
    }

    #[test]
    fn test_loader_returns_namespace_without_global() {
        let lua = Lua::new();
        let loader = echo_module(&lua).loader(&lua).unwrap();
        let namespace: Table = loader.call(()).unwrap();

        let say: Value = namespace.get("say").unwrap();
        assert!(matches!(say, Value::Function(_)));
        let global: Value = lua.globals().get("echo").unwrap();
        assert!(global.is_nil());
    }

    #[test]
    fn test_register_raw_function() {
        let lua = Lua::new();
        let mut module = ScriptModule::new("raw");
        module.register_function("nop", lua.create_function(|_, ()| Ok(())).unwrap());
        assert_eq!(module.function_names(), vec!["nop"]);

        module.install(&lua).unwrap();
        lua.load("raw.nop()").exec().unwrap();
    }
}
