//! Runtime type tags for Lua values

use std::fmt;

use mlua::Value;

/// Type tag of a Lua value, as reported in type errors.
///
/// Lua 5.4 splits numbers into integer and float subtypes; both report as
/// `Number`. Light and full user data both report as `UserData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `nil`
    Nil,
    /// `true` / `false`
    Boolean,
    /// Integer or float
    Number,
    /// Byte string
    String,
    /// Lua or host function
    Function,
    /// Table
    Table,
    /// Host-owned object
    UserData,
    /// Coroutine
    Thread,
    /// Anything else the runtime can hand out (error values and the like)
    Other,
}

impl ValueType {
    /// Tag of `value`
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Nil => ValueType::Nil,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) | Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Function(_) => ValueType::Function,
            Value::Table(_) => ValueType::Table,
            Value::UserData(_) | Value::LightUserData(_) => ValueType::UserData,
            Value::Thread(_) => ValueType::Thread,
            _ => ValueType::Other,
        }
    }

    /// Display name of the tag
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Nil => "Nil",
            ValueType::Boolean => "Boolean",
            ValueType::Number => "Number",
            ValueType::String => "String",
            ValueType::Function => "Function",
            ValueType::Table => "Table",
            ValueType::UserData => "UserData",
            ValueType::Thread => "Thread",
            ValueType::Other => "Other",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
