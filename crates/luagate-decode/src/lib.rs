//! luagate - typed decoding of Lua values into host data structures
//!
//! Scripts hand the host tables, strings, numbers, functions and opaque
//! objects through [`mlua`]. This crate turns them into Rust values without
//! trusting their shape, reporting precise errors instead of panicking:
//!
//! - [`assert`]: leaf type assertions (`as_string`, `as_number`, ...)
//! - [`walk`]: first-error-wins table iteration
//! - [`fields`]: registry-driven decoding of record-shaped tables
//! - [`collect`]: list decoding and singleton-or-list handling
//! - [`invoke`] / [`module`]: registering host functions into a script environment
//!
//! # Example
//!
//! ```ignore
//! use luagate_decode::{decode_table, string_into, string_list_into, FieldDecoders};
//!
//! let table: mlua::Table = lua.load(r#"return {name = "build", steps = {"a", "b"}}"#).eval()?;
//!
//! let mut name = String::new();
//! let mut steps = Vec::new();
//! decode_table(
//!     &table,
//!     &mut FieldDecoders::new()
//!         .field("name", string_into(&mut name))
//!         .field("steps", string_list_into(&mut steps)),
//! )?;
//! ```

#![warn(missing_docs)]

pub mod assert;
pub mod collect;
pub mod error;
pub mod fields;
pub mod invoke;
pub mod module;
pub mod state;
pub mod value;
pub mod walk;

pub use assert::{
    as_boolean, as_function, as_number, as_string, as_table, as_user_data, unwrap_user_data,
    FromScript,
};
pub use collect::{decode_slice, for_each_or_singleton};
pub use error::{DecodeError, DecodeResult};
pub use fields::{
    decode_table, each_into, function_into, number_into, string_into, string_list_into,
    table_into, value_into, FieldDecoder, FieldDecoders,
};
pub use invoke::{create_module, set_functions, wrap_host_function, wrap_named_host_function};
pub use module::ScriptModule;
pub use state::ScriptState;
pub use value::ValueType;
pub use walk::for_each_pair;

// Re-export mlua for downstream crates
pub use mlua;
