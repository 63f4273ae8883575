//! Field decoder registry
//!
//! Decoding a record-shaped table is driven by the caller: it declares the
//! expected shape as a set of named slots, each with a small decoder that
//! writes into a destination the caller owns. One generic walk then serves
//! every record shape.
//!
//! ```ignore
//! let mut name = String::new();
//! let mut steps = Vec::new();
//!
//! decode_table(
//!     &table,
//!     &mut FieldDecoders::new()
//!         .field("name", string_into(&mut name))
//!         .field("steps", string_list_into(&mut steps)),
//! )?;
//! ```
//!
//! Keys without a registered decoder fail the decode. Fields decoded before
//! a failure keep their new values; treat the destinations as garbage when
//! the decode returns an error.

use mlua::{Function, Table, Value};
use rustc_hash::FxHashMap;

use crate::assert::{as_function, as_string, as_table, FromScript};
use crate::collect::{decode_slice, for_each_or_singleton};
use crate::error::{DecodeError, DecodeResult};
use crate::walk::for_each_pair;

/// Decoder for a single named field.
///
/// Implemented for every `FnMut(&Value) -> DecodeResult<()>`, so plain
/// closures can be registered directly.
pub trait FieldDecoder {
    /// Decode `value` into this decoder's destination
    fn apply(&mut self, value: &Value) -> DecodeResult<()>;
}

impl<F> FieldDecoder for F
where
    F: FnMut(&Value) -> DecodeResult<()>,
{
    fn apply(&mut self, value: &Value) -> DecodeResult<()> {
        self(value)
    }
}

/// Mapping from field name to the decoder for that field.
///
/// Built per record shape; the `'a` lifetime ties it to the destinations
/// its decoders write into.
#[derive(Default)]
pub struct FieldDecoders<'a> {
    decoders: FxHashMap<String, Box<dyn FieldDecoder + 'a>>,
}

impl<'a> FieldDecoders<'a> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            decoders: FxHashMap::default(),
        }
    }

    /// Register a decoder (builder form). A repeated name replaces the earlier decoder.
    pub fn field(mut self, name: impl Into<String>, decoder: impl FieldDecoder + 'a) -> Self {
        self.insert(name, decoder);
        self
    }

    /// Register a decoder. A repeated name replaces the earlier decoder.
    pub fn insert(&mut self, name: impl Into<String>, decoder: impl FieldDecoder + 'a) {
        self.decoders.insert(name.into(), Box::new(decoder));
    }

    /// Check if a field has a decoder
    pub fn contains(&self, name: &str) -> bool {
        self.decoders.contains_key(name)
    }

    /// Get all registered field names, sorted
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.decoders.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get number of registered fields
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Decode `table` through this registry; see [`decode_table`].
    pub fn decode(&mut self, table: &Table) -> DecodeResult<()> {
        for_each_pair(table, |key, value| {
            let name = as_string(key)?;
            match self.decoders.get_mut(&name) {
                Some(decoder) => decoder.apply(value),
                None => {
                    tracing::debug!(field = %name, "rejecting unexpected field");
                    Err(DecodeError::UnexpectedField(name))
                }
            }
        })
    }
}

/// Decode a table into named fields.
///
/// Every key must be a string with a decoder in `decoders`; the matching
/// decoder is applied to the key's value. The first non-string key, unknown
/// field, or decoder error aborts the walk and is returned unchanged.
pub fn decode_table(table: &Table, decoders: &mut FieldDecoders<'_>) -> DecodeResult<()> {
    decoders.decode(table)
}

// ============================================================================
// Decoder factories
// ============================================================================

/// Decoder storing any [`FromScript`] value into `dest`.
pub fn value_into<'a, T>(dest: &'a mut T) -> impl FnMut(&Value) -> DecodeResult<()> + 'a
where
    T: FromScript + 'a,
{
    move |value: &Value| {
        *dest = T::from_script(value)?;
        Ok(())
    }
}

/// Decoder storing a string into `dest`.
pub fn string_into(dest: &mut String) -> impl FnMut(&Value) -> DecodeResult<()> + '_ {
    value_into(dest)
}

/// Decoder storing a number into `dest`.
pub fn number_into(dest: &mut f64) -> impl FnMut(&Value) -> DecodeResult<()> + '_ {
    value_into(dest)
}

/// Decoder storing a function handle into `dest`.
pub fn function_into(dest: &mut Option<Function>) -> impl FnMut(&Value) -> DecodeResult<()> + '_ {
    move |value: &Value| {
        *dest = Some(as_function(value)?);
        Ok(())
    }
}

/// Decoder appending a list of strings to `dest`.
///
/// The value must be a table; its elements are appended in iteration order.
/// A non-string element stops the decode with the elements before it
/// already appended.
pub fn string_list_into(dest: &mut Vec<String>) -> impl FnMut(&Value) -> DecodeResult<()> + '_ {
    move |value: &Value| {
        for element in decode_slice(value)? {
            dest.push(as_string(&element)?);
        }
        Ok(())
    }
}

/// Decoder for a nested record: the value must be a table, decoded with `fields`.
pub fn table_into<'a>(mut fields: FieldDecoders<'a>) -> impl FnMut(&Value) -> DecodeResult<()> + 'a {
    move |value: &Value| fields.decode(&as_table(value)?)
}

/// Decoder applying `f` to each element of a list, or once to a lone value.
pub fn each_into<'a, F>(mut f: F) -> impl FnMut(&Value) -> DecodeResult<()> + 'a
where
    F: FnMut(&Value) -> DecodeResult<()> + 'a,
{
    move |value: &Value| for_each_or_singleton(value, &mut f)
}
