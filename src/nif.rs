//! NIF bindings (`Elixir.CharRef.Native`)
//!
//! Dialects are passed as strings (`"xml"`, `"html4"`, `"html5"`); an
//! unknown dialect raises `ArgumentError`. Table build failures come back
//! as `{:error, reason}`.

use rustler::{NifResult, ResourceArc};

use crate::core::builder::TableBuilder;
use crate::core::decoder::Decoder;
use crate::core::dialect::Dialect;
use crate::core::error::TableError;
use crate::resource::{TableRef, TableResource};
use crate::strategy::parallel::decode_parallel;

fn dialect_arg(name: &str) -> NifResult<Dialect> {
    name.parse().map_err(|_| rustler::Error::BadArg)
}

fn table_error(err: TableError) -> rustler::Error {
    rustler::Error::Term(Box::new(err.to_string()))
}

// ============================================================================
// Tables
// ============================================================================

/// Build the table a dialect implies
#[rustler::nif(schedule = "DirtyCpu")]
fn table_builtin(dialect: &str) -> NifResult<TableRef> {
    let table = dialect_arg(dialect)?.builtin_table().map_err(table_error)?;
    Ok(ResourceArc::new(TableResource::new(table)))
}

/// Build a table from `<!ENTITY name "value">` records
#[rustler::nif(schedule = "DirtyCpu")]
fn table_from_declarations(source: &str) -> NifResult<TableRef> {
    let mut builder = TableBuilder::new();
    builder.add_declarations(source).map_err(table_error)?;
    Ok(ResourceArc::new(TableResource::new(builder.build())))
}

#[rustler::nif]
fn table_size(table: TableRef) -> usize {
    table.table.len()
}

#[rustler::nif]
fn lookup(table: TableRef, name: &str) -> Option<String> {
    table.table.lookup_exact(name).map(str::to_string)
}

// ============================================================================
// Decoding
// ============================================================================

#[rustler::nif]
fn decode(table: TableRef, dialect: &str, input: &str) -> NifResult<String> {
    let decoder = Decoder::new(dialect_arg(dialect)?, &table.table);
    Ok(decoder.decode(input).into_owned())
}

/// Decode a list of binaries in parallel
#[rustler::nif(schedule = "DirtyCpu")]
fn decode_many(table: TableRef, dialect: &str, inputs: Vec<&str>) -> NifResult<Vec<String>> {
    let decoder = Decoder::new(dialect_arg(dialect)?, &table.table);
    Ok(decode_parallel(&decoder, &inputs))
}

rustler::init!("Elixir.CharRef.Native");
