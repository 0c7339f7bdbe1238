//! ResourceArc Wrappers
//!
//! Keeps a built table alive on the BEAM side so it is built once and
//! shared by every decode call.

use rustler::ResourceArc;

use crate::core::table::ReferenceTable;

/// Built table owned by the BEAM. Immutable, so no lock is needed.
pub struct TableResource {
    pub table: ReferenceTable,
}

impl TableResource {
    pub fn new(table: ReferenceTable) -> Self {
        TableResource { table }
    }
}

#[rustler::resource_impl]
impl rustler::Resource for TableResource {}

/// Type alias for the ResourceArc
pub type TableRef = ResourceArc<TableResource>;
