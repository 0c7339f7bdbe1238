//! Reference Table
//!
//! Immutable name -> value map supporting exact lookup and
//! longest-prefix-at-start lookup.
//!
//! Layout:
//! - `entries`: references sorted by name (byte order) for binary search
//! - `prefix_parent`: for each entry, the index of the nearest preceding
//!   entry whose name is a prefix of this entry's name, or `NO_PARENT`
//!
//! A failed binary search lands just after the largest name sorting below
//! the candidate. Every table name that prefixes the candidate also prefixes
//! that neighbour, so walking the parent chain from there visits the
//! candidate's prefixes longest first.

use super::reference::Reference;

const NO_PARENT: u32 = u32::MAX;

/// Sorted, read-only table of named references
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<Reference>,
    prefix_parent: Vec<u32>,
    max_name_len: usize,
}

impl ReferenceTable {
    /// Build from references with unique names. Sorting is done here.
    pub(crate) fn from_unique(mut entries: Vec<Reference>) -> Self {
        entries.sort_unstable_by(|a, b| a.name().cmp(b.name()));

        let mut prefix_parent = Vec::with_capacity(entries.len());
        let mut max_name_len = 0;

        for (i, entry) in entries.iter().enumerate() {
            let name = entry.name().as_bytes();
            max_name_len = max_name_len.max(name.len());

            // Walk the predecessor's chain until we hit one of our own prefixes
            let mut candidate = if i == 0 { NO_PARENT } else { (i - 1) as u32 };
            while candidate != NO_PARENT
                && !name.starts_with(entries[candidate as usize].name().as_bytes())
            {
                candidate = prefix_parent[candidate as usize];
            }
            prefix_parent.push(candidate);
        }

        ReferenceTable {
            entries,
            prefix_parent,
            max_name_len,
        }
    }

    /// Number of references
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in bytes of the longest name
    #[inline]
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// References in name order
    pub fn iter(&self) -> impl Iterator<Item = &Reference> + '_ {
        self.entries.iter()
    }

    /// Exact, case-sensitive lookup
    pub fn lookup_exact(&self, name: &str) -> Option<&str> {
        self.find(name.as_bytes())
            .ok()
            .map(|i| self.entries[i].value())
    }

    /// Longest table name that is a prefix of `candidate`
    pub fn longest_prefix_at_start(&self, candidate: &str) -> Option<&Reference> {
        self.longest_prefix_bytes(candidate.as_bytes())
    }

    /// Byte-level variant used by the decoder, which scans raw input
    pub(crate) fn longest_prefix_bytes(&self, candidate: &[u8]) -> Option<&Reference> {
        // No name is longer than max_name_len, so nothing past it matters
        let candidate = &candidate[..candidate.len().min(self.max_name_len)];

        let mut index = match self.find(candidate) {
            Ok(i) => return Some(&self.entries[i]),
            Err(0) => return None,
            Err(insert_at) => (insert_at - 1) as u32,
        };

        while index != NO_PARENT {
            let entry = &self.entries[index as usize];
            if candidate.starts_with(entry.name().as_bytes()) {
                return Some(entry);
            }
            index = self.prefix_parent[index as usize];
        }
        None
    }

    /// Exact byte-level lookup used by the decoder
    pub(crate) fn lookup_bytes(&self, name: &[u8]) -> Option<&str> {
        self.find(name).ok().map(|i| self.entries[i].value())
    }

    #[inline]
    fn find(&self, name: &[u8]) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.name().as_bytes().cmp(name))
    }
}
