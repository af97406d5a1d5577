//! Thread-safe typed handle tables. Callers exchange small copyable handles for
//! shared access to heavyweight resource objects, without ever holding a raw
//! pointer into the table's storage.
//!
//! The table hands out reference-counted clones of its slot contents, so a
//! resource fetched via [`HandleTable::get`] remains alive even if the slot is
//! freed out from under it. There is no generation tracking: a stale handle
//! whose slot was freed and reused will silently resolve to the new occupant.

/// Scalar type for slot indices within a handle table
///
/// u32 is plenty; a handle type's `INDEX_MAX` is expected to be far smaller
/// than the full range since the index shares the handle's bits with a type tag
pub type HandleIndexT = u32;

mod handle;
mod singleton;
mod table;

pub use handle::TypedHandle;
pub use singleton::SingletonHandleTable;
pub use table::HandleTable;
