use crate::HandleTable;
use crate::TypedHandle;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// A lazily-constructed, process-lifetime [`HandleTable`], for callers that
/// want one shared table per type tag without explicit setup or teardown.
///
/// `new` is const so the holder can live in a `static`. The underlying table
/// is built on first call to [`get`](Self::get); concurrent first use from
/// multiple threads constructs it exactly once, and construction never touches
/// the table's own internal mutex. There is no teardown, the table lives for
/// the rest of the process.
///
/// ```
/// use handle_table::{SingletonHandleTable, TypedHandle, HandleIndexT};
/// # #[derive(Clone, Copy, PartialEq)] struct Tag;
/// # #[derive(Clone, Copy)] struct Handle(u32);
/// # impl TypedHandle for Handle {
/// #     type Tag = Tag;
/// #     const INDEX_MAX: HandleIndexT = 0xffff;
/// #     fn from_parts(index: HandleIndexT, _tag: Tag) -> Self { Handle(index) }
/// #     fn typed_index(&self, _tag: Tag) -> Option<HandleIndexT> { Some(self.0) }
/// # }
/// static SOURCES: SingletonHandleTable<Handle, String> = SingletonHandleTable::new(Tag);
///
/// let handle = SOURCES.get().allocate("camera0".to_string()).unwrap();
/// assert_eq!("camera0", *SOURCES.get().get(handle).unwrap());
/// ```
pub struct SingletonHandleTable<H: TypedHandle, T> {
    tag: H::Tag,
    table: OnceCell<Arc<HandleTable<H, T>>>,
}

impl<H: TypedHandle, T> SingletonHandleTable<H, T> {
    /// Create an empty holder; the table itself is not constructed yet
    pub const fn new(tag: H::Tag) -> Self {
        SingletonHandleTable {
            tag,
            table: OnceCell::new(),
        }
    }

    /// Return the shared table, constructing it on first use
    pub fn get(&self) -> &Arc<HandleTable<H, T>> {
        self.table
            .get_or_init(|| Arc::new(HandleTable::new(self.tag)))
    }
}
