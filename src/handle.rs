use crate::HandleIndexT;

/// Contract a handle type must fulfill to be issued by a [`HandleTable`].
///
/// A handle packs a slot index together with a type tag identifying which
/// logical resource category (and therefore which table) it belongs to. How
/// the two are encoded is entirely up to the implementor; the table only needs
/// to mint handles from parts and to decode the index back out when the tag
/// matches.
///
/// [`HandleTable`]: crate::HandleTable
pub trait TypedHandle: Copy {
    /// Identifies the logical resource category a handle belongs to. One
    /// handle type may serve several categories, each backed by its own table.
    type Tag: Copy + PartialEq;

    /// Maximum index value the encoding can represent. Once a table's backing
    /// array would need to grow past this, allocation fails instead.
    const INDEX_MAX: HandleIndexT;

    /// Mint a handle encoding (index, tag)
    fn from_parts(
        index: HandleIndexT,
        tag: Self::Tag,
    ) -> Self;

    /// Decode the index, checked against an expected tag. Returns `None` if
    /// this handle's tag does not match or the encoding is otherwise invalid.
    fn typed_index(
        &self,
        tag: Self::Tag,
    ) -> Option<HandleIndexT>;
}
