use crate::HandleIndexT;
use crate::TypedHandle;
use parking_lot::Mutex;
use std::sync::Arc;

/// A mutex-guarded, growable slot array mapping dense indices to shared
/// resource objects, paired with a typed-handle factory.
///
/// Allocation scans for the first empty slot, so live indices stay packed near
/// zero and freed slots are reused eagerly. The backing array only grows; its
/// length is a high-water mark of slots that have ever been live at once.
///
/// All operations take `&self` and are safe to call from multiple threads. A
/// single exclusive lock serializes structural changes; `get`/`free` reject
/// handles with the wrong tag without touching the lock.
pub struct HandleTable<H: TypedHandle, T> {
    slots: Mutex<Vec<Option<Arc<T>>>>,
    tag: H::Tag,
}

impl<H: TypedHandle, T> HandleTable<H, T> {
    /// Create an empty table issuing handles tagged with `tag`
    pub fn new(tag: H::Tag) -> Self {
        HandleTable {
            slots: Mutex::new(Vec::new()),
            tag,
        }
    }

    fn make_handle(
        &self,
        index: HandleIndexT,
    ) -> H {
        H::from_parts(index, self.tag)
    }

    // First-fit scan, or append if every slot is live. The linear scan is the
    // allocation policy, not an accident: low indices are reused first, which
    // keeps the live range dense for downstream consumers that iterate 0..max.
    // O(len) when the table is full of live entries, acceptable at the small
    // table sizes this is built for.
    fn install(
        &self,
        slots: &mut Vec<Option<Arc<T>>>,
        resource: Arc<T>,
    ) -> Option<H> {
        for (index, slot) in slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(resource);
                log::trace!(
                    "allocate {} reused index {}",
                    core::any::type_name::<T>(),
                    index
                );
                return Some(self.make_handle(index as HandleIndexT));
            }
        }

        let index = slots.len() as HandleIndexT;
        if index >= H::INDEX_MAX {
            log::warn!(
                "handle table for {} is full ({} slots)",
                core::any::type_name::<T>(),
                slots.len()
            );
            return None;
        }

        slots.push(Some(resource));
        log::trace!(
            "allocate {} new index {}",
            core::any::type_name::<T>(),
            index
        );
        Some(self.make_handle(index))
    }

    /// Allocate a slot and construct the resource into it, returning a handle,
    /// or `None` if the index space is exhausted.
    ///
    /// `init` runs while the table's lock is held, so an expensive constructor
    /// serializes all concurrent allocators. An `init` that blocks, or that
    /// allocates from this or another handle table, can deadlock.
    pub fn allocate_with<F: FnOnce() -> T>(
        &self,
        init: F,
    ) -> Option<H> {
        let mut slots = self.slots.lock();
        self.install(&mut slots, Arc::new(init()))
    }

    /// Allocate a slot for an already-constructed resource
    pub fn allocate(
        &self,
        resource: T,
    ) -> Option<H> {
        self.allocate_shared(Arc::new(resource))
    }

    /// Allocate a slot and install a caller-supplied shared reference instead
    /// of constructing a new resource. Same slot policy and failure behavior
    /// as [`allocate_with`](Self::allocate_with).
    pub fn allocate_shared(
        &self,
        resource: Arc<T>,
    ) -> Option<H> {
        let mut slots = self.slots.lock();
        self.install(&mut slots, resource)
    }

    /// Look up the resource for a handle, returning a new shared reference to
    /// it. Returns `None` if the handle's tag does not match this table, the
    /// index is out of range, or the slot is empty. Never modifies the slot.
    pub fn get(
        &self,
        handle: H,
    ) -> Option<Arc<T>> {
        // Tag mismatch is rejected before taking the lock
        let index = handle.typed_index(self.tag)?;
        let slots = self.slots.lock();
        slots.get(index as usize).and_then(|slot| slot.clone())
    }

    /// Reset a handle's slot to empty, detaching the table's share of the
    /// resource and returning it. The resource is destroyed only once every
    /// outstanding reference from prior [`get`](Self::get) calls is gone.
    ///
    /// A handle with the wrong tag, an out-of-range index, or an
    /// already-empty slot is a no-op returning `None`, not an error. The slot
    /// becomes reusable by a later allocate; stale copies of the handle will
    /// then resolve to the new occupant.
    pub fn free(
        &self,
        handle: H,
    ) -> Option<Arc<T>> {
        let index = handle.typed_index(self.tag)?;
        let mut slots = self.slots.lock();
        let detached = slots.get_mut(index as usize).and_then(|slot| slot.take());
        if detached.is_some() {
            log::trace!("free {} index {}", core::any::type_name::<T>(), index);
        }
        detached
    }

    /// Produce one handle per occupied slot, in ascending index order.
    ///
    /// This is a snapshot of occupancy at the instant of the scan; allocates
    /// and frees racing with the call are not reflected.
    pub fn get_all(&self) -> Vec<H> {
        let slots = self.slots.lock();
        slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| self.make_handle(index as HandleIndexT))
            .collect()
    }

    /// Return count of occupied slots
    pub fn count(&self) -> usize {
        let slots = self.slots.lock();
        slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Length of the backing array. This only grows; freed slots are reused
    /// but never released.
    pub fn storage_size(&self) -> usize {
        self.slots.lock().len()
    }
}
