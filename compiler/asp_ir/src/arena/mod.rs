//! Generation-checked slot arenas.
//!
//! [`Indexed`] maps small `Copy` handles to owned values of one element type.
//! It is the storage behind every builder table: terms, term vectors,
//! literals, aggregate elements, theory terms and definitions.
//!
//! # Handle discipline
//!
//! Every handle is consumed exactly once by the reduction that owns it.
//! Taking a value frees its slot for reuse and bumps the slot generation, so
//! a handle that outlives its value is detected on the next access instead of
//! silently reading whatever was allocated in the slot afterwards.
//!
//! ```text
//! let mut terms: Indexed<Term, TermId> = Indexed::new();
//! let id = terms.allocate_with(term);
//! let term = terms.take(id);      // id is dead from here on
//! terms.get(id);                  // panics: stale handle
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Implemented by every handle type stored in an [`Indexed`].
///
/// Generated by [`define_id!`](crate::define_id); not meant to be
/// implemented by hand.
pub trait ArenaId: Copy + Eq + fmt::Debug {
    /// Assemble a handle from a slot index and the slot's generation.
    fn from_parts(index: u32, generation: u32) -> Self;

    /// Slot index.
    fn index(self) -> u32;

    /// Generation of the slot when the handle was issued.
    fn generation(self) -> u32;
}

/// Define a handle newtype for an [`Indexed`] arena.
///
/// ```text
/// define_id! {
///     /// Handle to a term under construction.
///     pub struct TermId;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        $vis struct $name {
            index: u32,
            generation: u32,
        }

        impl $crate::arena::ArenaId for $name {
            #[inline]
            fn from_parts(index: u32, generation: u32) -> Self {
                Self { index, generation }
            }

            #[inline]
            fn index(self) -> u32 {
                self.index
            }

            #[inline]
            fn generation(self) -> u32 {
                self.generation
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}@{})"),
                    self.index,
                    self.generation
                )
            }
        }
    };
}

/// Why a handle could not be resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StaleReason {
    /// The index was never allocated in this arena.
    OutOfBounds,
    /// The value was taken and the slot is empty.
    Taken,
    /// The value was taken and the slot now holds a newer value.
    Reused,
}

/// A handle that does not refer to a live value.
///
/// Using such a handle is a defect in the caller, not a user error. The
/// panicking accessors format this error into their panic message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StaleHandle {
    /// Type name of the handle.
    pub handle: &'static str,
    pub index: u32,
    pub generation: u32,
    pub reason: StaleReason,
}

impl fmt::Display for StaleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            StaleReason::OutOfBounds => "was never allocated",
            StaleReason::Taken => "was already taken",
            StaleReason::Reused => "was taken and its slot reused",
        };
        write!(
            f,
            "stale handle {}({}@{}): value {}",
            short_type_name(self.handle),
            self.index,
            self.generation,
            reason
        )
    }
}

impl std::error::Error for StaleHandle {}

fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

/// Convert an arena length to a slot index.
///
/// # Panics
/// Panics if the arena grows beyond `u32::MAX` slots.
#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena exceeded {} slots", u32::MAX))
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot table mapping handles of type `I` to owned values of type `T`.
///
/// No iteration and no removal by value: values leave the arena only through
/// [`take`](Indexed::take).
pub struct Indexed<T, I> {
    slots: Vec<Slot<T>>,
    /// Indices of empty slots, reused LIFO.
    free: Vec<u32>,
    live: usize,
    _marker: PhantomData<fn() -> I>,
}

impl<T, I: ArenaId> Indexed<T, I> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            _marker: PhantomData,
        }
    }

    /// Store `value` and return a handle to it.
    pub fn allocate_with(&mut self, value: T) -> I {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.value.is_none(), "free list points at a live slot");
            slot.value = Some(value);
            return I::from_parts(index, slot.generation);
        }
        let index = to_u32(self.slots.len());
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        I::from_parts(index, 0)
    }

    /// Store a default-constructed value and return a handle to it.
    pub fn allocate(&mut self) -> I
    where
        T: Default,
    {
        self.allocate_with(T::default())
    }

    fn stale(id: I, reason: StaleReason) -> StaleHandle {
        StaleHandle {
            handle: std::any::type_name::<I>(),
            index: id.index(),
            generation: id.generation(),
            reason,
        }
    }

    fn check(slot: Option<&Slot<T>>, id: I) -> Result<(), StaleHandle> {
        match slot {
            None => Err(Self::stale(id, StaleReason::OutOfBounds)),
            Some(slot) if slot.generation != id.generation() => {
                let reason = if slot.value.is_some() {
                    StaleReason::Reused
                } else {
                    StaleReason::Taken
                };
                Err(Self::stale(id, reason))
            }
            Some(slot) if slot.value.is_none() => Err(Self::stale(id, StaleReason::Taken)),
            Some(_) => Ok(()),
        }
    }

    /// Borrow the value behind `id`, or report why the handle is dead.
    pub fn try_get(&self, id: I) -> Result<&T, StaleHandle> {
        let slot = self.slots.get(id.index() as usize);
        Self::check(slot, id)?;
        slot.and_then(|s| s.value.as_ref())
            .ok_or_else(|| Self::stale(id, StaleReason::Taken))
    }

    /// Mutably borrow the value behind `id`, or report why the handle is dead.
    pub fn try_get_mut(&mut self, id: I) -> Result<&mut T, StaleHandle> {
        Self::check(self.slots.get(id.index() as usize), id)?;
        self.slots
            .get_mut(id.index() as usize)
            .and_then(|s| s.value.as_mut())
            .ok_or_else(|| Self::stale(id, StaleReason::Taken))
    }

    /// Move the value out, killing `id`, or report why the handle is dead.
    pub fn try_take(&mut self, id: I) -> Result<T, StaleHandle> {
        Self::check(self.slots.get(id.index() as usize), id)?;
        let slot = &mut self.slots[id.index() as usize];
        let value = slot
            .value
            .take()
            .ok_or_else(|| Self::stale(id, StaleReason::Taken))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        self.live -= 1;
        Ok(value)
    }

    /// Borrow the value behind `id`.
    ///
    /// # Panics
    /// Panics if `id` is stale.
    #[inline]
    pub fn get(&self, id: I) -> &T {
        self.try_get(id).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Mutably borrow the value behind `id`.
    ///
    /// # Panics
    /// Panics if `id` is stale.
    #[inline]
    pub fn get_mut(&mut self, id: I) -> &mut T {
        self.try_get_mut(id).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Move the value out of the arena. The handle is dead afterwards and
    /// its slot may be handed out again by the next allocation.
    ///
    /// # Panics
    /// Panics if `id` is stale.
    #[inline]
    pub fn take(&mut self, id: I) -> T {
        self.try_take(id).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Whether `id` refers to a live value.
    pub fn contains(&self, id: I) -> bool {
        Self::check(self.slots.get(id.index() as usize), id).is_ok()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no value is live.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

impl<T, I: ArenaId> Default for Indexed<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I> fmt::Debug for Indexed<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexed")
            .field("slots", &self.slots.len())
            .field("live", &self.live)
            .finish()
    }
}

#[cfg(test)]
mod tests;
