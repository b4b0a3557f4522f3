//! The identity capability shared by every record the engine compares.
//!
//! The engine never looks at a record beyond its numeric identity. Audit
//! fields, soft-delete flags, names and version counters may live on the same
//! types, but nothing here reads or writes them.

use crate::Id;

/// Identity value reserved for records that have not been persisted yet.
pub const UNASSIGNED_ID: Id = 0;

/// A record with a numeric identity.
///
/// Two records are the same logical record when their identities are
/// numerically equal, whatever their concrete types are.
pub trait Identifiable {
    /// The identity of the record.
    fn id(&self) -> Id;

    /// True if the record has no identity assigned yet.
    fn is_new(&self) -> bool {
        self.id() == UNASSIGNED_ID
    }

    /// True if the record already has an identity.
    fn is_existing(&self) -> bool {
        !self.is_new()
    }
}

/// A record whose identity can be assigned after construction.
pub trait MutableIdentifiable: Identifiable {
    /// Assign the identity of the record.
    fn set_id(&mut self, id: Id);
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    fn id(&self) -> Id {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Box<T> {
    fn id(&self) -> Id {
        (**self).id()
    }
}

impl<T: MutableIdentifiable + ?Sized> MutableIdentifiable for Box<T> {
    fn set_id(&mut self, id: Id) {
        (**self).set_id(id)
    }
}

/// A value that may or may not carry an identity.
///
/// Every [`Identifiable`] carries one. An absent record (`None`) has none,
/// which is a valid "no identity" marker rather than an error.
pub trait MaybeIdentified {
    /// The identity, or `None` for an absent record.
    fn identity(&self) -> Option<Id>;
}

impl<T: Identifiable> MaybeIdentified for T {
    fn identity(&self) -> Option<Id> {
        Some(self.id())
    }
}

impl<T: Identifiable> MaybeIdentified for Option<T> {
    fn identity(&self) -> Option<Id> {
        self.as_ref().map(Identifiable::id)
    }
}

/// Check whether `record` has the identity `id`.
///
/// Both absent counts as equal; exactly one absent does not.
pub fn equals_id<R: MaybeIdentified + ?Sized>(record: &R, id: impl Into<Option<Id>>) -> bool {
    record.identity() == id.into()
}

/// Check whether two records, possibly of different types, share an identity.
pub fn same_id<A, B>(a: &A, b: &B) -> bool
where
    A: MaybeIdentified + ?Sized,
    B: MaybeIdentified + ?Sized,
{
    a.identity() == b.identity()
}
