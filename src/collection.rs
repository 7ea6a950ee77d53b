//! Single-record mutations that produce a new base collection.
//!
//! Neither function modifies its input. Records other than the target keep their
//! relative order. Lookups accept any borrowed form of the id (`&str` for `String`).

use std::borrow::Borrow;

use crate::pipeline::Record;

fn has_id<R, Q>(record: &R, id: &Q) -> bool
where
    R: Record,
    R::Id: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    record.id().borrow() == id
}

/// Copy of `base` without the record identified by `id`.
pub fn remove_by_id<R, Q>(base: &[R], id: &Q) -> Vec<R>
where
    R: Record,
    R::Id: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    base.iter().filter(|r| !has_id(*r, id)).cloned().collect()
}

/// Copy of `base` with `patch` applied to the record identified by `id`.
///
/// Returns `None` when no record has `id`, or when `patch` changes the record's id.
pub fn update_by_id<R, Q, F>(base: &[R], id: &Q, patch: F) -> Option<Vec<R>>
where
    R: Record,
    R::Id: Borrow<Q>,
    Q: PartialEq + ?Sized,
    F: FnOnce(&mut R),
{
    let index = base.iter().position(|r| has_id(r, id))?;
    let mut record = base[index].clone();
    patch(&mut record);
    if record.id() != base[index].id() {
        return None;
    }
    let mut next = base.to_vec();
    next[index] = record;
    Some(next)
}

/// Whether `base` holds a record with the given id.
pub fn contains_id<R, Q>(base: &[R], id: &Q) -> bool
where
    R: Record,
    R::Id: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    base.iter().any(|r| has_id(r, id))
}
