use core::any::type_name;

use thiserror::Error;

/// Returned by the validated accessors when the optional holds no value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("Optional has no value")]
pub struct BadOptionalAccess;

pub(crate) fn empty_access<T: ?Sized>() -> BadOptionalAccess {
    log::trace!("value() called on an empty optional of {}", type_name::<T>());
    BadOptionalAccess
}

#[cold]
#[track_caller]
pub(crate) fn contract_violation<T: ?Sized>() -> ! {
    log::error!("dereferenced an empty optional of {}", type_name::<T>());
    panic!("dereferenced an empty optional of {}", type_name::<T>())
}
