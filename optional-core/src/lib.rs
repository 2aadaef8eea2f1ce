#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod nullopt;
pub mod optional;
pub mod reference;

mod cmp;

pub use error::BadOptionalAccess;
pub use nullopt::{Nullopt, NULLOPT};
pub use optional::{OrElseOutput, Optional};
pub use reference::{OptionalMut, OptionalRef};

/// Wraps `value` in an [`Optional`], deducing the element type.
pub fn make_optional<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

/// Builds an [`Optional`] whose value is produced by `construct`.
pub fn make_optional_with<T, F>(construct: F) -> Optional<T>
where
    F: FnOnce() -> T,
{
    Optional::in_place(construct)
}

pub fn swap<T>(lhs: &mut Optional<T>, rhs: &mut Optional<T>) {
    lhs.swap(rhs)
}
