//! A value-or-nothing container.
//!
//! This crate re-exports [`optional_core`] with `std` support switched on, so
//! [`BadOptionalAccess`] can travel through `?` into any `std::error::Error`
//! based error type.
//!
//! ```
//! use optional::prelude::*;
//!
//! fn first_word(line: &str) -> Optional<&str> {
//!     line.split_whitespace().next().into()
//! }
//!
//! let word = first_word("boot kernel").map(str::len);
//! assert_eq!(word.value(), Ok(&4));
//! assert!(first_word("   ") == NULLOPT);
//! ```

pub use optional_core::{
    error, make_optional, make_optional_with, nullopt, optional, reference, swap,
    BadOptionalAccess, Nullopt, OrElseOutput, Optional, OptionalMut, OptionalRef, NULLOPT,
};

pub mod prelude {
    pub use optional_core::{
        make_optional, make_optional_with, Nullopt, Optional, OptionalMut, OptionalRef, NULLOPT,
    };
}
