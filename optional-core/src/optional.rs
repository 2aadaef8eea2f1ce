use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::error::{contract_violation, empty_access, BadOptionalAccess};
use crate::nullopt::Nullopt;

#[derive(Clone, Copy, Hash)]
enum Storage<T> {
    Empty,
    Holding(T),
}

/// A container holding zero or one `T`.
///
/// `Optional<T>` is `Clone` only when `T` is, `Copy` only when `T` is, and it
/// has no drop glue of its own when `T` has none. Every other capability
/// (`Eq`, `Ord`, `Hash`, `Send`, `Sync`) follows `T` the same way.
///
/// ```
/// use optional_core::{Optional, NULLOPT};
///
/// let mut port = Optional::some(8080u16);
/// assert_eq!(port.value(), Ok(&8080));
///
/// port.reset();
/// assert!(port == NULLOPT);
/// assert_eq!(port.value_or(80u16), 80);
/// ```
///
/// Copying requires the element to be copyable:
///
/// ```compile_fail
/// use optional_core::Optional;
///
/// struct Token;
///
/// let a = Optional::some(Token);
/// let b: Optional<Token> = a.clone();
/// ```
///
/// ```compile_fail
/// use optional_core::Optional;
///
/// let a = Optional::some(std::string::String::new());
/// let b = a;
/// let c = a;
/// ```
#[derive(Hash)]
#[repr(transparent)]
pub struct Optional<T> {
    storage: Storage<T>,
}

/// Result types accepted from an `or_else` fallback.
///
/// `()` means the fallback only ran for its side effects and the result stays
/// empty. Anything else is converted into the container `O`.
pub trait OrElseOutput<O> {
    fn into_fallback(self) -> O;
}

impl<T> OrElseOutput<Optional<T>> for () {
    fn into_fallback(self) -> Optional<T> {
        Optional::nullopt()
    }
}

impl<T> OrElseOutput<Optional<T>> for Optional<T> {
    fn into_fallback(self) -> Optional<T> {
        self
    }
}

impl<T> OrElseOutput<Optional<T>> for Option<T> {
    fn into_fallback(self) -> Optional<T> {
        self.into()
    }
}

impl<T> Optional<T> {
    pub const fn nullopt() -> Self {
        Self {
            storage: Storage::Empty,
        }
    }

    pub const fn from_nullopt(_: Nullopt) -> Self {
        Self::nullopt()
    }

    pub const fn some(value: T) -> Self {
        Self {
            storage: Storage::Holding(value),
        }
    }

    /// Stores `value` converted into `T`.
    pub fn from_value<U: Into<T>>(value: U) -> Self {
        Self::some(value.into())
    }

    /// Constructs the value with `construct`, which is only called once.
    pub fn in_place<F>(construct: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::some(construct())
    }

    /// Converting move construction: an empty `rhs` stays empty.
    pub fn from_optional<U: Into<T>>(rhs: Optional<U>) -> Self {
        rhs.map(Into::into)
    }

    /// Converting copy construction.
    pub fn from_optional_ref<U>(rhs: &Optional<U>) -> Self
    where
        U: Clone + Into<T>,
    {
        rhs.map_ref(|value| value.clone().into())
    }

    pub const fn has_value(&self) -> bool {
        matches!(self.storage, Storage::Holding(_))
    }

    pub const fn is_empty(&self) -> bool {
        !self.has_value()
    }

    pub const fn as_option(&self) -> Option<&T> {
        match &self.storage {
            Storage::Holding(value) => Some(value),
            Storage::Empty => None,
        }
    }

    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        match &mut self.storage {
            Storage::Holding(value) => Some(value),
            Storage::Empty => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match &self.storage {
            Storage::Holding(value) => Optional::some(value),
            Storage::Empty => Optional::nullopt(),
        }
    }

    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match &mut self.storage {
            Storage::Holding(value) => Optional::some(value),
            Storage::Empty => Optional::nullopt(),
        }
    }

    pub fn as_deref(&self) -> Optional<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(T::deref)
    }

    /// Returns the held value, or [`BadOptionalAccess`] when empty.
    ///
    /// This is the only checked accessor; dereferencing an empty optional is
    /// a contract violation instead.
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.as_option().ok_or_else(empty_access::<T>)
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.as_option_mut().ok_or_else(empty_access::<T>)
    }

    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        self.into_option().ok_or_else(empty_access::<T>)
    }

    /// # Safety
    ///
    /// The optional must hold a value.
    pub unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.has_value());
        match &self.storage {
            Storage::Holding(value) => value,
            Storage::Empty => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The optional must hold a value.
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value());
        match &mut self.storage {
            Storage::Holding(value) => value,
            Storage::Empty => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    pub fn value_or<U: Into<T>>(self, fallback: U) -> T {
        match self.storage {
            Storage::Holding(value) => value,
            Storage::Empty => fallback.into(),
        }
    }

    pub fn value_or_ref<U: Into<T>>(&self, fallback: U) -> T
    where
        T: Clone,
    {
        match &self.storage {
            Storage::Holding(value) => value.clone(),
            Storage::Empty => fallback.into(),
        }
    }

    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.storage {
            Storage::Holding(value) => value,
            Storage::Empty => fallback(),
        }
    }

    pub fn set_nullopt(&mut self, _: Nullopt) {
        self.reset();
    }

    /// Assigns through to the held value, or constructs one when empty.
    pub fn assign(&mut self, value: T) {
        if let Storage::Holding(held) = &mut self.storage {
            *held = value;
        } else {
            self.storage = Storage::Holding(value);
        }
    }

    /// Converting assignment from another optional.
    ///
    /// Both holding assigns through, only `rhs` holding constructs, only
    /// `self` holding drops the value, and two empty optionals are left alone.
    pub fn assign_from<U: Into<T>>(&mut self, rhs: Optional<U>) {
        match rhs.storage {
            Storage::Holding(value) => self.assign(value.into()),
            Storage::Empty => self.reset(),
        }
    }

    /// Drops any held value and stores `value`, returning a reference to it.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        self.storage = Storage::Holding(value);
        self.holding_mut()
    }

    pub fn emplace_with<F>(&mut self, construct: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        self.storage = Storage::Holding(construct());
        self.holding_mut()
    }

    pub fn get_or_insert_with<F>(&mut self, construct: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_empty() {
            self.storage = Storage::Holding(construct());
        }
        self.holding_mut()
    }

    pub fn reset(&mut self) {
        if self.has_value() {
            self.storage = Storage::Empty;
        }
    }

    /// Exchanges contents with `other`.
    ///
    /// Two held values are swapped in place. When only one side holds a
    /// value it is moved across and its source is left empty.
    pub fn swap(&mut self, other: &mut Self) {
        match (&mut self.storage, &mut other.storage) {
            (Storage::Holding(lhs), Storage::Holding(rhs)) => mem::swap(lhs, rhs),
            (Storage::Empty, Storage::Empty) => {}
            (lhs, rhs) => mem::swap(lhs, rhs),
        }
    }

    /// Returns the current contents and leaves `self` empty.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::nullopt())
    }

    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Self::some(value))
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.storage {
            Storage::Holding(value) => Optional::some(f(value)),
            Storage::Empty => Optional::nullopt(),
        }
    }

    pub fn map_ref<U, F>(&self, f: F) -> Optional<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.as_ref().map(f)
    }

    /// Chains an operation that itself may produce nothing. The result is
    /// `f`'s optional, never a nested one.
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.storage {
            Storage::Holding(value) => f(value),
            Storage::Empty => Optional::nullopt(),
        }
    }

    pub fn and_then_ref<U, F>(&self, f: F) -> Optional<U>
    where
        F: FnOnce(&T) -> Optional<U>,
    {
        self.as_ref().and_then(f)
    }

    /// Returns `self` when it holds a value, otherwise calls `f`.
    ///
    /// A fallback returning `()` is run for its side effects and leaves the
    /// result empty. A fallback producing a bare `T` must wrap it itself
    /// (`Optional::some(v)` or `Some(v)`), since an `OrElseOutput` impl for
    /// every `T` would overlap the one for `()`.
    pub fn or_else<R, F>(self, f: F) -> Self
    where
        F: FnOnce() -> R,
        R: OrElseOutput<Self>,
    {
        if self.has_value() {
            self
        } else {
            f().into_fallback()
        }
    }

    pub fn or_else_ref<R, F>(&self, f: F) -> Self
    where
        T: Clone,
        F: FnOnce() -> R,
        R: OrElseOutput<Self>,
    {
        if self.has_value() {
            self.clone()
        } else {
            f().into_fallback()
        }
    }

    pub fn map_or<U, F>(self, f: F, default: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self.storage {
            Storage::Holding(value) => f(value),
            Storage::Empty => default,
        }
    }

    pub fn map_or_ref<U, F>(&self, f: F, default: U) -> U
    where
        F: FnOnce(&T) -> U,
    {
        self.as_ref().map_or(f, default)
    }

    pub fn map_or_else<U, F, D>(self, f: F, default: D) -> U
    where
        F: FnOnce(T) -> U,
        D: FnOnce() -> U,
    {
        match self.storage {
            Storage::Holding(value) => f(value),
            Storage::Empty => default(),
        }
    }

    pub fn map_or_else_ref<U, F, D>(&self, f: F, default: D) -> U
    where
        F: FnOnce(&T) -> U,
        D: FnOnce() -> U,
    {
        self.as_ref().map_or_else(f, default)
    }

    /// `other` wrapped if `self` holds a value, otherwise an empty `Optional<U>`.
    ///
    /// `other` is never unwrapped: passing an optional yields a nested one.
    pub fn conjunction<U>(&self, other: U) -> Optional<U> {
        if self.has_value() {
            Optional::some(other)
        } else {
            Optional::nullopt()
        }
    }

    /// `self` if it holds a value, otherwise `other`.
    pub fn disjunction(self, other: Self) -> Self {
        if self.has_value() {
            self
        } else {
            other
        }
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Storage::Holding(value) = self.storage {
            if predicate(&value) {
                return Self::some(value);
            }
        }
        Self::nullopt()
    }

    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Storage::Holding(value) = &self.storage {
            f(value);
        }
        self
    }

    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_option().into_iter()
    }

    pub fn iter_mut(&mut self) -> core::option::IntoIter<&mut T> {
        self.as_option_mut().into_iter()
    }

    fn holding_mut(&mut self) -> &mut T {
        // SAFETY: only called right after a value has been stored.
        unsafe { self.value_unchecked_mut() }
    }
}

impl<T: Clone> Optional<&T> {
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T> Optional<Optional<T>> {
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::nullopt()
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match (&mut self.storage, &source.storage) {
            (Storage::Holding(to), Storage::Holding(from)) => to.clone_from(from),
            (to, from) => *to = from.clone(),
        }
    }
}

impl<T: Copy> Copy for Optional<T> {}

impl<T> Deref for Optional<T> {
    type Target = T;

    /// Unchecked access. Panics when empty; use [`Optional::value`] for a
    /// recoverable error.
    #[track_caller]
    fn deref(&self) -> &T {
        match &self.storage {
            Storage::Holding(value) => value,
            Storage::Empty => contract_violation::<T>(),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.storage {
            Storage::Holding(value) => value,
            Storage::Empty => contract_violation::<T>(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            Storage::Holding(value) => f.debug_tuple("Optional").field(value).finish(),
            Storage::Empty => f.write_str("nullopt"),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Optional::some(v),
            None => Optional::nullopt(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional.storage {
            Storage::Holding(v) => Some(v),
            Storage::Empty => None,
        }
    }
}

impl<T> From<&Optional<T>> for bool {
    fn from(optional: &Optional<T>) -> bool {
        optional.has_value()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = core::option::IntoIter<&'a mut T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
