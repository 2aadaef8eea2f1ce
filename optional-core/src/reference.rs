//! Optional references.
//!
//! [`OptionalRef`] and [`OptionalMut`] behave like a nullable pointer to a
//! value owned elsewhere. Assigning one rebinds it to another object, it
//! never writes through to the old referent.
//!
//! A temporary can't be bound past the end of its statement:
//!
//! ```compile_fail
//! use optional_core::OptionalRef;
//!
//! let r = OptionalRef::new(&String::from("gone"));
//! assert!(r.has_value());
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::error::{contract_violation, empty_access, BadOptionalAccess};
use crate::nullopt::Nullopt;
use crate::optional::{OrElseOutput, Optional};

#[repr(transparent)]
pub struct OptionalRef<'a, T: ?Sized> {
    target: Option<&'a T>,
}

impl<'a, T: ?Sized> OptionalRef<'a, T> {
    pub const fn new(target: &'a T) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub const fn nullopt() -> Self {
        Self { target: None }
    }

    pub const fn from_nullopt(_: Nullopt) -> Self {
        Self::nullopt()
    }

    pub const fn has_value(&self) -> bool {
        self.target.is_some()
    }

    pub const fn is_empty(&self) -> bool {
        self.target.is_none()
    }

    pub const fn get(&self) -> Option<&'a T> {
        self.target
    }

    pub fn value(&self) -> Result<&'a T, BadOptionalAccess> {
        self.target.ok_or_else(empty_access::<T>)
    }

    /// # Safety
    ///
    /// The reference must be bound.
    pub unsafe fn value_unchecked(&self) -> &'a T {
        debug_assert!(self.has_value());
        match self.target {
            Some(target) => target,
            None => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    pub fn value_or<U>(&self, fallback: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        match self.target {
            Some(target) => target.clone(),
            None => fallback.into(),
        }
    }

    pub fn rebind(&mut self, target: &'a T) {
        self.target = Some(target);
    }

    /// Rebinds to `target` and returns the bound reference.
    pub fn emplace(&mut self, target: &'a T) -> &'a T {
        self.rebind(target);
        target
    }

    pub fn set_nullopt(&mut self, _: Nullopt) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.target = None;
    }

    /// Exchanges the bindings; neither referent is touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.target, &mut other.target)
    }

    pub fn take(&mut self) -> Self {
        Self {
            target: self.target.take(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(&'a T) -> U,
    {
        self.target.map(f).into()
    }

    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(&'a T) -> Optional<U>,
    {
        match self.target {
            Some(target) => f(target),
            None => Optional::nullopt(),
        }
    }

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

    pub fn map_or<U, F>(self, f: F, default: U) -> U
    where
        F: FnOnce(&'a T) -> U,
    {
        self.target.map_or(default, f)
    }

    pub fn map_or_else<U, F, D>(self, f: F, default: D) -> U
    where
        F: FnOnce(&'a T) -> U,
        D: FnOnce() -> U,
    {
        self.target.map_or_else(default, f)
    }

    pub fn conjunction<U>(&self, other: U) -> Optional<U> {
        if self.has_value() {
            Optional::some(other)
        } else {
            Optional::nullopt()
        }
    }

    pub fn disjunction(self, other: Self) -> Self {
        if self.has_value() {
            self
        } else {
            other
        }
    }

    pub fn cloned(self) -> Optional<T>
    where
        T: Clone,
    {
        self.map(T::clone)
    }
}

impl<T: ?Sized> Clone for OptionalRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OptionalRef<'_, T> {}

impl<T: ?Sized> Default for OptionalRef<'_, T> {
    fn default() -> Self {
        Self::nullopt()
    }
}

impl<T: ?Sized> Deref for OptionalRef<'_, T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match self.target {
            Some(target) => target,
            None => contract_violation::<T>(),
        }
    }
}

impl<'a, T: ?Sized> From<&'a T> for OptionalRef<'a, T> {
    fn from(target: &'a T) -> Self {
        Self::new(target)
    }
}

impl<'a, T: ?Sized> From<Option<&'a T>> for OptionalRef<'a, T> {
    fn from(target: Option<&'a T>) -> Self {
        Self { target }
    }
}

impl<'a, T: ?Sized> From<OptionalRef<'a, T>> for Option<&'a T> {
    fn from(optional: OptionalRef<'a, T>) -> Self {
        optional.target
    }
}

impl<'a, T: ?Sized> From<Optional<&'a T>> for OptionalRef<'a, T> {
    fn from(optional: Optional<&'a T>) -> Self {
        Self {
            target: optional.into_option(),
        }
    }
}

impl<'a, T: ?Sized> From<OptionalRef<'a, T>> for Optional<&'a T> {
    fn from(optional: OptionalRef<'a, T>) -> Self {
        optional.target.into()
    }
}

impl<'a, T: ?Sized> OrElseOutput<OptionalRef<'a, T>> for () {
    fn into_fallback(self) -> OptionalRef<'a, T> {
        OptionalRef::nullopt()
    }
}

impl<'a, T: ?Sized> OrElseOutput<OptionalRef<'a, T>> for OptionalRef<'a, T> {
    fn into_fallback(self) -> OptionalRef<'a, T> {
        self
    }
}

impl<'a, T: ?Sized> OrElseOutput<OptionalRef<'a, T>> for Option<&'a T> {
    fn into_fallback(self) -> OptionalRef<'a, T> {
        self.into()
    }
}

impl<T: ?Sized + PartialEq> PartialEq for OptionalRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<T: ?Sized + Eq> Eq for OptionalRef<'_, T> {}

impl<T: ?Sized + PartialOrd> PartialOrd for OptionalRef<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.target.partial_cmp(&other.target)
    }
}

impl<T: ?Sized + Ord> Ord for OptionalRef<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.target.cmp(&other.target)
    }
}

impl<T: ?Sized> PartialEq<Nullopt> for OptionalRef<'_, T> {
    fn eq(&self, _: &Nullopt) -> bool {
        self.is_empty()
    }
}

impl<T: ?Sized> PartialEq<OptionalRef<'_, T>> for Nullopt {
    fn eq(&self, other: &OptionalRef<'_, T>) -> bool {
        other.is_empty()
    }
}

impl<T: ?Sized> PartialOrd<Nullopt> for OptionalRef<'_, T> {
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        Some(self.has_value().cmp(&false))
    }
}

impl<T: ?Sized> PartialOrd<OptionalRef<'_, T>> for Nullopt {
    fn partial_cmp(&self, other: &OptionalRef<'_, T>) -> Option<Ordering> {
        Some(false.cmp(&other.has_value()))
    }
}

/// Comparisons of the referent against a bare value. Unbound is never equal
/// to a value and orders before all of them.
impl<T: ?Sized> OptionalRef<'_, T> {
    pub fn eq_value<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.target.map_or(false, |held| held == value)
    }

    pub fn ne_value<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        !self.eq_value(value)
    }

    pub fn partial_cmp_value<U: ?Sized>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
    {
        match self.target {
            Some(held) => held.partial_cmp(value),
            None => Some(Ordering::Less),
        }
    }

    /// `value == referent`, with `value` on the left.
    pub fn value_eq<U: ?Sized>(&self, value: &U) -> bool
    where
        U: PartialEq<T>,
    {
        self.target.map_or(false, |held| value == held)
    }

    /// Orders `value` against the referent; any value is greater than unbound.
    pub fn value_partial_cmp<U: ?Sized>(&self, value: &U) -> Option<Ordering>
    where
        U: PartialOrd<T>,
    {
        match self.target {
            Some(held) => value.partial_cmp(held),
            None => Some(Ordering::Greater),
        }
    }
}

impl<T: ?Sized + Hash> Hash for OptionalRef<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for OptionalRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => f.debug_tuple("OptionalRef").field(&target).finish(),
            None => f.write_str("nullopt"),
        }
    }
}

/// Exclusive counterpart of [`OptionalRef`].
#[repr(transparent)]
pub struct OptionalMut<'a, T: ?Sized> {
    target: Option<&'a mut T>,
}

impl<'a, T: ?Sized> OptionalMut<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub const fn nullopt() -> Self {
        Self { target: None }
    }

    pub const fn from_nullopt(_: Nullopt) -> Self {
        Self::nullopt()
    }

    pub const fn has_value(&self) -> bool {
        self.target.is_some()
    }

    pub const fn is_empty(&self) -> bool {
        self.target.is_none()
    }

    pub fn as_ref(&self) -> OptionalRef<'_, T> {
        OptionalRef {
            target: self.target.as_deref(),
        }
    }

    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.target.as_deref().ok_or_else(empty_access::<T>)
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.target.as_deref_mut().ok_or_else(empty_access::<T>)
    }

    pub fn into_value(self) -> Result<&'a mut T, BadOptionalAccess> {
        self.target.ok_or_else(empty_access::<T>)
    }

    pub fn value_or<U>(&self, fallback: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        self.as_ref().value_or(fallback)
    }

    pub fn rebind(&mut self, target: &'a mut T) {
        self.target = Some(target);
    }

    /// Rebinds to `target` and returns a reborrow of it.
    pub fn emplace(&mut self, target: &'a mut T) -> &mut T {
        &mut **self.target.insert(target)
    }

    pub fn set_nullopt(&mut self, _: Nullopt) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.target = None;
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.target, &mut other.target)
    }

    pub fn take(&mut self) -> Self {
        Self {
            target: self.target.take(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(&'a mut T) -> U,
    {
        self.target.map(f).into()
    }

    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(&'a mut T) -> Optional<U>,
    {
        match self.target {
            Some(target) => f(target),
            None => Optional::nullopt(),
        }
    }

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

    pub fn map_or<U, F>(self, f: F, default: U) -> U
    where
        F: FnOnce(&'a mut T) -> U,
    {
        self.target.map_or(default, f)
    }

    pub fn map_or_else<U, F, D>(self, f: F, default: D) -> U
    where
        F: FnOnce(&'a mut T) -> U,
        D: FnOnce() -> U,
    {
        self.target.map_or_else(default, f)
    }

    pub fn conjunction<U>(&self, other: U) -> Optional<U> {
        if self.has_value() {
            Optional::some(other)
        } else {
            Optional::nullopt()
        }
    }

    pub fn disjunction(self, other: Self) -> Self {
        if self.has_value() {
            self
        } else {
            other
        }
    }
}

impl<T: ?Sized> Default for OptionalMut<'_, T> {
    fn default() -> Self {
        Self::nullopt()
    }
}

impl<T: ?Sized> Deref for OptionalMut<'_, T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match self.target.as_deref() {
            Some(target) => target,
            None => contract_violation::<T>(),
        }
    }
}

impl<T: ?Sized> DerefMut for OptionalMut<'_, T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.target.as_deref_mut() {
            Some(target) => target,
            None => contract_violation::<T>(),
        }
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for OptionalMut<'a, T> {
    fn from(target: &'a mut T) -> Self {
        Self::new(target)
    }
}

impl<'a, T: ?Sized> From<Option<&'a mut T>> for OptionalMut<'a, T> {
    fn from(target: Option<&'a mut T>) -> Self {
        Self { target }
    }
}

impl<'a, T: ?Sized> From<OptionalMut<'a, T>> for Option<&'a mut T> {
    fn from(optional: OptionalMut<'a, T>) -> Self {
        optional.target
    }
}

impl<'a, T: ?Sized> From<Optional<&'a mut T>> for OptionalMut<'a, T> {
    fn from(optional: Optional<&'a mut T>) -> Self {
        Self {
            target: optional.into_option(),
        }
    }
}

impl<'a, T: ?Sized> From<OptionalMut<'a, T>> for Optional<&'a mut T> {
    fn from(optional: OptionalMut<'a, T>) -> Self {
        optional.target.into()
    }
}

impl<'a, T: ?Sized> OrElseOutput<OptionalMut<'a, T>> for () {
    fn into_fallback(self) -> OptionalMut<'a, T> {
        OptionalMut::nullopt()
    }
}

impl<'a, T: ?Sized> OrElseOutput<OptionalMut<'a, T>> for OptionalMut<'a, T> {
    fn into_fallback(self) -> OptionalMut<'a, T> {
        self
    }
}

impl<T: ?Sized + PartialEq> PartialEq for OptionalMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl<T: ?Sized + Eq> Eq for OptionalMut<'_, T> {}

impl<T: ?Sized + PartialOrd> PartialOrd for OptionalMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_ref().partial_cmp(&other.as_ref())
    }
}

impl<T: ?Sized + Ord> Ord for OptionalMut<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(&other.as_ref())
    }
}

impl<T: ?Sized> PartialEq<Nullopt> for OptionalMut<'_, T> {
    fn eq(&self, _: &Nullopt) -> bool {
        self.is_empty()
    }
}

impl<T: ?Sized> PartialEq<OptionalMut<'_, T>> for Nullopt {
    fn eq(&self, other: &OptionalMut<'_, T>) -> bool {
        other.is_empty()
    }
}

impl<T: ?Sized> PartialOrd<Nullopt> for OptionalMut<'_, T> {
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        Some(self.has_value().cmp(&false))
    }
}

impl<T: ?Sized> PartialOrd<OptionalMut<'_, T>> for Nullopt {
    fn partial_cmp(&self, other: &OptionalMut<'_, T>) -> Option<Ordering> {
        Some(false.cmp(&other.has_value()))
    }
}

impl<T: ?Sized + Hash> Hash for OptionalMut<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for OptionalMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target.as_deref() {
            Some(target) => f.debug_tuple("OptionalMut").field(&target).finish(),
            None => f.write_str("nullopt"),
        }
    }
}
