use core::cmp::Ordering;

use crate::nullopt::Nullopt;
use crate::optional::Optional;

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_option(), other.as_option()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

// Empty orders before any held value.
impl<T: PartialOrd> PartialOrd for Optional<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_option(), other.as_option()) {
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(rhs),
            (lhs, rhs) => Some(lhs.is_some().cmp(&rhs.is_some())),
        }
    }
}

impl<T: Ord> Ord for Optional<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_option(), other.as_option()) {
            (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
            (lhs, rhs) => lhs.is_some().cmp(&rhs.is_some()),
        }
    }
}

impl<T> PartialEq<Nullopt> for Optional<T> {
    fn eq(&self, _: &Nullopt) -> bool {
        self.is_empty()
    }
}

impl<T> PartialEq<Optional<T>> for Nullopt {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_empty()
    }
}

impl<T> PartialOrd<Nullopt> for Optional<T> {
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        Some(self.has_value().cmp(&false))
    }
}

impl<T> PartialOrd<Optional<T>> for Nullopt {
    fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
        Some(false.cmp(&other.has_value()))
    }
}

/// Comparisons against a bare value. An empty optional is never equal to a
/// value and orders before all of them.
impl<T> Optional<T> {
    pub fn eq_value<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.as_option().map_or(false, |held| held == value)
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
        match self.as_option() {
            Some(held) => held.partial_cmp(value),
            None => Some(Ordering::Less),
        }
    }

    /// `value == self`, with `value` on the left.
    pub fn value_eq<U: ?Sized>(&self, value: &U) -> bool
    where
        U: PartialEq<T>,
    {
        self.as_option().map_or(false, |held| value == held)
    }

    /// Orders `value` against `self`; any value is greater than an empty
    /// optional.
    pub fn value_partial_cmp<U: ?Sized>(&self, value: &U) -> Option<Ordering>
    where
        U: PartialOrd<T>,
    {
        match self.as_option() {
            Some(held) => value.partial_cmp(held),
            None => Some(Ordering::Greater),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullopt::NULLOPT;
    use std::string::String;

    #[test]
    fn equality() {
        assert_eq!(Optional::<u8>::nullopt(), Optional::<u8>::nullopt());
        assert_eq!(Optional::some(1), Optional::some(1));
        assert_ne!(Optional::some(1), Optional::some(2));
        assert_ne!(Optional::some(1), Optional::nullopt());
    }

    #[test]
    fn equality_follows_held_values() {
        let owned = Optional::some(String::from("efi"));
        assert!(owned == Optional::some(String::from("efi")));
        assert!(owned != Optional::nullopt());
        assert!(owned.as_deref() == Optional::some("efi"));
    }

    #[test]
    fn empty_orders_first() {
        assert!(Optional::<i64>::nullopt() < Optional::some(i64::MIN));
        assert!(Optional::some(1) < Optional::some(2));
        assert_eq!(
            Optional::<u8>::nullopt().cmp(&Optional::nullopt()),
            Ordering::Equal
        );

        let mut sorted = [Optional::some(3), Optional::nullopt(), Optional::some(1)];
        sorted.sort();
        assert_eq!(sorted, [Optional::nullopt(), Optional::some(1), Optional::some(3)]);
    }

    #[test]
    fn partial_order_delegates() {
        assert_eq!(
            Optional::some(f64::NAN).partial_cmp(&Optional::some(1.0)),
            None
        );
        assert_eq!(
            Optional::<f64>::nullopt().partial_cmp(&Optional::some(f64::NAN)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn against_nullopt() {
        assert!(Optional::<u8>::nullopt() == NULLOPT);
        assert!(NULLOPT == Optional::<u8>::nullopt());
        assert!(Optional::some(0) != NULLOPT);
        assert!(Optional::some(0) > NULLOPT);
        assert!(NULLOPT < Optional::some(0));
        assert!(Optional::<u8>::nullopt() <= NULLOPT);
        assert!(!(Optional::<u8>::nullopt() < NULLOPT));
    }

    #[test]
    fn against_bare_values() {
        assert!(Optional::some(5).eq_value(&5));
        assert!(Optional::<i32>::nullopt().ne_value(&5));
        assert!(Optional::some(String::from("a")).eq_value("a"));
        assert_eq!(
            Optional::<i32>::nullopt().partial_cmp_value(&i32::MIN),
            Some(Ordering::Less)
        );
        assert_eq!(Optional::some(7).partial_cmp_value(&3), Some(Ordering::Greater));
    }

    #[test]
    fn bare_value_on_the_left() {
        assert!(Optional::some(5).value_eq(&5));
        assert!(!Optional::<i32>::nullopt().value_eq(&5));
        assert!(Optional::some(String::from("a")).value_eq("a"));
        assert_eq!(
            Optional::<i32>::nullopt().value_partial_cmp(&i32::MIN),
            Some(Ordering::Greater)
        );
        assert_eq!(Optional::some(7).value_partial_cmp(&3), Some(Ordering::Less));
        assert_eq!(Optional::some(3).value_partial_cmp(&3), Some(Ordering::Equal));
    }
}
