mod common;

use optional::prelude::*;
use optional::BadOptionalAccess;

use common::init_logger;

struct Region {
    start: u64,
    end: u64,
}

impl Region {
    fn len(&self) -> u64 {
        self.end - self.start
    }
}

#[test]
fn has_value_tracks_binding() {
    init_logger();
    let region = Region { start: 0, end: 4096 };
    let mut r = OptionalRef::<Region>::nullopt();
    assert!(!r.has_value());
    assert_eq!(r.value().err(), Some(BadOptionalAccess));

    r.rebind(&region);
    assert!(r.has_value());
    assert_eq!(r.len(), 4096);
}

#[test]
fn assignment_rebinds_instead_of_writing() {
    let usable = Region { start: 0, end: 10 };
    let reserved = Region { start: 10, end: 30 };

    let mut current = OptionalRef::new(&usable);
    let other = OptionalRef::new(&reserved);
    assert_eq!(current.map(Region::len), Optional::some(10));
    current = other;

    assert_eq!(current.map(Region::len), Optional::some(20));
    assert_eq!(usable.len(), 10);
}

#[test]
fn emplace_hands_back_the_binding() -> anyhow::Result<()> {
    let region = Region { start: 8, end: 16 };
    let mut r = OptionalRef::<Region>::nullopt();
    let bound = r.emplace(&region);
    assert!(std::ptr::eq(bound, &region));
    assert_eq!(r.value()?.start, 8);
    Ok(())
}

#[test]
fn combinators_mirror_owning_optional() {
    let regions = [Region { start: 0, end: 2 }, Region { start: 2, end: 8 }];
    let largest = regions
        .iter()
        .fold(OptionalRef::nullopt(), |best: OptionalRef<Region>, region| {
            if best.map_or(|b| b.len() < region.len(), true) {
                OptionalRef::new(region)
            } else {
                best
            }
        });
    assert_eq!(largest.map(|r| r.start), Optional::some(2));

    let empty = OptionalRef::<Region>::nullopt();
    assert!(empty.and_then(|r| Optional::some(r.len())).is_empty());
    assert_eq!(empty.map_or_else(Region::len, || 0), 0);
    assert!(empty.conjunction(1).is_empty());
    assert_eq!(largest.conjunction("bound"), Optional::some("bound"));
    assert!(empty.disjunction(largest).has_value());
}

#[test]
fn optional_mut_updates_the_referent() -> anyhow::Result<()> {
    let mut region = Region { start: 0, end: 1 };
    {
        let mut r = OptionalMut::new(&mut region);
        r.value_mut()?.end = 64;
        r.start = 32;
    }
    assert_eq!(region.len(), 32);
    Ok(())
}
