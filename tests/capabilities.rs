use std::mem::{needs_drop, size_of};
use std::rc::Rc;

use optional::{Optional, OptionalMut, OptionalRef};

fn is_clone<T: Clone>() {}
fn is_copy<T: Copy>() {}
fn is_ord<T: Ord>() {}
fn is_send_sync<T: Send + Sync>() {}

struct Token;

const _: () = assert!(!needs_drop::<Optional<u64>>());
const _: () = assert!(!needs_drop::<Optional<(u8, char)>>());
const _: () = assert!(needs_drop::<Optional<String>>());
const _: () = assert!(!needs_drop::<OptionalRef<'static, String>>());

#[test]
fn copy_follows_element() {
    is_copy::<Optional<u32>>();
    is_copy::<Optional<&Token>>();
    is_copy::<OptionalRef<'static, Token>>();
    is_clone::<Optional<String>>();
    is_clone::<Optional<Rc<Token>>>();
}

#[test]
fn ordering_follows_element() {
    is_ord::<Optional<String>>();
    is_ord::<OptionalRef<'static, str>>();
}

#[test]
fn thread_safety_follows_element() {
    is_send_sync::<Optional<Vec<u8>>>();
    is_send_sync::<OptionalRef<'static, u8>>();
    is_send_sync::<OptionalMut<'static, u8>>();
}

#[test]
fn move_only_elements_still_move() {
    let a = Optional::some(Token);
    let b = a;
    assert!(b.has_value());
}

#[test]
fn empty_state_reuses_the_pointer_niche() {
    assert_eq!(size_of::<Optional<&u64>>(), size_of::<&u64>());
    assert_eq!(size_of::<Optional<Box<Token>>>(), size_of::<Box<Token>>());
    assert_eq!(size_of::<Optional<Rc<str>>>(), size_of::<Option<Rc<str>>>());
    assert_eq!(size_of::<Optional<u32>>(), size_of::<Option<u32>>());
}

#[test]
fn reference_is_a_single_pointer() {
    assert_eq!(
        size_of::<OptionalRef<'static, u64>>(),
        size_of::<&u64>()
    );
    assert_eq!(
        size_of::<OptionalMut<'static, str>>(),
        size_of::<&str>()
    );
}
