#![allow(dead_code)]

use rand::rngs::ThreadRng;

pub const ROUNDS: usize = 256;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rng() -> ThreadRng {
    rand::thread_rng()
}
