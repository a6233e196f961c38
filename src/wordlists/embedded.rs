//! Lists generated by `build.rs` from `data/`
//!
//! `ANSWERS` is ordered: entry `n` is the solution for day `n`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
