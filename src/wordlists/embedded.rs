//! Word lists compiled in by `build.rs`

include!(concat!(env!("OUT_DIR"), "/word_lists.rs"));
