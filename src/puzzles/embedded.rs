//! Embedded sample puzzle
//!
//! Puzzle compiled into the binary at build time.

// Include generated puzzle from build script
include!(concat!(env!("OUT_DIR"), "/sample_puzzle.rs"));
