//! Word lists compiled into the binary by the build script

include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
