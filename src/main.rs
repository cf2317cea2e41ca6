//! Minimal entry point so the library builds and runs standalone.

fn main() {}
