//! Unit tests mirroring the `src` module tree

mod math;
