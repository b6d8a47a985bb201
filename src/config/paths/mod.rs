//! Well-known config and state locations.

pub mod xdg_root;
