//! Framework-independent logic behind the components.

pub mod nav;
