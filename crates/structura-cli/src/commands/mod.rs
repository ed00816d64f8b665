pub mod check;
pub mod deps;
pub mod docs;
pub mod loader;
pub mod run_common;
pub mod trace;
pub mod tree;
