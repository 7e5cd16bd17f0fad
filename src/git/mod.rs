//! Git integration layer.
//!
//! This module wraps the backend implementation (`git2_backend`) and
//! re-exports only what the rest of the crate needs: locating the
//! repository that encloses a directory and the hooks directory Git will
//! actually run hooks from.
//!
//! Callers never touch `git2` types directly.

mod git2_backend;

pub use git2_backend::{ceiling_dirs_from_env, discover};
