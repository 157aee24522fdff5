//! Command-line interface for the `lzdgen` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program name, size multipliers, and the shared `DISPLAY_LEVEL` with its macros. |
//! | [`arg_utils`] | Value parsers: sizes with k/m/g/t suffixes, C-style seeds, strict floats. |
//! | [`args`]      | `Opts` (clap definition) and `ParsedArgs`, the validated run configuration. |
//!
//! Typical call sequence: `parse_args` → `ParsedArgs` → `io::write_generated`.

pub mod constants;
pub mod arg_utils;
pub mod args;
