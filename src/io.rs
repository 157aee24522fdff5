//! Output side of the `lzdgen` tool.
//!
//! - [`file_io`] — opening the destination (stdout or a file) with the
//!   overwrite policy.
//! - [`writer`] — chunked generation into any [`std::io::Write`].

pub mod file_io;
pub mod writer;

pub use file_io::{open_dst_file, DstFile, STDOUT_MARK};
pub use writer::{write_generated, WriteSummary};
