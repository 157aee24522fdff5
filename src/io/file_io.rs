//! Output destination handling.
//!
//! [`open_dst_file`] resolves the user's OUTFILE argument to a [`DstFile`]:
//! standard output for [`STDOUT_MARK`], otherwise a regular file that is
//! created fresh, or truncated only when overwriting was requested.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use crate::displaylevel;

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "-";

#[inline]
fn is_stdout(s: &str) -> bool {
    s == STDOUT_MARK
}

/// A write-capable destination produced by [`open_dst_file`].
pub struct DstFile {
    inner: Box<dyn Write>,
    pub is_stdout: bool,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Opens a destination for writing.
///
/// - `"-"` → stdout.
/// - Otherwise the file is created with mode 0644 (on Unix). If it already
///   exists and `overwrite` is `false` the call fails with
///   [`io::ErrorKind::AlreadyExists`]; with `overwrite` it is truncated.
pub fn open_dst_file(path: &str, overwrite: bool) -> io::Result<DstFile> {
    if is_stdout(path) {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(DstFile {
            inner: Box::new(io::stdout().lock()),
            is_stdout: true,
        });
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let f: File = options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{path}: already exists; use -f to overwrite"),
            )
        } else {
            io::Error::new(e.kind(), format!("{path}: {e}"))
        }
    })?;

    Ok(DstFile {
        inner: Box::new(BufWriter::new(f)),
        is_stdout: false,
    })
}
