//! Raw byte I/O primitives.
//!
//! Files are flat and headerless: what goes in is exactly what comes out.
//! Each path-based helper opens the file, performs one operation and drops
//! the handle before returning, so the file is closed by the time the caller
//! sees the result.
//!
//! # Fixed-capacity reads
//! [`read_into`] fills a caller-owned buffer and stops at end of file.  A
//! short file is not an error: the untouched tail keeps whatever the buffer
//! held before the call.  [`read_to_vec`] sizes its buffer to the content
//! instead.
//!
//! # Closing
//! Dropping a `File` discards any error from `close`.  Writes are synced
//! with `sync_all` first, so failures after the last `write` are still
//! reported; read handles have nothing left to flush.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use log::debug;

// ── Generic ──────────────────────────────────────────────────────────────────

/// Write all of `data` and flush.  Returns the number of bytes written.
pub fn write_buffer<W: Write>(mut writer: W, data: &[u8]) -> io::Result<usize> {
    writer.write_all(data)?;
    writer.flush()?;
    Ok(data.len())
}

/// Read until `buf` is full or the reader is exhausted.  Returns the number
/// of bytes filled.
pub fn read_into<R: Read>(mut reader: R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0)  => break,
            Ok(n)  => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read everything the reader has left into a new buffer.
pub fn read_to_vec<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}

// ── Path-based ───────────────────────────────────────────────────────────────

/// Create (or truncate) `path` and write `data` to it.  The data is synced
/// to disk before the handle is dropped, so write-back failures surface here
/// rather than being lost on close.
pub fn write_file<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<usize> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    debug!("opened {} for writing", path.display());
    let written = write_buffer(&mut file, data)?;
    file.sync_all()?;
    debug!("wrote {written} byte(s) to {}, closed", path.display());
    Ok(written)
}

/// Open `path` and read up to `buf.len()` bytes into `buf`.
pub fn read_file_into<P: AsRef<Path>>(path: P, buf: &mut [u8]) -> io::Result<usize> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!("opened {} for reading", path.display());
    let filled = read_into(file, buf)?;
    if filled < buf.len() {
        debug!("short read: {filled} of {} byte(s) from {}", buf.len(), path.display());
    } else {
        debug!("read {filled} byte(s) from {}, closed", path.display());
    }
    Ok(filled)
}

/// Open `path` and read its entire content.
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!("opened {} for reading", path.display());
    let data = read_to_vec(file)?;
    debug!("read {} byte(s) from {}, closed", data.len(), path.display());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most `step` bytes per `read` call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn write_buffer_reports_length() {
        let mut out = Vec::new();
        assert_eq!(write_buffer(&mut out, b"abcdefghij").unwrap(), 10);
        assert_eq!(out, b"abcdefghij");
    }

    #[test]
    fn read_into_fills_whole_buffer() {
        let mut buf = [0u8; 4];
        let n = read_into(Cursor::new(b"abcdefgh"), &mut buf).unwrap();
        assert_eq!(n, 4);
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn read_into_keeps_tail_on_short_input() {
        let mut buf = [0u8; 6];
        let n = read_into(Cursor::new(b"abc"), &mut buf).unwrap();
        assert_eq!(n, 3);
        assert_eq!(&buf, b"abc\0\0\0");
    }

    #[test]
    fn read_into_joins_partial_reads() {
        let mut buf = [0u8; 10];
        let n = read_into(Trickle { data: b"abcdefghij", step: 3 }, &mut buf).unwrap();
        assert_eq!(n, 10);
        assert_eq!(&buf, b"abcdefghij");
    }

    #[test]
    fn read_to_vec_takes_everything() {
        let data = read_to_vec(Trickle { data: b"hello world", step: 2 }).unwrap();
        assert_eq!(data, b"hello world");
    }

    #[test]
    fn read_file_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("absent.bin")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_file_reports_device_errors() {
        if !Path::new("/dev/full").exists() {
            return;
        }
        let err = write_file("/dev/full", b"abcdefghij").unwrap_err();
        assert_eq!(err.raw_os_error(), Some(28));
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.bin");
        write_file(&path, b"a much longer payload").unwrap();
        write_file(&path, b"short").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"short");
    }
}
