use std::io::{self, ErrorKind};

/// Default buffer size used by every exercise.
pub const BUFFER_LEN: usize = 10;
/// Largest buffer an exercise will allocate (1 MiB).
pub const MAX_BUFFER_LEN: usize = 1 << 20;
/// First value of the fill pattern.
pub const PATTERN_START: u8 = b'a';

/// Allocate a zeroed buffer of `len` bytes.  Lengths above
/// [`MAX_BUFFER_LEN`] or an allocation the system refuses are reported as
/// errors instead of aborting.
pub fn zeroed(len: usize) -> io::Result<Vec<u8>> {
    if len > MAX_BUFFER_LEN {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("buffer length {len} exceeds the {MAX_BUFFER_LEN}-byte limit"),
        ));
    }
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|e| io::Error::new(ErrorKind::OutOfMemory, e))?;
    data.resize(len, 0);
    Ok(data)
}

/// Fill `buf` in place with `'a' + index`, wrapping past 0xFF.
pub fn fill_alphabet(buf: &mut [u8]) {
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = PATTERN_START.wrapping_add(i as u8);
    }
}

/// Allocate a buffer of `len` bytes and fill it with the pattern.
pub fn alphabet(len: usize) -> io::Result<Vec<u8>> {
    let mut data = zeroed(len)?;
    fill_alphabet(&mut data);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_is_first_ten_letters() {
        assert_eq!(alphabet(BUFFER_LEN).unwrap(), b"abcdefghij");
    }

    #[test]
    fn pattern_wraps_past_byte_range() {
        let data = alphabet(200).unwrap();
        assert_eq!(data[0], b'a');
        assert_eq!(data[158], 0xFF);
        assert_eq!(data[159], 0x00);
    }

    #[test]
    fn empty_buffer_stays_empty() {
        assert!(alphabet(0).unwrap().is_empty());
    }

    #[test]
    fn limit_is_inclusive() {
        assert_eq!(zeroed(MAX_BUFFER_LEN).unwrap().len(), MAX_BUFFER_LEN);
    }

    #[test]
    fn oversized_lengths_are_rejected() {
        for len in [MAX_BUFFER_LEN + 1, 1 << 40, usize::MAX] {
            let err = zeroed(len).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            assert!(alphabet(len).is_err());
        }
    }
}
