use std::io::{self, Write};

/// Decode every byte as the character with the same code point (Latin-1),
/// so each byte yields exactly one `char`.
pub fn to_chars(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b)).collect()
}

/// Write the decoded characters with no separator and no trailing newline.
pub fn print_chars<W: Write>(mut out: W, data: &[u8]) -> io::Result<()> {
    out.write_all(to_chars(data).as_bytes())
}
