//! Lead-byte inspection for UTF-8 sequences.
//!
//! Only the length of a sequence is derived from its first byte; nothing here
//! decodes to a `char` or validates continuation bytes.

/// The longest well-formed UTF-8 sequence, in bytes.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// Maps the byte at the read position to the length of the sequence it starts.
///
/// Sources call this through [`SourceOptions::decoder`], so a tokenizer with
/// its own notion of a character (for example a single-byte legacy encoding)
/// can swap it out.
///
/// [`SourceOptions::decoder`]: crate::SourceOptions::decoder
pub type LeadByteDecoder = fn(u8) -> usize;

/// Returns the number of bytes (1–4) occupied by the UTF-8 sequence whose
/// first byte is `lead`.
///
/// Bytes that cannot start a sequence (continuation bytes and `0xF8..=0xFF`)
/// report `1`, so a malformed byte is stepped over on its own rather than
/// swallowing the bytes that follow it.
///
/// ```rust
/// use csv_lookahead::utf8::sequence_length;
///
/// assert_eq!(sequence_length(b','), 1);
/// assert_eq!(sequence_length("é".as_bytes()[0]), 2);
/// assert_eq!(sequence_length("€".as_bytes()[0]), 3);
/// assert_eq!(sequence_length("🦀".as_bytes()[0]), 4);
/// ```
#[inline]
#[must_use]
pub fn sequence_length(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Whether `byte` is a continuation byte (`10xxxxxx`).
#[inline]
#[must_use]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Runs `decoder` and clamps its answer into `1..=MAX_SEQUENCE_LEN`.
#[inline]
pub(crate) fn decode_len(decoder: LeadByteDecoder, lead: u8) -> usize {
    decoder(lead).clamp(1, MAX_SEQUENCE_LEN)
}
