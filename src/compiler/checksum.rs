//! Content checksum stamping.
//!
//! Each rendered artifact gets a CRC-32 over its UTF-8 bytes, prepended as a
//! leading comment. This gives downstream tooling cheap tamper/staleness
//! detection; it is not cryptographic integrity.

/// Reflected CRC-32 lookup table (polynomial 0xEDB88320).
const CRC_TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut bit = 0;
        while bit < 8 {
            c = if c & 1 != 0 {
                0xEDB8_8320 ^ (c >> 1)
            } else {
                c >> 1
            };
            bit += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Computes the standard CRC-32 of `data` (init and final value XORed with
/// all-ones, per-byte table driven).
///
/// # Examples
///
/// ```
/// use tokensmith::compiler::crc32;
///
/// assert_eq!(crc32(b""), 0);
/// assert_eq!(crc32(b"The quick brown fox jumps over the lazy dog"), 0x414F_A339);
/// ```
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFF_u32;
    for &byte in data {
        crc = (crc >> 8) ^ CRC_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize];
    }
    crc ^ 0xFFFF_FFFF
}

/// Prepends the checksum comment line to an artifact.
#[must_use]
pub fn stamp(artifact: &str) -> String {
    format!("/* crc32: {} */\n{artifact}", crc32(artifact.as_bytes()))
}
