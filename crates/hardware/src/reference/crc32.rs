//! Reflected CRC-32 over a single data word.
//!
//! The accelerator checksums one 32-bit word per register write: the word is folded
//! into an all-ones register and shifted out LSB first. Two software forms are
//! provided. [`software_crc32`] is the direct bitwise loop used as the audit
//! baseline; [`Crc32Table`] processes a byte per step and is bit-identical for
//! every polynomial.

/// Computes the reflected CRC-32 of `data` with `polynomial`.
///
/// The register starts as `0xFFFF_FFFF ^ data`. Each of the 32 steps shifts it right
/// by one, XOR-ing in `polynomial` when the bit shifted out was set. The result is
/// the complement of the final register.
///
/// # Arguments
///
/// * `data` - The data word.
/// * `polynomial` - The reflected generator polynomial (e.g. `0xEDB8_8320`).
pub const fn software_crc32(data: u32, polynomial: u32) -> u32 {
    let mut crc = u32::MAX ^ data;
    let mut i = 0;
    while i < 32 {
        crc = if crc & 1 != 0 {
            (crc >> 1) ^ polynomial
        } else {
            crc >> 1
        };
        i += 1;
    }
    !crc
}

/// Table-driven CRC-32 for a fixed polynomial.
///
/// Entry `i` holds the register contribution of shifting byte `i` out over eight
/// steps, so a word is consumed in four lookups.
#[derive(Clone, Debug)]
pub struct Crc32Table {
    polynomial: u32,
    table: [u32; 256],
}

impl Crc32Table {
    /// Builds the lookup table for `polynomial`.
    pub const fn new(polynomial: u32) -> Self {
        let mut table = [0u32; 256];
        let mut i = 0;
        while i < 256 {
            let mut entry = i as u32;
            let mut bit = 0;
            while bit < 8 {
                entry = if entry & 1 != 0 {
                    (entry >> 1) ^ polynomial
                } else {
                    entry >> 1
                };
                bit += 1;
            }
            table[i] = entry;
            i += 1;
        }
        Self { polynomial, table }
    }

    /// Returns the polynomial this table was built for.
    pub const fn polynomial(&self) -> u32 {
        self.polynomial
    }

    /// Computes the checksum of `data`; equal to `software_crc32(data, self.polynomial())`.
    pub fn checksum(&self, data: u32) -> u32 {
        let mut crc = u32::MAX ^ data;
        for _ in 0..4 {
            crc = self.table[(crc & 0xFF) as usize] ^ (crc >> 8);
        }
        !crc
    }
}
