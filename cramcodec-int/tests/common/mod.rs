//! MSB-first bit writer and reference encoders shared by the integration tests.

#![allow(dead_code)]

/// Accumulates bits MSB-first into bytes, padding the last byte with zeros.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    current: u8,
    used: u8,
    bits: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bit(&mut self, bit: bool) {
        self.current = (self.current << 1) | bit as u8;
        self.used += 1;
        self.bits += 1;
        if self.used == 8 {
            self.bytes.push(self.current);
            self.current = 0;
            self.used = 0;
        }
    }

    /// Write the low `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: u32) {
        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 == 1);
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.bits
    }

    pub fn finish(mut self) -> Vec<u8> {
        if self.used > 0 {
            self.bytes.push(self.current << (8 - self.used));
        }
        self.bytes
    }
}

/// Gamma-encode `value + offset` (must be >= 1).
pub fn put_gamma(writer: &mut BitWriter, value: i32, offset: i32) {
    let magnitude = value.wrapping_add(offset) as u32;
    assert!(magnitude >= 1, "gamma cannot encode {magnitude}");
    let length = 32 - magnitude.leading_zeros();
    for _ in 1..length {
        writer.write_bit(false);
    }
    writer.write_bits(magnitude, length);
}

/// Beta-encode `value + offset` in `num_bits` bits.
pub fn put_beta(writer: &mut BitWriter, value: i32, num_bits: u32, offset: i32) {
    writer.write_bits(value.wrapping_add(offset) as u32, num_bits);
}

/// Subexp-encode `value + offset` (must be >= 0) with parameter `k`.
pub fn put_subexp(writer: &mut BitWriter, value: i32, k: u32, offset: i32) {
    let magnitude = value.wrapping_add(offset) as u32;
    if (magnitude as u64) < (1u64 << k) {
        writer.write_bit(false);
        writer.write_bits(magnitude, k);
    } else {
        let b = 31 - magnitude.leading_zeros();
        let u = b - k + 1;
        for _ in 0..u {
            writer.write_bit(true);
        }
        writer.write_bit(false);
        writer.write_bits(magnitude, b);
    }
}

/// Canonical Huffman codes as `(symbol, code, length)`.
pub fn canonical_codes(symbols: &[i32], bit_lengths: &[u32]) -> Vec<(i32, u32, u32)> {
    let mut pairs: Vec<(u32, i32)> = bit_lengths
        .iter()
        .copied()
        .zip(symbols.iter().copied())
        .collect();
    pairs.sort_unstable();

    let mut codes = Vec::with_capacity(pairs.len());
    let mut code = 0u32;
    let mut prev_len = 0;
    for (i, &(len, symbol)) in pairs.iter().enumerate() {
        if i > 0 {
            code += 1;
        }
        code <<= len - prev_len;
        prev_len = len;
        codes.push((symbol, code, len));
    }
    codes
}

/// Huffman-encode `symbol` using codes from [`canonical_codes`].
pub fn put_huffman(writer: &mut BitWriter, codes: &[(i32, u32, u32)], symbol: i32) {
    let &(_, code, len) = codes
        .iter()
        .find(|&&(s, _, _)| s == symbol)
        .expect("symbol not in table");
    writer.write_bits(code, len);
}

/// Simple LCG for reproducible pseudo-random test values.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Value in `0..bound`.
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}
