//! Alea pseudo-random generator with the Mash string hash
//!
//! Seeds are arbitrary strings, so a curated artwork can be replayed from the
//! exact seed text it was generated with. Output values are multiples of 2^-32
//! in [0, 1).

const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_MINUS_32: f64 = 2.328_306_436_538_696_3e-10;
const MASH_SEED: f64 = 4_022_871_197.0;
const MASH_FACTOR: f64 = 0.025_196_032_824_169_38;
const STEP_MULTIPLIER: f64 = 2_091_639.0;

/// Truncate to an unsigned 32-bit integer (the `>>> 0` conversion)
fn to_uint32(value: f64) -> f64 {
    let truncated = value.trunc();
    truncated.rem_euclid(TWO_POW_32)
}

/// Order-dependent string hash feeding the Alea state
struct Mash {
    n: f64,
}

impl Mash {
    const fn new() -> Self {
        Self { n: MASH_SEED }
    }

    #[allow(clippy::suboptimal_flops)]
    fn hash(&mut self, data: &str) -> f64 {
        for unit in data.encode_utf16() {
            self.n += f64::from(unit);
            let mut h = MASH_FACTOR * self.n;
            self.n = to_uint32(h);
            h -= self.n;
            h *= self.n;
            self.n = to_uint32(h);
            h -= self.n;
            self.n += h * TWO_POW_32;
        }
        to_uint32(self.n) * TWO_POW_MINUS_32
    }
}

/// Seedable uniform generator producing floats in [0, 1)
#[derive(Debug, Clone)]
pub struct Alea {
    s0: f64,
    s1: f64,
    s2: f64,
    carry: f64,
}

impl Alea {
    /// Create a generator from a single seed string
    pub fn new(seed: &str) -> Self {
        Self::from_parts([seed])
    }

    /// Create a generator from several seed parts, hashed in order
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mash = Mash::new();
        let mut s0 = mash.hash(" ");
        let mut s1 = mash.hash(" ");
        let mut s2 = mash.hash(" ");

        for part in parts {
            let part = part.as_ref();
            s0 -= mash.hash(part);
            if s0 < 0.0 {
                s0 += 1.0;
            }
            s1 -= mash.hash(part);
            if s1 < 0.0 {
                s1 += 1.0;
            }
            s2 -= mash.hash(part);
            if s2 < 0.0 {
                s2 += 1.0;
            }
        }

        Self {
            s0,
            s1,
            s2,
            carry: 1.0,
        }
    }

    /// Next uniform sample in [0, 1)
    // A fused multiply-add rounds differently and breaks replay of stored seeds
    #[allow(clippy::suboptimal_flops)]
    pub fn next_f64(&mut self) -> f64 {
        let t = STEP_MULTIPLIER * self.s0 + self.carry * TWO_POW_MINUS_32;
        self.s0 = self.s1;
        self.s1 = self.s2;
        self.carry = t.trunc();
        self.s2 = t - self.carry;
        self.s2
    }
}
