//! Two-dimensional simplex noise with a seeded permutation table
//!
//! The permutation table is shuffled by an [`Alea`] generator built from the
//! same seed string as the artwork, so noise-driven column heights replay
//! exactly alongside the uniform samples.

use crate::math::alea::Alea;

const PERMUTATION_SIZE: usize = 256;
const GRADIENT_COUNT: u8 = 12;
const OUTPUT_SCALE: f64 = 70.0;

const GRADIENTS: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Skew factor from input space onto the simplex grid: (sqrt(3) - 1) / 2
fn skew_factor() -> f64 {
    0.5 * (3.0_f64.sqrt() - 1.0)
}

/// Unskew factor back into input space: (3 - sqrt(3)) / 6
fn unskew_factor() -> f64 {
    (3.0 - 3.0_f64.sqrt()) / 6.0
}

/// Seeded simplex noise source returning values in [-1, 1]
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    perm: Vec<u8>,
    perm_mod12: Vec<u8>,
}

impl SimplexNoise {
    /// Build the noise source for a seed string
    pub fn new(seed: &str) -> Self {
        let mut random = Alea::new(seed);
        let table = build_permutation_table(&mut random);

        let perm: Vec<u8> = (0..PERMUTATION_SIZE * 2)
            .map(|i| table.get(i & (PERMUTATION_SIZE - 1)).copied().unwrap_or(0))
            .collect();
        let perm_mod12 = perm.iter().map(|p| p % GRADIENT_COUNT).collect();

        Self { perm, perm_mod12 }
    }

    /// Sample the noise field at `(x, y)`
    #[allow(clippy::suboptimal_flops)]
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        let f2 = skew_factor();
        let g2 = unskew_factor();

        let s = (x + y) * f2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * g2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1): (usize, usize) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + g2;
        let y1 = y0 - j1 as f64 + g2;
        let x2 = x0 - 1.0 + 2.0 * g2;
        let y2 = y0 - 1.0 + 2.0 * g2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let n0 = self.corner(x0, y0, ii, jj);
        let n1 = self.corner(x1, y1, ii + i1, jj + j1);
        let n2 = self.corner(x2, y2, ii + 1, jj + 1);

        OUTPUT_SCALE * (n0 + n1 + n2)
    }

    /// Contribution of one simplex corner
    #[allow(clippy::suboptimal_flops)]
    fn corner(&self, x: f64, y: f64, i: usize, j: usize) -> f64 {
        let mut t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }

        let hashed = self.perm.get(j).copied().unwrap_or(0) as usize;
        let gradient_index = self.perm_mod12.get(i + hashed).copied().unwrap_or(0) as usize;
        let [gx, gy] = GRADIENTS.get(gradient_index).copied().unwrap_or([0.0, 0.0]);

        t *= t;
        t * t * (gx * x + gy * y)
    }
}

/// Fisher-Yates style shuffle of the identity table driven by `random`
fn build_permutation_table(random: &mut Alea) -> Vec<u8> {
    let mut table: Vec<u8> = (0..=255).collect();
    for i in 0..PERMUTATION_SIZE - 1 {
        let remaining = (PERMUTATION_SIZE - i) as f64;
        let r = i + (random.next_f64() * remaining) as usize;
        table.swap(i, r);
    }
    table
}
