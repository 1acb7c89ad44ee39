use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of elements in the list measured by `cargo bench`.
pub const DEFAULT_SIZE: usize = 10_000_000;

/// An ordered list of pseudo-random `i32` values, built once per benchmark
/// run and scanned read-only by every traversal variant.
///
/// The requested size is stored alongside the values: the exclusive-range
/// variant loops over the stored size while the others derive their bound
/// from the container itself.
pub struct Fixture {
    size: usize,
    values: Vec<i32>,
}

impl Fixture {
    /// Populates `size` values from an unseeded rng, uniform over the full
    /// `i32` range. Construction cost belongs outside the timed region.
    pub fn random(size: usize) -> Self {
        Self::fill(size, &mut rand::thread_rng())
    }

    /// Deterministic construction, for tests and reproducible runs.
    pub fn seeded(size: usize, seed: u64) -> Self {
        Self::fill(size, &mut StdRng::seed_from_u64(seed))
    }

    /// Wraps explicit contents, for edge-case fixtures.
    pub fn from_values(values: Vec<i32>) -> Self {
        Fixture {
            size: values.len(),
            values,
        }
    }

    fn fill<R: Rng>(size: usize, rng: &mut R) -> Self {
        let mut values = Vec::with_capacity(size);
        for _ in 0..size {
            values.push(rng.gen::<i32>());
        }
        Fixture { size, values }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// The size the fixture was requested with; equals `len()` by construction.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
