/// Source of uniform draws in `[0, 1)`.
///
/// The simulation only ever asks for a single uniform value at a time, so any
/// generator can drive it. `fastrand::Rng` is the default; tests plug in
/// scripted sources to force specific decisions.
pub trait RandomSource {
    fn uniform(&mut self) -> f64;
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }
}

/// Always returns the same value. `Constant(0.0)` makes every probabilistic
/// check succeed, `Constant(0.999)` makes nearly every one fail.
#[derive(Clone, Copy, Debug)]
pub struct Constant(pub f64);

impl RandomSource for Constant {
    fn uniform(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed sequence of draws, wrapping around at the end
#[derive(Clone, Debug)]
pub struct Scripted {
    draws: Vec<f64>,
    next: usize,
}

impl Scripted {
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "scripted source needs at least one draw");
        Self { draws, next: 0 }
    }

    /// Number of values handed out so far
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for Scripted {
    fn uniform(&mut self) -> f64 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastrand_draws_are_unit_interval() {
        let mut rng = fastrand::Rng::with_seed(9);
        for _ in 0..1_000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = fastrand::Rng::with_seed(42);
        let mut b = fastrand::Rng::with_seed(42);
        for _ in 0..16 {
            assert_eq!(a.uniform(), b.uniform());
        }
    }

    #[test]
    fn test_scripted_wraps() {
        let mut src = Scripted::new(vec![0.1, 0.9]);
        assert_eq!(src.uniform(), 0.1);
        assert_eq!(src.uniform(), 0.9);
        assert_eq!(src.uniform(), 0.1);
        assert_eq!(src.consumed(), 3);
    }
}
