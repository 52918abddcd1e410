use crate::errors::ClimateError;

/// Newton's method for solving f(x) = 0 in one variable.
///
/// The derivative is approximated with a centered difference unless an
/// analytic derivative is supplied. The adjustable constants mirror the
/// usual knobs: `tolerance` bounds the final step (an estimate of the
/// error in the root), `max_iterations` caps the search, and
/// `derivative_step` is the increment for the numeric derivative.
#[derive(Debug, Clone)]
pub struct NewtonSolver {
    pub tolerance: f64,
    pub max_iterations: usize,
    pub derivative_step: f64,
}

impl Default for NewtonSolver {
    fn default() -> Self {
        NewtonSolver {
            tolerance: 1e-6,
            max_iterations: 100,
            derivative_step: 1e-6,
        }
    }
}

impl NewtonSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solve<F: Fn(f64) -> f64>(&self, f: F, guess: f64) -> Result<f64, ClimateError> {
        let eps = self.derivative_step;
        let deriv = |x: f64| (f(x + eps) - f(x - eps)) / (2.0 * eps);
        self.iterate(&f, deriv, guess)
    }

    pub fn solve_with_derivative<F, D>(
        &self,
        f: F,
        fprime: D,
        guess: f64,
    ) -> Result<f64, ClimateError>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        self.iterate(&f, fprime, guess)
    }

    fn iterate<F, D>(&self, f: &F, deriv: D, guess: f64) -> Result<f64, ClimateError>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let mut x = guess;
        for _ in 0..self.max_iterations {
            let dx = f(x) / deriv(x);
            x -= dx;
            if dx.abs() < self.tolerance {
                return Ok(x);
            }
        }
        Err(ClimateError::NoConvergence {
            iterations: self.max_iterations,
        })
    }

    /// Find initial guesses to roots in `interval`, subdivided into `n`
    /// pieces. Returns the abscissas where f changes sign; a larger `n`
    /// lowers the chance of missing a root at the cost of more
    /// evaluations.
    pub fn scan<F: Fn(f64) -> f64>(&self, f: F, interval: (f64, f64), n: usize) -> Vec<f64> {
        let (a, b) = interval;
        let mut guesses = Vec::new();
        if n < 2 {
            return guesses;
        }

        let dx = (b - a) / (n - 1) as f64;
        let mut flast = f(a);
        for i in 1..n {
            let x = a + i as f64 * dx;
            let fnow = f(x);
            if (fnow >= 0.0 && flast <= 0.0) || (fnow <= 0.0 && flast >= 0.0) {
                guesses.push(x);
            }
            flast = fnow;
        }
        guesses
    }
}
