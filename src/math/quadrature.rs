use crate::errors::ClimateError;
use crate::math::interpolation::polint;

/// Trapezoidal rule over a fixed interval with iterative refinement.
///
/// Each `refine` call evaluates the integrand at the midpoints of the
/// current subintervals, halving the step. The count of subintervals
/// doubles every time.
struct Trapezoid<'a, F: Fn(f64) -> f64> {
    f: &'a F,
    a: f64,
    b: f64,
    n: usize,
    integral: f64,
}

impl<'a, F: Fn(f64) -> f64> Trapezoid<'a, F> {
    fn new(f: &'a F, interval: (f64, f64), nstart: usize) -> Self {
        let (a, b) = interval;
        let dx = (b - a) / nstart as f64;
        let mut sum = dx * (f(a) + f(b)) / 2.0;
        for i in 1..nstart {
            sum += f(a + i as f64 * dx) * dx;
        }
        Trapezoid {
            f,
            a,
            b,
            n: nstart,
            integral: sum,
        }
    }

    fn refine(&mut self) {
        let dx = (self.b - self.a) / self.n as f64;

        // One midpoint per subinterval, weighted by the new (halved) step
        let mut sum = 0.0;
        for i in 0..self.n {
            sum += (self.f)(self.a + (i as f64 + 0.5) * dx) * (dx / 2.0);
        }

        // The previous sum used the old dx, so it contributes half its value
        self.integral = 0.5 * self.integral + sum;
        self.n *= 2;
    }
}

/// Definite integrals by Romberg extrapolation.
///
/// Runs the refining trapezoidal rule and extrapolates the sequence of
/// estimates to zero step size with a polynomial fit in h².
pub struct Romberg {
    pub nstart: usize,
    pub max_refinements: usize,
}

impl Default for Romberg {
    fn default() -> Self {
        Romberg {
            nstart: 4,
            max_refinements: 20,
        }
    }
}

impl Romberg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn integrate<F: Fn(f64) -> f64>(
        &self,
        f: F,
        interval: (f64, f64),
        tolerance: f64,
    ) -> Result<f64, ClimateError> {
        let mut trap = Trapezoid::new(&f, interval, self.nstart);
        let mut n_list = vec![self.nstart];
        let mut integral_list = vec![trap.integral];

        let mut extrapolate = |trap: &mut Trapezoid<F>,
                               n_list: &mut Vec<usize>,
                               integral_list: &mut Vec<f64>|
         -> Result<f64, ClimateError> {
            trap.refine();
            n_list.push(trap.n);
            integral_list.push(trap.integral);
            let dx: Vec<f64> = n_list.iter().map(|&n| 1.0 / (n * n) as f64).collect();
            polint(&dx, integral_list, 0.0)
        };

        let mut oldval = extrapolate(&mut trap, &mut n_list, &mut integral_list)?;
        let mut newval = extrapolate(&mut trap, &mut n_list, &mut integral_list)?;

        let mut refinements = 2;
        while (oldval - newval).abs() > tolerance {
            if refinements >= self.max_refinements {
                return Err(ClimateError::NoConvergence {
                    iterations: refinements,
                });
            }
            oldval = newval;
            newval = extrapolate(&mut trap, &mut n_list, &mut integral_list)?;
            refinements += 1;
        }

        Ok(newval)
    }
}

/// Convenience wrapper with the default 1e-6 tolerance.
pub fn romberg<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> Result<f64, ClimateError> {
    Romberg::new().integrate(f, (a, b), 1e-6)
}
