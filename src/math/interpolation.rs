use crate::errors::ClimateError;

/// Polynomial interpolation and extrapolation through a table of points
/// (Neville's algorithm). Fits the unique polynomial through every supplied
/// point and evaluates it at `x`.
pub fn polint(xa: &[f64], ya: &[f64], x: f64) -> Result<f64, ClimateError> {
    let n = xa.len();
    if n == 0 || n != ya.len() {
        return Err(ClimateError::TableLengthMismatch {
            x_len: n,
            y_len: ya.len(),
        });
    }

    let mut c = ya.to_vec();
    let mut d = ya.to_vec();

    // Start from the table entry closest to x
    let mut ns = 0;
    let mut diff = (xa[0] - x).abs();
    for (i, &xi) in xa.iter().enumerate() {
        let difft = (xi - x).abs();
        if difft < diff {
            diff = difft;
            ns = i;
        }
    }

    let mut y = ya[ns];
    for m in 1..n {
        for i in 0..(n - m) {
            let ho = xa[i] - x;
            let hp = xa[i + m] - x;
            let w = c[i + 1] - d[i];
            c[i] = ho * w / (ho - hp);
            d[i] = hp * w / (ho - hp);
        }
        let dy = if 2 * ns < n - m {
            c[ns]
        } else {
            ns -= 1;
            d[ns]
        };
        // dy doubles as an error estimate; here we only accumulate y
        y += dy;
    }

    Ok(y)
}

/// Callable polynomial interpolator over a tabulated function.
///
/// Interpolates (or extrapolates) using the `order` nearest neighbors on
/// each side of the evaluation point, four by default. Works with either
/// ascending or descending abscissas, so a pressure axis that decreases
/// with height can be used directly.
#[derive(Debug, Clone)]
pub struct Interp {
    xa: Vec<f64>,
    ya: Vec<f64>,
    order: usize,
}

impl Interp {
    pub fn new(xa: &[f64], ya: &[f64]) -> Result<Self, ClimateError> {
        Self::with_order(xa, ya, 4)
    }

    pub fn with_order(xa: &[f64], ya: &[f64], order: usize) -> Result<Self, ClimateError> {
        if xa.is_empty() || xa.len() != ya.len() {
            return Err(ClimateError::TableLengthMismatch {
                x_len: xa.len(),
                y_len: ya.len(),
            });
        }
        Ok(Interp {
            xa: xa.to_vec(),
            ya: ya.to_vec(),
            order,
        })
    }

    pub fn eval(&self, x: f64) -> Result<f64, ClimateError> {
        let n = self.xa.len();
        let ascending = self.xa[0] <= self.xa[n - 1];

        // Insertion point of x in the table
        let i = if ascending {
            self.xa.partition_point(|&v| v < x)
        } else {
            self.xa.partition_point(|&v| v > x)
        };

        let i1 = i.saturating_sub(self.order);
        let i2 = (i + self.order).min(n);

        polint(&self.xa[i1..i2], &self.ya[i1..i2], x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polint_exact_on_quadratic() {
        // A 3-point fit reproduces a quadratic exactly, even extrapolating
        let xa = [0.0, 1.0, 2.0];
        let ya: Vec<f64> = xa.iter().map(|x| 3.0 * x * x - 2.0 * x + 1.0).collect();

        assert_relative_eq!(polint(&xa, &ya, 0.5).unwrap(), 0.75, epsilon = 1e-12);
        assert_relative_eq!(polint(&xa, &ya, 3.0).unwrap(), 22.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polint_length_mismatch() {
        let result = polint(&[0.0, 1.0], &[1.0], 0.5);
        assert!(matches!(
            result,
            Err(ClimateError::TableLengthMismatch { x_len: 2, y_len: 1 })
        ));
        assert!(polint(&[], &[], 0.5).is_err());
    }

    #[test]
    fn test_interp_recovers_smooth_function() {
        let xa: Vec<f64> = (0..11).map(|i| i as f64).collect();
        let ya: Vec<f64> = xa.iter().map(|x| (-x * x / 9.0).cos()).collect();
        let f = Interp::new(&xa, &ya).unwrap();

        // Between nodes the 4th-order fit should be close to the function
        for &x in &[0.5, 2.25, 4.75] {
            let exact = (-x * x / 9.0_f64).cos();
            assert_relative_eq!(f.eval(x).unwrap(), exact, epsilon = 2e-2);
        }

        // At the nodes it must be exact
        assert_relative_eq!(f.eval(3.0).unwrap(), ya[3], epsilon = 1e-12);
    }

    #[test]
    fn test_interp_descending_axis() {
        // Pressure-like axis: decreasing x, linear y
        let xa = [1000.0, 800.0, 600.0, 400.0, 200.0];
        let ya = [10.0, 8.0, 6.0, 4.0, 2.0];
        let f = Interp::new(&xa, &ya).unwrap();

        assert_relative_eq!(f.eval(700.0).unwrap(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(f.eval(250.0).unwrap(), 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_interp_wide_window_clamped_at_edges() {
        let xa = [0.0, 1.0, 2.0];
        let ya = [0.0, 1.0, 4.0];
        let f = Interp::with_order(&xa, &ya, 8).unwrap();
        // Window wider than the table just uses all of it
        assert_relative_eq!(f.eval(1.5).unwrap(), 2.25, epsilon = 1e-12);
    }
}
