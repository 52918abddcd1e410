use std::fmt;

/// Fixed-step classic Runge-Kutta stepper for dy/dx = f(x, y).
///
/// Holds the current state and advances it one step of size `h` per call,
/// so a caller can march an ODE while inspecting (or recording) every
/// intermediate state. The step may be negative to integrate downward,
/// which is how the moist adiabat walks from the surface toward the top
/// of the atmosphere in log pressure.
pub struct Rk4<F: Fn(f64, f64) -> f64> {
    f: F,
    pub x: f64,
    pub y: f64,
    pub h: f64,
}

impl<F: Fn(f64, f64) -> f64> Rk4<F> {
    pub fn new(f: F, x0: f64, y0: f64, h: f64) -> Self {
        Rk4 { f, x: x0, y: y0, h }
    }

    /// Advance one step and return the new (x, y).
    pub fn step(&mut self) -> (f64, f64) {
        let h = self.h;
        let k1 = (self.f)(self.x, self.y);
        let k2 = (self.f)(self.x + h / 2.0, self.y + k1 * (h / 2.0));
        let k3 = (self.f)(self.x + h / 2.0, self.y + k2 * (h / 2.0));
        let k4 = (self.f)(self.x + h, self.y + k3 * h);

        self.y += (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
        self.x += h;
        (self.x, self.y)
    }
}

impl<F: Fn(f64, f64) -> f64> fmt::Debug for Rk4<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rk4")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("h", &self.h)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rk4_exponential_growth() {
        // dy/dx = y with y(0) = 1 gives y(1) = e
        let mut stepper = Rk4::new(|_x, y| y, 0.0, 1.0, 0.01);
        for _ in 0..100 {
            stepper.step();
        }
        assert_relative_eq!(stepper.y, std::f64::consts::E, epsilon = 1e-8);
    }

    #[test]
    fn test_rk4_backward_integration() {
        // Integrating dy/dx = y backward from y(1) = e recovers y(0) = 1
        let mut stepper = Rk4::new(|_x, y| y, 1.0, std::f64::consts::E, -0.01);
        for _ in 0..100 {
            stepper.step();
        }
        assert_relative_eq!(stepper.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(stepper.y, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_rk4_nonautonomous() {
        // dy/dx = 2x with y(0) = 0 gives y = x²
        let mut stepper = Rk4::new(|x, _y| 2.0 * x, 0.0, 0.0, 0.1);
        for _ in 0..10 {
            stepper.step();
        }
        assert_relative_eq!(stepper.y, 1.0, epsilon = 1e-12);
    }
}
