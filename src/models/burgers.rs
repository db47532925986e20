//! Pseudo-spectral 1D viscous Burgers equation
//!
//! Solves the right-hand side of
//!
//! ```text
//! u_t = -u·u_x + ν·u_xx
//! ```
//!
//! on a periodic domain of length L, discretized on N equispaced points.
//! Spatial derivatives are computed in frequency space: forward transform,
//! multiply by the wavenumber vector, inverse transform. The quadratic
//! nonlinearity injects aliasing energy into the highest modes, so the
//! middle third of frequency indices is zeroed before the product is formed
//! (the 2/3 dealiasing rule).
//!
//! # Algorithm (one `rhs` evaluation)
//!
//! 1. Forward-transform the state: `xk = fft(x)`
//! 2. Dealias: zero `xk[N/3 .. 2N/3]`, inverse-transform to a dealiased
//!    physical state x′
//! 3. Nonlinear advection: `i·k · fft(-0.5·x′²)`
//! 4. Linear viscosity: `-ν·k² · xk` (dealiased spectrum)
//! 5. Sum both frequency-domain terms, inverse-transform, keep the real part
//!
//! Cost is O(N log N) with four transforms per call. The engine holds
//! no mutable state; every call allocates fresh buffers, so evaluations are
//! deterministic and safe to run from multiple threads.
//!
//! # Example
//!
//! ```rust
//! use burgers_rs::models::ViscousBurgers;
//! use burgers_rs::physics::DynamicalSystem;
//! use nalgebra::DVector;
//!
//! let n = 64;
//! let grid = DVector::from_fn(n, |j, _| -15.0 + 30.0 * (j as f64) / (n as f64));
//! let engine = ViscousBurgers::new(n, grid, 0.01, 0.1, 30.0).unwrap();
//!
//! let u0 = engine.grid().map(|x| (-(x + 2.0) * (x + 2.0)).exp());
//! let forcing = DVector::zeros(1);
//! let dxdt = engine.rhs(0.0, &u0, &forcing).unwrap();
//! assert_eq!(dxdt.len(), n);
//! ```

use crate::error::SimulationError;
use crate::physics::{check_state_len, DynamicalSystem};
use nalgebra::DVector;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

/// Spectral engine for the 1D viscous Burgers equation on a periodic grid
///
/// All parameters (grid size, wavenumbers, viscosity, time step, domain
/// length) are fixed at construction and never mutated afterwards. The FFT
/// plans are built once and shared by every `rhs` call.
#[derive(Clone)]
pub struct ViscousBurgers {
    /// Number of grid points N
    n: usize,
    /// Grid coordinates, length N (consumed by external visualization
    /// collaborators; the spectral core never reads it)
    grid: DVector<f64>,
    /// Time step used by the data collectors \[s\]
    dt: f64,
    /// Kinematic viscosity ν
    nu: f64,
    /// Periodic domain length L
    length: f64,
    /// Wavenumbers k\[j\] = m_j · 2π/L in the FFT's native index layout
    wavenumbers: DVector<f64>,
    fft: Arc<dyn Fft<f64>>,
    ifft: Arc<dyn Fft<f64>>,
}

impl ViscousBurgers {
    /// Default kinematic viscosity ν
    pub const DEFAULT_VISCOSITY: f64 = 0.1;

    /// Default periodic domain length L = 2π
    pub const DEFAULT_LENGTH: f64 = 2.0 * PI;

    /// Create a new engine
    ///
    /// # Arguments
    ///
    /// * `n` - Number of grid points (N > 0)
    /// * `grid` - Grid coordinates, length N
    /// * `dt` - Time step used by the collectors (> 0)
    /// * `nu` - Kinematic viscosity ν
    /// * `length` - Periodic domain length L (> 0)
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidParameter`] for a non-positive `n`, `dt` or
    /// `length` and for a non-finite `nu`;
    /// [`SimulationError::ShapeMismatch`] when `grid` does not have length N.
    pub fn new(
        n: usize,
        grid: DVector<f64>,
        dt: f64,
        nu: f64,
        length: f64,
    ) -> Result<Self, SimulationError> {
        if n == 0 {
            return Err(SimulationError::invalid("n", "grid size must be positive"));
        }
        check_state_len(&grid, n)?;
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimulationError::invalid(
                "dt",
                format!("time step must be positive and finite, got {}", dt),
            ));
        }
        if !nu.is_finite() {
            return Err(SimulationError::invalid(
                "nu",
                format!("viscosity must be finite, got {}", nu),
            ));
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(SimulationError::invalid(
                "length",
                format!("domain length must be positive and finite, got {}", length),
            ));
        }

        // k[j] = m_j * dk with m_j the signed mode number in the FFT's
        // native layout: 0, 1, ..., ceil(N/2)-1, then the negative modes
        // -floor(N/2), ..., -1. Verified against the library by test, not
        // assumed.
        let dk = 2.0 * PI / length;
        let half = n.div_ceil(2);
        let wavenumbers = DVector::from_fn(n, |j, _| {
            let m = if j < half {
                j as f64
            } else {
                j as f64 - n as f64
            };
            m * dk
        });

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        let ifft = planner.plan_fft_inverse(n);

        Ok(Self {
            n,
            grid,
            dt,
            nu,
            length,
            wavenumbers,
            fft,
            ifft,
        })
    }

    /// Create an engine with the default viscosity (0.1) and domain
    /// length (2π)
    pub fn with_defaults(n: usize, grid: DVector<f64>, dt: f64) -> Result<Self, SimulationError> {
        Self::new(n, grid, dt, Self::DEFAULT_VISCOSITY, Self::DEFAULT_LENGTH)
    }

    /// Grid coordinates, length N
    pub fn grid(&self) -> &DVector<f64> {
        &self.grid
    }

    /// Time step used by the data collectors
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Kinematic viscosity ν
    pub fn viscosity(&self) -> f64 {
        self.nu
    }

    /// Periodic domain length L
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Wavenumber vector in the FFT's native index layout
    pub fn wavenumbers(&self) -> &DVector<f64> {
        &self.wavenumbers
    }

    /// Zero the middle third of frequency indices, `[N/3, 2N/3)`.
    ///
    /// This is the 2/3 dealiasing rule for a quadratic nonlinearity: the
    /// retained lowest and highest thirds of the index range are the modes
    /// whose products cannot alias back onto themselves. Applying the mask
    /// twice zeroes exactly the same index set as applying it once.
    ///
    /// # Errors
    ///
    /// [`SimulationError::ShapeMismatch`] when `spectrum` does not have the
    /// grid size N.
    pub fn dealias(&self, spectrum: &mut [Complex<f64>]) -> Result<(), SimulationError> {
        if spectrum.len() != self.n {
            return Err(SimulationError::ShapeMismatch {
                expected: self.n,
                actual: spectrum.len(),
            });
        }
        for mode in &mut spectrum[self.n / 3..2 * self.n / 3] {
            *mode = Complex::new(0.0, 0.0);
        }
        Ok(())
    }
}

impl DynamicalSystem for ViscousBurgers {
    fn state_len(&self) -> usize {
        self.n
    }

    fn rhs(
        &self,
        t: f64,
        x: &DVector<f64>,
        _u: &DVector<f64>,
    ) -> Result<DVector<f64>, SimulationError> {
        check_state_len(x, self.n)?;

        // rustfft transforms are unnormalized in both directions; each
        // inverse is scaled by 1/N.
        let scale = 1.0 / self.n as f64;

        // ====== Forward transform and dealiasing ======

        let mut xk: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
        self.fft.process(&mut xk);
        self.dealias(&mut xk)?;

        // Dealiased physical state x′ (kept complex; imaginary parts are
        // transform round-off and cancel in the quadratic product)
        let mut field = xk.clone();
        self.ifft.process(&mut field);

        // ====== Nonlinear advection ======

        // fft(-0.5 * x′²), then spectral first derivative i·k
        let mut nonlinear: Vec<Complex<f64>> = field
            .iter()
            .map(|&v| {
                let v = v * scale;
                v * v * -0.5
            })
            .collect();
        self.fft.process(&mut nonlinear);

        // ====== Sum with linear viscosity and return to physical space ======

        let mut total: Vec<Complex<f64>> = (0..self.n)
            .map(|j| {
                let k = self.wavenumbers[j];
                Complex::new(0.0, k) * nonlinear[j] - xk[j] * (self.nu * k * k)
            })
            .collect();
        self.ifft.process(&mut total);

        let dxdt = DVector::from_iterator(self.n, total.iter().map(|v| v.re * scale));

        if dxdt.iter().any(|v| !v.is_finite()) {
            return Err(SimulationError::NumericalInstability {
                context: "spectral right-hand side",
                time: t,
            });
        }

        Ok(dxdt)
    }

    fn name(&self) -> &str {
        "1D viscous Burgers (pseudo-spectral)"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "u_t = -u*u_x + nu*u_xx on a periodic domain, Fourier \
             differentiation with 2/3-rule dealiasing",
        )
    }
}

impl fmt::Debug for ViscousBurgers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViscousBurgers")
            .field("n", &self.n)
            .field("dt", &self.dt)
            .field("nu", &self.nu)
            .field("length", &self.length)
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
