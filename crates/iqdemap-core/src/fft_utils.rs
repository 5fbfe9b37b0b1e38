//! FFT engine for OFDM symbol windows
//!
//! Thin wrapper around `rustfft` that owns planned forward/inverse transforms
//! and a reusable scratch buffer, so demapping a long waveform does not
//! re-plan per symbol.
//!
//! Conventions: the forward transform is unnormalized and the inverse is
//! scaled by 1/N. The subcarrier recovered from bin k of an unnormalized
//! forward FFT therefore equals the value placed in bin k before a 1/N
//! inverse — the framing the OFDM demapper relies on.

use rustfft::{num_complex::Complex64, Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

use crate::types::IQSample;

/// Planned FFT pair of a fixed size.
pub struct FftProcessor {
    size: usize,
    fft_forward: Arc<dyn Fft<f64>>,
    fft_inverse: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex64>,
}

impl fmt::Debug for FftProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftProcessor")
            .field("size", &self.size)
            .finish()
    }
}

impl FftProcessor {
    /// Plan forward and inverse transforms of the given size.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft_forward = planner.plan_fft_forward(size);
        let fft_inverse = planner.plan_fft_inverse(size);
        let scratch_len = fft_forward
            .get_inplace_scratch_len()
            .max(fft_inverse.get_inplace_scratch_len());
        let scratch = vec![Complex64::new(0.0, 0.0); scratch_len];

        Self {
            size,
            fft_forward,
            fft_inverse,
            scratch,
        }
    }

    /// The transform size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Forward transform in-place. `buffer` must be exactly `size` long.
    pub fn fft_inplace(&mut self, buffer: &mut [Complex64]) {
        assert_eq!(buffer.len(), self.size, "FFT buffer must match planned size");
        self.fft_forward
            .process_with_scratch(buffer, &mut self.scratch);
    }

    /// Forward transform of a window, zero-padded to `size` if shorter.
    pub fn fft(&mut self, input: &[IQSample]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input.to_vec();
        buffer.resize(self.size, Complex64::new(0.0, 0.0));
        self.fft_inplace(&mut buffer);
        buffer
    }

    /// Inverse transform in-place, scaled by 1/N.
    pub fn ifft_inplace(&mut self, buffer: &mut [Complex64]) {
        assert_eq!(buffer.len(), self.size, "FFT buffer must match planned size");
        self.fft_inverse
            .process_with_scratch(buffer, &mut self.scratch);

        let scale = 1.0 / self.size as f64;
        for sample in buffer.iter_mut() {
            *sample *= scale;
        }
    }

    /// Inverse transform of a spectrum, zero-padded to `size` if shorter.
    pub fn ifft(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = input.to_vec();
        buffer.resize(self.size, Complex64::new(0.0, 0.0));
        self.ifft_inplace(&mut buffer);
        buffer
    }
}
