//! OFDM Frame Demapper
//!
//! Recovers the constellation carried by an OFDM waveform with known framing:
//! each symbol occupies `cp_length + fft_size` samples, the cyclic prefix is
//! skipped, the FFT window is transformed, and only the data-bearing
//! subcarriers are kept.
//!
//! ```text
//! waveform: [ CP | FFT window ][ CP | FFT window ] ...
//!                     │ FFT
//!                     ▼
//! bins:     [ guard | data .. DC .. data | guard ]
//!                     │ strip guards + DC
//!                     ▼
//! symbols:  data subcarriers, symbol-major, subcarrier-minor
//! ```
//!
//! Trailing partial symbols are silently dropped: a waveform shorter than the
//! requested `num_symbols` frames simply yields fewer symbols. After
//! concatenation, bins whose real and imaginary parts are both within
//! [`NULL_EPSILON`] of zero are discarded — these are unallocated or
//! exactly-zero subcarriers, not data.
//!
//! ## Example
//!
//! ```rust
//! use iqdemap_core::ofdm_demap::{OfdmDemapConfig, OfdmDemapper};
//! use num_complex::Complex64;
//!
//! let config = OfdmDemapConfig::default(); // 64-FFT, 16 CP, guards (6, 5), DC null
//! let mut demapper = OfdmDemapper::new(config);
//!
//! let waveform = vec![Complex64::new(0.0, 0.0); 800];
//! let symbols = demapper.demap(&waveform);
//! assert!(symbols.is_empty()); // an all-zero waveform carries nothing
//! ```

use serde::{Deserialize, Serialize};

use crate::fft_utils::FftProcessor;
use crate::types::{IQSample, SymbolSequence};

/// Magnitude below which a bin's real and imaginary parts are both treated
/// as a numeric null (an unallocated subcarrier) and filtered out.
///
/// The exact value is part of the extraction contract; downstream consumers
/// depend on it bit-for-bit.
pub const NULL_EPSILON: f64 = 1e-7;

/// OFDM framing description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfdmDemapConfig {
    /// FFT size (total subcarriers per symbol).
    pub fft_size: usize,
    /// Cyclic prefix length in samples.
    pub cp_length: usize,
    /// Number of symbols to demap (fewer are produced if the waveform is short).
    pub num_symbols: usize,
    /// Whether the center (DC) subcarrier is nulled and must be dropped.
    pub dc_null: bool,
    /// Guard-band widths (low edge, high edge) in subcarriers.
    pub guard_bands: (usize, usize),
}

impl Default for OfdmDemapConfig {
    /// WiFi-like framing: 64-point FFT, 16-sample CP, guards (6, 5), DC null.
    fn default() -> Self {
        Self {
            fft_size: 64,
            cp_length: 16,
            num_symbols: 10,
            dc_null: true,
            guard_bands: (6, 5),
        }
    }
}

impl OfdmDemapConfig {
    /// Samples consumed per OFDM symbol (CP + FFT window).
    pub fn samples_per_symbol(&self) -> usize {
        self.fft_size + self.cp_length
    }

    /// Data subcarriers kept per symbol after guard and DC removal.
    pub fn carriers_per_symbol(&self) -> usize {
        let (low, high) = self.guard_bands;
        self.fft_size - low - high - usize::from(self.dc_null)
    }
}

/// Demaps OFDM waveforms into constellation symbols.
#[derive(Debug)]
pub struct OfdmDemapper {
    config: OfdmDemapConfig,
    fft: FftProcessor,
}

impl OfdmDemapper {
    /// Create a demapper for the given framing.
    pub fn new(config: OfdmDemapConfig) -> Self {
        let (low, high) = config.guard_bands;
        assert!(config.fft_size > 0, "FFT size must be > 0");
        assert!(
            low + high < config.fft_size,
            "guard bands ({low}, {high}) leave no subcarriers in an FFT of {}",
            config.fft_size
        );
        if config.dc_null {
            let n = config.fft_size;
            assert!(
                low <= n / 2 && high < n - n / 2,
                "guard bands ({low}, {high}) overlap the DC bin of an FFT of {n}"
            );
        }

        let fft = FftProcessor::new(config.fft_size);
        Self { config, fft }
    }

    /// The framing this demapper was built for.
    pub fn config(&self) -> &OfdmDemapConfig {
        &self.config
    }

    /// Demap up to `num_symbols` OFDM symbols from the waveform.
    ///
    /// Deterministic: repeated calls on the same waveform yield bit-identical
    /// output.
    pub fn demap(&mut self, waveform: &[IQSample]) -> SymbolSequence {
        let n = self.config.fft_size;
        let cp = self.config.cp_length;
        let (low_guard, high_guard) = self.config.guard_bands;

        let mut symbols = Vec::with_capacity(self.config.num_symbols * self.config.carriers_per_symbol());

        for i in 0..self.config.num_symbols {
            let start = i * (n + cp) + cp;
            let end = start + n;
            if end > waveform.len() {
                break;
            }

            let mut bins = waveform[start..end].to_vec();
            self.fft.fft_inplace(&mut bins);

            if self.config.dc_null {
                symbols.extend_from_slice(&bins[low_guard..n / 2]);
                symbols.extend_from_slice(&bins[n / 2 + 1..n - high_guard]);
            } else {
                symbols.extend_from_slice(&bins[low_guard..n - high_guard]);
            }
        }

        symbols.retain(|s| s.re.abs() > NULL_EPSILON || s.im.abs() > NULL_EPSILON);
        symbols
    }
}
