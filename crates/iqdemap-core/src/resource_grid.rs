//! 5G NR resource-grid occupancy synthesis
//!
//! A 5G NR carrier is organized as a grid of subcarriers × OFDM symbols,
//! with frequency allocated in physical resource blocks (PRBs) of 12
//! contiguous subcarriers. The dataset's NR captures do not expose
//! per-resource-element values, so this module builds a *simulated occupancy
//! view* from the metadata alone: allocated PRBs are filled with independent
//! uniform draws in [-30, 0] dB, unallocated rows stay at exactly 0.
//!
//! The fill is stochastic by design, and the random source is an explicit
//! argument rather than hidden global state: the same [`Xorshift64`] seed
//! always reproduces the same grid, and concurrent syntheses never contend.
//!
//! ## Example
//!
//! ```rust
//! use iqdemap_core::metadata::NrGridParams;
//! use iqdemap_core::resource_grid::{synthesize_grid, Xorshift64};
//!
//! let params = NrGridParams {
//!     n_size_grid: 4,
//!     sym_allocation: (0, 14),
//!     prb_set: vec![1, 2],
//! };
//! let mut rng = Xorshift64::new(42);
//! let grid = synthesize_grid(&params, &mut rng).unwrap();
//! assert_eq!(grid.num_subcarriers(), 48);
//! assert_eq!(grid.num_symbols(), 14);
//! assert_eq!(grid.get(0, 0), 0.0); // PRB 0 not allocated
//! ```

use crate::metadata::NrGridParams;
use crate::types::ExtractResult;

/// Subcarriers per physical resource block.
pub const SUBCARRIERS_PER_PRB: usize = 12;

/// Power floor of the simulated fill, in dB.
pub const FILL_FLOOR_DB: f64 = -30.0;

// ---------------------------------------------------------------------------
// Seedable PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic xorshift64 PRNG.
///
/// Injected into [`synthesize_grid`] so synthesized grids are reproducible
/// under a fixed seed.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Seed the generator. A zero seed is remapped to 1 (xorshift64 has a
    /// fixed point at zero).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Return a value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / ((1u64 << 53) as f64)
    }

    /// Return a value uniformly distributed in [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Subcarrier × OFDM-symbol matrix of simulated per-resource-element power
/// in dB. Stored row-major by subcarrier; zero everywhere no PRB is
/// allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceGrid {
    num_subcarriers: usize,
    num_symbols: usize,
    power_db: Vec<f64>,
}

impl ResourceGrid {
    /// Create an all-zero grid.
    pub fn new(num_subcarriers: usize, num_symbols: usize) -> Self {
        Self {
            num_subcarriers,
            num_symbols,
            power_db: vec![0.0; num_subcarriers * num_symbols],
        }
    }

    /// Number of subcarrier rows.
    pub fn num_subcarriers(&self) -> usize {
        self.num_subcarriers
    }

    /// Number of OFDM-symbol columns.
    pub fn num_symbols(&self) -> usize {
        self.num_symbols
    }

    /// Power at (subcarrier, symbol) in dB.
    pub fn get(&self, subcarrier: usize, symbol: usize) -> f64 {
        self.power_db[subcarrier * self.num_symbols + symbol]
    }

    /// Set the power at (subcarrier, symbol) in dB.
    pub fn set(&mut self, subcarrier: usize, symbol: usize, power_db: f64) {
        self.power_db[subcarrier * self.num_symbols + symbol] = power_db;
    }

    /// One subcarrier's values across all symbols.
    pub fn row(&self, subcarrier: usize) -> &[f64] {
        let start = subcarrier * self.num_symbols;
        &self.power_db[start..start + self.num_symbols]
    }
}

/// Build the simulated occupancy grid implied by an NR allocation.
///
/// Grid shape is `(nSizeGrid * 12, numSymbols)`. Each PRB in the set fills
/// its 12 subcarrier rows across every symbol with independent uniform
/// [-30, 0] dB draws from `rng`; all other rows remain exactly 0.
///
/// This is a structural visualization of *where* resources sit, not a decode
/// of resource-element values — no waveform is consulted.
pub fn synthesize_grid(
    params: &NrGridParams,
    rng: &mut Xorshift64,
) -> ExtractResult<ResourceGrid> {
    params.validate()?;

    let fft_size = params.n_size_grid * SUBCARRIERS_PER_PRB;
    let num_symbols = params.num_symbols();
    let mut grid = ResourceGrid::new(fft_size, num_symbols);

    for &prb in &params.prb_set {
        let start = prb * SUBCARRIERS_PER_PRB;
        for subcarrier in start..start + SUBCARRIERS_PER_PRB {
            for symbol in 0..num_symbols {
                grid.set(subcarrier, symbol, rng.uniform(FILL_FLOOR_DB, 0.0));
            }
        }
    }

    Ok(grid)
}
