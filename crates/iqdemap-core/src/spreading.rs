//! Chip-code despreading
//!
//! Direct Sequence Spread Spectrum (DSSS) multiplies each data symbol by a
//! high-rate ±1 chip sequence. Despreading reverses this: the received chips
//! are correlated against the known code, one code-length window at a time,
//! and the correlation value is the recovered symbol.
//!
//! ```text
//! waveform: [ w0 .. w10 ][ w11 .. w21 ] ... (11 chips per window)
//!                │ dot with chip code
//!                ▼
//! symbols:  [ s0 ][ s1 ] ...                (one symbol per window)
//! ```
//!
//! Legacy 802.11 DSSS uses the 11-chip Barker code at both 1 and 2 Mbps; the
//! rate only changes the symbol constellation, never the spreading code.
//! Barker codes have the lowest possible aperiodic autocorrelation sidelobes
//! (|R(k)| ≤ 1 for k ≠ 0), which is what makes the correlation peak stand
//! out.

use crate::types::{IQSample, SymbolSequence};

/// The 11-chip Barker code used by 802.11 DSSS at 1 and 2 Mbps.
pub const BARKER_11: [i8; 11] = [1, 1, 1, -1, -1, -1, 1, -1, -1, 1, -1];

/// Despread a chip waveform against a known ±1 spreading code.
///
/// The waveform is split into `floor(len / code_len)` consecutive windows of
/// `code_len` chips; trailing chips beyond the last full window are dropped.
/// Each recovered symbol is the inner product of its window with the code.
pub fn despread(waveform: &[IQSample], code: &[i8]) -> SymbolSequence {
    assert!(!code.is_empty(), "spreading code must not be empty");
    let code_len = code.len();
    let num_symbols = waveform.len() / code_len;

    (0..num_symbols)
        .map(|i| {
            let window = &waveform[i * code_len..(i + 1) * code_len];
            window
                .iter()
                .zip(code.iter())
                .fold(IQSample::new(0.0, 0.0), |acc, (&sample, &chip)| {
                    acc + sample * chip as f64
                })
        })
        .collect()
}

/// Aperiodic autocorrelation of a ±1 code.
///
/// Index 0 is the zero-lag (main lobe) value, equal to the code length;
/// indices 1..N-1 are the sidelobes for increasing lag.
pub fn autocorrelation(code: &[i8]) -> Vec<i64> {
    let n = code.len();
    (0..n)
        .map(|lag| {
            (0..n - lag)
                .map(|i| code[i] as i64 * code[i + lag] as i64)
                .sum()
        })
        .collect()
}
