//! Symbol extraction by decimation
//!
//! Constant-envelope schemes (GFSK Bluetooth among them) carry one symbol
//! per `samples_per_symbol` samples, so the constellation can be read out by
//! keeping every n-th sample — no matched filtering, no interpolation. The
//! picks are then peak-normalized so the constellation sits on the unit
//! circle regardless of capture gain.
//!
//! The raw (unnormalized) pick is exposed separately because CCK extraction
//! uses it as-is: CCK symbols occupy 11 chips each but are not despread and
//! not rescaled.

use crate::types::{ExtractError, ExtractResult, IQSample, SymbolSequence};

/// Keep every `step`-th sample starting at index 0.
pub fn decimate(waveform: &[IQSample], step: usize) -> SymbolSequence {
    assert!(step > 0, "decimation step must be > 0");
    waveform.iter().step_by(step).copied().collect()
}

/// Extract one symbol per `samples_per_symbol` samples and peak-normalize.
///
/// Every value is divided by the maximum modulus of the picked sequence.
/// An empty or all-zero pick sequence has no defined normalization and is
/// reported as [`ExtractError::DegenerateInput`] instead of producing
/// NaN/Inf values.
pub fn extract_decimated(
    waveform: &[IQSample],
    samples_per_symbol: usize,
) -> ExtractResult<SymbolSequence> {
    let mut symbols = decimate(waveform, samples_per_symbol);

    if symbols.is_empty() {
        return Err(ExtractError::DegenerateInput(
            "no samples to decimate".to_string(),
        ));
    }

    let peak = symbols.iter().map(|s| s.norm()).fold(0.0f64, f64::max);
    if peak == 0.0 {
        return Err(ExtractError::DegenerateInput(
            "all-zero symbol sequence cannot be normalized".to_string(),
        ));
    }

    for s in symbols.iter_mut() {
        *s /= peak;
    }
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real_waveform(values: &[f64]) -> Vec<IQSample> {
        values.iter().map(|&v| IQSample::new(v, 0.0)).collect()
    }

    #[test]
    fn test_known_picks_and_normalization() {
        // [1,2,3,4,5,6] with 2 samples/symbol picks [1,3,5], peak 5.
        let waveform = real_waveform(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let symbols = extract_decimated(&waveform, 2).unwrap();

        let expected = [0.2, 0.6, 1.0];
        assert_eq!(symbols.len(), expected.len());
        for (sym, &exp) in symbols.iter().zip(expected.iter()) {
            assert!(
                (sym.re - exp).abs() < 1e-12 && sym.im.abs() < 1e-12,
                "expected {exp}, got {sym}"
            );
        }
    }

    #[test]
    fn test_raw_decimate_count() {
        let waveform = vec![IQSample::new(1.0, 1.0); 110];
        assert_eq!(decimate(&waveform, 11).len(), 10);
    }

    #[test]
    fn test_raw_decimate_partial_tail() {
        // 23 samples at step 4 picks indices 0, 4, 8, 12, 16, 20.
        let waveform = vec![IQSample::new(1.0, 0.0); 23];
        assert_eq!(decimate(&waveform, 4).len(), 6);
    }

    #[test]
    fn test_peak_normalization_uses_modulus() {
        // Peak is the complex modulus, not the largest component.
        let waveform = vec![IQSample::new(3.0, 4.0), IQSample::new(1.0, 0.0)];
        let symbols = extract_decimated(&waveform, 1).unwrap();
        assert!((symbols[0].norm() - 1.0).abs() < 1e-12);
        assert!((symbols[1].re - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_waveform_is_degenerate() {
        let result = extract_decimated(&[], 4);
        assert!(matches!(result, Err(ExtractError::DegenerateInput(_))));
    }

    #[test]
    fn test_all_zero_waveform_is_degenerate() {
        let waveform = vec![IQSample::new(0.0, 0.0); 16];
        let result = extract_decimated(&waveform, 4);
        assert!(
            matches!(result, Err(ExtractError::DegenerateInput(_))),
            "all-zero input must fail instead of yielding NaN"
        );
    }
}
