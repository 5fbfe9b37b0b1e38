//! Protocol dispatch
//!
//! Routes a (waveform, metadata) pair to the extractor implied by the
//! metadata's `type` tag and returns whatever that family produces: a
//! constellation for OFDM / Bluetooth / WiFi NonHT, a synthesized resource
//! grid for 5G NR, or nothing at all for types this crate does not know how
//! to visualize.
//!
//! "Nothing" is a first-class outcome, not an error: a WiFi capture whose
//! sub-field is not `NonHT`, or a `type` outside the four known families,
//! yields `Ok(None)` and the caller decides whether to warn.
//!
//! ## Example
//!
//! ```rust
//! use iqdemap_core::extract::{extract_symbols, Extraction};
//! use iqdemap_core::metadata::SignalMetadata;
//! use iqdemap_core::resource_grid::Xorshift64;
//! use num_complex::Complex64;
//!
//! let meta = SignalMetadata::from_json(
//!     r#"{"type": "Bluetooth", "oversamplingFactor": 4}"#,
//! ).unwrap();
//! let waveform: Vec<Complex64> = (1..=16)
//!     .map(|i| Complex64::new(i as f64, 0.0))
//!     .collect();
//!
//! let mut rng = Xorshift64::new(1);
//! match extract_symbols(&waveform, &meta, &mut rng).unwrap() {
//!     Some(Extraction::Constellation(symbols)) => assert_eq!(symbols.len(), 4),
//!     other => panic!("expected a constellation, got {other:?}"),
//! }
//! ```

use crate::decimate::extract_decimated;
use crate::dsss::extract_dsss_symbols;
use crate::metadata::SignalMetadata;
use crate::ofdm_demap::{OfdmDemapConfig, OfdmDemapper};
use crate::resource_grid::{synthesize_grid, ResourceGrid, Xorshift64};
use crate::types::{ExtractResult, IQSample, SymbolSequence};

/// What an extractor produced for a given protocol family.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Recovered constellation points.
    Constellation(SymbolSequence),
    /// Synthesized resource-grid occupancy (5G NR).
    Grid(ResourceGrid),
}

/// The WiFi sub-discriminant this crate can extract.
const WIFI_NON_HT: &str = "NonHT";

/// Extract the symbol sequence or resource grid implied by the metadata.
///
/// Branches exhaustively on the protocol family. The `rng` argument only
/// feeds the 5G NR branch; every other family is fully deterministic.
///
/// The 5G NR branch ignores `waveform` entirely — the grid is synthesized
/// from the allocation metadata alone.
pub fn extract_symbols(
    waveform: &[IQSample],
    metadata: &SignalMetadata,
    rng: &mut Xorshift64,
) -> ExtractResult<Option<Extraction>> {
    metadata.validate()?;

    match metadata {
        SignalMetadata::Ofdm(p) => {
            let mut demapper = OfdmDemapper::new(OfdmDemapConfig {
                fft_size: p.fft_length,
                cp_length: p.cyclic_prefix_length,
                num_symbols: p.num_symbols,
                dc_null: p.dc_null,
                guard_bands: p.guard_bands,
            });
            Ok(Some(Extraction::Constellation(demapper.demap(waveform))))
        }
        SignalMetadata::Bluetooth(p) => {
            let symbols = extract_decimated(waveform, p.oversampling_factor)?;
            Ok(Some(Extraction::Constellation(symbols)))
        }
        SignalMetadata::WiFi(p) => {
            if p.wifi != WIFI_NON_HT {
                return Ok(None);
            }
            let symbols = extract_dsss_symbols(waveform, &p.data_rate)?;
            Ok(Some(Extraction::Constellation(symbols)))
        }
        SignalMetadata::NrGrid(p) => Ok(Some(Extraction::Grid(synthesize_grid(p, rng)?))),
        SignalMetadata::Unknown => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExtractError;
    use num_complex::Complex64;

    fn rng() -> Xorshift64 {
        Xorshift64::new(1234)
    }

    #[test]
    fn test_dispatch_ofdm() {
        let meta = SignalMetadata::from_json(
            r#"{"type": "OFDM", "FFTLength": 64, "cyclicPrefixLength": 16, "numSymbols": 2}"#,
        )
        .unwrap();
        // All-ones waveform: each FFT window concentrates into bin 0, which
        // sits inside the low guard band and is stripped.
        let waveform = vec![Complex64::new(1.0, 0.0); 160];

        match extract_symbols(&waveform, &meta, &mut rng()).unwrap() {
            Some(Extraction::Constellation(symbols)) => assert!(symbols.is_empty()),
            other => panic!("expected constellation, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_bluetooth() {
        let meta = SignalMetadata::from_json(
            r#"{"type": "Bluetooth", "oversamplingFactor": 8}"#,
        )
        .unwrap();
        let waveform: Vec<Complex64> =
            (0..80).map(|i| Complex64::new(1.0 + i as f64, 0.0)).collect();

        match extract_symbols(&waveform, &meta, &mut rng()).unwrap() {
            Some(Extraction::Constellation(symbols)) => {
                assert_eq!(symbols.len(), 10);
                assert!((symbols.last().unwrap().re - 1.0).abs() < 1e-12, "peak-normalized");
            }
            other => panic!("expected constellation, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_wifi_nonht() {
        let meta = SignalMetadata::from_json(
            r#"{"type": "WiFi", "WiFi": "NonHT", "dataRate": "1Mbps"}"#,
        )
        .unwrap();
        let waveform = vec![Complex64::new(1.0, 0.0); 110];

        match extract_symbols(&waveform, &meta, &mut rng()).unwrap() {
            Some(Extraction::Constellation(symbols)) => assert_eq!(symbols.len(), 10),
            other => panic!("expected constellation, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_wifi_other_variant_is_none() {
        let meta = SignalMetadata::from_json(
            r#"{"type": "WiFi", "WiFi": "HT", "dataRate": "1Mbps"}"#,
        )
        .unwrap();
        let waveform = vec![Complex64::new(1.0, 0.0); 110];
        assert_eq!(extract_symbols(&waveform, &meta, &mut rng()).unwrap(), None);
    }

    #[test]
    fn test_dispatch_wifi_bad_rate_propagates() {
        let meta = SignalMetadata::from_json(
            r#"{"type": "WiFi", "WiFi": "NonHT", "dataRate": "3Mbps"}"#,
        )
        .unwrap();
        let err = extract_symbols(&[], &meta, &mut rng()).unwrap_err();
        assert!(matches!(err, ExtractError::UnknownDataRate(rate) if rate == "3Mbps"));
    }

    #[test]
    fn test_dispatch_nr_ignores_waveform() {
        let meta = SignalMetadata::from_json(
            r#"{"type": "5G - New Radio", "nSizeGrid": 2,
                "symAllocaition": [0, 3], "PRBSet": [0]}"#,
        )
        .unwrap();

        // Same seed, wildly different waveforms: identical grids.
        let empty = extract_symbols(&[], &meta, &mut Xorshift64::new(5)).unwrap();
        let loaded = extract_symbols(
            &vec![Complex64::new(3.0, -1.0); 4096],
            &meta,
            &mut Xorshift64::new(5),
        )
        .unwrap();
        assert_eq!(empty, loaded, "the NR branch must not consult the waveform");

        match empty {
            Some(Extraction::Grid(grid)) => {
                assert_eq!(grid.num_subcarriers(), 24);
                assert_eq!(grid.num_symbols(), 3);
            }
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_unknown_is_none() {
        let meta = SignalMetadata::from_json(r#"{"type": "LoRa"}"#).unwrap();
        let waveform = vec![Complex64::new(1.0, 0.0); 100];
        assert_eq!(extract_symbols(&waveform, &meta, &mut rng()).unwrap(), None);
    }

    #[test]
    fn test_validation_runs_before_dispatch() {
        let meta = SignalMetadata::from_json(
            r#"{"type": "Bluetooth", "oversamplingFactor": 0}"#,
        )
        .unwrap();
        let err = extract_symbols(&[Complex64::new(1.0, 0.0)], &meta, &mut rng()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidParameter { field: "oversamplingFactor", .. }
        ));
    }
}
