//! Signal Metadata Model
//!
//! Each waveform in a dataset is described by a JSON metadata mapping whose
//! `type` field selects the protocol family. This module models that mapping
//! as a closed tagged enum so the dispatcher can match exhaustively; any
//! `type` value outside the four known families parses into
//! [`SignalMetadata::Unknown`] and later yields no extraction rather than an
//! error.
//!
//! Field names mirror the dataset's JSON keys exactly (including the
//! `symAllocaition` spelling the dataset uses), so existing metadata files
//! deserialize without translation. Unknown keys (sample rate, bandwidth,
//! generator settings) are ignored.
//!
//! ## Example
//!
//! ```rust
//! use iqdemap_core::metadata::SignalMetadata;
//!
//! let meta = SignalMetadata::from_json(
//!     r#"{"type": "OFDM", "FFTLength": 64, "cyclicPrefixLength": 16, "numSymbols": 10}"#,
//! ).unwrap();
//!
//! match meta {
//!     SignalMetadata::Ofdm(params) => {
//!         assert_eq!(params.fft_length, 64);
//!         assert!(params.dc_null);               // default
//!         assert_eq!(params.guard_bands, (6, 5)); // default
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{ExtractError, ExtractResult};

/// Protocol-tagged parameter bundle describing how to interpret a waveform.
///
/// Immutable once parsed; extractors only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SignalMetadata {
    /// Generic OFDM framing (FFT symbols with cyclic prefix).
    #[serde(rename = "OFDM")]
    Ofdm(OfdmParams),
    /// Constant-envelope Bluetooth waveform, oversampled.
    #[serde(rename = "Bluetooth")]
    Bluetooth(BluetoothParams),
    /// Legacy WiFi. Only the `NonHT` (DSSS/CCK) variant is extractable.
    #[serde(rename = "WiFi")]
    WiFi(WifiParams),
    /// 5G NR downlink; described structurally by its resource allocation.
    #[serde(rename = "5G - New Radio")]
    NrGrid(NrGridParams),
    /// Any other `type` value. Accepted, but produces no extraction.
    #[serde(other)]
    Unknown,
}

/// OFDM framing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfdmParams {
    /// FFT size N (total subcarriers per symbol).
    #[serde(rename = "FFTLength")]
    pub fft_length: usize,
    /// Cyclic prefix length in samples.
    #[serde(rename = "cyclicPrefixLength")]
    pub cyclic_prefix_length: usize,
    /// Number of OFDM symbols carried by the waveform.
    #[serde(rename = "numSymbols")]
    pub num_symbols: usize,
    /// Whether the DC subcarrier (bin N/2) is nulled. Defaults to true.
    #[serde(rename = "DCnull", default = "default_dc_null")]
    pub dc_null: bool,
    /// Guard-band widths (low edge, high edge) in subcarriers. Defaults to (6, 5).
    #[serde(rename = "guardBands", default = "default_guard_bands")]
    pub guard_bands: (usize, usize),
}

fn default_dc_null() -> bool {
    true
}

fn default_guard_bands() -> (usize, usize) {
    (6, 5)
}

/// Bluetooth extraction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BluetoothParams {
    /// Samples per symbol in the oversampled waveform.
    #[serde(rename = "oversamplingFactor")]
    pub oversampling_factor: usize,
}

/// Legacy WiFi parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiParams {
    /// WiFi sub-discriminant; extraction only applies to `"NonHT"`.
    #[serde(rename = "WiFi")]
    pub wifi: String,
    /// Data rate literal (`1Mbps`, `2Mbps`, `5.5Mbps`, `11Mbps`).
    ///
    /// Kept as a string so an unsupported rate fails at dispatch with an
    /// error naming the literal, rather than at parse time.
    #[serde(rename = "dataRate")]
    pub data_rate: String,
}

/// 5G NR resource allocation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NrGridParams {
    /// Carrier bandwidth in resource blocks (each PRB = 12 subcarriers).
    #[serde(rename = "nSizeGrid")]
    pub n_size_grid: usize,
    /// Symbol allocation pair; the second element is the symbol count.
    /// Field name matches the dataset metadata key, typo included.
    #[serde(rename = "symAllocaition")]
    pub sym_allocation: (usize, usize),
    /// Allocated resource-block indices, each in [0, nSizeGrid).
    #[serde(rename = "PRBSet")]
    pub prb_set: Vec<usize>,
}

impl NrGridParams {
    /// Number of OFDM symbols spanned by the allocation.
    pub fn num_symbols(&self) -> usize {
        self.sym_allocation.1
    }

    /// Check the allocation against the grid dimensions.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.n_size_grid == 0 {
            return Err(ExtractError::InvalidParameter {
                field: "nSizeGrid",
                reason: "must be > 0".to_string(),
            });
        }
        if self.num_symbols() == 0 {
            return Err(ExtractError::InvalidParameter {
                field: "symAllocaition",
                reason: "symbol count must be > 0".to_string(),
            });
        }
        if let Some(&prb) = self.prb_set.iter().find(|&&p| p >= self.n_size_grid) {
            return Err(ExtractError::InvalidParameter {
                field: "PRBSet",
                reason: format!("PRB index {prb} outside grid of {} blocks", self.n_size_grid),
            });
        }
        Ok(())
    }
}

impl SignalMetadata {
    /// Parse a metadata mapping from its JSON representation.
    pub fn from_json(json: &str) -> ExtractResult<Self> {
        serde_json::from_str(json).map_err(|e| ExtractError::MetadataParse(e.to_string()))
    }

    /// Check the per-family numeric constraints.
    ///
    /// Presence of required fields is already enforced by deserialization;
    /// this catches values that parse but cannot drive an extractor.
    pub fn validate(&self) -> ExtractResult<()> {
        match self {
            SignalMetadata::Ofdm(p) => p.validate(),
            SignalMetadata::Bluetooth(p) => {
                if p.oversampling_factor == 0 {
                    return Err(ExtractError::InvalidParameter {
                        field: "oversamplingFactor",
                        reason: "must be > 0".to_string(),
                    });
                }
                Ok(())
            }
            SignalMetadata::WiFi(_) => Ok(()),
            SignalMetadata::NrGrid(p) => p.validate(),
            SignalMetadata::Unknown => Ok(()),
        }
    }
}

impl OfdmParams {
    /// Check that the framing parameters describe a usable symbol layout.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.fft_length == 0 {
            return Err(ExtractError::InvalidParameter {
                field: "FFTLength",
                reason: "must be > 0".to_string(),
            });
        }
        if self.num_symbols == 0 {
            return Err(ExtractError::InvalidParameter {
                field: "numSymbols",
                reason: "must be > 0".to_string(),
            });
        }
        let (low, high) = self.guard_bands;
        if low + high >= self.fft_length {
            return Err(ExtractError::InvalidParameter {
                field: "guardBands",
                reason: format!(
                    "guards ({low}, {high}) leave no subcarriers in an FFT of {}",
                    self.fft_length
                ),
            });
        }
        if self.dc_null && (low > self.fft_length / 2 || high >= self.fft_length - self.fft_length / 2)
        {
            return Err(ExtractError::InvalidParameter {
                field: "guardBands",
                reason: format!(
                    "guards ({low}, {high}) overlap the DC bin of an FFT of {}",
                    self.fft_length
                ),
            });
        }
        Ok(())
    }
}
