//! # IQ Demap Core
//!
//! Recovers modulation symbols (constellation points) or a resource-grid
//! view from complex baseband waveforms, driven entirely by the protocol
//! metadata that ships alongside each capture in a signal dataset.
//!
//! ## Signal Flow
//!
//! ```text
//!                        ┌──────────────────┐
//!  waveform + metadata ─▶│    Dispatcher    │
//!                        └────────┬─────────┘
//!          ┌──────────────┬───────┴───────┬────────────────┐
//!          ▼              ▼               ▼                ▼
//!   ┌────────────┐ ┌────────────┐ ┌─────────────┐ ┌───────────────┐
//!   │    OFDM    │ │ Decimation │ │  Barker-11  │ │ NR Resource   │
//!   │  Demapper  │ │ Extractor  │ │ Despreader  │ │ Grid Synth    │
//!   └─────┬──────┘ └─────┬──────┘ └──────┬──────┘ └───────┬───────┘
//!         └──────────────┴───────┬───────┘                │
//!                                ▼                        ▼
//!                     constellation symbols         resource grid
//! ```
//!
//! Everything is a pure, synchronous computation over in-memory slices:
//! no I/O, no hidden state, no global randomness. The one stochastic
//! component (the NR grid fill) takes an explicit seedable generator.
//! Dataset file handling, plotting, and model training live in the
//! surrounding tooling, not here.
//!
//! ## Example
//!
//! ```rust
//! use iqdemap_core::{extract_symbols, Extraction, SignalMetadata, Xorshift64};
//! use num_complex::Complex64;
//!
//! // Metadata as it appears in the dataset's per-modulation JSON files.
//! let meta = SignalMetadata::from_json(
//!     r#"{"type": "WiFi", "WiFi": "NonHT", "dataRate": "11Mbps"}"#,
//! ).unwrap();
//!
//! // 110 chips of CCK yield 10 symbols (one per 11-chip block).
//! let waveform: Vec<Complex64> = (0..110)
//!     .map(|i| Complex64::new((i as f64 * 0.5).cos(), (i as f64 * 0.5).sin()))
//!     .collect();
//!
//! let mut rng = Xorshift64::new(1);
//! match extract_symbols(&waveform, &meta, &mut rng).unwrap() {
//!     Some(Extraction::Constellation(symbols)) => assert_eq!(symbols.len(), 10),
//!     other => panic!("expected a constellation, got {other:?}"),
//! }
//! ```

pub mod decimate;
pub mod dsss;
pub mod extract;
pub mod fft_utils;
pub mod metadata;
pub mod ofdm_demap;
pub mod resource_grid;
pub mod spreading;
pub mod types;

pub use extract::{extract_symbols, Extraction};
pub use metadata::SignalMetadata;
pub use ofdm_demap::{OfdmDemapConfig, OfdmDemapper, NULL_EPSILON};
pub use resource_grid::{synthesize_grid, ResourceGrid, Xorshift64};
pub use types::{ExtractError, ExtractResult, IQBuffer, IQSample, SymbolSequence};
