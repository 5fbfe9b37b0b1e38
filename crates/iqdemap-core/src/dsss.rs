//! Rate-selected DSSS/CCK symbol extraction (802.11 NonHT)
//!
//! Legacy WiFi carries four data rates over the same 11 MHz chip stream, and
//! the rate decides how symbols come back out:
//!
//! | Rate     | Modulation | Recovery                         |
//! |----------|------------|----------------------------------|
//! | 1 Mbps   | DBPSK      | Barker-11 despread               |
//! | 2 Mbps   | DQPSK      | Barker-11 despread               |
//! | 5.5 Mbps | CCK-4      | pick every 11th chip, as-is      |
//! | 11 Mbps  | CCK-8      | pick every 11th chip, as-is      |
//!
//! CCK symbols are complementary-code words, not Barker-spread, so the two
//! high rates skip correlation entirely: one raw chip per 11-chip block
//! stands in for the symbol. Any other rate literal is rejected with an
//! error naming it.

use crate::decimate::decimate;
use crate::spreading::{despread, BARKER_11};
use crate::types::{ExtractError, ExtractResult, IQSample, SymbolSequence};

/// Chips per CCK symbol (both CCK-4 and CCK-8).
pub const CCK_CHIPS_PER_SYMBOL: usize = 11;

/// The four 802.11 NonHT data rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRate {
    /// 1 Mbps — DBPSK over the 11-chip Barker code.
    Mbps1,
    /// 2 Mbps — DQPSK over the 11-chip Barker code.
    Mbps2,
    /// 5.5 Mbps — CCK-4.
    Mbps5_5,
    /// 11 Mbps — CCK-8.
    Mbps11,
}

impl DataRate {
    /// Parse a metadata rate literal.
    pub fn parse(rate: &str) -> ExtractResult<Self> {
        match rate {
            "1Mbps" => Ok(Self::Mbps1),
            "2Mbps" => Ok(Self::Mbps2),
            "5.5Mbps" => Ok(Self::Mbps5_5),
            "11Mbps" => Ok(Self::Mbps11),
            other => Err(ExtractError::UnknownDataRate(other.to_string())),
        }
    }

    /// The metadata literal for this rate.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mbps1 => "1Mbps",
            Self::Mbps2 => "2Mbps",
            Self::Mbps5_5 => "5.5Mbps",
            Self::Mbps11 => "11Mbps",
        }
    }

    /// Whether this rate is Barker-spread (vs. CCK).
    pub fn is_barker_spread(&self) -> bool {
        matches!(self, Self::Mbps1 | Self::Mbps2)
    }
}

/// Recover NonHT symbols from a chip waveform according to the data rate.
pub fn extract_dsss_symbols(
    waveform: &[IQSample],
    data_rate: &str,
) -> ExtractResult<SymbolSequence> {
    match DataRate::parse(data_rate)? {
        DataRate::Mbps1 | DataRate::Mbps2 => Ok(despread(waveform, &BARKER_11)),
        DataRate::Mbps5_5 | DataRate::Mbps11 => Ok(decimate(waveform, CCK_CHIPS_PER_SYMBOL)),
    }
}
