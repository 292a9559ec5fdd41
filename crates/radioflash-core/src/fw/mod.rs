//! Firmware container codecs.
//!
//! Each radio family ships firmware in its own container format. A codec
//! parses the on-disk container, exposes the addressable payload segments
//! and applies the family's payload cipher. The factory picks the codec by
//! probing registered handlers in a fixed order; only the TYT handler is
//! registered here, the seam exists for other families.

pub mod cipher;
pub mod tyt;

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FirmwareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid start magic")]
    InvalidStartMagic,

    #[error("Invalid counter magic length: {0}")]
    InvalidCounterMagicLength(u8),

    #[error("Counter magic is invalid, or not supported")]
    UnsupportedCounterMagic,

    #[error("Radio model not supported: {0}")]
    UnsupportedModel(String),

    #[error("Memory region count out of bounds: {0}")]
    RegionCountOutOfBounds(u32),

    #[error("Payload truncated: expected {expected} bytes, got {actual}")]
    PayloadTruncated { expected: usize, actual: usize },

    #[error("Payload is already {0}")]
    PayloadState(PayloadState),

    #[error("No registered handler supports this firmware file")]
    UnrecognizedFormat,
}

/// Whether the payload bytes are currently enciphered.
///
/// The XOR cipher is involutory, so the bytes alone cannot tell the two
/// apart; the container carries this tag so a second decrypt (or encrypt)
/// is rejected instead of silently re-scrambling the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadState {
    Plaintext,
    Ciphertext,
}

impl fmt::Display for PayloadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadState::Plaintext => write!(f, "plaintext"),
            PayloadState::Ciphertext => write!(f, "ciphertext"),
        }
    }
}

/// An (address, length, bytes) slice of the payload destined for one
/// flash address range. Borrowed from the owning container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareSegment<'a> {
    /// Index of the segment.
    pub index: u16,
    /// The flash address the segment is written to on the device.
    pub address: u32,
    /// The size of the data segment.
    pub size: u32,
    /// The segment's bytes within the firmware payload.
    pub data: &'a [u8],
}

/// Operations every firmware container codec supports.
pub trait FirmwareSupport: fmt::Debug {
    /// The radio model this firmware file is for.
    fn radio_model(&self) -> &str;

    /// Decrypt the firmware payload in place.
    fn decrypt(&mut self) -> Result<(), FirmwareError>;

    /// Encrypt the firmware payload in place.
    fn encrypt(&mut self) -> Result<(), FirmwareError>;

    /// Segments to write, in declared order.
    fn segments(&self) -> Vec<FirmwareSegment<'_>>;

    /// Serialize the container.
    fn to_bytes(&self) -> Vec<u8>;

    /// General info about the firmware file.
    fn describe(&self) -> String;

    /// Write the container to disk.
    fn write_to(&self, path: &Path) -> Result<(), FirmwareError> {
        fs::write(path, self.to_bytes())?;
        Ok(())
    }
}

type SupportsFn = fn(&[u8]) -> bool;
type LoadFn = fn(&[u8]) -> Result<Box<dyn FirmwareSupport>, FirmwareError>;

/// Registered container handlers, probed in order. Order is preserved
/// because an ambiguous file should resolve to the earliest match.
static HANDLERS: &[(&str, SupportsFn, LoadFn)] = &[("TYT", tyt::supports, tyt::load)];

/// Parse a firmware container from raw bytes, probing each registered
/// handler in turn.
pub fn parse(data: &[u8]) -> Result<Box<dyn FirmwareSupport>, FirmwareError> {
    for (name, supports, load) in HANDLERS {
        if supports(data) {
            tracing::debug!(handler = name, "Firmware handler matched");
            return load(data);
        }
    }
    Err(FirmwareError::UnrecognizedFormat)
}

/// Read and parse a firmware container file.
pub fn read_file(path: &Path) -> Result<Box<dyn FirmwareSupport>, FirmwareError> {
    let data = fs::read(path)?;
    parse(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_rejects_unknown_format() {
        let err = parse(b"not a firmware file").unwrap_err();
        assert!(matches!(err, FirmwareError::UnrecognizedFormat));
    }
}
