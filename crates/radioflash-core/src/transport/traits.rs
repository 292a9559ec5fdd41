//! USB transport layer abstraction.
//!
//! Defines the `DfuTransport` trait for DFU class control transfers,
//! allowing different implementations (nusb, mock, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Device not found: VID={vid:04X} PID={pid:04X}")]
    DeviceNotFound { vid: u16, pid: u16 },

    #[error("Failed to open device: {0}")]
    OpenFailed(String),

    #[error("Failed to claim interface {interface}: {message}")]
    ClaimInterfaceFailed { interface: u8, message: String },

    #[error("Control transfer failed ({request}): {message}")]
    Transfer { request: &'static str, message: String },

    #[error("Device is not ready")]
    NotReady,

    #[error("Timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// Abstract DFU control-transfer interface.
///
/// DFU is driven entirely over the default control pipe: host-to-device
/// class transfers for DNLOAD-style requests and device-to-host class
/// transfers for UPLOAD/GETSTATUS/GETSTATE. A transport instance owns its
/// device handle exclusively for the session's lifetime.
pub trait DfuTransport: Send + Sync {
    /// Class OUT transfer to the DFU interface. `value` is the wValue
    /// field (the DFU block number for DNLOAD).
    fn control_out(&self, request: u8, value: u16, data: &[u8]) -> Result<(), TransportError>;

    /// Class IN transfer from the DFU interface. Returns exactly the bytes
    /// the device produced, which may be fewer than `length`.
    fn control_in(&self, request: u8, value: u16, length: u16) -> Result<Vec<u8>, TransportError>;

    /// Get the current VID.
    fn vendor_id(&self) -> u16;

    /// Get the current PID.
    fn product_id(&self) -> u16;
}
