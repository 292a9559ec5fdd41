//! RadioFlash-Core: firmware flashing toolkit for TYT radios.
//!
//! This crate implements the DFU-based firmware update protocol spoken by
//! TYT (Tytera) amateur radio transceivers, together with the codec for
//! their firmware container format.
//!
//! # Architecture
//!
//! The crate is organized into layers:
//!
//! - **Dfu**: USB DFU state machine and the TYT vendor extensions
//! - **Transport**: USB communication abstraction (nusb, mock)
//! - **Fw**: Firmware container codec and per-model payload ciphers
//! - **Flash**: MCU flash geometry and the sector-aligned walk
//! - **Radio**: Erase/program orchestration against one device
//! - **Events**: Observer pattern for UI decoupling
//! - **Session**: High-level orchestrator
//!
//! # Example
//!
//! ```no_run
//! use radioflash_core::session::{FlashConfig, FlashSession};
//!
//! let config = FlashConfig {
//!     firmware_path: "MD9600-firmware.bin".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut session = FlashSession::new(config);
//! session.run().expect("flash failed");
//! ```

pub mod dfu;
pub mod events;
pub mod flash;
pub mod fw;
pub mod radio;
pub mod session;
pub mod transport;

// Re-exports for convenience
pub use dfu::{DfuDevice, DfuError, DfuState, DfuStatus, StatusReport, TytCommand, TytRegister};
pub use events::{FlashEvent, FlashObserver, FlashPhase, NullObserver, TracingObserver};
pub use flash::{FlashError, FlashMap, FlashSector, STM32F40X};
pub use fw::{FirmwareError, FirmwareSegment, FirmwareSupport, PayloadState};
pub use radio::{RadioError, TytRadio, TRANSFER_BLOCK_SIZE};
pub use session::{FlashConfig, FlashSession};
pub use transport::{DfuTransport, MockTransport, NusbTransport, TransportError};
