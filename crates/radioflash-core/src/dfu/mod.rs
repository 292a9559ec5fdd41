//! Vendor-flavored DFU protocol: wire model and state-machine driver.

pub mod device;
pub mod state;

pub use device::{DfuDevice, DfuError, TytCommand, TytRegister};
pub use state::{DfuParseError, DfuRequest, DfuState, DfuStatus, StatusReport};
