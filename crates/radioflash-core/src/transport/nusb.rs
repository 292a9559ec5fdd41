//! nusb-based USB transport implementation.

use std::time::Duration;

use nusb::transfer::{ControlIn, ControlOut, ControlType, Recipient};
use nusb::{Interface, MaybeFuture, list_devices};
use tracing::{debug, info, instrument};

use super::traits::{DfuTransport, TransportError};

/// STMicroelectronics bootloader VID, used by the whole TYT MD family.
pub const TYT_VENDOR_ID: u16 = 0x0483;
/// STM32 DFU bootloader PID.
pub const TYT_PRODUCT_ID: u16 = 0xdf11;

/// Per-transfer timeout. Control transfers block the calling thread until
/// completion or this deadline.
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(5);

/// nusb-based DFU transport over the default control pipe.
pub struct NusbTransport {
    interface: Interface,
    vid: u16,
    pid: u16,
}

impl NusbTransport {
    /// Open the first radio in DFU mode (default VID/PID).
    pub fn open() -> Result<Self, TransportError> {
        Self::open_with_ids(TYT_VENDOR_ID, TYT_PRODUCT_ID)
    }

    /// Open a device with specific VID/PID.
    #[instrument(level = "info", fields(vid = format!("{:04X}", vid), pid = format!("{:04X}", pid)))]
    pub fn open_with_ids(vid: u16, pid: u16) -> Result<Self, TransportError> {
        let device_info = list_devices()
            .wait()
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?
            .find(|d| d.vendor_id() == vid && d.product_id() == pid)
            .ok_or(TransportError::DeviceNotFound { vid, pid })?;

        info!(
            vendor_id = %format!("{:04X}", vid),
            product_id = %format!("{:04X}", pid),
            "Found device"
        );

        let device = device_info
            .open()
            .wait()
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?;

        let interface =
            device
                .claim_interface(0)
                .wait()
                .map_err(|e| TransportError::ClaimInterfaceFailed {
                    interface: 0,
                    message: e.to_string(),
                })?;

        info!("Device opened successfully");

        Ok(Self {
            interface,
            vid,
            pid,
        })
    }
}

impl DfuTransport for NusbTransport {
    #[instrument(skip(self, data), fields(request, value, len = data.len()))]
    fn control_out(&self, request: u8, value: u16, data: &[u8]) -> Result<(), TransportError> {
        self.interface
            .control_out(
                ControlOut {
                    control_type: ControlType::Class,
                    recipient: Recipient::Interface,
                    request,
                    value,
                    index: 0,
                    data,
                },
                TRANSFER_TIMEOUT,
            )
            .wait()
            .map_err(|e| TransportError::Transfer {
                request: "OUT",
                message: e.to_string(),
            })?;

        debug!(bytes_written = data.len(), "Control OUT complete");
        Ok(())
    }

    #[instrument(skip(self), fields(request, value, length))]
    fn control_in(&self, request: u8, value: u16, length: u16) -> Result<Vec<u8>, TransportError> {
        let data = self
            .interface
            .control_in(
                ControlIn {
                    control_type: ControlType::Class,
                    recipient: Recipient::Interface,
                    request,
                    value,
                    index: 0,
                    length,
                },
                TRANSFER_TIMEOUT,
            )
            .wait()
            .map_err(|e| TransportError::Transfer {
                request: "IN",
                message: e.to_string(),
            })?;

        debug!(bytes_read = data.len(), "Control IN complete");
        Ok(data)
    }

    fn vendor_id(&self) -> u16 {
        self.vid
    }

    fn product_id(&self) -> u16 {
        self.pid
    }
}
