//! DFU protocol model: requests, states, status codes and the GETSTATUS
//! report layout.
//!
//! State transitions are device-driven; the host only observes (GetState /
//! GetStatus) and nudges (Download / Upload / Abort / Detach).

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfuParseError {
    #[error("Unknown DFU state byte: 0x{0:02X}")]
    UnknownState(u8),
    #[error("Unknown DFU status byte: 0x{0:02X}")]
    UnknownStatus(u8),
    #[error("Status report too short: expected 6 bytes, got {0}")]
    ShortStatusReport(usize),
}

/// DFU class request numbers (bRequest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DfuRequest {
    /// Leave DFU mode and re-enter the application firmware.
    Detach = 0,
    /// Host-to-device transfer: data blocks and vendor pseudo-commands.
    Dnload = 1,
    /// Device-to-host transfer of flash contents.
    Upload = 2,
    /// Fetch the 6-byte status report.
    GetStatus = 3,
    /// Clear an error status and return to dfuIDLE.
    ClrStatus = 4,
    /// Fetch the 1-byte state.
    GetState = 5,
    /// Return to dfuIDLE from any transfer state.
    Abort = 6,
}

/// Device-reported DFU state.
///
/// 0x91/0x92 are vendor-private states reported while a custom register
/// read is in flight; they are not part of the USB DFU class spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DfuState {
    AppIdle = 0x00,
    AppDetach = 0x01,
    DfuIdle = 0x02,
    DfuDnloadSync = 0x03,
    DfuDnloadBusy = 0x04,
    DfuDnloadIdle = 0x05,
    DfuManifestSync = 0x06,
    DfuManifest = 0x07,
    DfuManifestWaitReset = 0x08,
    DfuUploadIdle = 0x09,
    DfuError = 0x0a,
    DfuUploadSync = 0x91,
    DfuUploadBusy = 0x92,
}

impl DfuState {
    pub fn from_byte(b: u8) -> Result<Self, DfuParseError> {
        Ok(match b {
            0x00 => DfuState::AppIdle,
            0x01 => DfuState::AppDetach,
            0x02 => DfuState::DfuIdle,
            0x03 => DfuState::DfuDnloadSync,
            0x04 => DfuState::DfuDnloadBusy,
            0x05 => DfuState::DfuDnloadIdle,
            0x06 => DfuState::DfuManifestSync,
            0x07 => DfuState::DfuManifest,
            0x08 => DfuState::DfuManifestWaitReset,
            0x09 => DfuState::DfuUploadIdle,
            0x0a => DfuState::DfuError,
            0x91 => DfuState::DfuUploadSync,
            0x92 => DfuState::DfuUploadBusy,
            other => return Err(DfuParseError::UnknownState(other)),
        })
    }
}

impl fmt::Display for DfuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DfuState::AppIdle => "appIDLE",
            DfuState::AppDetach => "appDETACH",
            DfuState::DfuIdle => "dfuIDLE",
            DfuState::DfuDnloadSync => "dfuDNLOAD_SYNC",
            DfuState::DfuDnloadBusy => "dfuDNLOAD_BUSY",
            DfuState::DfuDnloadIdle => "dfuDNLOAD_IDLE",
            DfuState::DfuManifestSync => "dfuMANIFEST_SYNC",
            DfuState::DfuManifest => "dfuMANIFEST",
            DfuState::DfuManifestWaitReset => "dfuMANIFEST_WAIT_RESET",
            DfuState::DfuUploadIdle => "dfuUPLOAD_IDLE",
            DfuState::DfuError => "dfuERROR",
            DfuState::DfuUploadSync => "dfuUPLOAD_SYNC",
            DfuState::DfuUploadBusy => "dfuUPLOAD_BUSY",
        };
        write!(f, "{name}")
    }
}

/// Device-reported DFU status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DfuStatus {
    Ok = 0x00,
    ErrTarget = 0x01,
    ErrFile = 0x02,
    ErrWrite = 0x03,
    ErrErase = 0x04,
    ErrCheckErased = 0x05,
    ErrProg = 0x06,
    ErrVerify = 0x07,
    ErrAddress = 0x08,
    ErrNotDone = 0x09,
    ErrFirmware = 0x0a,
    ErrVendor = 0x0b,
    ErrUsbReset = 0x0c,
    ErrPowerOnReset = 0x0d,
    ErrUnknown = 0x0e,
    ErrStalledPkt = 0x0f,
}

impl DfuStatus {
    pub fn from_byte(b: u8) -> Result<Self, DfuParseError> {
        Ok(match b {
            0x00 => DfuStatus::Ok,
            0x01 => DfuStatus::ErrTarget,
            0x02 => DfuStatus::ErrFile,
            0x03 => DfuStatus::ErrWrite,
            0x04 => DfuStatus::ErrErase,
            0x05 => DfuStatus::ErrCheckErased,
            0x06 => DfuStatus::ErrProg,
            0x07 => DfuStatus::ErrVerify,
            0x08 => DfuStatus::ErrAddress,
            0x09 => DfuStatus::ErrNotDone,
            0x0a => DfuStatus::ErrFirmware,
            0x0b => DfuStatus::ErrVendor,
            0x0c => DfuStatus::ErrUsbReset,
            0x0d => DfuStatus::ErrPowerOnReset,
            0x0e => DfuStatus::ErrUnknown,
            0x0f => DfuStatus::ErrStalledPkt,
            other => return Err(DfuParseError::UnknownStatus(other)),
        })
    }
}

impl fmt::Display for DfuStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DfuStatus::Ok => "OK",
            DfuStatus::ErrTarget => "errTARGET",
            DfuStatus::ErrFile => "errFILE",
            DfuStatus::ErrWrite => "errWRITE",
            DfuStatus::ErrErase => "errERASE",
            DfuStatus::ErrCheckErased => "errCHECK_ERASED",
            DfuStatus::ErrProg => "errPROG",
            DfuStatus::ErrVerify => "errVERIFY",
            DfuStatus::ErrAddress => "errADDRESS",
            DfuStatus::ErrNotDone => "errNOTDONE",
            DfuStatus::ErrFirmware => "errFIRMWARE",
            DfuStatus::ErrVendor => "errVENDOR",
            DfuStatus::ErrUsbReset => "errUSBR",
            DfuStatus::ErrPowerOnReset => "errPOR",
            DfuStatus::ErrUnknown => "errUNKNOWN",
            DfuStatus::ErrStalledPkt => "errSTALLEDPKT",
        };
        write!(f, "{name}")
    }
}

/// Parsed 6-byte GETSTATUS response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub status: DfuStatus,
    /// Minimum time in milliseconds the host must wait before the next
    /// GETSTATUS, assembled from the 3 timeout bytes.
    pub poll_timeout_ms: u32,
    pub state: DfuState,
    /// Trailing byte of the report, unused by this implementation.
    pub discarded: u8,
}

impl StatusReport {
    pub const WIRE_SIZE: usize = 6;

    /// Parse the fixed layout `{status, timeout[3], state, iString}`.
    pub fn parse(data: &[u8]) -> Result<Self, DfuParseError> {
        if data.len() < Self::WIRE_SIZE {
            return Err(DfuParseError::ShortStatusReport(data.len()));
        }
        Ok(Self {
            status: DfuStatus::from_byte(data[0])?,
            poll_timeout_ms: ((((data[1] as u32) << 8) | data[2] as u32) << 8) | data[3] as u32,
            state: DfuState::from_byte(data[4])?,
            discarded: data[5],
        })
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status: {}, Timeout: {}ms, State: {}, Discarded: 0x{:02x}",
            self.status, self.poll_timeout_ms, self.state, self.discarded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_idle_report() {
        let report = StatusReport::parse(&[0x00, 0x00, 0x00, 0x00, 0x02, 0x00]).unwrap();
        assert_eq!(report.status, DfuStatus::Ok);
        assert_eq!(report.poll_timeout_ms, 0);
        assert_eq!(report.state, DfuState::DfuIdle);
        assert_eq!(report.discarded, 0);
    }

    #[test]
    fn test_parse_busy_report_with_timeout() {
        // 0x000120 = 288ms poll timeout, dfuDNLOAD_BUSY
        let report = StatusReport::parse(&[0x00, 0x00, 0x01, 0x20, 0x04, 0x00]).unwrap();
        assert_eq!(report.poll_timeout_ms, 0x120);
        assert_eq!(report.state, DfuState::DfuDnloadBusy);
    }

    #[test]
    fn test_parse_short_report() {
        assert_eq!(
            StatusReport::parse(&[0x00, 0x00]),
            Err(DfuParseError::ShortStatusReport(2))
        );
    }

    #[test]
    fn test_vendor_private_states() {
        assert_eq!(DfuState::from_byte(0x91), Ok(DfuState::DfuUploadSync));
        assert_eq!(DfuState::from_byte(0x92), Ok(DfuState::DfuUploadBusy));
        assert_eq!(
            DfuState::from_byte(0x40),
            Err(DfuParseError::UnknownState(0x40))
        );
    }

    #[test]
    fn test_state_names() {
        assert_eq!(DfuState::DfuDnloadBusy.to_string(), "dfuDNLOAD_BUSY");
        assert_eq!(DfuStatus::ErrStalledPkt.to_string(), "errSTALLEDPKT");
    }
}
