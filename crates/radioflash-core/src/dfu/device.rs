//! DFU state-machine driver.
//!
//! Wraps a [`DfuTransport`] and keeps the device-side DFU state machine
//! synchronized with caller intent: every download is preceded by a
//! bounded Abort-until-idle convergence and followed by the BUSY -> IDLE
//! status confirmation pair. Convergence loops are bounded so a
//! disconnected or wedged device surfaces a timeout instead of hanging
//! the session.

use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use super::state::{DfuParseError, DfuRequest, DfuState, DfuStatus, StatusReport};
use crate::transport::{DfuTransport, TransportError};

/// DNLOAD pseudo-command opcode for SetAddress.
const CMD_SET_ADDRESS: u8 = 0x21;
/// DNLOAD pseudo-command opcode for sector Erase.
const CMD_ERASE: u8 = 0x41;
/// Vendor custom-command prefix.
const CMD_CUSTOM: u8 = 0x91;
/// Vendor register-read prefix.
const CMD_REGISTER: u8 = 0xa2;

/// Upload size used for vendor register reads.
const REGISTER_SIZE: u16 = 1024;

/// Custom radio commands sent as `[0x91, cmd]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TytCommand {
    ProgrammingMode = 0x01,
    /// Documented in the bootloader command set; the write path never
    /// needs it.
    SetRtc = 0x02,
    Reboot = 0x05,
}

/// Vendor registers read via `[0xa2, reg]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TytRegister {
    /// Radio model (16 bytes) + 16 bytes of something else.
    RadioInfo = 0x01,
    /// Real time clock (7 bytes).
    Rtc = 0x08,
}

#[derive(thiserror::Error, Debug)]
pub enum DfuError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] DfuParseError),

    #[error("Download rejected: expected dfuDNLOAD_BUSY, device reported {status} in {state}")]
    NotAccepted { status: DfuStatus, state: DfuState },

    #[error("Command execution failed: device reported {status} in {state}")]
    CommandFailed { status: DfuStatus, state: DfuState },

    #[error("Device did not reach {expected} after {attempts} attempts")]
    SyncTimeout { expected: &'static str, attempts: u32 },
}

/// Driver for one DFU device. Exclusively owns the transport (and with it
/// the device handle) for the session's lifetime.
pub struct DfuDevice<T: DfuTransport> {
    transport: T,
    /// Bound on Abort-until-idle convergence attempts.
    max_sync_attempts: u32,
    /// Bound on wait-for-idle status polls.
    max_idle_polls: u32,
}

impl<T: DfuTransport> DfuDevice<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_sync_attempts: 16,
            max_idle_polls: 100,
        }
    }

    /// Override the convergence bounds (mainly for tests).
    pub fn with_limits(transport: T, max_sync_attempts: u32, max_idle_polls: u32) -> Self {
        Self {
            transport,
            max_sync_attempts,
            max_idle_polls,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Read the 1-byte device state.
    pub fn get_state(&self) -> Result<DfuState, DfuError> {
        let data = self
            .transport
            .control_in(DfuRequest::GetState as u8, 0, 1)?;
        let byte = *data.first().ok_or(DfuParseError::ShortStatusReport(0))?;
        let state = DfuState::from_byte(byte)?;
        trace!(state = %state, "GetState");
        Ok(state)
    }

    /// Read the 6-byte status report.
    pub fn get_status(&self) -> Result<StatusReport, DfuError> {
        let data = self.transport.control_in(
            DfuRequest::GetStatus as u8,
            0,
            StatusReport::WIRE_SIZE as u16,
        )?;
        let report = StatusReport::parse(&data)?;
        trace!(report = %report, "GetStatus");
        Ok(report)
    }

    /// Return to dfuIDLE from any transfer state.
    pub fn abort(&self) -> Result<(), DfuError> {
        self.transport.control_out(DfuRequest::Abort as u8, 0, &[])?;
        Ok(())
    }

    /// Clear an error status.
    pub fn clear_status(&self) -> Result<(), DfuError> {
        self.transport
            .control_out(DfuRequest::ClrStatus as u8, 0, &[])?;
        Ok(())
    }

    /// Request leaving DFU mode. Only used to re-enter the application
    /// firmware, never mid-flash.
    pub fn detach(&self) -> Result<(), DfuError> {
        self.transport
            .control_out(DfuRequest::Detach as u8, 0, &[])?;
        Ok(())
    }

    /// Send the SetAddress pseudo-command `[0x21, addr LE32]`.
    pub fn set_address(&self, addr: u32) -> Result<(), DfuError> {
        debug!(addr = %format!("0x{addr:08x}"), "SetAddress");
        self.download(&address_command(CMD_SET_ADDRESS, addr), 0)
    }

    /// Send the Erase pseudo-command `[0x41, addr LE32]`.
    pub fn erase(&self, addr: u32) -> Result<(), DfuError> {
        debug!(addr = %format!("0x{addr:08x}"), "Erase");
        self.download(&address_command(CMD_ERASE, addr), 0)
    }

    /// Download one block and confirm its execution.
    ///
    /// The device must accept the block (first status poll reports
    /// dfuDNLOAD_BUSY, advertising its minimum completion wait) and then
    /// finish it (second poll reports dfuDNLOAD_IDLE). Anything else is a
    /// protocol violation: continuing could write to the wrong address.
    pub fn download(&self, data: &[u8], block_value: u16) -> Result<(), DfuError> {
        self.sync_to(
            &[DfuState::DfuIdle, DfuState::DfuDnloadIdle],
            "dfuIDLE/dfuDNLOAD_IDLE",
        )?;

        self.transport
            .control_out(DfuRequest::Dnload as u8, block_value, data)?;

        let accepted = self.get_status()?;
        if accepted.state != DfuState::DfuDnloadBusy {
            return Err(DfuError::NotAccepted {
                status: accepted.status,
                state: accepted.state,
            });
        }
        if accepted.poll_timeout_ms > 0 {
            thread::sleep(Duration::from_millis(accepted.poll_timeout_ms as u64));
        }

        let done = self.get_status()?;
        if done.state != DfuState::DfuDnloadIdle {
            return Err(DfuError::CommandFailed {
                status: done.status,
                state: done.state,
            });
        }
        Ok(())
    }

    /// Upload up to `length` bytes. Returns exactly what the device sent;
    /// callers must check for short reads.
    pub fn upload(&self, length: u16, block_value: u16) -> Result<Vec<u8>, DfuError> {
        self.sync_to(
            &[DfuState::DfuIdle, DfuState::DfuUploadIdle],
            "dfuIDLE/dfuUPLOAD_IDLE",
        )?;

        let data = self
            .transport
            .control_in(DfuRequest::Upload as u8, block_value, length)?;
        Ok(data)
    }

    /// Send a raw DNLOAD without the BUSY/IDLE confirmation pair. Vendor
    /// commands answer through the state machine instead of status polls.
    pub fn send_custom(&self, data: &[u8]) -> Result<(), DfuError> {
        self.transport.control_out(DfuRequest::Dnload as u8, 0, data)?;
        Ok(())
    }

    /// Read a vendor register via `[0xa2, reg]`.
    pub fn read_register(&self, reg: TytRegister) -> Result<Vec<u8>, DfuError> {
        self.send_custom(&[CMD_REGISTER, reg as u8])?;
        self.wait_for_idle()?;
        self.abort()?;
        let data = self.upload(REGISTER_SIZE, 0)?;
        self.abort()?;
        Ok(data)
    }

    /// Read the radio model string from the RadioInfo register.
    pub fn identify(&self) -> Result<String, DfuError> {
        let data = self.read_register(TytRegister::RadioInfo)?;
        let len = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Ok(String::from_utf8_lossy(&data[..len]).into_owned())
    }

    /// Read the 7-byte BCD clock from the RTC register.
    pub fn read_rtc(&self) -> Result<Vec<u8>, DfuError> {
        let mut data = self.read_register(TytRegister::Rtc)?;
        data.truncate(7);
        Ok(data)
    }

    /// Put the radio into programming mode.
    pub fn programming_mode(&self) -> Result<(), DfuError> {
        self.send_custom(&[CMD_CUSTOM, TytCommand::ProgrammingMode as u8])
    }

    /// Reboot the radio out of the bootloader.
    pub fn reboot(&self) -> Result<(), DfuError> {
        self.send_custom(&[CMD_CUSTOM, TytCommand::Reboot as u8])
    }

    /// Converge any state to dfuIDLE, bounded.
    pub fn enter_dfu_mode(&self) -> Result<(), DfuError> {
        for _ in 0..self.max_sync_attempts {
            match self.get_state()? {
                DfuState::DfuIdle => return Ok(()),
                DfuState::DfuError => self.clear_status()?,
                DfuState::DfuDnloadIdle
                | DfuState::DfuDnloadSync
                | DfuState::DfuManifest
                | DfuState::DfuManifestSync
                | DfuState::DfuUploadIdle => self.abort()?,
                _ => thread::sleep(Duration::from_millis(10)),
            }
        }
        Err(DfuError::SyncTimeout {
            expected: "dfuIDLE",
            attempts: self.max_sync_attempts,
        })
    }

    /// Poll GetStatus until the device reports dfuDNLOAD_IDLE, bounded.
    pub fn wait_for_idle(&self) -> Result<(), DfuError> {
        for _ in 0..self.max_idle_polls {
            let report = self.get_status()?;
            if report.state == DfuState::DfuDnloadIdle {
                return Ok(());
            }
            thread::sleep(Duration::from_millis(10));
        }
        Err(DfuError::SyncTimeout {
            expected: "dfuDNLOAD_IDLE",
            attempts: self.max_idle_polls,
        })
    }

    /// Issue Abort until the device reports one of `wanted`, bounded.
    fn sync_to(&self, wanted: &[DfuState], expected: &'static str) -> Result<(), DfuError> {
        for _ in 0..self.max_sync_attempts {
            let state = self.get_state()?;
            if wanted.contains(&state) {
                return Ok(());
            }
            debug!(state = %state, "Out of sync, aborting");
            self.abort()?;
        }
        Err(DfuError::SyncTimeout {
            expected,
            attempts: self.max_sync_attempts,
        })
    }
}

fn address_command(opcode: u8, addr: u32) -> [u8; 5] {
    [
        opcode,
        (addr & 0xff) as u8,
        ((addr >> 8) & 0xff) as u8,
        ((addr >> 16) & 0xff) as u8,
        ((addr >> 24) & 0xff) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    const ST_DFU_IDLE: u8 = 0x02;
    const ST_DNLOAD_BUSY: u8 = 0x04;
    const ST_DNLOAD_IDLE: u8 = 0x05;
    const ST_ERROR: u8 = 0x0a;

    fn device(mock: MockTransport) -> DfuDevice<MockTransport> {
        DfuDevice::with_limits(mock, 4, 4)
    }

    /// Happy path: idle device, block accepted, BUSY then IDLE.
    #[test]
    fn test_download_busy_then_idle() {
        let mock = MockTransport::new();
        mock.queue_state(ST_DFU_IDLE);
        mock.queue_status(0, 0, ST_DNLOAD_BUSY);
        mock.queue_status(0, 0, ST_DNLOAD_IDLE);

        let dev = device(mock);
        dev.download(b"data", 7).unwrap();

        let writes = dev.transport().get_writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].request, DfuRequest::Dnload as u8);
        assert_eq!(writes[0].value, 7);
        assert_eq!(writes[0].data, b"data");
        assert_eq!(dev.transport().pending_responses(), 0);
    }

    /// First poll must report BUSY; IDLE straight away means the device
    /// never acknowledged the block.
    #[test]
    fn test_download_rejected_when_first_poll_not_busy() {
        let mock = MockTransport::new();
        mock.queue_state(ST_DFU_IDLE);
        mock.queue_status(0, 0, ST_DNLOAD_IDLE);

        let dev = device(mock);
        let err = dev.download(b"data", 2).unwrap_err();
        assert!(matches!(
            err,
            DfuError::NotAccepted {
                state: DfuState::DfuDnloadIdle,
                ..
            }
        ));
    }

    /// Second poll must report IDLE; a device stuck at BUSY fails the
    /// operation rather than being polled a third time.
    #[test]
    fn test_download_fails_when_stuck_busy() {
        let mock = MockTransport::new();
        mock.queue_state(ST_DFU_IDLE);
        mock.queue_status(0, 0, ST_DNLOAD_BUSY);
        mock.queue_status(0, 0, ST_DNLOAD_BUSY);

        let dev = device(mock);
        let err = dev.download(b"data", 2).unwrap_err();
        assert!(matches!(
            err,
            DfuError::CommandFailed {
                state: DfuState::DfuDnloadBusy,
                ..
            }
        ));
    }

    /// A device out of sync gets Abort until it reports idle.
    #[test]
    fn test_download_aborts_until_idle() {
        let mock = MockTransport::new();
        mock.queue_state(ST_ERROR);
        mock.queue_state(ST_ERROR);
        mock.queue_state(ST_DNLOAD_IDLE);
        mock.queue_status(0, 0, ST_DNLOAD_BUSY);
        mock.queue_status(0, 0, ST_DNLOAD_IDLE);

        let dev = device(mock);
        dev.download(b"x", 2).unwrap();

        let writes = dev.transport().get_writes();
        // Two aborts, then the download itself.
        assert_eq!(writes[0].request, DfuRequest::Abort as u8);
        assert_eq!(writes[1].request, DfuRequest::Abort as u8);
        assert_eq!(writes[2].request, DfuRequest::Dnload as u8);
    }

    /// Convergence is bounded: a device never leaving dfuERROR times out.
    #[test]
    fn test_download_sync_is_bounded() {
        let mock = MockTransport::new();
        for _ in 0..4 {
            mock.queue_state(ST_ERROR);
        }

        let dev = device(mock);
        let err = dev.download(b"x", 2).unwrap_err();
        assert!(matches!(err, DfuError::SyncTimeout { attempts: 4, .. }));

        // Only Abort traffic went out, never the data block.
        for w in dev.transport().get_writes() {
            assert_eq!(w.request, DfuRequest::Abort as u8);
        }
    }

    #[test]
    fn test_set_address_framing() {
        let mock = MockTransport::new();
        mock.queue_state(ST_DFU_IDLE);
        mock.queue_status(0, 0, ST_DNLOAD_BUSY);
        mock.queue_status(0, 0, ST_DNLOAD_IDLE);

        let dev = device(mock);
        dev.set_address(0x0800c000).unwrap();

        let writes = dev.transport().get_writes();
        assert_eq!(writes[0].data, vec![0x21, 0x00, 0xc0, 0x00, 0x08]);
        assert_eq!(writes[0].value, 0);
    }

    #[test]
    fn test_erase_framing() {
        let mock = MockTransport::new();
        mock.queue_state(ST_DFU_IDLE);
        mock.queue_status(0, 0, ST_DNLOAD_BUSY);
        mock.queue_status(0, 0, ST_DNLOAD_IDLE);

        let dev = device(mock);
        dev.erase(0x08000000).unwrap();

        let writes = dev.transport().get_writes();
        assert_eq!(writes[0].data, vec![0x41, 0x00, 0x00, 0x00, 0x08]);
    }

    /// Upload returns exactly what the device produced, even short reads.
    #[test]
    fn test_upload_returns_short_read() {
        let mock = MockTransport::new();
        mock.queue_state(ST_DFU_IDLE);
        mock.queue_response(b"abc");

        let dev = device(mock);
        let data = dev.upload(32, 0).unwrap();
        assert_eq!(data, b"abc");
    }

    #[test]
    fn test_identify_parses_model_string() {
        let mock = MockTransport::new();
        // register read: wait_for_idle poll, then upload sync + data
        mock.queue_status(0, 0, ST_DNLOAD_IDLE);
        mock.queue_state(ST_DFU_IDLE);
        let mut info = b"MD-9600\0".to_vec();
        info.resize(32, 0xee);
        mock.queue_response(&info);

        let dev = device(mock);
        assert_eq!(dev.identify().unwrap(), "MD-9600");

        let writes = dev.transport().get_writes();
        assert_eq!(writes[0].data, vec![0xa2, 0x01]);
    }

    #[test]
    fn test_read_rtc_truncates_to_seven_bytes() {
        let mock = MockTransport::new();
        mock.queue_status(0, 0, ST_DNLOAD_IDLE);
        mock.queue_state(ST_DFU_IDLE);
        mock.queue_response(&[0x21, 0x04, 0x17, 0x20, 0x30, 0x00, 0x05, 0xee, 0xee]);

        let dev = device(mock);
        let rtc = dev.read_rtc().unwrap();
        assert_eq!(rtc.len(), 7);

        let writes = dev.transport().get_writes();
        assert_eq!(writes[0].data, vec![0xa2, 0x08]);
    }

    #[test]
    fn test_not_ready_handle_fails_fast() {
        let mock = MockTransport::new();
        mock.set_ready(false);
        let dev = device(mock);
        let err = dev.get_state().unwrap_err();
        assert!(matches!(
            err,
            DfuError::Transport(TransportError::NotReady)
        ));
    }
}
