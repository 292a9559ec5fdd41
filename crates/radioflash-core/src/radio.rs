//! Flash write orchestrator for TYT radios.
//!
//! Composes the flash geometry model, the firmware codec and the DFU
//! driver into the erase-then-program traversal of each firmware segment.

use thiserror::Error;
use tracing::{info, instrument};

use crate::dfu::{DfuDevice, DfuError};
use crate::events::{FlashEvent, FlashObserver, FlashPhase};
use crate::flash::{self, FlashError, FlashSector};
use crate::fw::FirmwareSupport;
use crate::transport::DfuTransport;

/// DFU transfer block size used for programming.
pub const TRANSFER_BLOCK_SIZE: usize = 1024;

/// First wValue carrying firmware data. Values 0 and 1 select vendor
/// sub-commands sharing the DNLOAD request type.
pub const FIRST_DATA_BLOCK: u16 = 2;

#[derive(Error, Debug)]
pub enum RadioError {
    #[error(transparent)]
    Dfu(#[from] DfuError),

    #[error(transparent)]
    Flash(#[from] FlashError),

    #[error("No flash layout known for radio model: {0}")]
    UnknownLayout(String),

    #[error("Segment range overflows the 32-bit address space: 0x{address:08X}+0x{size:X}")]
    AddressOverflow { address: u32, size: u32 },
}

/// One TYT radio reached over DFU. Exclusively owns the device for the
/// session.
pub struct TytRadio<T: DfuTransport> {
    dfu: DfuDevice<T>,
}

impl<T: DfuTransport> TytRadio<T> {
    pub fn new(dfu: DfuDevice<T>) -> Self {
        Self { dfu }
    }

    pub fn dfu(&self) -> &DfuDevice<T> {
        &self.dfu
    }

    /// Erase-block layout of the MCU a model's firmware lives on. The
    /// whole supported MD/UV/DM family flashes an STM32F40X part.
    pub fn flash_map(model: &str) -> Option<&'static [FlashSector]> {
        match model {
            "MD2017" | "MD2017 GPS" | "MD9600" | "UV3X0" | "UV3X0 GPS" | "DM1701" | "MD390"
            | "MD380" | "MD280" => Some(&flash::STM32F40X),
            _ => None,
        }
    }

    /// Read the radio's model string.
    pub fn identify(&self) -> Result<String, RadioError> {
        Ok(self.dfu.identify()?)
    }

    /// Write every firmware segment to the radio's flash.
    ///
    /// Pass 1 erases each sector a segment touches; pass 2 sets the
    /// segment base address and downloads the data in fixed-size blocks.
    /// There is no rollback: a mid-stream failure leaves flash in
    /// whatever state the last completed operation produced.
    #[instrument(skip_all, fields(model = fw.radio_model()))]
    pub fn write_firmware(
        &self,
        fw: &dyn FirmwareSupport,
        observer: &dyn FlashObserver,
    ) -> Result<(), RadioError> {
        let model = fw.radio_model();
        let map = Self::flash_map(model).ok_or_else(|| RadioError::UnknownLayout(model.into()))?;

        for segment in fw.segments() {
            let end = segment
                .address
                .checked_add(segment.size)
                .ok_or(RadioError::AddressOverflow {
                    address: segment.address,
                    size: segment.size,
                })?;

            info!(
                segment = segment.index,
                address = %format!("0x{:08x}", segment.address),
                size = segment.size,
                "Writing segment"
            );

            observer.on_event(&FlashEvent::PhaseChanged {
                phase: FlashPhase::Erase,
            });
            flash::aligned_walk(map, segment.address, end, |addr, _len, sector| {
                self.dfu.erase(addr)?;
                observer.on_event(&FlashEvent::SectorErased {
                    address: addr,
                    sector_index: sector.index,
                });
                Ok::<(), RadioError>(())
            })?;

            observer.on_event(&FlashEvent::PhaseChanged {
                phase: FlashPhase::Program,
            });
            self.dfu.set_address(segment.address)?;

            let mut written = 0u64;
            for (idx, block) in segment.data.chunks(TRANSFER_BLOCK_SIZE).enumerate() {
                self.dfu.download(block, FIRST_DATA_BLOCK + idx as u16)?;
                written += block.len() as u64;
                observer.on_event(&FlashEvent::Progress {
                    segment: segment.index,
                    written,
                    total: segment.size as u64,
                });
            }
        }

        observer.on_event(&FlashEvent::Complete);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfu::DfuRequest;
    use crate::events::NullObserver;
    use crate::fw::tyt::TytFirmware;
    use crate::transport::MockTransport;

    const ST_DFU_IDLE: u8 = 0x02;
    const ST_DNLOAD_BUSY: u8 = 0x04;
    const ST_DNLOAD_IDLE: u8 = 0x05;

    /// Queue the state/status triple one successful download consumes.
    fn queue_download_ok(mock: &MockTransport) {
        mock.queue_state(ST_DFU_IDLE);
        mock.queue_status(0, 0, ST_DNLOAD_BUSY);
        mock.queue_status(0, 0, ST_DNLOAD_IDLE);
    }

    fn firmware(addr: u32, data: &[u8]) -> TytFirmware {
        let mut fw = TytFirmware::for_model("MD9600").unwrap();
        fw.append_segment(addr, data).unwrap();
        fw
    }

    #[test]
    fn test_write_firmware_wire_order() {
        // 1536 bytes at 0x0800c000: one 16k sector, two data blocks.
        let fw = firmware(0x0800c000, &[0x11; 1536]);

        let mock = MockTransport::new();
        for _ in 0..4 {
            // erase + set_address + 2 downloads
            queue_download_ok(&mock);
        }

        let radio = TytRadio::new(DfuDevice::with_limits(mock, 4, 4));
        radio.write_firmware(&fw, &NullObserver).unwrap();

        let writes: Vec<_> = radio
            .dfu()
            .transport()
            .get_writes()
            .into_iter()
            .filter(|w| w.request == DfuRequest::Dnload as u8)
            .collect();
        assert_eq!(writes.len(), 4);

        // Erase the one touched sector, then set the base address.
        assert_eq!(writes[0].data, vec![0x41, 0x00, 0xc0, 0x00, 0x08]);
        assert_eq!(writes[0].value, 0);
        assert_eq!(writes[1].data, vec![0x21, 0x00, 0xc0, 0x00, 0x08]);

        // Data blocks start at wValue 2; 0 and 1 are vendor sub-commands.
        assert_eq!(writes[2].value, 2);
        assert_eq!(writes[2].data.len(), 1024);
        assert_eq!(writes[3].value, 3);
        assert_eq!(writes[3].data.len(), 512);
    }

    #[test]
    fn test_write_firmware_erases_every_touched_sector() {
        // 0x8000 bytes from 0x08000000 touch the first two 16k sectors.
        let fw = firmware(0x08000000, &vec![0x22; 0x8000]);

        let mock = MockTransport::new();
        // 2 erases + set_address + 32 downloads
        for _ in 0..35 {
            queue_download_ok(&mock);
        }

        let radio = TytRadio::new(DfuDevice::with_limits(mock, 4, 4));
        radio.write_firmware(&fw, &NullObserver).unwrap();

        let erases: Vec<_> = radio
            .dfu()
            .transport()
            .get_writes()
            .into_iter()
            .filter(|w| w.data.first() == Some(&0x41))
            .collect();
        assert_eq!(erases.len(), 2);
        assert_eq!(erases[0].data, vec![0x41, 0x00, 0x00, 0x00, 0x08]);
        assert_eq!(erases[1].data, vec![0x41, 0x00, 0x40, 0x00, 0x08]);
    }

    #[test]
    fn test_write_firmware_rejects_unmapped_segment() {
        // 0x20000000 is RAM, not covered by the STM32F40X map.
        let fw = firmware(0x20000000, &[0x33; 512]);

        let radio = TytRadio::new(DfuDevice::with_limits(MockTransport::new(), 4, 4));
        let err = radio.write_firmware(&fw, &NullObserver).unwrap_err();
        assert!(matches!(
            err,
            RadioError::Flash(FlashError::UnmappedAddress { .. })
        ));

        // Nothing was sent to the device.
        assert!(radio.dfu().transport().get_writes().is_empty());
    }

    #[test]
    fn test_flash_map_known_models() {
        assert!(TytRadio::<MockTransport>::flash_map("MD9600").is_some());
        assert!(TytRadio::<MockTransport>::flash_map("UV3X0 GPS").is_some());
        assert!(TytRadio::<MockTransport>::flash_map("GD77").is_none());
    }
}
