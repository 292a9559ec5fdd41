//! TYT firmware container codec.
//!
//! On-disk layout:
//!
//! ```text
//! 0x000  16B  start magic "OutSecurityBin\0\0"
//! 0x010  16B  NUL-padded model string
//! 0x020  16B  4 reserved u32 fields
//! 0x030  76B  counter-magic block (byte0 = magic length <= 3)
//! 0x07c   4B  region count (0xFFFFFFFF means 1)
//! 0x080       region table, N x (addr u32 LE, len u32 LE), 0xFF pad to 0x80B
//! 0x100       payload, sum(len) bytes
//!        ...  0xFF pad
//!        16B  end magic "OutputBinDataEnd"
//! ```
//!
//! The footer is unauthenticated: ignored on read, regenerated on write.
//! A byte-for-byte reproduction of an original file is not guaranteed;
//! filler in reserved ranges may differ, and model variants sharing a
//! display name resolve to the first registration.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use tracing::debug;

use super::cipher::{self, MAGIC_BEGIN, MAGIC_END};
use super::{FirmwareError, FirmwareSegment, FirmwareSupport, PayloadState};

/// Size of the fixed header block, up to the region table.
const HEADER_SIZE: usize = 0x80;
/// Maximum size of the region table; caps the region count at 16.
const REGION_TABLE_SIZE: usize = 0x80;
/// Offset of the payload in the file.
const PAYLOAD_OFFSET: usize = 0x100;
/// Appended segments are padded to this boundary.
const SEGMENT_ALIGN: usize = 0x200;

/// Reserved header words. n2 appears to be some kind of bootloader
/// version.
const RESERVED_N1: u32 = 0x30000230;
const RESERVED_N2: u32 = 0x47004000;

/// A parsed TYT firmware container. Exclusively owns its payload;
/// encrypt/decrypt mutate it in place.
#[derive(Debug, Clone)]
pub struct TytFirmware {
    /// Model string from the container header.
    firmware_model: String,
    /// Counter-magic sequence, length byte included.
    counter_magic: Vec<u8>,
    /// Display model resolved from the counter magic.
    radio_model: &'static str,
    /// Destination (address, length) pairs, in declared order.
    regions: Vec<(u32, u32)>,
    /// The firmware binary.
    payload: Vec<u8>,
    state: PayloadState,
}

/// Probe for the factory: does this look like a TYT container we can
/// decode?
pub fn supports(data: &[u8]) -> bool {
    TytFirmware::parse(data).is_ok()
}

/// Loader for the factory.
pub fn load(data: &[u8]) -> Result<Box<dyn FirmwareSupport>, FirmwareError> {
    Ok(Box::new(TytFirmware::parse(data)?))
}

impl TytFirmware {
    /// Start an empty container for `model`, for the construction path.
    pub fn for_model(model: &str) -> Result<Self, FirmwareError> {
        let entry = cipher::model_by_name(model)
            .ok_or_else(|| FirmwareError::UnsupportedModel(model.to_string()))?;
        Ok(Self {
            firmware_model: entry.firmware_model.to_string(),
            counter_magic: entry.magic.to_vec(),
            radio_model: entry.model,
            regions: Vec::new(),
            payload: Vec::new(),
            state: PayloadState::Plaintext,
        })
    }

    /// Parse a container from raw file bytes. The payload of a file on
    /// disk is enciphered, so the result is tagged [`PayloadState::Ciphertext`].
    pub fn parse(data: &[u8]) -> Result<Self, FirmwareError> {
        if data.len() < PAYLOAD_OFFSET {
            return Err(FirmwareError::PayloadTruncated {
                expected: PAYLOAD_OFFSET,
                actual: data.len(),
            });
        }

        if data[0..16] != MAGIC_BEGIN {
            return Err(FirmwareError::InvalidStartMagic);
        }

        let firmware_model = {
            let raw = &data[0x10..0x20];
            let len = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
            String::from_utf8_lossy(&raw[..len]).into_owned()
        };

        // 4 reserved u32 fields at 0x20..0x30, regenerated on write.

        let counter_block = &data[0x30..0x7c];
        let magic_len = counter_block[0];
        if magic_len > 3 {
            return Err(FirmwareError::InvalidCounterMagicLength(magic_len));
        }
        let counter_magic = counter_block[..1 + magic_len as usize].to_vec();
        let entry = cipher::model_from_magic(&counter_magic)
            .ok_or(FirmwareError::UnsupportedCounterMagic)?;

        let mut cursor = Cursor::new(&data[0x7c..]);
        let mut n_regions = cursor.read_u32::<LittleEndian>()?;
        if n_regions == u32::MAX {
            // Legacy files leave the count unfilled; they carry one region.
            n_regions = 1;
        }
        if n_regions as usize * 8 > REGION_TABLE_SIZE {
            return Err(FirmwareError::RegionCountOutOfBounds(n_regions));
        }

        let mut regions = Vec::with_capacity(n_regions as usize);
        let mut payload_size = 0usize;
        for _ in 0..n_regions {
            let addr = cursor.read_u32::<LittleEndian>()?;
            let len = cursor.read_u32::<LittleEndian>()?;
            regions.push((addr, len));
            payload_size += len as usize;
        }

        let payload_end = PAYLOAD_OFFSET + payload_size;
        if data.len() < payload_end {
            return Err(FirmwareError::PayloadTruncated {
                expected: payload_size,
                actual: data.len().saturating_sub(PAYLOAD_OFFSET),
            });
        }
        let payload = data[PAYLOAD_OFFSET..payload_end].to_vec();
        // Trailing bytes are an unauthenticated footer; ignore them.

        debug!(
            model = entry.model,
            regions = regions.len(),
            payload = payload.len(),
            "Parsed TYT firmware container"
        );

        Ok(Self {
            firmware_model,
            counter_magic,
            radio_model: entry.model,
            regions,
            payload,
            state: PayloadState::Ciphertext,
        })
    }

    /// Re-target the container at another registered model. Used when
    /// wrapping a raw binary; picks the first registration for `model`.
    pub fn set_radio_model(&mut self, model: &str) -> Result<(), FirmwareError> {
        let entry = cipher::model_by_name(model)
            .ok_or_else(|| FirmwareError::UnsupportedModel(model.to_string()))?;
        self.counter_magic = entry.magic.to_vec();
        self.radio_model = entry.model;
        self.firmware_model = entry.firmware_model.to_string();
        Ok(())
    }

    /// Append a segment destined for `addr`, padding the data to the next
    /// 0x200 boundary with 0xFF filler. Construction path only: the
    /// payload must still be plaintext.
    pub fn append_segment(&mut self, addr: u32, data: &[u8]) -> Result<(), FirmwareError> {
        if self.state != PayloadState::Plaintext {
            return Err(FirmwareError::PayloadState(self.state));
        }
        let padded = data.len().div_ceil(SEGMENT_ALIGN) * SEGMENT_ALIGN;
        self.payload.extend_from_slice(data);
        self.payload.resize(self.payload.len() + (padded - data.len()), 0xff);
        self.regions.push((addr, padded as u32));
        Ok(())
    }

    pub fn payload_state(&self) -> PayloadState {
        self.state
    }

    pub fn counter_magic(&self) -> &[u8] {
        &self.counter_magic
    }

    pub fn firmware_model(&self) -> &str {
        &self.firmware_model
    }

    pub fn regions(&self) -> &[(u32, u32)] {
        &self.regions
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    fn apply_xor(&mut self) -> Result<(), FirmwareError> {
        let keystream = cipher::keystream_for_model(self.radio_model)
            .ok_or_else(|| FirmwareError::UnsupportedModel(self.radio_model.to_string()))?;
        cipher::apply_xor(&mut self.payload, keystream);
        Ok(())
    }
}

impl FirmwareSupport for TytFirmware {
    fn radio_model(&self) -> &str {
        self.radio_model
    }

    fn decrypt(&mut self) -> Result<(), FirmwareError> {
        if self.state != PayloadState::Ciphertext {
            return Err(FirmwareError::PayloadState(self.state));
        }
        self.apply_xor()?;
        self.state = PayloadState::Plaintext;
        Ok(())
    }

    fn encrypt(&mut self) -> Result<(), FirmwareError> {
        if self.state != PayloadState::Plaintext {
            return Err(FirmwareError::PayloadState(self.state));
        }
        self.apply_xor()?;
        self.state = PayloadState::Ciphertext;
        Ok(())
    }

    /// Slice the payload by cumulative region length. Region addresses
    /// are flash destinations, not payload offsets.
    fn segments(&self) -> Vec<FirmwareSegment<'_>> {
        let mut offset = 0usize;
        self.regions
            .iter()
            .enumerate()
            .map(|(idx, &(addr, len))| {
                let seg = FirmwareSegment {
                    index: idx as u16,
                    address: addr,
                    size: len,
                    data: &self.payload[offset..offset + len as usize],
                };
                offset += len as usize;
                seg
            })
            .collect()
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(PAYLOAD_OFFSET + self.payload.len() + PAYLOAD_OFFSET);

        buf.extend_from_slice(&MAGIC_BEGIN);

        let mut model = [0u8; 16];
        let n = self.firmware_model.len().min(16);
        model[..n].copy_from_slice(&self.firmware_model.as_bytes()[..n]);
        buf.extend_from_slice(&model);

        buf.write_u32::<LittleEndian>(RESERVED_N1).unwrap();
        buf.write_u32::<LittleEndian>(RESERVED_N2).unwrap();
        buf.write_u32::<LittleEndian>(0).unwrap();
        buf.write_u32::<LittleEndian>(0).unwrap();

        // Counter-magic block filler: counting bytes up to 0x20, 0xFF
        // beyond, magic overlaid at the front.
        let mut counter = [0u8; 76];
        for (cx, b) in counter.iter_mut().enumerate() {
            *b = if cx > 0x20 { 0xff } else { cx as u8 };
        }
        counter[..self.counter_magic.len()].copy_from_slice(&self.counter_magic);
        buf.extend_from_slice(&counter);

        buf.write_u32::<LittleEndian>(self.regions.len() as u32)
            .unwrap();
        debug_assert_eq!(buf.len(), HEADER_SIZE);

        for &(addr, len) in &self.regions {
            buf.write_u32::<LittleEndian>(addr).unwrap();
            buf.write_u32::<LittleEndian>(len).unwrap();
        }
        buf.resize(HEADER_SIZE + REGION_TABLE_SIZE, 0xff);

        buf.extend_from_slice(&self.payload);

        // Footer: 0xFF pad plus the end magic.
        buf.resize(buf.len() + PAYLOAD_OFFSET - MAGIC_END.len(), 0xff);
        buf.extend_from_slice(&MAGIC_END);

        buf
    }

    fn describe(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        writeln!(out, "== TYT Firmware ==").unwrap();
        writeln!(out, "Radio: {} ({})", self.firmware_model, self.radio_model).unwrap();
        writeln!(out, "Size:  {:.2} KiB", self.payload.len() as f64 / 1024.0).unwrap();
        writeln!(out, "Data Segments:").unwrap();
        for (n, &(addr, len)) in self.regions.iter().enumerate() {
            writeln!(out, "  {n}: Start=0x{addr:08x}, Length=0x{len:08x}").unwrap();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a syntactically valid container for tests.
    fn sample_container(magic: &[u8], regions: &[(u32, u32)], payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC_BEGIN);
        let mut model = [0u8; 16];
        model[..7].copy_from_slice(b"MD-9600");
        buf.extend_from_slice(&model);
        buf.extend_from_slice(&[0u8; 16]); // reserved
        let mut counter = [0xffu8; 76];
        counter[..magic.len()].copy_from_slice(magic);
        buf.extend_from_slice(&counter);
        buf.extend_from_slice(&(regions.len() as u32).to_le_bytes());
        for &(addr, len) in regions {
            buf.extend_from_slice(&addr.to_le_bytes());
            buf.extend_from_slice(&len.to_le_bytes());
        }
        buf.resize(0x100, 0xff);
        buf.extend_from_slice(payload);
        buf.resize(buf.len() + 0xf0, 0xff);
        buf.extend_from_slice(&MAGIC_END);
        buf
    }

    #[test]
    fn test_parse_resolves_model_and_keystream() {
        let payload = vec![0xaa; 0x400];
        let file = sample_container(&[0x01, 0x14], &[(0x0800c000, 0x400)], &payload);

        let fw = TytFirmware::parse(&file).unwrap();
        assert_eq!(fw.radio_model(), "MD9600");
        assert_eq!(fw.firmware_model(), "MD-9600");
        assert_eq!(fw.counter_magic(), &[0x01, 0x14]);
        assert_eq!(fw.payload_state(), PayloadState::Ciphertext);
        assert_eq!(fw.regions(), &[(0x0800c000, 0x400)]);
    }

    #[test]
    fn test_parse_rejects_bad_start_magic() {
        let mut file = sample_container(&[0x01, 0x14], &[(0, 0)], &[]);
        file[0] ^= 0xff;
        assert!(matches!(
            TytFirmware::parse(&file),
            Err(FirmwareError::InvalidStartMagic)
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_counter_magic() {
        let file = sample_container(&[0x02, 0x7f, 0x7f], &[(0, 0)], &[]);
        assert!(matches!(
            TytFirmware::parse(&file),
            Err(FirmwareError::UnsupportedCounterMagic)
        ));
    }

    #[test]
    fn test_parse_rejects_long_counter_magic() {
        let file = sample_container(&[0x04, 0x01, 0x02, 0x03, 0x04], &[(0, 0)], &[]);
        assert!(matches!(
            TytFirmware::parse(&file),
            Err(FirmwareError::InvalidCounterMagicLength(4))
        ));
    }

    #[test]
    fn test_parse_rejects_oversized_region_table() {
        let regions: Vec<(u32, u32)> = (0..17).map(|i| (i * 0x200, 0x200)).collect();
        let payload = vec![0u8; 17 * 0x200];
        let mut file = sample_container(&[0x01, 0x14], &regions, &payload);
        // region table overflows 0x80 bytes, count alone triggers it
        file[0x7c..0x80].copy_from_slice(&17u32.to_le_bytes());
        assert!(matches!(
            TytFirmware::parse(&file),
            Err(FirmwareError::RegionCountOutOfBounds(17))
        ));
    }

    #[test]
    fn test_parse_legacy_region_count_sentinel() {
        let payload = vec![0x55; 0x200];
        let mut file = sample_container(&[0x01, 0x14], &[(0x08000000, 0x200)], &payload);
        file[0x7c..0x80].copy_from_slice(&u32::MAX.to_le_bytes());

        let fw = TytFirmware::parse(&file).unwrap();
        assert_eq!(fw.regions().len(), 1);
        assert_eq!(fw.payload().len(), 0x200);
    }

    #[test]
    fn test_parse_rejects_truncated_payload() {
        let payload = vec![0xaa; 0x100];
        let file = sample_container(&[0x01, 0x14], &[(0, 0x400)], &payload);
        assert!(matches!(
            TytFirmware::parse(&file),
            Err(FirmwareError::PayloadTruncated { .. })
        ));
    }

    #[test]
    fn test_segments_cover_payload_in_order() {
        let payload: Vec<u8> = (0..0x600u32).map(|i| (i % 256) as u8).collect();
        let file = sample_container(
            &[0x01, 0x14],
            &[(0x0800c000, 0x200), (0x08010000, 0x300), (0x08020000, 0x100)],
            &payload,
        );

        let fw = TytFirmware::parse(&file).unwrap();
        let segments = fw.segments();
        assert_eq!(segments.len(), 3);

        // Sliced by cumulative length, not by destination address.
        assert_eq!(segments[0].data, &payload[0..0x200]);
        assert_eq!(segments[1].data, &payload[0x200..0x500]);
        assert_eq!(segments[2].data, &payload[0x500..0x600]);

        let total: u32 = segments.iter().map(|s| s.size).sum();
        assert_eq!(total as usize, fw.payload().len());
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.index as usize, i);
        }
    }

    #[test]
    fn test_decrypt_encrypt_round_trip() {
        let payload = vec![0x5a; 0x400];
        let file = sample_container(&[0x01, 0x14], &[(0x08000000, 0x400)], &payload);

        let mut fw = TytFirmware::parse(&file).unwrap();
        fw.decrypt().unwrap();
        assert_eq!(fw.payload_state(), PayloadState::Plaintext);
        assert_ne!(fw.payload(), &payload[..]);
        fw.encrypt().unwrap();
        assert_eq!(fw.payload(), &payload[..]);
    }

    #[test]
    fn test_double_decrypt_rejected() {
        let file = sample_container(&[0x01, 0x14], &[(0, 0x200)], &vec![0u8; 0x200]);
        let mut fw = TytFirmware::parse(&file).unwrap();
        fw.decrypt().unwrap();
        assert!(matches!(
            fw.decrypt(),
            Err(FirmwareError::PayloadState(PayloadState::Plaintext))
        ));
        fw.encrypt().unwrap();
        assert!(matches!(
            fw.encrypt(),
            Err(FirmwareError::PayloadState(PayloadState::Ciphertext))
        ));
    }

    #[test]
    fn test_write_read_round_trip() {
        let payload: Vec<u8> = (0..0x800u32).map(|i| (i * 7 % 256) as u8).collect();
        let file = sample_container(
            &[0x01, 0x14],
            &[(0x0800c000, 0x600), (0x08010000, 0x200)],
            &payload,
        );

        let fw = TytFirmware::parse(&file).unwrap();
        let rewritten = fw.to_bytes();
        let back = TytFirmware::parse(&rewritten).unwrap();

        assert_eq!(back.regions(), fw.regions());
        assert_eq!(back.payload(), fw.payload());
        assert_eq!(back.radio_model(), fw.radio_model());
        assert_eq!(back.counter_magic(), fw.counter_magic());

        // Trailer is regenerated at the expected spot.
        let tail = &rewritten[rewritten.len() - 16..];
        assert_eq!(tail, MAGIC_END);
    }

    #[test]
    fn test_append_segment_pads_to_512() {
        let mut fw = TytFirmware::for_model("MD9600").unwrap();
        fw.append_segment(0x0800c000, &[0xab; 100]).unwrap();

        assert_eq!(fw.regions(), &[(0x0800c000, 512)]);
        assert_eq!(fw.payload().len(), 512);
        assert_eq!(&fw.payload()[..100], &[0xab; 100]);
        assert!(fw.payload()[100..].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_append_segment_requires_plaintext() {
        let file = sample_container(&[0x01, 0x14], &[(0, 0x200)], &vec![0u8; 0x200]);
        let mut fw = TytFirmware::parse(&file).unwrap();
        assert!(matches!(
            fw.append_segment(0, &[1, 2, 3]),
            Err(FirmwareError::PayloadState(PayloadState::Ciphertext))
        ));
    }

    #[test]
    fn test_supports_probe() {
        let file = sample_container(&[0x01, 0x14], &[(0, 0x200)], &vec![0u8; 0x200]);
        assert!(supports(&file));
        assert!(!supports(b"garbage"));
    }
}
