//! Per-model cipher registry.
//!
//! TYT firmware payloads are obscured with a fixed per-model XOR keystream.
//! A short "counter magic" byte sequence in the container header identifies
//! the radio model and selects the keystream. Both tables are immutable and
//! built at compile time; registration order is fixed and significant
//! because some model variants share a display name and differ only in the
//! magic bytes (first match wins, which makes round-trips lossy for those
//! variants).

mod keys;

/// Start-of-file magic, `"OutSecurityBin\0\0"`.
pub const MAGIC_BEGIN: [u8; 16] = [
    0x4f, 0x75, 0x74, 0x53, 0x65, 0x63, 0x75, 0x72, 0x69, 0x74, 0x79, 0x42, 0x69, 0x6e, 0x00, 0x00,
];

/// End-of-file magic, `"OutputBinDataEnd"`.
pub const MAGIC_END: [u8; 16] = [
    0x4f, 0x75, 0x74, 0x70, 0x75, 0x74, 0x42, 0x69, 0x6e, 0x44, 0x61, 0x74, 0x61, 0x45, 0x6e, 0x64,
];

// Counter magic values per model variant.
//
// +GPS = GPS and non-GPS firmware share the magic
// CSV  = DMR contact database upload support
// REC  = recording support
const MD2017_D: &[u8] = &[0x02, 0x19, 0x0c]; // MD-2017 (REC)
const MD2017_S: &[u8] = &[0x02, 0x18, 0x0c]; // MD-2017 GPS (REC)
const MD2017_V: &[u8] = &[0x01, 0x19]; // MD-2017 (CSV)
const MD2017_P: &[u8] = &[0x01, 0x18]; // MD-2017 GPS (CSV)
const MD9600: &[u8] = &[0x01, 0x14]; // MD-9600 (REC/CSV) +GPS
const UV3X0_GPS: &[u8] = &[0x02, 0x16, 0x0c]; // MD-UV3X0 (REC/CSV)(GPS) / RT3S
const UV3X0: &[u8] = &[0x02, 0x17, 0x0c]; // MD-UV3X0 (REC/CSV) / RT3S
const DM1701: &[u8] = &[0x01, 0x0f]; // DM-1701
const MD390: &[u8] = &[0x01, 0x10]; // MD-390
const MD380: &[u8] = &[0x01, 0x0d]; // MD-380 / MD-446
const MD280: &[u8] = &[0x01, 0x1b]; // MD-280

/// One radio-model registration.
#[derive(Debug, Clone, Copy)]
pub struct ModelEntry {
    /// Display model name.
    pub model: &'static str,
    /// Model string stored in the container header. Not the same thing as
    /// the display name.
    pub firmware_model: &'static str,
    /// Counter-magic sequence, length byte included.
    pub magic: &'static [u8],
}

const fn entry(model: &'static str, firmware_model: &'static str, magic: &'static [u8]) -> ModelEntry {
    ModelEntry {
        model,
        firmware_model,
        magic,
    }
}

/// Counter-magic registrations, in resolution order.
pub static MODEL_TABLE: &[ModelEntry] = &[
    entry("MD2017", "MD-2017", MD2017_D),
    entry("MD2017 GPS", "MD-2017", MD2017_S),
    entry("MD2017", "MD-2017", MD2017_V),
    entry("MD2017 GPS", "MD-2017", MD2017_P),
    entry("MD9600", "MD-9600", MD9600),
    entry("UV3X0 GPS", "MD-UV380", UV3X0_GPS),
    entry("UV3X0", "MD-UV380", UV3X0),
    entry("DM1701", "DM-1701", DM1701),
    entry("MD390", "MD-390", MD390),
    entry("MD380", "MD-380", MD380),
    entry("MD280", "MD-280", MD280),
];

/// Keystream registrations, keyed by display model.
pub static CIPHER_TABLE: &[(&str, &[u8])] = &[
    ("MD2017", &keys::UV3X0),
    ("MD2017 GPS", &keys::UV3X0),
    ("MD9600", &keys::MD9600),
    ("UV3X0", &keys::UV3X0),
    ("UV3X0 GPS", &keys::UV3X0),
    ("DM1701", &keys::DM1701),
    ("MD390", &keys::MD380),
    ("MD380", &keys::MD380),
    ("MD280", &keys::MD380),
];

/// Resolve the registration for a counter-magic sequence.
///
/// First registration wins; variants with overlapping display names are
/// indistinguishable from the name alone.
pub fn model_from_magic(magic: &[u8]) -> Option<&'static ModelEntry> {
    MODEL_TABLE.iter().find(|e| e.magic == magic)
}

/// Registration for a display model (first match).
pub fn model_by_name(model: &str) -> Option<&'static ModelEntry> {
    MODEL_TABLE.iter().find(|e| e.model == model)
}

/// Keystream for a display model.
pub fn keystream_for_model(model: &str) -> Option<&'static [u8]> {
    CIPHER_TABLE
        .iter()
        .find(|(m, _)| *m == model)
        .map(|(_, key)| *key)
}

/// XOR `data` in place with a cyclically repeated keystream.
///
/// XOR is involutory, so the same call encrypts and decrypts.
pub fn apply_xor(data: &mut [u8], keystream: &[u8]) {
    for (i, b) in data.iter_mut().enumerate() {
        *b ^= keystream[i % keystream.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_magic() {
        assert_eq!(model_from_magic(&[0x01, 0x14]).unwrap().model, "MD9600");
        assert_eq!(
            model_from_magic(&[0x02, 0x19, 0x0c]).unwrap().model,
            "MD2017"
        );
        assert!(model_from_magic(&[0x7f, 0x7f]).is_none());
    }

    #[test]
    fn test_magic_prefix_is_not_a_match() {
        // Exact match only: a 2-byte magic must not resolve a 3-byte entry.
        assert!(model_from_magic(&[0x02, 0x19]).is_none());
    }

    #[test]
    fn test_first_registration_wins() {
        // MD2017 has two registered variants sharing the display name.
        assert_eq!(model_by_name("MD2017").unwrap().magic, MD2017_D);
    }

    #[test]
    fn test_every_model_has_a_keystream() {
        for e in MODEL_TABLE {
            let key = keystream_for_model(e.model);
            assert!(key.is_some(), "no keystream registered for {}", e.model);
            assert_eq!(key.unwrap().len(), 1024);
        }
    }

    #[test]
    fn test_xor_involution() {
        for (model, key) in CIPHER_TABLE {
            let original: Vec<u8> = (0..4096).map(|i| (i % 251) as u8).collect();
            let mut data = original.clone();
            apply_xor(&mut data, key);
            assert_ne!(data, original, "keystream for {model} is a no-op");
            apply_xor(&mut data, key);
            assert_eq!(data, original);
        }
    }
}
