//! Flash session - high-level orchestrator for the whole flash process.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::dfu::DfuDevice;
use crate::events::{FlashEvent, FlashObserver, FlashPhase, TracingObserver};
use crate::fw;
use crate::radio::TytRadio;
use crate::transport::{DfuTransport, NusbTransport, TransportError};

/// Configuration for a flash session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashConfig {
    /// Path to the firmware container file.
    pub firmware_path: String,
    /// USB vendor ID override.
    pub vendor_id: Option<u16>,
    /// USB product ID override.
    pub product_id: Option<u16>,
    /// Skip the device model check before writing.
    pub skip_model_check: bool,
    /// How long to wait for the device to enumerate, in seconds.
    pub wait_timeout_secs: u64,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            firmware_path: String::new(),
            vendor_id: None,
            product_id: None,
            skip_model_check: false,
            wait_timeout_secs: 30,
        }
    }
}

impl FlashConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FlashConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Flash session - orchestrates the complete firmware write.
pub struct FlashSession<O: FlashObserver> {
    config: FlashConfig,
    observer: Arc<O>,
}

impl FlashSession<TracingObserver> {
    /// Create a new session with the default tracing observer.
    pub fn new(config: FlashConfig) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }
}

impl<O: FlashObserver + 'static> FlashSession<O> {
    /// Create a new session with a custom observer.
    pub fn with_observer(config: FlashConfig, observer: Arc<O>) -> Self {
        Self { config, observer }
    }

    /// Run the complete flash session.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!(path = %self.config.firmware_path, "Loading firmware");
        let mut firmware = fw::read_file(self.config.firmware_path.as_ref())?;
        info!(model = %firmware.radio_model(), "Firmware parsed");

        self.observer.on_event(&FlashEvent::PhaseChanged {
            phase: FlashPhase::Connecting,
        });
        let transport = self.wait_for_device()?;
        self.observer.on_event(&FlashEvent::DeviceConnected {
            vid: transport.vendor_id(),
            pid: transport.product_id(),
        });

        let radio = TytRadio::new(DfuDevice::new(transport));

        let device_model = radio.identify()?;
        self.observer.on_event(&FlashEvent::DeviceIdentified {
            model: device_model.clone(),
        });

        // The device reports the header-style model string, the container
        // resolves to a display name. Compare with separators stripped.
        if !self.config.skip_model_check
            && !models_match(&device_model, firmware.radio_model())
        {
            return Err(anyhow!(
                "Firmware is for {} but the connected radio reports {}",
                firmware.radio_model(),
                device_model
            ));
        }
        if self.config.skip_model_check {
            warn!(
                device = %device_model,
                firmware = %firmware.radio_model(),
                "Model check skipped"
            );
        }

        radio.dfu().enter_dfu_mode()?;
        radio.dfu().programming_mode()?;
        radio.dfu().wait_for_idle()?;
        firmware.decrypt()?;
        radio.write_firmware(firmware.as_ref(), self.observer.as_ref())?;

        info!("Flash complete, rebooting radio");
        radio.dfu().reboot()?;
        Ok(())
    }

    fn wait_for_device(&self) -> Result<NusbTransport> {
        info!("Waiting for device...");
        let timeout = Duration::from_secs(self.config.wait_timeout_secs.max(1));
        let start = std::time::Instant::now();

        loop {
            let result = match (self.config.vendor_id, self.config.product_id) {
                (Some(vid), Some(pid)) => NusbTransport::open_with_ids(vid, pid),
                _ => NusbTransport::open(),
            };
            match result {
                Ok(t) => {
                    info!(
                        vid = format!("{:04X}", t.vendor_id()),
                        pid = format!("{:04X}", t.product_id()),
                        "Device found"
                    );
                    return Ok(t);
                }
                Err(TransportError::DeviceNotFound { .. }) => {
                    if start.elapsed() > timeout {
                        return Err(anyhow!(
                            "Timeout waiting for device after {}s",
                            timeout.as_secs()
                        ));
                    }
                    thread::sleep(Duration::from_millis(250));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Compare the model string the radio reports against a firmware display
/// name. The radio reports header-style strings like `MD-UV380` while
/// display names read `UV3X0` or `UV3X0 GPS`; the cipher registry maps
/// one onto the other.
pub fn models_match(device: &str, firmware_display: &str) -> bool {
    let norm = |s: &str| {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect::<String>()
    };
    let expected = match crate::fw::cipher::model_by_name(firmware_display) {
        Some(entry) => entry.firmware_model,
        None => firmware_display,
    };
    norm(device) == norm(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_match() {
        assert!(models_match("MD-9600", "MD9600"));
        assert!(models_match("MD-UV380", "UV3X0"));
        assert!(models_match("MD-UV380", "UV3X0 GPS"));
        assert!(models_match("MD-2017", "MD2017 GPS"));
        assert!(!models_match("MD-9600", "MD380"));
        // Unregistered names fall back to a literal comparison.
        assert!(models_match("XYZ-1", "xyz1"));
    }

    #[test]
    fn test_config_round_trip() {
        let config = FlashConfig {
            firmware_path: "fw.bin".into(),
            vendor_id: Some(0x0483),
            product_id: Some(0xdf11),
            skip_model_check: true,
            wait_timeout_secs: 10,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: FlashConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.firmware_path, "fw.bin");
        assert_eq!(back.vendor_id, Some(0x0483));
        assert!(back.skip_model_check);
    }

    #[test]
    fn test_default_config() {
        let config = FlashConfig::default();
        assert!(!config.skip_model_check);
        assert_eq!(config.wait_timeout_secs, 30);
    }
}
