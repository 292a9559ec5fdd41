//! Event system for UI decoupling.
//!
//! Allows the CLI (or any other frontend) to observe flashing progress
//! without tight coupling to the core logic.

use std::fmt;

/// Phases of a flashing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    /// Opening and identifying the device.
    Connecting,
    /// Erasing the sectors touched by a segment.
    Erase,
    /// Programming segment data.
    Program,
    /// All operations complete.
    Complete,
}

impl fmt::Display for FlashPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashPhase::Connecting => write!(f, "Connecting"),
            FlashPhase::Erase => write!(f, "Erase"),
            FlashPhase::Program => write!(f, "Program"),
            FlashPhase::Complete => write!(f, "Complete"),
        }
    }
}

/// Events emitted during a flashing session.
#[derive(Debug, Clone)]
pub enum FlashEvent {
    /// Device connected.
    DeviceConnected { vid: u16, pid: u16 },
    /// Device reported its model string.
    DeviceIdentified { model: String },
    /// Phase changed.
    PhaseChanged { phase: FlashPhase },
    /// A sector-aligned erase was issued.
    SectorErased { address: u32, sector_index: u16 },
    /// Progress within the current segment.
    Progress {
        segment: u16,
        written: u64,
        total: u64,
    },
    /// All operations completed successfully.
    Complete,
}

/// Observer trait for receiving flash events.
pub trait FlashObserver: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: &FlashEvent);
}

/// No-op observer that discards all events.
pub struct NullObserver;

impl FlashObserver for NullObserver {
    fn on_event(&self, _event: &FlashEvent) {
        // Do nothing
    }
}

/// Observer that logs events using tracing.
pub struct TracingObserver;

impl FlashObserver for TracingObserver {
    fn on_event(&self, event: &FlashEvent) {
        match event {
            FlashEvent::DeviceConnected { vid, pid } => {
                tracing::info!(vid = %format!("{:04X}", vid), pid = %format!("{:04X}", pid), "Device connected");
            }
            FlashEvent::DeviceIdentified { model } => {
                tracing::info!(model = %model, "Device identified");
            }
            FlashEvent::PhaseChanged { phase } => {
                tracing::info!(phase = %phase, "Phase changed");
            }
            FlashEvent::SectorErased {
                address,
                sector_index,
            } => {
                tracing::debug!(
                    address = %format!("0x{:08x}", address),
                    sector = sector_index,
                    "Sector erased"
                );
            }
            FlashEvent::Progress {
                segment,
                written,
                total,
            } => {
                let pct = if *total > 0 {
                    (*written * 100) / *total
                } else {
                    0
                };
                tracing::debug!(segment = segment, progress = %format!("{}%", pct), "Progress");
            }
            FlashEvent::Complete => {
                tracing::info!("Operation complete");
            }
        }
    }
}
