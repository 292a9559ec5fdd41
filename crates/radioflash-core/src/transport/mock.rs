//! Mock DFU transport for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::traits::{DfuTransport, TransportError};

/// A captured OUT transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutTransfer {
    pub request: u8,
    pub value: u16,
    pub data: Vec<u8>,
}

/// Mock transport for unit testing the DFU state machine.
///
/// IN responses are served from a queue in FIFO order regardless of the
/// request number; tests queue them in the order the driver will ask.
pub struct MockTransport {
    /// Queued IN responses.
    in_queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
    /// Captured OUT transfers.
    out_log: Arc<Mutex<Vec<OutTransfer>>>,
    /// Simulated VID/PID.
    vid: u16,
    pid: u16,
    /// Whether the device handle is "open".
    ready: Arc<Mutex<bool>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            in_queue: Arc::new(Mutex::new(VecDeque::new())),
            out_log: Arc::new(Mutex::new(Vec::new())),
            vid: 0x0483,
            pid: 0xdf11,
            ready: Arc::new(Mutex::new(true)),
        }
    }

    /// Queue an IN response to be returned on the next control_in.
    pub fn queue_response(&self, bytes: &[u8]) {
        self.in_queue.lock().unwrap().push_back(bytes.to_vec());
    }

    /// Queue a 6-byte GETSTATUS report.
    pub fn queue_status(&self, status: u8, poll_timeout_ms: u32, state: u8) {
        self.queue_response(&[
            status,
            ((poll_timeout_ms >> 16) & 0xff) as u8,
            ((poll_timeout_ms >> 8) & 0xff) as u8,
            (poll_timeout_ms & 0xff) as u8,
            state,
            0,
        ]);
    }

    /// Queue a 1-byte GETSTATE response.
    pub fn queue_state(&self, state: u8) {
        self.queue_response(&[state]);
    }

    /// Get all captured OUT transfers.
    pub fn get_writes(&self) -> Vec<OutTransfer> {
        self.out_log.lock().unwrap().clone()
    }

    /// Clear captured OUT transfers.
    pub fn clear_writes(&self) {
        self.out_log.lock().unwrap().clear();
    }

    /// Number of queued IN responses not yet consumed.
    pub fn pending_responses(&self) -> usize {
        self.in_queue.lock().unwrap().len()
    }

    /// Simulate a closed/unplugged handle.
    pub fn set_ready(&self, ready: bool) {
        *self.ready.lock().unwrap() = ready;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl DfuTransport for MockTransport {
    fn control_out(&self, request: u8, value: u16, data: &[u8]) -> Result<(), TransportError> {
        if !*self.ready.lock().unwrap() {
            return Err(TransportError::NotReady);
        }
        self.out_log.lock().unwrap().push(OutTransfer {
            request,
            value,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn control_in(&self, _request: u8, _value: u16, _length: u16) -> Result<Vec<u8>, TransportError> {
        if !*self.ready.lock().unwrap() {
            return Err(TransportError::NotReady);
        }
        self.in_queue
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(TransportError::Timeout { timeout_ms: 5000 })
    }

    fn vendor_id(&self) -> u16 {
        self.vid
    }

    fn product_id(&self) -> u16 {
        self.pid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_response_queue() {
        let mock = MockTransport::new();
        mock.queue_state(0x02);
        mock.queue_state(0x05);

        assert_eq!(mock.control_in(5, 0, 1).unwrap(), vec![0x02]);
        assert_eq!(mock.control_in(5, 0, 1).unwrap(), vec![0x05]);

        // Queue is empty now
        assert!(mock.control_in(5, 0, 1).is_err());
    }

    #[test]
    fn test_mock_write_capture() {
        let mock = MockTransport::new();
        mock.control_out(1, 2, b"abc").unwrap();
        mock.control_out(6, 0, &[]).unwrap();

        let writes = mock.get_writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].request, 1);
        assert_eq!(writes[0].value, 2);
        assert_eq!(writes[0].data, b"abc");
        assert_eq!(writes[1].request, 6);
    }

    #[test]
    fn test_mock_not_ready() {
        let mock = MockTransport::new();
        mock.set_ready(false);
        assert!(matches!(
            mock.control_out(1, 0, &[]),
            Err(TransportError::NotReady)
        ));
        assert!(matches!(
            mock.control_in(3, 0, 6),
            Err(TransportError::NotReady)
        ));
    }
}
