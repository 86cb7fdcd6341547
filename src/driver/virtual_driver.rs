use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::state::Dimensions;
use crate::ui::buttons::ButtonPress;

use super::{Driver, DriverError};

/// Presses waiting to be picked up by the next poll.
///
/// Clones share the same queue, so a feeder task can push while the
/// runtime owns the driver.
#[derive(Debug, Clone, Default)]
pub struct ButtonQueue {
    inner: Arc<Mutex<VecDeque<ButtonPress>>>,
}

impl ButtonQueue {
    pub fn push(&self, press: ButtonPress) {
        self.inner.lock().push_back(press);
    }

    pub fn extend(&self, presses: impl IntoIterator<Item = ButtonPress>) {
        self.inner.lock().extend(presses);
    }

    pub fn drain(&self) -> Vec<ButtonPress> {
        self.inner.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

/// Everything sent to a [`VirtualDriver`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayRecord {
    /// Contents of the display, `width * height` cells.
    pub cells: Vec<u8>,
    pub pages_sent: usize,
    pub rows_sent: usize,
    pub resets: usize,
    pub ok_sounds: usize,
    pub error_sounds: usize,
}

/// Shared view of a [`VirtualDriver`]'s display.
pub type DisplayLog = Arc<Mutex<DisplayRecord>>;

/// A display that lives in memory.
///
/// Used when no hardware is attached, and by tests. The status the next
/// transmissions answer with can be set to simulate device faults.
#[derive(Debug)]
pub struct VirtualDriver {
    dimensions: Dimensions,
    queue: ButtonQueue,
    display: DisplayLog,
    status: u8,
    online: bool,
}

impl VirtualDriver {
    pub fn new(dimensions: Dimensions) -> Self {
        let display = DisplayRecord {
            cells: vec![0; dimensions.width * dimensions.height],
            ..DisplayRecord::default()
        };
        Self {
            dimensions,
            queue: ButtonQueue::default(),
            display: Arc::new(Mutex::new(display)),
            status: 0,
            online: true,
        }
    }

    pub fn button_queue(&self) -> ButtonQueue {
        self.queue.clone()
    }

    pub fn display(&self) -> DisplayLog {
        Arc::clone(&self.display)
    }

    /// Status returned by every following transmission.
    pub fn set_status(&mut self, status: u8) {
        self.status = status;
    }

    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    fn ensure_online(&self) -> Result<(), DriverError> {
        if self.online {
            Ok(())
        } else {
            Err(DriverError::Offline)
        }
    }
}

impl Driver for VirtualDriver {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn buttons(&mut self) -> Vec<ButtonPress> {
        self.queue.drain()
    }

    fn is_ok(&self) -> bool {
        self.online
    }

    fn send_error_sound(&mut self) {
        self.display.lock().error_sounds += 1;
    }

    fn send_ok_sound(&mut self) {
        self.display.lock().ok_sounds += 1;
    }

    fn reset_display(&mut self) -> Result<(), DriverError> {
        self.ensure_online()?;
        self.display.lock().resets += 1;
        Ok(())
    }

    fn transmit_page(&mut self, cells: &[u8]) -> Result<u8, DriverError> {
        self.ensure_online()?;
        let mut display = self.display.lock();
        display.pages_sent += 1;
        if self.status == 0 {
            let n = cells.len().min(display.cells.len());
            display.cells.fill(0);
            display.cells[..n].copy_from_slice(&cells[..n]);
        }
        Ok(self.status)
    }

    fn transmit_row(&mut self, row: usize, cells: &[u8]) -> Result<u8, DriverError> {
        self.ensure_online()?;
        if row >= self.dimensions.height {
            tracing::warn!(row, height = self.dimensions.height, "row outside display");
            return Ok(1);
        }
        let mut display = self.display.lock();
        display.rows_sent += 1;
        if self.status == 0 {
            let start = row * self.dimensions.width;
            let line = &mut display.cells[start..start + self.dimensions.width];
            let n = cells.len().min(line.len());
            line.fill(0);
            line[..n].copy_from_slice(&cells[..n]);
        }
        Ok(self.status)
    }
}
