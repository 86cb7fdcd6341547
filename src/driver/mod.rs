//! The braille display and its buttons.
//!
//! A page is `width * height` cells, each a dot pattern from 0 to 63.
//! Turning text into patterns is the caller's business; the driver only
//! moves cells to the device and reports what the device answers.

mod virtual_driver;

use thiserror::Error;

use crate::state::Dimensions;
use crate::ui::buttons::ButtonPress;

pub use virtual_driver::{ButtonQueue, DisplayLog, DisplayRecord, VirtualDriver};

/// Highest dot pattern a cell can show (all six dots raised).
pub const ALL_DOTS: u8 = 63;

/// Errors reported by the display hardware.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The device answered a transmission with a non-zero status.
    #[error("got an error after setting braille: {status}")]
    Status { status: u8 },

    #[error("display is not responding")]
    Offline,
}

/// Capabilities of a braille display.
///
/// Implementors supply the raw transport; truncation and status checks are
/// shared by the provided methods.
pub trait Driver: Send {
    /// Cells per row and rows per page.
    fn dimensions(&self) -> Dimensions;

    /// Buttons pressed since the last poll, in the order they were pressed.
    fn buttons(&mut self) -> Vec<ButtonPress>;

    fn is_ok(&self) -> bool;

    fn send_error_sound(&mut self);

    fn send_ok_sound(&mut self);

    /// Lower and re-raise every pin.
    fn reset_display(&mut self) -> Result<(), DriverError>;

    /// Send a full page and return the device status.
    fn transmit_page(&mut self, cells: &[u8]) -> Result<u8, DriverError>;

    /// Send one row and return the device status.
    fn transmit_row(&mut self, row: usize, cells: &[u8]) -> Result<u8, DriverError>;

    fn page_length(&self) -> usize {
        let dimensions = self.dimensions();
        dimensions.width * dimensions.height
    }

    /// Show `cells` as a full page.
    fn set_braille(&mut self, cells: &[u8]) -> Result<(), DriverError> {
        let page_length = self.page_length();
        let cells = if cells.len() > page_length {
            tracing::warn!(
                length = cells.len(),
                page_length,
                "page data too long, truncating"
            );
            &cells[..page_length]
        } else {
            cells
        };
        check_status(self.transmit_page(cells)?)
    }

    /// Show `cells` on row `row` only.
    fn set_braille_row(&mut self, row: usize, cells: &[u8]) -> Result<(), DriverError> {
        let width = self.dimensions().width;
        let cells = if cells.len() > width {
            tracing::warn!(length = cells.len(), width, "row data too long, truncating");
            &cells[..width]
        } else {
            cells
        };
        check_status(self.transmit_row(row, cells)?)
    }

    fn clear_page(&mut self) -> Result<(), DriverError> {
        let blank = vec![0; self.page_length()];
        self.set_braille(&blank)
    }
}

fn check_status(status: u8) -> Result<(), DriverError> {
    match status {
        0 => Ok(()),
        status => Err(DriverError::Status { status }),
    }
}
