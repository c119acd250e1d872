use crate::{frame::DEV_TF, Frame, BOOT_DELAY_MS, SETTLE_DELAY_MS};
use embedded_hal::blocking::{delay::DelayMs, serial::Write};

/// Blocking driver for a serial-controlled MP3 board.
///
/// The serial port must already be configured at 9600 baud 8N1. Commands
/// issued before [`connect`](Player::connect) are dropped without touching
/// the wire, matching the board's own "ignore if not ready" behavior.
pub struct Player<S, D> {
    serial: S,
    delay: D,
    is_connected: bool,
}

impl<S, D> Player<S, D>
where
    S: Write<u8>,
    D: DelayMs<u8>,
{
    pub fn new(serial: S, delay: D) -> Self {
        Self {
            serial,
            delay,
            is_connected: false,
        }
    }

    /// Wake the board and select the TF card as the playback source.
    ///
    /// Waits [`BOOT_DELAY_MS`] for the board to boot before sending.
    /// Calling this again re-sends the select-device frame; the driver
    /// never returns to the disconnected state.
    pub fn connect(&mut self) -> Result<(), S::Error> {
        self.is_connected = true;
        self.delay.delay_ms(BOOT_DELAY_MS);
        self.send(Frame::select_device(DEV_TF))
    }

    /// Set the playback volume, truncated to its low 8 bits.
    pub fn set_volume(&mut self, volume: u16) -> Result<(), S::Error> {
        if !self.is_connected {
            return Ok(());
        }

        self.send(Frame::volume(volume as u8))
    }

    /// Play the track at `index` in the device's file table.
    pub fn play_index(&mut self, index: u16) -> Result<(), S::Error> {
        if !self.is_connected {
            return Ok(());
        }

        self.send(Frame::play_index(index))
    }

    /// Play `/FF/NNNxxx.mp3` by folder name and file name.
    pub fn play_folder_file(&mut self, folder: u8, file: u8) -> Result<(), S::Error> {
        if !self.is_connected {
            return Ok(());
        }

        self.send(Frame::play_folder_file(folder, file))
    }

    /// Stop playback.
    pub fn stop(&mut self) -> Result<(), S::Error> {
        if !self.is_connected {
            return Ok(());
        }

        self.send(Frame::stop())
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    /// Release the serial port and delay provider.
    pub fn release(self) -> (S, D) {
        (self.serial, self.delay)
    }

    fn send(&mut self, frame: Frame) -> Result<(), S::Error> {
        self.serial.bwrite_all(frame.as_ref())?;
        self.delay.delay_ms(SETTLE_DELAY_MS);

        Ok(())
    }
}
