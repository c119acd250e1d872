use crate::{frame::DEV_TF, Frame, BOOT_DELAY_MS, SETTLE_DELAY_MS};
use async_hal::delay::DelayMs;
use core::pin::Pin;
use futures::{future, Sink, SinkExt};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error<T, D> {
    Transmit(T),
    Delay(D),
}

/// Async driver for a serial-controlled MP3 board.
///
/// Same command surface and connected-gate as the blocking
/// [`Player`](crate::player::Player), over any [`Sink`] of frames.
pub struct Writer<T, D> {
    transport: T,
    delay: D,
    is_connected: bool,
}

impl<T, D> Writer<T, D>
where
    T: Sink<Frame> + Unpin,
    D: DelayMs + Unpin,
    D::Delay: From<u8>,
{
    pub fn new(transport: T, delay: D) -> Self {
        Self {
            transport,
            delay,
            is_connected: false,
        }
    }

    /// Wake the board and select the TF card as the playback source.
    pub async fn connect(&mut self) -> Result<(), Error<T::Error, D::Error>> {
        self.is_connected = true;
        self.sleep(BOOT_DELAY_MS).await?;
        self.send(Frame::select_device(DEV_TF)).await
    }

    /// Set the playback volume, truncated to its low 8 bits.
    pub async fn set_volume(&mut self, volume: u16) -> Result<(), Error<T::Error, D::Error>> {
        if !self.is_connected {
            return Ok(());
        }

        self.send(Frame::volume(volume as u8)).await
    }

    /// Play the track at `index` in the device's file table.
    pub async fn play_index(&mut self, index: u16) -> Result<(), Error<T::Error, D::Error>> {
        if !self.is_connected {
            return Ok(());
        }

        self.send(Frame::play_index(index)).await
    }

    /// Play `/FF/NNNxxx.mp3` by folder name and file name.
    pub async fn play_folder_file(
        &mut self,
        folder: u8,
        file: u8,
    ) -> Result<(), Error<T::Error, D::Error>> {
        if !self.is_connected {
            return Ok(());
        }

        self.send(Frame::play_folder_file(folder, file)).await
    }

    /// Stop playback.
    pub async fn stop(&mut self) -> Result<(), Error<T::Error, D::Error>> {
        if !self.is_connected {
            return Ok(());
        }

        self.send(Frame::stop()).await
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    /// Release the transport and delay provider.
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    async fn send(&mut self, frame: Frame) -> Result<(), Error<T::Error, D::Error>> {
        self.transport.send(frame).await.map_err(Error::Transmit)?;
        self.sleep(SETTLE_DELAY_MS).await
    }

    async fn sleep(&mut self, ms: u8) -> Result<(), Error<T::Error, D::Error>> {
        self.delay.start(ms.into()).map_err(Error::Delay)?;
        future::poll_fn(|cx| Pin::new(&mut self.delay).poll_delay_ms(cx))
            .await
            .map_err(Error::Delay)
    }
}
