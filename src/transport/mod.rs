use crate::Frame;
use async_hal::io::AsyncWrite;
use core::{
    pin::Pin,
    task::{Context, Poll},
};
use futures::{ready, Sink};
use pin_project_lite::pin_project;

pub mod writer;
pub use writer::Writer;

pin_project! {
    /// [`Sink`] for frames over a serial line.
    ///
    /// Each frame's bytes are drained through the underlying writer before
    /// the sink becomes ready for the next one.
    pub struct Transport<W> {
        #[pin]
        serial: W,
        pending: Option<Frame>,
        pos: usize,
    }
}

impl<W> Transport<W> {
    pub fn new(serial: W) -> Self {
        Self {
            serial,
            pending: None,
            pos: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.serial
    }
}

impl<W> Transport<W>
where
    W: AsyncWrite,
{
    fn poll_drain(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), W::Error>> {
        let mut me = self.project();
        loop {
            let (used, len) = match me.pending {
                Some(frame) => {
                    let bytes = frame.as_ref();
                    let used = ready!(me.serial.as_mut().poll_write(cx, &bytes[*me.pos..]))?;
                    (used, bytes.len())
                }
                None => break,
            };

            *me.pos += used;
            if *me.pos == len {
                *me.pending = None;
                *me.pos = 0;
            }
        }

        Poll::Ready(Ok(()))
    }
}

impl<W> Sink<Frame> for Transport<W>
where
    W: AsyncWrite,
{
    type Error = W::Error;

    fn poll_ready(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Self::Error>> {
        self.poll_drain(cx)
    }

    fn start_send(self: Pin<&mut Self>, frame: Frame) -> Result<(), Self::Error> {
        let me = self.project();
        *me.pending = Some(frame);
        *me.pos = 0;

        Ok(())
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Self::Error>> {
        ready!(self.as_mut().poll_drain(cx))?;
        self.project().serial.poll_flush(cx)
    }

    fn poll_close(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Self::Error>> {
        self.poll_flush(cx)
    }
}
