/// First byte of every frame.
pub const START: u8 = 0x7E;

/// Last byte of every frame.
pub const END: u8 = 0xEF;

/// Device selector for the TF (micro SD) card slot.
pub const DEV_TF: u8 = 1;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Stop = 0x0E,
    SetVolume = 0x31,
    SelectDevice = 0x35,
    PlayIndex = 0x41,
    PlayFolderFile = 0x42,
    /// Part of the board's command set but not wired to any driver operation.
    InjectIndex = 0x43,
}

/// A complete command frame as transmitted on the wire.
///
/// Frames come in three fixed shapes, distinguished by the length byte:
///
/// | Length | Layout               |
/// |--------|----------------------|
/// | `0x02` | `7E 02 CMD EF`       |
/// | `0x03` | `7E 03 CMD D0 EF`    |
/// | `0x04` | `7E 04 CMD D1 D0 EF` |
///
/// 16-bit payloads are big-endian (`D1` high, `D0` low).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; 6],
    len: usize,
}

impl Frame {
    /// Create a payload-less frame.
    pub fn new(command: Command) -> Self {
        let mut bytes = [0; 6];
        bytes[0] = START;
        bytes[1] = 0x02;
        bytes[2] = command as u8;
        bytes[3] = END;

        Self { bytes, len: 4 }
    }

    /// Create a frame with a single data byte.
    pub fn with_byte(command: Command, dat: u8) -> Self {
        let mut bytes = [0; 6];
        bytes[0] = START;
        bytes[1] = 0x03;
        bytes[2] = command as u8;
        bytes[3] = dat;
        bytes[4] = END;

        Self { bytes, len: 5 }
    }

    /// Create a frame with a 16-bit big-endian payload.
    pub fn with_word(command: Command, dat: u16) -> Self {
        let mut bytes = [0; 6];
        bytes[0] = START;
        bytes[1] = 0x04;
        bytes[2] = command as u8;
        bytes[3] = (dat >> 8) as u8;
        bytes[4] = dat as u8;
        bytes[5] = END;

        Self { bytes, len: 6 }
    }

    /// Select the playback source, typically [`DEV_TF`].
    pub fn select_device(device: u8) -> Self {
        Self::with_byte(Command::SelectDevice, device)
    }

    pub fn volume(volume: u8) -> Self {
        Self::with_byte(Command::SetVolume, volume)
    }

    /// Play the track at `index` in the device's file table.
    pub fn play_index(index: u16) -> Self {
        Self::with_word(Command::PlayIndex, index)
    }

    /// Play `/FF/NNNxxx.mp3`, where `FF` is the folder name and `NNN` the
    /// file name, packed into one word.
    pub fn play_folder_file(folder: u8, file: u8) -> Self {
        Self::with_word(Command::PlayFolderFile, ((folder as u16) << 8) | file as u16)
    }

    pub fn stop() -> Self {
        Self::new(Command::Stop)
    }

    pub fn command(&self) -> Option<Command> {
        let command = match self.bytes[2] {
            0x0E => Command::Stop,
            0x31 => Command::SetVolume,
            0x35 => Command::SelectDevice,
            0x41 => Command::PlayIndex,
            0x42 => Command::PlayFolderFile,
            0x43 => Command::InjectIndex,
            _ => return None,
        };

        Some(command)
    }

    /// Data bytes between the command byte and the end marker.
    pub fn data(&self) -> &[u8] {
        &self.bytes[3..self.len - 1]
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
