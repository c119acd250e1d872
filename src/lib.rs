#![cfg_attr(not(test), no_std)]

pub mod frame;
pub use frame::{Command, Frame, DEV_TF};

#[cfg(feature = "blocking")]
pub mod player;
#[cfg(feature = "blocking")]
pub use player::Player;

#[cfg(feature = "transport")]
pub mod transport;
#[cfg(feature = "transport")]
pub use transport::Transport;

/// Boot-up pause after opening the link, before the first command.
pub const BOOT_DELAY_MS: u8 = 100;

/// Processing pause after every transmitted frame.
pub const SETTLE_DELAY_MS: u8 = 20;
