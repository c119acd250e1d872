#[cfg(feature = "blocking")]
mod tests {
    use embedded_hal::blocking::{delay::DelayMs, serial::Write};
    use serial_mp3::Player;
    use std::convert::Infallible;

    #[derive(Default)]
    struct MockSerial {
        written: Vec<u8>,
    }

    impl Write<u8> for MockSerial {
        type Error = Infallible;

        fn bwrite_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
            self.written.extend_from_slice(buffer);
            Ok(())
        }

        fn bflush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockDelay {
        slept: Vec<u8>,
    }

    impl DelayMs<u8> for MockDelay {
        fn delay_ms(&mut self, ms: u8) {
            self.slept.push(ms);
        }
    }

    fn player() -> Player<MockSerial, MockDelay> {
        Player::new(MockSerial::default(), MockDelay::default())
    }

    #[test]
    fn it_drops_commands_before_connect() {
        let mut player = player();

        player.set_volume(30).unwrap();
        player.play_index(5).unwrap();
        player.play_folder_file(1, 2).unwrap();
        player.stop().unwrap();

        assert!(!player.is_connected());

        let (serial, delay) = player.release();
        assert!(serial.written.is_empty());
        assert!(delay.slept.is_empty());
    }

    #[test]
    fn it_selects_the_tf_card_on_connect() {
        let mut player = player();
        player.connect().unwrap();

        assert!(player.is_connected());

        let (serial, delay) = player.release();
        assert_eq!(serial.written, [0x7E, 0x03, 0x35, 0x01, 0xEF]);
        assert_eq!(delay.slept, [100, 20]);
    }

    #[test]
    fn it_reconnects_safely() {
        let mut player = player();
        player.connect().unwrap();
        player.connect().unwrap();

        assert!(player.is_connected());

        let (serial, _) = player.release();
        assert_eq!(
            serial.written,
            [0x7E, 0x03, 0x35, 0x01, 0xEF, 0x7E, 0x03, 0x35, 0x01, 0xEF]
        );
    }

    #[test]
    fn it_sets_the_volume() {
        let mut player = player();
        player.connect().unwrap();
        player.set_volume(30).unwrap();

        let (serial, delay) = player.release();
        assert_eq!(serial.written[5..], [0x7E, 0x03, 0x31, 0x1E, 0xEF]);
        assert_eq!(delay.slept, [100, 20, 20]);
    }

    #[test]
    fn it_truncates_the_volume() {
        let mut player = player();
        player.connect().unwrap();
        player.set_volume(300).unwrap();

        let (serial, _) = player.release();
        assert_eq!(serial.written[5..], [0x7E, 0x03, 0x31, 0x2C, 0xEF]);
    }

    #[test]
    fn it_plays_by_index() {
        let mut player = player();
        player.connect().unwrap();
        player.play_index(5).unwrap();

        let (serial, _) = player.release();
        assert_eq!(serial.written[5..], [0x7E, 0x04, 0x41, 0x00, 0x05, 0xEF]);
    }

    #[test]
    fn it_plays_by_folder_and_file() {
        let mut player = player();
        player.connect().unwrap();
        player.play_folder_file(1, 2).unwrap();

        let (serial, _) = player.release();
        assert_eq!(serial.written[5..], [0x7E, 0x04, 0x42, 0x01, 0x02, 0xEF]);
    }

    #[test]
    fn it_stops_playback() {
        let mut player = player();
        player.connect().unwrap();
        player.stop().unwrap();

        let (serial, _) = player.release();
        assert_eq!(serial.written[5..], [0x7E, 0x02, 0x0E, 0xEF]);
    }
}
