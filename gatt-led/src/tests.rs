use super::*;

/// Records the last level of each pin and how many writes happened.
#[derive(Default)]
struct Pins {
    led1: bool,
    led2: bool,
    writes: usize,
}

impl LedPins for Pins {
    fn set_led1(&mut self, on: bool) {
        self.led1 = on;
        self.writes += 1;
    }

    fn set_led2(&mut self, on: bool) {
        self.led2 = on;
        self.writes += 1;
    }
}

fn device() -> Device<Pins> {
    Device::new(LedController::new(Pins::default()))
}

fn lit(device: &Device<Pins>) -> (bool, bool) {
    let pins = device.leds().pins();
    (pins.led1, pins.led2)
}

#[test]
fn starts_all_off() {
    let device = device();
    assert_eq!(device.led_state(), LedState::AllOff);
    assert_eq!(lit(&device), (false, false));
    assert_eq!(device.leds().pins().writes, 2);
}

#[test]
fn readout_starts_zeroed() {
    let mut device = device();
    assert_eq!(device.readout().as_slice(), &[0; consts::READOUT_LEN]);
    assert_eq!(ReadoutBuffer::default(), ReadoutBuffer::new());

    device.handle_write(&[2]);
    assert_eq!(device.readout().as_slice(), &[2]);
}

#[test]
fn single_byte_commands() {
    let expected = [
        (0u8, LedState::AllOff, (false, false)),
        (1, LedState::Led1On, (true, false)),
        (2, LedState::Led2On, (false, true)),
        (3, LedState::AllOn, (true, true)),
    ];
    for (byte, state, levels) in expected {
        let mut device = device();
        assert_eq!(device.handle_write(&[byte]), WriteOutcome::Applied(state));
        assert_eq!(device.led_state(), state);
        assert_eq!(lit(&device), levels);
        assert_eq!(device.readout().as_slice(), &[byte]);

        // Same command again, same result
        assert_eq!(device.handle_write(&[byte]), WriteOutcome::Applied(state));
        assert_eq!(lit(&device), levels);
    }
}

#[test]
fn every_state_writes_both_pins() {
    let mut device = device();
    let before = device.leds().pins().writes;
    device.handle_write(&[1]);
    device.handle_write(&[1]);
    assert_eq!(device.leds().pins().writes, before + 4);
}

#[test]
fn unknown_byte_keeps_state() {
    let mut device = device();
    device.handle_write(&[2]);
    for byte in 4..=u8::MAX {
        assert_eq!(device.handle_write(&[byte]), WriteOutcome::Ignored(byte));
        assert_eq!(device.led_state(), LedState::Led2On);
        assert_eq!(lit(&device), (false, true));
        assert_eq!(device.readout().as_slice(), &[byte]);
    }
}

#[test]
fn multi_byte_write_is_diagnostic() {
    let mut device = device();
    device.handle_write(&[3]);

    assert_eq!(device.handle_write(&[1, 2]), WriteOutcome::Diagnostic { len: 2 });
    assert_eq!(device.led_state(), LedState::AllOn);
    assert_eq!(lit(&device), (true, true));
    assert_eq!(device.readout().as_slice(), &[1, 2]);
}

#[test]
fn empty_write_clears_readout() {
    let mut device = device();
    device.handle_write(&[1]);
    assert_eq!(device.handle_write(&[]), WriteOutcome::Diagnostic { len: 0 });
    assert_eq!(device.led_state(), LedState::Led1On);
    assert!(device.readout().as_slice().is_empty());
}

#[test]
fn echo_keeps_order_up_to_capacity() {
    let mut device = device();
    let payload = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    for len in 2..=payload.len() {
        device.handle_write(&payload[..len]);
        assert_eq!(device.readout().as_slice(), &payload[..len]);
    }
}

#[test]
fn oversized_write_is_truncated() {
    let mut device = device();
    let payload = [0xAA; 12];
    assert_eq!(device.handle_write(&payload), WriteOutcome::Diagnostic { len: 12 });
    assert_eq!(device.readout().as_slice(), &payload[..consts::READOUT_LEN]);
}

#[test]
fn all_on_then_all_off() {
    let mut device = device();
    device.handle_write(&[3]);
    assert_eq!(lit(&device), (true, true));
    assert_eq!(device.readout().as_slice(), &[3]);

    device.handle_write(&[0]);
    assert_eq!(lit(&device), (false, false));
    assert_eq!(device.readout().as_slice(), &[0]);
}

#[test]
fn buttons_report_sentinels() {
    let mut device = device();
    device.handle_write(&[3]);

    assert_eq!(device.handle_button(Button::One).as_slice(), &[4]);
    assert_eq!(device.led_state(), LedState::AllOn);

    device.handle_write(&[1, 2, 3]);
    assert_eq!(device.handle_button(Button::Two).as_slice(), &[5]);
    assert_eq!(device.readout().as_slice(), &[5]);
    assert_eq!(lit(&device), (true, true));
}

#[test]
fn last_event_wins() {
    let mut device = device();
    device.handle_button(Button::One);
    device.handle_write(&[2]);
    assert_eq!(device.readout().as_slice(), &[2]);
    device.handle_button(Button::Two);
    device.handle_button(Button::One);
    assert_eq!(device.readout().as_slice(), &[4]);
}

#[test]
fn command_parsing() {
    assert_eq!(Command::parse(&[0]), Command::Set(LedState::AllOff));
    assert_eq!(Command::parse(&[3]), Command::Set(LedState::AllOn));
    assert_eq!(Command::parse(&[7]), Command::Unknown(7));
    assert_eq!(Command::parse(&[1, 2]), Command::Diagnostic(&[1, 2]));
    assert_eq!(Command::parse(&[]), Command::Diagnostic(&[]));
}

#[test]
fn state_byte_conversions() {
    for byte in 0..=3u8 {
        let state = LedState::try_from(byte).unwrap();
        assert_eq!(u8::from(state), byte);
    }
    assert_eq!(LedState::try_from(4), Err(UnknownCommand(4)));
}

#[test]
fn startup_animation() {
    let mut steps = startup_sequence();
    for _ in 0..consts::STARTUP_ITERATIONS {
        assert_eq!(steps.next(), Some(LedState::Led1On));
        assert_eq!(steps.next(), Some(LedState::AllOn));
        assert_eq!(steps.next(), Some(LedState::Led2On));
        assert_eq!(steps.next(), Some(LedState::AllOff));
    }
    assert_eq!(steps.next(), None);

    let mut device = device();
    for state in startup_sequence() {
        device.show(state);
    }
    assert_eq!(device.led_state(), LedState::AllOff);
    assert_eq!(device.readout().as_slice(), &[0; consts::READOUT_LEN]);
}

#[test]
fn readout_classification() {
    assert_eq!(Readout::classify(&[4]), Readout::Button(Button::One));
    assert_eq!(Readout::classify(&[5]), Readout::Button(Button::Two));
    assert_eq!(Readout::classify(&[1]), Readout::Echo(LedState::Led1On));
    assert_eq!(Readout::classify(&[6]), Readout::Other);
    assert_eq!(Readout::classify(&[4, 4]), Readout::Other);
    assert_eq!(Readout::classify(&[]), Readout::Other);
}

#[test]
fn sentinels_round_trip() {
    for button in [Button::One, Button::Two] {
        assert_eq!(Button::from_sentinel(button.sentinel()), Some(button));
    }
    assert_eq!(Button::from_sentinel(0), None);
}
