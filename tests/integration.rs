//! Host-side integration scenarios over the mock platform.
//!
//! Run with `cargo test --features mock`.

use click_drivers::drivers::{adc4, battmon, compass4, eeprom5, lr10, oledw};
use click_drivers::platform::mock::{MockGpio, MockI2c, MockSpi, MockTimer, MockUart};

#[test]
fn sensor_bringup_and_first_samples() {
    // ADC: converter configured, one half-scale sample
    let mut adc_i2c = MockI2c::new(Default::default());
    adc_i2c.set_repeat_read_data(&[0x00, 0x3F, 0xFF, 0xFF]);
    let mut adc = adc4::Adc4::new(&mut adc_i2c, MockTimer::new(), adc4::Adc4Config::default());
    adc.init().unwrap();
    let mv = adc.get_voltage().unwrap();
    assert!((mv - 2048.0).abs() < 0.5);

    // Fuel gauge: ID probe then a voltage read
    let mut gauge_i2c = MockI2c::new(Default::default());
    gauge_i2c.push_read_data(&[0x14]);
    gauge_i2c.push_read_data(&[0xDC, 0x05]);
    let mut gauge = battmon::BattMon::new(&mut gauge_i2c, battmon::BattMonConfig::default());
    gauge.init().unwrap();
    assert!((gauge.get_voltage().unwrap() - 3300.0).abs() < 0.5);

    // Magnetometer: WIA probe then one sample
    let mut mag_i2c = MockI2c::new(Default::default());
    mag_i2c.push_read_data(&[0x48, 0x10]);
    mag_i2c.push_read_data(&[0x01]);
    mag_i2c.push_read_data(&[0xE8, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    let bus = compass4::Compass4I2c::new(&mut mag_i2c, compass4::registers::DEFAULT_ADDR);
    let mut compass =
        compass4::Compass4::new(bus, MockTimer::new(), compass4::Compass4Config::default());
    compass.init().unwrap();
    let field = compass.get_magnetic_field().unwrap();
    assert!((field.x - 150.0).abs() < 0.001);
}

#[test]
fn eeprom_write_then_read_back_framing() {
    let mut spi = MockSpi::new(Default::default());
    spi.push_read_data(&[0x00, 0x00]); // idle status after the write
    spi.push_read_data(b"\x00log:");

    let mut eeprom = eeprom5::Eeprom5::new(
        &mut spi,
        MockGpio::new_output(),
        MockGpio::new_output(),
        MockGpio::new_output(),
        MockTimer::new(),
    );
    eeprom.init().unwrap();
    eeprom.write_memory(0x100, b"log:").unwrap();

    let mut buf = [0u8; 4];
    // The mock is stateless memory-wise; this verifies the read framing only
    eeprom.read_memory(0x100, &mut buf).unwrap();
    assert_eq!(spi.transactions().len(), 6);
}

#[test]
fn modem_command_sequence() {
    let mut uart = MockUart::new(Default::default());
    uart.set_rx_chunk_size(9);
    uart.inject_rx_data(b"+AT: OK\r\n");
    uart.inject_rx_data(b"+MODE: TEST\r\n+AT: OK\r\n");

    let mut modem = lr10::Lr10::new(&mut uart, MockTimer::new());
    modem.init().unwrap();

    modem
        .send_command_with_param(lr10::commands::MODE, "TEST")
        .unwrap();
    modem.wait_response().unwrap();

    assert_eq!(uart.tx_buffer(), b"AT\r\nAT+MODE=TEST\r\n");
}

#[test]
fn display_full_bringup_pushes_a_frame() {
    let mut i2c = MockI2c::new(Default::default());
    let bus = oledw::OledWI2c::new(&mut i2c, oledw::registers::DEFAULT_ADDR);
    let mut oled = oledw::OledW::new(bus, MockGpio::new_output(), MockTimer::new());

    oled.default_cfg(oledw::OledWConfig::default()).unwrap();
    let frame = [0xFFu8; oledw::registers::FRAME_SIZE];
    oled.display_picture(&frame).unwrap();

    // 19 init commands + 5 pages x (3 commands + 1 data burst)
    assert_eq!(i2c.transactions().len(), 39);
}
