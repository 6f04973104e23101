//! Compass 4 demo: bring the magnetometer up over I2C and stream a few
//! field vectors.

use click_drivers::drivers::compass4::{registers, Compass4, Compass4Config, Compass4I2c};
use click_drivers::platform::mock::{MockI2c, MockTimer};

fn main() {
    let mut i2c = MockI2c::new(Default::default());
    // WIA probe answer
    i2c.push_read_data(&[0x48, 0x10]);

    // Three samples: ST1 ready flag followed by axis data through ST2
    for _ in 0..3 {
        i2c.push_read_data(&[0x01]);
        i2c.push_read_data(&[0xE8, 0x03, 0x18, 0xFC, 0x64, 0x00, 0x00, 0x00]);
    }

    let bus = Compass4I2c::new(&mut i2c, registers::DEFAULT_ADDR);
    let mut compass = Compass4::new(bus, MockTimer::new(), Compass4Config::default());
    compass.init().expect("magnetometer not found");

    for sample in 0..3 {
        let field = compass.get_magnetic_field().expect("sample failed");
        println!(
            "sample {sample}: x {:.2} uT  y {:.2} uT  z {:.2} uT",
            field.x, field.y, field.z
        );
    }
}
