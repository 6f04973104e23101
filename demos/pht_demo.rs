//! PHT demo: load the MS8607 calibration and print a combined reading.

use click_drivers::drivers::pht::{Pht, PhtConfig};
use click_drivers::platform::mock::{MockI2c, MockTimer};

fn main() {
    let mut i2c = MockI2c::new(Default::default());
    // All-zero PROM passes its CRC; conversions and humidity read as zero
    i2c.set_repeat_read_data(&[0x00, 0x00, 0x00]);

    let mut pht = Pht::new(&mut i2c, MockTimer::new(), PhtConfig::default());
    pht.init().expect("calibration load failed");

    let m = pht.get_measurements().expect("measurement failed");
    println!(
        "temperature {:.2} C  pressure {:.2} mbar  humidity {:.1} %",
        m.temperature_c, m.pressure_mbar, m.humidity_percent
    );
}
