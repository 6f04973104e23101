//! ADC 4 demo: configure the converter and read a few samples.
//!
//! Runs against the mock platform so it can execute anywhere; swap in a real
//! platform implementation to talk to hardware.

use click_drivers::drivers::adc4::{Adc4, Adc4Config};
use click_drivers::platform::mock::{MockI2c, MockTimer};

fn main() {
    let mut i2c = MockI2c::new(Default::default());
    // Ready conversion word: EOC clear, positive half scale
    i2c.set_repeat_read_data(&[0x00, 0x3F, 0xFF, 0xFF]);

    let mut adc = Adc4::new(&mut i2c, MockTimer::new(), Adc4Config::default());
    adc.init().expect("init failed");

    for sample in 0..5 {
        let mv = adc.get_voltage().expect("conversion failed");
        println!("sample {sample}: {mv:.1} mV");
    }
}
