//! BATT-MON demo: read the fuel gauge and program a low-voltage alarm.

use click_drivers::drivers::battmon::{registers, BattMon, BattMonConfig};
use click_drivers::platform::mock::MockI2c;

fn main() {
    let mut i2c = MockI2c::new(Default::default());
    // ID probe answer, then one gauge sample: SOC, voltage, current, temperature
    i2c.push_read_data(&[0x14]);
    i2c.push_read_data(&[0x00, 0x40]); // SOC = 0x4000 / 512 = 32%
    i2c.push_read_data(&[0xDC, 0x05]); // voltage = 1500 * 2.2 mV = 3300 mV
    i2c.push_read_data(&[0x00, 0x01]); // current = 256 LSB
    i2c.push_read_data(&[25]); // 25 C

    let mut gauge = BattMon::new(&mut i2c, BattMonConfig::default());
    gauge.init().expect("gauge not found");

    let data = gauge.get_data().expect("read failed");
    println!(
        "soc {:.1}%  voltage {:.0} mV  current {:.1} mA  temperature {:.0} C",
        data.soc, data.voltage_mv, data.current_ma, data.temperature_c
    );

    gauge
        .set_alarm(registers::REG_ALARM_VOLTAGE, 3000.0)
        .expect("alarm rejected");
    println!("low-voltage alarm armed at 3000 mV");
}
