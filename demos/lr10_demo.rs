//! LR 10 demo: probe the LoRa modem and query its identity.

use click_drivers::drivers::lr10::{commands, Lr10};
use click_drivers::platform::mock::{MockTimer, MockUart};

fn main() {
    let mut uart = MockUart::new(Default::default());
    // First line answers the liveness probe, the rest the ID query.
    // Small chunks keep the probe from swallowing the ID response.
    uart.set_rx_chunk_size(9);
    uart.inject_rx_data(b"+AT: OK\r\n");
    uart.inject_rx_data(b"+ID: DevEui, 2C:F7:F1:20:32:30:AA:BB\r\n+AT: OK\r\n");

    let mut modem = Lr10::new(&mut uart, MockTimer::new());
    modem.init().expect("modem not responding");
    println!("modem alive");

    modem.send_command(commands::ID).expect("uart write failed");
    let response = modem.read_response().expect("uart read failed");
    print!("{}", response.as_str());
}
