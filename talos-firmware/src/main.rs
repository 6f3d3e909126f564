//! Talos - Hybrid Router/Laser Controller Firmware
//!
//! Main firmware binary for RP2040-based controller boards. Owns the
//! host serial link, the actuator and sensor pins, the WS2812 status
//! indicators and the coolant mist pump, with the safety interlocks
//! enforced every tick by the controller task.
//!
//! Named after the bronze automaton that guarded Crete - it never
//! sleeps, and it never lets the laser fire with the door open.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use talos_core::io::MachineIo;

use crate::board::{BoardAdc, BoardInput, BoardIo, BoardOutput, SignalPump, SignalStrip};

mod board;
mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Talos firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for host communication
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for host communication");

    // Actuator outputs, all off at boot
    let spindle = BoardOutput::new(Output::new(p.PIN_2, Level::Low));
    let laser = BoardOutput::new(Output::new(p.PIN_3, Level::Low));
    let air = BoardOutput::new(Output::new(p.PIN_4, Level::Low));
    let vacuum = BoardOutput::new(Output::new(p.PIN_5, Level::Low));
    let hood = BoardOutput::new(Output::new(p.PIN_6, Level::Low));
    let pump_enable = BoardOutput::new(Output::new(p.PIN_7, Level::Low));

    // Sensor inputs, pulled up so an unplugged switch reads inactive
    let door = BoardInput::new(Input::new(p.PIN_10, Pull::Up));
    let laser_head = BoardInput::new(Input::new(p.PIN_11, Pull::Up));
    let force_vacuum = BoardInput::new(Input::new(p.PIN_12, Pull::Up));

    // Setup ADC for pressure and PWM sensing
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let pressure = Channel::new_pin(p.PIN_26, Pull::None);
    let pwm_sense = Channel::new_pin(p.PIN_27, Pull::None);
    let adc = BoardAdc::new(adc, pressure, pwm_sense);

    info!("GPIO and ADC initialized");

    // Setup PIO0 for the WS2812 indicator strip
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);

    let program = PioWs2812Program::new(&mut common);
    let strip = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program);

    info!("PIO WS2812 initialized");

    // Mist pump step pulse pin, driven by the pump task
    let pump_step = Output::new(p.PIN_14, Level::Low);

    let io: BoardIo = MachineIo {
        spindle,
        laser,
        air,
        vacuum,
        hood,
        pump_enable,
        door,
        laser_head,
        force_vacuum,
        adc,
        leds: SignalStrip,
        pump_timer: SignalPump,
    };

    // Spawn tasks
    spawner.spawn(tasks::controller_task(rx, tx, io)).unwrap();
    spawner.spawn(tasks::pump_task(pump_step)).unwrap();
    spawner.spawn(tasks::led_task(strip)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
