//! Coolant mist pump task
//!
//! Steps the peristaltic pump driver at the interval the controller
//! last requested. The enable line is owned by the controller tick;
//! this task only produces step pulses.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::channels::PUMP_INTERVAL;

/// Step pulse width in microseconds (driver needs >1.9us)
const STEP_PULSE_US: u64 = 4;

/// Pump task - emits step pulses while armed
#[embassy_executor::task]
pub async fn pump_task(mut step: Output<'static>) {
    info!("Pump task started");

    let mut interval: Option<u16> = None;

    loop {
        match interval {
            None => {
                interval = PUMP_INTERVAL.wait().await;
                if let Some(ms) = interval {
                    debug!("Pump armed at {} ms", ms);
                }
            }
            Some(ms) => {
                match select(PUMP_INTERVAL.wait(), Timer::after_millis(ms as u64)).await {
                    Either::First(next) => {
                        if next.is_none() {
                            debug!("Pump disarmed");
                        }
                        interval = next;
                    }
                    Either::Second(()) => {
                        step.set_high();
                        Timer::after_micros(STEP_PULSE_US).await;
                        step.set_low();
                    }
                }
            }
        }
    }
}
