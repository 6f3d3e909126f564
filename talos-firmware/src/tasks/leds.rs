//! Indicator LED task
//!
//! Commits controller-requested colors to the WS2812 strip over PIO.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use talos_hal::indicator::INDICATOR_COUNT;

use crate::channels::LED_STATE;

/// LED task - writes each new color set to the strip
#[embassy_executor::task]
pub async fn led_task(mut strip: PioWs2812<'static, PIO0, 0, INDICATOR_COUNT>) {
    info!("LED task started");

    loop {
        let colors = LED_STATE.wait().await;

        let mut frame = [RGB8::default(); INDICATOR_COUNT];
        for (out, color) in frame.iter_mut().zip(colors.iter()) {
            *out = RGB8::new(color.r, color.g, color.b);
        }

        strip.write(&frame).await;
    }
}
