//! LED output task

use defmt::*;
use embassy_rp::peripherals::PIO0;

use hotkey_hal_rp2040::Ws2812Strip;

use crate::channels::LED_FRAME;
use crate::config::LED_COUNT;

/// The keypad's strip on PIO0 state machine 0
pub type LedStripDriver = Ws2812Strip<'static, PIO0, 0, LED_COUNT>;

/// LED task - writes each new frame to the strip
#[embassy_executor::task]
pub async fn leds_task(mut strip: LedStripDriver) {
    info!("LED task started ({} LEDs)", LED_COUNT);

    loop {
        let frame = LED_FRAME.wait().await;
        strip.write(&frame).await;
        trace!("LED frame written");
    }
}
