//! Controller task
//!
//! Runs the command dispatcher and interlock enforcement on a fixed
//! tick. Host bytes are drained from the buffered UART without blocking
//! so a quiet line never stalls the safety pass.

use core::fmt::Write as _;

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_time::{Duration, Instant, Ticker};
use embedded_io::{Read, ReadReady};
use embedded_io_async::Write;
use heapless::{Deque, String};

use talos_core::Controller;

use crate::board::BoardIo;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 10;

/// Bytes buffered between ticks; enough for a full burst of commands
const BACKLOG_SIZE: usize = 512;

/// Largest rendered reply (a status report plus slack)
const REPLY_BUF_SIZE: usize = 512;

/// Controller task - dispatches host commands and enforces interlocks
#[embassy_executor::task]
pub async fn controller_task(mut rx: BufferedUartRx, mut tx: BufferedUartTx, mut io: BoardIo) {
    info!("Controller task started");

    let mut ctrl = Controller::new();
    let mut backlog: Deque<u8, BACKLOG_SIZE> = Deque::new();
    let mut buf = [0u8; 64];

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;

        // Drain whatever the UART has buffered. read() won't block here
        // because we only call it when bytes are ready.
        while rx.read_ready().unwrap_or(false) {
            match rx.read(&mut buf) {
                Ok(n) if n > 0 => {
                    for &byte in &buf[..n] {
                        // Backlog full means the host is flooding us;
                        // dropped bytes surface as an unknown command.
                        let _ = backlog.push_back(byte);
                    }
                }
                _ => break,
            }
        }

        let now_ms = start.elapsed().as_millis() as u32;

        let reply = ctrl.tick(|| backlog.pop_front(), &mut io, now_ms);

        if let Some(reply) = reply {
            let mut out: String<REPLY_BUF_SIZE> = String::new();
            if write!(out, "{}", reply).is_err() {
                warn!("Reply truncated");
            }
            if let Err(e) = tx.write_all(out.as_bytes()).await {
                warn!("UART write error: {:?}", e);
            }
        }
    }
}
