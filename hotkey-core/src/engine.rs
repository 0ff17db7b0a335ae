//! Keypad engine
//!
//! One [`Engine::tick`] per scheduler period does all of the keypad's work
//! in a fixed order:
//!
//! 1. debounce the hotkeys and report press edges
//! 2. debounce the boot key and watch for a double tap
//! 3. track host connect and disconnect
//! 4. move received bytes into the line framer (or drop them while no
//!    host is present)
//! 5. dispatch a completed line and send its reply
//!
//! Nothing in here blocks. The engine owns the inputs, the framer and the
//! actuators; the serial port is lent to it for the duration of a tick.

use heapless::Vec;
use hotkey_hal::{ActiveInput, HostLink, SerialPort, SerialRx, SerialTx};
use hotkey_protocol::{CommandResult, Feed, LineFramer, Notification, Rgb24, LINE_CAPACITY};

use crate::command::Interpreter;
use crate::config::{KeypadConfig, MAX_BUTTONS};
use crate::input::{Debouncer, DoubleTap, Edge};
use crate::link::{ConnectionMonitor, LinkEvent};
use crate::traits::{LedStrip, UpdateMode};

/// How a dispatched line was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatched {
    /// One reply line was sent
    Reply(CommandResult),
    /// The command wrote its own output instead of a reply (`CONFIG`)
    Silent,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Hotkeys that reached a stable press this tick
    pub pressed: Vec<u8, MAX_BUTTONS>,
    /// The boot key completed a double tap
    pub update_requested: bool,
    /// Host connection transition
    pub link: LinkEvent,
    /// An overlong line was dropped
    pub overflowed: bool,
    /// Bytes received while no host was present were dropped
    pub discarded: usize,
    /// A line was dispatched this tick
    pub dispatched: Option<Dispatched>,
}

struct Hotkey<I> {
    input: I,
    debouncer: Debouncer,
}

struct BootKey<I> {
    input: I,
    detector: DoubleTap,
}

/// The keypad's per-tick logic
pub struct Engine<I, L, U> {
    config: KeypadConfig,
    hotkeys: Vec<Hotkey<I>, MAX_BUTTONS>,
    boot_key: Option<BootKey<I>>,
    monitor: ConnectionMonitor,
    framer: LineFramer,
    interpreter: Interpreter<L, U>,
}

impl<I, L, U> Engine<I, L, U>
where
    I: ActiveInput,
    L: LedStrip,
    U: UpdateMode,
{
    /// Build the engine and show the power-on LED state
    ///
    /// `hotkeys` are in button index order. Inputs are sampled once here so
    /// a key held during power-up does not report a press.
    pub fn new(
        config: KeypadConfig,
        hotkeys: Vec<I, MAX_BUTTONS>,
        boot_key: Option<I>,
        mut leds: L,
        update: U,
        now_ms: u32,
    ) -> Self {
        let debounce_ms = config.debounce_ms;
        let hotkeys = hotkeys
            .into_iter()
            .map(|input| Hotkey {
                debouncer: Debouncer::with_window(input.is_active(), now_ms, debounce_ms),
                input,
            })
            .collect();

        let boot_key = boot_key.map(|input| BootKey {
            detector: DoubleTap::new(input.is_active(), now_ms, debounce_ms, config.double_tap_ms),
            input,
        });

        leds.set_brightness(config.brightness);
        leds.set_all(Rgb24::YELLOW);

        Self {
            config,
            hotkeys,
            boot_key,
            monitor: ConnectionMonitor::new(),
            framer: LineFramer::new(),
            interpreter: Interpreter::new(leds, update),
        }
    }

    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    pub fn leds(&self) -> &L {
        self.interpreter.leds()
    }

    pub fn leds_mut(&mut self) -> &mut L {
        self.interpreter.leds_mut()
    }

    pub fn update_mode(&self) -> &U {
        self.interpreter.update_mode()
    }

    /// Host presence as of the last tick
    pub fn is_host_present(&self) -> bool {
        self.monitor.is_present()
    }

    /// Run one scheduler period
    pub fn tick<P: SerialPort>(&mut self, now_ms: u32, port: &mut P) -> TickReport {
        let mut report = TickReport::default();

        self.scan_hotkeys(now_ms, port, &mut report);

        if let Some(boot) = self.boot_key.as_mut() {
            if boot.detector.update(boot.input.is_active(), now_ms) {
                report.update_requested = true;
                self.interpreter.update_mode_mut().enter_update_mode();
            }
        }

        report.link = self.monitor.poll(port.host_present());
        match report.link {
            LinkEvent::BecamePresent => {
                self.framer.reset();
                self.greet(port);
            }
            LinkEvent::BecameAbsent => self.framer.reset(),
            LinkEvent::Unchanged => {}
        }

        if !self.monitor.is_present() {
            // Leftovers of a closed session must not reach the next one
            while port.try_read_byte().is_some() {
                report.discarded += 1;
            }
            return report;
        }

        while !self.framer.is_ready() {
            let Some(byte) = port.try_read_byte() else {
                break;
            };
            if self.framer.feed(byte) == Feed::Overflow {
                report.overflowed = true;
            }
        }

        let mut line = [0u8; LINE_CAPACITY];
        if let Some(n) = self.framer.try_take_line(&mut line) {
            let dispatched = match self.interpreter.dispatch(&line[..n], &self.config, port) {
                Some(result) => {
                    let _ = port.write_line(result.as_str());
                    Dispatched::Reply(result)
                }
                None => Dispatched::Silent,
            };
            report.dispatched = Some(dispatched);
        }

        report
    }

    fn scan_hotkeys<P: SerialPort>(&mut self, now_ms: u32, port: &mut P, report: &mut TickReport) {
        for (index, key) in self.hotkeys.iter_mut().enumerate() {
            let edge = key.debouncer.update(key.input.is_active(), now_ms);
            if edge == Some(Edge::RoseToActive) {
                let index = index as u8;
                let _ = port.write_line(Notification::Pressed(index).to_line().as_str());
                // At most MAX_BUTTONS keys exist
                let _ = report.pressed.push(index);
            }
        }
    }

    /// Start of a host session: banner, then a dark strip
    fn greet<P: SerialPort>(&mut self, port: &mut P) {
        let _ = port.write_line(self.config.firmware_banner);
        let leds = self.interpreter.leds_mut();
        leds.set_all(Rgb24::BLACK);
        leds.set_brightness(self.config.brightness);
    }
}
