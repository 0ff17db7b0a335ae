//! Build script for hotkey-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates keypad.toml and turns it into Rust constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// RP2040 user GPIOs
const GPIO_COUNT: i64 = 30;

/// Most hotkeys the core supports
const MAX_BUTTONS: usize = 32;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);

    let keypad = load_config();
    generate_config(&keypad, &out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated keypad settings
struct Keypad {
    baudrate: u32,
    button_pins: Vec<u8>,
    debounce_ms: u32,
    boot_key_pin: Option<u8>,
    boot_key_active_low: bool,
    double_tap_ms: u32,
    led_pin: Option<u8>,
    leds_per_button: u8,
    brightness: u8,
}

/// Read and validate keypad.toml
fn load_config() -> Keypad {
    println!("cargo:rerun-if-changed=keypad.toml");

    let config_path = Path::new("keypad.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: keypad.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a keypad.toml configuration file.         ║\n\
            ║  Please create one in the hotkey-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read keypad.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in keypad.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let keypad = read_keypad(&config, &mut errors);
    check_pin_conflicts(&keypad, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid keypad configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!(
        "cargo:warning=keypad.toml validated: {} hotkeys",
        keypad.button_pins.len()
    );
    keypad
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        _ => None,
    }
}

/// Read an optional integer, checking its range
fn integer(
    table: Option<&toml::value::Table>,
    path: &str,
    key: &str,
    range: (i64, i64),
    errors: &mut Vec<String>,
) -> Option<i64> {
    match table.and_then(|t| t.get(key)) {
        None => None,
        Some(toml::Value::Integer(v)) if *v >= range.0 && *v <= range.1 => Some(*v),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", path, key, range.0, range.1));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", path, key));
            None
        }
    }
}

fn boolean(
    table: Option<&toml::value::Table>,
    path: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<bool> {
    match table.and_then(|t| t.get(key)) {
        None => None,
        Some(toml::Value::Boolean(b)) => Some(*b),
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", path, key));
            None
        }
    }
}

fn read_keypad(config: &toml::Value, errors: &mut Vec<String>) -> Keypad {
    let serial = section(config, "serial");
    let buttons = section(config, "buttons");
    let boot_key = section(config, "boot_key");
    let leds = section(config, "leds");

    let pin_range = (0, GPIO_COUNT - 1);

    let button_pins = match buttons.and_then(|t| t.get("pins")) {
        Some(toml::Value::Array(pins)) => {
            let mut out = Vec::new();
            for pin in pins {
                match pin {
                    toml::Value::Integer(p) if (pin_range.0..=pin_range.1).contains(p) => {
                        out.push(*p as u8)
                    }
                    _ => errors.push(format!(
                        "[buttons] pins entries must be GPIO numbers 0-{}",
                        pin_range.1
                    )),
                }
            }
            if out.is_empty() {
                errors.push("[buttons] pins must list at least one GPIO".to_string());
            }
            if out.len() > MAX_BUTTONS {
                errors.push(format!("[buttons] at most {} pins are supported", MAX_BUTTONS));
            }
            out
        }
        Some(_) => {
            errors.push("[buttons] pins must be an array".to_string());
            Vec::new()
        }
        None => {
            errors.push("Missing [buttons] pins - at least one hotkey is required".to_string());
            Vec::new()
        }
    };

    Keypad {
        baudrate: integer(serial, "serial", "baudrate", (1, u32::MAX as i64), errors)
            .unwrap_or(250_000) as u32,
        button_pins,
        debounce_ms: integer(buttons, "buttons", "debounce_ms", (0, 1000), errors).unwrap_or(20)
            as u32,
        boot_key_pin: integer(boot_key, "boot_key", "pin", pin_range, errors).map(|p| p as u8),
        boot_key_active_low: boolean(boot_key, "boot_key", "active_low", errors).unwrap_or(true),
        double_tap_ms: integer(boot_key, "boot_key", "double_tap_ms", (1, 10_000), errors)
            .unwrap_or(400) as u32,
        led_pin: integer(leds, "leds", "pin", pin_range, errors).map(|p| p as u8),
        leds_per_button: integer(leds, "leds", "leds_per_button", (1, 255), errors).unwrap_or(2)
            as u8,
        brightness: integer(leds, "leds", "brightness", (0, 255), errors).unwrap_or(64) as u8,
    }
}

/// Reject GPIOs used for more than one purpose
fn check_pin_conflicts(keypad: &Keypad, errors: &mut Vec<String>) {
    let mut used: Vec<(u8, &str)> = Vec::new();
    let all = keypad
        .button_pins
        .iter()
        .map(|p| (*p, "[buttons] pins"))
        .chain(keypad.boot_key_pin.map(|p| (p, "[boot_key] pin")))
        .chain(keypad.led_pin.map(|p| (p, "[leds] pin")));

    for (pin, owner) in all {
        if let Some((_, first)) = used.iter().find(|(p, _)| *p == pin) {
            errors.push(format!("GPIO {} used by both {} and {}", pin, first, owner));
        } else {
            used.push((pin, owner));
        }
    }
}

/// Write OUT_DIR/keypad_config.rs
fn generate_config(keypad: &Keypad, out_dir: &Path) {
    let mut code = String::new();
    code.push_str("// Generated from keypad.toml by build.rs\n\n");

    let pins = keypad
        .button_pins
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let option = |v: Option<u8>| match v {
        Some(p) => format!("Some({})", p),
        None => "None".to_string(),
    };

    code.push_str(&format!("pub const SERIAL_BAUDRATE: u32 = {};\n", keypad.baudrate));
    code.push_str(&format!(
        "pub const BUTTON_PINS: [u8; {}] = [{}];\n",
        keypad.button_pins.len(),
        pins
    ));
    code.push_str(&format!("pub const DEBOUNCE_MS: u32 = {};\n", keypad.debounce_ms));
    code.push_str(&format!(
        "pub const BOOT_KEY_PIN: Option<u8> = {};\n",
        option(keypad.boot_key_pin)
    ));
    code.push_str(&format!(
        "pub const BOOT_KEY_ACTIVE_LOW: bool = {};\n",
        keypad.boot_key_active_low
    ));
    code.push_str(&format!("pub const DOUBLE_TAP_MS: u32 = {};\n", keypad.double_tap_ms));
    code.push_str(&format!(
        "pub const LED_PIN: Option<u8> = {};\n",
        option(keypad.led_pin)
    ));
    code.push_str(&format!(
        "pub const LEDS_PER_BUTTON: u8 = {};\n",
        keypad.leds_per_button
    ));
    code.push_str(&format!("pub const BRIGHTNESS: u8 = {};\n", keypad.brightness));
    code.push_str(&format!(
        "pub const LED_COUNT: usize = {};\n\n",
        keypad.button_pins.len() * keypad.leds_per_button as usize
    ));

    // The PIO driver needs the data pin's concrete type
    let (pin_type, body) = match keypad.led_pin {
        Some(p) => (format!("PIN_{}", p), format!("pins.pin{}.take()", p)),
        None => ("PIN_0".to_string(), "None".to_string()),
    };
    code.push_str("/// Claim the WS2812 data pin, if one is configured\n");
    code.push_str(&format!(
        "pub fn take_led_pin(\n    pins: &mut hotkey_hal_rp2040::GpioPeripherals,\n) -> Option<embassy_rp::Peri<'static, embassy_rp::peripherals::{}>> {{\n",
        pin_type
    ));
    if keypad.led_pin.is_none() {
        code.push_str("    let _ = pins;\n");
    }
    code.push_str(&format!("    {}\n}}\n", body));

    fs::write(out_dir.join("keypad_config.rs"), code).unwrap();
}
