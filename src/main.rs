//! Aigis hub firmware — main entry point.
//!
//! Hexagonal architecture with queue-fed, single-writer coordination.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  EspNowRadio    NanoUartLink    ConsoleUi     ConsoleAudio   │
//! │  (RadioPort)    (ActuatorPort)  (UiPort)      (AudioPort)    │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────────    │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │            Coordinator (pure logic)                  │    │
//! │  │  PeerLink · AlarmLatch · ModeMachine                 │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! │                                                              │
//! │  radio rx / recognizer ──▶ static queues ──▶ main loop       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use log::info;

use aigis::adapters::console::{ConsoleAudio, ConsoleUi};
use aigis::adapters::device::DeviceIo;
use aigis::adapters::espnow::EspNowRadio;
use aigis::adapters::time::Uptime;
use aigis::adapters::uart::NanoUartLink;
use aigis::config::SystemConfig;
use aigis::coordinator::ports::{AudioPort, RecognizerPort};
use aigis::coordinator::service::Coordinator;
use aigis::events::{self, QueueRecognizer};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init().context("logger init")?;

    info!("Aigis hub v{}", env!("CARGO_PKG_VERSION"));

    let peripherals = Peripherals::take().context("peripherals already taken")?;
    let sysloop = EspSystemEventLoop::take().context("system event loop")?;
    let nvs = EspDefaultNvsPartition::take().context("nvs partition")?;

    let config = SystemConfig::default();

    // ── 2. Peripheral adapters ────────────────────────────────
    //
    // Actuator link failure is fatal: a hub that cannot halt the motor
    // controller must not start accepting motion commands.
    let pins = peripherals.pins;
    let actuator = NanoUartLink::new(peripherals.uart1, pins.gpio42.into(), pins.gpio13.into())
    .map_err(|e| anyhow::anyhow!("actuator uart init: {e}"))?;

    let radio = EspNowRadio::new(peripherals.modem, sysloop, nvs)
        .map_err(|e| anyhow::anyhow!("radio init: {e}"))?;

    // ── 3. Coordinator bring-up ───────────────────────────────
    let mut coordinator = Coordinator::new(radio, config.clone());
    coordinator
        .initialize()
        .map_err(|e| anyhow::anyhow!("link bring-up: {e}"))?;

    let mut io = DeviceIo::new(ConsoleUi::new(), ConsoleAudio::new(), actuator);
    io.set_volume(config.volume_percent);
    let mut recognizer = QueueRecognizer;
    let clock = Uptime::new();

    // ── 4. Main loop ──────────────────────────────────────────
    //
    // Single consumer of both queues. Every alarm and mode mutation
    // happens here, never in the radio or recognizer contexts.
    info!("entering control loop");
    loop {
        let now_ms = clock.now_ms();

        while let Some(event) = events::next_link_event() {
            coordinator.handle_link_event(event, &mut io);
        }

        while let Some(cmd) = recognizer.poll_command() {
            coordinator.handle_voice(cmd, &mut io, now_ms);
        }

        coordinator.tick(now_ms, &mut io);

        FreeRtos::delay_ms(config.control_loop_interval_ms);
    }
}
