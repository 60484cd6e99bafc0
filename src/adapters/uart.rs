//! UART adapter for the companion motor controller.
//!
//! Implements [`ActuatorPort`] over UART1. The protocol is a single
//! command byte per action, fire-and-forget: the controller never
//! acknowledges and the hub never retries.
//!
//! On the host target the adapter records written bytes so tests can
//! assert on the outgoing command stream.

use log::debug;

use crate::coordinator::ports::ActuatorPort;
use crate::error::LinkError;

#[cfg(target_os = "espidf")]
pub use espidf::NanoUartLink;

#[cfg(target_os = "espidf")]
mod espidf {
    use esp_idf_hal::gpio::AnyIOPin;
    use esp_idf_hal::peripheral::Peripheral;
    use esp_idf_hal::uart::{self, Uart, UartDriver};
    use esp_idf_hal::units::Hertz;
    use log::debug;

    use crate::coordinator::ports::ActuatorPort;
    use crate::error::{Error, LinkError, Result};
    use crate::pins;

    /// UART1 link to the motor controller.
    pub struct NanoUartLink {
        driver: UartDriver<'static>,
    }

    impl NanoUartLink {
        /// Open the actuator UART on the pins from [`crate::pins`].
        pub fn new(
            uart: impl Peripheral<P = impl Uart> + 'static,
            tx: AnyIOPin,
            rx: AnyIOPin,
        ) -> Result<Self> {
            let config = uart::config::Config::default()
                .baudrate(Hertz(pins::ACTUATOR_UART_BAUD));
            let driver = UartDriver::new(
                uart,
                tx,
                rx,
                Option::<AnyIOPin>::None,
                Option::<AnyIOPin>::None,
                &config,
            )
            .map_err(|_| Error::Init("actuator uart"))?;
            Ok(Self { driver })
        }
    }

    impl ActuatorPort for NanoUartLink {
        fn write_byte(&mut self, b: u8) -> core::result::Result<(), LinkError> {
            debug!("actuator <- {:?}", b as char);
            match self.driver.write(&[b]) {
                Ok(1) => Ok(()),
                _ => Err(LinkError::SendFailed),
            }
        }
    }
}

/// Host-side stand-in that records every written byte.
#[derive(Default)]
pub struct RecordingActuator {
    written: Vec<u8>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl ActuatorPort for RecordingActuator {
    fn write_byte(&mut self, b: u8) -> Result<(), LinkError> {
        debug!("actuator <- {:?}", b as char);
        self.written.push(b);
        Ok(())
    }
}
