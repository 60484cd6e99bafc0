//! ESP-NOW radio adapter.
//!
//! Implements [`RadioPort`] over the ESP-NOW connectionless protocol.
//! The WiFi driver is brought up in station mode purely as a carrier:
//! the hub never associates with an access point, it only pins the
//! channel and TX power so the satellite peers can hear it.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF WiFi + ESP-NOW driver calls.
//! - **all other targets**: a stub that fails bring-up, so host builds
//!   link but never pretend to have a radio.
//!
//! The receive callback runs in the WiFi task. It only attributes and
//! decodes the frame, then hands the typed event to the static queue;
//! every state mutation happens later on the coordinator thread. The
//! send completion callback logs delivery status and does nothing else.

use crate::error::LinkError;
use crate::link::RadioPort;
use crate::peers::PeerAddr;

#[cfg(target_os = "espidf")]
pub use espidf::EspNowRadio;

#[cfg(target_os = "espidf")]
mod espidf {
    use esp_idf_hal::modem::Modem;
    use esp_idf_svc::espnow::{EspNow, PeerInfo, SendStatus};
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use esp_idf_svc::nvs::EspDefaultNvsPartition;
    use esp_idf_svc::sys;
    use esp_idf_svc::wifi::{ClientConfiguration, Configuration, EspWifi};
    use log::{debug, info, warn};

    use crate::error::LinkError;
    use crate::events;
    use crate::link::{self, RadioPort};
    use crate::peers::{PeerAddr, PeerRegistry};

    /// Real ESP-NOW transport over the ESP32 WiFi driver.
    pub struct EspNowRadio {
        wifi: EspWifi<'static>,
        espnow: Option<EspNow<'static>>,
        registry: PeerRegistry,
    }

    impl EspNowRadio {
        pub fn new(
            modem: Modem,
            sysloop: EspSystemEventLoop,
            nvs: EspDefaultNvsPartition,
        ) -> Result<Self, LinkError> {
            let wifi = EspWifi::new(modem, sysloop, Some(nvs))
                .map_err(|_| LinkError::RadioUnavailable("wifi driver"))?;
            Ok(Self {
                wifi,
                espnow: None,
                registry: PeerRegistry::provisioned(),
            })
        }

        fn espnow(&mut self) -> Result<&mut EspNow<'static>, LinkError> {
            self.espnow
                .as_mut()
                .ok_or(LinkError::RadioUnavailable("espnow not started"))
        }
    }

    impl RadioPort for EspNowRadio {
        fn bring_up(&mut self, channel: u8, max_tx_power_qdbm: i8) -> Result<(), LinkError> {
            // STA mode without association: ESP-NOW rides on the WiFi
            // MAC, so the driver must be started before the channel can
            // be pinned.
            self.wifi
                .set_configuration(&Configuration::Client(ClientConfiguration::default()))
                .map_err(|_| LinkError::RadioUnavailable("wifi configuration"))?;
            self.wifi
                .start()
                .map_err(|_| LinkError::RadioUnavailable("wifi start"))?;

            unsafe {
                if sys::esp_wifi_set_channel(
                    channel,
                    sys::wifi_second_chan_t_WIFI_SECOND_CHAN_NONE,
                ) != sys::ESP_OK
                {
                    return Err(LinkError::RadioUnavailable("channel select"));
                }
                if sys::esp_wifi_set_max_tx_power(max_tx_power_qdbm) != sys::ESP_OK {
                    return Err(LinkError::RadioUnavailable("tx power cap"));
                }
            }

            let espnow =
                EspNow::take().map_err(|_| LinkError::RadioUnavailable("espnow init"))?;

            let registry = self.registry;
            espnow
                .register_recv_cb(move |mac, data| {
                    let Ok(addr) = <[u8; 6]>::try_from(mac) else {
                        warn!("recv callback with malformed sender address");
                        return;
                    };
                    match link::decode_frame(&registry, PeerAddr(addr), data) {
                        Ok(event) => events::publish_link_event(event),
                        Err(e) => warn!("inbound frame dropped: {e}"),
                    }
                })
                .map_err(|_| LinkError::RadioUnavailable("recv callback"))?;

            // Delivery status is informational only.
            espnow
                .register_send_cb(|mac, status| match status {
                    SendStatus::SUCCESS => debug!("delivered to {mac:02x?}"),
                    _ => warn!("delivery to {mac:02x?} failed"),
                })
                .map_err(|_| LinkError::RadioUnavailable("send callback"))?;

            self.espnow = Some(espnow);
            info!("espnow up on channel {channel}, tx power {max_tx_power_qdbm} qdBm");
            Ok(())
        }

        fn add_peer(&mut self, addr: PeerAddr) -> Result<(), LinkError> {
            let espnow = self.espnow()?;
            let peer = PeerInfo {
                peer_addr: addr.0,
                // 0 = whatever channel the radio is currently pinned to.
                channel: 0,
                encrypt: false,
                ..Default::default()
            };
            espnow.add_peer(peer).map_err(|e| match e.code() {
                sys::ESP_ERR_ESPNOW_EXIST => LinkError::AlreadyRegistered,
                sys::ESP_ERR_ESPNOW_FULL => LinkError::PeerTableFull,
                _ => LinkError::RadioUnavailable("add peer"),
            })
        }

        fn send(&mut self, addr: PeerAddr, payload: &[u8]) -> Result<(), LinkError> {
            self.espnow()?
                .send(addr.0, payload)
                .map_err(|_| LinkError::SendFailed)
        }
    }
}

/// Host-side stand-in. Bring-up always fails: there is no radio to
/// pretend with, and the integration tests supply their own mocks.
pub struct StubRadio;

impl RadioPort for StubRadio {
    fn bring_up(&mut self, _channel: u8, _max_tx_power_qdbm: i8) -> Result<(), LinkError> {
        Err(LinkError::RadioUnavailable("no radio on this target"))
    }

    fn add_peer(&mut self, _addr: PeerAddr) -> Result<(), LinkError> {
        Err(LinkError::RadioUnavailable("no radio on this target"))
    }

    fn send(&mut self, _addr: PeerAddr, _payload: &[u8]) -> Result<(), LinkError> {
        Err(LinkError::RadioUnavailable("no radio on this target"))
    }
}
