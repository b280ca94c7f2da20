mod http_wakeup;
mod magic_packet;
mod send_error;
mod wake_on_lan;
mod wakeup_sender;

pub use http_wakeup::HttpWakeup;
pub use magic_packet::MagicPacket;
pub use send_error::SendError;
pub use wake_on_lan::WakeOnLan;
#[cfg(test)]
pub use wakeup_sender::MockWakeupSender;
pub use wakeup_sender::WakeupSender;
