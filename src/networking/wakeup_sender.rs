#[cfg(test)]
use mockall::automock;

use super::SendError;

#[cfg_attr(test, automock)]
pub trait WakeupSender {
    fn wakeup(&self) -> Result<(), SendError>;
}
