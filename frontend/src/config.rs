//! Compile-time site settings exported by `build.rs` (from `.env` or defaults).

use std::time::Duration;

pub const BRAND: &str = env!("SITE_BRAND");
pub const CONTACT_EMAIL: &str = env!("SITE_CONTACT_EMAIL");

const SUBMIT_DELAY_MS: &str = env!("SUBMIT_DELAY_MS");
const ACK_DURATION_MS: &str = env!("ACK_DURATION_MS");

const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);
const DEFAULT_ACK_DURATION: Duration = Duration::from_millis(3000);

/// How long the contact form pretends to talk to a server.
pub fn submit_delay() -> Duration {
  parse_millis(SUBMIT_DELAY_MS).unwrap_or(DEFAULT_SUBMIT_DELAY)
}

/// How long the "Message Sent!" acknowledgement stays up.
pub fn ack_duration() -> Duration {
  parse_millis(ACK_DURATION_MS).unwrap_or(DEFAULT_ACK_DURATION)
}

pub fn mailto() -> String {
  format!("mailto:{}", CONTACT_EMAIL)
}

fn parse_millis(raw: &str) -> Option<Duration> {
  raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_whole_milliseconds() {
    assert_eq!(parse_millis("1500"), Some(Duration::from_millis(1500)));
    assert_eq!(parse_millis(" 250 "), Some(Duration::from_millis(250)));
  }

  #[test]
  fn rejects_non_numeric_values() {
    assert_eq!(parse_millis("1.5s"), None);
    assert_eq!(parse_millis(""), None);
  }

  #[test]
  fn mailto_uses_contact_address() {
    assert_eq!(mailto(), format!("mailto:{CONTACT_EMAIL}"));
    assert!(mailto().contains('@'));
  }
}
