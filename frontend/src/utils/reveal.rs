/// Fraction of a section that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Per-item delay for staggered card reveals.
pub const STAGGER_STEP_MS: u32 = 100;

/// One-shot "has this section been seen" flag. Only ever goes false -> true.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealFlag {
  visible: bool,
}

impl RevealFlag {
  pub fn is_visible(&self) -> bool {
    self.visible
  }

  /// Feed an intersection report. Returns `true` only on the report that
  /// flipped the flag, which is the caller's cue to stop observing.
  pub fn observe(&mut self, is_intersecting: bool) -> bool {
    is_intersecting && self.reveal()
  }

  /// Reveal unconditionally (used by sections that animate on mount).
  pub fn reveal(&mut self) -> bool {
    let flipped = !self.visible;
    self.visible = true;
    flipped
  }
}

/// Direction a block travels while fading in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
  Rise,
  FromLeft,
  FromRight,
}

impl RevealStyle {
  pub fn class(self, visible: bool) -> &'static str {
    match (self, visible) {
      (RevealStyle::Rise, false) => "reveal",
      (RevealStyle::Rise, true) => "reveal visible",
      (RevealStyle::FromLeft, false) => "reveal reveal-left",
      (RevealStyle::FromLeft, true) => "reveal reveal-left visible",
      (RevealStyle::FromRight, false) => "reveal reveal-right",
      (RevealStyle::FromRight, true) => "reveal reveal-right visible",
    }
  }
}

pub fn stagger_delay_ms(index: usize) -> u32 {
  index as u32 * STAGGER_STEP_MS
}

/// Inline style carrying a fixed transition delay.
pub fn delay_style(ms: u32) -> String {
  format!("transition-delay: {ms}ms")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_hidden() {
    assert!(!RevealFlag::default().is_visible());
  }

  #[test]
  fn ignores_reports_while_off_screen() {
    let mut flag = RevealFlag::default();
    assert!(!flag.observe(false));
    assert!(!flag.observe(false));
    assert!(!flag.is_visible());
  }

  #[test]
  fn flips_exactly_once() {
    let mut flag = RevealFlag::default();
    assert!(!flag.observe(false));
    assert!(flag.observe(true));
    assert!(flag.is_visible());

    // later reports, in or out of view, never flip it again
    assert!(!flag.observe(true));
    assert!(!flag.observe(false));
    assert!(flag.is_visible());
  }

  #[test]
  fn reveal_on_mount_is_also_one_shot() {
    let mut flag = RevealFlag::default();
    assert!(flag.reveal());
    assert!(!flag.reveal());
    assert!(!flag.observe(true));
    assert!(flag.is_visible());
  }

  #[test]
  fn classes_toggle_visibility_marker() {
    assert_eq!(RevealStyle::Rise.class(false), "reveal");
    assert_eq!(RevealStyle::Rise.class(true), "reveal visible");
    assert!(RevealStyle::FromLeft.class(true).ends_with("visible"));
    assert!(!RevealStyle::FromRight.class(false).contains("visible"));
  }

  #[test]
  fn stagger_grows_by_step() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(3), 300);
    assert_eq!(delay_style(600), "transition-delay: 600ms");
  }
}
