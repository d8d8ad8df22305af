/// Scroll offset (px) past which the header gets a solid background.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
  offset > SCROLL_THRESHOLD_PX
}

pub fn header_class(offset: f64) -> &'static str {
  if is_scrolled(offset) {
    "site-header scrolled"
  } else {
    "site-header"
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
  open: bool,
}

impl MobileMenu {
  pub fn is_open(&self) -> bool {
    self.open
  }

  pub fn toggle(&mut self) {
    self.open = !self.open;
  }

  pub fn close(&mut self) {
    self.open = false;
  }
}

/// Anchor target for a nav label: `#` plus the lowercased label.
pub fn anchor_href(label: &str) -> String {
  format!("#{}", label.to_lowercase())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn threshold_is_strict() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
    assert_eq!(header_class(10.0), "site-header");
    assert_eq!(header_class(400.0), "site-header scrolled");
  }

  #[test]
  fn menu_toggles_and_closes() {
    let mut menu = MobileMenu::default();
    assert!(!menu.is_open());
    menu.toggle();
    assert!(menu.is_open());
    menu.close();
    assert!(!menu.is_open());
    menu.close();
    assert!(!menu.is_open());
  }

  #[test]
  fn anchors_are_lowercase_ids() {
    assert_eq!(anchor_href("Testimonials"), "#testimonials");
    assert_eq!(anchor_href("About"), "#about");
  }
}
