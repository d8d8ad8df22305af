/// Cyclic slide index over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
  index: usize,
  len: usize,
}

impl Carousel {
  pub fn new(len: usize) -> Self {
    Carousel { index: 0, len }
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn next(&mut self) {
    if !self.is_empty() {
      self.index = (self.index + 1) % self.len;
    }
  }

  pub fn previous(&mut self) {
    if !self.is_empty() {
      self.index = (self.index + self.len - 1) % self.len;
    }
  }

  /// Jump straight to a slide. Out-of-range targets are rejected and the
  /// index is left alone.
  pub fn select(&mut self, index: usize) -> bool {
    if index < self.len {
      self.index = index;
      true
    } else {
      false
    }
  }

  pub fn is_active(&self, index: usize) -> bool {
    self.index == index
  }

  /// Style for the slide track: shift left one full width per slide.
  pub fn track_style(&self) -> String {
    format!("transform: translateX(-{}%)", self.index * 100)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn next_wraps_from_last_to_first() {
    let mut carousel = Carousel::new(4);
    for expected in [1, 2, 3, 0, 1] {
      carousel.next();
      assert_eq!(carousel.index(), expected);
    }
  }

  #[test]
  fn previous_wraps_from_first_to_last() {
    let mut carousel = Carousel::new(4);
    carousel.previous();
    assert_eq!(carousel.index(), 3);
    carousel.previous();
    assert_eq!(carousel.index(), 2);
  }

  #[test]
  fn select_sets_exact_index() {
    let mut carousel = Carousel::new(4);
    assert!(carousel.select(2));
    assert_eq!(carousel.index(), 2);
    assert!(carousel.is_active(2));
    assert!(!carousel.is_active(0));
  }

  #[test]
  fn select_out_of_range_keeps_index() {
    let mut carousel = Carousel::new(4);
    carousel.select(1);
    assert!(!carousel.select(4));
    assert_eq!(carousel.index(), 1);
  }

  #[test]
  fn index_stays_in_bounds_under_mixed_moves() {
    let mut carousel = Carousel::new(4);
    for step in 0..50 {
      match step % 3 {
        0 => carousel.next(),
        1 => carousel.previous(),
        _ => {
          carousel.next();
          carousel.next();
        }
      }
      assert!(carousel.index() < carousel.len());
    }
  }

  #[test]
  fn empty_carousel_never_moves() {
    let mut carousel = Carousel::new(0);
    carousel.next();
    carousel.previous();
    assert!(!carousel.select(0));
    assert_eq!(carousel.index(), 0);
  }

  #[test]
  fn track_offset_follows_index() {
    let mut carousel = Carousel::new(4);
    assert_eq!(carousel.track_style(), "transform: translateX(-0%)");
    carousel.select(3);
    assert_eq!(carousel.track_style(), "transform: translateX(-300%)");
  }
}
