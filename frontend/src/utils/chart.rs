/// Monthly bar heights (%) for the strategy banner chart, Jan..Dec.
pub const STRATEGY_BARS: [u8; 12] = [45, 62, 78, 56, 69, 92, 85, 73, 88, 95, 80, 86];

pub const MONTHS: [&str; 12] = [
  "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const PERFORMANCE_BAR_COUNT: usize = 24;

const BAR_FLOOR: f64 = 30.0;
const BAR_SPAN: f64 = 50.0;

/// Decorative bar heights in `[30, 80)` percent. `sample` must yield values in
/// `[0, 1)`, e.g. `js_sys::Math::random`.
pub fn decorative_bars(count: usize, mut sample: impl FnMut() -> f64) -> Vec<f64> {
  (0..count)
    .map(|_| BAR_FLOOR + sample().clamp(0.0, 1.0 - f64::EPSILON) * BAR_SPAN)
    .collect()
}

pub fn bar_style(height_pct: f64) -> String {
  format!("height: {height_pct:.1}%")
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTab {
  Weekly,
  #[default]
  Monthly,
  Yearly,
  AllTime,
}

impl PerformanceTab {
  pub const ALL: [PerformanceTab; 4] = [
    PerformanceTab::Weekly,
    PerformanceTab::Monthly,
    PerformanceTab::Yearly,
    PerformanceTab::AllTime,
  ];

  pub fn key(self) -> &'static str {
    match self {
      PerformanceTab::Weekly => "weekly",
      PerformanceTab::Monthly => "monthly",
      PerformanceTab::Yearly => "yearly",
      PerformanceTab::AllTime => "all-time",
    }
  }

  /// Button label: first letter capitalised, the dash replaced by a space.
  pub fn label(self) -> String {
    let key = self.key().replacen('-', " ", 1);
    let mut chars = key.chars();
    match chars.next() {
      Some(first) => first.to_uppercase().chain(chars).collect(),
      None => String::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bars_stay_in_decorative_range() {
    let samples = [0.0, 0.25, 0.5, 0.999, 1.0, -0.2, 7.0];
    let mut it = samples.iter().copied();
    let bars = decorative_bars(samples.len(), || it.next().unwrap_or(0.5));

    assert_eq!(bars.len(), samples.len());
    assert!(bars.iter().all(|h| (30.0..80.0).contains(h)), "{bars:?}");
    assert_eq!(bars[0], 30.0);
    assert_eq!(bars[2], 55.0);
  }

  #[test]
  fn bar_count_matches_request() {
    assert_eq!(decorative_bars(PERFORMANCE_BAR_COUNT, || 0.3).len(), 24);
    assert!(decorative_bars(0, || 0.3).is_empty());
  }

  #[test]
  fn tab_labels() {
    let labels: Vec<String> = PerformanceTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Weekly", "Monthly", "Yearly", "All time"]);
    assert_eq!(PerformanceTab::default(), PerformanceTab::Monthly);
  }

  #[test]
  fn strategy_chart_has_a_bar_per_month() {
    assert_eq!(STRATEGY_BARS.len(), MONTHS.len());
    assert!(STRATEGY_BARS.iter().all(|h| *h <= 100));
    assert_eq!(bar_style(45.0), "height: 45.0%");
  }
}
