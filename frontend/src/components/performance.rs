use dioxus::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{METRICS, PERFORMANCE_SUMMARY};
use crate::hooks::use_reveal;
use crate::utils::chart::{bar_style, decorative_bars, PerformanceTab, PERFORMANCE_BAR_COUNT};
use crate::utils::reveal::{delay_style, stagger_delay_ms, RevealStyle};

const TREND_LINE: &str = "M0,180 C100,120 200,160 300,140 C400,120 500,180 600,160 C700,140 800,200 900,180 C1000,160 1100,220 1200,200";

#[component]
pub fn PerformanceSection() -> Element {
  let reveal = use_reveal();
  let visible = reveal.visible();
  let rise = RevealStyle::Rise.class(visible);
  let mut active_tab = use_signal(PerformanceTab::default);
  // placeholder chart, rolled once per mount
  let bars = use_hook(|| decorative_bars(PERFORMANCE_BAR_COUNT, js_sys::Math::random));
  let trend_area = format!("{TREND_LINE} V400 H0 Z");

  rsx! {
    section {
      id: "performance",
      class: "section",
      onmounted: move |evt| reveal.observe(evt),
      div {
        class: "container",
        div {
          class: "section-heading",
          span { class: "pill pill-navy", "Track Record" }
          h2 {
            "Proven "
            span { class: "accent-dark", "Performance" }
            " Metrics"
          }
          p { "Transparent, verified trading results demonstrating consistent profitability across various market conditions." }
        }
        div {
          class: "card-grid card-grid-4",
          for (index, metric) in METRICS.iter().enumerate() {
            PerformanceCard {
              key: "{metric.title}",
              title: metric.title,
              value: metric.value,
              change: metric.change,
              is_positive: metric.is_positive,
              icon: metric.icon,
              delay_ms: stagger_delay_ms(index),
              visible: visible,
            }
          }
        }
        div {
          class: "chart-panel {rise}",
          style: delay_style(400),
          div {
            class: "chart-panel-header",
            h3 { "Performance Chart" }
            div {
              class: "tabs",
              for (tab, key, label) in PerformanceTab::ALL.map(|t| (t, t.key(), t.label())) {
                button {
                  key: "{key}",
                  class: tab_class(active_tab() == tab),
                  onclick: move |_evt| active_tab.set(tab),
                  "{label}"
                }
              }
            }
          }
          div {
            class: "chart-card",
            div {
              class: "chart-area",
              div {
                class: "bar-chart bar-chart-navy",
                for (i, height) in bars.iter().enumerate() {
                  div { key: "{i}", class: "bar", style: bar_style(*height) }
                }
              }
              svg {
                class: "trend-line",
                view_box: "0 0 1200 400",
                "preserveAspectRatio": "none",
                defs {
                  linearGradient {
                    id: "gold-gradient",
                    "x1": "0%",
                    "y1": "0%",
                    "x2": "0%",
                    "y2": "100%",
                    stop { "offset": "0%", "stop-color": "#F59E0B", "stop-opacity": "0.4" }
                    stop { "offset": "100%", "stop-color": "#F59E0B", "stop-opacity": "0" }
                  }
                }
                path { d: TREND_LINE, fill: "none", stroke: "#F59E0B", stroke_width: "4" }
                path { d: "{trend_area}", fill: "url(#gold-gradient)", "fill-opacity": "0.1" }
              }
            }
            div {
              class: "summary-grid",
              for (label, value) in PERFORMANCE_SUMMARY {
                div {
                  key: "{label}",
                  class: "summary-item",
                  p { class: "summary-label", "{label}" }
                  p { class: "summary-value", "{value}" }
                }
              }
            }
          }
        }
      }
    }
  }
}

fn tab_class(active: bool) -> &'static str {
  if active { "tab active" } else { "tab" }
}

#[component]
fn PerformanceCard(
  title: &'static str,
  value: &'static str,
  change: &'static str,
  is_positive: bool,
  icon: IconKind,
  delay_ms: u32,
  visible: bool,
) -> Element {
  let rise = RevealStyle::Rise.class(visible);
  let tone = if is_positive { "positive" } else { "negative" };

  rsx! {
    div {
      class: "card {rise}",
      style: delay_style(delay_ms),
      div {
        class: "metric-header",
        div {
          p { class: "metric-title", "{title}" }
          h3 { class: "metric-value", "{value}" }
        }
        div {
          class: "metric-badge {tone}",
          Icon { kind: icon, class: "icon icon-sm" }
        }
      }
      div {
        class: "metric-change",
        span { class: "{tone}", "{change}" }
        span { class: "metric-period", "vs previous period" }
      }
    }
  }
}
