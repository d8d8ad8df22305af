use dioxus::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{FRAMEWORK_POINTS, STRATEGIES};
use crate::hooks::use_reveal;
use crate::utils::chart::{bar_style, MONTHS, STRATEGY_BARS};
use crate::utils::reveal::{delay_style, stagger_delay_ms, RevealStyle};

#[component]
pub fn StrategySection() -> Element {
  let reveal = use_reveal();
  let visible = reveal.visible();
  let rise = RevealStyle::Rise.class(visible);

  rsx! {
    section {
      id: "strategy",
      class: "section section-muted",
      onmounted: move |evt| reveal.observe(evt),
      div {
        class: "container",
        div {
          class: "section-heading",
          span { class: "pill pill-navy", "Trading Methodology" }
          h2 {
            "A Strategic Approach to "
            span { class: "accent-dark", "Market Mastery" }
          }
          p {
            "My proprietary trading strategy combines technical analysis, fundamentals, and market psychology to identify high-probability trading opportunities across multiple timeframes."
          }
        }
        div {
          class: "card-grid card-grid-3",
          for (index, strategy) in STRATEGIES.iter().enumerate() {
            StrategyCard {
              key: "{strategy.title}",
              title: strategy.title,
              description: strategy.description,
              icon: strategy.icon,
              delay_ms: stagger_delay_ms(index),
              visible: visible,
            }
          }
        }
        div {
          class: "framework-banner {rise}",
          style: delay_style(600),
          div {
            class: "framework-columns",
            div {
              h3 { "My Trading Framework" }
              p {
                class: "framework-lead",
                "My trading framework is built on a foundation of disciplined risk management and statistical edge. By focusing on high-probability setups and proper position sizing, I maintain consistent profitability across varying market conditions."
              }
              ul {
                class: "framework-points",
                for point in FRAMEWORK_POINTS {
                  li {
                    key: "{point}",
                    span { class: "bullet" }
                    span { "{point}" }
                  }
                }
              }
            }
            div {
              class: "framework-chart",
              div {
                class: "framework-chart-header",
                h4 { "Strategy Performance" }
                span { class: "positive", "+68% YTD" }
              }
              div {
                class: "bar-chart bar-chart-gold",
                for (month, height) in MONTHS.iter().zip(STRATEGY_BARS) {
                  div { key: "{month}", class: "bar", style: bar_style(height as f64) }
                }
              }
              div {
                class: "bar-chart-axis",
                for month in MONTHS {
                  span { key: "{month}", "{month}" }
                }
              }
            }
          }
        }
      }
    }
  }
}

#[component]
fn StrategyCard(title: &'static str, description: &'static str, icon: IconKind, delay_ms: u32, visible: bool) -> Element {
  let rise = RevealStyle::Rise.class(visible);

  rsx! {
    div {
      class: "card {rise}",
      style: delay_style(delay_ms),
      div {
        class: "card-icon",
        Icon { kind: icon, class: "icon icon-navy" }
      }
      h3 { class: "card-title", "{title}" }
      p { class: "card-text", "{description}" }
    }
  }
}
