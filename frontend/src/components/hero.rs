use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::content::HERO_STATS;
use crate::utils::reveal::{delay_style, RevealFlag, RevealStyle};

#[component]
pub fn HeroSection() -> Element {
  // the hero is above the fold, so it animates in on mount instead of on scroll
  let mut flag = use_signal(RevealFlag::default);
  let visible = flag.read().is_visible();

  rsx! {
    section {
      id: "hero",
      class: "hero",
      onmounted: move |_evt| {
        flag.with_mut(|f| f.reveal());
      },
      div { class: "hero-backdrop" }
      div { class: "hero-grid-overlay" }
      div {
        class: "container hero-content",
        div {
          class: "hero-columns",
          div {
            class: RevealStyle::Rise.class(visible),
            span { class: "pill pill-gold", "Elite Trading Strategies" }
            h1 {
              class: "hero-title",
              "Master the Markets with "
              span { class: "accent", "Strategic Precision" }
            }
            p {
              class: "hero-lead",
              "Leverage data-driven trading strategies developed over 15 years of market experience. Join traders who consistently outperform the market with our proven methodology."
            }
            div {
              class: "hero-actions",
              button { class: "button button-gold", "Discover My Strategy" }
              button { class: "button button-ghost", "View Performance" }
            }
          }
          div {
            class: RevealStyle::Rise.class(visible),
            style: delay_style(300),
            div {
              class: "hero-card",
              div {
                class: "hero-stats",
                for stat in HERO_STATS.iter() {
                  div {
                    key: "{stat.label}",
                    class: "hero-stat",
                    Icon { kind: stat.icon, class: "icon icon-gold" }
                    p { class: "hero-stat-value", "{stat.value}" }
                    p { class: "hero-stat-label", "{stat.label}" }
                  }
                }
              }
              div {
                class: "hero-progress",
                div {
                  class: "hero-progress-header",
                  span { "Trading Performance" }
                  span { class: "positive", "+24.6%" }
                }
                div {
                  class: "progress-track",
                  div { class: "progress-fill", style: "width: 75%" }
                }
              }
            }
          }
        }
      }
      div {
        class: "hero-wave",
        svg {
          xmlns: "http://www.w3.org/2000/svg",
          view_box: "0 0 1440 120",
          path {
            d: "M0,64L80,64C160,64,320,64,480,74.7C640,85,800,107,960,101.3C1120,96,1280,64,1360,48L1440,32L1440,120L1360,120C1280,120,1120,120,960,120C800,120,640,120,480,120C320,120,160,120,80,120L0,120Z"
          }
        }
      }
    }
  }
}
