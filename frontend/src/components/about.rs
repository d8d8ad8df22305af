use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::content::{ABOUT_PORTRAIT, ACHIEVEMENTS, CERTIFICATIONS};
use crate::hooks::use_reveal;
use crate::utils::reveal::{delay_style, RevealStyle};

#[component]
pub fn AboutSection() -> Element {
  let reveal = use_reveal();
  let visible = reveal.visible();
  let slide_in = RevealStyle::FromRight.class(visible);

  rsx! {
    section {
      id: "about",
      class: "section section-muted",
      onmounted: move |evt| reveal.observe(evt),
      div {
        class: "container about-columns",
        div {
          class: RevealStyle::FromLeft.class(visible),
          span { class: "pill pill-navy", "About Me" }
          h2 {
            class: "about-title",
            "Meet the "
            span { class: "accent-dark", "Strategist" }
            " Behind the Success"
          }
          p {
            class: "about-text",
            "With over 15 years of experience in global financial markets, I've developed a systematic approach to trading that has consistently outperformed traditional investment methods. My journey from a retail trader to managing significant capital has equipped me with insights into market dynamics that few possess."
          }
          p {
            class: "about-text",
            "My trading methodology is the result of years of refinement, combining technical analysis, fundamental insights, and proprietary algorithms. I've helped over 1,200 traders transform their approach to the markets through my mentorship programs and published works."
          }
          div {
            class: "achievements",
            for achievement in ACHIEVEMENTS.iter() {
              div {
                key: "{achievement.label}",
                class: "achievement",
                Icon { kind: achievement.icon, class: "icon icon-gold" }
                p { class: "achievement-value", "{achievement.value}" }
                p { class: "achievement-label", "{achievement.label}" }
              }
            }
          }
          button { class: "button button-navy lift", "Learn More About My Journey" }
        }
        div {
          class: "about-visual {slide_in}",
          style: delay_style(300),
          div { class: "about-glow" }
          div {
            class: "about-card",
            img { src: ABOUT_PORTRAIT, alt: "Professional trader analyzing the market" }
            div {
              class: "about-card-body",
              h3 { "Certified Market Technician" }
              p {
                "As a Certified Market Technician (CMT) and member of the Market Technicians Association, I bring institutional-level analysis to individual traders."
              }
              div {
                class: "certifications",
                for cert in CERTIFICATIONS {
                  span { key: "{cert}", class: "pill pill-navy", "{cert}" }
                }
              }
            }
          }
          div {
            class: "about-quote",
            p { "\"Markets don't reward complexity. They reward systematic discipline and emotional control.\"" }
          }
        }
      }
    }
  }
}
