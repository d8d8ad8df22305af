use dioxus::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::TESTIMONIALS;
use crate::hooks::use_reveal;
use crate::utils::carousel::Carousel;
use crate::utils::reveal::RevealStyle;

#[component]
pub fn TestimonialsSection() -> Element {
  let reveal = use_reveal();
  let rise = RevealStyle::Rise.class(reveal.visible());
  let mut carousel = use_signal(|| Carousel::new(TESTIMONIALS.len()));
  let track_style = carousel.read().track_style();

  rsx! {
    section {
      id: "testimonials",
      class: "section section-dark",
      onmounted: move |evt| reveal.observe(evt),
      div {
        class: "container",
        div {
          class: "section-heading",
          span { class: "pill pill-gold", "Success Stories" }
          h2 {
            "Traders "
            span { class: "accent", "Transformed" }
          }
          p {
            "Hear from traders who have adopted my methodology and witnessed remarkable improvements in their trading performance and consistency."
          }
        }
        div {
          class: "{rise}",
          div {
            class: "carousel",
            div {
              class: "carousel-viewport",
              div {
                class: "carousel-track",
                style: "{track_style}",
                for testimonial in TESTIMONIALS.iter() {
                  div {
                    key: "{testimonial.author}",
                    class: "carousel-slide",
                    div {
                      class: "testimonial-card",
                      div {
                        class: "testimonial-quote-mark",
                        Icon { kind: IconKind::Quote, class: "icon icon-lg" }
                      }
                      blockquote { "\"{testimonial.content}\"" }
                      div {
                        class: "testimonial-author",
                        img { src: testimonial.image, alt: testimonial.author }
                        p { class: "testimonial-name", "{testimonial.author}" }
                        p { class: "testimonial-position", "{testimonial.position}" }
                      }
                    }
                  }
                }
              }
            }
            button {
              class: "carousel-arrow prev",
              title: "Previous testimonial",
              onclick: move |_evt| carousel.write().previous(),
              Icon { kind: IconKind::ChevronLeft }
            }
            button {
              class: "carousel-arrow next",
              title: "Next testimonial",
              onclick: move |_evt| carousel.write().next(),
              Icon { kind: IconKind::ChevronRight }
            }
            div {
              class: "carousel-dots",
              for index in 0..TESTIMONIALS.len() {
                button {
                  key: "{index}",
                  class: dot_class(carousel.read().is_active(index)),
                  onclick: move |_evt| {
                    carousel.write().select(index);
                  },
                }
              }
            }
          }
        }
      }
    }
  }
}

fn dot_class(active: bool) -> &'static str {
  if active { "carousel-dot active" } else { "carousel-dot" }
}
