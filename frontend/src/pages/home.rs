use dioxus::prelude::*;

use crate::components::{
  about::AboutSection, contact::ContactSection, hero::HeroSection, performance::PerformanceSection,
  strategy::StrategySection, template::Template, testimonials::TestimonialsSection,
};

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("/assets/home.css");
  rsx! {
    document::Stylesheet {href: CSS},
    Template {
      main {
        class: "home-page",
        HeroSection { }
        StrategySection { }
        PerformanceSection { }
        TestimonialsSection { }
        AboutSection { }
        ContactSection { }
      }
    }
  }
}
