use dioxus::{logger::tracing::info, prelude::*};

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::{LEGAL_LINKS, NAV_ITEMS, QUICK_LINKS, RESOURCE_LINKS, SOCIAL_LINKS};
use crate::hooks::use_scroll_offset;
use crate::utils::nav::{anchor_href, header_class, MobileMenu};

#[component]
pub fn Template(children: Element) -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet { href: CSS },
    Header { }
    {children}
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  let offset = use_scroll_offset();
  let mut menu = use_signal(MobileMenu::default);
  let menu_open = menu.read().is_open();
  let menu_title = if menu_open { "Close menu" } else { "Open menu" };

  rsx! {
    header {
      class: header_class(offset()),
      div {
        class: "container nav-container",
        Brand { }
        nav {
          class: "nav-links",
          for item in NAV_ITEMS {
            a { key: "{item}", class: "nav-link", href: anchor_href(item), "{item}" }
          }
          button { class: "button button-gold", "Get Started" }
        }
        button {
          class: "menu-button",
          title: menu_title,
          onclick: move |_evt| menu.write().toggle(),
          if menu_open {
            Icon { kind: IconKind::Close }
          } else {
            Icon { kind: IconKind::Menu }
          }
        }
      }
      if menu_open {
        div {
          class: "mobile-menu",
          for item in NAV_ITEMS {
            a {
              key: "{item}",
              class: "mobile-link",
              href: anchor_href(item),
              onclick: move |_evt| menu.write().close(),
              "{item}"
            }
          }
          button { class: "button button-gold wide", "Get Started" }
        }
      }
    }
  }
}

#[component]
fn Brand() -> Element {
  rsx! {
    a {
      class: "brand",
      href: "#hero",
      Icon { kind: IconKind::TrendingUp, class: "icon icon-lg icon-gold" }
      span { class: "brand-name", {config::BRAND} }
    }
  }
}

#[component]
fn Footer() -> Element {
  let year = js_sys::Date::new_0().get_full_year();
  let copyright = format!("© {} {}. All rights reserved.", year, config::BRAND);

  rsx! {
    footer {
      div {
        class: "container",
        div {
          class: "footer-grid",
          div {
            Brand { }
            p {
              class: "footer-text",
              "Professional trading strategies and mentorship for serious traders who want to achieve consistent profitability."
            }
            div {
              class: "social-links",
              for (icon, title) in SOCIAL_LINKS {
                a {
                  key: "{title}",
                  href: "#",
                  class: "social-link",
                  title: title,
                  Icon { kind: icon, class: "icon icon-sm" }
                }
              }
            }
          }
          div {
            h3 { class: "footer-heading", "Quick Links" }
            ul {
              class: "footer-links",
              for (name, href) in QUICK_LINKS {
                li { key: "{name}", a { href: href, "{name}" } }
              }
            }
          }
          div {
            h3 { class: "footer-heading", "Resources" }
            ul {
              class: "footer-links",
              for name in RESOURCE_LINKS {
                li { key: "{name}", a { href: "#", "{name}" } }
              }
            }
          }
          Newsletter { }
        }
        div {
          class: "footer-bottom",
          p { class: "copyright", "{copyright}" }
          div {
            class: "legal-links",
            for name in LEGAL_LINKS {
              a { key: "{name}", href: "#", "{name}" }
            }
          }
        }
      }
    }
  }
}

#[component]
fn Newsletter() -> Element {
  rsx! {
    div {
      h3 { class: "footer-heading", "Subscribe" }
      p {
        class: "footer-text",
        "Subscribe to receive weekly market insights and trading opportunities directly to your inbox."
      }
      form {
        class: "newsletter",
        onsubmit: move |evt: FormEvent| {
          evt.prevent_default();
          // newsletter signup is not wired to any list yet
          info!("newsletter form submitted, nothing to send to");
        },
        input { r#type: "email", placeholder: "Your email address" }
        button {
          r#type: "submit",
          title: "Subscribe",
          Icon { kind: IconKind::Mail, class: "icon icon-sm" }
        }
      }
      p {
        class: "fine-print",
        "By subscribing, you agree to our Privacy Policy and consent to receive updates from our company."
      }
    }
  }
}
