use async_std::task::sleep;
use dioxus::{logger::tracing::info, prelude::*};

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::TRADING_HOURS;
use crate::hooks::use_reveal;
use crate::utils::contact::{ContactForm, Field};
use crate::utils::reveal::{delay_style, RevealStyle};

#[component]
pub fn ContactSection() -> Element {
  let reveal = use_reveal();
  let rise = RevealStyle::Rise.class(reveal.visible());
  let mut form = use_signal(ContactForm::default);
  let submitted = form.read().is_submitted();
  let submitting = form.read().is_submitting();
  let mailto = config::mailto();
  let submit_class = if submitting { "button button-navy busy" } else { "button button-navy" };

  rsx! {
    section {
      id: "contact",
      class: "section",
      onmounted: move |evt| reveal.observe(evt),
      div {
        class: "container",
        div {
          class: "section-heading",
          span { class: "pill pill-navy", "Get In Touch" }
          h2 {
            "Take Your Trading to the "
            span { class: "accent-dark", "Next Level" }
          }
          p {
            "Have questions about my trading methodology or interested in mentorship opportunities? I'm here to help you elevate your trading journey."
          }
        }
        div {
          class: "contact-columns",
          div {
            class: "contact-info {rise}",
            h3 { "Contact Information" }
            ContactMethod {
              icon: IconKind::Mail,
              title: "Email Me",
              description: "Get in touch directly via email for mentorship inquiries",
              action: config::CONTACT_EMAIL,
              href: mailto,
            }
            ContactMethod {
              icon: IconKind::MessageSquare,
              title: "Community",
              description: "Join my private trading community for daily insights",
              action: "Join Community",
              href: "#",
            }
            h4 { class: "hours-title", "Trading Hours" }
            ul {
              class: "hours",
              for (day, hours) in TRADING_HOURS {
                li {
                  key: "{day}",
                  span { class: "hours-day", "{day}" }
                  span { class: "hours-time", "{hours}" }
                }
              }
            }
          }
          div {
            class: "contact-form-card {rise}",
            style: delay_style(300),
            h3 { "Send Me a Message" }
            if submitted {
              div {
                class: "contact-success",
                div {
                  class: "contact-success-icon",
                  Icon { kind: IconKind::Check }
                }
                div {
                  h4 { "Message Sent!" }
                  p { "Thank you for reaching out. I'll be in touch with you shortly." }
                }
              }
            } else {
              form {
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                  evt.prevent_default();

                  let outcome = form.write().submit();
                  if let Err(e) = outcome {
                    info!("contact form not sent: {}", e);
                    return;
                  }

                  // no endpoint behind this form, stand in for the round trip
                  info!("contact form accepted, simulating delivery");
                  spawn(async move {
                    sleep(config::submit_delay()).await;
                    form.write().complete();

                    sleep(config::ack_duration()).await;
                    form.write().dismiss_acknowledgement();
                  });
                },
                div {
                  class: "form-row",
                  TextField { form: form, field: Field::Name, label: "Your Name", placeholder: "John Doe" }
                  TextField { form: form, field: Field::Email, label: "Email Address", placeholder: "john@example.com", input_type: "email" }
                }
                TextField { form: form, field: Field::Subject, label: "Subject", placeholder: "Trading Mentorship Inquiry" }
                TextField {
                  form: form,
                  field: Field::Message,
                  label: "Your Message",
                  placeholder: "I'm interested in learning more about your trading strategy...",
                  multiline: true,
                }
                button {
                  r#type: "submit",
                  class: submit_class,
                  disabled: submitting,
                  if submitting {
                    Spinner {}
                    "Sending..."
                  } else {
                    Icon { kind: IconKind::Send, class: "icon icon-sm" }
                    "Send Message"
                  }
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
fn ContactMethod(icon: IconKind, title: &'static str, description: &'static str, action: &'static str, #[props(into)] href: String) -> Element {
  rsx! {
    div {
      class: "contact-method",
      div {
        class: "contact-method-icon",
        Icon { kind: icon, class: "icon icon-gold" }
      }
      div {
        h4 { "{title}" }
        p { "{description}" }
        a { href: href, "{action}" }
      }
    }
  }
}

#[component]
fn TextField(
  mut form: Signal<ContactForm>,
  field: Field,
  label: &'static str,
  placeholder: &'static str,
  #[props(default = "text")] input_type: &'static str,
  #[props(default)] multiline: bool,
) -> Element {
  let value = form.read().value(field).to_string();
  let error = form.read().error(field).map(|e| e.to_string());
  let class = if error.is_some() { "form-input invalid" } else { "form-input" };
  let key = field.key();

  rsx! {
    div {
      class: "form-group",
      label { class: "form-label", r#for: key, "{label}" }
      if multiline {
        textarea {
          id: key,
          name: key,
          class: class,
          rows: "6",
          placeholder: placeholder,
          value: "{value}",
          oninput: move |evt| form.write().update(field, evt.value()),
        }
      } else {
        input {
          r#type: input_type,
          id: key,
          name: key,
          class: class,
          placeholder: placeholder,
          value: "{value}",
          oninput: move |evt| form.write().update(field, evt.value()),
        }
      }
      if let Some(message) = error {
        p { class: "form-error", "{message}" }
      }
    }
  }
}

#[component]
fn Spinner() -> Element {
  rsx! {
    svg {
      class: "spinner",
      xmlns: "http://www.w3.org/2000/svg",
      fill: "none",
      view_box: "0 0 24 24",
      circle { class: "spinner-track", cx: "12", cy: "12", r: "10", stroke: "currentcolor", stroke_width: "4" }
      path {
        class: "spinner-head",
        fill: "currentcolor",
        d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
      }
    }
  }
}
