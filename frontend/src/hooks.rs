use std::cell::RefCell;
use std::rc::Rc;

use dioxus::{logger::tracing::{debug, warn}, prelude::*};
use dioxus::web::WebEventExt;
use js_sys::Array;
use web_sys::{
  wasm_bindgen::{closure::Closure, JsCast, JsValue},
  IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::utils::reveal::{RevealFlag, REVEAL_THRESHOLD};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// Keeps the JS callback alive for as long as the observer can fire it.
struct ObserverHandle {
  observer: IntersectionObserver,
  _callback: ObserverCallback,
}

impl Drop for ObserverHandle {
  fn drop(&mut self) {
    self.observer.disconnect();
  }
}

/// Scroll-reveal state for one section. Call [`UseReveal::observe`] from the
/// section root's `onmounted` and read [`UseReveal::visible`] while rendering.
#[derive(Clone)]
pub struct UseReveal {
  flag: Signal<RevealFlag>,
  handle: Rc<RefCell<Option<ObserverHandle>>>,
}

impl UseReveal {
  pub fn visible(&self) -> bool {
    self.flag.read().is_visible()
  }

  pub fn observe(&self, evt: MountedEvent) {
    if self.handle.borrow().is_some() || self.flag.peek().is_visible() {
      return;
    }
    let Some(element) = evt.try_as_web_event() else {
      warn!("reveal target is not a DOM element, showing it immediately");
      let mut flag = self.flag;
      flag.with_mut(|f| f.reveal());
      return;
    };

    let mut flag = self.flag;
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
      for entry in entries.iter() {
        let entry: IntersectionObserverEntry = entry.unchecked_into();
        if flag.with_mut(|f| f.observe(entry.is_intersecting())) {
          debug!("section revealed at ratio {:.2}", entry.intersection_ratio());
          observer.unobserve(&entry.target());
        }
      }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
      Ok(observer) => {
        observer.observe(&element);
        *self.handle.borrow_mut() = Some(ObserverHandle { observer, _callback: callback });
      }
      Err(e) => {
        warn!("IntersectionObserver unavailable ({:?}), showing section immediately", e);
        flag.with_mut(|f| f.reveal());
      }
    }
  }
}

/// One-shot reveal driven by viewport intersection. The observer is
/// disconnected when the owning component unmounts.
pub fn use_reveal() -> UseReveal {
  let flag = use_signal(RevealFlag::default);
  let handle = use_hook(|| Rc::new(RefCell::new(None)));
  UseReveal { flag, handle }
}

/// Current `window.scrollY`, pushed from a passive scroll listener.
pub fn use_scroll_offset() -> ReadOnlySignal<f64> {
  let mut offset = use_signal(|| 0.0_f64);

  use_future(move || async move {
    let mut eval = document::eval(r#"
      const report = () => dioxus.send(window.scrollY);
      report();
      window.addEventListener("scroll", report, { passive: true });
    "#);

    loop {
      match eval.recv::<f64>().await {
        Ok(y) => {
          if y != *offset.peek() {
            offset.set(y);
          }
        }
        Err(e) => {
          warn!("scroll listener stopped: {:?}", e);
          break;
        }
      }
    }
  });

  offset.into()
}
