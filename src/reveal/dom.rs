use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::controller::{EntrySink, RevealHost, ScrollRevealController};
use super::geometry::Rect;
use super::session::{IntersectionEntry, RevealPolicy};
use super::{CANDIDATE_CLASS, HIDDEN_CLASS, OFFSET_CLASS, REVEALED_CLASS};

/// Browser host: candidates are elements carrying the candidate class, the
/// watcher is an `IntersectionObserver`.
pub struct DomHost;

pub struct DomWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for DomWatch {
    fn drop(&mut self) {
        // the observer must not call back into a freed closure
        self.observer.disconnect();
    }
}

impl RevealHost for DomHost {
    type Container = Element;
    type Target = Element;
    type Watch = DomWatch;

    fn find_candidates(&self, container: &Element) -> Vec<Element> {
        let nodes = match container.query_selector_all(&format!(".{}", CANDIDATE_CLASS)) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!("Failed to query reveal candidates: {:?}", e);
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn watch(
        &self,
        targets: &[&Element],
        policy: &RevealPolicy,
        mut sink: EntrySink<Element>,
    ) -> Option<DomWatch> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                    .collect();
                sink(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(policy.threshold));
        init.set_root_margin(&policy.root_margin.to_css());

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                debug!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        for target in targets {
            observer.observe(target);
        }
        Some(DomWatch {
            observer,
            _callback: callback,
        })
    }

    fn release(&self, watch: DomWatch) {
        drop(watch);
    }

    fn show(&self, target: &Element) {
        let classes = target.class_list();
        let result = classes
            .add_1(REVEALED_CLASS)
            .and_then(|_| classes.remove_2(HIDDEN_CLASS, OFFSET_CLASS));
        if let Err(e) = result {
            warn!("Failed to reveal element: {:?}", e);
        }
    }

    /// The layout viewport without scrollbars, which is the implicit root
    /// an `IntersectionObserver` tests against.
    fn viewport(&self) -> Option<Rect> {
        let root = web_sys::window()?.document()?.document_element()?;
        Some(Rect::new(
            0.0,
            0.0,
            f64::from(root.client_width()),
            f64::from(root.client_height()),
        ))
    }

    fn measure(&self, target: &Element) -> Option<Rect> {
        let bounds = target.get_bounding_client_rect();
        Some(Rect::new(bounds.x(), bounds.y(), bounds.width(), bounds.height()))
    }
}

/// Reveals the candidates under the returned container as they scroll into
/// view. The session starts on mount and stops on unmount.
#[hook]
pub fn use_scroll_reveal() -> NodeRef {
    let container = use_node_ref();
    {
        let container = container.clone();
        use_effect_once(move || {
            let controller = ScrollRevealController::new(DomHost);
            let session = container
                .cast::<Element>()
                .map(|element| controller.start(&element));
            if session.is_none() {
                debug!("Reveal container not mounted, nothing to observe");
            }
            move || {
                if let Some(session) = session {
                    controller.stop(&session);
                }
            }
        });
    }
    container
}
