use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::host::{ observe_visibility, Subscription };
use crate::utils::{ item_class, RevealTrigger, Stagger };

#[derive(Clone, Copy)]
struct RevealContext {
    visible: Signal<bool>,
    stagger: Stagger,
}

/// Container whose `RevealItem` children fade and rise into place, one after
/// another, once the container is revealed.
#[component]
pub fn RevealGroup(
    trigger: RevealTrigger,
    #[props(default, into)] class: String,
    children: Element
) -> Element {
    let mut visible = use_signal(|| false);
    use_context_provider(|| RevealContext { visible, stagger: Stagger::default() });

    let observer = use_hook(|| Rc::new(RefCell::new(None::<Subscription>)));
    let held = observer.clone();
    use_drop(move || {
        held.borrow_mut().take();
    });

    use_effect(move || {
        if trigger == RevealTrigger::Mount {
            visible.set(true);
        }
    });

    rsx! {
        div {
            class: "{class}",
            onmounted: move |event: MountedEvent| {
                if trigger != RevealTrigger::InView {
                    return;
                }
                let Some(element) = event.data().downcast::<web_sys::Element>().cloned() else {
                    visible.set(true);
                    return;
                };
                match observe_visibility(&element, move |in_view| visible.set(in_view)) {
                    Some(subscription) => {
                        *observer.borrow_mut() = Some(subscription);
                    }
                    None => visible.set(true),
                }
            },
            {children}
        }
    }
}

#[component]
pub fn RevealItem(index: usize, #[props(default, into)] class: String, children: Element) -> Element {
    let context = use_context::<RevealContext>();
    let visible = (context.visible)();

    rsx! {
        div {
            class: "{item_class(visible)} {class}",
            style: context.stagger.item_style(index, visible),
            {children}
        }
    }
}
