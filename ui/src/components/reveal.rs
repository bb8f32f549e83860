use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::core::platform::Platform;
use crate::core::reveal::{RevealMachine, Transition, VisibilitySignal};
use crate::core::visibility::{self, ViewportObserver};
use crate::core::{style, timing};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Observer and fallback timer of one wrapper. Released as soon as the
/// wrapper reveals, or at unmount at the latest.
#[derive(Default)]
struct Watchers {
    observer: RefCell<Option<ViewportObserver>>,
    fallback: Cell<Option<Task>>,
}

impl Watchers {
    fn release(&self) {
        self.observer.borrow_mut().take();
        if let Some(task) = self.fallback.take() {
            task.cancel();
        }
    }
}

/// Fades and slides its children in the first time they scroll into view.
///
/// `delay_ms` postpones the start of the transition so siblings can stagger.
/// Content that cannot be observed is shown immediately; content whose
/// observer never reports is shown after the configured fallback period.
#[component]
pub fn Reveal(
    #[props(default)] delay_ms: u64,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let settings = &SiteConfig::current().reveal;
    let dom_id = use_hook(|| format!("reveal-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)));

    // Observer reports only touch the machine; the render signal flips once,
    // when a transition fires.
    let machine: Rc<RefCell<RevealMachine>> = use_hook(|| {
        Rc::new(RefCell::new(RevealMachine::new(
            settings.timing(),
            Duration::from_millis(delay_ms),
            timing::now_ms(),
        )))
    });
    let revealed = use_signal(|| false);
    let watchers: Rc<Watchers> = use_hook(|| Rc::new(Watchers::default()));

    {
        let dom_id = dom_id.clone();
        let machine = machine.clone();
        let watchers = watchers.clone();
        use_effect(move || {
            if !Platform::current().observes_viewport() {
                let fired = machine
                    .borrow_mut()
                    .signal(VisibilitySignal::Unavailable, timing::now_ms());
                publish(fired, revealed);
                return;
            }

            let observed = machine.clone();
            let handle = visibility::observe(&dom_id, settings.observe_options(), move |signal| {
                let Ok(mut state) = observed.try_borrow_mut() else {
                    return;
                };
                if !state.is_revealed() {
                    publish(state.signal(signal, timing::now_ms()), revealed);
                }
            });

            let Some(handle) = handle else {
                let fired = machine
                    .borrow_mut()
                    .signal(VisibilitySignal::Unavailable, timing::now_ms());
                publish(fired, revealed);
                return;
            };
            watchers.observer.replace(Some(handle));

            let wait_ms = settings.fallback_ms;
            let machine = machine.clone();
            let task = spawn(async move {
                timing::sleep_ms(wait_ms).await;
                let fired = machine.borrow_mut().fallback_elapsed(timing::now_ms());
                publish(fired, revealed);
            });
            watchers.fallback.set(Some(task));
        });
    }

    {
        // Runs outside the observer callback, so dropping the observer here
        // never frees a closure while it executes.
        let watchers = watchers.clone();
        use_effect(move || {
            if revealed() {
                watchers.release();
            }
        });
    }

    use_drop(move || watchers.release());

    let shown = revealed();
    let (inline_style, state) = {
        let machine = machine.borrow();
        (machine.style(), machine.state().as_str())
    };
    let classes = style::merge(["reveal", class.as_str()]);

    rsx! {
        div {
            id: "{dom_id}",
            class: "{classes}",
            style: "{inline_style}",
            "data-reveal": state,
            "data-settled": "{shown}",
            {children}
        }
    }
}

/// Makes a fired transition visible. Reports that fire nothing write nothing,
/// so they never cause a re-render.
fn publish(fired: Option<Transition>, mut revealed: Signal<bool>) {
    let Some(transition) = fired else {
        return;
    };
    tracing::debug!(?transition, "reveal fired");
    // A report racing teardown finds the signal dropped and is ignored.
    if let Ok(mut flag) = revealed.try_write() {
        *flag = true;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::tests::render::{runtime, settle};

    const IDLE: Duration = Duration::from_millis(100);

    fn single() -> Element {
        rsx! {
            Reveal { delay_ms: 300, class: "mt-8", p { "Hallo" } }
        }
    }

    #[test]
    fn starts_hidden_with_its_delay() {
        let mut dom = VirtualDom::new(single);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);
        assert!(html.contains("data-reveal=\"hidden\""), "{html}");
        assert!(html.contains("opacity:0"), "{html}");
        assert!(html.contains("ease-out 300ms"), "{html}");
        assert!(html.contains("class=\"reveal mt-8\""), "{html}");
    }

    #[test]
    fn reveals_without_an_observer_and_then_goes_quiet() {
        runtime().block_on(async {
            let mut dom = VirtualDom::new(single);
            dom.rebuild_in_place();

            let rounds = settle(&mut dom, IDLE, 10).await;
            assert!(rounds.is_some(), "wrapper kept scheduling work");

            let html = dioxus::ssr::render(&dom);
            assert!(html.contains("data-reveal=\"revealed\""), "{html}");
            assert!(html.contains("data-settled=\"true\""), "{html}");
            assert!(html.contains("opacity:1"), "{html}");

            // Nothing is left to wake the dom once revealed.
            assert!(tokio::time::timeout(IDLE, dom.wait_for_work()).await.is_err());
        });
    }

    fn toggled() -> Element {
        let mut show = use_signal(|| true);
        use_hook(|| {
            spawn(async move {
                timing::sleep_ms(20).await;
                show.set(false);
            })
        });
        rsx! {
            if show() {
                Reveal { p { "Weg" } }
            }
        }
    }

    #[test]
    fn unmounting_leaves_no_pending_work() {
        runtime().block_on(async {
            let mut dom = VirtualDom::new(toggled);
            dom.rebuild_in_place();

            assert!(settle(&mut dom, IDLE, 10).await.is_some());
            let html = dioxus::ssr::render(&dom);
            assert!(!html.contains("data-reveal"), "{html}");
            assert!(tokio::time::timeout(IDLE, dom.wait_for_work()).await.is_err());
        });
    }
}
