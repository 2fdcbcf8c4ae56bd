use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Gap between consecutive items of a staggered list.
pub const STAGGER_INTERVAL_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub trigger_once: bool,
    pub delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            trigger_once: true,
            delay_ms: 0,
        }
    }
}

impl RevealOptions {
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn repeating(mut self) -> Self {
        self.trigger_once = false;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealChange {
    Show { after_ms: u32 },
    Hide,
    Unchanged,
}

/// Decides what an intersection event means for one observed element.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    trigger_once: bool,
    delay_ms: u32,
    shown: bool,
    fired: bool,
}

impl RevealTracker {
    pub fn new(options: &RevealOptions) -> Self {
        Self {
            trigger_once: options.trigger_once,
            delay_ms: options.delay_ms,
            shown: false,
            fired: false,
        }
    }

    pub fn on_intersection(&mut self, is_intersecting: bool) -> RevealChange {
        if is_intersecting {
            if self.shown {
                return RevealChange::Unchanged;
            }
            self.shown = true;
            self.fired = true;
            RevealChange::Show { after_ms: self.delay_ms }
        } else {
            if !self.shown || self.trigger_once {
                return RevealChange::Unchanged;
            }
            self.shown = false;
            RevealChange::Hide
        }
    }

    /// Nothing can change any more, so the element can be unobserved.
    pub fn is_settled(&self) -> bool {
        self.trigger_once && self.fired
    }
}

pub fn stagger_delays(count: usize, delay_ms: u32) -> Vec<u32> {
    (0..count)
        .map(|index| delay_ms + index as u32 * STAGGER_INTERVAL_MS)
        .collect()
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Live observer plus the timers it scheduled. Dropping it releases both.
struct RevealWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    timers: Rc<RefCell<Vec<Timeout>>>,
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.timers.borrow_mut().clear();
    }
}

fn watch<F>(element: &Element, options: &RevealOptions, mut on_entry: F) -> Option<RevealWatch>
where
    F: FnMut(bool, &Element, &IntersectionObserver, &Rc<RefCell<Vec<Timeout>>>) + 'static,
{
    let timers = Rc::new(RefCell::new(Vec::new()));
    let callback = {
        let timers = timers.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(entry.is_intersecting(), &entry.target(), &observer, &timers);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            gloo_console::error!("Could not create IntersectionObserver:", e);
            return None;
        }
    };
    observer.observe(element);

    Some(RevealWatch {
        observer,
        _callback: callback,
        timers,
    })
}

/// Flips to `true` once the referenced element scrolls into view.
///
/// An element that never gets attached to `NodeRef` is never observed and
/// stays hidden.
#[hook]
pub fn use_scroll_reveal(options: RevealOptions) -> (NodeRef, bool) {
    let node_ref = use_node_ref();
    let visible = use_state_eq(prefers_reduced_motion);

    {
        let node_ref = node_ref.clone();
        let setter = visible.setter();
        let already_visible = *visible;
        use_effect_with_deps(
            move |options: &RevealOptions| {
                let watch = match node_ref.cast::<Element>() {
                    Some(element) if !already_visible || !options.trigger_once => {
                        let mut tracker = RevealTracker::new(options);
                        watch(&element, options, move |is_intersecting, target, observer, timers| {
                            match tracker.on_intersection(is_intersecting) {
                                RevealChange::Show { after_ms: 0 } => setter.set(true),
                                RevealChange::Show { after_ms } => {
                                    let setter = setter.clone();
                                    timers
                                        .borrow_mut()
                                        .push(Timeout::new(after_ms, move || setter.set(true)));
                                }
                                RevealChange::Hide => {
                                    timers.borrow_mut().clear();
                                    setter.set(false);
                                }
                                RevealChange::Unchanged => {}
                            }
                            if tracker.is_settled() {
                                observer.unobserve(target);
                            }
                        })
                    }
                    _ => None,
                };
                move || drop(watch)
            },
            options,
        );
    }

    (node_ref, *visible)
}

#[derive(Clone, Debug, PartialEq)]
struct StaggerState {
    visible: Vec<bool>,
}

enum StaggerAction {
    Resize(usize),
    Reveal(usize),
}

impl Reducible for StaggerState {
    type Action = StaggerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StaggerAction::Resize(count) if count != self.visible.len() => {
                let mut visible = self.visible.clone();
                let fill = !visible.is_empty() && visible.iter().all(|v| *v);
                visible.resize(count, fill);
                Rc::new(StaggerState { visible })
            }
            StaggerAction::Reveal(index) if self.visible.get(index) == Some(&false) => {
                let mut visible = self.visible.clone();
                visible[index] = true;
                Rc::new(StaggerState { visible })
            }
            _ => self,
        }
    }
}

/// Reveals `count` items one after another once the container scrolls
/// into view. Item `i` appears `delay + i * 100ms` after the first
/// intersection and stays visible.
#[hook]
pub fn use_staggered_reveal(count: usize, options: RevealOptions) -> (NodeRef, Vec<bool>) {
    let node_ref = use_node_ref();
    let state = use_reducer_eq(|| StaggerState {
        visible: vec![prefers_reduced_motion(); count],
    });

    {
        let node_ref = node_ref.clone();
        let dispatcher = state.dispatcher();
        let all_visible = state.visible.iter().all(|v| *v) && !state.visible.is_empty();
        use_effect_with_deps(
            move |(count, options): &(usize, RevealOptions)| {
                let count = *count;
                dispatcher.dispatch(StaggerAction::Resize(count));
                let watch = match node_ref.cast::<Element>() {
                    Some(element) if !all_visible => {
                        let mut started = false;
                        let delays = stagger_delays(count, options.delay_ms);
                        watch(&element, options, move |is_intersecting, target, observer, timers| {
                            if !is_intersecting || started {
                                return;
                            }
                            started = true;
                            observer.unobserve(target);
                            let mut timers = timers.borrow_mut();
                            for (index, after_ms) in delays.iter().copied().enumerate() {
                                let dispatcher = dispatcher.clone();
                                timers.push(Timeout::new(after_ms, move || {
                                    dispatcher.dispatch(StaggerAction::Reveal(index))
                                }));
                            }
                        })
                    }
                    _ => None,
                };
                move || drop(watch)
            },
            (count, options),
        );
    }

    (node_ref, state.visible.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_once_shows_exactly_once() {
        let mut tracker = RevealTracker::new(&RevealOptions::default());
        assert_eq!(tracker.on_intersection(true), RevealChange::Show { after_ms: 0 });
        assert!(tracker.is_settled());
        assert_eq!(tracker.on_intersection(false), RevealChange::Unchanged);
        assert_eq!(tracker.on_intersection(true), RevealChange::Unchanged);
    }

    #[test]
    fn exit_before_entering_does_nothing() {
        let mut tracker = RevealTracker::new(&RevealOptions::default().repeating());
        assert_eq!(tracker.on_intersection(false), RevealChange::Unchanged);
        assert!(!tracker.is_settled());
    }

    #[test]
    fn repeating_toggles_both_ways() {
        let mut tracker = RevealTracker::new(&RevealOptions::default().repeating().with_delay(200));
        assert_eq!(tracker.on_intersection(true), RevealChange::Show { after_ms: 200 });
        assert_eq!(tracker.on_intersection(true), RevealChange::Unchanged);
        assert_eq!(tracker.on_intersection(false), RevealChange::Hide);
        assert_eq!(tracker.on_intersection(true), RevealChange::Show { after_ms: 200 });
        assert!(!tracker.is_settled());
    }

    #[test]
    fn stagger_adds_fixed_interval_per_item() {
        assert_eq!(stagger_delays(4, 150), vec![150, 250, 350, 450]);
        assert!(stagger_delays(0, 150).is_empty());
    }

    #[test]
    fn stagger_reveal_ignores_out_of_range_and_repeats() {
        let state = Rc::new(StaggerState { visible: vec![false; 2] });
        let state = state.reduce(StaggerAction::Reveal(1));
        assert_eq!(state.visible, vec![false, true]);
        let same = state.clone().reduce(StaggerAction::Reveal(1));
        assert!(Rc::ptr_eq(&state, &same));
        let same = state.clone().reduce(StaggerAction::Reveal(5));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn stagger_resize_keeps_revealed_items() {
        let state = Rc::new(StaggerState { visible: vec![true, false] });
        let grown = state.reduce(StaggerAction::Resize(3));
        assert_eq!(grown.visible, vec![true, false, false]);

        let all = Rc::new(StaggerState { visible: vec![true, true] });
        assert_eq!(all.reduce(StaggerAction::Resize(3)).visible, vec![true, true, true]);
    }
}
