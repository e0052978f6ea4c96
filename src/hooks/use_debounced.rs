use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Returns `value` once it has stopped changing for `delay_ms`.
///
/// Dropping the pending `Timeout` on each change cancels it.
#[hook]
pub fn use_debounced<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let settled = use_state(|| value.clone());
    {
        let settled = settled.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            let timeout = Timeout::new(delay_ms, move || settled.set(value));
            move || drop(timeout)
        });
    }
    (*settled).clone()
}
