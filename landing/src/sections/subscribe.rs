//! Email capture form.
//!
//! State lives in a single [`SubscriptionForm`] signal; the only side effect
//! is the [`ResetTimer`] that hides the confirmation again.

use std::time::Duration;

use bella_core::{CONFIRMATION_MESSAGE, SubscriptionForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::timer::ResetTimer;

/// Callback that hides the confirmation for one accepted submit.
pub type ExpireCallback = Box<dyn FnOnce() + 'static>;

/// Runs one submit against `form` and, when accepted, hands `schedule` the
/// delay plus a callback that expires exactly that submit's ticket.
///
/// `schedule` is not called for rejected input.
pub fn submit_and_schedule(
    form: RwSignal<SubscriptionForm>,
    delay: Duration,
    schedule: impl FnOnce(Duration, ExpireCallback),
) {
    if let Some(Ok(ticket)) = form.try_update(|f| f.submit()) {
        schedule(
            delay,
            Box::new(move || {
                form.try_update(|f| f.expire(ticket));
            }),
        );
    }
}

#[component]
pub fn SubscribeSection(
    /// How long the confirmation stays visible after a successful submit
    confirmation: Duration,
) -> impl IntoView {
    let form = RwSignal::new(SubscriptionForm::new());
    let reset = ResetTimer::new();

    let on_submit = move |ev: SubmitEvent| {
        // No navigation, whatever the outcome.
        ev.prevent_default();
        submit_and_schedule(form, confirmation, |delay, expire| reset.replace(delay, expire));
    };

    view! {
        <section id="form" class="subscribe">
            <div class="container narrow">
                <h2 class="section-title">"Stay in the Loop"</h2>
                <p class="section-lead">
                    "Get updates on new arrivals, limited editions, and styling tips straight to your inbox."
                </p>
                <form class="subscribe-form" on:submit=on_submit>
                    <input
                        type="email"
                        class="subscribe-input"
                        placeholder="Your email address"
                        aria-label="Email address"
                        required=true
                        prop:value=move || form.with(|f| f.email_input().to_owned())
                        on:input=move |ev| form.update(|f| f.set_input(event_target_value(&ev)))
                    />
                    <button type="submit" class="btn btn-submit">
                        "Subscribe"
                    </button>
                </form>
                {move || {
                    form.with(|f| f.error_message())
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
                <Show when=move || form.with(|f| f.is_submitted())>
                    <p class="form-success">{CONFIRMATION_MESSAGE}</p>
                </Show>
            </div>
        </section>
    }
}
