//! Search panel: flight number, airline, and status filters.

use flights::FlightSearchRequest;
use leptos::prelude::*;

use crate::state::search::{SearchForm, status_filter_options};

/// Emits cleaned criteria through `on_search`; `on_clear` fires after the
/// inputs are reset.
#[component]
pub fn FlightSearch(on_search: Callback<FlightSearchRequest>, on_clear: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(SearchForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(form.with(SearchForm::criteria));
    };

    let on_reset = move |_| {
        form.update(SearchForm::clear);
        on_clear.run(());
    };

    view! {
        <form class="flight-search" on:submit=on_submit>
            <input
                class="flight-search__input"
                type="text"
                placeholder="Flight number"
                prop:value=move || form.with(|f| f.flight_number.clone())
                on:input=move |ev| form.update(|f| f.flight_number = event_target_value(&ev))
            />
            <input
                class="flight-search__input"
                type="text"
                placeholder="Airline"
                prop:value=move || form.with(|f| f.airline.clone())
                on:input=move |ev| form.update(|f| f.airline = event_target_value(&ev))
            />
            <select
                class="flight-search__select"
                prop:value=move || form.with(|f| f.status.clone())
                on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
            >
                {status_filter_options()
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <button class="btn btn--primary" type="submit">
                "Search"
            </button>
            <button class="btn" type="button" on:click=on_reset>
                "Clear"
            </button>
        </form>
    }
}
