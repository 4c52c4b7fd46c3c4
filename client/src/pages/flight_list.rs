//! Flight listing page with search, pagination, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route (`/flights`). It loads the first page on mount
//! and re-fetches after every search, page change, or delete.
//!
//! DESIGN
//! ======
//! All transitions go through `FlightListState`; each returns the request to
//! issue, and `run` performs it and applies the outcome. Responses are
//! applied in completion order.

use flights::{DateFormat, Flight, FlightSearchRequest, format_flight_date};
use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::flight_search::FlightSearch;
use crate::components::pagination::Pagination;
use crate::components::status_badge::StatusBadge;
use crate::components::toast::Toast;
use crate::state::flight_list::{FlightListState, ListRequest};
use crate::state::toast::ToastKind;

#[component]
pub fn FlightListPage() -> impl IntoView {
    let state = RwSignal::new(FlightListState::default());

    let run = move |request: ListRequest| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::load_page(&request.query).await {
                Ok(page) => state.update(|s| s.apply_page(page)),
                Err(e) => state.update(|s| s.load_failed(&request, &e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    Effect::new(move || {
        if let Some(request) = state.try_update(FlightListState::load) {
            run(request);
        }
    });

    let on_search = Callback::new(move |criteria: FlightSearchRequest| {
        if let Some(request) = state.try_update(|s| s.search(criteria)) {
            run(request);
        }
    });
    let on_clear = Callback::new(move |()| {
        if let Some(request) = state.try_update(FlightListState::clear_search) {
            run(request);
        }
    });
    let on_page = Callback::new(move |page: u32| {
        if let Some(request) = state.try_update(|s| s.change_page(page)) {
            run(request);
        }
    });

    let on_delete = Callback::new(move |id: i64| state.update(|s| s.open_delete(id)));
    let on_cancel_delete = Callback::new(move |()| state.update(FlightListState::cancel_delete));
    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = state.try_update(FlightListState::confirm_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_flight(id).await {
                Ok(()) => {
                    if let Some(request) = state.try_update(FlightListState::delete_succeeded) {
                        run(request);
                    }
                }
                Err(e) => state.update(|s| s.delete_failed(&e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let delete_message = Signal::derive(move || {
        let number = state.with(|s| {
            s.pending_delete
                .and_then(|id| s.flights.iter().find(|f| f.id == id))
                .map(|f| f.flight_number.clone())
                .unwrap_or_default()
        });
        format!("Delete flight {number}? This cannot be undone.")
    });

    view! {
        <div class="flight-list-page">
            <header class="page-header">
                <h1>"Flights"</h1>
                <a class="btn btn--primary" href="/flights/create">
                    "+ New Flight"
                </a>
            </header>

            <Toast
                message=Signal::derive(move || state.with(|s| s.success.message().map(str::to_owned)))
                kind=ToastKind::Success
                on_dismiss=Callback::new(move |()| state.update(|s| s.success.dismiss()))
            />
            <Toast
                message=Signal::derive(move || state.with(|s| s.error.message().map(str::to_owned)))
                kind=ToastKind::Error
                on_dismiss=Callback::new(move |()| state.update(|s| s.error.dismiss()))
            />

            <FlightSearch on_search=on_search on_clear=on_clear />
            <Show when=move || state.with(FlightListState::has_active_search)>
                <div class="search-indicator">"Showing filtered results"</div>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="loading">"Loading flights..."</div> }
            >
                <Show
                    when=move || state.with(|s| !s.flights.is_empty())
                    fallback=move || {
                        let text = if state.with(FlightListState::has_active_search) {
                            "No flights match your search."
                        } else {
                            "No flights found."
                        };
                        view! { <div class="empty-state">{text}</div> }
                    }
                >
                    <table class="flight-table">
                        <thead>
                            <tr>
                                <th>"Flight"</th>
                                <th>"Airline"</th>
                                <th>"Destination"</th>
                                <th>"Gate"</th>
                                <th>"Departure"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.flights.clone())
                                key=|flight| flight.id
                                children=move |flight: Flight| view! { <FlightRow flight=flight on_delete=on_delete /> }
                            />
                        </tbody>
                    </table>
                    <div class="flight-list__summary">
                        {move || {
                            state
                                .with(|s| s.showing_range().map(|(first, last)| (first, last, s.total_elements)))
                                .map(|(first, last, total)| format!("Showing {first}-{last} of {total} flights"))
                        }}
                    </div>
                </Show>
            </Show>

            <Pagination
                pages=Signal::derive(move || state.with(FlightListState::page_numbers))
                current=Signal::derive(move || state.with(|s| s.current_page))
                has_prev=Signal::derive(move || state.with(FlightListState::has_prev))
                has_next=Signal::derive(move || state.with(FlightListState::has_next))
                on_change=on_page
            />

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete Flight"
                    message=delete_message
                    confirm_label="Delete"
                    danger=true
                    busy=Signal::derive(move || state.with(|s| s.loading))
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}

#[component]
fn FlightRow(flight: Flight, on_delete: Callback<i64>) -> impl IntoView {
    let id = flight.id;
    let view_href = format!("/flights/{id}");
    let edit_href = format!("/flights/{id}/edit");
    let departure = format_flight_date(&flight.departure_time, DateFormat::Short);

    view! {
        <tr>
            <td class="flight-table__number">{flight.flight_number}</td>
            <td>{flight.airline}</td>
            <td>{flight.destination}</td>
            <td>{flight.gate}</td>
            <td>{departure}</td>
            <td>
                <StatusBadge status=flight.status />
            </td>
            <td class="flight-table__actions">
                <a class="btn btn--small" href=view_href>
                    "View"
                </a>
                <a class="btn btn--small" href=edit_href>
                    "Edit"
                </a>
                <button class="btn btn--small btn--danger" type="button" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
