//! Create, edit, and view page for a single flight.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves `/flights/create`, `/flights/:id`, and `/flights/:id/:action`. The
//! route decides the mode; `FlightForm` owns field enablement, validation,
//! and the payload built on submit.
//!
//! ERROR HANDLING
//! ==============
//! Load failures surface the error toast and return to the list after a
//! short delay. Save failures stay on the form with the error toast.

#[cfg(feature = "hydrate")]
use std::time::Duration;

use flights::{DateFormat, FlightField, FlightStatus, format_flight_date};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::Toast;
#[cfg(feature = "hydrate")]
use crate::state::flight_form::REDIRECT_AFTER_SAVE_MS;
use crate::state::flight_form::{FlightForm, FormMode, LIST_PATH, REDIRECT_AFTER_LOAD_FAILURE_MS, SubmitAction};
use crate::state::toast::ToastKind;

#[component]
pub fn FlightFormPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let form = RwSignal::new(FlightForm::create());

    // Pending return to the list, in milliseconds from now.
    let leave_after = RwSignal::new(None::<u64>);
    Effect::new(move || {
        let Some(delay_ms) = leave_after.get() else {
            return;
        };
        leave_after.set(None);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(delay_ms)).await;
                navigate(LIST_PATH, NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, delay_ms);
    });

    let load = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_flight(id).await {
                Ok(flight) => form.update(|f| f.load_succeeded(flight)),
                Err(e) => {
                    form.update(|f| f.load_failed(&e));
                    leave_after.set(Some(REDIRECT_AFTER_LOAD_FAILURE_MS));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    // Re-resolve whenever the route parameters change.
    Effect::new(move || {
        let (id, action) = params.with(|p| (p.get("id"), p.get("action")));
        let (next, load_id) = FlightForm::from_route(id.as_deref(), action.as_deref());
        let unreadable_id = next.mode != FormMode::Create && load_id.is_none();
        form.set(next);
        if let Some(id) = load_id {
            load(id);
        } else if unreadable_id {
            leave_after.set(Some(REDIRECT_AFTER_LOAD_FAILURE_MS));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(SubmitAction::Create(body)) = form.try_update(FlightForm::submit) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_flight(&body).await {
                Ok(()) => {
                    form.update(FlightForm::save_succeeded);
                    leave_after.set(Some(REDIRECT_AFTER_SAVE_MS));
                }
                Err(e) => form.update(|f| f.save_failed(&e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    let on_confirm_update = Callback::new(move |()| {
        let Some((id, body)) = form.try_update(FlightForm::confirm_update).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_flight(id, &body).await {
                Ok(()) => {
                    form.update(FlightForm::save_succeeded);
                    leave_after.set(Some(REDIRECT_AFTER_SAVE_MS));
                }
                Err(e) => form.update(|f| f.save_failed(&e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, body);
    });
    let on_cancel_update = Callback::new(move |()| form.update(FlightForm::cancel_update));

    let mode = move || form.with(|f| f.mode);
    let submit_label = move || match mode() {
        FormMode::Create => "Create Flight",
        _ => "Update Flight",
    };

    view! {
        <div class="flight-form-page">
            <header class="page-header">
                <h1>{move || form.with(FlightForm::title)}</h1>
                <Show when=move || mode() == FormMode::View>
                    <a class="btn" href=move || form.with(FlightForm::edit_path).unwrap_or_default()>
                        "Edit"
                    </a>
                </Show>
            </header>

            <Toast
                message=Signal::derive(move || form.with(|f| f.success.message().map(str::to_owned)))
                kind=ToastKind::Success
                on_dismiss=Callback::new(move |()| form.update(|f| f.success.dismiss()))
            />
            <Toast
                message=Signal::derive(move || form.with(|f| f.error.message().map(str::to_owned)))
                kind=ToastKind::Error
                on_dismiss=Callback::new(move |()| form.update(|f| f.error.dismiss()))
            />

            <form class="flight-form" on:submit=on_submit>
                <Show when=move || form.with(|f| f.flight.is_some())>
                    <div class="flight-form__number">
                        "Flight number: "
                        {move || form.with(|f| f.flight.as_ref().map(|fl| fl.flight_number.clone()))}
                    </div>
                </Show>
                <TextField form=form field=FlightField::Airline placeholder="e.g., KLM" />
                <TextField form=form field=FlightField::Destination placeholder="e.g., Amsterdam" />
                <GateField form=form />
                <TextField form=form field=FlightField::DepartureTime input_type="datetime-local" />
                <Show when=move || mode() == FormMode::View>
                    <div class="form-field__hint">
                        {move || format_flight_date(form.with(|f| f.value(FlightField::DepartureTime).to_owned()).as_str(), DateFormat::Medium)}
                    </div>
                </Show>
                <StatusField form=form />

                <div class="form-actions">
                    <a class="btn" href=LIST_PATH>
                        {move || if mode() == FormMode::View { "Back" } else { "Cancel" }}
                    </a>
                    <Show when=move || mode() != FormMode::View>
                        <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.loading)>
                            {submit_label}
                        </button>
                    </Show>
                </div>
            </form>

            <Show when=move || form.with(|f| f.show_confirmation)>
                <ConfirmDialog
                    title="Confirm Update"
                    message=Signal::derive(move || {
                        let number = form.with(|f| f.flight.as_ref().map(|fl| fl.flight_number.clone()).unwrap_or_default());
                        format!("Save changes to flight {number}?")
                    })
                    confirm_label="Update"
                    busy=Signal::derive(move || form.with(|f| f.loading))
                    on_confirm=on_confirm_update
                    on_cancel=on_cancel_update
                />
            </Show>
        </div>
    }
}

fn input_class(form: RwSignal<FlightForm>, field: FlightField) -> &'static str {
    if form.with(|f| f.visible_error(field).is_some()) {
        "form-field__input form-field__input--invalid"
    } else {
        "form-field__input"
    }
}

#[component]
fn FieldMessage(form: RwSignal<FlightForm>, field: FlightField) -> impl IntoView {
    move || {
        form.with(|f| f.visible_error(field))
            .map(|err| view! { <span class="form-field__error">{format!("{} {err}", field.label())}</span> })
    }
}

#[component]
fn TextField(
    form: RwSignal<FlightForm>,
    field: FlightField,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{field.label()}</span>
            <input
                class=move || input_class(form, field)
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(|f| f.value(field).to_owned())
                prop:disabled=move || form.with(|f| !f.is_enabled(field))
                on:input=move |ev| {
                    form.update(|f| {
                        f.set_value(field, event_target_value(&ev));
                    });
                }
                on:blur=move |_| form.update(|f| f.touch(field))
            />
            <FieldMessage form=form field=field />
        </label>
    }
}

/// Gate input. In edit mode the value is shown read-only with a change
/// affordance until the operator opens the inline editor.
#[component]
fn GateField(form: RwSignal<FlightForm>) -> impl IntoView {
    let field = FlightField::Gate;
    let inline = move || form.with(|f| f.mode == FormMode::Edit && !f.editing_gate);

    view! {
        <Show when=inline fallback=move || view! { <TextField form=form field=field placeholder="e.g., A12" /> }>
            <div class="form-field">
                <span class="form-field__label">{field.label()}</span>
                <span class="form-field__value">{move || form.with(|f| f.value(field).to_owned())}</span>
                <button class="btn btn--small" type="button" on:click=move |_| form.update(FlightForm::start_edit_gate)>
                    "Change gate"
                </button>
            </div>
        </Show>
        <Show when=move || form.with(|f| f.editing_gate)>
            <div class="form-field__inline-actions">
                <button
                    class="btn btn--small btn--primary"
                    type="button"
                    disabled=move || form.with(|f| f.field_error(field).is_some())
                    on:click=move |_| form.update(FlightForm::save_gate)
                >
                    "Save gate"
                </button>
                <button class="btn btn--small" type="button" on:click=move |_| form.update(FlightForm::cancel_edit_gate)>
                    "Cancel"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn StatusField(form: RwSignal<FlightForm>) -> impl IntoView {
    let field = FlightField::Status;

    view! {
        <label class="form-field">
            <span class="form-field__label">{field.label()}</span>
            <select
                class=move || input_class(form, field)
                prop:value=move || form.with(|f| f.value(field).to_owned())
                prop:disabled=move || form.with(|f| !f.is_enabled(field))
                on:change=move |ev| {
                    form.update(|f| {
                        f.set_value(field, event_target_value(&ev));
                    });
                }
                on:blur=move |_| form.update(|f| f.touch(field))
            >
                {FlightStatus::ALL
                    .iter()
                    .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <FieldMessage form=form field=field />
        </label>
    }
}
