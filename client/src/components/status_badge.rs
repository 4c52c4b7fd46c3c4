//! Colored status pill.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use flights::{FlightStatus, status_label};
use leptos::prelude::*;

fn badge_class(status: FlightStatus) -> String {
    let modifier = status.as_str().to_ascii_lowercase().replace('_', "-");
    format!("status-badge status-badge--{modifier}")
}

#[component]
pub fn StatusBadge(status: FlightStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status_label(status)}</span> }
}
