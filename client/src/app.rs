//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{flight_form::FlightFormPage, flight_list::FlightListPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Page state is component-local; nothing is shared through context beyond
/// the router and meta tags.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/flightdesk.css"/>
        <Title text="Flight Desk"/>

        <Router>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/flights"/> }/>
                    <Route path=StaticSegment("flights") view=FlightListPage/>
                    <Route path=(StaticSegment("flights"), StaticSegment("create")) view=FlightFormPage/>
                    <Route path=(StaticSegment("flights"), ParamSegment("id")) view=FlightFormPage/>
                    <Route
                        path=(StaticSegment("flights"), ParamSegment("id"), ParamSegment("action"))
                        view=FlightFormPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
