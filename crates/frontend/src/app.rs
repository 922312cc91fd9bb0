use crate::reports::sales::sales_by_customer::SalesByCustomerPage;
use crate::reports::sales::sales_by_region::SalesByRegionPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn Nav() -> impl IntoView {
    view! {
        <nav class="app-nav">
            <A href="/reports/sales/customer">"Sales by Customer"</A>
            " | "
            <A href="/reports/sales/regions">"Sales by Region"</A>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main class="app-main">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=SalesByCustomerPage />
                    <Route path=path!("/reports/sales/customer") view=SalesByCustomerPage />
                    <Route path=path!("/reports/sales/regions") view=SalesByRegionPage />
                </Routes>
            </main>
        </Router>
    }
}
