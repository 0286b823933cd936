use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::{
    budget::BudgetPage, dashboard::Dashboard, debts::DebtsPage, login::Login,
    register::Register, reports::Reports, settings::Settings, transactions::TransactionsPage,
};
use crate::session::{use_session, SessionProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Transactions,
    Budget,
    Debts,
    Reports,
    Settings,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Tổng quan",
            Page::Transactions => "Giao dịch",
            Page::Budget => "Ngân sách",
            Page::Debts => "Vay nợ",
            Page::Reports => "Báo cáo",
            Page::Settings => "Cài đặt",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum AuthView {
    Login,
    Register,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <Shell />
        </SessionProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let ctx = use_session();
    let page = use_state(|| Page::Dashboard);
    let auth_view = use_state(|| AuthView::Login);

    let session = match &ctx.session {
        Some(session) => session.clone(),
        None => {
            let to_register = {
                let auth_view = auth_view.clone();
                Callback::from(move |_| auth_view.set(AuthView::Register))
            };
            let to_login = {
                let auth_view = auth_view.clone();
                Callback::from(move |_| auth_view.set(AuthView::Login))
            };
            return match *auth_view {
                AuthView::Login => html! { <Login on_switch={to_register} /> },
                AuthView::Register => html! { <Register on_switch={to_login} /> },
            };
        }
    };

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let current = *page;
    html! {
        <div class="app-shell">
            <Navbar current={current} on_navigate={on_navigate} email={session.user.email.clone()} />
            <main class="app-main">
                {match current {
                    Page::Dashboard => html! { <Dashboard /> },
                    Page::Transactions => html! { <TransactionsPage /> },
                    Page::Budget => html! { <BudgetPage /> },
                    Page::Debts => html! { <DebtsPage /> },
                    Page::Reports => html! { <Reports /> },
                    Page::Settings => html! { <Settings /> },
                }}
            </main>
        </div>
    }
}
