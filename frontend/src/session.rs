//! Session holder: reads the current session once at startup, subscribes to
//! auth transitions for its lifetime, and provides both the session and the
//! backend client to the rest of the tree via Yew context.

use finbook_client::auth::{AuthEvent, Session};
use finbook_client::Client;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone)]
pub struct SessionContext {
    pub session: Option<Session>,
    pub client: Client,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        // all clients in one app share state; only session changes re-render
        self.session == other.session
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let client = use_memo((), |_| Client::from_env());
    let session = use_state(|| Option::<Session>::None);
    let checked = use_state(|| false);

    use_effect_with((), {
        let client = (*client).clone();
        let session = session.clone();
        let checked = checked.clone();
        move |_| {
            // subscribe before the initial read so no transition is missed
            let subscription = client.on_auth_change({
                let session = session.clone();
                move |event: &AuthEvent| match event {
                    AuthEvent::SignedIn(new_session) => session.set(Some(new_session.clone())),
                    AuthEvent::SignedOut => session.set(None),
                }
            });

            {
                let client = client.clone();
                let session = session.clone();
                let checked = checked.clone();
                spawn_local(async move {
                    match client.current_session().await {
                        Ok(current) => session.set(current),
                        Err(err) => {
                            gloo::console::error!(
                                "Failed to restore session:",
                                err.to_string()
                            );
                        }
                    }
                    checked.set(true);
                });
            }

            move || drop(subscription)
        }
    });

    if !*checked {
        return html! {
            <div class="app-loading">
                <div class="loading-spinner"></div>
            </div>
        };
    }

    let context = SessionContext {
        session: (*session).clone(),
        client: (*client).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext missing; wrap the app in SessionProvider")
}
