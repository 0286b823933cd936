//! Token auth: sign-up, sign-in, sign-out, session restore and the
//! session-change event stream the frontend's session holder subscribes to.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use shared::Profile;
use uuid::Uuid;

use crate::error::Error;
use crate::{http, Client};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// Access/refresh token pair plus the signed-in identity. Held only in
/// memory; a page reload starts signed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

pub(crate) type Listener = Rc<dyn Fn(&AuthEvent)>;

/// Handle returned by [`Client::on_auth_change`]; dropping it unsubscribes.
pub struct AuthSubscription {
    id: usize,
    listeners: Rc<RefCell<Vec<(usize, Listener)>>>,
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

async fn auth_error(response: Response) -> Error {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => {
            let message = body
                .get("error_description")
                .or_else(|| body.get("msg"))
                .and_then(|v| v.as_str())
                .unwrap_or("Đăng nhập thất bại")
                .to_string();
            Error::Auth(message)
        }
        Err(_) => Error::Http {
            status,
            message: "authentication failed".to_string(),
        },
    }
}

impl Client {
    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config().base_url, path)
    }

    fn store_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session.clone();
        let event = match session {
            Some(session) => AuthEvent::SignedIn(session),
            None => AuthEvent::SignedOut,
        };
        // listeners may subscribe or unsubscribe from within the callback,
        // so the borrow must end before any of them runs
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }

    /// Registers a listener for session transitions. The subscription lives
    /// until the returned handle is dropped.
    pub fn on_auth_change(&self, callback: impl Fn(&AuthEvent) + 'static) -> AuthSubscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(callback)));
        AuthSubscription {
            id,
            listeners: self.listeners.clone(),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
        let url = self.auth_url("token?grant_type=password");
        let request = http::attach_headers(Request::post(&url), self.config(), None)
            .json(&PasswordGrant { email, password })
            .map_err(|err| Error::Decode(err.to_string()))?;
        let response = request.send().await?;
        if !response.ok() {
            return Err(auth_error(response).await);
        }
        let session: Session = http::decode(response).await?;
        self.store_session(Some(session.clone()));
        Ok(session)
    }

    /// Creates the account, stores the session, then inserts the user's
    /// profile row carrying the full name.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Session, Error> {
        let request = http::attach_headers(Request::post(&self.auth_url("signup")), self.config(), None)
            .json(&SignUpRequest {
                email,
                password,
                data: SignUpMetadata { full_name },
            })
            .map_err(|err| Error::Decode(err.to_string()))?;
        let response = request.send().await?;
        if !response.ok() {
            return Err(auth_error(response).await);
        }
        let session: Session = http::decode(response).await?;
        self.store_session(Some(session.clone()));

        let profile = Profile {
            id: session.user.id,
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            phone: None,
            birth_date: None,
        };
        let _: Profile = self.insert("profiles", &profile).await?;
        Ok(session)
    }

    pub async fn sign_out(&self) -> Result<(), Error> {
        let token = match self.auth_token() {
            Some(token) => token,
            None => return Ok(()),
        };
        let request = http::attach_headers(
            Request::post(&self.auth_url("logout")),
            self.config(),
            Some(&token),
        );
        http::check(request.send().await?).await?;
        self.store_session(None);
        Ok(())
    }

    /// Returns the held session after confirming its token is still accepted
    /// by the backend; a rejected token clears the slot.
    pub async fn current_session(&self) -> Result<Option<Session>, Error> {
        let session = match self.session.borrow().clone() {
            Some(session) => session,
            None => return Ok(None),
        };
        let request = http::attach_headers(
            Request::get(&self.auth_url("user")),
            self.config(),
            Some(&session.access_token),
        );
        let response = request.send().await?;
        if response.ok() {
            Ok(Some(session))
        } else {
            self.store_session(None);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn client() -> Client {
        Client::new(Config::new("http://localhost:54321", "test-key"))
    }

    #[test]
    fn dropping_a_subscription_unsubscribes() {
        let client = client();
        let subscription = client.on_auth_change(|_| {});
        assert_eq!(client.listeners.borrow().len(), 1);
        drop(subscription);
        assert!(client.listeners.borrow().is_empty());
    }

    #[test]
    fn session_deserializes_from_token_response() {
        let json = r#"{
            "access_token": "abc",
            "refresh_token": "def",
            "user": { "id": "6fa459ea-ee8a-3ca4-894e-db77e160355e", "email": "an@example.com" }
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "abc");
        assert_eq!(session.user.email, "an@example.com");
    }
}
