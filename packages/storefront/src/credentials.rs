//! Where the page finds the bearer token for API calls.

use std::rc::Rc;

/// Name of the cookie the login page stores the token under.
pub const TOKEN_COOKIE: &str = "jwt_token";

pub trait CredentialStore {
    fn bearer_token(&self) -> Option<String>;
}

/// A token known up front, used by native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for StaticToken {
    fn from(token: Option<String>) -> Self {
        Self(token)
    }
}

impl CredentialStore for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the token from `document.cookie`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserCookies {
    fn bearer_token(&self) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?;
        let cookies = document.cookie().ok()?;
        cookie_value(&cookies, TOKEN_COOKIE)
    }
}

/// Looks `name` up in a `key=value; key=value` cookie string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// The credential store handed to the page through context.
#[derive(Clone)]
pub struct Credentials(Rc<dyn CredentialStore>);

impl Credentials {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.0.bearer_token()
    }
}
