use crate::config::Config;
use crate::models::TokenResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

pub const ACCESS_TOKEN_COOKIE: &str = "spotify_access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "spotify_refresh_token";

const REFRESH_TOKEN_MAX_AGE: Duration = Duration::days(30);

/// Issues and clears the cookie pair that holds a user's Spotify session.
#[derive(Debug, Clone)]
pub struct SessionCookies {
    secure: bool,
}

impl SessionCookies {
    pub fn new(config: &Config) -> Self {
        Self {
            secure: config.cookie_secure,
        }
    }

    pub fn establish(&self, jar: CookieJar, tokens: &TokenResponse) -> CookieJar {
        jar.add(self.build(
            ACCESS_TOKEN_COOKIE,
            tokens.access_token.clone(),
            Duration::seconds(tokens.expires_in.max(0)),
        ))
        .add(self.build(
            REFRESH_TOKEN_COOKIE,
            tokens.refresh_token.clone(),
            REFRESH_TOKEN_MAX_AGE,
        ))
    }

    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        // Removal only matches when the path is the one the cookie was set with
        jar.remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
            .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/"))
    }

    pub fn access_token(jar: &CookieJar) -> Option<String> {
        jar.get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }

    fn build(&self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(max_age)
            .build()
    }
}
