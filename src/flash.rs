use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

const FLASH_COOKIE: &str = "flash";

/// One-shot notices carried across a redirect in a signed cookie, so
/// the message survives exactly one render and cannot be forged.
pub fn push(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, message.to_string())).path("/").http_only(true);
    jar.add(cookie)
}

/// Pops the pending message, clearing the cookie on the way out.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), Some(message))
        },
        None => (jar, None),
    }
}
