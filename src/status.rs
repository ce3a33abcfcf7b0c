//! HTTP status codes Trakt documents and the human-readable messages for the ones a client should explain to its
//! user.

/// Success.
pub const SUCCESS: u16 = 200;
/// Success; a new resource was created (POST).
pub const SUCCESS_NEW_RESOURCE_CREATED: u16 = 201;
/// Success; no content to return (DELETE).
pub const SUCCESS_NO_CONTENT: u16 = 204;
/// The request couldn't be parsed.
pub const BAD_REQUEST: u16 = 400;
/// OAuth must be provided.
pub const UNAUTHORIZED: u16 = 401;
/// Invalid API key or unapproved app.
pub const FORBIDDEN: u16 = 403;
/// The method exists, but no record was found.
pub const NOT_FOUND: u16 = 404;
/// The method doesn't exist.
pub const METHOD_NOT_FOUND: u16 = 405;
/// The resource was already created.
pub const CONFLICT: u16 = 409;
/// Use the application/json content type.
pub const PRECONDITION_FAILED: u16 = 412;
/// Validation errors.
pub const UNPROCESSABLE_ENTITY: u16 = 422;
/// The Trakt account is locked.
pub const ACCOUNT_LOCKED: u16 = 423;
/// The user must upgrade to VIP.
pub const VIP_ONLY: u16 = 426;
/// Rate limit exceeded.
pub const RATE_LIMIT_EXCEEDED: u16 = 429;
/// Server error; the first of the server error range.
pub const SERVER_ERROR: u16 = 500;
/// Service unavailable; Cloudflare error.
pub const CLOUDFLARE_ERROR: u16 = 520;
/// Service unavailable; Cloudflare error.
pub const CLOUDFLARE_ERROR_2: u16 = 521;
/// Service unavailable; Cloudflare error.
pub const CLOUDFLARE_ERROR_3: u16 = 522;

const UNAUTHORIZED_MESSAGE: &str = "App not authorized. Please sign in again.";
const FORBIDDEN_MESSAGE: &str = "Invalid API Key";
const NOT_FOUND_MESSAGE: &str = "API not found";
const LOCKED_MESSAGE: &str =
    "Trakt.tv has indicated that this account is locked. Please contact Trakt support to unlock your account.";
const SERVER_ERROR_MESSAGE: &str = "Trakt.tv is down. Please try again later.";
const CLOUDFLARE_ERROR_MESSAGE: &str = "CloudFlare error. Please try again later.";

/// Returns a human-readable message for a status code, or `None` if the status has no message.
///
/// A 429 response is explained with the account-locked message.
pub fn message_for(status: u16) -> Option<&'static str> {
    match status {
        UNAUTHORIZED => Some(UNAUTHORIZED_MESSAGE),
        FORBIDDEN => Some(FORBIDDEN_MESSAGE),
        NOT_FOUND => Some(NOT_FOUND_MESSAGE),
        RATE_LIMIT_EXCEEDED => Some(LOCKED_MESSAGE),
        SERVER_ERROR..=519 => Some(SERVER_ERROR_MESSAGE),
        CLOUDFLARE_ERROR..=599 => Some(CLOUDFLARE_ERROR_MESSAGE),
        _ => None,
    }
}
