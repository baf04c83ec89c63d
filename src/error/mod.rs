mod constants;
mod db;

pub use constants::*;
pub use db::*;

use crate::extractors::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

/// A catalogued API failure. Every value is a `const` from [`constants`],
/// `message` only borrows non-static data in tests.
#[derive(Debug, Clone, Copy)]
pub struct Error<'a> {
    status: StatusCode,
    code: &'static str,
    message: &'a str,
}

pub type Result<T = ()> = std::result::Result<T, Error<'static>>;

/// Body of every failed request, the counterpart of `Envelope`.
#[derive(Serialize)]
struct Failure<'a> {
    success: bool,
    message: &'a str,
    code: &'static str,
    data: (),
}

impl<'a> Error<'a> {
    const fn new(status: StatusCode, code: &'static str, message: &'a str) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }
}

impl IntoResponse for Error<'_> {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code, "request failed: {}", self.message);
        } else {
            debug!(code = self.code, "request rejected: {}", self.message);
        }

        let body = Failure {
            success: false,
            message: self.message,
            code: self.code,
            data: (),
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<DbErr> for Error<'_> {
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        DATABASE_ERROR
    }
}

impl From<jsonwebtoken::errors::Error> for Error<'_> {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        error!("failed to sign token: {:?}", error);
        TOKEN_GENERATION
    }
}

impl From<bcrypt::BcryptError> for Error<'_> {
    fn from(error: bcrypt::BcryptError) -> Self {
        error!("bcrypt error: {:?}", error);
        PASSWORD_HASH
    }
}

impl From<tokio::task::JoinError> for Error<'_> {
    fn from(error: tokio::task::JoinError) -> Self {
        error!("blocking task failed: {:?}", error);
        INTERNAL
    }
}

/// Declares the error catalogue, one `NAME = (code, status, message);` per
/// entry. A code used twice fails to compile.
macro_rules! catalogue {
    ($($name:ident = ($code:literal, $status:ident, $msg:literal);)*) => {
        $(
            macros::error_code_to_ident!($code);
            pub const $name: $crate::error::Error<'static> = $crate::error::Error::new(
                ::axum::http::StatusCode::$status,
                $code,
                $msg,
            );
        )*

        #[cfg(test)]
        pub(super) const ALL: &[$crate::error::Error<'static>] = &[$($name),*];
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use catalogue;
