pub use crate::{
    assert_error, get_cached_app,
    request::RequestBuilder,
    response::TestResponse,
    team::Team,
    user::{Token, User, UserLike},
    uuid, App,
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use football_backend::error;
pub use http::{header, StatusCode};
pub use serde_json::{json, Value};
pub use serial_test::{self, parallel, serial};
