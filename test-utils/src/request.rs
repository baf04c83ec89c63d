use super::{response::TestResponse, user::UserLike};
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;

#[derive(Debug)]
pub struct RequestBuilder {
    builder: reqwest::RequestBuilder,
}

#[allow(unused)]
impl RequestBuilder {
    pub(super) fn new(builder: reqwest::RequestBuilder) -> Self {
        RequestBuilder { builder }
    }

    pub async fn send(self) -> TestResponse {
        TestResponse::new(self.builder.send().await.expect("failed to send request"))
    }

    pub fn json<T>(mut self, value: &T) -> RequestBuilder
    where
        T: Serialize + ?Sized,
    {
        self.builder = self.builder.json(value);
        self
    }

    pub fn body(mut self, body: impl Into<reqwest::Body>) -> RequestBuilder {
        self.builder = self.builder.body(body);
        self
    }

    pub fn query<T>(mut self, query: &T) -> RequestBuilder
    where
        T: Serialize + ?Sized,
    {
        self.builder = self.builder.query(query);
        self
    }

    pub fn user(mut self, user: &impl UserLike) -> RequestBuilder {
        self.builder = self.builder.bearer_auth(user.access_token());
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> RequestBuilder
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        self.builder = self.builder.header(key, value);
        self
    }
}
