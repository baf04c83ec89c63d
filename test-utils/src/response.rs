use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug)]
pub struct TestResponse {
    response: reqwest::Response,
}

impl TestResponse {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        TestResponse { response }
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        self.response
            .json()
            .await
            .expect("failed to deserialize to json")
    }

    /// The `data` field of a success envelope, after checking `success`.
    pub async fn data(self) -> Value {
        let body: Value = self.json().await;
        assert_eq!(body["success"], true, "not a success envelope: {body}");
        body["data"].clone()
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }
}
