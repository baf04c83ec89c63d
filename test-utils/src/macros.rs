/// Checks status, `success: false` and the error code of a failure envelope.
#[macro_export]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        let expected = &$error;
        assert_eq!(
            $res.status(),
            expected.status(),
            "unexpected status for {}",
            expected.code()
        );

        let body: ::serde_json::Value = $res.json().await;
        assert_eq!(body["success"], false, "not a failure envelope: {}", body);
        assert_eq!(body["code"], expected.code(), "{}", body);
        assert!(body["data"].is_null());
    }};
}
