#[derive(Clone, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub access_token: String,
}

pub trait UserLike {
    fn access_token(&self) -> &str;
}

impl UserLike for User {
    fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// A raw bearer token, for requests with forged or expired tokens.
pub struct Token(pub String);

impl UserLike for Token {
    fn access_token(&self) -> &str {
        &self.0
    }
}
