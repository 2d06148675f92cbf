//! User Endpoints

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Credentials, LoginResponse};

pub const LOGIN_PATH: &str = "/users/login";

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let response: LoginResponse = self.post(LOGIN_PATH, credentials).await?.json()?;
        Ok(response.token)
    }
}
