use serde::{Deserialize, Serialize};

use crate::users::PublicUser;

use super::jwt::Claims;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login. The token is also set as an
/// http-only cookie; it is echoed in the body for non-browser clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: PublicUser,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for `GET /auth/me`: the principal as decoded from the token.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Claims,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn login_response_uses_camel_case() {
        let response = LoginResponse {
            user: PublicUser {
                id: Uuid::new_v4(),
                name: "Admin".into(),
                email: "admin@gmail.com".into(),
            },
            access_token: "header.payload.signature".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"accessToken\""));
        assert!(!json.contains("access_token"));
    }
}
