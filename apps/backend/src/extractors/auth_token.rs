use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};

use crate::AppError;

/// Bearer token extracted from the Authorization header.
///
/// Absence or a malformed header is `MissingToken`; whether the token itself
/// is any good is the session guard's call.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// Parse "Bearer <token>" from an Authorization header value.
    pub fn parse_header(auth_value: &str) -> Result<Self, AppError> {
        let parts: Vec<&str> = auth_value.split_whitespace().collect();
        if parts.len() != 2 || parts[0] != "Bearer" {
            return Err(AppError::MissingToken);
        }

        let token = parts[1];
        if token.is_empty() {
            return Err(AppError::MissingToken);
        }

        Ok(AuthToken {
            token: token.to_string(),
        })
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .ok_or(AppError::MissingToken)?;

            let auth_value = auth_header.to_str().map_err(|_| AppError::MissingToken)?;

            AuthToken::parse_header(auth_value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AuthToken;
    use crate::AppError;

    #[test]
    fn test_parse_header() {
        let token = AuthToken::parse_header("Bearer abc.def.ghi").unwrap();
        assert_eq!(token.token, "abc.def.ghi");

        for bad in ["", "Bearer", "Bearer ", "Basic abc", "abc.def.ghi", "Bearer a b"] {
            assert!(
                matches!(AuthToken::parse_header(bad), Err(AppError::MissingToken)),
                "{bad:?}"
            );
        }
    }
}
