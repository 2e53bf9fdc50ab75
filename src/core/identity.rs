//! The identity context attached to each inbound operation. The HTTP layer
//! resolves it from the signed access token; services only consume the
//! resulting `(user_id, role)` pair to decide ownership.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::jwt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	#[default]
	User,
	Admin,
}

#[derive(Debug, Clone)]
pub struct Identity {
	pub user_id: String,
	pub role: Role,
}

impl Identity {
	pub fn is_admin(&self) -> bool {
		self.role == Role::Admin
	}
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Identity, AppError> {
		let jar = CookieJar::from_request_parts(parts, state)
			.await
			.map_err(|err| AppError::Unauthorized(err.to_string()))?;

		let access_token = jar
			.get("access_token")
			.ok_or_else(|| AppError::Unauthorized("No access token provided".to_string()))?;

		let secret_key =
			std::env::var("JWT_SECRET_KEY").map_err(|_| AppError::internal("JWT_SECRET_KEY must be set in .env file"))?;

		let data = jwt::verify(access_token.value(), &secret_key)
			.map_err(|err| AppError::Unauthorized(err.to_string()))?;

		Ok(Identity {
			user_id: data.claims.id,
			role: data.claims.role,
		})
	}
}
