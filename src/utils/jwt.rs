use jsonwebtoken::{
	decode, encode, errors::Result, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use serde::{Deserialize, Serialize};

use crate::core::identity::Role;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
	pub id: String,
	#[serde(default)]
	pub role: Role,
	pub exp: usize,
}

pub fn generate(claims: Claims, secret_key: &str) -> Result<String> {
	encode(
		&Header::default(),
		&claims,
		&EncodingKey::from_secret(secret_key.as_bytes()),
	)
}

pub fn verify(token: &str, secret_key: &str) -> Result<TokenData<Claims>> {
	decode::<Claims>(
		&token,
		&DecodingKey::from_secret(secret_key.as_bytes()),
		&Validation::new(Algorithm::HS256),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::{Duration, SystemTime, UNIX_EPOCH};

	fn expiration_from_sec(sec: u64) -> usize {
		(SystemTime::now() + Duration::from_secs(sec))
			.duration_since(UNIX_EPOCH)
			.unwrap()
			.as_secs() as usize
	}

	#[test]
	fn token_round_trip_preserves_claims() {
		let claims = Claims {
			id: "7f1c2a9e".to_string(),
			role: Role::Admin,
			exp: expiration_from_sec(600),
		};

		let token = generate(claims, "test-secret").unwrap();
		let data = verify(&token, "test-secret").unwrap();

		assert_eq!(data.claims.id, "7f1c2a9e");
		assert_eq!(data.claims.role, Role::Admin);
	}

	#[test]
	fn missing_role_claim_defaults_to_user() {
		let raw = r#"{ "id": "7f1c2a9e", "exp": 0 }"#;
		let claims: Claims = serde_json::from_str(raw).unwrap();
		assert_eq!(claims.role, Role::User);
	}

	#[test]
	fn wrong_secret_is_rejected() {
		let claims = Claims {
			id: "7f1c2a9e".to_string(),
			role: Role::User,
			exp: expiration_from_sec(600),
		};

		let token = generate(claims, "test-secret").unwrap();
		assert!(verify(&token, "other-secret").is_err());
	}
}
