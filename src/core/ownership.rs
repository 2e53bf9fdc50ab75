//! The ownership gate, shared by every service that mutates user-owned
//! resources. One pure function decides; callers translate a denial into
//! `Forbidden` or a privacy-preserving `NotFound` as their read/mutate
//! semantics require.

use crate::core::identity::{Identity, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
	/// Readable by anyone; mutable only by privileged actors.
	Public,
	/// Readable and mutable only by the stored owner.
	Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
	Read,
	Mutate,
}

pub fn evaluate(actor: &Identity, resource_owner: Option<&str>, visibility: Visibility, access: Access) -> bool {
	if actor.role == Role::Admin {
		return true;
	}
	match (visibility, access) {
		(Visibility::Public, Access::Read) => true,
		(Visibility::Public, Access::Mutate) => false,
		(Visibility::Private, _) => resource_owner == Some(actor.user_id.as_str()),
	}
}

pub fn can_read(actor: &Identity, resource_owner: Option<&str>, visibility: Visibility) -> bool {
	evaluate(actor, resource_owner, visibility, Access::Read)
}

pub fn can_mutate(actor: &Identity, resource_owner: Option<&str>, visibility: Visibility) -> bool {
	evaluate(actor, resource_owner, visibility, Access::Mutate)
}
