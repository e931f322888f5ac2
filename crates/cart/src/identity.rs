//! Cart identity keys.
//!
//! Every cart operation takes an explicit identity resolved by the caller
//! (the auth layer). The engine never reads session state itself.

use autoparts_core::UserId;

/// The identity a cart belongs to.
///
/// All unauthenticated visitors on one browser share the single guest cart;
/// each authenticated user gets their own. The guest key is distinct from
/// every user key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    Guest,
    User(UserId),
}

impl Identity {
    /// Persistence key for this identity's cart blob.
    #[must_use]
    pub fn cart_key(&self) -> String {
        match self {
            Self::Guest => "cart:guest".to_owned(),
            Self::User(id) => format!("cart:{id}"),
        }
    }
}

impl From<Option<UserId>> for Identity {
    /// `None` means "use the guest cart".
    fn from(user: Option<UserId>) -> Self {
        user.map_or(Self::Guest, Self::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_key_is_distinct_from_user_keys() {
        assert_eq!(Identity::Guest.cart_key(), "cart:guest");
        assert_eq!(Identity::User(UserId::new(7)).cart_key(), "cart:7");
        assert_ne!(
            Identity::Guest.cart_key(),
            Identity::User(UserId::new(0)).cart_key()
        );
    }

    #[test]
    fn test_from_optional_user() {
        assert_eq!(Identity::from(None), Identity::Guest);
        assert_eq!(
            Identity::from(Some(UserId::new(3))),
            Identity::User(UserId::new(3))
        );
    }
}
