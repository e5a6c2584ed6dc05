use super::prelude::*;

/// A host record decoded from a bulk source, before it is tied to a
/// stored user account.
#[derive(Debug, Clone)]
pub struct NewHost {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
    pub kind: UserKind,
    pub avatar: Option<String>,
}

/// Resolves a decoded host to a stored user id.
///
/// An existing account with the same email wins unchanged: the incoming
/// name, password, kind and avatar are discarded so that import re-runs
/// never overwrite live user data. Only if no account exists is the
/// password hashed with `salt` and a new user persisted.
pub fn resolve_host<R: UserRepo>(repo: &R, host: NewHost, salt: &str) -> Result<Id> {
    if let Some(user) = repo.try_get_user_by_email(&host.email)? {
        return Ok(user.id);
    }
    let name_len = host.name.chars().count();
    if !(User::MIN_NAME_LEN..=User::MAX_NAME_LEN).contains(&name_len) {
        return Err(Error::UserName);
    }
    let password = Password::hash(&host.password, salt)?;
    let user = User {
        id: Id::new(),
        name: host.name,
        email: host.email,
        avatar: host
            .avatar
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| User::DEFAULT_AVATAR.into()),
        password,
        kind: host.kind,
    };
    match repo.create_user(&user) {
        Ok(()) => {
            log::debug!("Created new user: email = {}", user.email);
            Ok(user.id)
        }
        // Lost a race against a concurrent insert for the same email;
        // the store's uniqueness constraint guarantees the row exists now.
        Err(RepoError::AlreadyExists) => Ok(repo.get_user_by_email(&user.email)?.id),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_host(email: &str, name: &str) -> NewHost {
        NewHost {
            name: name.into(),
            email: email.parse().unwrap(),
            password: "secret".into(),
            kind: UserKind::Regular,
            avatar: None,
        }
    }

    #[test]
    fn creates_user_on_first_sight() {
        let db = MockDb::default();
        let id = resolve_host(&db, new_host("a@x.com", "Ann"), "salt").unwrap();
        assert!(id.is_valid());
        assert_eq!(1, db.count_users().unwrap());
        let user = &db.users.borrow()[0];
        assert_eq!("a@x.com", user.email.as_str());
        assert_ne!("secret", user.password.as_ref());
        assert!(user.password.verify("secret"));
        assert_eq!(User::DEFAULT_AVATAR, user.avatar);
    }

    #[test]
    fn second_resolution_returns_same_id() {
        let db = MockDb::default();
        let first = resolve_host(&db, new_host("a@x.com", "Ann"), "salt").unwrap();
        let second = resolve_host(&db, new_host("a@x.com", "Totally Else"), "salt").unwrap();
        assert_eq!(first, second);
        assert_eq!(1, db.count_users().unwrap());
        // the existing identity is untouched
        assert_eq!("Ann", db.users.borrow()[0].name);
    }

    #[test]
    fn recovers_from_duplicate_email_race() {
        let db = MockDb::default();
        db.fail_next_create_user_with_duplicate.set(true);
        let id = resolve_host(&db, new_host("a@x.com", "Ann"), "salt").unwrap();
        // the "winning" row planted by the mock is returned
        assert_eq!(db.users.borrow()[0].id, id);
        assert_eq!(1, db.count_users().unwrap());
    }

    #[test]
    fn rejects_over_long_name() {
        let db = MockDb::default();
        let err = resolve_host(&db, new_host("a@x.com", "a name that is way too long"), "s")
            .err()
            .unwrap();
        assert!(matches!(err, Error::UserName));
        assert_eq!(0, db.count_users().unwrap());
    }
}
