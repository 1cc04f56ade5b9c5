use crate::auth::Session;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gate {
    Loading,
    RedirectLogin,
    RedirectHome,
    Allow,
}

// pure function of session state; the caller interprets the decision
pub fn evaluate(session: &Session, requires_superuser: bool) -> Gate {
    if session.loading {
        return Gate::Loading;
    }
    match &session.user {
        None => Gate::RedirectLogin,
        Some(user) if requires_superuser && !user.is_superuser => Gate::RedirectHome,
        Some(_) => Gate::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user(is_superuser: bool) -> User {
        serde_json::from_str(&format!(
            r#"{{"id":1,"username":"anna","is_superuser":{}}}"#,
            is_superuser
        ))
        .unwrap()
    }

    #[test]
    fn loading_defers_every_decision() {
        let session = Session {
            user: None,
            loading: true,
        };
        assert_eq!(evaluate(&session, false), Gate::Loading);
        assert_eq!(evaluate(&session, true), Gate::Loading);
    }

    #[test]
    fn anonymous_goes_to_login() {
        let session = Session {
            user: None,
            loading: false,
        };
        assert_eq!(evaluate(&session, false), Gate::RedirectLogin);
        assert_eq!(evaluate(&session, true), Gate::RedirectLogin);
    }

    #[test]
    fn plain_user_is_kept_off_privileged_pages() {
        let session = Session {
            user: Some(user(false)),
            loading: false,
        };
        assert_eq!(evaluate(&session, false), Gate::Allow);
        assert_eq!(evaluate(&session, true), Gate::RedirectHome);
    }

    #[test]
    fn superuser_passes_everywhere() {
        let session = Session {
            user: Some(user(true)),
            loading: false,
        };
        assert_eq!(evaluate(&session, false), Gate::Allow);
        assert_eq!(evaluate(&session, true), Gate::Allow);
    }
}
