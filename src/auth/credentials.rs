use serde::Deserialize;

use crate::error::WeeklogError;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The identity attached to a session after a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// `local@domain.tld` with no whitespace in any part.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let part_ok = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    part_ok(local) && part_ok(host) && part_ok(tld)
}

/// Check an email/password pair. Any well-formed email with a long-enough
/// password is accepted; there is no user database behind this.
pub fn verify_credentials(credentials: &Credentials) -> Result<AuthenticatedUser, WeeklogError> {
    if !is_valid_email(&credentials.email) {
        return Err(WeeklogError::unauthorized());
    }
    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(WeeklogError::unauthorized());
    }
    let name = credentials
        .email
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string();
    Ok(AuthenticatedUser {
        id: "1".to_string(),
        email: credentials.email.clone(),
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_well_formed_credentials() {
        let user = verify_credentials(&creds("dev@example.com", "password123")).unwrap();
        assert_eq!(user.name, "dev");
        assert_eq!(user.email, "dev@example.com");
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "plain", "no-at.example.com", "a@b", "a b@c.com", "a@b c.com", "@c.com"] {
            assert!(
                verify_credentials(&creds(email, "password123")).is_err(),
                "should reject {email:?}"
            );
        }
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(verify_credentials(&creds("dev@example.com", "12345")).is_err());
        assert!(verify_credentials(&creds("dev@example.com", "123456")).is_ok());
    }
}
