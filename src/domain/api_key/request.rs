//! Form submissions sent to the key management endpoints

/// Value the registration form expects in `agreeToTerms`
pub const AGREE_TO_TERMS: &str = "agreed";

/// Value of the registration form's submit button
pub const REGISTER_SUBMIT: &str = "Register";

/// Confirmation text the revocation form expects in `revoke`
pub const REVOKE_CONFIRMATION: &str = "Revoke My Steam Web API Key";

/// Registration form for a new key scoped to `domain`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    domain: String,
    session_id: String,
}

impl RegistrationRequest {
    pub fn new(domain: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            session_id: session_id.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn form_fields(&self) -> Vec<(&str, &str)> {
        vec![
            ("domain", self.domain.as_str()),
            ("agreeToTerms", AGREE_TO_TERMS),
            ("sessionid", self.session_id.as_str()),
            ("Submit", REGISTER_SUBMIT),
        ]
    }
}

/// Revocation form for the account's current key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevocationRequest {
    session_id: String,
}

impl RevocationRequest {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }

    pub fn form_fields(&self) -> Vec<(&str, &str)> {
        vec![
            ("revoke", REVOKE_CONFIRMATION),
            ("sessionid", self.session_id.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_form_fields() {
        let request = RegistrationRequest::new("example.com", "sess-123");

        assert_eq!(
            request.form_fields(),
            vec![
                ("domain", "example.com"),
                ("agreeToTerms", "agreed"),
                ("sessionid", "sess-123"),
                ("Submit", "Register"),
            ]
        );
    }

    #[test]
    fn test_revocation_form_fields() {
        let request = RevocationRequest::new("sess-123");

        assert_eq!(
            request.form_fields(),
            vec![
                ("revoke", "Revoke My Steam Web API Key"),
                ("sessionid", "sess-123"),
            ]
        );
    }
}
