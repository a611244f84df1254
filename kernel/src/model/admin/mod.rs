/// Shared secret guarding the admin reset.
#[derive(Clone)]
pub struct AdminSecret(String);

impl AdminSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn verify(&self, candidate: &str) -> bool {
        !candidate.is_empty() && candidate == self.0
    }
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminSecret(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_compares_verbatim() {
        let secret = AdminSecret::new("s3cret");
        assert!(secret.verify("s3cret"));
        assert!(!secret.verify("s3cret "));
        assert!(!secret.verify("S3CRET"));
    }

    #[test]
    fn empty_candidate_never_matches() {
        assert!(!AdminSecret::new("").verify(""));
    }

    #[test]
    fn debug_hides_the_secret() {
        assert_eq!(format!("{:?}", AdminSecret::new("s3cret")), "AdminSecret(***)");
    }
}
