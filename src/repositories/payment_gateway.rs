// Placeholder credentials standing in for a real payment gateway.
pub const ACCEPTED_CARD_NUMBER: &str = "123412341234";
pub const ACCEPTED_PIN: &str = "tech0";

/// Seam for payment-credential checks. A real settlement backend slots in
/// here without touching the reservation validation flow.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, card_number: &str, pin: &str) -> bool;
}

/// Accepts exactly one card number and PIN pair.
pub struct FixedCredentialVerifier {
    card_number: String,
    pin: String,
}

impl FixedCredentialVerifier {
    pub fn new(card_number: &str, pin: &str) -> Self {
        Self {
            card_number: card_number.to_string(),
            pin: pin.to_string(),
        }
    }
}

impl Default for FixedCredentialVerifier {
    fn default() -> Self {
        Self::new(ACCEPTED_CARD_NUMBER, ACCEPTED_PIN)
    }
}

impl CredentialVerifier for FixedCredentialVerifier {
    fn verify(&self, card_number: &str, pin: &str) -> bool {
        card_number == self.card_number && pin == self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_the_configured_pair() {
        let verifier = FixedCredentialVerifier::default();

        assert!(verifier.verify(ACCEPTED_CARD_NUMBER, ACCEPTED_PIN));
        assert!(!verifier.verify("000", "000"));
        assert!(!verifier.verify(ACCEPTED_CARD_NUMBER, "wrong"));
        assert!(!verifier.verify("wrong", ACCEPTED_PIN));
    }
}
