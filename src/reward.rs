//! Score to coupon value conversion
//!
//! The core stops at two numbers: the raw score and its coupon value. Getting
//! them to the player (share links and the like) is the host's job.

use std::fmt;

/// Final score and the coupon value it earns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub score: u32,
    /// Coupon value in hundredths, rounded half up
    pub value_cents: u64,
}

impl Reward {
    /// Value is `score / points_per_unit`, to two decimals
    pub fn new(score: u32, points_per_unit: u32) -> Self {
        let ppu = u64::from(points_per_unit.max(1));
        let value_cents = (u64::from(score) * 200 + ppu) / (2 * ppu);
        Self { score, value_cents }
    }

    pub fn value(&self) -> f64 {
        self.value_cents as f64 / 100.0
    }

    /// Share message handed to the claim link
    pub fn claim_message(&self, currency: &str) -> String {
        format!(
            "I just scored {} points in the game! My coupon value is {}{}.",
            self.score, currency, self
        )
    }
}

/// Share link for an already URI-encoded message. The phone number keeps only
/// its digits; without one the link lets the player pick a contact.
pub fn claim_url(phone: Option<&str>, encoded_message: &str) -> String {
    let digits: String = phone
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!("https://wa.me/{}?text={}", digits, encoded_message)
}

/// Two-decimal value, e.g. `2.25`
impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.value_cents / 100, self.value_cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_value() {
        assert_eq!(Reward::new(0, 20).to_string(), "0.00");
        assert_eq!(Reward::new(20, 20).to_string(), "1.00");
        assert_eq!(Reward::new(45, 20).to_string(), "2.25");
        assert_eq!(Reward::new(1, 20).to_string(), "0.05");
        assert_eq!(Reward::new(1234, 20).to_string(), "61.70");
        assert!((Reward::new(45, 20).value() - 2.25).abs() < 1e-9);
    }

    #[test]
    fn test_rounds_half_up() {
        // 1/3 = 0.333.., 2/3 = 0.666.., 1/8 = 0.125
        assert_eq!(Reward::new(1, 3).to_string(), "0.33");
        assert_eq!(Reward::new(2, 3).to_string(), "0.67");
        assert_eq!(Reward::new(1, 8).to_string(), "0.13");
    }

    #[test]
    fn test_claim_message() {
        let msg = Reward::new(45, 20).claim_message("₹");
        assert_eq!(msg, "I just scored 45 points in the game! My coupon value is ₹2.25.");
    }

    #[test]
    fn test_claim_url_with_and_without_phone() {
        assert_eq!(claim_url(None, "hi%20there"), "https://wa.me/?text=hi%20there");
        assert_eq!(
            claim_url(Some("+91 98765-43210"), "hi"),
            "https://wa.me/919876543210?text=hi"
        );
        assert_eq!(claim_url(Some(""), "hi"), "https://wa.me/?text=hi");
    }
}
