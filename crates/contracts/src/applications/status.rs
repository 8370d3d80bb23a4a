use serde::{Deserialize, Serialize};

/// Canonical status keys derived from the raw backend status text.
///
/// Normalization is total: anything outside the synonym table is carried
/// through as [`CanonicalStatus::Other`] with lower-cased, trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanonicalStatus {
    Sold,
    Confirmed,
    WithPro,
    FastSold,
    PaymentPending,
    Damaged,
    Unavailable,
    /// Unrecognized raw status, lower-cased and trimmed
    Other(String),
}

/// Display metadata for a canonical status: human label plus the badge
/// class used by the table and card views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMeta {
    pub label: &'static str,
    pub badge_class: &'static str,
}

impl CanonicalStatus {
    /// Map raw status text to its canonical key.
    ///
    /// Backends spell the same status several ways; the synonym arms below
    /// are the full accepted set. Unknown input degrades to `Other`
    /// instead of failing.
    pub fn normalize(raw: &str) -> Self {
        let key = raw.trim().to_lowercase();
        match key.as_str() {
            "sold" | "not confirmed" => CanonicalStatus::Sold,
            "confirmed" | "approved" => CanonicalStatus::Confirmed,
            "with pro" | "withpro" | "with_pro" | "available" => CanonicalStatus::WithPro,
            "fast sale" | "fastsale" | "fast_sale" | "fast sold" | "fastsold" | "fast_sold" => {
                CanonicalStatus::FastSold
            }
            "payment pending" | "payment_pending" | "paymentpending" => {
                CanonicalStatus::PaymentPending
            }
            "damaged" | "broken" => CanonicalStatus::Damaged,
            "unavailable" => CanonicalStatus::Unavailable,
            _ => CanonicalStatus::Other(key),
        }
    }

    /// Canonical key string
    pub fn key(&self) -> &str {
        match self {
            CanonicalStatus::Sold => "sold",
            CanonicalStatus::Confirmed => "confirmed",
            CanonicalStatus::WithPro => "withpro",
            CanonicalStatus::FastSold => "fastsold",
            CanonicalStatus::PaymentPending => "paymentpending",
            CanonicalStatus::Damaged => "damaged",
            CanonicalStatus::Unavailable => "unavailable",
            CanonicalStatus::Other(key) => key,
        }
    }

    /// Display metadata; `None` for unrecognized statuses, which render
    /// with their raw key and no badge styling
    pub fn display_meta(&self) -> Option<StatusMeta> {
        let meta = match self {
            CanonicalStatus::Sold => StatusMeta {
                label: "Sold",
                badge_class: "badge--success",
            },
            CanonicalStatus::Confirmed => StatusMeta {
                label: "Confirmed",
                badge_class: "badge--primary",
            },
            CanonicalStatus::WithPro => StatusMeta {
                label: "With PRO",
                badge_class: "badge--neutral",
            },
            CanonicalStatus::FastSold => StatusMeta {
                label: "Fast Sold",
                badge_class: "badge--warning",
            },
            CanonicalStatus::PaymentPending => StatusMeta {
                label: "Payment Pending",
                badge_class: "badge--warning",
            },
            CanonicalStatus::Damaged => StatusMeta {
                label: "Damaged",
                badge_class: "badge--error",
            },
            CanonicalStatus::Unavailable => StatusMeta {
                label: "Unavailable",
                badge_class: "badge--neutral",
            },
            CanonicalStatus::Other(_) => return None,
        };
        Some(meta)
    }

    /// Human label, falling back to the raw key for unknown statuses
    pub fn label(&self) -> String {
        match self.display_meta() {
            Some(meta) => meta.label.to_string(),
            None => self.key().to_string(),
        }
    }

    /// Badge class, empty for unknown statuses
    pub fn badge_class(&self) -> &'static str {
        self.display_meta().map(|m| m.badge_class).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_map_to_canonical_keys() {
        assert_eq!(CanonicalStatus::normalize("Sold"), CanonicalStatus::Sold);
        assert_eq!(
            CanonicalStatus::normalize("Not Confirmed"),
            CanonicalStatus::Sold
        );
        assert_eq!(
            CanonicalStatus::normalize("approved"),
            CanonicalStatus::Confirmed
        );
        assert_eq!(
            CanonicalStatus::normalize("  with_pro "),
            CanonicalStatus::WithPro
        );
        assert_eq!(
            CanonicalStatus::normalize("Available"),
            CanonicalStatus::WithPro
        );
        assert_eq!(
            CanonicalStatus::normalize("FAST SALE"),
            CanonicalStatus::FastSold
        );
        assert_eq!(
            CanonicalStatus::normalize("fast_sold"),
            CanonicalStatus::FastSold
        );
        assert_eq!(
            CanonicalStatus::normalize("payment pending"),
            CanonicalStatus::PaymentPending
        );
        assert_eq!(
            CanonicalStatus::normalize("broken"),
            CanonicalStatus::Damaged
        );
        assert_eq!(
            CanonicalStatus::normalize("Unavailable"),
            CanonicalStatus::Unavailable
        );
    }

    #[test]
    fn test_unknown_passes_through_lowercased() {
        let status = CanonicalStatus::normalize("  Waiting List ");
        assert_eq!(status, CanonicalStatus::Other("waiting list".to_string()));
        assert_eq!(status.key(), "waiting list");
        assert_eq!(status.label(), "waiting list");
        assert_eq!(status.badge_class(), "");
        assert!(status.display_meta().is_none());
    }

    #[test]
    fn test_normalize_is_idempotent_on_keys() {
        for raw in [
            "Sold",
            "approved",
            "with pro",
            "fastsale",
            "payment_pending",
            "broken",
            "unavailable",
            "something else",
            "",
        ] {
            let once = CanonicalStatus::normalize(raw);
            let twice = CanonicalStatus::normalize(once.key());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_input_maps_to_empty_key() {
        let status = CanonicalStatus::normalize("");
        assert_eq!(status, CanonicalStatus::Other(String::new()));
        assert_eq!(status.key(), "");
    }
}
