//! Draft validation, run before any claim is committed.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{AttachmentMeta, ExpenseDraft};

/// Validate a draft before it becomes (or replaces) a claim.
///
/// Checks, in order: required text fields, positive amount, positive
/// exchange rate, at least one attachment, every attachment type on
/// the accept list.
///
/// # Errors
///
/// Returns the first `LedgerError` encountered.
pub fn validate_draft(draft: &ExpenseDraft) -> Result<(), LedgerError> {
    if draft.title.trim().is_empty() {
        return Err(LedgerError::MissingField("title"));
    }
    if draft.currency_code.trim().is_empty() {
        return Err(LedgerError::MissingField("currency_code"));
    }
    if draft.category.trim().is_empty() {
        return Err(LedgerError::MissingField("category"));
    }
    if draft.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(draft.amount));
    }
    if draft.exchange_rate <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveRate(draft.exchange_rate));
    }
    if draft.attachments.is_empty() {
        return Err(LedgerError::NoAttachments);
    }
    for attachment in &draft.attachments {
        if !AttachmentMeta::is_allowed_type(&attachment.type_tag) {
            return Err(LedgerError::UnsupportedAttachmentType(
                attachment.type_tag.clone(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::AttachmentId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn receipt(type_tag: &str) -> AttachmentMeta {
        AttachmentMeta {
            id: AttachmentId::new(),
            stored_name: format!("stored.{type_tag}"),
            original_name: format!("receipt.{type_tag}"),
            size_bytes: 512,
            type_tag: type_tag.to_string(),
        }
    }

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            title: "Taxi fare".to_string(),
            description: "Airport transfer".to_string(),
            amount: dec!(42.50),
            currency_code: "EUR".to_string(),
            exchange_rate: dec!(0.9091),
            category: "Fuel".to_string(),
            expense_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            attachments: vec![receipt("jpg")],
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_draft(&draft()).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(matches!(
            validate_draft(&d),
            Err(LedgerError::MissingField("title"))
        ));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut d = draft();
        d.amount = Decimal::ZERO;
        assert!(matches!(
            validate_draft(&d),
            Err(LedgerError::NonPositiveAmount(_))
        ));
        d.amount = dec!(-10);
        assert!(matches!(
            validate_draft(&d),
            Err(LedgerError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        let mut d = draft();
        d.exchange_rate = Decimal::ZERO;
        assert!(matches!(
            validate_draft(&d),
            Err(LedgerError::NonPositiveRate(_))
        ));
    }

    #[test]
    fn test_no_attachments_rejected() {
        let mut d = draft();
        d.attachments.clear();
        assert!(matches!(validate_draft(&d), Err(LedgerError::NoAttachments)));
    }

    #[test]
    fn test_bad_attachment_type_rejected() {
        let mut d = draft();
        d.attachments.push(receipt("exe"));
        assert!(matches!(
            validate_draft(&d),
            Err(LedgerError::UnsupportedAttachmentType(t)) if t == "exe"
        ));
    }
}
