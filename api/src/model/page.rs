use serde::Deserialize;
use shared::error::AppError;

use super::reservation::ReserveRequest;

/// Booking form as posted by the grid page: `name`, `phone` and one `box`
/// entry per checked box.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub selected: Vec<i64>,
}

impl BookingForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value,
                "phone" => form.phone = value,
                "box" => {
                    let number = value
                        .parse()
                        .map_err(|_| AppError::MalformedRequest(format!("box={value}")))?;
                    form.selected.push(number);
                }
                _ => {}
            }
        }
        Ok(form)
    }

    // ブラウザ側で出していた入力チェックのメッセージ
    pub fn missing_input(&self) -> Option<&'static str> {
        if self.selected.is_empty() {
            Some("Veuillez sélectionner au moins une case")
        } else if self.name.trim().is_empty() || self.phone.trim().is_empty() {
            Some("Veuillez remplir tous les champs")
        } else {
            None
        }
    }
}

impl From<BookingForm> for ReserveRequest {
    fn from(value: BookingForm) -> Self {
        let BookingForm {
            name,
            phone,
            selected,
        } = value;
        Self {
            name,
            phone,
            selected_boxes: selected,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminForm {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn collects_repeated_box_entries_in_order() {
        let form = BookingForm::from_pairs(pairs(&[
            ("name", "Alice"),
            ("box", "7"),
            ("phone", "0600"),
            ("box", "3"),
        ]))
        .unwrap();
        assert_eq!(
            form,
            BookingForm {
                name: "Alice".into(),
                phone: "0600".into(),
                selected: vec![7, 3],
            }
        );
        assert_eq!(form.missing_input(), None);
    }

    #[test]
    fn non_numeric_box_is_malformed() {
        let res = BookingForm::from_pairs(pairs(&[("box", "seven")]));
        assert!(matches!(res, Err(AppError::MalformedRequest(_))));
    }

    #[test]
    fn selection_is_checked_before_contact_fields() {
        let empty = BookingForm::default();
        assert_eq!(
            empty.missing_input(),
            Some("Veuillez sélectionner au moins une case")
        );
        let no_phone = BookingForm {
            name: "Alice".into(),
            phone: " ".into(),
            selected: vec![1],
        };
        assert_eq!(
            no_phone.missing_input(),
            Some("Veuillez remplir tous les champs")
        );
    }
}
