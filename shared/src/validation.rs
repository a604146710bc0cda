//! Admin form validation. Errors are rendered inline next to their field and
//! block submission.

use thiserror::Error;

use crate::models::NewCategory;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Form field name, matching the input's `id`.
    pub field: &'static str,
    /// Text shown under the input.
    pub message: String,
}

impl FieldError {
    /// Build an error for `field`.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All failures of one submit attempt, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    /// No failures.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Record a failure. Only the first failure per field is kept.
    pub fn push(&mut self, error: FieldError) {
        if self.get(error.field).is_none() {
            self.errors.push(error);
        }
    }

    /// Drop the failure for `field`.
    pub fn clear(&mut self, field: &str) {
        self.errors.retain(|error| error.field != field);
    }

    /// Iterate failures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Raw input of the add-category form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    /// Name as typed.
    pub category_name: String,
}

impl CategoryForm {
    /// Check the name and build the request body.
    pub fn validate(&self) -> Result<NewCategory, FormErrors> {
        let mut errors = FormErrors::default();
        let name = self.category_name.trim();
        let len = name.chars().count();

        if name.is_empty() {
            errors.push(FieldError::new("categoryName", "Category name is required"));
        } else if len < 3 {
            errors.push(FieldError::new(
                "categoryName",
                "Category name must be at least 3 characters",
            ));
        } else if len > 50 {
            errors.push(FieldError::new(
                "categoryName",
                "Category name must not exceed 50 characters",
            ));
        } else if !name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch.is_whitespace() || ch == '-')
        {
            errors.push(FieldError::new(
                "categoryName",
                "Category name can only contain letters, numbers, spaces, and hyphens",
            ));
        }

        errors.into_result(NewCategory {
            category_name: name.to_string(),
        })
    }
}

/// Raw input of the add-article form. Files are tracked only by presence;
/// the browser keeps the actual blobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    /// Selected category.
    pub category: String,
    /// Title as typed.
    pub title: String,
    /// Description as typed.
    pub description: String,
    /// Code as typed.
    pub code: String,
    /// An avatar file is picked.
    pub has_avatar: bool,
    /// A cover image is picked.
    pub has_img: bool,
}

/// Text fields of a valid article, ready for the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    /// Category name.
    pub category: String,
    /// Trimmed title.
    pub title: String,
    /// Trimmed description.
    pub description: String,
    /// Code text.
    pub code: String,
}

impl ArticleForm {
    /// Check every field; all failures are reported at once.
    pub fn validate(&self) -> Result<ArticleDraft, FormErrors> {
        let mut errors = FormErrors::default();

        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        }
        min_length(&mut errors, "title", "Title", &self.title, 5);
        min_length(&mut errors, "description", "Description", &self.description, 20);
        if self.code.trim().is_empty() {
            errors.push(FieldError::new("code", "Code is required"));
        }
        if !self.has_avatar {
            errors.push(FieldError::new("avatar", "Avatar is required"));
        }
        if !self.has_img {
            errors.push(FieldError::new("img", "Image is required"));
        }

        errors.into_result(ArticleDraft {
            category: self.category.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            code: self.code.clone(),
        })
    }
}

fn min_length(errors: &mut FormErrors, field: &'static str, label: &str, value: &str, min: usize) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    } else if value.chars().count() < min {
        errors.push(FieldError::new(field, format!("{label} must be at least {min} characters")));
    }
}

/// Which upload slot an image is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    /// Author avatar, portrait.
    Avatar,
    /// Cover image, landscape.
    Cover,
}

impl ImageSlot {
    /// Form field name.
    pub fn field(self) -> &'static str {
        match self {
            ImageSlot::Avatar => "avatar",
            ImageSlot::Cover => "img",
        }
    }
}

/// Check a picked image's natural size against its slot's orientation.
pub fn check_orientation(slot: ImageSlot, width: u32, height: u32) -> Result<(), FieldError> {
    let ok = match slot {
        ImageSlot::Avatar => height > width,
        ImageSlot::Cover => width > height,
    };
    if ok {
        return Ok(());
    }
    Err(match slot {
        ImageSlot::Avatar => FieldError::new("avatar", "Avatar must be vertical/portrait shape"),
        ImageSlot::Cover => FieldError::new("img", "Image must be horizontal/landscape shape"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Result<NewCategory, FormErrors> {
        CategoryForm {
            category_name: name.to_string(),
        }
        .validate()
    }

    #[test]
    fn category_name_rules() {
        assert_eq!(category("  Web Development ").expect("valid").category_name, "Web Development");
        assert!(category("front-end 2").is_ok());

        let required = category("   ").expect_err("blank");
        assert_eq!(required.get("categoryName"), Some("Category name is required"));
        assert!(category("ab").is_err());
        assert!(category(&"x".repeat(51)).is_err());

        let symbols = category("C++ tips").expect_err("symbols");
        assert!(symbols.get("categoryName").is_some_and(|msg| msg.contains("hyphens")));
    }

    #[test]
    fn article_form_reports_every_field() {
        let errors = ArticleForm::default().validate().expect_err("empty form");
        let fields: Vec<_> = errors.iter().map(|error| error.field).collect();
        assert_eq!(fields, vec!["category", "title", "description", "code", "avatar", "img"]);
    }

    #[test]
    fn article_form_length_limits() {
        let mut form = ArticleForm {
            category: "Rust".to_string(),
            title: "Tiny".to_string(),
            description: "too short".to_string(),
            code: "fn main() {}".to_string(),
            has_avatar: true,
            has_img: true,
        };
        let errors = form.validate().expect_err("short fields");
        assert_eq!(errors.get("title"), Some("Title must be at least 5 characters"));
        assert_eq!(errors.get("description"), Some("Description must be at least 20 characters"));

        form.title = "Ownership basics".to_string();
        form.description = "A walk through moves and borrows.".to_string();
        let draft = form.validate().expect("valid");
        assert_eq!(draft.title, "Ownership basics");
    }

    #[test]
    fn clearing_a_field_error() {
        let mut errors = FormErrors::default();
        errors.push(FieldError::new("img", "first"));
        errors.push(FieldError::new("img", "second"));
        assert_eq!(errors.get("img"), Some("first"));
        errors.clear("img");
        assert!(errors.is_empty());
    }

    #[test]
    fn orientation_per_slot() {
        assert!(check_orientation(ImageSlot::Avatar, 400, 600).is_ok());
        assert!(check_orientation(ImageSlot::Avatar, 600, 600).is_err());
        assert!(check_orientation(ImageSlot::Cover, 1200, 630).is_ok());
        let err = check_orientation(ImageSlot::Cover, 300, 900).expect_err("portrait cover");
        assert_eq!(err.field, ImageSlot::Cover.field());
    }
}
