//! 联系表单状态与校验
//!
//! | 字段 | 规则 |
//! |------|------|
//! | name | 必填，至少 2 个字符 |
//! | email | 必填，邮箱格式 |
//! | message | 必填，至少 10 个字符 |

use std::fmt;

use tabula_core::Overlay;
use thiserror::Error;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "you@example.com",
            ContactField::Message => "Type your message...",
        }
    }

    fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// 校验通过的提交内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// 联系表单
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: ContactField,
    /// 最近一次校验的错误
    pub errors: Vec<FieldError>,
    /// 提交过一次之后，每次输入都会重新校验
    attempted: bool,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn input(&mut self, c: char) {
        self.value_mut(self.focus).push(c);
        self.revalidate();
    }

    pub fn backspace(&mut self) {
        self.value_mut(self.focus).pop();
        self.revalidate();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn error_for(&self, field: ContactField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    /// 校验整个表单
    pub fn validate(&self) -> Result<ContactSubmission, Vec<FieldError>> {
        let errors: Vec<FieldError> = ContactField::ALL
            .into_iter()
            .filter_map(|field| {
                check_field(field, self.value(field)).map(|message| FieldError { field, message })
            })
            .collect();

        if errors.is_empty() {
            Ok(ContactSubmission {
                name: self.name.clone(),
                email: self.email.clone(),
                message: self.message.clone(),
            })
        } else {
            Err(errors)
        }
    }

    /// 标记为已提交并校验；错误会保留在表单上
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        self.attempted = true;
        match self.validate() {
            Ok(submission) => {
                self.errors.clear();
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn revalidate(&mut self) {
        if self.attempted {
            self.errors = self.validate().err().unwrap_or_default();
        }
    }
}

fn check_field(field: ContactField, value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Required");
    }
    match field {
        ContactField::Name if value.chars().count() < NAME_MIN_CHARS => Some("Too short"),
        ContactField::Email if !is_valid_email(value) => Some("Invalid email"),
        ContactField::Message if value.chars().count() < MESSAGE_MIN_CHARS => Some("Too short"),
        _ => None,
    }
}

/// `local@domain.tld` 形式，不含空白
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// 联系页面状态
#[derive(Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    /// 提交中（等待模拟的网络往返）
    pub submitting: bool,
    /// "Contact Modal"
    pub modal: Overlay<()>,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn empty_form_reports_required_everywhere() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.message == "Required"));
    }

    #[test]
    fn short_name_and_message() {
        let form = filled("A", "a@b.co", "too short");
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError {
                    field: ContactField::Name,
                    message: "Too short"
                },
                FieldError {
                    field: ContactField::Message,
                    message: "Too short"
                },
            ]
        );
    }

    #[test]
    fn invalid_emails() {
        for email in ["plain", "a@", "@b.com", "a@b", "a b@c.com", "a@b..com", "a@b@c.com"] {
            let form = filled("Ann", email, "long enough message");
            assert_eq!(
                form.validate().unwrap_err(),
                vec![FieldError {
                    field: ContactField::Email,
                    message: "Invalid email"
                }],
                "{email}"
            );
        }
    }

    #[test]
    fn valid_form_produces_submission() {
        let form = filled("Ann", "ann@example.com", "Hello there, world");
        let submission = form.validate().unwrap();
        assert_eq!(submission.email, "ann@example.com");
    }

    #[test]
    fn errors_update_while_typing_after_first_submit() {
        let mut form = ContactForm::default();
        form.input('A');
        assert!(form.errors.is_empty(), "no errors before the first submit");

        assert!(form.submit().is_none());
        assert_eq!(form.error_for(ContactField::Name), Some("Too short"));

        form.input('n');
        assert_eq!(form.error_for(ContactField::Name), None);
        assert_eq!(form.error_for(ContactField::Email), Some("Required"));
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut form = ContactForm::default();
        form.next_field();
        assert_eq!(form.focus, ContactField::Email);
        form.prev_field();
        form.prev_field();
        assert_eq!(form.focus, ContactField::Message);
    }
}
