/// Причина отказа в подписке на рассылку
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterError {
    Empty,
    InvalidEmail,
}

impl NewsletterError {
    /// Сообщение под полем подписки
    pub fn message(&self) -> &'static str {
        match self {
            NewsletterError::Empty => "يرجى إدخال بريدك الإلكتروني",
            NewsletterError::InvalidEmail => "البريد الإلكتروني غير صالح",
        }
    }
}

impl std::fmt::Display for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for NewsletterError {}

/// Нормализация и проверка адреса из формы подписки.
///
/// Проверяется только форма `local@domain.tld`, письма никуда не отправляются.
pub fn validate_email(input: &str) -> Result<String, NewsletterError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(NewsletterError::Empty);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(NewsletterError::InvalidEmail);
    }

    let (local, domain) = email.split_once('@').ok_or(NewsletterError::InvalidEmail)?;
    if local.is_empty() || domain.contains('@') {
        return Err(NewsletterError::InvalidEmail);
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !host.ends_with('.') => {
            Ok(email.to_string())
        }
        _ => Err(NewsletterError::InvalidEmail),
    }
}
