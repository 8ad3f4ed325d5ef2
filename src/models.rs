use serde::Deserialize;

/// Structured metadata for a single title, as returned by the enrichment
/// lookup. Absent fields stay absent on the stored movie.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieInfo {
    pub name: String,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub poster_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieTitleForm {
    pub title: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(NoticeLevel::Success),
            "warning" => Some(NoticeLevel::Warning),
            "error" => Some(NoticeLevel::Error),
            _ => None,
        }
    }
}

/// A one-shot user-facing message carried across a redirect in a cookie and
/// cleared as soon as it is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    /// Cookie-safe encoding: the level tag, a colon, then the urlencoded
    /// message text.
    pub fn encode(&self) -> String {
        format!("{}:{}", self.level.as_str(), urlencoding::encode(&self.message))
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let (level, message) = raw.split_once(':')?;
        let level = NoticeLevel::parse(level)?;
        let message = urlencoding::decode(message).ok()?.into_owned();
        Some(Self { level, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_survives_cookie_encoding() {
        let notice = Notice::success("Added \"Inception (2010)\"; enjoy!");
        let decoded = Notice::decode(&notice.encode()).unwrap();
        assert_eq!(decoded, notice);
    }

    #[test]
    fn garbage_cookie_value_is_ignored() {
        assert_eq!(Notice::decode("no-separator"), None);
        assert_eq!(Notice::decode("fatal:boom"), None);
    }
}
