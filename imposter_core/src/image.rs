use serde::{Deserialize, Serialize};

/// Fixed crop and size so the same photo always maps to the same URL.
pub const CANONICAL_PHOTO_PARAMS: &str =
    "ixlib=rb-4.0.3&w=1080&h=1080&fit=crop&crop=entropy&q=80&fm=jpg";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attribution {
    pub author: Option<String>,
    pub author_link: Option<String>,
    pub photo_link: Option<String>,
}

/// A fully linked photo credit, only built when every part is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    pub author: String,
    pub author_url: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePick {
    pub url: String,
    /// Absent for images served from the word store.
    pub attribution: Option<Attribution>,
    /// Pending usage-accounting token, consumed on first reveal.
    pub download_location: Option<String>,
}

impl ImagePick {
    pub fn stored(url: String) -> Self {
        ImagePick {
            url,
            attribution: None,
            download_location: None,
        }
    }

    pub fn take_download_location(&mut self) -> Option<String> {
        self.download_location.take()
    }

    pub fn credit(&self, utm_source: &str) -> Option<Credit> {
        self.attribution
            .as_ref()
            .and_then(|a| a.credit(utm_source))
    }
}

impl Attribution {
    pub fn credit(&self, utm_source: &str) -> Option<Credit> {
        match (&self.author, &self.author_link, &self.photo_link) {
            (Some(author), Some(author_link), Some(photo_link))
                if !author.trim().is_empty() =>
            {
                Some(Credit {
                    author: author.clone(),
                    author_url: with_referral(author_link, utm_source),
                    photo_url: with_referral(photo_link, utm_source),
                })
            }
            _ => None,
        }
    }
}

pub fn canonical_photo_url(raw: &str) -> String {
    let base = raw.split(['?', '#']).next().unwrap_or(raw);
    format!("{base}?{CANONICAL_PHOTO_PARAMS}")
}

pub fn with_referral(link: &str, utm_source: &str) -> String {
    let separator = if link.contains('?') { '&' } else { '?' };
    format!("{link}{separator}utm_source={utm_source}&utm_medium=referral")
}
