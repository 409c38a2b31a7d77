//! Continuation menu shown after each lookup

/// What to do once an excerpt (or a not-found notice) has been shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewSearch,
    BackToArticles,
    EndSearch,
}

impl MenuChoice {
    pub const MESSAGE: &'static str = "Choose the next operation";

    pub fn label(self) -> &'static str {
        match self {
            Self::NewSearch => "Search for a new phrase",
            Self::BackToArticles => "Back to the article list",
            Self::EndSearch => "End search",
        }
    }

    /// Options offered; going back needs a previously found article list
    pub fn options(articles_found: bool) -> Vec<Self> {
        if articles_found {
            vec![Self::NewSearch, Self::BackToArticles, Self::EndSearch]
        } else {
            vec![Self::NewSearch, Self::EndSearch]
        }
    }

    pub fn labels(articles_found: bool) -> Vec<String> {
        Self::options(articles_found)
            .into_iter()
            .map(|choice| choice.label().to_string())
            .collect()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [Self::NewSearch, Self::BackToArticles, Self::EndSearch]
            .into_iter()
            .find(|choice| choice.label() == label)
    }
}
