use strum::VariantArray;

/// Pages that exist under every locale prefix, in sitemap order.
#[derive(VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Projects,
}

impl Route {
    /// Suffix appended after `/{locale}`.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "",
            Route::Projects => "/projects",
        }
    }

    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Route::VARIANTS
            .iter()
            .find(|route| route.segment() == segment)
            .copied()
    }
}
