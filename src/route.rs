#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Portfolio,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Portfolio];

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/portfolio" => Self::Portfolio,
            _ => Self::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Portfolio => "/portfolio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Portfolio => "Portfolio",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Portfolio => "▤",
        }
    }

    pub fn link_class(self, current: Route) -> &'static str {
        if self == current {
            "navbar-link active"
        } else {
            "navbar-link"
        }
    }
}
