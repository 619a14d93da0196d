//! Two-route client-side router.
//!
//! - `/` renders the composed home page
//! - `/projects/ratemyprofessor` renders the case-study page

pub const HOME_PATH: &str = "/";
pub const CASE_STUDY_PATH: &str = "/projects/ratemyprofessor";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    CaseStudy,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::CaseStudy];

    /// Resolve a path to a known route. A trailing slash is accepted.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            _ if trimmed == CASE_STUDY_PATH => Some(Route::CaseStudy),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => HOME_PATH,
            Route::CaseStudy => CASE_STUDY_PATH,
        }
    }

    /// Output file for the static build, relative to the output directory.
    pub fn file_path(&self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::CaseStudy => "projects/ratemyprofessor/index.html",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::CaseStudy => "Case Study",
        }
    }
}

/// 導覽狀態：應用啟動時建立，隨導覽事件更新，明確傳遞而非全域變數
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    /// 以宿主回報的初始路徑建立；未知路徑視為首頁
    pub fn new(initial_path: &str) -> Self {
        let current = Route::from_path(initial_path).unwrap_or_else(|| {
            tracing::warn!("Unknown initial path '{}', falling back to home", initial_path);
            Route::Home
        });
        Self {
            current,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn current_path(&self) -> &'static str {
        self.current.path()
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Client-side transition. Returns whether the route changed; unknown paths are ignored.
    pub fn navigate(&mut self, path: &str) -> bool {
        let Some(route) = Route::from_path(path) else {
            tracing::warn!("Ignoring navigation to unknown path '{}'", path);
            return false;
        };

        if route == self.current {
            return false;
        }

        tracing::debug!(
            "Navigating {} -> {}",
            self.current.display_name(),
            route.display_name()
        );
        self.history.push(self.current);
        self.current = route;
        true
    }

    /// 案例頁的「返回」按鈕：回到根路徑
    pub fn back_home(&mut self) -> bool {
        self.navigate(HOME_PATH)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}
