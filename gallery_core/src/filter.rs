use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    Hot,
    Top,
    User,
    Subreddit(String),
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Hot => write!(f, "hot"),
            Section::Top => write!(f, "top"),
            Section::User => write!(f, "user"),
            Section::Subreddit(name) => write!(f, "r/{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sort {
    Viral,
    Top,
    Time,
    Rising,
}

impl Sort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Viral => "viral",
            Sort::Top => "top",
            Sort::Time => "time",
            Sort::Rising => "rising",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
            TimeWindow::All => "all",
        }
    }
}

pub const SORT_PREFERENCE: [Sort; 2] = [Sort::Time, Sort::Top];
pub const WINDOWS: [TimeWindow; 5] = [
    TimeWindow::Day,
    TimeWindow::Week,
    TimeWindow::Month,
    TimeWindow::Year,
    TimeWindow::All,
];

pub const DEFAULT_SUBREDDIT: &str = "pics";

/// Query parameters of the gallery. Only `page` changes after creation, and
/// it only ever goes up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterState {
    section: Section,
    sort: Sort,
    window: TimeWindow,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            section: Section::Subreddit(DEFAULT_SUBREDDIT.to_string()),
            sort: SORT_PREFERENCE[0],
            window: WINDOWS[1],
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new(section: Section, sort: Sort, window: TimeWindow) -> Self {
        FilterState { section, sort, window, page: 1 }
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Advances to the next page, leaving section, sort and window alone.
    pub fn load_more(&mut self) {
        self.page = self.page.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pick_first_sort_and_second_window() {
        let filter = FilterState::default();

        assert_eq!(filter.section().to_string(), "r/pics");
        assert_eq!(filter.sort(), Sort::Time);
        assert_eq!(filter.window(), TimeWindow::Week);
        assert_eq!(filter.page(), 1);
    }

    #[test]
    fn load_more_only_touches_page() {
        let mut filter = FilterState::new(Section::Hot, Sort::Viral, TimeWindow::Day);
        let before = filter.clone();

        filter.load_more();
        filter.load_more();

        assert_eq!(filter.page(), 3);
        assert_eq!(filter.section(), before.section());
        assert_eq!(filter.sort(), before.sort());
        assert_eq!(filter.window(), before.window());
        assert_ne!(filter, before);
    }
}
