use std::fmt;

/// Inclusive upper width bound (px) for each column count below six.
const BREAKPOINTS: [(f64, u8); 5] = [
    (480.0, 1),
    (1024.0, 2),
    (1440.0, 3),
    (1680.0, 4),
    (2160.0, 5),
];

pub const MAX_COLUMNS: u8 = 6;

/// Column count of the masonry grid, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Columns(u8);

impl Columns {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Columns {
    fn default() -> Self {
        Columns(MAX_COLUMNS)
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn columns(width: f64) -> Columns {
    BREAKPOINTS
        .iter()
        .find(|(upper, _)| width <= *upper)
        .map(|(_, count)| Columns(*count))
        .unwrap_or(Columns(MAX_COLUMNS))
}

/// Escape hatch for the column count: implementations write straight to the
/// grid's styling (the `--columns` custom property) so a resize never
/// re-renders the gallery.
pub trait PresentationHook {
    fn set_columns(&self, columns: Columns);
}

/// Owns the layout state. Every resize recomputes the column count and
/// pushes it through the hook.
pub struct LayoutController<H: PresentationHook> {
    hook: H,
    current: Option<Columns>,
}

impl<H: PresentationHook> LayoutController<H> {
    pub fn new(hook: H) -> Self {
        LayoutController { hook, current: None }
    }

    pub fn resize(&mut self, width: f64) -> Columns {
        let next = columns(width);
        if self.current != Some(next) {
            log::debug!("viewport {}px -> {} columns", width, next);
        }
        self.hook.set_columns(next);
        self.current = Some(next);
        next
    }

    pub fn current(&self) -> Option<Columns> {
        self.current
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }
}
