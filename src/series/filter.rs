use crate::WxError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which row groups of the hourly table are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowFilter {
    #[default]
    All,
    Outside,
    Inside,
    Rain,
    Wind,
    Other,
}

impl RowFilter {
    pub const VARIANTS: [RowFilter; 6] = [
        RowFilter::All,
        RowFilter::Outside,
        RowFilter::Inside,
        RowFilter::Rain,
        RowFilter::Wind,
        RowFilter::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RowFilter::All => "all",
            RowFilter::Outside => "outside",
            RowFilter::Inside => "inside",
            RowFilter::Rain => "rain",
            RowFilter::Wind => "wind",
            RowFilter::Other => "other",
        }
    }

    /// Label of the filter chip.
    pub fn label(self) -> &'static str {
        match self {
            RowFilter::All => "Show All",
            RowFilter::Outside => "Outdoor temperature",
            RowFilter::Inside => "Indoor temperature",
            RowFilter::Rain => "Rain",
            RowFilter::Wind => "Wind",
            RowFilter::Other => "Humidity and UV",
        }
    }

    /// Whether rows belonging to `section` are shown under this filter.
    ///
    /// Rows are shown when the filter selects their section exactly, or when
    /// the filter is [`RowFilter::All`] and the rows are not `skip_all` rows
    /// (the dedicated per-section graphs, which only appear when their section
    /// is picked on its own).
    ///
    /// ```rust
    /// use wxdash::RowFilter;
    ///
    /// assert!(RowFilter::Rain.shows(RowFilter::Rain, true));
    /// assert!(RowFilter::All.shows(RowFilter::Rain, false));
    /// assert!(!RowFilter::All.shows(RowFilter::Rain, true));
    /// assert!(!RowFilter::Wind.shows(RowFilter::Rain, false));
    /// ```
    pub fn shows(self, section: RowFilter, skip_all: bool) -> bool {
        self == section || (self == RowFilter::All && !skip_all)
    }
}

impl Display for RowFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RowFilter {
    type Err = WxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RowFilter::VARIANTS
            .into_iter()
            .find(|filter| filter.name() == s)
            .ok_or_else(|| WxError::UnknownFilter(s.to_owned()))
    }
}
