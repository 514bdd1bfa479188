//! Per-year climate statistics built from monthly summaries.

use crate::colour::ColourKind;
use crate::types::calendar::{Month, Year};
use crate::types::records::MonthRecord;
use bon::bon;
use log::{debug, warn};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// The station has no records before this year.
pub const FIRST_STATION_YEAR: i32 = 2024;

/// How a row's monthly values combine into its whole-year value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Max,
    Min,
    Mean,
    Sum,
}

impl Aggregate {
    /// Combines `values`; `None` when there are none.
    ///
    /// ```rust
    /// use wxdash::Aggregate;
    ///
    /// assert_eq!(Aggregate::Mean.apply(&[1.0, 2.0, 6.0]), Some(3.0));
    /// assert_eq!(Aggregate::Max.apply(&[]), None);
    /// ```
    pub fn apply(self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let ordered = values.iter().copied().map(OrderedFloat);
        match self {
            Aggregate::Max => ordered.max().map(|v| v.0),
            Aggregate::Min => ordered.min().map(|v| v.0),
            Aggregate::Sum => Some(values.iter().sum()),
            Aggregate::Mean => Some(values.iter().sum::<f64>() / values.len() as f64),
        }
    }
}

struct RowDef {
    label: &'static str,
    kind: ColourKind,
    field: fn(&MonthRecord) -> f64,
    aggregate: Aggregate,
}

const ROWS: [RowDef; 11] = [
    RowDef {
        label: "Record High",
        kind: ColourKind::Temp,
        field: |m| m.temp_c_absolute_max,
        aggregate: Aggregate::Max,
    },
    RowDef {
        label: "Mean Maximum",
        kind: ColourKind::Temp,
        field: |m| m.temp_c_mean_max,
        aggregate: Aggregate::Mean,
    },
    RowDef {
        label: "Daily Mean",
        kind: ColourKind::Temp,
        field: |m| m.temp_c,
        aggregate: Aggregate::Mean,
    },
    RowDef {
        label: "Mean Minimum",
        kind: ColourKind::Temp,
        field: |m| m.temp_c_mean_min,
        aggregate: Aggregate::Mean,
    },
    RowDef {
        label: "Record Low",
        kind: ColourKind::Temp,
        field: |m| m.temp_c_absolute_min,
        aggregate: Aggregate::Min,
    },
    RowDef {
        label: "Total Rainfall",
        kind: ColourKind::Rain,
        field: |m| m.total_rain_mm,
        aggregate: Aggregate::Sum,
    },
    RowDef {
        label: "Rainy Days",
        kind: ColourKind::Days,
        field: |m| m.rain_days_count,
        aggregate: Aggregate::Sum,
    },
    RowDef {
        label: "Average Daily Max Humidity",
        kind: ColourKind::Humidity,
        field: |m| m.humidity_mean_max,
        aggregate: Aggregate::Mean,
    },
    RowDef {
        label: "Average Daily Min Humidity",
        kind: ColourKind::Humidity,
        // Monthly absolute minimum, not the mean of daily minima.
        field: |m| m.humidity_absolute_min,
        aggregate: Aggregate::Mean,
    },
    RowDef {
        label: "Max UV Index",
        kind: ColourKind::Uv,
        field: |m| m.uv_absolute,
        aggregate: Aggregate::Max,
    },
    RowDef {
        label: "Average Max UV Index",
        kind: ColourKind::Uv,
        field: |m| m.uv_mean,
        aggregate: Aggregate::Mean,
    },
];

/// One statistic across the months of a year.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRow {
    pub label: &'static str,
    pub kind: ColourKind,
    /// One value per month column, in column order.
    pub months: Vec<f64>,
    pub whole_year: Option<f64>,
}

/// Statistics table for one calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearStats {
    pub year: Year,
    /// Month columns, chronological. Months without a record are absent.
    pub months: Vec<Month>,
    pub rows: Vec<StatsRow>,
}

impl YearStats {
    fn from_records(year: Year, mut records: Vec<&MonthRecord>) -> Self {
        records.sort_by_key(|m| m.month());
        let rows = if records.is_empty() {
            Vec::new()
        } else {
            ROWS.iter()
                .map(|def| {
                    let months: Vec<f64> = records.iter().map(|m| (def.field)(m)).collect();
                    StatsRow {
                        label: def.label,
                        kind: def.kind,
                        whole_year: def.aggregate.apply(&months),
                        months,
                    }
                })
                .collect()
        };
        Self {
            year,
            months: records.iter().map(|m| m.month()).collect(),
            rows,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.months.is_empty()
    }

    /// Column headers: three-letter month abbreviations.
    pub fn month_labels(&self) -> Vec<&'static str> {
        self.months.iter().map(|m| m.short_name()).collect()
    }

    pub fn no_data_message(&self) -> String {
        format!("No data is available for {}.", self.year)
    }

    pub fn row(&self, label: &str) -> Option<&StatsRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

/// Whether a year range may be applied.
pub fn is_valid_year_range(start_year: i32, end_year: i32) -> bool {
    start_year <= end_year
}

/// The statistics view: one [`YearStats`] per displayed year.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    years: Vec<YearStats>,
    has_records: bool,
}

#[bon]
impl StatsTable {
    /// Groups `months` by calendar year and computes each displayed year's rows.
    ///
    /// Displayed years run from `max(start_year, first_year)` to
    /// `min(end_year, current_year)`; years in that span without records are
    /// kept so the view can say so.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.first_year(i32)`: Earliest year worth showing. Defaults to
    ///   [`FIRST_STATION_YEAR`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use wxdash::StatsTable;
    ///
    /// let table = StatsTable::builder()
    ///     .months(&[])
    ///     .start_year(2020)
    ///     .end_year(2030)
    ///     .current_year(2025)
    ///     .build();
    ///
    /// assert!(table.is_empty());
    /// let years: Vec<i32> = table.years().iter().map(|y| y.year.get()).collect();
    /// assert_eq!(years, [2024, 2025]);
    /// ```
    #[builder]
    pub fn new(
        months: &[MonthRecord],
        start_year: i32,
        end_year: i32,
        current_year: i32,
        first_year: Option<i32>,
    ) -> Self {
        if !is_valid_year_range(start_year, end_year) {
            warn!(
                "Statistics requested for an inverted year range {}..={}",
                start_year, end_year
            );
        }

        let mut by_year: BTreeMap<Year, Vec<&MonthRecord>> = BTreeMap::new();
        for record in months {
            by_year.entry(record.year()).or_default().push(record);
        }

        let first = start_year.max(first_year.unwrap_or(FIRST_STATION_YEAR));
        let last = end_year.min(current_year);
        let years: Vec<YearStats> = (first..=last)
            .map(|year| {
                let year = Year(year);
                YearStats::from_records(year, by_year.remove(&year).unwrap_or_default())
            })
            .collect();

        debug!(
            "Built statistics for {} years from {} monthly records",
            years.len(),
            months.len()
        );
        Self {
            years,
            has_records: !months.is_empty(),
        }
    }

    pub fn years(&self) -> &[YearStats] {
        &self.years
    }

    /// `true` when the response held no months at all ("No data").
    pub fn is_empty(&self) -> bool {
        !self.has_records
    }
}
