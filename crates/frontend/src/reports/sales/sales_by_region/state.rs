use contracts::reports::sales::RegionAggregate;

use crate::reports::sales::report_state::ReportState;

pub const FETCH_ERROR: &str = "Error fetching sales data by region. Please try again later.";
pub const REGIONS_ERROR: &str = "Error fetching sales regions. Please try again later.";
pub const NO_DATA: &str = "No sales data available for this region.";

pub type RegionReportState = ReportState<RegionAggregate>;

pub fn region_report_state() -> RegionReportState {
    ReportState::new(FETCH_ERROR, NO_DATA)
}

/// Region select options: the loaded list, or an error text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionOptions {
    pub regions: Vec<String>,
    pub error_message: String,
}

impl RegionOptions {
    pub fn from_result(result: Result<Vec<String>, String>) -> Self {
        match result {
            Ok(regions) => Self {
                regions,
                error_message: String::new(),
            },
            Err(e) => {
                log::error!("{}: {}", REGIONS_ERROR, e);
                Self {
                    regions: Vec::new(),
                    error_message: REGIONS_ERROR.to_string(),
                }
            }
        }
    }
}
