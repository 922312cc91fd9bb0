use contracts::reports::sales::SalesRecord;

use crate::reports::sales::report_state::ReportState;

pub const FETCH_ERROR: &str = "Error fetching sales data. Please try again later.";
pub const NO_DATA: &str = "No sales data available for this customer.";

pub type CustomerReportState = ReportState<SalesRecord>;

pub fn customer_report_state() -> CustomerReportState {
    ReportState::new(FETCH_ERROR, NO_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::sales::report_state::Phase;
    use serde_json::json;

    fn lambda_sale() -> SalesRecord {
        serde_json::from_value(json!({
            "_id": "1",
            "date": "2023-10-05T00:00:00Z",
            "region": "North",
            "product": "Tablet S",
            "category": "Electronics",
            "customer": "Lambda LLC",
            "salesperson": "Jane Smith",
            "channel": "In-store",
            "amount": 150.0
        }))
        .unwrap()
    }

    #[test]
    fn test_lambda_llc_populates_table() {
        let mut state = customer_report_state();
        state.key = "Lambda LLC".to_string();
        let (ticket, customer) = state.submit().unwrap();
        assert_eq!(customer, "Lambda LLC");

        state.apply(ticket, Ok(vec![lambda_sale()]));
        assert_eq!(state.phase, Phase::Populated);
        assert_eq!(state.rows[0].customer, "Lambda LLC");
        assert!(state.error_message.is_empty());
    }

    #[test]
    fn test_server_error_shows_message() {
        let mut state = customer_report_state();
        state.key = "Lambda LLC".to_string();
        let (ticket, _) = state.submit().unwrap();

        state.apply(ticket, Err("Server returned 500 Internal Server Error".to_string()));
        assert_eq!(state.phase, Phase::Errored);
        assert_eq!(
            state.error_message,
            "Error fetching sales data. Please try again later."
        );
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_unknown_customer_is_empty() {
        let mut state = customer_report_state();
        state.key = "Nonexistent Customer".to_string();
        let (ticket, _) = state.submit().unwrap();

        state.apply(ticket, Ok(Vec::new()));
        assert_eq!(state.phase, Phase::Empty);
        assert!(state.rows.is_empty());
        assert!(state.error_message.is_empty());
    }

    #[test]
    fn test_placeholder_text_without_rows() {
        let mut state = customer_report_state();
        assert_eq!(
            state.placeholder(),
            Some("No sales data available for this customer.")
        );

        state.key = "Nonexistent Customer".to_string();
        let (ticket, _) = state.submit().unwrap();
        state.apply(ticket, Ok(Vec::new()));
        assert_eq!(state.placeholder(), Some(NO_DATA));

        let (ticket, _) = state.submit().unwrap();
        state.apply(ticket, Err("offline".to_string()));
        assert_eq!(state.phase, Phase::Errored);
        assert_eq!(state.placeholder(), Some(NO_DATA));

        let (ticket, _) = state.submit().unwrap();
        state.apply(ticket, Ok(vec![lambda_sale()]));
        assert_eq!(state.placeholder(), None);
    }
}
