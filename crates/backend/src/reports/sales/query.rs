//! Query shapes for the `sales` collection
//!
//! The report service never talks to a concrete store. It describes what it
//! needs with the types below and hands them to a [`SalesStore`].
//!
//! [`SalesStore`]: super::store::SalesStore

use contracts::reports::sales::SalesRecord;

/// Text field of a sales document usable in filters and groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesField {
    Region,
    Product,
    Category,
    Customer,
    Salesperson,
    Channel,
}

impl SalesField {
    /// Column name in the `sales` table
    pub fn column_name(&self) -> &'static str {
        match self {
            SalesField::Region => "region",
            SalesField::Product => "product",
            SalesField::Category => "category",
            SalesField::Customer => "customer",
            SalesField::Salesperson => "salesperson",
            SalesField::Channel => "channel",
        }
    }

    pub fn value_of<'a>(&self, record: &'a SalesRecord) -> &'a str {
        match self {
            SalesField::Region => &record.region,
            SalesField::Product => &record.product,
            SalesField::Category => &record.category,
            SalesField::Customer => &record.customer,
            SalesField::Salesperson => &record.salesperson,
            SalesField::Channel => &record.channel,
        }
    }
}

/// Case-sensitive equality filter on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatch {
    pub field: SalesField,
    pub value: String,
}

impl ExactMatch {
    pub fn new(field: SalesField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.field.value_of(record) == self.value
    }
}

/// Order of the groups produced by an aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrder {
    /// Whatever order the store produces
    StoreDefined,
    /// Group key ascending (byte order)
    KeyAscending,
}

/// Filter, then sum `amount` per group, then optionally order the groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSum {
    pub filter: ExactMatch,
    pub group_by: SalesField,
    pub order: GroupOrder,
}

/// One group of an aggregation result
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

/// Distinct regions, in store order
pub fn distinct_regions() -> SalesField {
    SalesField::Region
}

/// Sales of one region grouped by salesperson, salesperson ascending
pub fn sales_by_region(region: &str) -> GroupSum {
    GroupSum {
        filter: ExactMatch::new(SalesField::Region, region),
        group_by: SalesField::Salesperson,
        order: GroupOrder::KeyAscending,
    }
}

/// Every sale whose customer equals `customer`
pub fn sales_by_customer(customer: &str) -> ExactMatch {
    ExactMatch::new(SalesField::Customer, customer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, customer: &str) -> SalesRecord {
        SalesRecord {
            id: "1".to_string(),
            date: Default::default(),
            region: region.to_string(),
            product: "Laptop".to_string(),
            category: "Electronics".to_string(),
            customer: customer.to_string(),
            salesperson: "John Doe".to_string(),
            channel: "Online".to_string(),
            amount: 10.0,
        }
    }

    #[test]
    fn test_sales_by_region_groups_by_salesperson() {
        let query = sales_by_region("north");
        assert_eq!(query.filter, ExactMatch::new(SalesField::Region, "north"));
        assert_eq!(query.group_by, SalesField::Salesperson);
        assert_eq!(query.order, GroupOrder::KeyAscending);
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let filter = sales_by_customer("Lambda LLC");
        assert!(filter.matches(&record("North", "Lambda LLC")));
        assert!(!filter.matches(&record("North", "lambda llc")));
        assert!(!filter.matches(&record("North", "Lambda LLC ")));
    }

    #[test]
    fn test_region_filter_reads_region_field() {
        let filter = sales_by_region("North").filter;
        assert!(filter.matches(&record("North", "Chi Co")));
        assert!(!filter.matches(&record("north", "Chi Co")));
        assert_eq!(distinct_regions().column_name(), "region");
    }
}
