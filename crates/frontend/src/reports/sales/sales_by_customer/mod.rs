pub mod state;
pub mod ui;

pub use ui::SalesByCustomerPage;
