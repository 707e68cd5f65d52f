pub mod purchase_option;
pub mod ranked;
