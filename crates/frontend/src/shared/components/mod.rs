pub mod badge;
pub mod month_selector;
pub mod pagination_controls;
pub mod stat_card;
