pub mod borrow_item_cmd;
pub mod list_borrows_cmd;
pub mod renew_borrow_cmd;
pub mod return_item_cmd;
