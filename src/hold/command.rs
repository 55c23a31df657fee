pub mod cancel_hold_cmd;
pub mod list_holds_cmd;
pub mod reserve_item_cmd;
