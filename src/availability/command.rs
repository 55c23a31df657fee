pub mod get_availability_cmd;
