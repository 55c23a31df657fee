pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq)]
pub(crate) enum GatewayPublisherVia {
    Memory,
    Logs,
}
