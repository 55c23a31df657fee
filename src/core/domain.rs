use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for the circulation engine.
// Loan policy (loan period, renewal limit) is per item and lives on the
// item record; these are the engine-wide knobs.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    // days a promoted hold stays claimable before it expires
    pub hold_ready_days: i64,
    // bounded wait for an item's exclusive section before failing Busy
    pub lock_wait_millis: u64,
    // cadence of the overdue and hold-expiry sweeps
    pub sweep_interval_secs: u64,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            hold_ready_days: 7,
            lock_wait_millis: 500,
            sweep_interval_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!(7, config.hold_ready_days);
        assert_eq!(500, config.lock_wait_millis);
        assert_eq!(60, config.sweep_interval_secs);
    }
}
