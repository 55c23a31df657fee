use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // Patron already has a live borrow for the item.
    AlreadyBorrowed {
        message: String,
    },
    // Patron already has a live hold for the item.
    DuplicateHold {
        message: String,
    },
    AlreadyReturned {
        message: String,
    },
    RenewalLimitReached {
        message: String,
    },
    // Renewal is blocked while other patrons wait for the item.
    HoldsPending {
        message: String,
    },
    // The availability check failed at commit time; callers are expected
    // to fall back to placing a hold.
    NoCopiesAvailable {
        message: String,
    },
    // This is a retry-able error, which indicates that the item's exclusive
    // section is held by another request and was not released within the
    // configured wait. The caller can retry with or without a backoff.
    Busy {
        message: String,
        retryable: bool,
    },
    Unauthorized {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_borrowed(message: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { message: message.to_string() }
    }

    pub fn duplicate_hold(message: &str) -> LibraryError {
        LibraryError::DuplicateHold { message: message.to_string() }
    }

    pub fn already_returned(message: &str) -> LibraryError {
        LibraryError::AlreadyReturned { message: message.to_string() }
    }

    pub fn renewal_limit_reached(message: &str) -> LibraryError {
        LibraryError::RenewalLimitReached { message: message.to_string() }
    }

    pub fn holds_pending(message: &str) -> LibraryError {
        LibraryError::HoldsPending { message: message.to_string() }
    }

    pub fn no_copies(message: &str) -> LibraryError {
        LibraryError::NoCopiesAvailable { message: message.to_string() }
    }

    pub fn busy(message: &str) -> LibraryError {
        LibraryError::Busy { message: message.to_string(), retryable: true }
    }

    pub fn unauthorized(message: &str) -> LibraryError {
        LibraryError::Unauthorized { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code, retryable }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            LibraryError::AlreadyBorrowed { .. } => { false }
            LibraryError::DuplicateHold { .. } => { false }
            LibraryError::AlreadyReturned { .. } => { false }
            LibraryError::RenewalLimitReached { .. } => { false }
            LibraryError::HoldsPending { .. } => { false }
            LibraryError::NoCopiesAvailable { .. } => { false }
            LibraryError::Busy { retryable, .. } => { *retryable }
            LibraryError::Unauthorized { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Storage { retryable, .. } => { *retryable }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateHold { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyReturned { message } => {
                write!(f, "{}", message)
            }
            LibraryError::RenewalLimitReached { message } => {
                write!(f, "{}", message)
            }
            LibraryError::HoldsPending { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NoCopiesAvailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Busy { message, retryable } => {
                write!(f, "{} {}", message, retryable)
            }
            LibraryError::Unauthorized { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Storage { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
        }
    }
}

/// A specialized Result type for the circulation engine.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number or token
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}


#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BorrowStatus {
    Active,
    Returned,
    Overdue,
}

impl BorrowStatus {
    // Overdue records still occupy a copy until returned.
    pub fn occupies_copy(&self) -> bool {
        match self {
            BorrowStatus::Active => true,
            BorrowStatus::Overdue => true,
            BorrowStatus::Returned => false,
        }
    }
}

impl From<String> for BorrowStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => BorrowStatus::Active,
            "Returned" => BorrowStatus::Returned,
            "Overdue" => BorrowStatus::Overdue,
            _ => BorrowStatus::Active,
        }
    }
}

impl Display for BorrowStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BorrowStatus::Active => write!(f, "Active"),
            BorrowStatus::Returned => write!(f, "Returned"),
            BorrowStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum HoldStatus {
    Pending,
    Ready,
    Cancelled,
    Expired,
    Fulfilled,
}

impl HoldStatus {
    // A Ready hold earmarks a copy until claimed or expired.
    pub fn earmarks_copy(&self) -> bool {
        matches!(self, HoldStatus::Ready)
    }
}

impl From<String> for HoldStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => HoldStatus::Pending,
            "Ready" => HoldStatus::Ready,
            "Cancelled" => HoldStatus::Cancelled,
            "Expired" => HoldStatus::Expired,
            "Fulfilled" => HoldStatus::Fulfilled,
            _ => HoldStatus::Pending,
        }
    }
}

impl Display for HoldStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            HoldStatus::Pending => write!(f, "Pending"),
            HoldStatus::Ready => write!(f, "Ready"),
            HoldStatus::Cancelled => write!(f, "Cancelled"),
            HoldStatus::Expired => write!(f, "Expired"),
            HoldStatus::Fulfilled => write!(f, "Fulfilled"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum AvailabilityStatus {
    Available,
    WaitListed,
    BorrowedByYou,
    OnHoldForYou,
    Waiting,
    Unavailable,
}

impl From<String> for AvailabilityStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => AvailabilityStatus::Available,
            "WaitListed" => AvailabilityStatus::WaitListed,
            "BorrowedByYou" => AvailabilityStatus::BorrowedByYou,
            "OnHoldForYou" => AvailabilityStatus::OnHoldForYou,
            "Waiting" => AvailabilityStatus::Waiting,
            _ => AvailabilityStatus::Unavailable,
        }
    }
}

impl Display for AvailabilityStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "Available"),
            AvailabilityStatus::WaitListed => write!(f, "WaitListed"),
            AvailabilityStatus::BorrowedByYou => write!(f, "BorrowedByYou"),
            AvailabilityStatus::OnHoldForYou => write!(f, "OnHoldForYou"),
            AvailabilityStatus::Waiting => write!(f, "Waiting"),
            AvailabilityStatus::Unavailable => write!(f, "Unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{AvailabilityStatus, BorrowStatus, HoldStatus, LibraryError};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_conflict_errors() {
        assert!(matches!(LibraryError::already_borrowed("test"), LibraryError::AlreadyBorrowed{ message: _ }));
        assert!(matches!(LibraryError::duplicate_hold("test"), LibraryError::DuplicateHold{ message: _ }));
        assert!(matches!(LibraryError::already_returned("test"), LibraryError::AlreadyReturned{ message: _ }));
        assert!(matches!(LibraryError::renewal_limit_reached("test"), LibraryError::RenewalLimitReached{ message: _ }));
        assert!(matches!(LibraryError::holds_pending("test"), LibraryError::HoldsPending{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_no_copies_error() {
        assert!(matches!(LibraryError::no_copies("test"), LibraryError::NoCopiesAvailable{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_busy_error() {
        assert!(matches!(LibraryError::busy("test"), LibraryError::Busy{ message: _, retryable: true }));
    }

    #[tokio::test]
    async fn test_should_create_unauthorized_error() {
        assert!(matches!(LibraryError::unauthorized("test"), LibraryError::Unauthorized{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_storage_error() {
        assert!(matches!(LibraryError::storage("test", None, false), LibraryError::Storage{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::already_borrowed("test").retryable());
        assert_eq!(false, LibraryError::duplicate_hold("test").retryable());
        assert_eq!(false, LibraryError::already_returned("test").retryable());
        assert_eq!(false, LibraryError::renewal_limit_reached("test").retryable());
        assert_eq!(false, LibraryError::holds_pending("test").retryable());
        assert_eq!(false, LibraryError::no_copies("test").retryable());
        assert_eq!(true, LibraryError::busy("test").retryable());
        assert_eq!(false, LibraryError::unauthorized("test").retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(true, LibraryError::storage("test", None, true).retryable());
    }

    #[tokio::test]
    async fn test_should_format_borrow_status() {
        let statuses = vec![
            BorrowStatus::Active,
            BorrowStatus::Returned,
            BorrowStatus::Overdue,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = BorrowStatus::from(str);
            assert_eq!(status, str_status);
        }
        assert!(BorrowStatus::Active.occupies_copy());
        assert!(BorrowStatus::Overdue.occupies_copy());
        assert!(!BorrowStatus::Returned.occupies_copy());
    }

    #[tokio::test]
    async fn test_should_format_hold_status() {
        let statuses = vec![
            HoldStatus::Pending,
            HoldStatus::Ready,
            HoldStatus::Cancelled,
            HoldStatus::Expired,
            HoldStatus::Fulfilled,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = HoldStatus::from(str);
            assert_eq!(status, str_status);
        }
        assert!(HoldStatus::Ready.earmarks_copy());
        assert!(!HoldStatus::Pending.earmarks_copy());
    }

    #[tokio::test]
    async fn test_should_format_availability_status() {
        let statuses = vec![
            AvailabilityStatus::Available,
            AvailabilityStatus::WaitListed,
            AvailabilityStatus::BorrowedByYou,
            AvailabilityStatus::OnHoldForYou,
            AvailabilityStatus::Waiting,
            AvailabilityStatus::Unavailable,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = AvailabilityStatus::from(str);
            assert_eq!(status, str_status);
        }
    }
}
