//! Target schema for the cleaning marketplace.
//!
//! Table shapes, role mapping and the fixed row counts and value ranges the
//! generators work within. The mapping mirrors the application schema by hand;
//! nothing here is checked against a live database.

use chrono::NaiveDate;
use std::fmt;

/// Accounts generated per role
pub const USERS_PER_ROLE: u32 = 25;

/// Password shared by every generated account
pub const DEFAULT_PASSWORD: &str = "1234";

/// Number of service category rows
pub const CATEGORY_COUNT: usize = 100;

/// Upper bound of the random phase row count for services, shortlists and bookings
pub const MAX_RANDOM_ROWS: usize = 500;

/// Words per generated description
pub const DESCRIPTION_WORD_COUNT: usize = 10;

/// Service price bounds, in cents
pub const MIN_PRICE_CENTS: i64 = 100;
pub const MAX_PRICE_CENTS: i64 = 2_000;

/// Cleaner profile view count bounds
pub const MIN_VIEW_COUNT: i64 = 20;
pub const MAX_VIEW_COUNT: i64 = 500;

/// First and last day a booking may fall on
pub fn booking_window() -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid booking start date");
    let end = NaiveDate::from_ymd_opt(2025, 4, 30).expect("valid booking end date");
    (start, end)
}

/// Account roles. Usernames are the role prefix followed by a 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Cleaner,
    HomeOwner,
    Manager,
}

impl Role {
    /// All roles, in generation order
    pub const ALL: [Role; 4] = [Role::Admin, Role::Cleaner, Role::HomeOwner, Role::Manager];

    /// Username prefix
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Cleaner => "cleaner",
            Role::HomeOwner => "homeowner",
            Role::Manager => "manager",
        }
    }

    /// Role name stored in `UserAccount.role`
    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "UserAdmin",
            Role::Cleaner => "Cleaner",
            Role::HomeOwner => "HomeOwner",
            Role::Manager => "PlatformManager",
        }
    }

    pub fn username(&self, index: u32) -> String {
        format!("{}{}", self.prefix(), index)
    }

    /// Every username of this role, index 1 through `USERS_PER_ROLE`
    pub fn usernames(&self) -> Vec<String> {
        (1..=USERS_PER_ROLE).map(|i| self.username(i)).collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Table definition: name plus insert column list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl Table {
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }
}

pub const USER_ACCOUNT: Table = Table {
    name: "UserAccount",
    columns: &["username", "password", "role", "isActive"],
};

pub const USER_PROFILE: Table = Table {
    name: "UserProfile",
    columns: &["username", "firstName", "lastName", "email", "phoneNumber"],
};

pub const SERVICE_CATEGORY: Table = Table {
    name: "ServiceCategory",
    columns: &["name", "description", "isActive"],
};

pub const SERVICE: Table = Table {
    name: "Service",
    columns: &[
        "cleanerUsername",
        "categoryID",
        "description",
        "pricePerHour",
        "isActive",
    ],
};

pub const CLEANER_PROFILE_VIEW: Table = Table {
    name: "CleanerProfileView",
    columns: &["username", "viewCount"],
};

pub const SHORTLIST: Table = Table {
    name: "Shortlist",
    columns: &["homeOwnerUsername", "serviceID"],
};

pub const BOOKING: Table = Table {
    name: "Booking",
    columns: &["homeOwnerUsername", "serviceID", "bookingDate"],
};

/// All tables in output order (referenced tables first)
pub const TABLES: [Table; 7] = [
    USER_ACCOUNT,
    USER_PROFILE,
    SERVICE_CATEGORY,
    SERVICE,
    CLEANER_PROFILE_VIEW,
    SHORTLIST,
    BOOKING,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_usernames() {
        let cleaners = Role::Cleaner.usernames();
        assert_eq!(cleaners.len(), 25);
        assert_eq!(cleaners[0], "cleaner1");
        assert_eq!(cleaners[24], "cleaner25");
        assert_eq!(Role::HomeOwner.username(7), "homeowner7");
    }

    #[test]
    fn test_role_names() {
        let names: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["UserAdmin", "Cleaner", "HomeOwner", "PlatformManager"]
        );
        assert_eq!(Role::Manager.to_string(), "PlatformManager");
    }

    #[test]
    fn test_table_order() {
        let names: Vec<&str> = TABLES.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "UserAccount",
                "UserProfile",
                "ServiceCategory",
                "Service",
                "CleanerProfileView",
                "Shortlist",
                "Booking"
            ]
        );
    }

    #[test]
    fn test_column_index() {
        assert_eq!(SERVICE.column_index("pricePerHour"), Some(3));
        assert_eq!(BOOKING.column_index("missing"), None);
    }

    #[test]
    fn test_booking_window() {
        let (start, end) = booking_window();
        assert!(start < end);
        assert_eq!(end.signed_duration_since(start).num_days(), 1946);
    }
}
