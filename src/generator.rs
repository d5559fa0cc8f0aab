//! Data generator that produces row data for all tables.
//!
//! One function per target table. Services, shortlists and bookings are
//! generated in two phases: a random batch of rows, then one supplementary row
//! for every cleaner or homeowner the batch never mentioned.

use crate::coverage;
use crate::fake::{self, FakeData, CATEGORY_WORDS};
use crate::schema::{
    booking_window, Role, Table, BOOKING, CATEGORY_COUNT, CLEANER_PROFILE_VIEW, DEFAULT_PASSWORD,
    DESCRIPTION_WORD_COUNT, MAX_PRICE_CENTS, MAX_RANDOM_ROWS, MAX_VIEW_COUNT, MIN_PRICE_CENTS,
    MIN_VIEW_COUNT, SERVICE, SERVICE_CATEGORY, SHORTLIST, USERS_PER_ROLE, USER_ACCOUNT,
    USER_PROFILE,
};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// SQL value representation
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    /// Fixed-point amount in cents
    Money(i64),
    String(String),
    Bool(bool),
    Date(NaiveDate),
}

impl SqlValue {
    /// Format as an SQL literal
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Money(cents) => {
                let sign = if *cents < 0 { "-" } else { "" };
                let abs = cents.abs();
                format!("{}{}.{:02}", sign, abs / 100, abs % 100)
            }
            SqlValue::String(s) => format!("'{}'", escape_string(s)),
            SqlValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            SqlValue::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SqlValue::Int(n) | SqlValue::Money(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            SqlValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// A row of generated data
pub type Row = Vec<SqlValue>;

/// Generated data for a single table
#[derive(Debug, Clone)]
pub struct TableData {
    pub table: Table,
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn new(table: Table, rows: Vec<Row>) -> Self {
        Self { table, rows }
    }

    pub fn name(&self) -> &'static str {
        self.table.name
    }

    /// Values of one column across all rows; empty if the column is unknown
    pub fn column<'a>(&'a self, column: &str) -> impl Iterator<Item = &'a SqlValue> + 'a {
        let idx = self.table.column_index(column);
        self.rows
            .iter()
            .filter_map(move |row| idx.and_then(|i| row.get(i)))
    }
}

/// All generated data, in output order
#[derive(Debug, Clone)]
pub struct GeneratedData {
    pub tables: Vec<TableData>,
}

impl GeneratedData {
    pub fn table(&self, name: &str) -> Option<&TableData> {
        self.tables.iter().find(|t| t.table.name == name)
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }
}

/// Subject of a coverage-tracked row: the username in its first column
fn row_subject(row: &Row) -> Option<&str> {
    row.first().and_then(SqlValue::as_str)
}

/// Main data generator
pub struct Generator {
    seed: u64,
    fake: FakeData<ChaCha8Rng>,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            fake: FakeData::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate all tables
    pub fn generate(&mut self) -> GeneratedData {
        self.generate_with(|_| {})
    }

    /// Generate all tables, calling `on_table` as each one is finished
    pub fn generate_with<F>(&mut self, mut on_table: F) -> GeneratedData
    where
        F: FnMut(&TableData),
    {
        let mut tables = Vec::with_capacity(7);
        let mut push = |table: TableData, tables: &mut Vec<TableData>| {
            on_table(&table);
            tables.push(table);
        };

        push(self.generate_user_accounts(), &mut tables);
        push(self.generate_user_profiles(), &mut tables);
        push(self.generate_service_categories(), &mut tables);

        let services = self.generate_services(CATEGORY_COUNT);
        let service_count = services.rows.len();
        push(services, &mut tables);

        push(self.generate_cleaner_profile_views(), &mut tables);
        push(self.generate_shortlist(service_count), &mut tables);
        push(self.generate_bookings(service_count), &mut tables);

        GeneratedData { tables }
    }

    /// 25 accounts per role, in role order
    pub fn generate_user_accounts(&mut self) -> TableData {
        let rows = Role::ALL
            .iter()
            .flat_map(|role| {
                role.usernames().into_iter().map(move |username| {
                    vec![
                        SqlValue::String(username),
                        SqlValue::String(DEFAULT_PASSWORD.to_string()),
                        SqlValue::String(role.name().to_string()),
                        SqlValue::Bool(true),
                    ]
                })
            })
            .collect();

        TableData::new(USER_ACCOUNT, rows)
    }

    /// One profile per account, same order as `generate_user_accounts`
    pub fn generate_user_profiles(&mut self) -> TableData {
        let mut rows = Vec::with_capacity(Role::ALL.len() * USERS_PER_ROLE as usize);
        for role in Role::ALL {
            for username in role.usernames() {
                let first = self.fake.first_name();
                let last = self.fake.last_name();
                let email = fake::email(first, last);
                let phone = self.fake.phone();
                rows.push(vec![
                    SqlValue::String(username),
                    SqlValue::String(first.to_string()),
                    SqlValue::String(last.to_string()),
                    SqlValue::String(email),
                    SqlValue::String(phone),
                ]);
            }
        }

        TableData::new(USER_PROFILE, rows)
    }

    /// Category names cycle the vocabulary; the `#n` suffix counts wraps
    pub fn generate_service_categories(&mut self) -> TableData {
        let words = CATEGORY_WORDS.len();
        let rows = (0..CATEGORY_COUNT)
            .map(|i| {
                let name = format!("{} #{}", CATEGORY_WORDS[i % words], i / words + 1);
                vec![
                    SqlValue::String(name),
                    SqlValue::String(self.fake.description(DESCRIPTION_WORD_COUNT)),
                    SqlValue::Bool(true),
                ]
            })
            .collect();

        TableData::new(SERVICE_CATEGORY, rows)
    }

    /// Random services, then one more for every cleaner without any
    pub fn generate_services(&mut self, category_count: usize) -> TableData {
        let cleaners = Role::Cleaner.usernames();
        let count = self.random_row_count();

        let mut rows: Vec<Row> = (0..count)
            .map(|_| {
                let cleaner = self.random_user(Role::Cleaner);
                self.service_row(cleaner, category_count)
            })
            .collect();

        let extra = coverage::fill(&cleaners, &rows, row_subject, |cleaner: &String| {
            self.service_row(cleaner.clone(), category_count)
        });
        rows.extend(extra);

        TableData::new(SERVICE, rows)
    }

    fn service_row(&mut self, cleaner: String, category_count: usize) -> Row {
        let category_id = self.fake.int_range(1, category_count.max(1) as i64);
        let description = self.fake.description(DESCRIPTION_WORD_COUNT);
        let price = self.fake.price_cents(MIN_PRICE_CENTS, MAX_PRICE_CENTS);
        vec![
            SqlValue::String(cleaner),
            SqlValue::Int(category_id),
            SqlValue::String(description),
            SqlValue::Money(price),
            SqlValue::Bool(true),
        ]
    }

    pub fn generate_cleaner_profile_views(&mut self) -> TableData {
        let rows = Role::Cleaner
            .usernames()
            .into_iter()
            .map(|username| {
                let views = self.fake.int_range(MIN_VIEW_COUNT, MAX_VIEW_COUNT);
                vec![SqlValue::String(username), SqlValue::Int(views)]
            })
            .collect();

        TableData::new(CLEANER_PROFILE_VIEW, rows)
    }

    /// Unique (homeowner, service) pairs, then one more for every homeowner
    /// without any
    pub fn generate_shortlist(&mut self, service_count: usize) -> TableData {
        let homeowners = Role::HomeOwner.usernames();
        let max_service = service_count.max(1) as i64;
        let available = homeowners.len() * max_service as usize;
        let target = self.random_row_count().min(available);

        let mut pairs: HashSet<(String, i64)> = HashSet::with_capacity(target);
        let mut rows: Vec<Row> = Vec::with_capacity(target + homeowners.len());
        while rows.len() < target {
            let owner = self.random_user(Role::HomeOwner);
            let service_id = self.fake.int_range(1, max_service);
            if pairs.insert((owner.clone(), service_id)) {
                rows.push(vec![SqlValue::String(owner), SqlValue::Int(service_id)]);
            }
        }

        let extra = coverage::fill(&homeowners, &rows, row_subject, |owner: &String| {
            let mut service_id = self.fake.int_range(1, max_service);
            while pairs.contains(&(owner.clone(), service_id)) {
                service_id = self.fake.int_range(1, max_service);
            }
            pairs.insert((owner.clone(), service_id));
            vec![SqlValue::String(owner.clone()), SqlValue::Int(service_id)]
        });
        rows.extend(extra);

        TableData::new(SHORTLIST, rows)
    }

    /// Random bookings, then one more for every homeowner without any
    pub fn generate_bookings(&mut self, service_count: usize) -> TableData {
        let homeowners = Role::HomeOwner.usernames();
        let max_service = service_count.max(1) as i64;
        let count = self.random_row_count();

        let mut rows: Vec<Row> = (0..count)
            .map(|_| {
                let owner = self.random_user(Role::HomeOwner);
                self.booking_row(owner, max_service)
            })
            .collect();

        let extra = coverage::fill(&homeowners, &rows, row_subject, |owner: &String| {
            self.booking_row(owner.clone(), max_service)
        });
        rows.extend(extra);

        TableData::new(BOOKING, rows)
    }

    fn booking_row(&mut self, owner: String, max_service: i64) -> Row {
        let (start, end) = booking_window();
        let service_id = self.fake.int_range(1, max_service);
        let date = self.fake.date_between(start, end);
        vec![
            SqlValue::String(owner),
            SqlValue::Int(service_id),
            SqlValue::Date(date),
        ]
    }

    fn random_row_count(&mut self) -> usize {
        self.fake.int_range(0, MAX_RANDOM_ROWS as i64) as usize
    }

    fn random_user(&mut self, role: Role) -> String {
        let index = self.fake.int_range(1, USERS_PER_ROLE as i64) as u32;
        role.username(index)
    }
}
