//! Fake data generation helpers.
//!
//! Holds the reference word lists and a small wrapper around a seeded RNG
//! that turns them into names, contact details, descriptions, prices and dates.

use chrono::{Days, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;

/// First names for fake data
const FIRST_NAMES: &[&str] = &[
    "James",
    "Mary",
    "John",
    "Patricia",
    "Robert",
    "Jennifer",
    "Michael",
    "Linda",
    "William",
    "Elizabeth",
    "David",
    "Barbara",
    "Richard",
    "Susan",
    "Joseph",
    "Jessica",
    "Thomas",
    "Sarah",
    "Charles",
    "Karen",
    "Christopher",
    "Nancy",
    "Daniel",
    "Lisa",
    "Matthew",
    "Betty",
    "Anthony",
    "Margaret",
    "Mark",
    "Sandra",
    "Donald",
    "Ashley",
    "Steven",
    "Kimberly",
    "Paul",
    "Emily",
    "Andrew",
    "Donna",
    "Joshua",
    "Michelle",
    "Kenneth",
    "Dorothy",
    "Kevin",
    "Carol",
    "Brian",
    "Amanda",
    "George",
    "Melissa",
    "Edward",
    "Deborah",
    "Ronald",
    "Stephanie",
    "Timothy",
    "Rebecca",
    "Jason",
    "Sharon",
];

/// Last names for fake data
const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Jones",
    "Brown",
    "Davis",
    "Miller",
    "Wilson",
    "Moore",
    "Taylor",
    "Anderson",
    "Thomas",
    "Jackson",
    "White",
    "Harris",
    "Martin",
    "Thompson",
    "Garcia",
    "Martinez",
    "Robinson",
    "Clark",
    "Rodriguez",
    "Lewis",
    "Lee",
    "Walker",
    "Hall",
    "Allen",
    "Young",
    "Hernandez",
    "King",
    "Wright",
    "Lopez",
    "Hill",
    "Scott",
    "Green",
    "Adams",
    "Baker",
    "Gonzalez",
    "Nelson",
    "Carter",
    "Mitchell",
    "Perez",
    "Roberts",
    "Turner",
    "Phillips",
    "Campbell",
    "Parker",
    "Evans",
    "Edwards",
    "Collins",
    "Stewart",
    "Sanchez",
    "Morris",
    "Rogers",
    "Reed",
    "Cook",
];

/// Vocabulary that service category names cycle through
pub const CATEGORY_WORDS: &[&str] = &[
    "Cleaning",
    "Sweeping",
    "Washing",
    "Polishing",
    "Dusting",
    "Vacuuming",
    "Sanitizing",
    "Organizing",
    "Mopping",
    "Tidying",
];

/// Lorem ipsum source text; descriptions sample its whitespace-separated words
const DESCRIPTION_TEXT: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit. \
    Vestibulum porttitor congue leo, in consequat lorem pretium in. Quisque vel pellentesque odio. \
    Vivamus et pretium lectus. Praesent dictum leo et mauris mollis tincidunt. Pellentesque \
    habitant morbi tristique senectus et netus et malesuada fames ac turpis egestas. Donec vel \
    massa nisi. Sed facilisis nibh in varius maximus. Vestibulum elementum erat lectus, vel cursus \
    nunc dictum ut. In sagittis sapien ut tortor maximus iaculis. In ullamcorper tempor commodo. \
    Maecenas sed odio vel lorem rutrum pellentesque ut non sem. Aliquam erat volutpat. Donec at \
    purus non nisi vehicula blandit.";

/// Domain used for every generated email address
pub const EMAIL_DOMAIN: &str = "example.com";

/// Prices are whole multiples of this many cents
pub const PRICE_STEP_CENTS: i64 = 5;

/// Fake data generator with deterministic RNG
pub struct FakeData<R: Rng> {
    rng: R,
    description_words: Vec<&'static str>,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            description_words: DESCRIPTION_TEXT.split_whitespace().collect(),
        }
    }

    /// Generate a random first name
    pub fn first_name(&mut self) -> &'static str {
        pick_str(&mut self.rng, FIRST_NAMES)
    }

    /// Generate a random last name
    pub fn last_name(&mut self) -> &'static str {
        pick_str(&mut self.rng, LAST_NAMES)
    }

    /// Generate an eight digit phone number starting with 9
    pub fn phone(&mut self) -> String {
        let line: u32 = self.rng.random_range(1_000_000..=9_999_999);
        format!("9{}", line)
    }

    /// Generate a description of `word_count` capitalized lorem words
    pub fn description(&mut self, word_count: usize) -> String {
        (0..word_count)
            .map(|_| capitalize(pick_str(&mut self.rng, &self.description_words)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Generate a price in cents, quantized to `PRICE_STEP_CENTS`, within
    /// `[min_cents, max_cents]`
    pub fn price_cents(&mut self, min_cents: i64, max_cents: i64) -> i64 {
        let steps = (max_cents - min_cents) / PRICE_STEP_CENTS;
        min_cents + PRICE_STEP_CENTS * self.rng.random_range(0..=steps)
    }

    /// Generate a random integer in range (inclusive)
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Generate a calendar date uniformly between `start` and `end` inclusive
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = end.signed_duration_since(start).num_days().max(0) as u64;
        let offset = self.rng.random_range(0..=span);
        start.checked_add_days(Days::new(offset)).unwrap_or(end)
    }
}

/// Build the email address for a name pair (`first.last@example.com`)
pub fn email(first: &str, last: &str) -> String {
    format!(
        "{}.{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        EMAIL_DOMAIN
    )
}

fn pick_str<R: Rng>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Uppercase the first character and lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
