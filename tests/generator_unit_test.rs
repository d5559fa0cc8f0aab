//! Property tests for the rendered SQL output, checked across many seeds.

use cleaning_seed::{render_to_string, Generator};
use std::collections::{HashMap, HashSet};

/// Rendered output split into (table name -> value tuples), in output order
fn parse_blocks(sql: &str) -> Vec<(String, Vec<Vec<String>>)> {
    let mut blocks = Vec::new();
    for line in sql.lines() {
        if let Some(rest) = line.strip_prefix("-- ") {
            let name = rest.trim_end_matches(" test data").to_string();
            blocks.push((name, Vec::new()));
        } else if line.starts_with('(') {
            let inner = line
                .trim_end_matches(',')
                .trim_end_matches(';')
                .trim_start_matches('(')
                .trim_end_matches(')');
            let values = split_values(inner);
            if let Some((_, rows)) = blocks.last_mut() {
                rows.push(values);
            }
        }
    }
    blocks
}

/// Split a tuple body on commas that sit outside quoted strings
fn split_values(inner: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in inner.chars() {
        match c {
            '\'' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    values.push(current.trim().to_string());
    values
}

fn generate(seed: u64) -> HashMap<String, Vec<Vec<String>>> {
    let sql = render_to_string(&Generator::new(seed).generate());
    parse_blocks(&sql).into_iter().collect()
}

#[test]
fn test_block_order() {
    let sql = render_to_string(&Generator::new(42).generate());
    let names: Vec<String> = parse_blocks(&sql).into_iter().map(|(n, _)| n).collect();
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
    assert_eq!(sql.matches("INSERT INTO").count(), 7);
    assert_eq!(sql.matches(";\n").count(), 7);
}

#[test]
fn test_same_seed_same_text() {
    let a = render_to_string(&Generator::new(777).generate());
    let b = render_to_string(&Generator::new(777).generate());
    assert_eq!(a, b);
}

#[test]
fn test_users_and_profiles_align() {
    for seed in 0..10 {
        let tables = generate(seed);
        let accounts = &tables["UserAccount"];
        let profiles = &tables["UserProfile"];
        assert_eq!(accounts.len(), 100);
        assert_eq!(profiles.len(), 100);
        let a: Vec<&String> = accounts.iter().map(|r| &r[0]).collect();
        let p: Vec<&String> = profiles.iter().map(|r| &r[0]).collect();
        assert_eq!(a, p);
    }
}

#[test]
fn test_category_names_unique() {
    let tables = generate(5);
    let categories = &tables["ServiceCategory"];
    assert_eq!(categories.len(), 100);
    let names: HashSet<&String> = categories.iter().map(|r| &r[0]).collect();
    assert_eq!(names.len(), 100);
}

#[test]
fn test_coverage_across_seeds() {
    for seed in 0..30 {
        let tables = generate(seed);
        for (table, prefix) in [
            ("Service", "cleaner"),
            ("Shortlist", "homeowner"),
            ("Booking", "homeowner"),
        ] {
            let subjects: HashSet<&String> = tables[table].iter().map(|r| &r[0]).collect();
            for i in 1..=25 {
                assert!(
                    subjects.contains(&format!("{prefix}{i}")),
                    "seed {seed}: {prefix}{i} missing from {table}"
                );
            }
        }
    }
}

#[test]
fn test_shortlist_pairs_unique() {
    for seed in 0..30 {
        let tables = generate(seed);
        let shortlist = &tables["Shortlist"];
        let pairs: HashSet<(&String, &String)> = shortlist.iter().map(|r| (&r[0], &r[1])).collect();
        assert_eq!(pairs.len(), shortlist.len(), "seed {seed}");
    }
}

#[test]
fn test_prices_quantized() {
    for seed in 0..10 {
        for row in &generate(seed)["Service"] {
            let price = &row[3];
            let (whole, frac) = price.split_once('.').unwrap();
            assert_eq!(frac.len(), 2, "price {price}");
            let cents: i64 = whole.parse::<i64>().unwrap() * 100 + frac.parse::<i64>().unwrap();
            assert!((100..=2000).contains(&cents), "price {price}");
            assert_eq!(cents % 5, 0, "price {price}");
        }
    }
}

#[test]
fn test_booking_dates_valid_and_in_range() {
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
    for seed in 0..10 {
        for row in &generate(seed)["Booking"] {
            let date = chrono::NaiveDate::parse_from_str(&row[2], "%Y-%m-%d").unwrap();
            assert!(date >= start && date <= end, "date {date}");
        }
    }
}

#[test]
fn test_service_ids_reference_services() {
    for seed in 0..10 {
        let tables = generate(seed);
        let services = tables["Service"].len();
        for table in ["Shortlist", "Booking"] {
            for row in &tables[table] {
                let id: usize = row[1].parse().unwrap();
                assert!(id >= 1 && id <= services, "seed {seed}: {table} serviceID {id}");
            }
        }
        for row in &tables["Service"] {
            let category: usize = row[1].parse().unwrap();
            assert!((1..=100).contains(&category));
        }
    }
}

#[test]
fn test_profile_views() {
    let tables = generate(3);
    let views = &tables["CleanerProfileView"];
    assert_eq!(views.len(), 25);
    for (i, row) in views.iter().enumerate() {
        assert_eq!(row[0], format!("cleaner{}", i + 1));
        let count: i64 = row[1].parse().unwrap();
        assert!((20..=500).contains(&count));
    }
}
