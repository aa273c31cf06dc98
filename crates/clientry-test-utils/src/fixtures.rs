// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared customer fixtures for deterministic tests.

use chrono::{TimeZone, Utc};
use clientry_core::{Customer, CustomerDetail, CustomerId};

/// The two-record set used by the filter scenarios: a query of "an" matches
/// only Ann (first name and email), "" matches both, "zz" matches neither.
pub fn ann_and_bob() -> Vec<Customer> {
    vec![
        Customer {
            user_id: CustomerId(1),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        },
        Customer {
            user_id: CustomerId(2),
            first_name: "Bob".into(),
            last_name: "Ng".into(),
            email: "bob@x.com".into(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
        },
    ]
}

/// A larger sample list in server order.
pub fn sample_customers() -> Vec<Customer> {
    let mut customers = ann_and_bob();
    customers.extend([
        Customer {
            user_id: CustomerId(3),
            first_name: "Cara".into(),
            last_name: "Ito".into(),
            email: "cara.ito@example.net".into(),
            created_at: Utc.with_ymd_and_hms(2023, 11, 2, 18, 4, 0).unwrap(),
        },
        Customer {
            user_id: CustomerId(4),
            first_name: "Dana".into(),
            last_name: "Okafor".into(),
            email: "dana@example.net".into(),
            created_at: Utc.with_ymd_and_hms(2021, 5, 9, 12, 0, 0).unwrap(),
        },
        Customer {
            user_id: CustomerId(5),
            first_name: "Evan".into(),
            last_name: "Andersson".into(),
            email: "evan.andersson@example.org".into(),
            created_at: Utc.with_ymd_and_hms(2022, 7, 19, 0, 0, 0).unwrap(),
        },
    ]);
    customers
}

/// A detail profile matching `sample_customers()[3]` (Dana).
pub fn dana_detail() -> CustomerDetail {
    CustomerDetail {
        user_id: CustomerId(4),
        first_name: "Dana".into(),
        last_name: "Okafor".into(),
        email: "dana@example.net".into(),
        age: Some(34),
        gender: Some("F".into()),
        city: Some("Lagos".into()),
        country: Some("Nigeria".into()),
        created_at: Utc.with_ymd_and_hms(2021, 5, 9, 12, 0, 0).unwrap(),
        order_count: 12,
    }
}
