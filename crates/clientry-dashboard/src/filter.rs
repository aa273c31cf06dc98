// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The live filter: a pure function of (canonical set, query) -> visible set.

use clientry_core::Customer;

/// Returns the subset of `customers` matching `query`, in input order.
///
/// The query is lowercased once; a record matches if its lowercased first
/// name, last name, or email contains the query as a substring. The empty
/// query matches everything.
pub fn filter_customers(customers: &[Customer], query: &str) -> Vec<Customer> {
    let needle = query.to_lowercase();
    customers
        .iter()
        .filter(|c| matches_query(c, &needle))
        .cloned()
        .collect()
}

/// Substring match over the three searchable fields. `needle` must already
/// be lowercased.
fn matches_query(customer: &Customer, needle: &str) -> bool {
    customer.first_name.to_lowercase().contains(needle)
        || customer.last_name.to_lowercase().contains(needle)
        || customer.email.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use clientry_core::CustomerId;
    use clientry_test_utils::fixtures::{ann_and_bob, sample_customers};

    use super::*;

    #[test]
    fn query_an_matches_only_ann() {
        // "an" hits both Ann's first name and her email; Bob has no match.
        let visible = filter_customers(&ann_and_bob(), "an");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].user_id, CustomerId(1));
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let customers = sample_customers();
        let visible = filter_customers(&customers, "");
        assert_eq!(visible, customers);
    }

    #[test]
    fn unmatched_query_yields_empty_set() {
        assert!(filter_customers(&ann_and_bob(), "zz").is_empty());
    }

    #[test]
    fn match_is_case_insensitive() {
        let customers = ann_and_bob();
        assert_eq!(
            filter_customers(&customers, "ANN"),
            filter_customers(&customers, "ann")
        );
        assert_eq!(filter_customers(&customers, "BOB@X.COM").len(), 1);
    }

    #[test]
    fn last_name_participates_in_matching() {
        let visible = filter_customers(&sample_customers(), "okafor");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].first_name, "Dana");
    }

    #[test]
    fn email_only_match_is_included() {
        // "example.org" appears in Evan's email and nowhere else.
        let visible = filter_customers(&sample_customers(), "example.org");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].user_id, CustomerId(5));
    }

    mod properties {
        use chrono::{TimeZone, Utc};
        use clientry_core::Customer;
        use proptest::prelude::*;

        use super::*;

        fn arb_customer() -> impl Strategy<Value = Customer> {
            (
                any::<i64>(),
                "[A-Za-z]{0,8}",
                "[A-Za-z]{0,8}",
                "[a-z0-9.]{0,12}",
            )
                .prop_map(|(id, first, last, local)| Customer {
                    user_id: CustomerId(id),
                    first_name: first,
                    last_name: last,
                    email: format!("{local}@example.com"),
                    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                })
        }

        proptest! {
            #[test]
            fn visible_is_subset_in_order(
                customers in prop::collection::vec(arb_customer(), 0..12),
                query in "[A-Za-z@.]{0,6}",
            ) {
                let visible = filter_customers(&customers, &query);
                // Every visible record appears in the canonical set, and the
                // canonical order is preserved (subsequence check).
                let mut rest = customers.as_slice();
                for v in &visible {
                    let pos = rest.iter().position(|c| c == v);
                    prop_assert!(pos.is_some(), "visible record not in canonical order");
                    rest = &rest[pos.unwrap() + 1..];
                }
            }

            #[test]
            fn empty_query_is_identity(
                customers in prop::collection::vec(arb_customer(), 0..12),
            ) {
                prop_assert_eq!(filter_customers(&customers, ""), customers);
            }

            #[test]
            fn filtering_is_case_insensitive(
                customers in prop::collection::vec(arb_customer(), 0..12),
                query in "[A-Za-z]{0,6}",
            ) {
                prop_assert_eq!(
                    filter_customers(&customers, &query),
                    filter_customers(&customers, &query.to_uppercase())
                );
            }

            #[test]
            fn membership_iff_substring_match(
                customers in prop::collection::vec(arb_customer(), 0..12),
                query in "[A-Za-z]{0,6}",
            ) {
                let needle = query.to_lowercase();
                let visible = filter_customers(&customers, &query);
                for c in &customers {
                    let matches = c.first_name.to_lowercase().contains(&needle)
                        || c.last_name.to_lowercase().contains(&needle)
                        || c.email.to_lowercase().contains(&needle);
                    prop_assert_eq!(matches, visible.contains(c));
                }
            }
        }
    }
}
