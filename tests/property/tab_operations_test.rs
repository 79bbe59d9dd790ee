//! Property-based tests for Tab Manager operations.
//!
//! Random sequences of opening, closing, activating and reordering tabs must
//! never leave the manager without a tab or with a dangling active index.

use arkbrowser::engine::headless::HeadlessEngine;
use arkbrowser::managers::tab_manager::TabManager;
use arkbrowser::services::profile::BrowserProfile;
use proptest::prelude::*;

const HOME: &str = "https://home.test/";

#[derive(Debug, Clone)]
enum Op {
    Add,
    Close(usize),
    Activate(usize),
    Reorder(usize, usize),
    Navigate(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..8).prop_map(Op::Close),
        (0usize..8).prop_map(Op::Activate),
        (0usize..8, 0usize..8).prop_map(|(a, b)| Op::Reorder(a, b)),
        any::<u8>().prop_map(Op::Navigate),
    ]
}

fn new_manager() -> TabManager {
    TabManager::new(HOME, BrowserProfile::default().shared(), Box::new(HeadlessEngine::new()))
}

// **Property 1: At least one tab, always a valid active tab**
//
// *For any* sequence of tab operations, the manager SHALL hold at least one
// tab, the active index SHALL be in range and the address bar SHALL show the
// active tab once events are pumped.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tab_invariants_hold(ops in proptest::collection::vec(arb_op(), 1..40)) {
        let mut mgr = new_manager();
        let mut expected_count = 1usize;

        for op in ops {
            let order = mgr.tab_order();
            match op {
                Op::Add => {
                    let id = mgr.add_tab(None);
                    expected_count += 1;
                    prop_assert_eq!(mgr.current(), id);
                }
                Op::Close(i) => {
                    let id = order[i % order.len()];
                    prop_assert!(mgr.close_tab(id));
                    if expected_count > 1 {
                        expected_count -= 1;
                        prop_assert!(!mgr.tab_order().contains(&id));
                    } else {
                        prop_assert_eq!(mgr.current_session().target_url(), HOME);
                    }
                }
                Op::Activate(i) => {
                    let id = order[i % order.len()];
                    prop_assert!(mgr.activate(id));
                    prop_assert_eq!(mgr.current(), id);
                }
                Op::Reorder(i, to) => {
                    let before = mgr.current();
                    let id = order[i % order.len()];
                    let moved = mgr.reorder_tab(id, to);
                    prop_assert_eq!(moved, to < order.len());
                    prop_assert_eq!(mgr.current(), before);
                }
                Op::Navigate(n) => {
                    let url = format!("https://page{}.test/", n);
                    prop_assert_eq!(mgr.navigate(&url), Some(url.clone()));
                }
            }

            prop_assert_eq!(mgr.tab_count(), expected_count);
            prop_assert!(mgr.tab_count() >= 1);
            prop_assert!(mgr.active_index() < mgr.tab_count());
            prop_assert_eq!(mgr.tab_order()[mgr.active_index()], mgr.current());

            mgr.pump_events();
            let current_url = mgr.current_session().url().to_string();
            prop_assert_eq!(mgr.address_bar(), current_url.as_str());
            prop_assert_eq!(mgr.progress(), None);
        }
    }
}

// **Property 2: Display titles never exceed the label limit**
//
// *For any* page title, the tab label SHALL be at most 20 characters and SHALL
// equal the title whenever the title already fits.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn display_title_fits_limit(title in "\\PC{0,60}") {
        let shown = arkbrowser::types::tab::display_title(&title);
        prop_assert!(shown.chars().count() <= 20);
        if title.chars().count() <= 20 {
            prop_assert_eq!(shown, title);
        } else {
            prop_assert!(shown.ends_with("..."));
        }
    }
}
