//! The `categories` subcommand: print the static place-category catalog.

use nearby_core::categories;

pub(crate) fn run_categories() {
    for category in categories() {
        println!("{:<20} {:<18} {}", category.key, category.label, category.color);
    }
}
