//! List command handler

use cooked_calculator::catalog::Catalog;

/// Print every subject in the catalog, one per line
pub fn run(catalog: &Catalog) {
    if catalog.is_empty() {
        eprintln!("✗ No degrees available. Check the catalog path with `cooked config get catalog`.");
        return;
    }

    for subject in catalog.subjects() {
        println!("{subject}");
    }
    cooked_calculator::verbose!("\n{} degrees", catalog.len());
}
