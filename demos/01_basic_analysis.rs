//! Basic Content Analysis
//!
//! The minimal example: analyze a document and page through its word counts.
//!
//! ```bash
//! cargo run --example 01_basic_analysis
//! ```

use wordtally::{analyze, Direction, PageSize, Paginator, NOT_AVAILABLE};

fn main() {
    let document = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming. \
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.";

    let analysis = analyze(document);

    match analysis.nth_character {
        Ok(c) => println!("15th character: {c:?}"),
        Err(e) => println!("15th character: {NOT_AVAILABLE} ({e})"),
    }
    println!("Every 15th character: {:?}\n", analysis.sample);

    // Show word counts 10 per page, most frequent first
    let page_size = PageSize::new(10).expect("10 is a valid page size");
    let mut paginator = Paginator::new(page_size);
    paginator.install_table(analysis.frequency_table);

    loop {
        let page = paginator.current_page();
        println!("{page}");
        for row in &page.items {
            println!("  {row}");
        }
        if !paginator.advance(Direction::Next) {
            break;
        }
    }
}
