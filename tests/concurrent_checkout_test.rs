use lending_registry::{Borrower, Catalog, ItemDetails};
use std::sync::Barrier;
use std::thread;

#[test]
fn test_racing_checkouts_have_one_winner() {
    let mut catalog = Catalog::new();
    catalog.add_item(ItemDetails::new("Beloved", "Toni Morrison", 1987));
    let item = catalog.find_item("Beloved").unwrap();

    const THREADS: usize = 16;
    let barrier = Barrier::new(THREADS);

    let borrowers: Vec<Borrower> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let barrier = &barrier;
                s.spawn(move || {
                    let mut borrower = Borrower::new(format!("borrower-{}", i));
                    barrier.wait();
                    let _ = borrower.checkout_item(item);
                    borrower
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let holders = borrowers.iter().filter(|b| b.holds(item.id())).count();
    assert_eq!(holders, 1);
    assert!(!item.is_available());
}
