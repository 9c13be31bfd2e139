//! Basic usage example for `List`.
//!
//! Builds a short list from both ends and walks it through the positions returned by `nth()`.

use ic_list::List;

fn main() {
    let mut list = List::new();

    list.append("python");
    list.append("ruby");
    list.prepend("lisp");

    println!("List has {} elements", list.len());
    println!("First: {:?}", list.first());
    println!("Last: {:?}", list.last());

    let mut node = list.nth(0);
    while let Some(current) = node {
        println!("Visiting {}", current.data());
        node = current.next();
    }

    // Positions past the end yield nothing.
    assert!(list.nth(list.len()).is_none());

    list.destroy();

    println!("List destroyed");
}
