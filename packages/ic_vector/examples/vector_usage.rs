//! Basic usage example for `Vector`.
//!
//! Appends past the initial capacity to show the growth step at work, then edits, sorts and
//! searches the contents.

use ic_vector::Vector;

fn main() {
    let mut vector = Vector::new(2).expect("a non-zero growth step is a valid configuration");

    println!("Created vector with capacity: {}", vector.capacity());

    for value in [23, 5, 42, 17] {
        vector.append(value);
        println!(
            "Appended {value}, length {} capacity {}",
            vector.len(),
            vector.capacity()
        );
    }

    vector
        .insert(8, 1)
        .expect("position 1 is within the vector");
    let old = vector
        .replace(0, 30)
        .expect("position 0 is within the vector");
    println!("Replaced {old} with 30");

    vector.sort(Some(i32::cmp));

    match vector.search(Some(&42), i32::cmp, 0, true) {
        Ok(position) => println!("Found 42 at position {position}"),
        Err(error) => println!("Search failed: {error}"),
    }

    vector.dispose();
}
