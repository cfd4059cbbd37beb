//! Demonstration driver: exercises the queue with sample task data.

use indexed_pq::{PriorityQueue, QueueError};

fn main() -> Result<(), QueueError> {
    println!("Building an integer queue from parallel task/priority vectors");
    let tasks = vec![45, 65, 23, 78, 90, 11, 64, 76, 27, 55];
    let priorities = vec![3, 1, 7, 3, 2, 10, 5, 8, 6, 4];
    let mut first = PriorityQueue::from_parallel(tasks, priorities);
    print!("{first}");
    println!("Size of the queue: {}", first.len());

    println!();
    println!("Deleting two tasks with minimal priorities");
    println!("First deleted: {}", first.delete_min()?);
    println!("Second deleted: {}", first.delete_min()?);
    print!("{first}");
    println!("Size of the queue: {}", first.len());

    println!();
    println!("Now the minimal-priority task is: {}", first.find_min()?);

    println!("Changing priority of 90 to 1 (90 was deleted, so this reinserts it)");
    first.update_priority(90, 1)?;
    println!("Changing priority of 23 to 8");
    first.update_priority(23, 8)?;
    print!("{first}");

    println!();
    println!("Inserting task 24 with priority 12, 100 with priority 1, 33 with priority 5");
    first.insert(24, 12)?;
    first.insert(100, 1)?;
    first.insert(33, 5)?;
    print!("{first}");
    println!("Size of the queue: {}", first.len());

    println!();
    println!("Is the queue empty: {}", first.is_empty());
    println!("Emptying the queue");
    first.make_empty();
    println!("Is the queue empty: {}", first.is_empty());

    println!();
    println!("Constructing an empty character queue and filling it by insertions:");
    let mut second = PriorityQueue::with_capacity(16);
    for (priority, id) in ('a'..='o').enumerate() {
        second.insert(id, priority as i64 + 1)?;
    }
    print!("{second}");
    println!("Size of the queue: {}", second.len());

    println!();
    println!("Deleting three tasks with minimal priorities");
    println!("First deleted: {}", second.delete_min()?);
    println!("Second deleted: {}", second.delete_min()?);
    println!("Third deleted: {}", second.delete_min()?);
    print!("{second}");
    println!("Size of the queue: {}", second.len());

    println!();
    println!("Now the minimal-priority task is: {}", second.find_min()?);

    println!("Changing priority of 'n' to 25");
    second.update_priority('n', 25)?;
    println!("Changing priority of 'm' to 1");
    second.update_priority('m', 1)?;
    print!("{second}");

    println!();
    println!("Is the queue empty: {}", second.is_empty());
    println!("Emptying the queue");
    second.make_empty();
    println!("Is the queue empty: {}", second.is_empty());

    Ok(())
}
