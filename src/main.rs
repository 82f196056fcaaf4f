use sllist::SinglyLinkedList;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sllist=info")))
        .init();

    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    for i in 0..11 {
        list.append(i);
    }
    println!("{}", list);

    list.delete(&3)?;
    println!("Deleted data element: 3");
    println!("{}", list);

    for v in &[6, 10] {
        list.delete(v)?;
        println!("Deleted data element: {}", v);
    }
    println!("{}", list);

    list.insert_at(-1, 0)?;
    println!("{}", list);

    list.insert_at(55, 5)?;
    println!("{}", list);

    //second to last position
    let len = list.size();
    println!("Before insert at: {}, list size is: {}", len - 1, len);
    list.insert_at(99, len - 1)?;
    println!("{}", list);

    match list.search(&55) {
        Some(index) => println!("Index of 55 is: {}", index),
        None => tracing::warn!("55 is missing from the list"),
    }

    list.swap_by_value(&1, &7)?;
    println!("Swapped values 1 and 7:");
    println!("{}", list);

    let len = list.size();
    list.swap_by_index(0, len - 1)?;
    println!("Swapped first and last nodes:");
    println!("{}", list);

    tracing::info!(size = list.size(), "demo finished");
    Ok(())
}
