//! A list handle that can be shared across threads.
use crate::llist::SinglyLinkedList;
use spin::Mutex;
use std::sync::Arc;

/// One spin lock guarding a whole list.
///
/// The list has no synchronization of its own, every operation on a shared list happens with the
/// lock held.
pub type SharedList<T> = Arc<Mutex<SinglyLinkedList<T>>>;

impl<T> SinglyLinkedList<T> {
    pub fn into_shared(self) -> SharedList<T> {
        Arc::new(Mutex::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn append_from_threads() {
        let shared = SinglyLinkedList::new().into_shared();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let list = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        list.lock().append(t * 100 + i);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let list = shared.lock();
        assert_eq!(100, list.size());
        for t in 0..4 {
            //each thread's values keep their relative order
            let positions: Vec<usize> = (0..25)
                .map(|i| list.search(&(t * 100 + i)).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
