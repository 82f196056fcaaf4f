#![macro_use]

/// Build a `SinglyLinkedList` holding the given values in order.
#[macro_export]
macro_rules! sllist {
    () => {
        $crate::SinglyLinkedList::new()
    };
    ( $( $x:expr ),+ $(,)? ) => {
        ::std::vec![$($x),+]
            .into_iter()
            .collect::<$crate::SinglyLinkedList<_>>()
    };
}

#[cfg(test)]
mod tests {
    use crate::SinglyLinkedList;

    #[test]
    fn builds_in_order() {
        let l = sllist![3, 1, 2];
        assert_eq!("3 -> 1 -> 2", l.to_string());
        let e: SinglyLinkedList<u8> = sllist![];
        assert!(e.is_empty());
    }
}
