use std::cell::RefCell;
use std::rc::Rc;

pub mod circular;
pub mod doubly;

pub use circular::CircularList;
pub use doubly::DoublyLinkedList;

// An unlinked node is held by exactly one strong reference, so the
// unwrap cannot fail.
fn into_inner<N>(node: Rc<RefCell<N>>) -> N {
    match Rc::try_unwrap(node) {
        Ok(cell) => cell.into_inner(),
        Err(_) => panic!("unlinked node still shared"),
    }
}
