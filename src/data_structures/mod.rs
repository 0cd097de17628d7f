pub mod bounded_queue;
pub mod cancellation;

pub use bounded_queue::{bounded, Consumer, Producer};
pub use cancellation::Cancellation;
