pub mod event;
pub mod invoice;
pub mod payment;
