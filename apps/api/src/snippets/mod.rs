// Ownership-scoped snippet access layer plus its HTTP handlers.
// Every operation resolves the caller before touching the store; records
// are only ever visible to and mutable by their owner.

pub mod handlers;
pub mod ops;
