//! Model <-> entity mappers

mod like;
