//! Types used throughout the transfer scheduler.

/// Number of fraction digits a fee is rounded to when a record is written out.
/// Rounding happens only at the persistence boundary, never inside the
/// fee calculation.
pub const FEE_SCALE: u32 = 2;

/// Record ID type, a unique identifier assigned by the store on creation.
pub type RecordId = u64;
