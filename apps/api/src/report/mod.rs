// Report API: accepts one student record and returns the rendered PDF.
// Layout and serialization live in crate::layout; this module is HTTP glue only.

pub mod handlers;
